//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AdminConfig;
use crate::data::StudioData;

/// Application state shared across all handlers.
///
/// Cheap to clone; everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    pool: SqlitePool,
    data: StudioData,
}

impl AppState {
    /// Create the application state.
    #[must_use]
    pub fn new(config: AdminConfig, pool: SqlitePool, data: StudioData) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool, data }),
        }
    }

    /// Dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Session database pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Studio sample data.
    #[must_use]
    pub fn data(&self) -> &StudioData {
        &self.inner.data
    }
}

//! Session middleware configuration for the dashboard.
//!
//! Sets up sessions using tower-sessions with strict cookie settings
//! (SameSite=Strict, HttpOnly, 24hr inactivity expiry). Production uses the
//! `SQLite` store; tests can pass any other `SessionStore`.

use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};

use crate::config::AdminConfig;

/// Session cookie name for the dashboard.
pub const SESSION_COOKIE_NAME: &str = "studio_session";

/// Session expiry time in seconds (24 hours of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer over `store`.
///
/// # Arguments
///
/// * `store` - Session store (e.g. `SqliteStore` after migration)
/// * `config` - Dashboard configuration (for determining HTTPS mode)
#[must_use]
pub fn create_session_layer<S: SessionStore + Clone>(
    store: S,
    config: &AdminConfig,
) -> SessionManagerLayer<S> {
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}

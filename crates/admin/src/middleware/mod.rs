//! HTTP middleware stack for the dashboard.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request tracing with status and latency)
//! 3. Session layer (tower-sessions, `SQLite` store)
//! 4. Auth gate (`require_session`, protected routes only)

pub mod auth;
pub mod session;

pub use auth::{
    AdminAuthRejection, LOGIN_PATH, OptionalAdminAuth, RequireAdminAuth, require_session,
};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};

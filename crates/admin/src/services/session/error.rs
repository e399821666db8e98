//! Session service error types.

use thiserror::Error;

/// The per-visitor token store could not be read or written.
#[derive(Debug, Error)]
pub enum StorageError {
    /// tower-sessions backend error.
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Failure reported by a `TokenStore` backend other than tower-sessions.
    #[error("token store unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur during login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password did not match. No detail on which.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Credentials matched but the token could not be persisted.
    #[error("could not persist session: {0}")]
    Storage(#[from] StorageError),
}

//! Persisted auth token storage.

use std::future::Future;

use tower_sessions::Session;

use super::StorageError;
use crate::models::session_keys;

/// Durable per-visitor storage for the opaque auth token.
///
/// The production implementation is the visitor's tower-sessions
/// [`Session`]; the token lives under [`session_keys::AUTH_TOKEN`].
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    fn read(&self) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `token`, replacing any previous one.
    fn write(&self, token: &str) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Remove the stored token. Removing an absent token is not an error.
    fn delete(&self) -> impl Future<Output = Result<(), StorageError>> + Send;
}

impl TokenStore for Session {
    async fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.get::<String>(session_keys::AUTH_TOKEN).await?)
    }

    async fn write(&self, token: &str) -> Result<(), StorageError> {
        self.insert(session_keys::AUTH_TOKEN, token).await?;
        Ok(())
    }

    async fn delete(&self) -> Result<(), StorageError> {
        self.remove::<String>(session_keys::AUTH_TOKEN).await?;
        Ok(())
    }
}

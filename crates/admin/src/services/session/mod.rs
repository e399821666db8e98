//! Dashboard session service.
//!
//! A [`SessionManager`] is built for each request from the visitor's
//! [`TokenStore`]. It owns that visitor's [`AuthSession`] for the length of
//! the request and is the only thing that writes the persisted token.
//!
//! Sign-in is a mock: the single configured admin account is checked by
//! exact comparison, and any stored token restores that admin. Token
//! contents are never validated.

pub mod access;
mod error;
mod store;

pub use access::{Access, decide};
pub use error::{AuthError, StorageError};
pub use store::TokenStore;

use tracing::instrument;
use uuid::Uuid;

use studio_pro_core::Credential;

use crate::config::AdminAccountConfig;
use crate::models::{AuthSession, UserIdentity};

/// Per-visitor session state backed by a token store.
pub struct SessionManager<'a, S> {
    store: S,
    account: &'a AdminAccountConfig,
    session: AuthSession,
}

impl<'a, S: TokenStore> SessionManager<'a, S> {
    /// Rebuild the visitor's session from the persisted token.
    ///
    /// A non-empty token restores the admin identity; no token, an empty
    /// token, or an unreadable store all give a signed-out session.
    #[instrument(skip_all)]
    pub async fn restore(store: S, account: &'a AdminAccountConfig) -> Self {
        let token = match store.read().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read auth token; treating visitor as signed out");
                None
            }
        };

        let session = match token {
            Some(token) if !token.is_empty() => AuthSession::signed_in(account.identity()),
            _ => AuthSession::empty(),
        };

        Self {
            store,
            account,
            session,
        }
    }

    /// Sign in with `credential`.
    ///
    /// On success a fresh token is persisted and the identity returned. On
    /// mismatch nothing is written and the current session is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email or password is
    /// wrong, or `AuthError::Storage` if the token cannot be persisted.
    #[instrument(skip_all)]
    pub async fn login(&mut self, credential: &Credential) -> Result<UserIdentity, AuthError> {
        if !self.account.accepts(credential) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = Uuid::new_v4().to_string();
        self.store.write(&token).await?;

        let identity = self.account.identity();
        self.session = AuthSession::signed_in(identity.clone());
        tracing::info!(admin_id = %identity.id, "Admin signed in");

        Ok(identity)
    }

    /// Sign out. Signing out twice is fine.
    ///
    /// The in-memory session is cleared even if the token cannot be removed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the token cannot be removed.
    #[instrument(skip_all)]
    pub async fn logout(&mut self) -> Result<(), StorageError> {
        let was_signed_in = self.session.is_authenticated();
        self.session = AuthSession::empty();
        self.store.delete().await?;

        if was_signed_in {
            tracing::info!("Admin signed out");
        }
        Ok(())
    }

    /// The current session.
    #[must_use]
    pub const fn current_session(&self) -> &AuthSession {
        &self.session
    }

    /// Consume the manager, keeping only the session.
    #[must_use]
    pub fn into_session(self) -> AuthSession {
        self.session
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use tower_sessions::{MemoryStore, Session};

    use studio_pro_core::AdminRole;

    use super::*;
    use crate::config::AdminConfig;

    fn config() -> AdminConfig {
        AdminConfig::from_lookup(|_| None).unwrap()
    }

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    fn admin_credential() -> Credential {
        Credential::new("admin@yourstudio.com", "password")
    }

    /// Token store whose reads and writes can be made to fail.
    #[derive(Default)]
    struct FlakyStore {
        token: std::sync::Mutex<Option<String>>,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
    }

    impl TokenStore for &FlakyStore {
        async fn read(&self) -> Result<Option<String>, StorageError> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StorageError::Unavailable("read refused".to_string()));
            }
            Ok(self.token.lock().unwrap().clone())
        }

        async fn write(&self, token: &str) -> Result<(), StorageError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::Unavailable("write refused".to_string()));
            }
            *self.token.lock().unwrap() = Some(token.to_string());
            Ok(())
        }

        async fn delete(&self) -> Result<(), StorageError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::Unavailable("delete refused".to_string()));
            }
            *self.token.lock().unwrap() = None;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_restore_without_token_is_empty() {
        let config = config();
        let manager = SessionManager::restore(session(), config.admin()).await;

        assert!(!manager.current_session().is_authenticated());
        assert_eq!(decide(manager.current_session()), Access::RedirectToLogin);
    }

    #[tokio::test]
    async fn test_login_success() {
        let config = config();
        let session = session();
        let mut manager = SessionManager::restore(session.clone(), config.admin()).await;

        let identity = manager.login(&admin_credential()).await.unwrap();

        assert_eq!(identity.id, "1");
        assert_eq!(identity.display_name, "Your Name");
        assert_eq!(identity.email.as_str(), "admin@yourstudio.com");
        assert_eq!(identity.role, AdminRole::Admin);
        assert_eq!(manager.current_session().identity(), Some(&identity));

        let token = session.read().await.unwrap();
        assert!(token.is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_login_wrong_password_leaves_token_untouched() {
        let config = config();
        let session = session();
        let mut manager = SessionManager::restore(session.clone(), config.admin()).await;

        let err = manager
            .login(&Credential::new("admin@yourstudio.com", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(session.read().await.unwrap(), None);
        assert!(!manager.current_session().is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let config = config();
        let session = session();
        session.write("existing").await.unwrap();
        let mut manager = SessionManager::restore(session.clone(), config.admin()).await;

        let err = manager
            .login(&Credential::new("intruder@yourstudio.com", "password"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
        assert!(manager.current_session().is_authenticated());
        assert_eq!(session.read().await.unwrap().as_deref(), Some("existing"));
    }

    #[tokio::test]
    async fn test_login_is_repeatable() {
        let config = config();
        let session = session();
        let mut manager = SessionManager::restore(session.clone(), config.admin()).await;

        let first = manager.login(&admin_credential()).await.unwrap();
        let second = manager.login(&admin_credential()).await.unwrap();

        assert_eq!(first, second);
        assert!(session.read().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_logout_then_restore_is_empty() {
        let config = config();
        let session = session();
        let mut manager = SessionManager::restore(session.clone(), config.admin()).await;
        manager.login(&admin_credential()).await.unwrap();

        manager.logout().await.unwrap();
        assert!(!manager.current_session().is_authenticated());
        assert_eq!(session.read().await.unwrap(), None);

        let restored = SessionManager::restore(session, config.admin()).await;
        assert!(!restored.current_session().is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let config = config();
        let mut manager = SessionManager::restore(session(), config.admin()).await;

        manager.logout().await.unwrap();
        manager.logout().await.unwrap();
        assert!(!manager.current_session().is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_accepts_any_non_empty_token() {
        let config = config();

        for token in ["demo-token", "x", "not-a-uuid-at-all"] {
            let session = session();
            session.write(token).await.unwrap();

            let manager = SessionManager::restore(session, config.admin()).await;
            let identity = manager.current_session().identity().unwrap();
            assert_eq!(identity, &config.admin().identity(), "token {token:?}");
        }
    }

    #[tokio::test]
    async fn test_restore_ignores_empty_token() {
        let config = config();
        let session = session();
        session.write("").await.unwrap();

        let manager = SessionManager::restore(session, config.admin()).await;
        assert!(!manager.current_session().is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_after_login_in_another_request() {
        let config = config();
        let session = session();

        let mut first = SessionManager::restore(session.clone(), config.admin()).await;
        let identity = first.login(&admin_credential()).await.unwrap();
        drop(first);

        let second = SessionManager::restore(session, config.admin()).await;
        assert_eq!(second.into_session(), AuthSession::signed_in(identity));
    }

    #[tokio::test]
    async fn test_unreadable_store_restores_empty() {
        let config = config();
        let store = FlakyStore::default();
        *store.token.lock().unwrap() = Some("demo-token".to_string());
        store.fail_reads.store(true, Ordering::SeqCst);

        let manager = SessionManager::restore(&store, config.admin()).await;
        assert!(!manager.current_session().is_authenticated());
    }

    #[tokio::test]
    async fn test_unwritable_store_fails_login() {
        let config = config();
        let store = FlakyStore::default();
        store.fail_writes.store(true, Ordering::SeqCst);
        let mut manager = SessionManager::restore(&store, config.admin()).await;

        let err = manager.login(&admin_credential()).await.unwrap_err();

        assert!(matches!(err, AuthError::Storage(_)));
        assert!(!manager.current_session().is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_memory_even_when_delete_fails() {
        let config = config();
        let store = FlakyStore::default();
        let mut manager = SessionManager::restore(&store, config.admin()).await;
        manager.login(&admin_credential()).await.unwrap();

        store.fail_writes.store(true, Ordering::SeqCst);
        assert!(manager.logout().await.is_err());
        assert!(!manager.current_session().is_authenticated());
    }
}

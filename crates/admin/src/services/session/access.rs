//! Page access decision.
//!
//! Every protected route asks [`decide`] once, from the
//! `require_session` middleware. Handlers never check the session
//! themselves.

use crate::models::{AuthSession, UserIdentity};

/// Outcome of the access check for a protected page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Signed in; render the page for this identity.
    Granted(UserIdentity),
    /// Signed out; send the visitor to the login page.
    RedirectToLogin,
}

/// Decide whether `session` may see a protected page.
#[must_use]
pub fn decide(session: &AuthSession) -> Access {
    session
        .identity()
        .cloned()
        .map_or(Access::RedirectToLogin, Access::Granted)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use studio_pro_core::{AdminRole, Email};

    use super::*;

    #[test]
    fn test_empty_session_redirects() {
        assert_eq!(decide(&AuthSession::empty()), Access::RedirectToLogin);
    }

    #[test]
    fn test_signed_in_session_is_granted() {
        let identity = UserIdentity {
            id: "1".to_string(),
            display_name: "Your Name".to_string(),
            email: Email::parse("admin@yourstudio.com").unwrap(),
            role: AdminRole::Admin,
        };

        assert_eq!(
            decide(&AuthSession::signed_in(identity.clone())),
            Access::Granted(identity)
        );
    }
}

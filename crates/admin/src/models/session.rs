//! Session-related types for dashboard authentication.

use serde::{Deserialize, Serialize};

use studio_pro_core::{AdminRole, Email};

/// The signed-in administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Identity ID.
    pub id: String,
    /// Display name used in greetings and the navigation bar.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Admin's email address.
    pub email: Email,
    /// Admin's role.
    pub role: AdminRole,
}

/// Authentication state of one visitor.
///
/// Either empty (signed out) or holding the signed-in identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthSession {
    identity: Option<UserIdentity>,
}

impl AuthSession {
    /// A signed-out session.
    #[must_use]
    pub const fn empty() -> Self {
        Self { identity: None }
    }

    /// A session for `identity`.
    #[must_use]
    pub const fn signed_in(identity: UserIdentity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    /// The signed-in identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    /// Whether someone is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Session keys for dashboard authentication data.
pub mod keys {
    /// Key under which the opaque auth token is persisted.
    pub const AUTH_TOKEN: &str = "auth_token";
}

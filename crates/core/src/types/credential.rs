//! Login credential submitted by the presentation layer.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};

/// An email/password pair supplied at login time.
///
/// Credentials are ephemeral: they are checked and dropped, never stored.
/// The email is kept as the raw submitted string (not an [`Email`]) because
/// the login check is an exact comparison and malformed input must simply
/// fail that comparison rather than error earlier.
///
/// `Debug` redacts the password.
///
/// [`Email`]: crate::Email
#[derive(Clone)]
pub struct Credential {
    /// Submitted email address, untrimmed.
    pub email: String,
    /// Submitted password.
    pub password: SecretString,
}

impl Credential {
    /// Create a credential from raw form input.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Returns the submitted password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credential = Credential::new("admin@yourstudio.com", "hunter2-studio");
        let debug_output = format!("{credential:?}");

        assert!(debug_output.contains("admin@yourstudio.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("hunter2-studio"));
    }

    #[test]
    fn test_email_is_not_normalized() {
        let credential = Credential::new(" Admin@YourStudio.com ", "password");
        assert_eq!(credential.email, " Admin@YourStudio.com ");
        assert_eq!(credential.password(), "password");
    }
}

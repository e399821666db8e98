//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults give a working local demo.
//!
//! - `STUDIO_HOST` - Bind address (default: 127.0.0.1)
//! - `STUDIO_PORT` - Listen port (default: 3001)
//! - `STUDIO_BASE_URL` - Public URL for the dashboard (default: `http://localhost:3001`)
//! - `STUDIO_DATABASE_URL` - `SQLite` URL for the session store, falls back to
//!   `DATABASE_URL` (default: `sqlite://studio_sessions.db?mode=rwc`)
//! - `STUDIO_NAME` - Studio name shown in greetings (default: Your Studio Name)
//! - `STUDIO_ADMIN_EMAIL` - Admin login email (default: admin@yourstudio.com)
//! - `STUDIO_ADMIN_NAME` - Admin display name (default: Your Name)
//! - `STUDIO_ADMIN_PASSWORD` - Admin login password (default: password)
//! - `STUDIO_DATA_PATH` - JSON file replacing the embedded sample data
//! - `STUDIO_LOG_FORMAT` - `json` for structured logs, anything else for text
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT`, `SENTRY_SAMPLE_RATE`, `SENTRY_TRACES_SAMPLE_RATE`

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

use studio_pro_core::{AdminRole, Credential, Email};

use crate::models::UserIdentity;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3001";
const DEFAULT_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_DATABASE_URL: &str = "sqlite://studio_sessions.db?mode=rwc";
const DEFAULT_STUDIO_NAME: &str = "Your Studio Name";
const DEFAULT_ADMIN_ID: &str = "1";
const DEFAULT_ADMIN_EMAIL: &str = "admin@yourstudio.com";
const DEFAULT_ADMIN_NAME: &str = "Your Name";
const DEFAULT_ADMIN_PASSWORD: &str = "password";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "password",
    "changeme",
    "secret",
    "letmein",
    "admin",
    "qwerty",
    "123456",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// `SQLite` URL for the session store
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the dashboard
    pub base_url: Url,
    /// Studio name used in greetings
    pub studio_name: String,
    /// The single administrator account
    pub admin: AdminAccountConfig,
    /// Replacement sample data file
    pub data_path: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// The administrator account that may sign in.
///
/// This is a fixed demo account: the password is compared as-is and the
/// identity handed out on login and restore is always the same.
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminAccountConfig {
    /// Identity ID reported for the admin
    pub id: String,
    /// Admin display name
    pub name: String,
    /// Admin login email
    pub email: Email,
    /// Admin login password
    pub password: SecretString,
}

impl std::fmt::Debug for AdminAccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccountConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AdminAccountConfig {
    /// The identity of a signed-in admin.
    #[must_use]
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id.clone(),
            display_name: self.name.clone(),
            email: self.email.clone(),
            role: AdminRole::Admin,
        }
    }

    /// Whether `credential` is exactly this account's email and password.
    ///
    /// Both comparisons are case-sensitive and untrimmed.
    #[must_use]
    pub fn accepts(&self, credential: &Credential) -> bool {
        credential.email == self.email.as_str()
            && credential.password() == self.password.expose_secret()
    }

    /// Why the configured password is weak, if it is.
    ///
    /// The default demo password is always weak; callers log this rather
    /// than refuse to start.
    #[must_use]
    pub fn password_weakness(&self) -> Option<String> {
        check_password_strength(self.password.expose_secret()).err()
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let email = env_or_default(lookup, "STUDIO_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL);
        let email = Email::parse(&email)
            .map_err(|e| ConfigError::InvalidEnvVar("STUDIO_ADMIN_EMAIL".to_string(), e.to_string()))?;

        let password = env_or_default(lookup, "STUDIO_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD);
        if password.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "STUDIO_ADMIN_PASSWORD".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: DEFAULT_ADMIN_ID.to_string(),
            name: env_or_default(lookup, "STUDIO_ADMIN_NAME", DEFAULT_ADMIN_NAME),
            email,
            password: SecretString::from(password),
        })
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = env_or_default(&lookup, "STUDIO_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STUDIO_HOST".to_string(), e.to_string()))?;
        let port = env_or_default(&lookup, "STUDIO_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STUDIO_PORT".to_string(), e.to_string()))?;
        let base_url = Url::parse(&env_or_default(&lookup, "STUDIO_BASE_URL", DEFAULT_BASE_URL))
            .map_err(|e| ConfigError::InvalidEnvVar("STUDIO_BASE_URL".to_string(), e.to_string()))?;

        let database_url = lookup("STUDIO_DATABASE_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let log_format = match lookup("STUDIO_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            database_url: SecretString::from(database_url),
            host,
            port,
            base_url,
            studio_name: env_or_default(&lookup, "STUDIO_NAME", DEFAULT_STUDIO_NAME),
            admin: AdminAccountConfig::from_lookup(&lookup)?,
            data_path: lookup("STUDIO_DATA_PATH").map(PathBuf::from),
            log_format,
            sentry_dsn: lookup("SENTRY_DSN"),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_rate(&lookup, "SENTRY_SAMPLE_RATE"),
            sentry_traces_sample_rate: parse_rate(&lookup, "SENTRY_TRACES_SAMPLE_RATE"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the dashboard is served over HTTPS (secure cookies).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.scheme() == "https"
    }

    /// Returns a reference to the admin account configuration.
    #[must_use]
    pub const fn admin(&self) -> &AdminAccountConfig {
        &self.admin
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn env_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Parse a sample rate, defaulting to 1.0.
fn parse_rate(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> f32 {
    lookup(key).and_then(|s| s.parse().ok()).unwrap_or(1.0)
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Check that a password is not a placeholder and has reasonable entropy.
fn check_password_strength(password: &str) -> Result<(), String> {
    let lower = password.to_lowercase();

    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(**p)) {
        return Err(format!("contains '{pattern}'"));
    }

    let entropy = shannon_entropy(password);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(format!(
            "entropy {entropy:.2} bits/char, want >= {MIN_ENTROPY_BITS_PER_CHAR:.1}"
        ));
    }

    Ok(())
}

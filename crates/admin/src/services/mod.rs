//! Business logic services for the dashboard.
//!
//! # Services
//!
//! - `session` - Mock admin sign-in, session restore and the page access decision

pub mod session;

pub use session::{Access, AuthError, SessionManager, StorageError, TokenStore};

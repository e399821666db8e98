//! Studio Pro Core - Shared types library.
//!
//! This crate provides common types used across all Studio Pro components:
//! - `admin` - The studio management dashboard (HTML pages and JSON API)
//! - `cli` - Command-line tools for the session database and directory search
//!
//! # Architecture
//!
//! The core crate contains only types, traits and pure functions - no I/O,
//! no database access, no HTTP. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, money, emails, credentials and statuses
//! - [`directory`] - Member and lead records plus the directory search filter

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod directory;
pub mod types;

pub use directory::{DirectoryEntry, DirectoryRecord, Lead, Member, filter};
pub use types::*;

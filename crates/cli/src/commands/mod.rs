//! CLI subcommands.

pub mod data;
pub mod directory;
pub mod migrate;

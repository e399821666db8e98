//! Studio Pro CLI - Session database and studio data tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the session table in the session database
//! studio-cli migrate
//!
//! # Search the member directory
//! studio-cli directory members jane
//!
//! # Search leads in a replacement data file, as JSON
//! studio-cli directory leads davi --data ./studio.json --json
//!
//! # Validate a replacement data file
//! studio-cli data check ./studio.json
//! ```
//!
//! # Commands
//!
//! - `migrate` - Create the tower-sessions table
//! - `directory` - Run the directory search over members or leads
//! - `data check` - Parse and validate a studio data file

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser)]
#[command(name = "studio-cli")]
#[command(author, version, about = "Studio Pro CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the session table in the session database
    Migrate,
    /// Search the CRM directory
    Directory {
        /// Which collection to search
        #[arg(value_enum)]
        collection: Collection,

        /// Search text (matches name or email, case-insensitive)
        #[arg(default_value = "")]
        query: String,

        /// Studio data file (defaults to `STUDIO_DATA_PATH`, then the embedded sample)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Studio data file tools
    Data {
        #[command(subcommand)]
        action: DataAction,
    },
}

/// Directory collections.
#[derive(Clone, Copy, ValueEnum)]
pub enum Collection {
    Members,
    Leads,
}

#[derive(Subcommand)]
enum DataAction {
    /// Parse and validate a studio data file
    Check {
        /// Path to the JSON file
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::session_store().await?,
        Commands::Directory {
            collection,
            query,
            data,
            json,
        } => commands::directory::search(collection, &query, data, json)?,
        Commands::Data { action } => match action {
            DataAction::Check { path } => commands::data::check(&path)?,
        },
    }
    Ok(())
}

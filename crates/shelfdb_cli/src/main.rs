//! shelfdb CLI
//!
//! Command-line tools for working with shelfdb stores.
//!
//! # Commands
//!
//! - `collections` - List the collections in a store
//! - `inspect` - Display store statistics
//! - `get` - Print one document
//! - `create` - Create a new document (fails if it exists)
//! - `set` - Apply a partial update, creating the document if absent
//! - `delete` - Delete one document
//! - `drop` - Delete a whole collection
//! - `find` - List documents matching a pattern

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// shelfdb command-line store tools.
#[derive(Parser)]
#[command(name = "shelfdb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the store root directory
    #[arg(global = true, short, long, default_value = "db")]
    root: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the collections in the store
    Collections,

    /// Display store statistics
    Inspect {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print one document
    Get {
        /// Collection name
        collection: String,
        /// Document id
        id: String,
    },

    /// Create a new document; fails if the id already exists
    Create {
        /// Collection name
        collection: String,
        /// Document id
        id: String,
        /// Document fields as a JSON object
        data: String,
    },

    /// Apply a partial update, creating the document if absent
    Set {
        /// Collection name
        collection: String,
        /// Document id
        id: String,
        /// Partial record as a JSON object
        data: String,
    },

    /// Delete one document
    Delete {
        /// Collection name
        collection: String,
        /// Document id
        id: String,
    },

    /// Delete a whole collection and every document in it
    Drop {
        /// Collection name
        collection: String,
    },

    /// List documents matching a pattern
    Find {
        /// Collection name
        collection: String,
        /// Partial record as a JSON object; every field must match
        pattern: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Collections => commands::collections::run(&cli.root)?,
        Commands::Inspect { format } => commands::inspect::run(&cli.root, &format)?,
        Commands::Get { collection, id } => commands::get::run(&cli.root, &collection, &id)?,
        Commands::Create {
            collection,
            id,
            data,
        } => commands::create::run(&cli.root, &collection, &id, &data)?,
        Commands::Set {
            collection,
            id,
            data,
        } => commands::set::run(&cli.root, &collection, &id, &data)?,
        Commands::Delete { collection, id } => {
            commands::delete::run(&cli.root, &collection, &id)?;
        }
        Commands::Drop { collection } => commands::drop::run(&cli.root, &collection)?,
        Commands::Find {
            collection,
            pattern,
        } => commands::find::run(&cli.root, &collection, &pattern)?,
    }

    Ok(())
}

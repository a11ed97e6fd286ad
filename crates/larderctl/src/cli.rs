//! CLI - command-line argument parsing.
//!
//! Defines the larderctl CLI structure using clap. Keeps argument parsing
//! separate from execution logic.

use clap::{Parser, Subcommand};

/// Larder CLI
#[derive(Parser)]
#[command(name = "larderctl")]
#[command(about = "Larder - ingredient catalog and recipe matching", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the ingredient catalog with a free-text query
    Search {
        query: String,

        /// Maximum number of suggestions to print
        #[arg(long)]
        limit: Option<usize>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Resolve an ingredient phrase to its canonical catalog name
    Normalize {
        name: String,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },

    /// Check whether two ingredient phrases refer to the same ingredient
    /// (exits 1 when they do not)
    Match { a: String, b: String },

    /// List catalog categories, or the entries of one category
    Categories {
        name: Option<String>,

        /// Output JSON only
        #[arg(long)]
        json: bool,
    },
}

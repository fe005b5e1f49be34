//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Keyword used when none is given
pub const DEFAULT_KEYWORD: &str = "haddock";

#[derive(Parser, Debug)]
#[command(name = "cheatset")]
#[command(about = "Cheatsheet content model for docset generators", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Built-in cheatsheet to outline (e.g., haddock)
    #[arg(value_name = "KEYWORD")]
    pub keyword: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List built-in cheatsheets
    List,

    /// Show the outline of a cheatsheet
    Show {
        /// Built-in cheatsheet keyword
        #[arg(default_value = DEFAULT_KEYWORD)]
        keyword: String,

        /// Load a TOML or JSON declaration file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print every (category, entry) pair in order, tab-separated
    Entries {
        /// Built-in cheatsheet keyword
        #[arg(default_value = DEFAULT_KEYWORD)]
        keyword: String,

        /// Load a TOML or JSON declaration file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Print the notes of one entry
    Entry {
        /// Entry name (case-insensitive)
        name: String,

        /// Built-in cheatsheet keyword
        #[arg(short, long, default_value = DEFAULT_KEYWORD)]
        keyword: String,

        /// Load a TOML or JSON declaration file instead
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Export a cheatsheet declaration for a docset generator
    Export {
        /// Built-in cheatsheet keyword
        #[arg(default_value = DEFAULT_KEYWORD)]
        keyword: String,

        /// Load a TOML or JSON declaration file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format (toml, json); defaults to CHEATSET_FORMAT or toml
        #[arg(long)]
        format: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a declaration file
    Validate {
        /// TOML or JSON declaration file
        path: PathBuf,
    },
}

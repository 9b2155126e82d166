//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotebook")]
#[command(about = "Quote manager with remote sync", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quotebook
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Remote endpoint to sync with
        #[arg(long)]
        remote_url: Option<String>,
    },

    /// Show a random quote
    Show {
        /// Category to pick from, or "all" (default: last used)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a quote
    Add {
        /// Quote text
        text: String,

        /// Quote category
        category: String,
    },

    /// List quotes
    List {
        /// Category to list, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// List categories in order of first use
    Categories,

    /// Replace local quotes with the remote collection
    Sync,

    /// Keep syncing on a fixed interval until interrupted
    Watch {
        /// Seconds between syncs (default: sync_interval_secs from config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Export all quotes to a JSON file
    Export {
        #[arg(default_value = "quotes.json")]
        path: PathBuf,
    },

    /// Append quotes from a JSON file
    Import { path: PathBuf },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

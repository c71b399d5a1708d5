//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todofile")]
#[command(about = "To-do list stored in a plain JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new list
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Data directory, relative to the list root unless absolute
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Backing file name inside the data directory
        #[arg(long)]
        filename: Option<String>,
    },

    /// Add a record
    Add {
        /// Record text (at most 200 characters)
        text: String,

        #[arg(short, long)]
        category: Option<String>,

        /// Mark as completed right away
        #[arg(long)]
        done: bool,
    },

    /// List records
    List {
        /// Number of matching records to skip
        #[arg(long, default_value_t = 0)]
        skip: usize,

        /// Maximum number of records to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Only records in this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Only completed records
        #[arg(long, conflicts_with = "pending")]
        done: bool,

        /// Only records not yet completed
        #[arg(long)]
        pending: bool,
    },

    /// Show a single record as JSON
    Show { id: u64 },

    /// Edit a record
    Edit {
        id: u64,

        #[arg(short, long)]
        text: Option<String>,

        #[arg(short, long, conflicts_with = "clear_category")]
        category: Option<String>,

        /// Remove the category
        #[arg(long)]
        clear_category: bool,
    },

    /// Mark a record completed
    Done { id: u64 },

    /// Mark a record not completed
    Undo { id: u64 },

    /// Flip a record's completed flag
    Toggle { id: u64 },

    /// Remove a record
    #[command(alias = "remove")]
    Rm { id: u64 },

    /// Remove all completed records
    Clear,

    /// Validate every record in a JSON array file
    Check {
        /// File to check (default: the list's backing file)
        file: Option<PathBuf>,
    },

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

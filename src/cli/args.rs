//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--input <file>` / `-i`: Read the JSON array from a file instead of stdin
//! - `--cwd <path>`: Directory searched for `pippi.toml`
//! - `--pretty`: Indent JSON output
//! - `--format <json|lines>`: Output format
//! - `--seed <n>`: Pin shuffle/random
//! - `--debug`: Trace pipeline steps on stderr
//! - `--quiet` / `-q`: Results only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pippi - chainable collection operations over JSON arrays
#[derive(Parser, Debug)]
#[command(name = "pippi")]
#[command(
    author,
    version,
    about = "Pippi - chainable collection operations over JSON arrays",
    long_about = None
)]
pub struct Cli {
    /// Read input from this file instead of stdin
    #[arg(short, long, global = true, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory searched for pippi.toml
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Output format (json or lines)
    #[arg(long, global = true, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Seed for shuffle and random
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print results only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    // ========== Inspection ==========
    /// Print the number of elements
    Count,

    /// Print the first element
    First,

    /// Print the last element
    Last,

    /// Print the element at an index
    Get {
        /// Zero-based index; negative or out-of-range prints null
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },

    // ========== Transformation ==========
    /// Keep elements whose field equals a value
    #[command(
        name = "where",
        after_help = "\
EXAMPLES:
    # Active users only
    pippi -i users.json where active true

    # Everyone except Bob
    pippi -i users.json where name Bob --not"
    )]
    Where {
        /// Field path (dot separated)
        key: String,

        /// Value to compare against, parsed as JSON when possible
        value: String,

        /// Drop matching elements instead of keeping them
        #[arg(long)]
        not: bool,
    },

    /// Extract one field from every element
    Pluck {
        /// Field path (dot separated)
        key: String,
    },

    /// Concatenate nested arrays into one
    Flatten,

    /// Split into elements that have a truthy field and the rest
    Partition {
        /// Field path (dot separated)
        key: String,
    },

    /// Group elements by a field
    #[command(name = "group-by")]
    GroupBy {
        /// Field path (dot separated)
        key: String,
    },

    // ========== Ordering ==========
    /// Reverse element order
    Reverse,

    /// Stable sort
    Sort {
        /// Sort by this field instead of the element itself
        #[arg(long)]
        key: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Keep the first N elements (negative: the last |N|)
    Take {
        #[arg(allow_negative_numbers = true)]
        n: isize,
    },

    /// Drop the first N elements
    Skip {
        #[arg(allow_negative_numbers = true)]
        n: isize,
    },

    /// Keep elements from START up to END (exclusive)
    Slice {
        #[arg(allow_negative_numbers = true)]
        start: isize,
        #[arg(allow_negative_numbers = true)]
        end: isize,
    },

    /// Split into arrays of at most SIZE elements
    Chunk {
        #[arg(allow_negative_numbers = true)]
        size: isize,
    },

    /// Shuffle elements
    Shuffle,

    /// Print one random element
    Random,

    // ========== Aggregation ==========
    /// Drop duplicate elements
    Unique {
        /// Compare by this field instead of the whole element
        #[arg(long)]
        key: Option<String>,
    },

    /// Sum numbers (or a numeric field)
    Sum {
        #[arg(long)]
        key: Option<String>,
    },

    /// Average numbers (or a numeric field); empty input averages to 0
    Avg {
        #[arg(long)]
        key: Option<String>,
    },

    /// Element with the smallest number (or numeric field)
    Min {
        #[arg(long)]
        key: Option<String>,
    },

    /// Element with the largest number (or numeric field)
    Max {
        #[arg(long)]
        key: Option<String>,
    },

    /// Render elements joined by a separator
    Join {
        /// Separator (defaults to the configured separator)
        #[arg(long)]
        separator: Option<String>,

        /// Render this field instead of the whole element
        #[arg(long)]
        key: Option<String>,
    },

    // ========== Set algebra ==========
    /// Elements not present in another array
    Diff {
        /// JSON array to compare against
        #[arg(long = "with", value_name = "FILE")]
        other: PathBuf,
    },

    /// Distinct elements also present in another array
    Intersect {
        #[arg(long = "with", value_name = "FILE")]
        other: PathBuf,
    },

    /// Distinct elements of both arrays
    Union {
        #[arg(long = "with", value_name = "FILE")]
        other: PathBuf,
    },

    // ========== Utilities ==========
    /// Directory helpers
    Dirs {
        #[command(subcommand)]
        action: DirsAction,
    },

    /// Show resolved configuration
    Config,

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    pippi completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    pippi completion zsh >> ~/.zshrc"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Directory subcommands
#[derive(Subcommand, Debug)]
pub enum DirsAction {
    /// Create a directory and its parents
    Ensure { path: PathBuf },
    /// Remove a directory tree
    Remove { path: PathBuf },
    /// List immediate subdirectories
    List { path: PathBuf },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

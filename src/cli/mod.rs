//! cli
//!
//! Command-line interface layer for pippi.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Merge flags over the loaded configuration into a [`Context`]
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers load the input document, run one
//! [`Collection`](crate::collection::Collection) operation and render the
//! result through [`document`].

pub mod args;
pub mod commands;
pub mod document;

pub use args::{Cli, Command, DirsAction, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::config::schema::VALID_FORMATS;
use crate::config::Config;
use crate::ui::output::{self, Verbosity};

/// Resolved settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Input file; stdin when absent
    pub input: Option<PathBuf>,
    /// Indent JSON output
    pub pretty: bool,
    /// Output format: "json" or "lines"
    pub format: String,
    /// Seed for shuffle/random
    pub seed: Option<u64>,
    /// Separator for join
    pub separator: String,
    pub debug: bool,
    pub quiet: bool,
}

impl Context {
    /// Build a context from configuration, letting CLI flags win.
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        Self {
            input: cli.input.clone(),
            pretty: cli.pretty || config.pretty(),
            format: cli
                .format
                .clone()
                .unwrap_or_else(|| config.format().to_string()),
            seed: cli.seed.or(config.seed()),
            separator: config.separator().to_string(),
            debug: cli.debug,
            quiet: cli.quiet,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

    let project_dir = match &cli.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine working directory")?,
    };
    let loaded = Config::load(Some(&project_dir)).context("Failed to load configuration")?;
    for source in &loaded.sources {
        output::debug(format!("config: {}", source.display()), verbosity);
    }

    let ctx = Context::from_cli(&cli, &loaded.config);
    if !VALID_FORMATS.contains(&ctx.format.as_str()) {
        anyhow::bail!(
            "Unknown output format '{}' (expected one of: {})",
            ctx.format,
            VALID_FORMATS.join(", ")
        );
    }

    commands::dispatch(cli.command, &ctx, &loaded.config)
}

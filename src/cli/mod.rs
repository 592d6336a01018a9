//! cli
//!
//! Command-line interface layer for Tagtree.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Handlers hold the single source-of-truth tree value per document
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! command handlers. Handlers load the document, apply pure core operations
//! (each returning a new root), store the result, and persist via the
//! atomic document writer or the tree store.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::Result;

use crate::core::config::Config;
use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags and configuration.
#[derive(Debug, Clone)]
pub struct Context {
    /// Document file override from `--file`.
    pub file: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Loaded configuration.
    pub config: Config,
}

impl Context {
    /// Output verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// The document file this invocation operates on.
    ///
    /// `--file` wins; otherwise the configured default.
    pub fn document_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.config.default_document()))
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = Config::load()?;
    let ctx = Context {
        file: cli.file.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        config,
    };

    // Dispatch to command handler
    commands::dispatch(cli.command, &ctx)
}

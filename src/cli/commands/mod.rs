//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Loads the document and applies pure core operations
//! 3. Persists the result and formats output
//!
//! Handlers never mutate a tree in place; every edit replaces the
//! document's tree with the operation's returned root.
//!
//! # Async Commands
//!
//! Server commands (list, pull, save, status) are async because they
//! involve network I/O. Their public functions are synchronous wrappers
//! that build a tokio runtime and `block_on` the async implementation.

mod add;
mod completion;
mod config_cmd;
mod data;
mod delete;
mod export;
mod list;
mod new;
mod pull;
mod rename;
mod replace;
mod save;
mod show;
mod status;

// Re-export command functions for testing and direct invocation
pub use add::add;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use data::data;
pub use delete::delete;
pub use export::export;
pub use list::list;
pub use new::new;
pub use pull::pull;
pub use rename::rename;
pub use replace::replace;
pub use save::save;
pub use show::show;
pub use status::status;

use std::path::PathBuf;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::core::document::Document;
use crate::core::path::TreePath;
use anyhow::{Context as _, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        // Document commands
        Command::New { name, force } => new::new(ctx, &name, force),
        Command::Show { depth } => show::show(ctx, depth),

        // Edit commands
        Command::Add { path } => add::add(ctx, &path),
        Command::Rename { path, name } => rename::rename(ctx, &path, &name),
        Command::Data { path, data } => data::data(ctx, &path, &data),
        Command::Delete { path, index } => delete::delete(ctx, &path, index),
        Command::Replace { path, json, from } => {
            replace::replace(ctx, &path, json.as_deref(), from.as_deref())
        }

        // Export / status
        Command::Export => export::export(ctx),
        Command::Status { local } => status::status(ctx, local),

        // Server commands
        Command::List => list::list(ctx),
        Command::Pull { id, force } => pull::pull(ctx, id, force),
        Command::Save => save::save(ctx),

        // Setup commands
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Load the document this invocation operates on.
///
/// Returns the resolved path alongside the document so handlers can write
/// back to the same file.
fn load_document(ctx: &Context) -> Result<(PathBuf, Document)> {
    let path = ctx.document_path();
    let doc = Document::load(&path).with_context(|| {
        format!(
            "No document at '{}'. Run 'tt new' to create one.",
            path.display()
        )
    })?;
    Ok((path, doc))
}

/// Parse a CLI path argument.
fn parse_path(input: &str) -> Result<TreePath> {
    input
        .parse()
        .with_context(|| format!("Invalid path '{input}'"))
}

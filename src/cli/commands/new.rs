//! new command - Create a fresh document

use crate::cli::Context;
use crate::ui::output;
use anyhow::{bail, Result};

use crate::core::document::Document;

/// Create a fresh document holding the editing seed.
pub fn new(ctx: &Context, name: &str, force: bool) -> Result<()> {
    let path = ctx.document_path();

    if path.exists() && !force {
        bail!(
            "Document '{}' already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let doc = Document::new_seed(name);
    doc.save(&path)?;

    output::success(
        format!("Created '{}' with empty root '{}'.", path.display(), name),
        ctx.verbosity(),
    );
    Ok(())
}

//! show command - Display the tree

use crate::cli::Context;
use anyhow::Result;

use super::load_document;
use crate::ui::render::render_tree;

/// Display the document's tree with per-node paths.
pub fn show(ctx: &Context, depth: Option<usize>) -> Result<()> {
    let (_, doc) = load_document(ctx)?;
    let root = doc.live_tree()?;

    print!("{}", render_tree(&root, depth));
    Ok(())
}

//! add command - Append a default child

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

use super::{load_document, parse_path};
use crate::core::ops;

/// Append a new default child to the node at `path`.
pub fn add(ctx: &Context, path: &str) -> Result<()> {
    let (doc_path, mut doc) = load_document(ctx)?;
    let target = parse_path(path)?;

    let root = doc.live_tree()?;
    let was_leaf = ops::node_at(&root, &target).is_some_and(|n| n.is_leaf());

    let root = ops::add_child(&root, &target)?;
    doc.set_tree(&root);
    doc.save(&doc_path)?;

    if was_leaf {
        output::success(
            format!("Converted '{target}' to a parent and added a child."),
            ctx.verbosity(),
        );
    } else {
        output::success(format!("Added a child under '{target}'."), ctx.verbosity());
    }
    Ok(())
}

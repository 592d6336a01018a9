//! delete command - Delete a child of a node

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

use super::{load_document, parse_path};
use crate::core::ops;

/// Delete the child at `index` from the parent at `path`.
pub fn delete(ctx: &Context, path: &str, index: usize) -> Result<()> {
    let (doc_path, mut doc) = load_document(ctx)?;
    let target = parse_path(path)?;

    let root = doc.live_tree()?;
    let root = ops::delete_child(&root, &target, index)?;

    let collapsed = ops::node_at(&root, &target).is_some_and(|n| n.is_leaf());

    doc.set_tree(&root);
    doc.save(&doc_path)?;

    if collapsed {
        output::success(
            format!("Deleted child {index}; '{target}' collapsed to a leaf."),
            ctx.verbosity(),
        );
    } else {
        output::success(
            format!("Deleted child {index} of '{target}'."),
            ctx.verbosity(),
        );
    }
    Ok(())
}

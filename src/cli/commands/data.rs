//! data command - Set a leaf's payload

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

use super::{load_document, parse_path};
use crate::core::ops;

/// Replace the payload of the leaf at `path`, verbatim.
pub fn data(ctx: &Context, path: &str, payload: &str) -> Result<()> {
    let (doc_path, mut doc) = load_document(ctx)?;
    let target = parse_path(path)?;

    let root = doc.live_tree()?;
    let root = ops::set_leaf_data(&root, &target, payload)?;
    doc.set_tree(&root);
    doc.save(&doc_path)?;

    output::success(format!("Set payload of '{target}'."), ctx.verbosity());
    Ok(())
}

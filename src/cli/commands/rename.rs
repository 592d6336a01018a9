//! rename command - Rename a node

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

use super::{load_document, parse_path};
use crate::core::node::coerce_name;
use crate::core::ops;

/// Rename the node at `path`, applying the trim/fallback coercion.
pub fn rename(ctx: &Context, path: &str, name: &str) -> Result<()> {
    let (doc_path, mut doc) = load_document(ctx)?;
    let target = parse_path(path)?;

    let root = doc.live_tree()?;
    let root = ops::rename(&root, &target, name)?;
    doc.set_tree(&root);
    doc.save(&doc_path)?;

    let applied = coerce_name(name);
    if applied != name {
        output::warn(format!("Name coerced to '{applied}'."), ctx.verbosity());
    }
    output::success(
        format!("Renamed '{target}' to '{applied}'."),
        ctx.verbosity(),
    );
    Ok(())
}

//! replace command - Replace a subtree wholesale

use std::io::Read;
use std::path::Path;

use crate::cli::Context;
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

use super::{load_document, parse_path};
use crate::core::canonical::{decanonicalize, CanonicalNode};
use crate::core::ops;

/// Replace the node at `path` with a subtree given as canonical JSON.
pub fn replace(
    ctx: &Context,
    path: &str,
    json: Option<&str>,
    from: Option<&Path>,
) -> Result<()> {
    let (doc_path, mut doc) = load_document(ctx)?;
    let target = parse_path(path)?;

    let raw = match (json, from) {
        (Some(inline), None) => inline.to_string(),
        (None, Some(file)) if file.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read replacement from stdin")?;
            buf
        }
        (None, Some(file)) => std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read '{}'", file.display()))?,
        _ => bail!("Provide the replacement via --json or --from."),
    };

    let canonical: CanonicalNode =
        serde_json::from_str(&raw).context("Replacement is not canonical tree JSON")?;
    let subtree = decanonicalize(&canonical)?;

    let root = doc.live_tree()?;
    let root = ops::replace_subtree(&root, &target, &subtree)?;
    doc.set_tree(&root);
    doc.save(&doc_path)?;

    output::success(format!("Replaced subtree at '{target}'."), ctx.verbosity());
    Ok(())
}

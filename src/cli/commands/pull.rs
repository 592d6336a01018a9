//! pull command - Fetch a server tree into the document

use crate::cli::Context;
use crate::ui::output;
use anyhow::{bail, Result};

use crate::core::document::Document;
use crate::store::http::HttpTreeStore;
use crate::store::TreeStore;

/// Fetch the server tree with `id` and write it to the document file.
///
/// This is a synchronous wrapper that uses tokio to run the async
/// implementation.
pub fn pull(ctx: &Context, id: u64, force: bool) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(pull_async(ctx, id, force))
}

async fn pull_async(ctx: &Context, id: u64, force: bool) -> Result<()> {
    let path = ctx.document_path();
    if path.exists() && !force {
        bail!(
            "Document '{}' already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let store = HttpTreeStore::new(ctx.config.server_url());
    let record = store.get(id).await?;

    // Validate the fetched shape before writing anything
    let doc = Document::from_server(record.id, record.data);
    doc.live_tree()?;
    doc.save(&path)?;

    output::success(
        format!("Pulled tree {} into '{}'.", record.id, path.display()),
        ctx.verbosity(),
    );
    Ok(())
}

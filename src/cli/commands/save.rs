//! save command - Save the document to the server
//!
//! # Design
//!
//! The save is transactional from the document's point of view: the file
//! is rewritten only after the server acknowledges, so a failed save
//! leaves the local document exactly as it was - no partial id or tree
//! update. One save is in flight at a time; the handler awaits resolution
//! before touching anything.

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

use super::load_document;
use crate::store::http::HttpTreeStore;
use crate::store::TreeStore;

/// Save the document's canonical tree to the server.
///
/// This is a synchronous wrapper that uses tokio to run the async
/// implementation.
pub fn save(ctx: &Context) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(save_async(ctx))
}

async fn save_async(ctx: &Context) -> Result<()> {
    let (doc_path, mut doc) = load_document(ctx)?;
    let store = HttpTreeStore::new(ctx.config.server_url());

    // Re-canonicalize through the live tree so hand-edited documents are
    // normalized before they reach the server.
    let canonical = crate::core::canonical::canonicalize(&*doc.live_tree()?);

    let record = match doc.id {
        Some(id) => {
            output::debug(format!("updating tree {id}"), ctx.verbosity());
            store.update(id, &canonical).await?
        }
        None => {
            output::debug("creating new tree", ctx.verbosity());
            store.create(&canonical).await?
        }
    };

    // The server's copy is authoritative: adopt its id and tree together,
    // only now that the request has succeeded.
    let created = doc.id.is_none();
    doc.id = Some(record.id);
    let server_tree = crate::core::canonical::decanonicalize(&record.data)?;
    doc.set_tree(&server_tree);
    doc.save(&doc_path)?;

    if created {
        output::success(
            format!("Created tree {} on the server.", record.id),
            ctx.verbosity(),
        );
    } else {
        output::success(
            format!("Updated tree {} on the server.", record.id),
            ctx.verbosity(),
        );
    }
    Ok(())
}

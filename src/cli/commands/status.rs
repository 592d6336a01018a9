//! status command - Show document id, fingerprint, and server linkage

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

use super::load_document;
use crate::core::canonical::canonicalize;
use crate::core::types::Fingerprint;
use crate::store::http::HttpTreeStore;
use crate::store::{StoreError, TreeStore};

/// Show the document's status.
///
/// This is a synchronous wrapper that uses tokio to run the async
/// implementation.
pub fn status(ctx: &Context, local: bool) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(status_async(ctx, local))
}

async fn status_async(ctx: &Context, local: bool) -> Result<()> {
    let (doc_path, doc) = load_document(ctx)?;

    let canonical = canonicalize(&*doc.live_tree()?);
    let local_fp = Fingerprint::compute(&canonical);

    println!("Document:    {}", doc_path.display());
    match doc.id {
        Some(id) => println!("Server id:   {id}"),
        None => println!("Server id:   (unsaved)"),
    }
    println!("Fingerprint: {}", local_fp.short(12));

    if local {
        return Ok(());
    }

    let Some(id) = doc.id else {
        output::print(
            "Never saved; run 'tt save' to create it on the server.",
            ctx.verbosity(),
        );
        return Ok(());
    };

    let store = HttpTreeStore::new(ctx.config.server_url());
    match store.get(id).await {
        Ok(record) => {
            let server_fp = Fingerprint::compute(&record.data);
            if server_fp == local_fp {
                println!("Server:      in sync");
            } else {
                println!("Server:      diverged (server {})", server_fp.short(12));
            }
        }
        Err(StoreError::NotFound(_)) => {
            output::warn(
                format!("Tree {id} no longer exists on the server."),
                ctx.verbosity(),
            );
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

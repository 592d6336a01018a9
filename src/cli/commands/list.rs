//! list command - List trees stored on the server

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

use crate::store::http::HttpTreeStore;
use crate::store::TreeStore;

/// List all trees stored on the server.
///
/// This is a synchronous wrapper that uses tokio to run the async
/// implementation.
pub fn list(ctx: &Context) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(list_async(ctx))
}

async fn list_async(ctx: &Context) -> Result<()> {
    let store = HttpTreeStore::new(ctx.config.server_url());
    output::debug(
        format!("listing trees from {}", store.base_url()),
        ctx.verbosity(),
    );

    let records = store.list().await?;

    if records.is_empty() {
        output::print("No trees on the server.", ctx.verbosity());
        return Ok(());
    }

    for record in records {
        println!("{:>6}  {}", record.id, record.data.name);
    }
    Ok(())
}

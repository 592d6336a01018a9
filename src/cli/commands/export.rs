//! export command - Print the canonical tree as pretty JSON

use crate::cli::Context;
use anyhow::Result;

use super::load_document;
use crate::core::canonical::{canonicalize, to_pretty_json};

/// Print the canonical form of the document's tree.
pub fn export(ctx: &Context) -> Result<()> {
    let (_, doc) = load_document(ctx)?;

    // The stored tree is already canonical; re-deriving it from the live
    // tree keeps the output correct even if the file was edited by hand.
    let root = doc.live_tree()?;
    let canonical = canonicalize(&root);

    println!("{}", to_pretty_json(&canonical));
    Ok(())
}

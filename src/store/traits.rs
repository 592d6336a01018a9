//! store::traits
//!
//! TreeStore trait definition for the remote tree store.
//!
//! # Design
//!
//! The `TreeStore` trait is async because store operations involve network
//! I/O. All methods return `Result` to handle API errors gracefully.
//!
//! Store adapters:
//! - Receive only canonical trees (callers canonicalize before every call)
//! - May fail without compromising local correctness: a failed save leaves
//!   the caller's document untouched
//! - Return the server's copy of the tree, which is authoritative after a
//!   successful save
//!
//! Callers must issue at most one in-flight save per tree slot: a second
//! save for the same tree before the prior one resolves risks an older
//! server-assigned id or server-normalized value overwriting a newer local
//! edit. There is no cancellation; await resolution before retrying.
//!
//! # Example
//!
//! ```ignore
//! use tagtree::store::{TreeStore, StoreError};
//! use tagtree::core::canonical::CanonicalNode;
//!
//! async fn first_save(store: &dyn TreeStore, tree: &CanonicalNode) -> Result<u64, StoreError> {
//!     let record = store.create(tree).await?;
//!     println!("Saved tree {}", record.id);
//!     Ok(record.id)
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::canonical::CanonicalNode;

/// Errors from tree store operations.
///
/// These are the recoverable class of failures: expected in normal
/// operation and reported to the user, unlike tree edit errors which
/// signal caller bugs.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The requested tree was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The server returned a body this client could not interpret.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A stored tree: the server-assigned id plus the canonical tree data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRecord {
    /// Server-assigned identifier.
    pub id: u64,
    /// The tree in canonical form, as the server holds it.
    pub data: CanonicalNode,
}

/// The TreeStore trait for the remote tree store.
///
/// v1 implements the HTTP backend; [`MockTreeStore`] provides a
/// deterministic in-memory implementation for tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// All methods return `Result<T, StoreError>`. Callers should handle:
/// - `NotFound`: the tree id doesn't exist on the server
/// - `ApiError`: display status and message to the user
/// - `NetworkError`: check connectivity
/// - `InvalidResponse`: the server and client disagree about the protocol
///
/// [`MockTreeStore`]: crate::store::mock::MockTreeStore
#[async_trait]
pub trait TreeStore: Send + Sync {
    /// Get the store name (e.g., "http", "mock").
    fn name(&self) -> &'static str;

    /// List all stored trees.
    async fn list(&self) -> Result<Vec<TreeRecord>, StoreError>;

    /// Get a single tree by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no tree has this id
    async fn get(&self, id: u64) -> Result<TreeRecord, StoreError>;

    /// Create a new tree and return it with its server-assigned id.
    ///
    /// The returned record's `data` is the server's copy and may differ
    /// from what was sent (server-side normalization); it is authoritative.
    async fn create(&self, data: &CanonicalNode) -> Result<TreeRecord, StoreError>;

    /// Update an existing tree.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no tree has this id
    async fn update(&self, id: u64, data: &CanonicalNode) -> Result<TreeRecord, StoreError>;
}

//! store
//!
//! Abstraction for the remote tree store.
//!
//! # Architecture
//!
//! The `TreeStore` trait defines the interface for persisting canonical
//! trees. Commands construct the HTTP implementation from the configured
//! server URL; tests use the mock.
//!
//! Contract highlights:
//! - Only canonical trees cross this boundary (callers canonicalize first)
//! - A store failure never corrupts local state; the caller applies the
//!   server's response only after success
//! - At most one in-flight save per tree slot
//!
//! # Modules
//!
//! - `traits`: Core `TreeStore` trait, `TreeRecord`, and `StoreError`
//! - [`http`]: HTTP implementation against the tree store REST API
//! - [`mock`]: Mock implementation for deterministic testing
//!
//! # Example
//!
//! ```ignore
//! use tagtree::store::{http::HttpTreeStore, TreeStore};
//!
//! let store = HttpTreeStore::new("http://localhost:8000/trees");
//! for record in store.list().await? {
//!     println!("tree {}: {}", record.id, record.data.name);
//! }
//! ```

pub mod http;
pub mod mock;
mod traits;

pub use traits::*;

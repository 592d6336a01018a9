//! Tagtree - A Rust-native CLI for editing nested tagged trees
//!
//! Tagtree is a single-binary tool for building, editing, and persisting
//! labeled trees where every node is either a parent holding an ordered list
//! of children or a leaf holding a single string payload - never both.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`core`] - Domain types, pure edit operations, canonical form, documents
//! - [`store`] - Abstraction for the remote tree store (HTTP backend v1)
//! - [`ui`] - Output formatting and tree rendering
//!
//! # Correctness Invariants
//!
//! Tagtree maintains the following invariants:
//!
//! 1. A node holds children or a data payload, never both, never neither
//! 2. Every edit is a pure function: the previous root is never mutated
//! 3. Edits rebuild only the path to the target; all other subtrees are shared
//! 4. A failed save leaves the local document exactly as it was

pub mod cli;
pub mod core;
pub mod store;
pub mod ui;

//! core
//!
//! Core domain types, schemas, and operations for Tagtree.
//!
//! # Modules
//!
//! - [`node`] - The tagged tree's node type (parent xor leaf)
//! - [`path`] - Positional addressing by child indices
//! - [`ops`] - Pure, invariant-preserving edit operations
//! - [`canonical`] - The minimal persisted/exported tree form
//! - [`document`] - Working document schema and storage
//! - [`types`] - Strong types: UtcTimestamp, Fingerprint
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - The node variant is an explicit discriminant; invalid shapes cannot
//!   be represented in memory
//! - Every edit is pure and rebuilds only the path to its target
//! - Canonicalization is deterministic
//! - Schemas are strict and self-describing

pub mod canonical;
pub mod config;
pub mod document;
pub mod node;
pub mod ops;
pub mod path;
pub mod types;

//! core::document
//!
//! The working document: one edited tree per file.
//!
//! # Schema Design
//!
//! A document is the CLI's per-tree slot, persisted as JSON so editing
//! survives across invocations. It is:
//! - Self-describing with `kind` and `schema_version`
//! - Strictly parsed (unknown fields rejected)
//! - Written atomically (temp file + rename)
//!
//! The stored tree is the canonical form; loading decanonicalizes it, which
//! is also where malformed shapes are rejected. The `id` field is the
//! server-assigned identifier and is absent for never-saved documents.
//!
//! # Example
//!
//! ```
//! use tagtree::core::document::{parse_document, Document, DOCUMENT_KIND};
//!
//! let doc = Document::new_seed("root");
//! assert_eq!(doc.kind, DOCUMENT_KIND);
//! assert!(doc.id.is_none());
//!
//! let json = serde_json::to_string(&doc).unwrap();
//! let parsed = parse_document(&json).unwrap();
//! assert_eq!(parsed.tree.name, "root");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

use crate::core::canonical::{canonicalize, decanonicalize, CanonicalNode};
use crate::core::node::Node;
use crate::core::ops::TreeError;
use crate::core::types::UtcTimestamp;

/// The kind identifier for tree documents.
pub const DOCUMENT_KIND: &str = "tagtree.document";

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors from document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read document '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write document '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse document: {0}")]
    ParseError(String),

    #[error("invalid kind '{found}', expected '{}'", DOCUMENT_KIND)]
    InvalidKind { found: String },

    #[error("unsupported schema version {0}, supported: {SCHEMA_VERSION}")]
    UnsupportedVersion(u32),

    #[error("document tree is malformed: {0}")]
    MalformedTree(#[from] TreeError),
}

/// Envelope for version dispatch before full parsing.
#[derive(Debug, Deserialize)]
struct DocumentEnvelope {
    kind: String,
    schema_version: u32,
}

/// Creation and last-modification times of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Timestamps {
    /// When the document was created.
    pub created_at: UtcTimestamp,
    /// When the document was last written.
    pub updated_at: UtcTimestamp,
}

/// A working document (v1).
///
/// Use [`parse_document`] to parse from JSON with validation, and
/// [`Document::save`] / [`Document::load`] for file round-trips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// Kind identifier (always "tagtree.document").
    pub kind: String,

    /// Schema version (always 1 for this struct).
    pub schema_version: u32,

    /// Server-assigned identifier; absent until the first successful save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The tree in canonical form.
    pub tree: CanonicalNode,

    /// Timestamps.
    pub timestamps: Timestamps,
}

impl Document {
    /// Create a fresh, never-saved document holding the editing seed
    /// (a root with no children).
    pub fn new_seed(root_name: impl Into<String>) -> Self {
        let now = UtcTimestamp::now();
        Self {
            kind: DOCUMENT_KIND.to_string(),
            schema_version: SCHEMA_VERSION,
            id: None,
            tree: canonicalize(&Node::seed(root_name)),
            timestamps: Timestamps {
                created_at: now.clone(),
                updated_at: now,
            },
        }
    }

    /// Create a document from a server record.
    pub fn from_server(id: u64, tree: CanonicalNode) -> Self {
        let now = UtcTimestamp::now();
        Self {
            kind: DOCUMENT_KIND.to_string(),
            schema_version: SCHEMA_VERSION,
            id: Some(id),
            tree,
            timestamps: Timestamps {
                created_at: now.clone(),
                updated_at: now,
            },
        }
    }

    /// Decanonicalize the stored tree into a live root.
    ///
    /// # Errors
    ///
    /// `DocumentError::MalformedTree` if the stored canonical data violates
    /// the leaf-xor-children shape.
    pub fn live_tree(&self) -> Result<Rc<Node>, DocumentError> {
        Ok(decanonicalize(&self.tree)?)
    }

    /// Replace the stored tree with the canonical form of `root` and bump
    /// the updated-at timestamp.
    pub fn set_tree(&mut self, root: &Node) {
        self.tree = canonicalize(root);
        self.timestamps.updated_at = UtcTimestamp::now();
    }

    /// Load a document from a file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let contents = fs::read_to_string(path).map_err(|e| DocumentError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        parse_document(&contents)
    }

    /// Write the document to a file atomically.
    ///
    /// Writes to a temp file in the same directory, syncs, then renames over
    /// the target, so a crash mid-write never leaves a torn document.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let contents =
            serde_json::to_string_pretty(self).map_err(|e| DocumentError::ParseError(e.to_string()))?;

        let temp_path = path.with_extension("json.tmp");
        let write_err = |source| DocumentError::WriteError {
            path: temp_path.clone(),
            source,
        };

        let mut file = fs::File::create(&temp_path).map_err(write_err)?;
        file.write_all(contents.as_bytes()).map_err(write_err)?;
        file.write_all(b"\n").map_err(write_err)?;
        file.sync_all().map_err(write_err)?;

        fs::rename(&temp_path, path).map_err(|e| DocumentError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}

/// Parse document JSON with version dispatch.
///
/// The envelope (`kind`, `schema_version`) is checked before the full
/// structure is parsed, and the stored tree is validated by
/// decanonicalization.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, the kind doesn't match, the
/// schema version is unsupported, or the tree violates leaf-xor-children.
pub fn parse_document(json: &str) -> Result<Document, DocumentError> {
    let envelope: DocumentEnvelope =
        serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string()))?;

    if envelope.kind != DOCUMENT_KIND {
        return Err(DocumentError::InvalidKind {
            found: envelope.kind,
        });
    }

    match envelope.schema_version {
        1 => {
            let doc: Document =
                serde_json::from_str(json).map_err(|e| DocumentError::ParseError(e.to_string()))?;
            // Validate the stored tree shape eagerly
            decanonicalize(&doc.tree)?;
            Ok(doc)
        }
        v => Err(DocumentError::UnsupportedVersion(v)),
    }
}

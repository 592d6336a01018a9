//! core::path
//!
//! Positional addressing of tree nodes.
//!
//! # Design
//!
//! Nodes carry no stable identifier; a [`TreePath`] addresses a node by the
//! sequence of zero-based child indices leading to it from the root. The
//! empty path addresses the root itself.
//!
//! The CLI syntax is `.` for the root and dot-separated indices otherwise
//! (`0.2.1` = second child of the third child of the first child of the
//! root). Paths are validated at construction time, so an invalid path
//! string cannot be represented.
//!
//! # Example
//!
//! ```
//! use tagtree::core::path::TreePath;
//!
//! let root: TreePath = ".".parse().unwrap();
//! assert!(root.is_root());
//!
//! let nested: TreePath = "0.2.1".parse().unwrap();
//! assert_eq!(nested.indices(), &[0, 2, 1]);
//! assert_eq!(nested.to_string(), "0.2.1");
//!
//! assert!("0.x.1".parse::<TreePath>().is_err());
//! assert!("".parse::<TreePath>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors from path parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path (use '.' for the root)")]
    Empty,

    #[error("invalid path segment '{0}': expected a zero-based child index")]
    InvalidSegment(String),
}

/// A path of child indices from the root to a node.
///
/// The empty path denotes the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TreePath(Vec<usize>);

impl TreePath {
    /// The root path (no indices).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from child indices.
    pub fn from_indices(indices: impl Into<Vec<usize>>) -> Self {
        Self(indices.into())
    }

    /// Whether this path addresses the root.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The child indices, root-first.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of indices (nesting depth of the addressed node).
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Extend this path with one more child index.
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Split into the first index and the remaining path, if any.
    pub fn split_first(&self) -> Option<(usize, TreePath)> {
        self.0
            .split_first()
            .map(|(first, rest)| (*first, TreePath(rest.to_vec())))
    }
}

impl FromStr for TreePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }
        if s == "." {
            return Ok(Self::root());
        }
        let indices = s
            .split('.')
            .map(|seg| {
                seg.parse::<usize>()
                    .map_err(|_| PathError::InvalidSegment(seg.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(indices))
    }
}

impl TryFrom<String> for TreePath {
    type Error = PathError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TreePath> for String {
    fn from(path: TreePath) -> Self {
        path.to_string()
    }
}

impl std::fmt::Display for TreePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, ".");
        }
        let rendered = self
            .0
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{rendered}")
    }
}

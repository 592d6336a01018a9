//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`UtcTimestamp`] - RFC3339 timestamp
//! - [`Fingerprint`] - Canonical tree hash for divergence detection

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::core::canonical::CanonicalNode;

/// A UTC timestamp in RFC3339 format.
///
/// # Example
///
/// ```
/// use tagtree::core::types::UtcTimestamp;
///
/// let now = UtcTimestamp::now();
/// println!("Current time: {}", now);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtcTimestamp(chrono::DateTime<chrono::Utc>);

impl UtcTimestamp {
    /// Create a timestamp for the current moment.
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Create a timestamp from a chrono DateTime.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self(dt)
    }

    /// Get the underlying datetime.
    pub fn as_datetime(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl std::fmt::Display for UtcTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// A stable hash over a tree's canonical form for divergence detection.
///
/// Used by `tt status` to tell whether the local document differs from the
/// last server-acknowledged state without fetching either side. Computed
/// over the compact canonical JSON, so two trees fingerprint equal exactly
/// when their canonical forms are equal. Child order participates in the
/// hash: order is semantic in a tagged tree.
///
/// # Example
///
/// ```
/// use tagtree::core::canonical::canonicalize;
/// use tagtree::core::node::Node;
/// use tagtree::core::types::Fingerprint;
///
/// let canonical = canonicalize(&Node::seed("root"));
///
/// // Same canonical form produces same fingerprint
/// let fp1 = Fingerprint::compute(&canonical);
/// let fp2 = Fingerprint::compute(&canonical);
/// assert_eq!(fp1, fp2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of a canonical tree.
    pub fn compute(canonical: &CanonicalNode) -> Self {
        let bytes = serde_json::to_vec(canonical).expect("canonical node serializes");
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Self(hex::encode(hasher.finalize()))
    }

    /// Get the fingerprint as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get an abbreviated form for display.
    pub fn short(&self, len: usize) -> &str {
        let end = len.min(self.0.len());
        &self.0[..end]
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

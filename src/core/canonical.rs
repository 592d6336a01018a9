//! core::canonical
//!
//! The minimal persisted/exported form of a tagged tree.
//!
//! # Design
//!
//! [`CanonicalNode`] is the wire and on-disk shape: a name plus *at most*
//! one of `children` or `data`, with absent fields omitted from the JSON
//! entirely. [`canonicalize`] derives it from a live tree; [`decanonicalize`]
//! is the validating inverse used wherever untrusted data (server responses,
//! document files) re-enters the model.
//!
//! Canonicalization rules:
//!
//! - Parent with non-empty children -> `{ name, children: [...] }`
//! - Leaf -> `{ name, data }` (the empty string is a payload, never dropped)
//! - Parent with empty children -> `{ name }` - the sole "empty" canonical
//!   shape, reachable only from the transient editing seed; it round-trips
//!
//! Recursion is depth-first, pre-order by child index, so output is
//! deterministic for a given input and export diffs are reproducible.
//!
//! # Example
//!
//! ```
//! use tagtree::core::canonical::{canonicalize, to_pretty_json};
//! use tagtree::core::node::Node;
//!
//! let seed = Node::seed("root");
//! let canonical = canonicalize(&seed);
//! assert_eq!(serde_json::to_string(&canonical).unwrap(), r#"{"name":"root"}"#);
//! ```

use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::core::node::Node;
use crate::core::ops::TreeError;

/// The minimal serialized shape of a node.
///
/// Parsing is strict (`deny_unknown_fields`), but a parsed value is not yet
/// trusted: JSON can spell a node carrying both `children` and `data`, which
/// [`decanonicalize`] rejects as malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanonicalNode {
    /// Display name of the node.
    pub name: String,

    /// Children, present only for a parent with at least one child.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CanonicalNode>>,

    /// Payload, present only for a leaf.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Derive the canonical form of a tree.
///
/// Non-destructive: the input is read, never mutated, and the output is a
/// fully separate structure.
pub fn canonicalize(node: &Node) -> CanonicalNode {
    match node {
        Node::Parent { name, children } => {
            if children.is_empty() {
                CanonicalNode {
                    name: name.clone(),
                    children: None,
                    data: None,
                }
            } else {
                CanonicalNode {
                    name: name.clone(),
                    children: Some(children.iter().map(|c| canonicalize(c)).collect()),
                    data: None,
                }
            }
        }
        Node::Leaf { name, data } => CanonicalNode {
            name: name.clone(),
            children: None,
            data: Some(data.clone()),
        },
    }
}

/// Rebuild a live tree from canonical data, validating shape.
///
/// The inverse of [`canonicalize`]:
///
/// - `{ name, children }` -> parent (an explicit empty children array is
///   normalized to the empty parent, same as the name-only shape)
/// - `{ name, data }` -> leaf
/// - `{ name }` -> empty parent (the editing seed shape)
///
/// # Errors
///
/// `TreeError::MalformedNode` if a node carries both `children` and `data` -
/// the leaf-xor-children violation that the in-memory [`Node`] cannot
/// represent.
pub fn decanonicalize(canonical: &CanonicalNode) -> Result<Rc<Node>, TreeError> {
    match (&canonical.children, &canonical.data) {
        (Some(_), Some(_)) => Err(TreeError::MalformedNode {
            name: canonical.name.clone(),
            reason: "carries both children and data".to_string(),
        }),
        (Some(children), None) => {
            let children = children
                .iter()
                .map(decanonicalize)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Rc::new(Node::Parent {
                name: canonical.name.clone(),
                children,
            }))
        }
        (None, Some(data)) => Ok(Rc::new(Node::Leaf {
            name: canonical.name.clone(),
            data: data.clone(),
        })),
        (None, None) => Ok(Rc::new(Node::Parent {
            name: canonical.name.clone(),
            children: Vec::new(),
        })),
    }
}

/// Render the canonical form as pretty-printed JSON.
///
/// This is the export surface: a pure function of the tree value, suitable
/// for display or copy.
pub fn to_pretty_json(canonical: &CanonicalNode) -> String {
    // CanonicalNode serialization cannot fail: no maps with non-string keys,
    // no non-finite floats.
    serde_json::to_string_pretty(canonical).expect("canonical node serializes")
}

//! core::ops
//!
//! Pure, invariant-preserving edit operations over a tagged tree.
//!
//! # Design
//!
//! Every operation takes an immutable root and a [`TreePath`] addressing the
//! target node, and returns a new root. The input root is never mutated: an
//! edit rebuilds exactly the nodes on the path from the root to the target,
//! and every untouched subtree is shared (`Rc` clone) between the old and
//! new root. Cost is O(depth), not O(size of tree), and the caller's
//! previous root remains a valid snapshot - which is what makes a plain
//! "replace the whole value" update protocol safe for a UI layer.
//!
//! # Error Handling
//!
//! [`TreeError`] values signal caller bugs (a path derived from a stale
//! tree, an operation applied to the wrong variant). They are surfaced
//! immediately and never silently repaired.
//!
//! # Example
//!
//! ```
//! use tagtree::core::node::Node;
//! use tagtree::core::ops::{add_child, delete_child, set_leaf_data};
//! use tagtree::core::path::TreePath;
//!
//! let root = Node::seed("root");
//! let root = add_child(&root, &TreePath::root()).unwrap();
//! let root = set_leaf_data(&root, &"0".parse().unwrap(), "hello").unwrap();
//! assert_eq!(root.children()[0].as_ref(), &Node::Leaf {
//!     name: "New Child".to_string(),
//!     data: "hello".to_string(),
//! });
//!
//! // Deleting the last child collapses the parent back to a leaf.
//! let root = delete_child(&root, &TreePath::root(), 0).unwrap();
//! assert!(root.is_leaf());
//! ```

use std::rc::Rc;
use thiserror::Error;

use crate::core::node::{coerce_name, Node};
use crate::core::path::TreePath;

/// Errors from tree edit operations.
///
/// These are local-programming-error class failures: a well-behaved caller
/// derives paths from the current tree's own shape and never triggers them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The path does not resolve to an existing node.
    #[error("path '{0}' does not resolve to a node")]
    InvalidPath(TreePath),

    /// The operation requires a leaf but the target is a parent.
    #[error("node at '{0}' is not a leaf")]
    NotALeaf(TreePath),

    /// The operation requires a parent but the target is a leaf.
    #[error("node at '{0}' is not a parent")]
    NotAParent(TreePath),

    /// A delete index is outside the target's children.
    #[error("child index {index} out of range ({len} children)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Wire or document data violates the leaf-xor-children shape.
    #[error("malformed node '{name}': {reason}")]
    MalformedNode { name: String, reason: String },
}

/// Rebuild the path from `node` down to the target, applying `apply` at the
/// target and sharing every sibling subtree unchanged.
fn rebuild_at(
    node: &Rc<Node>,
    remaining: &[usize],
    full_path: &TreePath,
    apply: &dyn Fn(&Rc<Node>) -> Result<Rc<Node>, TreeError>,
) -> Result<Rc<Node>, TreeError> {
    let Some((&index, rest)) = remaining.split_first() else {
        return apply(node);
    };

    let Node::Parent { name, children } = node.as_ref() else {
        return Err(TreeError::InvalidPath(full_path.clone()));
    };
    let child = children
        .get(index)
        .ok_or_else(|| TreeError::InvalidPath(full_path.clone()))?;

    let rebuilt_child = rebuild_at(child, rest, full_path, apply)?;
    let children = children
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == index {
                Rc::clone(&rebuilt_child)
            } else {
                Rc::clone(c)
            }
        })
        .collect();

    Ok(Rc::new(Node::Parent {
        name: name.clone(),
        children,
    }))
}

/// Resolve the node at `path`, if any.
///
/// Read-only companion to the edit operations: renderers and handlers use
/// it to inspect a node without rebuilding anything.
pub fn node_at<'a>(root: &'a Rc<Node>, path: &TreePath) -> Option<&'a Rc<Node>> {
    let mut node = root;
    for &index in path.indices() {
        node = node.children().get(index)?;
    }
    Some(node)
}

/// Set the target node's name, coercing per the rename rule (trim; fall
/// back to `"Unnamed"` if nothing remains).
///
/// # Errors
///
/// `InvalidPath` if `path` does not resolve.
pub fn rename(root: &Rc<Node>, path: &TreePath, new_name: &str) -> Result<Rc<Node>, TreeError> {
    let name = coerce_name(new_name);
    rebuild_at(root, path.indices(), path, &|node| {
        Ok(Rc::new(match node.as_ref() {
            Node::Parent { children, .. } => Node::Parent {
                name: name.clone(),
                children: children.clone(),
            },
            Node::Leaf { data, .. } => Node::Leaf {
                name: name.clone(),
                data: data.clone(),
            },
        }))
    })
}

/// Replace the target leaf's payload verbatim.
///
/// No trimming, no fallback: the empty string is a valid payload.
///
/// # Errors
///
/// `NotALeaf` if the target is a parent, `InvalidPath` if unresolved.
pub fn set_leaf_data(
    root: &Rc<Node>,
    path: &TreePath,
    new_data: &str,
) -> Result<Rc<Node>, TreeError> {
    rebuild_at(root, path.indices(), path, &|node| match node.as_ref() {
        Node::Leaf { name, .. } => Ok(Rc::new(Node::Leaf {
            name: name.clone(),
            data: new_data.to_string(),
        })),
        Node::Parent { .. } => Err(TreeError::NotALeaf(path.clone())),
    })
}

/// Append a new default child (`{name: "New Child", data: "Data"}`) to the
/// target node.
///
/// A leaf target is first converted to a parent whose sole child is the new
/// default node: the leaf's name is preserved, its prior payload discarded.
/// This is the only operation that performs a leaf-to-parent conversion.
///
/// # Errors
///
/// `InvalidPath` if `path` does not resolve.
pub fn add_child(root: &Rc<Node>, path: &TreePath) -> Result<Rc<Node>, TreeError> {
    rebuild_at(root, path.indices(), path, &|node| {
        Ok(Rc::new(match node.as_ref() {
            Node::Parent { name, children } => {
                let mut children = children.clone();
                children.push(Node::default_child());
                Node::Parent {
                    name: name.clone(),
                    children,
                }
            }
            Node::Leaf { name, .. } => Node::Parent {
                name: name.clone(),
                children: vec![Node::default_child()],
            },
        }))
    })
}

/// Remove the child at `index` from the target parent.
///
/// If this empties the children sequence, the target itself collapses to a
/// leaf with the default payload (`{name: <unchanged>, data: "Data"}`): an
/// empty parent is not a valid persisted state.
///
/// # Errors
///
/// `NotAParent` if the target is a leaf, `IndexOutOfRange` if `index` is
/// outside the children, `InvalidPath` if unresolved.
pub fn delete_child(
    root: &Rc<Node>,
    path: &TreePath,
    index: usize,
) -> Result<Rc<Node>, TreeError> {
    rebuild_at(root, path.indices(), path, &|node| match node.as_ref() {
        Node::Parent { name, children } => {
            if index >= children.len() {
                return Err(TreeError::IndexOutOfRange {
                    index,
                    len: children.len(),
                });
            }
            let mut children = children.clone();
            children.remove(index);
            if children.is_empty() {
                Ok(Node::collapsed(name.clone()))
            } else {
                Ok(Rc::new(Node::Parent {
                    name: name.clone(),
                    children,
                }))
            }
        }
        Node::Leaf { .. } => Err(TreeError::NotAParent(path.clone())),
    })
}

/// Replace the node at `path` wholesale with `new_subtree`.
///
/// Used to thread a descendant edit back into the full tree: an editor of a
/// subtree returns its new subtree value and the coordinator splices it in
/// here. The subtree is well-formed by construction ([`Node`] cannot
/// represent a leaf-xor-children violation); untrusted wire data is
/// validated where it is parsed, in
/// [`decanonicalize`](crate::core::canonical::decanonicalize).
///
/// # Errors
///
/// `InvalidPath` if `path` does not resolve.
pub fn replace_subtree(
    root: &Rc<Node>,
    path: &TreePath,
    new_subtree: &Rc<Node>,
) -> Result<Rc<Node>, TreeError> {
    rebuild_at(root, path.indices(), path, &|_| Ok(Rc::clone(new_subtree)))
}

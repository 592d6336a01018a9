//! core::node
//!
//! The tagged tree's single entity type.
//!
//! # Design
//!
//! A [`Node`] is an explicit tagged union: a `Parent` holds an ordered list
//! of children, a `Leaf` holds a single string payload. The variant is the
//! discriminant - there is no runtime field probing, and the "has both" /
//! "has neither" states cannot be represented.
//!
//! Children are stored as `Rc<Node>` so that edit operations can rebuild the
//! path from the root to an edited node while sharing every untouched
//! subtree with the previous root. The previous root remains a valid,
//! unmodified snapshot after every edit.
//!
//! # Example
//!
//! ```
//! use tagtree::core::node::Node;
//!
//! let root = Node::seed("root");
//! assert_eq!(root.name(), "root");
//! assert!(!root.is_leaf());
//!
//! let child = Node::default_child();
//! assert_eq!(child.name(), "New Child");
//! ```

use std::rc::Rc;

/// Name assigned when a rename would produce an empty name.
pub const FALLBACK_NAME: &str = "Unnamed";

/// Name of a freshly added child node.
pub const DEFAULT_CHILD_NAME: &str = "New Child";

/// Payload of a freshly added child node, and of a parent collapsed to a
/// leaf after its last child is deleted.
pub const DEFAULT_DATA: &str = "Data";

/// A node in a tagged tree.
///
/// Exactly one of two shapes, enforced by the type:
///
/// - `Parent`: a name and an ordered sequence of children
/// - `Leaf`: a name and a single string payload
///
/// Nodes carry no stable identifier; they are addressed positionally by
/// [`TreePath`](crate::core::path::TreePath).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An internal node with an ordered list of children.
    Parent {
        /// Display name of the node.
        name: String,
        /// Ordered children. Order is significant and preserved verbatim.
        children: Vec<Rc<Node>>,
    },
    /// A terminal node with a string payload.
    Leaf {
        /// Display name of the node.
        name: String,
        /// Payload. The empty string is a valid payload.
        data: String,
    },
}

impl Node {
    /// Create the editing seed: a parent named `name` with no children.
    ///
    /// An empty parent is not a valid persisted state, but it is allowed to
    /// exist transiently as the starting point of a fresh document. It
    /// canonicalizes to the name-only shape (see
    /// [`canonicalize`](crate::core::canonical::canonicalize)).
    pub fn seed(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Node::Parent {
            name: name.into(),
            children: Vec::new(),
        })
    }

    /// Create the default child appended by an add-child edit.
    pub fn default_child() -> Rc<Self> {
        Rc::new(Node::Leaf {
            name: DEFAULT_CHILD_NAME.to_string(),
            data: DEFAULT_DATA.to_string(),
        })
    }

    /// Create the leaf a parent collapses to when its last child is deleted.
    ///
    /// The name is carried over unchanged; the payload is the default.
    pub fn collapsed(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Node::Leaf {
            name: name.into(),
            data: DEFAULT_DATA.to_string(),
        })
    }

    /// Get the node's name.
    pub fn name(&self) -> &str {
        match self {
            Node::Parent { name, .. } => name,
            Node::Leaf { name, .. } => name,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The node's children, or an empty slice for a leaf.
    pub fn children(&self) -> &[Rc<Node>] {
        match self {
            Node::Parent { children, .. } => children,
            Node::Leaf { .. } => &[],
        }
    }
}

/// Apply the rename coercion rule to user input.
///
/// The input is trimmed; if nothing remains, the literal fallback
/// `"Unnamed"` is used. This applies only to user-facing renames - names
/// loaded from persisted trees are kept verbatim.
///
/// # Example
///
/// ```
/// use tagtree::core::node::coerce_name;
///
/// assert_eq!(coerce_name(" Foo "), "Foo");
/// assert_eq!(coerce_name("   "), "Unnamed");
/// assert_eq!(coerce_name(""), "Unnamed");
/// ```
pub fn coerce_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_empty_parent() {
        let root = Node::seed("root");
        assert_eq!(root.name(), "root");
        assert!(!root.is_leaf());
        assert!(root.children().is_empty());
    }

    #[test]
    fn default_child_shape() {
        let child = Node::default_child();
        assert_eq!(
            *child,
            Node::Leaf {
                name: "New Child".to_string(),
                data: "Data".to_string(),
            }
        );
    }

    #[test]
    fn collapsed_keeps_name() {
        let leaf = Node::collapsed("section");
        assert_eq!(
            *leaf,
            Node::Leaf {
                name: "section".to_string(),
                data: "Data".to_string(),
            }
        );
    }

    #[test]
    fn leaf_children_is_empty_slice() {
        let leaf = Node::default_child();
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn coerce_trims() {
        assert_eq!(coerce_name("  spaced  "), "spaced");
    }

    #[test]
    fn coerce_falls_back_on_whitespace() {
        assert_eq!(coerce_name(" \t\n "), FALLBACK_NAME);
    }

    #[test]
    fn coerce_keeps_interior_whitespace() {
        assert_eq!(coerce_name(" a b "), "a b");
    }
}

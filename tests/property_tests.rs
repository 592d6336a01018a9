//! Property-based tests for the tree model and canonicalizer.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated trees.

use std::rc::Rc;

use proptest::prelude::*;

use tagtree::core::canonical::{canonicalize, decanonicalize};
use tagtree::core::node::Node;
use tagtree::core::ops::{add_child, delete_child, rename, replace_subtree, set_leaf_data};
use tagtree::core::path::TreePath;
use tagtree::core::types::Fingerprint;

/// Strategy for node names (non-empty, as in any persisted tree).
fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,11}"
}

/// Strategy for leaf payloads (the empty string is valid).
fn arb_data() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,12}"
}

/// Strategy for well-formed trees.
///
/// Parents always have at least one child: the empty parent exists only as
/// the editing seed, which is covered by targeted unit tests.
fn arb_tree() -> impl Strategy<Value = Rc<Node>> {
    let leaf = (arb_name(), arb_data())
        .prop_map(|(name, data)| Rc::new(Node::Leaf { name, data }));
    leaf.prop_recursive(4, 24, 3, |inner| {
        (arb_name(), prop::collection::vec(inner, 1..4))
            .prop_map(|(name, children)| Rc::new(Node::Parent { name, children }))
    })
}

/// Collect every path in the tree, root included.
fn all_paths(node: &Rc<Node>, base: TreePath, acc: &mut Vec<TreePath>) {
    acc.push(base.clone());
    for (index, child) in node.children().iter().enumerate() {
        all_paths(child, base.child(index), acc);
    }
}

/// Strategy for a tree plus a path that resolves inside it.
fn arb_tree_and_path() -> impl Strategy<Value = (Rc<Node>, TreePath)> {
    arb_tree().prop_flat_map(|tree| {
        let mut paths = Vec::new();
        all_paths(&tree, TreePath::root(), &mut paths);
        let len = paths.len();
        (Just(tree), 0..len).prop_map(move |(tree, i)| (tree, paths[i].clone()))
    })
}

/// Check the structural invariants: parents are non-empty (the generated
/// trees never contain the transient seed) and names are non-empty.
fn well_formed(node: &Node) -> bool {
    match node {
        Node::Parent { name, children } => {
            !name.is_empty()
                && !children.is_empty()
                && children.iter().all(|c| well_formed(c))
        }
        Node::Leaf { name, .. } => !name.is_empty(),
    }
}

proptest! {
    /// Canonicalize then decanonicalize reproduces the tree exactly.
    #[test]
    fn canonical_round_trip((tree, _) in arb_tree_and_path()) {
        let canonical = canonicalize(&tree);
        let rebuilt = decanonicalize(&canonical).unwrap();
        prop_assert_eq!(&*rebuilt, &*tree);
    }

    /// Canonicalization is idempotent through the round trip.
    #[test]
    fn canonicalize_idempotent(tree in arb_tree()) {
        let once = canonicalize(&tree);
        let again = canonicalize(&decanonicalize(&once).unwrap());
        prop_assert_eq!(once, again);
    }

    /// Canonical JSON output is deterministic.
    #[test]
    fn canonicalize_deterministic(tree in arb_tree()) {
        let a = serde_json::to_string(&canonicalize(&tree)).unwrap();
        let b = serde_json::to_string(&canonicalize(&tree)).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Fingerprints agree exactly when canonical forms agree.
    #[test]
    fn fingerprint_tracks_canonical(tree in arb_tree()) {
        let canonical = canonicalize(&tree);
        let clone = canonicalize(&decanonicalize(&canonical).unwrap());
        prop_assert_eq!(
            Fingerprint::compute(&canonical),
            Fingerprint::compute(&clone)
        );
    }

    /// Rename preserves well-formedness and never produces an empty name.
    #[test]
    fn rename_preserves_invariants(
        (tree, path) in arb_tree_and_path(),
        new_name in "[ a-zA-Z]{0,12}",
    ) {
        let renamed = rename(&tree, &path, &new_name).unwrap();
        prop_assert!(well_formed(&renamed));
        // Input untouched
        prop_assert!(well_formed(&tree));
    }

    /// Whitespace-only rename falls back to the literal "Unnamed".
    #[test]
    fn rename_whitespace_falls_back((tree, path) in arb_tree_and_path()) {
        let renamed = rename(&tree, &path, "   ").unwrap();
        let target = tagtree::core::ops::node_at(&renamed, &path).unwrap();
        prop_assert_eq!(target.name(), "Unnamed");
    }

    /// Adding a child preserves invariants and grows the target by one.
    #[test]
    fn add_child_preserves_invariants((tree, path) in arb_tree_and_path()) {
        let before = tagtree::core::ops::node_at(&tree, &path).unwrap().children().len();
        let edited = add_child(&tree, &path).unwrap();
        prop_assert!(well_formed(&edited));
        let target = tagtree::core::ops::node_at(&edited, &path).unwrap();
        prop_assert!(!target.is_leaf());
        // A leaf target (before == 0) converts to a parent of exactly one child
        prop_assert_eq!(target.children().len(), before + 1);
    }

    /// Deleting any child preserves invariants (including the collapse).
    #[test]
    fn delete_child_preserves_invariants((tree, path) in arb_tree_and_path()) {
        let target = tagtree::core::ops::node_at(&tree, &path).unwrap();
        if target.is_leaf() {
            return Ok(());
        }
        let len = target.children().len();
        for index in 0..len {
            let edited = delete_child(&tree, &path, index).unwrap();
            prop_assert!(well_formed(&edited));
        }
        // Input untouched through all of the above
        prop_assert!(well_formed(&tree));
    }

    /// Setting leaf data touches exactly the target.
    #[test]
    fn set_leaf_data_is_local((tree, path) in arb_tree_and_path(), payload in arb_data()) {
        let target_is_leaf = tagtree::core::ops::node_at(&tree, &path).unwrap().is_leaf();
        if !target_is_leaf {
            prop_assert!(set_leaf_data(&tree, &path, &payload).is_err());
            return Ok(());
        }
        let edited = set_leaf_data(&tree, &path, &payload).unwrap();
        prop_assert!(well_formed(&edited));

        // Every top-level subtree off the edited path is shared by reference
        if let Some((first, _)) = path.split_first() {
            for (index, child) in tree.children().iter().enumerate() {
                if index != first {
                    prop_assert!(Rc::ptr_eq(child, &edited.children()[index]));
                }
            }
        }
    }

    /// Replacing a subtree splices the replacement in by reference.
    #[test]
    fn replace_subtree_splices(
        (tree, path) in arb_tree_and_path(),
        replacement in arb_tree(),
    ) {
        let edited = replace_subtree(&tree, &path, &replacement).unwrap();
        prop_assert!(well_formed(&edited));
        let target = tagtree::core::ops::node_at(&edited, &path).unwrap();
        prop_assert!(Rc::ptr_eq(target, &replacement));
    }
}

//! ui::render
//!
//! Text rendering of tagged trees.
//!
//! # Design
//!
//! Each node is rendered on one line with the path that addresses it, so
//! the output of `tt show` can be pasted straight back into edit commands.
//! Leaves show their payload; parents just their name. A depth limit
//! stands in for collapse/expand - it affects rendering only and is never
//! part of the tree value.
//!
//! ```text
//! . root
//! ├── 0 drafts
//! │   └── 0.0 intro = "Data"
//! └── 1 notes = ""
//! ```

use std::rc::Rc;

use crate::core::node::Node;
use crate::core::path::TreePath;

/// Render a tree as indented text with per-node paths.
///
/// `max_depth` limits how deep children are rendered; `None` renders the
/// whole tree. A parent with hidden children gets an ellipsis marker.
pub fn render_tree(root: &Rc<Node>, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    out.push_str(&format!(". {}\n", describe(root)));
    render_children(root, &TreePath::root(), "", max_depth, &mut out);
    out
}

/// One-line description of a node: name, plus the payload for a leaf.
fn describe(node: &Node) -> String {
    match node {
        Node::Parent { name, .. } => name.clone(),
        Node::Leaf { name, data } => format!("{name} = {data:?}"),
    }
}

fn render_children(
    node: &Rc<Node>,
    path: &TreePath,
    prefix: &str,
    max_depth: Option<usize>,
    out: &mut String,
) {
    let children = node.children();
    if children.is_empty() {
        return;
    }

    if let Some(limit) = max_depth {
        if path.depth() >= limit {
            out.push_str(&format!("{prefix}└── …\n"));
            return;
        }
    }

    for (index, child) in children.iter().enumerate() {
        let child_path = path.child(index);
        let last = index == children.len() - 1;
        let connector = if last { "└── " } else { "├── " };
        out.push_str(&format!(
            "{prefix}{connector}{child_path} {}\n",
            describe(child)
        ));

        let child_prefix = if last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        render_children(child, &child_path, &child_prefix, max_depth, out);
    }
}

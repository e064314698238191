//! Box-drawing tree diagrams for AST nodes
//!
//! ```text
//! ...
//! ├ =
//! │ ├ a
//! │ └ 12.0
//! └ Console
//!   └ WriteLine
//!     └ x
//! ```
//!
//! Each node contributes its label line. A child's lines are indented under
//! its parent with `├ ` (first line) and `│ ` (continuation), except for the
//! last child, which uses `└ ` and two spaces.

use super::node::NodeRef;

const BRANCH: &str = "├ ";
const BRANCH_CONTINUATION: &str = "│ ";
const LAST_BRANCH: &str = "└ ";
const LAST_CONTINUATION: &str = "  ";

/// A node waiting to be rendered: the text before its label, and the
/// indentation its own children continue from
struct Frame<'a> {
    node: NodeRef<'a>,
    lead: String,
    indent: String,
}

/// Render a subtree as diagram lines, one per node
///
/// Works from an explicit stack, so the depth of the tree is bounded by
/// memory rather than by the call stack.
pub fn render_tree(node: NodeRef<'_>) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending = vec![Frame {
        node,
        lead: String::new(),
        indent: String::new(),
    }];

    while let Some(Frame { node, lead, indent }) = pending.pop() {
        lines.push(format!("{lead}{}", node.label()));

        let children = node.children();
        let last = children.len().saturating_sub(1);
        for (i, child) in children.into_iter().enumerate().rev() {
            let (first_prefix, rest_prefix) = if i == last {
                (LAST_BRANCH, LAST_CONTINUATION)
            } else {
                (BRANCH, BRANCH_CONTINUATION)
            };
            pending.push(Frame {
                node: child,
                lead: format!("{indent}{first_prefix}"),
                indent: format!("{indent}{rest_prefix}"),
            });
        }
    }

    lines
}

/// Render a subtree as a single string, lines joined with `\n`
pub fn to_tree_string(node: NodeRef<'_>) -> String {
    render_tree(node).join("\n")
}

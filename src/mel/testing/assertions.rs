//! Fluent assertion API for AST nodes

use crate::mel::ast::{AstNode, NodeRef};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for any node
pub fn assert_node<N: AstNode + ?Sized>(node: &N) -> NodeAssertion<'_> {
    NodeAssertion {
        node: node.as_node(),
        context: "root".to_string(),
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: NodeRef<'a>,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    /// Assert the node kind, e.g. `"BinaryOp"`
    pub fn node_type(self, expected: &str) -> Self {
        assert_eq!(
            self.node.node_type(),
            expected,
            "{}: Expected {} node, found {} with label '{}'",
            self.context,
            expected,
            self.node.node_type(),
            self.node.label()
        );
        self
    }

    pub fn label(self, expected: &str) -> Self {
        assert_eq!(
            self.node.label(),
            expected,
            "{}: Expected label '{}', found '{}'",
            self.context,
            expected,
            self.node.label()
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let children = self.node.children();
        assert_eq!(
            children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            children.len(),
            summarize(&children)
        );
        self
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds (node '{}' has {} children)",
            self.context,
            index,
            self.node.label(),
            children.len()
        );

        assertion(NodeAssertion {
            node: children[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert the labels of all direct children, in order
    pub fn child_labels(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self.node.children().iter().map(|c| c.label()).collect();
        assert_eq!(
            actual, expected,
            "{}: Child labels differ",
            self.context
        );
        self
    }

    /// Assert the full rendered diagram of this subtree
    pub fn renders(self, expected: &[&str]) -> Self {
        let actual = self.node.render_tree();
        assert_eq!(
            actual,
            expected,
            "{}: Rendered tree differs\n--- actual ---\n{}",
            self.context,
            actual.join("\n")
        );
        self
    }

    /// Access the underlying node for checks not covered here
    pub fn node(&self) -> NodeRef<'a> {
        self.node
    }
}

fn summarize(nodes: &[NodeRef<'_>]) -> String {
    nodes
        .iter()
        .map(|n| format!("{}({})", n.node_type(), n.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mel::ast::{BinOp, Expr};

    #[test]
    fn test_chained_assertions() {
        let expr = Expr::binary(BinOp::Div, Expr::ident("a"), Expr::number(2.0));
        assert_node(&expr)
            .node_type("BinaryOp")
            .label("/")
            .child_count(2)
            .child_labels(&["a", "2.0"])
            .child(1, |c| {
                c.node_type("NumberLiteral").child_count(0);
            });
    }

    #[test]
    #[should_panic(expected = "root[0]: Expected label 'b'")]
    fn test_failure_names_path() {
        let expr = Expr::binary(BinOp::Div, Expr::ident("a"), Expr::number(2.0));
        assert_node(&expr).child(0, |c| {
            c.label("b");
        });
    }
}

//! XML-like AST tag serialization
//!
//! Mirrors the tree structure directly, which makes it handy for diffing:
//!
//! - node type → tag name
//! - label → text content
//! - children → nested in a `<children>` tag
//!
//! ```text
//! <StmtList>...<children>
//!   <Assign>=<children>
//!     <Identifier>a</Identifier>
//!     <NumberLiteral>12.0</NumberLiteral>
//!   </children></Assign>
//! </children></StmtList>
//! ```

use super::registry::{FormatError, Formatter};
use crate::mel::ast::{AstNode, NodeRef, StmtList};

/// Serialize a program to AST tag format
pub fn serialize_program(program: &StmtList) -> String {
    let mut output = String::new();
    serialize_node(program.as_node(), &mut output);
    output
}

enum Step<'a> {
    Open(NodeRef<'a>, usize),
    Close(&'static str, usize),
}

fn serialize_node(root: NodeRef<'_>, output: &mut String) {
    let mut pending = vec![Step::Open(root, 0)];

    while let Some(step) = pending.pop() {
        match step {
            Step::Open(node, level) => {
                let indent = "  ".repeat(level);
                let tag = node.node_type();
                let children = node.children();

                output.push_str(&format!("{}<{}>{}", indent, tag, escape_xml(&node.label())));

                if children.is_empty() {
                    output.push_str(&format!("</{}>\n", tag));
                } else {
                    output.push_str("<children>\n");
                    pending.push(Step::Close(tag, level));
                    pending.extend(
                        children
                            .into_iter()
                            .rev()
                            .map(|child| Step::Open(child, level + 1)),
                    );
                }
            }
            Step::Close(tag, level) => {
                output.push_str(&format!("{}</children></{}>\n", "  ".repeat(level), tag));
            }
        }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, program: &StmtList) -> Result<String, FormatError> {
        Ok(serialize_program(program))
    }

    fn description(&self) -> &str {
        "XML-like tags, one element per node"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mel::ast::{Assign, AssignTarget, BinOp, ConsoleCall, Expr, Identifier, Stmt};

    #[test]
    fn test_escapes_operators() {
        let program = StmtList::new(vec![Stmt::Console(ConsoleCall::write_line(Expr::binary(
            BinOp::And,
            Expr::ident("a"),
            Expr::ident("b"),
        )))]);

        let expected = "\
<StmtList>...<children>
  <ConsoleCall>Console<children>
    <ConsoleOutput>WriteLine<children>
      <BinaryOp>&amp;&amp;<children>
        <Identifier>a</Identifier>
        <Identifier>b</Identifier>
      </children></BinaryOp>
    </children></ConsoleOutput>
  </children></ConsoleCall>
</children></StmtList>
";
        assert_eq!(serialize_program(&program), expected);
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(
            serialize_program(&StmtList::default()),
            "<StmtList>...</StmtList>\n"
        );
    }

    #[test]
    fn test_deep_chain_on_small_stack() {
        let chain = (0..2_000).fold(Expr::number(1.0), |lhs, _| {
            Expr::binary(BinOp::Mul, lhs, Expr::number(2.0))
        });
        let program = StmtList::new(vec![Stmt::Assign(Assign::new(
            AssignTarget::Identifier(Identifier::new("x")),
            chain,
        ))]);

        let (output, program) = std::thread::Builder::new()
            .stack_size(128 * 1024)
            .spawn(move || (serialize_program(&program), program))
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(output.matches("<BinaryOp>").count(), 2_000);
        assert!(output.ends_with("  </children></Assign>\n</children></StmtList>\n"));
        drop(program);
    }
}

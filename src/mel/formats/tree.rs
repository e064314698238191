//! Box-drawing tree diagram format

use super::registry::{FormatError, Formatter};
use crate::mel::ast::{AstNode, StmtList};

/// The diagram from [`crate::mel::ast::tree`], one node per line, with a
/// trailing newline
pub struct TreeFormatter;

impl Formatter for TreeFormatter {
    fn name(&self) -> &str {
        "tree"
    }

    fn serialize(&self, program: &StmtList) -> Result<String, FormatError> {
        let mut output = program.render_tree().join("\n");
        output.push('\n');
        Ok(output)
    }

    fn description(&self) -> &str {
        "Indented tree diagram with box-drawing connectors"
    }
}

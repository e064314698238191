//! Structured data formats backed by serde
//!
//! Every AST type derives `Serialize`; enums are internally tagged with a
//! `node` field naming the variant.

use super::registry::{FormatError, Formatter};
use crate::mel::ast::StmtList;

/// Pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, program: &StmtList) -> Result<String, FormatError> {
        serde_json::to_string_pretty(program)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, program: &StmtList) -> Result<String, FormatError> {
        serde_yaml::to_string(program).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML document"
    }
}

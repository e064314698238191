//! Output format implementations for parsed programs
//!
//! - `tree`: the box-drawing diagram
//! - `tag`: XML-like nested tags
//! - `json` / `yaml`: serde serializations of the typed AST

pub mod registry;
pub mod structured;
pub mod tag;
pub mod tree;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use tag::{serialize_program as serialize_ast_tag, TagFormatter};
pub use tree::TreeFormatter;

//! Format registry for AST serialization
//!
//! Each output format implements [`Formatter`] and is looked up by name in a
//! [`FormatRegistry`]. The CLI's `--format` flag goes through here.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

use crate::mel::ast::StmtList;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for program formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "tree", "json")
    fn name(&self) -> &str;

    /// Serialize a parsed program to this format
    fn serialize(&self, program: &StmtList) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of program formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a program using the named format
    pub fn serialize(&self, program: &StmtList, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(program)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::TreeFormatter);
        registry.register(super::TagFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);

        registry
    }

    /// Shared registry holding the built-in formatters
    pub fn global() -> &'static FormatRegistry {
        static DEFAULTS: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);
        &DEFAULTS
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

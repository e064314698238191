//! Closed keyword and operator sets used by AST nodes
//!
//! Each enum maps one-to-one onto a fixed piece of source syntax. The lexer
//! produces these values directly, so a node can never carry an unrecognised
//! type name or operator.

use serde::Serialize;
use std::fmt;

/// Declared type of a variable, parameter or method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclType {
    Int,
    Double,
    String,
    Bool,
    Char,
    Float,
    Void,
}

impl DeclType {
    pub const ALL: [DeclType; 7] = [
        DeclType::Int,
        DeclType::Double,
        DeclType::String,
        DeclType::Bool,
        DeclType::Char,
        DeclType::Float,
        DeclType::Void,
    ];

    /// The keyword spelling of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclType::Int => "int",
            DeclType::Double => "double",
            DeclType::String => "string",
            DeclType::Bool => "bool",
            DeclType::Char => "char",
            DeclType::Float => "float",
            DeclType::Void => "void",
        }
    }
}

impl fmt::Display for DeclType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary operators, arithmetic as well as relational and logical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&&")]
    And,
}

impl BinOp {
    pub const ALL: [BinOp; 12] = [
        BinOp::Add,
        BinOp::Sub,
        BinOp::Mul,
        BinOp::Div,
        BinOp::Gt,
        BinOp::Ge,
        BinOp::Lt,
        BinOp::Le,
        BinOp::Eq,
        BinOp::Ne,
        BinOp::Or,
        BinOp::And,
    ];

    /// The operator symbol as written in source
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Or => "||",
            BinOp::And => "&&",
        }
    }

    /// Relational and logical operators. These are accepted at both
    /// precedence tiers of the grammar.
    pub fn is_comparison(&self) -> bool {
        !matches!(self, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Method access modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMod {
    Public,
    Private,
    Protected,
}

impl AccessMod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessMod::Public => "public",
            AccessMod::Private => "private",
            AccessMod::Protected => "protected",
        }
    }
}

impl fmt::Display for AccessMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

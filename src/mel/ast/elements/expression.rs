//! Expression nodes: literals, identifiers and binary operations

use serde::Serialize;

use super::super::ops::BinOp;

/// A numeric literal. All mel numbers are floating point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberLiteral {
    pub value: f64,
}

impl NumberLiteral {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Float spelling used in tree labels: Rust's `{:?}` form, which always
    /// has a fractional part or exponent (`12.0`, `0.5`, `1e21`). Exponents
    /// carry no `+` sign and no zero padding, so `1e16` and `1e-5` render as
    /// exactly that.
    pub fn display_value(&self) -> String {
        format!("{:?}", self.value)
    }
}

/// A bare name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

/// `left op right`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryOp {
    pub op: BinOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl BinaryOp {
    pub fn new(op: BinOp, left: Expr, right: Expr) -> Self {
        Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Any expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node")]
pub enum Expr {
    Number(NumberLiteral),
    Identifier(Identifier),
    Binary(BinaryOp),
}

impl Expr {
    pub fn number(value: f64) -> Self {
        Expr::Number(NumberLiteral::new(value))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(Identifier::new(name))
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryOp::new(op, left, right))
    }
}

impl From<NumberLiteral> for Expr {
    fn from(number: NumberLiteral) -> Self {
        Expr::Number(number)
    }
}

impl From<Identifier> for Expr {
    fn from(ident: Identifier) -> Self {
        Expr::Identifier(ident)
    }
}

impl From<BinaryOp> for Expr {
    fn from(op: BinaryOp) -> Self {
        Expr::Binary(op)
    }
}

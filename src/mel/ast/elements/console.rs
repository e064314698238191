//! The two console pseudo-calls, `Console.ReadLine(x)` and `Console.WriteLine(e)`

use serde::Serialize;

use super::expression::{Expr, Identifier};

/// `ReadLine(target)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleInput {
    pub target: Identifier,
}

impl ConsoleInput {
    pub fn new(target: Identifier) -> Self {
        Self { target }
    }
}

/// `WriteLine(expr)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleOutput {
    pub expr: Expr,
}

impl ConsoleOutput {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node")]
pub enum ConsoleMethod {
    Input(ConsoleInput),
    Output(ConsoleOutput),
}

/// `Console.<method>;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleCall {
    pub method: ConsoleMethod,
}

impl ConsoleCall {
    pub fn new(method: ConsoleMethod) -> Self {
        Self { method }
    }

    pub fn read_line(target: Identifier) -> Self {
        Self::new(ConsoleMethod::Input(ConsoleInput::new(target)))
    }

    pub fn write_line(expr: Expr) -> Self {
        Self::new(ConsoleMethod::Output(ConsoleOutput::new(expr)))
    }
}

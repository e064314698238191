//! Abstract syntax tree for mel programs
//!
//! Node types live in [`elements`]; [`node`] gives them a uniform interface
//! ([`AstNode`], [`NodeRef`]) and [`tree`] renders any subtree as a diagram.
//! Nodes are immutable once built and own their children outright.

pub mod elements;
pub mod node;
pub mod ops;
pub mod position;
pub mod tree;

pub use elements::{
    Assign, AssignTarget, BinaryOp, Class, ConsoleCall, ConsoleInput, ConsoleMethod,
    ConsoleOutput, Expr, For, Identifier, If, Method, MethodDecl, NumberLiteral, ParamDecl,
    ParamDeclList, Return, Stmt, StmtList, While,
};
pub use node::{walk, AstNode, NodeRef};
pub use ops::{AccessMod, BinOp, DeclType};
pub use position::{Position, SourceLocation};
pub use tree::{render_tree, to_tree_string};

//! Concrete AST node types, grouped by syntactic family

pub mod console;
pub mod declaration;
pub mod expression;
pub mod statement;

pub use console::{ConsoleCall, ConsoleInput, ConsoleMethod, ConsoleOutput};
pub use declaration::{Class, Method, MethodDecl, ParamDecl, ParamDeclList};
pub use expression::{BinaryOp, Expr, Identifier, NumberLiteral};
pub use statement::{Assign, AssignTarget, For, If, Return, Stmt, StmtList, While};

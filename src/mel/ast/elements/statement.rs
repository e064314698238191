//! Statement nodes and the statement list that forms a program

use serde::Serialize;

use super::console::ConsoleCall;
use super::declaration::{Class, ParamDecl};
use super::expression::{Expr, Identifier};

/// Left-hand side of an assignment: either a fresh declaration or an
/// existing name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node")]
pub enum AssignTarget {
    Decl(ParamDecl),
    Identifier(Identifier),
}

/// `target = value;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assign {
    pub target: AssignTarget,
    pub value: Expr,
}

impl Assign {
    pub fn new(target: AssignTarget, value: Expr) -> Self {
        Self { target, value }
    }
}

/// `return expr;`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Return {
    pub expr: Expr,
}

impl Return {
    pub fn new(expr: Expr) -> Self {
        Self { expr }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct If {
    pub cond: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

impl If {
    pub fn new(cond: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Self {
            cond,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct While {
    pub cond: Expr,
    pub body: Box<Stmt>,
}

impl While {
    pub fn new(cond: Expr, body: Stmt) -> Self {
        Self {
            cond,
            body: Box::new(body),
        }
    }
}

/// `for (init cond; incr) body`. The increment is a bare expression,
/// not a statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct For {
    pub init: Assign,
    pub cond: Expr,
    pub incr: Expr,
    pub body: Box<Stmt>,
}

impl For {
    pub fn new(init: Assign, cond: Expr, incr: Expr, body: Stmt) -> Self {
        Self {
            init,
            cond,
            incr,
            body: Box::new(body),
        }
    }
}

/// An ordered sequence of statements. The root of every parsed program,
/// and the body of every `{ ... }` block.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StmtList {
    pub statements: Vec<Stmt>,
}

impl StmtList {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl FromIterator<Stmt> for StmtList {
    fn from_iter<I: IntoIterator<Item = Stmt>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Any statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node")]
pub enum Stmt {
    Assign(Assign),
    /// A declaration without initialiser, e.g. `int a;`
    Decl(ParamDecl),
    Console(ConsoleCall),
    If(If),
    While(While),
    For(For),
    Class(Class),
    Return(Return),
    Block(StmtList),
}

impl From<Assign> for Stmt {
    fn from(assign: Assign) -> Self {
        Stmt::Assign(assign)
    }
}

impl From<ParamDecl> for Stmt {
    fn from(decl: ParamDecl) -> Self {
        Stmt::Decl(decl)
    }
}

impl From<ConsoleCall> for Stmt {
    fn from(call: ConsoleCall) -> Self {
        Stmt::Console(call)
    }
}

impl From<If> for Stmt {
    fn from(node: If) -> Self {
        Stmt::If(node)
    }
}

impl From<While> for Stmt {
    fn from(node: While) -> Self {
        Stmt::While(node)
    }
}

impl From<For> for Stmt {
    fn from(node: For) -> Self {
        Stmt::For(node)
    }
}

impl From<Class> for Stmt {
    fn from(class: Class) -> Self {
        Stmt::Class(class)
    }
}

impl From<Return> for Stmt {
    fn from(node: Return) -> Self {
        Stmt::Return(node)
    }
}

impl From<StmtList> for Stmt {
    fn from(list: StmtList) -> Self {
        Stmt::Block(list)
    }
}

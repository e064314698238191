//! Uniform view over heterogeneous AST nodes
//!
//! Every concrete node type keeps its own typed fields. [`NodeRef`] is the
//! closed set of borrowed views over them: one case per node kind, so label,
//! child enumeration and node type are each a single exhaustive match.
//! Adding a node kind without handling it here is a compile error.
//!
//! [`AstNode`] is the common interface. Implementors only say which
//! [`NodeRef`] they are; everything else is provided.

use super::elements::{
    Assign, AssignTarget, BinaryOp, Class, ConsoleCall, ConsoleInput, ConsoleMethod,
    ConsoleOutput, Expr, For, Identifier, If, Method, MethodDecl, NumberLiteral, ParamDecl,
    ParamDeclList, Return, Stmt, StmtList, While,
};
use super::tree;

/// Borrowed view of a single AST node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    NumberLiteral(&'a NumberLiteral),
    Identifier(&'a Identifier),
    ParamDecl(&'a ParamDecl),
    ParamDeclList(&'a ParamDeclList),
    BinaryOp(&'a BinaryOp),
    ConsoleInput(&'a ConsoleInput),
    ConsoleOutput(&'a ConsoleOutput),
    ConsoleCall(&'a ConsoleCall),
    Assign(&'a Assign),
    Return(&'a Return),
    If(&'a If),
    While(&'a While),
    For(&'a For),
    StmtList(&'a StmtList),
    MethodDecl(&'a MethodDecl),
    Method(&'a Method),
    Class(&'a Class),
}

impl<'a> NodeRef<'a> {
    /// Name of the node kind
    pub fn node_type(&self) -> &'static str {
        match self {
            NodeRef::NumberLiteral(_) => "NumberLiteral",
            NodeRef::Identifier(_) => "Identifier",
            NodeRef::ParamDecl(_) => "ParamDecl",
            NodeRef::ParamDeclList(_) => "ParamDeclList",
            NodeRef::BinaryOp(_) => "BinaryOp",
            NodeRef::ConsoleInput(_) => "ConsoleInput",
            NodeRef::ConsoleOutput(_) => "ConsoleOutput",
            NodeRef::ConsoleCall(_) => "ConsoleCall",
            NodeRef::Assign(_) => "Assign",
            NodeRef::Return(_) => "Return",
            NodeRef::If(_) => "If",
            NodeRef::While(_) => "While",
            NodeRef::For(_) => "For",
            NodeRef::StmtList(_) => "StmtList",
            NodeRef::MethodDecl(_) => "MethodDecl",
            NodeRef::Method(_) => "Method",
            NodeRef::Class(_) => "Class",
        }
    }

    /// The node's own piece of syntax, as shown in tree diagrams
    pub fn label(&self) -> String {
        match self {
            NodeRef::NumberLiteral(n) => n.display_value(),
            NodeRef::Identifier(ident) => ident.name.clone(),
            NodeRef::ParamDecl(decl) => decl.decl_type.to_string(),
            NodeRef::ParamDeclList(_) => "params".to_string(),
            NodeRef::BinaryOp(op) => op.op.to_string(),
            NodeRef::ConsoleInput(_) => "ReadLine".to_string(),
            NodeRef::ConsoleOutput(_) => "WriteLine".to_string(),
            NodeRef::ConsoleCall(_) => "Console".to_string(),
            NodeRef::Assign(_) => "=".to_string(),
            NodeRef::Return(_) => "return".to_string(),
            NodeRef::If(_) => "if".to_string(),
            NodeRef::While(_) => "while".to_string(),
            NodeRef::For(_) => "for".to_string(),
            NodeRef::StmtList(_) => "...".to_string(),
            NodeRef::MethodDecl(decl) => format!("{} {}", decl.access, decl.return_type),
            NodeRef::Method(method) => format!(
                "{} {}",
                NodeRef::MethodDecl(&method.decl).label(),
                method.name.name
            ),
            NodeRef::Class(_) => "class".to_string(),
        }
    }

    /// Direct children, in source order
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            NodeRef::NumberLiteral(_) | NodeRef::Identifier(_) | NodeRef::MethodDecl(_) => {
                Vec::new()
            }
            NodeRef::ParamDecl(decl) => vec![NodeRef::Identifier(&decl.name)],
            NodeRef::ParamDeclList(list) => list.params.iter().map(NodeRef::ParamDecl).collect(),
            NodeRef::BinaryOp(op) => vec![op.left.as_node(), op.right.as_node()],
            NodeRef::ConsoleInput(input) => vec![NodeRef::Identifier(&input.target)],
            NodeRef::ConsoleOutput(output) => vec![output.expr.as_node()],
            NodeRef::ConsoleCall(call) => vec![call.method.as_node()],
            NodeRef::Assign(assign) => vec![assign.target.as_node(), assign.value.as_node()],
            NodeRef::Return(ret) => vec![ret.expr.as_node()],
            NodeRef::If(node) => {
                let mut children = vec![node.cond.as_node(), node.then_branch.as_node()];
                if let Some(else_branch) = &node.else_branch {
                    children.push(else_branch.as_node());
                }
                children
            }
            NodeRef::While(node) => vec![node.cond.as_node(), node.body.as_node()],
            NodeRef::For(node) => vec![
                NodeRef::Assign(&node.init),
                node.cond.as_node(),
                node.incr.as_node(),
                node.body.as_node(),
            ],
            NodeRef::StmtList(list) => list.statements.iter().map(Stmt::as_node).collect(),
            NodeRef::Method(method) => {
                let mut children = Vec::new();
                if let Some(params) = &method.params {
                    children.push(NodeRef::ParamDeclList(params));
                }
                if let Some(body) = &method.body {
                    children.push(body.as_node());
                }
                children
            }
            NodeRef::Class(class) => std::iter::once(NodeRef::Identifier(&class.name))
                .chain(class.methods.iter().map(NodeRef::Method))
                .collect(),
        }
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    /// The uniform view of this node
    fn as_node(&self) -> NodeRef<'_>;

    fn node_type(&self) -> &'static str {
        self.as_node().node_type()
    }

    fn label(&self) -> String {
        self.as_node().label()
    }

    fn children(&self) -> Vec<NodeRef<'_>> {
        self.as_node().children()
    }

    /// The child at `index`, or `None` when out of range
    fn child(&self, index: usize) -> Option<NodeRef<'_>> {
        self.children().into_iter().nth(index)
    }

    /// Diagram lines for this subtree, see [`tree::render_tree`]
    fn render_tree(&self) -> Vec<String> {
        tree::render_tree(self.as_node())
    }
}

impl AstNode for NodeRef<'_> {
    fn as_node(&self) -> NodeRef<'_> {
        *self
    }
}

macro_rules! impl_ast_node {
    ($($ty:ident),* $(,)?) => {
        $(
            impl AstNode for $ty {
                fn as_node(&self) -> NodeRef<'_> {
                    NodeRef::$ty(self)
                }
            }
        )*
    };
}

impl_ast_node!(
    NumberLiteral,
    Identifier,
    ParamDecl,
    ParamDeclList,
    BinaryOp,
    ConsoleInput,
    ConsoleOutput,
    ConsoleCall,
    Assign,
    Return,
    If,
    While,
    For,
    StmtList,
    MethodDecl,
    Method,
    Class,
);

impl AstNode for Expr {
    fn as_node(&self) -> NodeRef<'_> {
        match self {
            Expr::Number(n) => NodeRef::NumberLiteral(n),
            Expr::Identifier(ident) => NodeRef::Identifier(ident),
            Expr::Binary(op) => NodeRef::BinaryOp(op),
        }
    }
}

impl AstNode for Stmt {
    fn as_node(&self) -> NodeRef<'_> {
        match self {
            Stmt::Assign(assign) => NodeRef::Assign(assign),
            Stmt::Decl(decl) => NodeRef::ParamDecl(decl),
            Stmt::Console(call) => NodeRef::ConsoleCall(call),
            Stmt::If(node) => NodeRef::If(node),
            Stmt::While(node) => NodeRef::While(node),
            Stmt::For(node) => NodeRef::For(node),
            Stmt::Class(class) => NodeRef::Class(class),
            Stmt::Return(ret) => NodeRef::Return(ret),
            Stmt::Block(list) => NodeRef::StmtList(list),
        }
    }
}

impl AstNode for AssignTarget {
    fn as_node(&self) -> NodeRef<'_> {
        match self {
            AssignTarget::Decl(decl) => NodeRef::ParamDecl(decl),
            AssignTarget::Identifier(ident) => NodeRef::Identifier(ident),
        }
    }
}

impl AstNode for ConsoleMethod {
    fn as_node(&self) -> NodeRef<'_> {
        match self {
            ConsoleMethod::Input(input) => NodeRef::ConsoleInput(input),
            ConsoleMethod::Output(output) => NodeRef::ConsoleOutput(output),
        }
    }
}

/// Pre-order traversal: `visit` sees a node before any of its children
pub fn walk<'a, F>(node: NodeRef<'a>, visit: &mut F)
where
    F: FnMut(NodeRef<'a>),
{
    let mut pending = vec![node];
    while let Some(node) = pending.pop() {
        visit(node);
        pending.extend(node.children().into_iter().rev());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mel::ast::ops::{AccessMod, BinOp, DeclType};

    fn labels(nodes: &[NodeRef<'_>]) -> Vec<String> {
        nodes.iter().map(|n| n.label()).collect()
    }

    #[test]
    fn test_leaves_have_no_children() {
        assert!(NumberLiteral::new(1.0).children().is_empty());
        assert!(Identifier::new("x").children().is_empty());
        assert!(MethodDecl::new(AccessMod::Public, DeclType::Int)
            .children()
            .is_empty());
    }

    #[test]
    fn test_if_children_depend_on_else() {
        let then_branch = Stmt::Return(Return::new(Expr::number(1.0)));
        let without_else = If::new(Expr::ident("a"), then_branch.clone(), None);
        assert_eq!(without_else.children().len(), 2);

        let with_else = If::new(
            Expr::ident("a"),
            then_branch,
            Some(Stmt::Block(StmtList::default())),
        );
        assert_eq!(labels(&with_else.children()), vec!["a", "return", "..."]);
    }

    #[test]
    fn test_method_children_skip_missing_parts() {
        let decl = MethodDecl::new(AccessMod::Private, DeclType::Void);
        let bare = Method::new(decl, Identifier::new("run"), None, None);
        assert!(bare.children().is_empty());
        assert_eq!(bare.label(), "private void run");

        let params = ParamDeclList::new(vec![ParamDecl::new(DeclType::Int, Identifier::new("a"))]);
        let full = Method::new(
            decl,
            Identifier::new("run"),
            Some(params),
            Some(Stmt::Block(StmtList::default())),
        );
        assert_eq!(labels(&full.children()), vec!["params", "..."]);
    }

    #[test]
    fn test_child_index_out_of_range() {
        let op = BinaryOp::new(BinOp::Mul, Expr::number(2.0), Expr::ident("b"));
        assert_eq!(op.child(1).map(|c| c.label()), Some("b".to_string()));
        assert!(op.child(2).is_none());
    }

    #[test]
    fn test_walk_is_preorder() {
        let assign = Assign::new(
            AssignTarget::Decl(ParamDecl::new(DeclType::Double, Identifier::new("c"))),
            Expr::binary(BinOp::Add, Expr::number(1.0), Expr::number(2.0)),
        );
        let mut seen = Vec::new();
        walk(assign.as_node(), &mut |node| seen.push(node.label()));
        assert_eq!(seen, vec!["=", "double", "c", "+", "1.0", "2.0"]);
    }

    #[test]
    fn test_node_type_names() {
        let list = StmtList::new(vec![Stmt::Console(ConsoleCall::read_line(Identifier::new(
            "w",
        )))]);
        let mut kinds = Vec::new();
        walk(list.as_node(), &mut |node| kinds.push(node.node_type()));
        assert_eq!(
            kinds,
            vec!["StmtList", "ConsoleCall", "ConsoleInput", "Identifier"]
        );
    }

    #[test]
    fn test_walk_deep_chain() {
        let chain = (0..10_000).fold(Expr::ident("x"), |lhs, _| {
            Expr::binary(BinOp::Sub, lhs, Expr::number(1.0))
        });
        let mut count = 0;
        walk(chain.as_node(), &mut |_| count += 1);
        assert_eq!(count, 20_001);
    }
}

//! Statement rules
//!
//! ```text
//! stmt     := assign | paramDecl | console | if | while | for | class
//!           | return | "{" stmtList "}"
//! stmtList := stmt*
//! assign   := (paramDecl | identifier) "=" expression ";"
//! console  := "Console" "." ("ReadLine" "(" identifier ")"
//!                           | "WriteLine" "(" expression ")") ";"
//! if       := "if" "(" expression ")" stmt ["else" stmt]
//! while    := "while" "(" expression ")" stmt
//! for      := "for" "(" assign expression ";" expression ")" stmt
//! return   := "return" expression ";"
//! ```
//!
//! Alternatives are tried in order and the first match wins. In a `for`
//! header the init clause brings its own `;` (it is an `assign`), the
//! condition is followed by one, and the increment is a bare expression.

use chumsky::prelude::*;

use super::declarations::{class, param_decl};
use super::error::ParserError;
use super::expressions::identifier;
use crate::mel::ast::{
    Assign, AssignTarget, ConsoleCall, ConsoleInput, ConsoleMethod, ConsoleOutput, Expr, For, If,
    Return, Stmt, StmtList, While,
};
use crate::mel::lexing::Token;

fn parenthesized<P, O>(inner: P) -> impl Parser<Token, O, Error = ParserError> + Clone
where
    P: Parser<Token, O, Error = ParserError> + Clone,
{
    inner.delimited_by(just(Token::OpenParen), just(Token::CloseParen))
}

pub fn assign<E>(expr: E) -> impl Parser<Token, Assign, Error = ParserError> + Clone
where
    E: Parser<Token, Expr, Error = ParserError> + Clone,
{
    param_decl()
        .map(AssignTarget::Decl)
        .or(identifier().map(AssignTarget::Identifier))
        .then_ignore(just(Token::Assign))
        .then(expr)
        .then_ignore(just(Token::Semicolon))
        .map(|(target, value)| Assign::new(target, value))
}

pub fn console<E>(expr: E) -> impl Parser<Token, ConsoleCall, Error = ParserError> + Clone
where
    E: Parser<Token, Expr, Error = ParserError> + Clone,
{
    let input = just(Token::ReadLine)
        .ignore_then(parenthesized(identifier()))
        .map(|target| ConsoleMethod::Input(ConsoleInput::new(target)));

    let output = just(Token::WriteLine)
        .ignore_then(parenthesized(expr))
        .map(|expr| ConsoleMethod::Output(ConsoleOutput::new(expr)));

    just(Token::Console)
        .ignore_then(just(Token::Dot))
        .ignore_then(input.or(output))
        .then_ignore(just(Token::Semicolon))
        .map(ConsoleCall::new)
}

/// Build the statement list rule around a shared expression parser.
///
/// `stmt` and `stmtList` refer to each other, so both are declared first
/// and defined once every rule they use exists.
pub fn statement_list<E>(expr: E) -> impl Parser<Token, StmtList, Error = ParserError> + Clone
where
    E: Parser<Token, Expr, Error = ParserError> + Clone + 'static,
{
    let mut stmt: Recursive<Token, Stmt, ParserError> = Recursive::declare();
    let mut stmt_list: Recursive<Token, StmtList, ParserError> = Recursive::declare();

    let if_stmt = just(Token::If)
        .ignore_then(parenthesized(expr.clone()))
        .then(stmt.clone())
        .then(just(Token::Else).ignore_then(stmt.clone()).or_not())
        .map(|((cond, then_branch), else_branch)| If::new(cond, then_branch, else_branch));

    let while_stmt = just(Token::While)
        .ignore_then(parenthesized(expr.clone()))
        .then(stmt.clone())
        .map(|(cond, body)| While::new(cond, body));

    let for_header = assign(expr.clone())
        .then(expr.clone())
        .then_ignore(just(Token::Semicolon))
        .then(expr.clone());
    let for_stmt = just(Token::For)
        .ignore_then(parenthesized(for_header))
        .then(stmt.clone())
        .map(|(((init, cond), incr), body)| For::new(init, cond, incr, body));

    let return_stmt = just(Token::Return)
        .ignore_then(expr.clone())
        .then_ignore(just(Token::Semicolon))
        .map(Return::new);

    let block = stmt_list
        .clone()
        .delimited_by(just(Token::OpenBrace), just(Token::CloseBrace));

    stmt.define(
        choice((
            assign(expr.clone()).map(Stmt::Assign),
            param_decl().map(Stmt::Decl),
            console(expr).map(Stmt::Console),
            if_stmt.map(Stmt::If),
            while_stmt.map(Stmt::While),
            for_stmt.map(Stmt::For),
            class(stmt.clone()).map(Stmt::Class),
            return_stmt.map(Stmt::Return),
            block.map(Stmt::Block),
        ))
        .labelled("statement"),
    );

    stmt_list.define(stmt.repeated().map(StmtList::new));

    stmt_list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mel::ast::{AstNode, BinOp, DeclType, Identifier, ParamDecl};
    use crate::mel::parsing::expressions::expression;
    use crate::mel::parsing::parse_rule;

    fn parse_stmts(source: &str) -> Result<StmtList, Vec<ParserError>> {
        parse_rule(statement_list(expression()), source)
    }

    fn single(source: &str) -> Stmt {
        let mut list = parse_stmts(source).expect("parses");
        assert_eq!(list.len(), 1, "expected one statement in {source:?}");
        list.statements.remove(0)
    }

    #[test]
    fn test_empty_program() {
        assert!(parse_stmts("").unwrap().is_empty());
    }

    #[test]
    fn test_assign_to_declaration() {
        assert_eq!(
            single("double c = 12;"),
            Stmt::Assign(Assign::new(
                AssignTarget::Decl(ParamDecl::new(DeclType::Double, Identifier::new("c"))),
                Expr::number(12.0),
            ))
        );
    }

    #[test]
    fn test_bare_declaration() {
        assert_eq!(
            single("int a;"),
            Stmt::Decl(ParamDecl::new(DeclType::Int, Identifier::new("a")))
        );
    }

    #[test]
    fn test_console_calls() {
        assert_eq!(
            single("Console.ReadLine(w);"),
            Stmt::Console(ConsoleCall::read_line(Identifier::new("w")))
        );
        assert_eq!(
            single("Console.WriteLine(12 + 6);"),
            Stmt::Console(ConsoleCall::write_line(Expr::binary(
                BinOp::Add,
                Expr::number(12.0),
                Expr::number(6.0)
            )))
        );
    }

    #[test]
    fn test_dangling_else_binds_to_inner_if() {
        let stmt = single("if (a) if (b) return 1; else return 2;");
        let outer = match stmt {
            Stmt::If(outer) => outer,
            other => panic!("Expected if, found {:?}", other),
        };
        assert!(outer.else_branch.is_none());
        assert_eq!(outer.then_branch.children().len(), 3);
    }

    #[test]
    fn test_for_header_clauses() {
        let stmt = single("for (int i = 0; i < 10; i) { }");
        assert_eq!(
            stmt.render_tree(),
            vec![
                "for",
                "├ =",
                "│ ├ int",
                "│ │ └ i",
                "│ └ 0.0",
                "├ <",
                "│ ├ i",
                "│ └ 10.0",
                "├ i",
                "└ ...",
            ]
        );
    }

    #[test]
    fn test_for_increment_takes_no_terminator() {
        assert!(parse_stmts("for (int i = 0; i < 10; i;) { }").is_err());
    }

    #[test]
    fn test_nested_blocks() {
        let list = parse_stmts("{ { } a = 1; }").unwrap();
        assert_eq!(
            list.render_tree(),
            vec!["...", "└ ...", "  ├ ...", "  └ =", "    ├ a", "    └ 1.0"]
        );
    }

    #[test]
    fn test_missing_semicolon() {
        assert!(parse_stmts("a = 1").is_err());
        assert!(parse_stmts("return a").is_err());
    }
}

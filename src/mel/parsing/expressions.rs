//! Expression rules
//!
//! Two precedence tiers, each a flat `operand (operator operand)*` sequence
//! folded from the left:
//!
//! ```text
//! operand    := identifier | number | "(" expression ")"
//! term       := operand    (("*" | "/" | comparison) operand)*
//! expression := term       (("+" | "-" | comparison) term)*
//! comparison := ">" | ">=" | "<" | "<=" | "==" | "!=" | "||" | "&&"
//! ```
//!
//! Relational and logical operators are accepted at both tiers and bind at
//! whichever tier first sees them, so `a > b + c` is `(a > b) + c` and
//! `a + b > c` is `a + (b > c)`. There is no separate comparison level.

use chumsky::prelude::*;
use std::ops::Range;

use super::error::ParserError;
use crate::mel::ast::{BinOp, Expr, Identifier, NumberLiteral};
use crate::mel::lexing::Token;

pub fn identifier() -> impl Parser<Token, Identifier, Error = ParserError> + Clone {
    select! { Token::Ident(name) => Identifier::new(name) }.labelled("identifier")
}

/// A number, optionally signed. The sign only belongs to the literal when it
/// touches the digits: `-1` is a literal, `- 1` is not.
pub fn number() -> impl Parser<Token, NumberLiteral, Error = ParserError> + Clone {
    let sign = just(Token::Minus)
        .to(-1.0)
        .or(just(Token::Plus).to(1.0))
        .map_with_span(|factor: f64, span: Range<usize>| (factor, span));

    let digits = filter_map(|span, token| match token {
        Token::Number(text) => match text.parse::<f64>() {
            Ok(value) => Ok((value, span)),
            Err(e) => Err(Simple::custom(span, format!("invalid number {text:?}: {e}"))),
        },
        other => Err(Simple::expected_input_found(span, None, Some(other))),
    });

    sign.or_not()
        .then(digits)
        .try_map(|(sign, (value, digits_span)), span| match sign {
            None => Ok(NumberLiteral::new(value)),
            Some((factor, sign_span)) if sign_span.end == digits_span.start => {
                Ok(NumberLiteral::new(factor * value))
            }
            Some(_) => Err(Simple::custom(
                span,
                "a sign must be written directly before its number",
            )),
        })
        .labelled("number")
}

/// Relational and logical operators, shared by both tiers
fn comparison_op() -> impl Parser<Token, BinOp, Error = ParserError> + Clone {
    select! {
        Token::Gt => BinOp::Gt,
        Token::Ge => BinOp::Ge,
        Token::Lt => BinOp::Lt,
        Token::Le => BinOp::Le,
        Token::EqEq => BinOp::Eq,
        Token::NotEq => BinOp::Ne,
        Token::OrOr => BinOp::Or,
        Token::AndAnd => BinOp::And,
    }
}

fn term_op() -> impl Parser<Token, BinOp, Error = ParserError> + Clone {
    comparison_op().or(select! {
        Token::Star => BinOp::Mul,
        Token::Slash => BinOp::Div,
    })
}

fn expression_op() -> impl Parser<Token, BinOp, Error = ParserError> + Clone {
    comparison_op().or(select! {
        Token::Plus => BinOp::Add,
        Token::Minus => BinOp::Sub,
    })
}

/// `node := operand0; node := BinaryOp(op_i, node, operand_i)` for each pair
fn fold_left(lhs: Expr, (op, rhs): (BinOp, Expr)) -> Expr {
    Expr::binary(op, lhs, rhs)
}

/// The full expression rule. Builds a fresh parser; callers that need it in
/// several places should build it once and clone it.
pub fn expression() -> impl Parser<Token, Expr, Error = ParserError> + Clone {
    recursive(|expression| {
        let operand = choice((
            identifier().map(Expr::Identifier),
            number().map(Expr::Number),
            expression.delimited_by(just(Token::OpenParen), just(Token::CloseParen)),
        ));

        let term = operand
            .clone()
            .then(term_op().then(operand).repeated())
            .foldl(fold_left);

        term.clone()
            .then(expression_op().then(term).repeated())
            .foldl(fold_left)
    })
    .labelled("expression")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mel::ast::AstNode;
    use crate::mel::parsing::parse_rule;

    fn parse_expr(source: &str) -> Result<Expr, Vec<ParserError>> {
        parse_rule(expression(), source)
    }

    fn shape(source: &str) -> Vec<String> {
        parse_expr(source).expect("parses").render_tree()
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(parse_expr("a").unwrap(), Expr::ident("a"));
        assert_eq!(parse_expr("12").unwrap(), Expr::number(12.0));
    }

    #[test]
    fn test_same_tier_folds_left() {
        assert_eq!(
            parse_expr("1 - 2 - 3").unwrap(),
            Expr::binary(
                BinOp::Sub,
                Expr::binary(BinOp::Sub, Expr::number(1.0), Expr::number(2.0)),
                Expr::number(3.0),
            )
        );
    }

    #[test]
    fn test_term_binds_tighter() {
        assert_eq!(
            parse_expr("1 + 2 * 3").unwrap(),
            Expr::binary(
                BinOp::Add,
                Expr::number(1.0),
                Expr::binary(BinOp::Mul, Expr::number(2.0), Expr::number(3.0)),
            )
        );
    }

    #[test]
    fn test_comparison_binds_at_term_tier() {
        // (a > b) + c
        assert_eq!(shape("a > b + c"), vec!["+", "├ >", "│ ├ a", "│ └ b", "└ c"]);
        // a + (b > c)
        assert_eq!(shape("a + b > c"), vec!["+", "├ a", "└ >", "  ├ b", "  └ c"]);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            shape("(a + b) * c"),
            vec!["*", "├ +", "│ ├ a", "│ └ b", "└ c"]
        );
    }

    #[test]
    fn test_signed_literals() {
        assert_eq!(parse_expr("-1").unwrap(), Expr::number(-1.0));
        assert_eq!(
            parse_expr("2 * -3").unwrap(),
            Expr::binary(BinOp::Mul, Expr::number(2.0), Expr::number(-3.0))
        );
        assert_eq!(
            parse_expr("a -1").unwrap(),
            Expr::binary(BinOp::Sub, Expr::ident("a"), Expr::number(1.0))
        );
    }

    #[test]
    fn test_detached_sign_is_rejected() {
        assert!(parse_expr("2 * - 3").is_err());
        assert!(parse_expr("- 1").is_err());
        assert!(parse_expr("-/* gap */1").is_err());
    }

    #[test]
    fn test_missing_operand() {
        assert!(parse_expr("1 +").is_err());
        assert!(parse_expr("(1").is_err());
    }
}

//! Parser module for mel
//!
//! The grammar is built from chumsky combinators over the logos token
//! stream. Each rule module holds one family of rules and the closures that
//! reduce a match straight into AST nodes:
//!
//! - [`expressions`]: operands and the two left-folded operator tiers
//! - [`declarations`]: typed names, methods, classes
//! - [`statements`]: statements and statement lists
//! - [`grammar`]: the assembled program rule
//!
//! ## Testing
//!
//! Rule-level tests sit next to each rule. Whole-program tests live under
//! `tests/` and use the assertions in [`crate::mel::testing`].

pub mod declarations;
pub mod error;
pub mod expressions;
pub mod grammar;
pub mod statements;

pub use error::{ParserError, SyntaxError};
pub use grammar::Grammar;

use crate::mel::ast::StmtList;

thread_local! {
    static GRAMMAR: Grammar = Grammar::new();
}

/// Main parser function that takes source text and returns the program root
///
/// Uses a grammar built once per thread. Call [`Grammar::parse`] directly to
/// control where the grammar lives.
pub fn parse(source: &str) -> Result<StmtList, SyntaxError> {
    GRAMMAR.with(|grammar| grammar.parse(source))
}

/// Run a single rule over the whole of `source`, with byte spans as in
/// [`Grammar::parse`]
#[cfg(test)]
pub(crate) fn parse_rule<P, O>(rule: P, source: &str) -> Result<O, Vec<ParserError>>
where
    P: chumsky::Parser<crate::mel::lexing::Token, O, Error = ParserError>,
{
    use chumsky::prelude::*;

    let tokens = crate::mel::lexing::tokenize(source).expect("lexes");
    let end_of_input = source.len()..source.len();
    rule.then_ignore(end())
        .parse(chumsky::Stream::from_iter(end_of_input, tokens.into_iter()))
}

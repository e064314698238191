//! The assembled mel grammar
//!
//! [`Grammar::new`] wires every rule together once. The result is read-only:
//! parsing never changes it, so one value can serve any number of parses.
//! It is not `Send`, since chumsky's recursive rule cells are reference
//! counted; build one grammar per thread.

use chumsky::prelude::*;
use chumsky::Stream;
use std::time::Instant;

use super::error::{ParserError, SyntaxError};
use super::expressions::expression;
use super::statements::statement_list;
use crate::mel::ast::StmtList;
use crate::mel::lexing::{tokenize, Token};

/// `program := stmtList <end of input>`
fn program() -> impl Parser<Token, StmtList, Error = ParserError> + Clone {
    statement_list(expression()).then_ignore(end())
}

/// An immutable, reusable mel parser
pub struct Grammar {
    program: BoxedParser<'static, Token, StmtList, ParserError>,
}

impl Grammar {
    pub fn new() -> Self {
        Self {
            program: program().boxed(),
        }
    }

    /// Parse a whole program. Either every byte of `source` belongs to the
    /// returned tree or the call fails.
    pub fn parse(&self, source: &str) -> Result<StmtList, SyntaxError> {
        let started = Instant::now();

        let tokens =
            tokenize(source).map_err(|err| SyntaxError::from_lex_error(source, err))?;
        tracing::debug!(
            bytes = source.len(),
            tokens = tokens.len(),
            "parsing mel source"
        );

        let end_of_input = source.len()..source.len();
        let result = self
            .program
            .parse(Stream::from_iter(end_of_input, tokens.into_iter()))
            .map_err(|errors| SyntaxError::from_parser_errors(source, errors));

        match &result {
            Ok(program) => tracing::debug!(
                statements = program.len(),
                elapsed_us = started.elapsed().as_micros() as u64,
                "parsed mel source"
            ),
            Err(error) => tracing::debug!(%error, "mel source rejected"),
        }

        result
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

//! Syntax errors
//!
//! Every way a parse can fail ends up as a [`SyntaxError`]: an unknown
//! character from the lexer, a token no rule accepts, a malformed number, or
//! input left over after the last statement.

use chumsky::error::{Simple, SimpleReason};
use std::fmt;
use std::ops::Range;

use crate::mel::ast::{Position, SourceLocation};
use crate::mel::lexing::{LexError, Token};

/// Type alias for parser error
pub type ParserError = Simple<Token>;

const END_OF_INPUT: &str = "end of input";

/// The single error kind produced by the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Byte range of the offending token
    pub span: Range<usize>,
    pub position: Position,
    /// What was found instead; `None` at end of input
    pub found: Option<String>,
    /// Alternatives the grammar would have accepted, sorted
    pub expected: Vec<String>,
    /// Rule being parsed when the error happened, if known
    pub rule: Option<&'static str>,
    /// Explanation for errors that are not plain token mismatches
    pub message: Option<String>,
}

impl SyntaxError {
    pub(crate) fn from_lex_error(source: &str, err: LexError) -> Self {
        let position = SourceLocation::new(source).range_start(&err.span);
        let message = if err.text.starts_with("/*") {
            "unterminated block comment".to_string()
        } else {
            format!("unrecognized character {:?}", err.text)
        };
        SyntaxError {
            span: err.span,
            position,
            message: Some(message),
            found: Some(err.text),
            expected: Vec::new(),
            rule: None,
        }
    }

    /// Pick the furthest of the parser's errors and describe it
    pub(crate) fn from_parser_errors(source: &str, errors: Vec<ParserError>) -> Self {
        let locations = SourceLocation::new(source);
        match errors.into_iter().max_by_key(|e| e.span().start) {
            Some(error) => Self::from_parser_error(&locations, error),
            None => SyntaxError {
                span: 0..0,
                position: Position::new(0, 0),
                found: None,
                expected: Vec::new(),
                rule: None,
                message: Some("parse failed".to_string()),
            },
        }
    }

    fn from_parser_error(locations: &SourceLocation, error: ParserError) -> Self {
        let span = error.span();
        let mut expected: Vec<String> = error
            .expected()
            .map(|token| match token {
                Some(token) => token.to_string(),
                None => END_OF_INPUT.to_string(),
            })
            .collect();
        expected.sort();
        expected.dedup();

        let message = match error.reason() {
            SimpleReason::Custom(msg) => Some(msg.clone()),
            SimpleReason::Unclosed { delimiter, .. } => Some(format!("unclosed {delimiter}")),
            SimpleReason::Unexpected => None,
        };

        SyntaxError {
            position: locations.range_start(&span),
            span,
            found: error.found().map(|t| t.to_string()),
            expected,
            rule: error.label(),
            message,
        }
    }

    /// Whether the parser stopped at the end of the input
    pub fn at_end_of_input(&self) -> bool {
        self.found.is_none()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.position)?;
        if let Some(message) = &self.message {
            return f.write_str(message);
        }

        write!(
            f,
            "unexpected {}",
            self.found.as_deref().unwrap_or(END_OF_INPUT)
        )?;
        if let Some(rule) = self.rule {
            write!(f, " while parsing {rule}")?;
        }
        if !self.expected.is_empty() {
            write!(f, ", expected one of: {}", self.expected.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

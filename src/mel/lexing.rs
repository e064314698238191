//! Lexer module for mel
//!
//! Tokenization is handled entirely by logos (see [`tokens`]). This module
//! pairs every token with its byte span, which the parser threads through to
//! its error reports, and rejects any character that starts no token.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;
use std::fmt;
use std::ops::Range;

/// A token together with its byte range in the source
pub type TokenSpan = (Token, Range<usize>);

/// A character sequence that matches no token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub span: Range<usize>,
    pub text: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized input {:?} at byte {}",
            self.text, self.span.start
        )
    }
}

impl std::error::Error for LexError {}

/// Tokenize a source string, keeping spans
///
/// Fails on the first unrecognised character; there is no recovery.
pub fn tokenize(source: &str) -> Result<Vec<TokenSpan>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(LexError {
                    span: lexer.span(),
                    text: lexer.slice().to_string(),
                })
            }
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

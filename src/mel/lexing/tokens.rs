//! Token definitions for mel
//!
//! All terminals of the grammar are defined here with the logos derive macro.
//! Keywords are reserved: logos prefers a `#[token]` over the identifier regex
//! when both match the same text, and the longest match wins otherwise, so
//! `if` is a keyword while `iffy` is an identifier.
//!
//! Whitespace and `// line` comments are skipped by the `skip` pattern.
//! `/* block */` comments are skipped by a callback that scans ahead for the
//! closing `*/`; an unterminated one is a lexing error.
use logos::{FilterResult, Lexer, Logos};
use std::fmt;

use crate::mel::ast::{AccessMod, DeclType};

/// All possible tokens in mel source
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+|//[^\n]*")]
pub enum Token {
    // Keywords
    #[token("Console")]
    Console,
    #[token("ReadLine")]
    ReadLine,
    #[token("WriteLine")]
    WriteLine,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("class")]
    Class,

    #[token("public", |_| AccessMod::Public)]
    #[token("private", |_| AccessMod::Private)]
    #[token("protected", |_| AccessMod::Protected)]
    Access(AccessMod),

    #[token("int", |_| DeclType::Int)]
    #[token("double", |_| DeclType::Double)]
    #[token("string", |_| DeclType::String)]
    #[token("bool", |_| DeclType::Bool)]
    #[token("char", |_| DeclType::Char)]
    #[token("float", |_| DeclType::Float)]
    #[token("void", |_| DeclType::Void)]
    Type(DeclType),

    // Patterns. Numbers keep their spelling; the parser converts them.
    #[regex(r"[0-9]+\.?[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    // Punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("=")]
    Assign,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    #[token("/*", skip_block_comment)]
    Slash,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("||")]
    OrOr,
    #[token("&&")]
    AndAnd,
}

/// Consume a block comment after its opening `/*`. Never emits a token.
/// An unterminated comment swallows the rest of the input as one error.
fn skip_block_comment(lex: &mut Lexer<Token>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(())
        }
    }
}

impl Token {
    /// Check if this token is a reserved word
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Console
                | Token::ReadLine
                | Token::WriteLine
                | Token::Return
                | Token::If
                | Token::Else
                | Token::While
                | Token::For
                | Token::Class
                | Token::Access(_)
                | Token::Type(_)
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Console => f.write_str("Console"),
            Token::ReadLine => f.write_str("ReadLine"),
            Token::WriteLine => f.write_str("WriteLine"),
            Token::Return => f.write_str("return"),
            Token::If => f.write_str("if"),
            Token::Else => f.write_str("else"),
            Token::While => f.write_str("while"),
            Token::For => f.write_str("for"),
            Token::Class => f.write_str("class"),
            Token::Access(access) => write!(f, "{access}"),
            Token::Type(decl_type) => write!(f, "{decl_type}"),
            Token::Number(text) => write!(f, "number {text}"),
            Token::Ident(name) => write!(f, "identifier {name}"),
            Token::OpenParen => f.write_str("("),
            Token::CloseParen => f.write_str(")"),
            Token::OpenBrace => f.write_str("{"),
            Token::CloseBrace => f.write_str("}"),
            Token::Semicolon => f.write_str(";"),
            Token::Dot => f.write_str("."),
            Token::Comma => f.write_str(","),
            Token::Assign => f.write_str("="),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Gt => f.write_str(">"),
            Token::Ge => f.write_str(">="),
            Token::Lt => f.write_str("<"),
            Token::Le => f.write_str("<="),
            Token::EqEq => f.write_str("=="),
            Token::NotEq => f.write_str("!="),
            Token::OrOr => f.write_str("||"),
            Token::AndAnd => f.write_str("&&"),
        }
    }
}

//! Declaration rules: typed names, methods and classes
//!
//! ```text
//! paramDecl := type identifier [";"]
//! method    := access type identifier "(" [paramDecl ("," paramDecl)*] ")" stmt
//! class     := "class" identifier "{" method* "}"
//! ```
//!
//! `paramDecl` swallows an optional trailing `;`. That one rule serves bare
//! declarations (`int a;`), the left side of `int a = 1;` and method
//! parameters alike.

use chumsky::prelude::*;

use super::error::ParserError;
use super::expressions::identifier;
use crate::mel::ast::{
    AccessMod, Class, DeclType, Method, MethodDecl, ParamDecl, ParamDeclList, Stmt,
};
use crate::mel::lexing::Token;

pub fn decl_type() -> impl Parser<Token, DeclType, Error = ParserError> + Clone {
    select! { Token::Type(decl_type) => decl_type }.labelled("type")
}

pub fn access_modifier() -> impl Parser<Token, AccessMod, Error = ParserError> + Clone {
    select! { Token::Access(access) => access }.labelled("access modifier")
}

pub fn param_decl() -> impl Parser<Token, ParamDecl, Error = ParserError> + Clone {
    decl_type()
        .then(identifier())
        .then_ignore(just(Token::Semicolon).or_not())
        .map(|(decl_type, name)| ParamDecl::new(decl_type, name))
}

/// `None` for an empty parameter list
fn param_list() -> impl Parser<Token, Option<ParamDeclList>, Error = ParserError> + Clone {
    param_decl()
        .separated_by(just(Token::Comma))
        .at_least(1)
        .map(ParamDeclList::new)
        .or_not()
        .delimited_by(just(Token::OpenParen), just(Token::CloseParen))
}

pub fn method<S>(stmt: S) -> impl Parser<Token, Method, Error = ParserError> + Clone
where
    S: Parser<Token, Stmt, Error = ParserError> + Clone,
{
    access_modifier()
        .then(decl_type())
        .then(identifier())
        .then(param_list())
        .then(stmt)
        .map(|((((access, return_type), name), params), body)| {
            Method::new(MethodDecl::new(access, return_type), name, params, Some(body))
        })
        .labelled("method")
}

pub fn class<S>(stmt: S) -> impl Parser<Token, Class, Error = ParserError> + Clone
where
    S: Parser<Token, Stmt, Error = ParserError> + Clone,
{
    just(Token::Class)
        .ignore_then(identifier())
        .then(
            method(stmt)
                .repeated()
                .delimited_by(just(Token::OpenBrace), just(Token::CloseBrace)),
        )
        .map(|(name, methods)| Class::new(name, methods))
        .labelled("class")
}

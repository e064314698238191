//! Declarations: typed parameters, methods and classes

use serde::Serialize;

use super::super::ops::{AccessMod, DeclType};
use super::expression::Identifier;
use super::statement::Stmt;

/// `type name`, used for variable declarations and method parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParamDecl {
    pub decl_type: DeclType,
    pub name: Identifier,
}

impl ParamDecl {
    pub fn new(decl_type: DeclType, name: Identifier) -> Self {
        Self { decl_type, name }
    }
}

/// Parameter list of a method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDeclList {
    pub params: Vec<ParamDecl>,
}

impl ParamDeclList {
    pub fn new(params: Vec<ParamDecl>) -> Self {
        Self { params }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Access modifier and return type of a method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MethodDecl {
    pub access: AccessMod,
    pub return_type: DeclType,
}

impl MethodDecl {
    pub fn new(access: AccessMod, return_type: DeclType) -> Self {
        Self {
            access,
            return_type,
        }
    }
}

/// A method inside a class body.
///
/// The grammar always supplies a body, but a method built by hand may leave
/// it out; `params` is `None` when the parentheses are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Method {
    pub decl: MethodDecl,
    pub name: Identifier,
    pub params: Option<ParamDeclList>,
    pub body: Option<Box<Stmt>>,
}

impl Method {
    pub fn new(
        decl: MethodDecl,
        name: Identifier,
        params: Option<ParamDeclList>,
        body: Option<Stmt>,
    ) -> Self {
        Self {
            decl,
            name,
            params,
            body: body.map(Box::new),
        }
    }
}

/// `class Name { methods }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Class {
    pub name: Identifier,
    pub methods: Vec<Method>,
}

impl Class {
    pub fn new(name: Identifier, methods: Vec<Method>) -> Self {
        Self { name, methods }
    }
}

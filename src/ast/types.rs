//! Type annotations as written in source.
//!
//! Types are kept symbolic: `number` is just a name here and nothing checks
//! that it refers to anything.

use super::ast::Type;

/// A named type reference, e.g. `number`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolType {
    pub name: String,
}

/// `[]T`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub underlying: Box<Type>,
}

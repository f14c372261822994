use crate::lexer::tokens::Token;

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// String Expression
/// Represents a string literal in the AST, with escapes already decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
}

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
}

// COMPLEX

/// Binary Expression
/// Represents an infix operation, e.g. `a + b` or `a .. b`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Prefix Expression
/// Represents a unary operation, e.g. `-a` or `!a`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: Box<Expr>,
}

/// Assignment Expression
/// The assignee is not checked for assignability.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: Box<Expr>,
    pub operator: Token,
    pub value: Box<Expr>,
}

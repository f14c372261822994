use super::ast::{Expr, Stmt, Type};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// `let`/`const` declaration. At least one of `explicit_type` and
/// `assigned_value` is present, and constants always carry a value.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub is_constant: bool,
    pub assigned_value: Option<Expr>,
    pub explicit_type: Option<Type>,
}

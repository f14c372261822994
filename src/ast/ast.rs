use super::{
    expressions::{AssignmentExpr, BinaryExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr},
    statements::{BlockStmt, ExpressionStmt, VarDeclStmt},
    types::{ArrayType, SymbolType},
};

/// Statement
///
/// Every statement kind the grammar can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
}

/// Expression
///
/// Every expression kind the grammar can produce. Children are owned, so an
/// expression is always a tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    String(StringExpr),
    Symbol(SymbolExpr),
    Binary(BinaryExpr),
    Prefix(PrefixExpr),
    Assignment(AssignmentExpr),
}

/// Type annotation
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Symbol(SymbolType),
    Array(ArrayType),
}

impl From<BlockStmt> for Stmt {
    fn from(stmt: BlockStmt) -> Self {
        Stmt::Block(stmt)
    }
}

impl From<ExpressionStmt> for Stmt {
    fn from(stmt: ExpressionStmt) -> Self {
        Stmt::Expression(stmt)
    }
}

impl From<VarDeclStmt> for Stmt {
    fn from(stmt: VarDeclStmt) -> Self {
        Stmt::VarDecl(stmt)
    }
}

impl From<NumberExpr> for Expr {
    fn from(expr: NumberExpr) -> Self {
        Expr::Number(expr)
    }
}

impl From<StringExpr> for Expr {
    fn from(expr: StringExpr) -> Self {
        Expr::String(expr)
    }
}

impl From<SymbolExpr> for Expr {
    fn from(expr: SymbolExpr) -> Self {
        Expr::Symbol(expr)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}

impl From<PrefixExpr> for Expr {
    fn from(expr: PrefixExpr) -> Self {
        Expr::Prefix(expr)
    }
}

impl From<AssignmentExpr> for Expr {
    fn from(expr: AssignmentExpr) -> Self {
        Expr::Assignment(expr)
    }
}

impl From<SymbolType> for Type {
    fn from(type_: SymbolType) -> Self {
        Type::Symbol(type_)
    }
}

impl From<ArrayType> for Type {
    fn from(type_: ArrayType) -> Self {
        Type::Array(type_)
    }
}

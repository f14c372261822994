use std::collections::HashMap;

use crate::{ast::ast::{Expr, Stmt}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::{Grammar, Parser}, stmt::*};

/// Operator precedence, lowest to highest. Only some ranks are wired to
/// handlers; the rest are kept so the grammar can grow without renumbering.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Comma,
    Assignment,
    Logical,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
    Primary
}

pub type StmtHandler = fn(&mut Parser<'_>) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser<'_>) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, Expr, BindingPower) -> Result<Expr, Error>;

/// Registers every expression and statement handler of the base grammar.
///
/// Registering twice leaves the tables unchanged; later entries for a kind
/// replace earlier ones.
pub fn create_token_lookups(grammar: &mut Grammar) {
    grammar.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);
    grammar.led(TokenKind::PlusEquals, BindingPower::Assignment, parse_assignment_expr);
    grammar.led(TokenKind::MinusEquals, BindingPower::Assignment, parse_assignment_expr);

    // Logical
    grammar.led(TokenKind::And, BindingPower::Logical, parse_binary_expr);
    grammar.led(TokenKind::Or, BindingPower::Logical, parse_binary_expr);
    grammar.led(TokenKind::DotDot, BindingPower::Logical, parse_binary_expr);

    // Relational
    grammar.led(TokenKind::Less, BindingPower::Relational, parse_binary_expr);
    grammar.led(TokenKind::LessEquals, BindingPower::Relational, parse_binary_expr);
    grammar.led(TokenKind::Greater, BindingPower::Relational, parse_binary_expr);
    grammar.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_binary_expr);
    grammar.led(TokenKind::Equals, BindingPower::Relational, parse_binary_expr);
    grammar.led(TokenKind::NotEquals, BindingPower::Relational, parse_binary_expr);

    // Additive and multiplicative
    grammar.led(TokenKind::Plus, BindingPower::Additive, parse_binary_expr);
    grammar.led(TokenKind::Dash, BindingPower::Additive, parse_binary_expr);
    grammar.led(TokenKind::Star, BindingPower::Multiplicative, parse_binary_expr);
    grammar.led(TokenKind::Slash, BindingPower::Multiplicative, parse_binary_expr);
    grammar.led(TokenKind::Percent, BindingPower::Multiplicative, parse_binary_expr);

    // Literals and symbols
    grammar.nud(TokenKind::Number, parse_primary_expr);
    grammar.nud(TokenKind::Identifier, parse_primary_expr);
    grammar.nud(TokenKind::String, parse_primary_expr);
    grammar.nud(TokenKind::Dash, parse_prefix_expr);
    grammar.nud(TokenKind::Not, parse_prefix_expr);
    grammar.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    grammar.stmt(TokenKind::Const, parse_var_decl_stmt);
    grammar.stmt(TokenKind::Let, parse_var_decl_stmt);
    grammar.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

use crate::{
    ast::{
        ast::Stmt,
        statements::{BlockStmt, ExpressionStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{parser::Parser, types::parse_type};

/// Dispatches on the leading token; anything without a statement handler is
/// an expression followed by `;`.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser.grammar().get_stmt(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(ExpressionStmt { expression }.into())
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let is_constant = parser.advance().kind == TokenKind::Const;
    let identifier = parser.expect(TokenKind::Identifier)?.value;

    let explicit_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_type(parser, BindingPower::Default)?)
    } else {
        None
    };

    let assigned_value = if parser.current_token_kind() != TokenKind::Semicolon {
        parser.expect(TokenKind::Assignment)?;
        Some(parse_expr(parser, BindingPower::Assignment)?)
    } else if explicit_type.is_none() {
        return Err(parser.error(ErrorImpl::MissingTypeOrValue { identifier }));
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    if is_constant && assigned_value.is_none() {
        return Err(parser.error(ErrorImpl::ConstWithoutValue { identifier }));
    }

    Ok(VarDeclStmt {
        identifier,
        is_constant,
        assigned_value,
        explicit_type,
    }
    .into())
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(|parser| {
        parser.advance();

        let mut body = Vec::new();
        while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
            body.push(parse_stmt(parser)?);
        }

        parser.expect(TokenKind::CloseCurly)?;

        Ok(BlockStmt { body }.into())
    })
}

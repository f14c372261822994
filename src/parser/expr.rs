use crate::{
    ast::{
        ast::Expr,
        expressions::{AssignmentExpr, BinaryExpr, NumberExpr, PrefixExpr, StringExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Pratt loop: parse a NUD, then keep folding LEDs into the left operand
/// while the next token binds tighter than `bp`. Each call opens one nesting
/// level on the parser.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.nested(|parser| {
        let grammar = parser.grammar();

        let token_kind = parser.current_token_kind();
        let Some(nud_fn) = grammar.get_nud(token_kind) else {
            return Err(parser.error(ErrorImpl::MissingPrefixHandler {
                kind: token_kind,
                token: parser.current_token().value.clone(),
            }));
        };

        let mut left = nud_fn(parser)?;

        while grammar.get_bp(parser.current_token_kind()) > bp {
            let token_kind = parser.current_token_kind();
            let Some(led_fn) = grammar.get_led(token_kind) else {
                return Err(parser.error(ErrorImpl::MissingInfixHandler {
                    kind: token_kind,
                    token: parser.current_token().value.clone(),
                }));
            };

            left = led_fn(parser, left, grammar.get_bp(token_kind))?;
        }

        Ok(left)
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.current_token().value.clone();
            let value = token
                .parse::<f64>()
                .map_err(|_| parser.error(ErrorImpl::InvalidNumericLiteral { token }))?;
            parser.advance();

            Ok(NumberExpr { value }.into())
        }
        TokenKind::Identifier => Ok(SymbolExpr { value: parser.advance().value }.into()),
        TokenKind::String => Ok(StringExpr { value: parser.advance().value }.into()),
        kind => Err(parser.error(ErrorImpl::MissingPrefixHandler {
            kind,
            token: parser.current_token().value.clone(),
        })),
    }
}

/// Left associative: the right operand is parsed at the operator's own
/// binding power, so an equal-power operator after it is left for the
/// caller's loop.
pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }
    .into())
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(PrefixExpr {
        operator,
        right_expr: Box::new(rhs),
    }
    .into())
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator = parser.advance();
    let rhs = parse_expr(parser, bp)?;

    Ok(AssignmentExpr {
        assignee: Box::new(left),
        operator,
        value: Box::new(rhs),
    }
    .into())
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

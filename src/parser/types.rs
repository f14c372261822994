//! Type parsing implementation.
//!
//! Type annotations get their own Pratt tables, independent of the
//! expression ones. The base grammar knows two forms:
//!
//! - Symbol types (`number`)
//! - Array types (`[]number`, `[][]number`)
//!
//! No infix type handlers are registered yet; the LED table is where
//! generics or unions would go.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::Type,
        types::{ArrayType, SymbolType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::{Grammar, Parser}};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser<'_>) -> Result<Type, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser<'_>, Type, BindingPower) -> Result<Type, Error>;

pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;
pub type TypeBPLookup = HashMap<TokenKind, BindingPower>;

/// Initializes the type parsing lookup tables.
pub fn create_token_type_lookups(grammar: &mut Grammar) {
    grammar.type_nud(TokenKind::Identifier, parse_symbol_type);
    grammar.type_nud(TokenKind::OpenBracket, parse_array_type);
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(SymbolType { name: token.value }.into())
}

/// `[]` prefixes the element type, so `[][]T` is an array of arrays.
pub fn parse_array_type(parser: &mut Parser) -> Result<Type, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    parser.expect(TokenKind::CloseBracket)?;

    let underlying = parse_type(parser, BindingPower::Default)?;

    Ok(ArrayType { underlying: Box::new(underlying) }.into())
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<Type, Error> {
    parser.nested(|parser| {
        let grammar = parser.grammar();

        let token_kind = parser.current_token_kind();
        let Some(nud_fn) = grammar.get_type_nud(token_kind) else {
            return Err(parser.error(ErrorImpl::MissingTypePrefixHandler {
                kind: token_kind,
                token: parser.current_token().value.clone(),
            }));
        };

        let mut left = nud_fn(parser)?;

        while grammar.get_type_bp(parser.current_token_kind()) > bp {
            let token_kind = parser.current_token_kind();
            let Some(led_fn) = grammar.get_type_led(token_kind) else {
                return Err(parser.error(ErrorImpl::MissingTypeInfixHandler {
                    kind: token_kind,
                    token: parser.current_token().value.clone(),
                }));
            };

            left = led_fn(parser, left, grammar.get_type_bp(token_kind))?;
        }

        Ok(left)
    })
}

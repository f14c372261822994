//! Parser state and grammar tables.
//!
//! `Grammar` owns the three dispatch tables:
//! - Statement handlers, keyed by the statement's leading token
//! - NUD/LED handlers and binding powers for expressions
//! - NUD/LED handlers and binding powers for type annotations
//!
//! The tables are filled once and only read while parsing. `parse` uses a
//! process-wide default grammar; `parse_with_grammar` accepts an extended one.

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::{
    ast::statements::BlockStmt,
    errors::errors::{Error, ErrorImpl, Position},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
    types::{
        create_token_type_lookups, TypeBPLookup, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler,
        TypeNUDLookup,
    },
};

/// Deepest nesting of expressions, types and blocks a parse accepts before
/// failing with `NestingTooDeep`.
pub const MAX_NESTING_DEPTH: usize = 128;

lazy_static! {
    static ref DEFAULT_GRAMMAR: Grammar = Grammar::new();
}

/// Dispatch tables for statements, expressions and types.
#[derive(Clone)]
pub struct Grammar {
    /// Lookup table for statement parsing handlers
    pub(crate) stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    pub(crate) nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    pub(crate) led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    pub(crate) binding_power_lookup: BPLookup,
    /// Lookup table for type null denotation handlers
    pub(crate) type_nud_lookup: TypeNUDLookup,
    /// Lookup table for type left denotation handlers
    pub(crate) type_led_lookup: TypeLEDLookup,
    /// Lookup table for type binding powers
    pub(crate) type_binding_power_lookup: TypeBPLookup,
}

impl Grammar {
    /// Creates a grammar with every handler of the base language registered.
    pub fn new() -> Self {
        let mut grammar = Grammar::empty();
        create_token_lookups(&mut grammar);
        create_token_type_lookups(&mut grammar);
        grammar
    }

    /// Creates a grammar with no handlers at all.
    pub fn empty() -> Self {
        Grammar {
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            type_led_lookup: HashMap::new(),
            type_binding_power_lookup: HashMap::new(),
        }
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token. The token's
    /// binding power is left alone, so a kind can be both prefix and infix.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup.insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type left denotation handler.
    pub fn type_led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: TypeLEDHandler) {
        self.type_binding_power_lookup.insert(kind, binding_power);
        self.type_led_lookup.insert(kind, led_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Binding power of `kind` in expression position; unregistered kinds
    /// bind at `Default` and therefore end an expression.
    pub fn get_bp(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup.get(&kind).copied().unwrap_or(BindingPower::Default)
    }

    pub fn get_type_nud(&self, kind: TokenKind) -> Option<TypeNUDHandler> {
        self.type_nud_lookup.get(&kind).copied()
    }

    pub fn get_type_led(&self, kind: TokenKind) -> Option<TypeLEDHandler> {
        self.type_led_lookup.get(&kind).copied()
    }

    pub fn get_type_bp(&self, kind: TokenKind) -> BindingPower {
        self.type_binding_power_lookup.get(&kind).copied().unwrap_or(BindingPower::Default)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::new()
    }
}

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream and a cursor into it. The cursor never moves past
/// the first `EOF` token.
pub struct Parser<'g> {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Expressions, types and blocks currently open
    depth: usize,
    grammar: &'g Grammar,
}

impl<'g> Parser<'g> {
    /// Creates a new Parser instance. A missing trailing `EOF` is appended so
    /// the cursor always has a token to rest on.
    pub fn new(mut tokens: Vec<Token>, grammar: &'g Grammar) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            tokens.push(Token { kind: TokenKind::EOF, value: String::from("EOF") });
        }

        Parser { tokens, pos: 0, depth: 0, grammar }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if token.kind != TokenKind::EOF {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error naming both kinds.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            return Err(self.error(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                received: token.kind,
                token: token.value.clone(),
            }));
        }

        Ok(self.advance())
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the current position in the token stream.
    pub fn get_position(&self) -> Position {
        Position::Token(self.pos)
    }

    /// Runs `parse_fn` one nesting level deeper. Fails instead once
    /// `MAX_NESTING_DEPTH` levels are already open.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            debug!(pos = self.pos, "nesting limit reached");
            return Err(self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                token: self.current_token().value.clone(),
            }));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;

        result
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }
}

/// Parses a stream of tokens into a top-level block using the default
/// grammar.
///
/// # Returns
///
/// The root BlockStmt, or the first Error encountered.
pub fn parse(tokens: Vec<Token>) -> Result<BlockStmt, Error> {
    parse_with_grammar(tokens, &DEFAULT_GRAMMAR)
}

/// Parses a stream of tokens with a caller-supplied grammar.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_with_grammar(tokens: Vec<Token>, grammar: &Grammar) -> Result<BlockStmt, Error> {
    let mut parser = Parser::new(tokens, grammar);

    let mut body = vec![];

    while parser.has_tokens() {
        let stmt = parse_stmt(&mut parser)?;
        trace!(pos = parser.pos, "statement parsed");
        body.push(stmt);
    }

    debug!(statements = body.len(), "parsed");

    Ok(BlockStmt { body })
}

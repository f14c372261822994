use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// Where a failure was detected: a byte offset while tokenizing, or the index
/// of the offending token while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Source(usize),
    Token(usize),
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Source(offset) => write!(f, "byte {}", offset),
            Position::Token(index) => write!(f, "token {}", index),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognizedToken { .. } => "UnrecognizedToken",
            ErrorImpl::MissingPrefixHandler { .. } => "MissingPrefixHandler",
            ErrorImpl::MissingInfixHandler { .. } => "MissingInfixHandler",
            ErrorImpl::MissingTypePrefixHandler { .. } => "MissingTypePrefixHandler",
            ErrorImpl::MissingTypeInfixHandler { .. } => "MissingTypeInfixHandler",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidNumericLiteral { .. } => "InvalidNumericLiteral",
            ErrorImpl::MissingTypeOrValue { .. } => "MissingTypeOrValue",
            ErrorImpl::ConstWithoutValue { .. } => "ConstWithoutValue",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognizedToken { .. } => ErrorTip::None,
            ErrorImpl::MissingPrefixHandler { token, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                token
            )),
            ErrorImpl::MissingInfixHandler { token, .. } => ErrorTip::Suggestion(format!(
                "`{}` has a binding power but cannot continue an expression",
                token
            )),
            ErrorImpl::MissingTypePrefixHandler { token, .. } => {
                ErrorTip::Suggestion(format!("`{}` cannot start a type", token))
            }
            ErrorImpl::MissingTypeInfixHandler { token, .. } => ErrorTip::Suggestion(format!(
                "`{}` has a binding power but cannot continue a type",
                token
            )),
            ErrorImpl::UnexpectedToken { expected: TokenKind::Semicolon, token, .. } => {
                ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, did you miss a semicolon?",
                    token
                ))
            }
            ErrorImpl::UnexpectedToken { expected, token, .. } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                token, expected
            )),
            ErrorImpl::InvalidNumericLiteral { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::MissingTypeOrValue { identifier } => ErrorTip::Suggestion(format!(
                "Expected explicit type or value for `{}`",
                identifier
            )),
            ErrorImpl::ConstWithoutValue { identifier } => ErrorTip::Suggestion(format!(
                "Constant `{}` must be given a value",
                identifier
            )),
            ErrorImpl::NestingTooDeep { limit, .. } => ErrorTip::Suggestion(format!(
                "Expressions, types and blocks nest at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognized token near {remainder:?}")]
    UnrecognizedToken { remainder: String },
    #[error("no prefix handler for {kind} ({token:?})")]
    MissingPrefixHandler { kind: TokenKind, token: String },
    #[error("no infix handler for {kind} ({token:?})")]
    MissingInfixHandler { kind: TokenKind, token: String },
    #[error("no type prefix handler for {kind} ({token:?})")]
    MissingTypePrefixHandler { kind: TokenKind, token: String },
    #[error("no type infix handler for {kind} ({token:?})")]
    MissingTypeInfixHandler { kind: TokenKind, token: String },
    #[error("expected {expected} but received {received} ({token:?})")]
    UnexpectedToken { expected: TokenKind, received: TokenKind, token: String },
    #[error("error parsing number: {token:?}")]
    InvalidNumericLiteral { token: String },
    #[error("variable {identifier:?} declared without explicit type or value")]
    MissingTypeOrValue { identifier: String },
    #[error("constant {identifier:?} declared without value")]
    ConstWithoutValue { identifier: String },
    #[error("nesting deeper than {limit} levels at {token:?}")]
    NestingTooDeep { limit: usize, token: String },
}

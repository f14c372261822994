//! Unit tests for error handling.
//!
//! This module contains tests for error names, tips and formatting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Position};
use crate::lexer::tokens::TokenKind;

fn unexpected(expected: TokenKind) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            expected,
            received: TokenKind::EOF,
            token: "EOF".to_string(),
        },
        Position::Token(3),
    )
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognizedToken {
            remainder: "@".to_string(),
        },
        Position::Source(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognizedToken");
    assert_eq!(error.get_position(), Position::Source(10));
}

#[test]
fn test_error_names() {
    let cases = [
        (ErrorImpl::MissingPrefixHandler { kind: TokenKind::Star, token: "*".to_string() }, "MissingPrefixHandler"),
        (ErrorImpl::MissingInfixHandler { kind: TokenKind::Question, token: "?".to_string() }, "MissingInfixHandler"),
        (ErrorImpl::MissingTypePrefixHandler { kind: TokenKind::Number, token: "5".to_string() }, "MissingTypePrefixHandler"),
        (ErrorImpl::MissingTypeInfixHandler { kind: TokenKind::Less, token: "<".to_string() }, "MissingTypeInfixHandler"),
        (ErrorImpl::InvalidNumericLiteral { token: "1.2.3".to_string() }, "InvalidNumericLiteral"),
        (ErrorImpl::MissingTypeOrValue { identifier: "x".to_string() }, "MissingTypeOrValue"),
        (ErrorImpl::ConstWithoutValue { identifier: "x".to_string() }, "ConstWithoutValue"),
        (ErrorImpl::NestingTooDeep { limit: 128, token: "(".to_string() }, "NestingTooDeep"),
    ];

    for (error_impl, name) in cases {
        assert_eq!(Error::new(error_impl, Position::Token(0)).get_error_name(), name);
    }
    assert_eq!(unexpected(TokenKind::CloseParen).get_error_name(), "UnexpectedToken");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognizedToken {
            remainder: "@".to_string(),
        },
        Position::Source(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_semicolon() {
    assert_eq!(
        unexpected(TokenKind::Semicolon).get_tip().to_string(),
        "Unexpected token: `EOF`, did you miss a semicolon?"
    );
}

#[test]
fn test_error_tip_names_expected_kind() {
    assert_eq!(
        unexpected(TokenKind::CloseParen).get_tip().to_string(),
        "Unexpected token: `EOF`, expected CloseParen"
    );
}

#[test]
fn test_error_tip_nesting_limit() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 128, token: "(".to_string() },
        Position::Token(128),
    );

    assert_eq!(error.get_tip().to_string(), "Expressions, types and blocks nest at most 128 levels deep");
    assert_eq!(error.to_string(), "nesting deeper than 128 levels at \"(\" at token 128");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    assert_eq!(
        unexpected(TokenKind::CloseParen).to_string(),
        "expected CloseParen but received EOF (\"EOF\") at token 3"
    );

    let error = Error::new(
        ErrorImpl::UnrecognizedToken {
            remainder: "#;".to_string(),
        },
        Position::Source(8),
    );
    assert_eq!(error.to_string(), "unrecognized token near \"#;\" at byte 8");
}

//! Integration tests for the public API.
//!
//! These tests run source text through tokenization and parsing the way a
//! host program would.

use lang_parser::{
    ast::{
        ast::{Expr, Stmt, Type},
        statements::VarDeclStmt,
    },
    lexer::tokens::TokenKind,
    parse, parse_with_grammar,
    parser::{expr::parse_prefix_expr, lookups::BindingPower},
    tokenize, Error, ErrorImpl, Grammar,
};

fn parse_source(source: &str) -> Result<Vec<Stmt>, Error> {
    Ok(parse(tokenize(source)?)?.body)
}

#[test]
fn test_parse_small_program() {
    let source = r#"
        // configuration
        const limit: number = 10 * 2;
        let names: []string;
        let greeting = 'hi';
        {
            names = names + "x";
            limit >= 0 && !done;
        }
    "#;

    let body = parse_source(source).unwrap();
    assert_eq!(body.len(), 4);

    match &body[0] {
        Stmt::VarDecl(VarDeclStmt { identifier, is_constant: true, assigned_value: Some(Expr::Binary(binary)), explicit_type: Some(Type::Symbol(ty)) }) => {
            assert_eq!(identifier, "limit");
            assert_eq!(binary.operator.kind, TokenKind::Star);
            assert_eq!(ty.name, "number");
        }
        other => panic!("unexpected statement {:?}", other),
    }

    match &body[1] {
        Stmt::VarDecl(VarDeclStmt { assigned_value: None, explicit_type: Some(Type::Array(array)), .. }) => {
            assert!(matches!(array.underlying.as_ref(), Type::Symbol(ty) if ty.name == "string"));
        }
        other => panic!("unexpected statement {:?}", other),
    }

    assert!(matches!(
        &body[2],
        Stmt::VarDecl(VarDeclStmt { assigned_value: Some(Expr::String(string)), .. }) if string.value == "hi"
    ));

    match &body[3] {
        Stmt::Block(block) => {
            assert_eq!(block.len(), 2);
            assert!(matches!(&block.body[0], Stmt::Expression(stmt) if matches!(stmt.expression, Expr::Assignment(_))));
            assert!(matches!(&block.body[1], Stmt::Expression(stmt) if matches!(&stmt.expression, Expr::Binary(binary) if binary.operator.kind == TokenKind::And)));
        }
        other => panic!("unexpected statement {:?}", other),
    }
}

#[test]
fn test_first_error_aborts() {
    let error = parse_source("let a = 1; let b; let c = ;").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::MissingTypeOrValue { identifier: String::from("b") });
}

#[test]
fn test_lexical_error_surfaces_before_parsing() {
    let error = parse_source("let a = 1 # 2;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognizedToken");
}

#[test]
fn test_grammar_extension() {
    let mut grammar = Grammar::new();
    grammar.nud(TokenKind::MinusMinus, parse_prefix_expr);
    grammar.led(TokenKind::Question, BindingPower::Logical, |parser, left, _bp| {
        parser.advance();
        Ok(left)
    });

    let block = parse_with_grammar(tokenize("--x ? ;").unwrap(), &grammar).unwrap();
    assert!(matches!(
        &block.body[0],
        Stmt::Expression(stmt) if matches!(&stmt.expression, Expr::Prefix(prefix) if prefix.operator.kind == TokenKind::MinusMinus)
    ));

    // The default grammar is untouched
    let error = parse_source("--x;").unwrap_err();
    assert!(matches!(error.kind(), ErrorImpl::MissingPrefixHandler { kind: TokenKind::MinusMinus, .. }));
}

#[test]
fn test_deep_nesting_is_an_error() {
    let depth = 100_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));

    let error = parse_source(&source).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");

    let error = parse_source(&"{".repeat(depth)).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
}

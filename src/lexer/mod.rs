//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered list of regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

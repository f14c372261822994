#![allow(clippy::module_inception)]

//! Front end for a small expression language: a regex driven tokenizer and a
//! Pratt parser with separate dispatch tables for expressions, statements and
//! type annotations.
//!
//! ```ignore
//! let tokens = tokenize("let x: []number;")?;
//! let program = parse(tokens)?;
//! ```

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use errors::errors::{Error, ErrorImpl, ErrorTip, Position};
pub use lexer::lexer::tokenize;
pub use parser::parser::{parse, parse_with_grammar, Grammar};

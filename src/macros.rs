//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the pattern table.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a lexer handler for a token whose text never varies.
///
/// The generated handler pushes a token with the given kind and advances
/// the lexer past the literal text.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            lexer.push(MK_TOKEN!($kind, String::from($value)));
            lexer.advance_n($value.len());
        }
    };
}

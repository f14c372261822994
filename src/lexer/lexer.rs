use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl, Position}, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

/// A single tokenizer rule. The regex is anchored with `^` so it only ever
/// tests the start of the unconsumed input.
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern { regex: Regex::new(pattern).unwrap(), handler }
    }
}

lazy_static! {
    /// Tokenizer rules in priority order. The first rule that matches wins, so
    /// every multi-character operator sits above its single-character prefix.
    pub static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^\\s+", skip_handler),
        RegexPattern::new("^[0-9]+(\\.[0-9]+)?", number_handler),
        RegexPattern::new("^//.*", skip_handler),
        RegexPattern::new(r#"^"(?:[^"\\]|\\(?s:.))*""#, string_handler),
        RegexPattern::new(r"^'(?:[^'\\]|\\(?s:.))*'", string_handler),
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        RegexPattern::new("^\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("^!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        RegexPattern::new("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("^\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        RegexPattern::new("^&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        RegexPattern::new("^\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::DotDot, "..")),
        RegexPattern::new("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new("^\\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new("^\\+\\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++")),
        RegexPattern::new("^--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--")),
        RegexPattern::new("^\\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=")),
        RegexPattern::new("^-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("^%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
    ];
}

/// State of a single tokenization run.
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.to_string(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(kind = %token.kind, value = %token.value, pos = self.pos, "token");
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Text the given rule matches at the current position.
    fn matched(&self, regex: &Regex) -> Option<String> {
        regex.find(self.remainder()).map(|m| m.as_str().to_string())
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = lexer.matched(regex) else { return };

    let len = matched.len();
    lexer.push(MK_TOKEN!(TokenKind::Number, matched));
    lexer.advance_n(len);
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = lexer.matched(regex) else { return };
    lexer.advance_n(matched.len());
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(matched) = lexer.matched(regex) else { return };

    // Both delimiters are single byte quotes
    let string_literal = unescape(&matched[1..matched.len() - 1]);

    lexer.push(MK_TOKEN!(TokenKind::String, string_literal));
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let Some(value) = lexer.matched(regex) else { return };

    let kind = RESERVED_LOOKUP.get(value.as_str()).copied().unwrap_or(TokenKind::Identifier);

    let len = value.len();
    lexer.push(MK_TOKEN!(kind, value));
    lexer.advance_n(len);
}

fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        let escaped = match chars.peek() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('0') => '\0',
            Some('\\') => '\\',
            Some('"') => '"',
            Some('\'') => '\'',
            // Line continuation
            Some('\n') => {
                chars.next();
                continue;
            }
            // Unknown escape, keep the backslash
            _ => {
                result.push(ch);
                continue;
            }
        };

        result.push(escaped);
        chars.next();
    }

    result
}

/// Splits `source` into tokens, always terminated by a single `EOF` token.
///
/// Fails with `UnrecognizedToken` as soon as no rule matches the remaining
/// input.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let pattern = PATTERNS.iter().find(|pattern| pattern.regex.is_match(remainder));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                return Err(Error::new(
                    ErrorImpl::UnrecognizedToken { remainder: lex.remainder().to_string() },
                    Position::Source(lex.pos),
                ));
            }
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF")));
    debug!(tokens = lex.tokens.len(), "tokenized");

    Ok(lex.tokens)
}

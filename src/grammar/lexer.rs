//! Logos-based lexer for rule bodies
//!
//! Splits a rule body into references, alternation bars, whitespace and text.

use logos::Logos;

use crate::base::RuleName;

/// Kind of a rule body token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `<rule name>`
    Reference,
    /// `|` alternation marker
    Bar,
    Whitespace,
    /// Anything else, including stray `<` and `>`
    Text,
}

/// A token with its kind, text, and byte offset into the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: usize,
}

impl Token<'_> {
    /// Rule name of a reference token
    pub fn reference(&self) -> Option<RuleName> {
        match self.kind {
            TokenKind::Reference => RuleName::from_reference(self.text),
            _ => None,
        }
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = self.inner.span().start;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Text,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire body into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// First non-whitespace token of `text`, if it is a reference
pub fn leading_reference(text: &str) -> Option<RuleName> {
    Lexer::new(text)
        .find(|token| token.kind != TokenKind::Whitespace)
        .and_then(|token| token.reference())
}

/// Whether `text` contains a reference anywhere
pub fn has_reference(text: &str) -> bool {
    Lexer::new(text).any(|token| token.kind == TokenKind::Reference)
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    #[regex(r"<[^<>|]+>")]
    Reference,

    #[token("|")]
    Bar,

    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    #[regex(r"[^<>| \t\r\n\x0C]+")]
    Word,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Reference => TokenKind::Reference,
            LogosToken::Bar => TokenKind::Bar,
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::Word | LogosToken::LAngle | LogosToken::RAngle => TokenKind::Text,
        }
    }
}

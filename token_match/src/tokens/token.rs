//! Token model consumed by the matchers
//!
//! Tokens are produced by a lexer outside this crate. Only the category and
//! the literal text matter to matching; the span is carried for diagnostics.
use crate::utils::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Bare word: keywords and identifiers alike
    Word,
    /// Quoted string literal
    String,
    /// Numeric literal
    Number,
    /// Operator symbol (`=`, `<>`, `+`)
    Operator,
    /// Punctuation (`,`, `(`, `;`)
    Punctuation,
    /// Spaces, tabs, newlines
    Whitespace,
    /// Comment text
    Comment,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "word",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
        }
    }

    /// Whether the parser sees tokens of this kind
    pub fn is_significant(&self) -> bool {
        !matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable lexical unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    pub fn word(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Word, value, Span::dummy())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(TokenKind::String, value, Span::dummy())
    }

    pub fn number(value: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, value, Span::dummy())
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

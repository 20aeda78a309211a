//! Token stream backing the `Scanner` cursor
//!
//! Whitespace and comment tokens stay in the stream for span reporting but
//! are skipped by the cursor.

use super::{Scanner, Token, TokenKind};
use crate::utils::{Position, Span};

/// Cursor over the significant tokens of a token vector
#[derive(Debug, Clone)]
pub struct TokenStream {
    /// All tokens (including whitespace and comments)
    all_tokens: Vec<Token>,
    /// Indices into all_tokens for significant tokens
    significant_indices: Vec<usize>,
    /// Current position in significant_indices
    position: usize,
}

impl TokenStream {
    /// Create a new token stream, skipping insignificant tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        let significant_indices = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.kind.is_significant())
            .map(|(i, _)| i)
            .collect();

        Self {
            all_tokens: tokens,
            significant_indices,
            position: 0,
        }
    }

    /// Token at a significant position
    pub fn token_at(&self, position: usize) -> Option<&Token> {
        self.significant_indices
            .get(position)
            .and_then(|&original_index| self.all_tokens.get(original_index))
    }

    /// Peek ahead by n significant positions without advancing
    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.token_at(self.position.checked_add(n)?)
    }

    /// Number of significant tokens
    pub fn len(&self) -> usize {
        self.significant_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.significant_indices.is_empty()
    }

}

impl Scanner for TokenStream {
    fn read(&self) -> Option<&Token> {
        self.token_at(self.position)
    }

    fn next(&mut self) {
        if self.position < self.significant_indices.len() {
            self.position += 1;
        }
    }

    fn position(&self) -> usize {
        self.position
    }

    fn restore(&mut self, position: usize) {
        self.position = position.min(self.significant_indices.len());
    }
}

/// Builds token vectors with consistent spans, as a lexer would
#[derive(Debug)]
pub struct TokenStreamBuilder {
    tokens: Vec<Token>,
    current_position: Position,
}

impl TokenStreamBuilder {
    /// Create a new builder starting at beginning of input
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            current_position: Position::start(),
        }
    }

    /// Add a token whose span covers `text`
    pub fn push_token(mut self, kind: TokenKind, text: &str) -> Self {
        let start = self.current_position;
        let end = start.advance_str(text);

        self.tokens.push(Token::new(kind, text, Span::new(start, end)));
        self.current_position = end;
        self
    }

    pub fn word(self, text: &str) -> Self {
        self.separated(TokenKind::Word, text)
    }

    pub fn string(self, text: &str) -> Self {
        self.separated(TokenKind::String, text)
    }

    pub fn number(self, text: &str) -> Self {
        self.separated(TokenKind::Number, text)
    }

    pub fn operator(self, text: &str) -> Self {
        self.separated(TokenKind::Operator, text)
    }

    pub fn punctuation(self, text: &str) -> Self {
        self.separated(TokenKind::Punctuation, text)
    }

    pub fn comment(self, text: &str) -> Self {
        self.separated(TokenKind::Comment, text)
    }

    /// Insert a single-space whitespace token before every token but the first
    fn separated(self, kind: TokenKind, text: &str) -> Self {
        let builder = if self.tokens.is_empty() {
            self
        } else {
            self.push_token(TokenKind::Whitespace, " ")
        };
        builder.push_token(kind, text)
    }

    /// Finish with the raw token vector
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Build the token stream
    pub fn build(self) -> TokenStream {
        TokenStream::new(self.tokens)
    }
}

impl Default for TokenStreamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenStream {
        TokenStreamBuilder::new()
            .word("select")
            .comment("-- all")
            .number("1")
            .build()
    }

    #[test]
    fn test_read_is_idempotent() {
        let stream = sample();
        let first = stream.read().cloned();
        let second = stream.read().cloned();
        assert_eq!(first, second);
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_next_skips_insignificant_tokens() {
        let mut stream = sample();
        assert_eq!(stream.len(), 2);
        stream.next();
        assert_eq!(stream.read().map(|t| t.value.as_str()), Some("1"));
        stream.next();
        assert!(stream.is_at_end());
        stream.next();
        assert_eq!(stream.position(), 2);
    }

    #[test]
    fn test_restore_is_clamped() {
        let mut stream = sample();
        stream.restore(10);
        assert_eq!(stream.position(), 2);
        stream.restore(0);
        assert_eq!(stream.read().map(|t| t.value.as_str()), Some("select"));
    }

    #[test]
    fn test_peek_ahead_skips_insignificant_tokens() {
        let mut stream = sample();
        assert_eq!(stream.peek_ahead(1).map(|t| t.value.as_str()), Some("1"));
        assert_eq!(stream.peek_ahead(2), None);

        stream.next();
        assert_eq!(stream.peek_ahead(usize::MAX), None);
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn test_builder_spans_follow_text() {
        let stream = TokenStreamBuilder::new().word("ab").number("12").build();
        let second = stream.token_at(1).unwrap();
        assert_eq!(second.span.start.offset, 3);
        assert_eq!(second.span.end.offset, 5);
    }
}

//! Errors reported by top-level chain parses
//!
//! Matchers themselves never fail with an error; these are produced only when a
//! rule is run over a whole token stream and the outcome must be explained.

use crate::logging::{codes, Code};
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unexpected token: expected {expected}, found '{found}' at {span}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    #[error("Empty token stream - no tokens to parse")]
    EmptyTokenStream,

    #[error("Unconsumed input starting at '{found}' ({span})")]
    TrailingTokens { found: String, span: Span },

    #[error("Maximum recursion depth exceeded at {span}")]
    MaxRecursionDepth { span: Span },
}

impl SyntaxError {
    pub fn unexpected_token(expected: &str, found: &str, span: Span) -> Self {
        Self::UnexpectedToken {
            expected: expected.to_string(),
            found: found.to_string(),
            span,
        }
    }

    pub fn unexpected_end_of_input(expected: &str) -> Self {
        Self::UnexpectedEndOfInput {
            expected: expected.to_string(),
        }
    }

    pub fn trailing_tokens(found: &str, span: Span) -> Self {
        Self::TrailingTokens {
            found: found.to_string(),
            span,
        }
    }

    pub fn max_recursion_depth(span: Span) -> Self {
        Self::MaxRecursionDepth { span }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            Self::UnexpectedEndOfInput { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
            Self::EmptyTokenStream => codes::syntax::EMPTY_TOKEN_STREAM,
            Self::TrailingTokens { .. } => codes::syntax::TRAILING_TOKENS,
            Self::MaxRecursionDepth { .. } => codes::syntax::MAX_RECURSION_DEPTH,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Self::UnexpectedToken { span, .. }
            | Self::TrailingTokens { span, .. }
            | Self::MaxRecursionDepth { span } => Some(*span),
            Self::UnexpectedEndOfInput { .. } | Self::EmptyTokenStream => None,
        }
    }

    /// Whether parsing may reasonably be retried after fixing the input
    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }

    /// Remedy registered for this error's code
    pub fn recommended_action(&self) -> &'static str {
        codes::get_action(self.error_code().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Position;
    use assert_matches::assert_matches;

    #[test]
    fn test_error_code_mapping() {
        let span = Span::dummy();

        assert_eq!(
            SyntaxError::unexpected_token("number", "x", span).error_code().as_str(),
            "E050"
        );
        assert_eq!(
            SyntaxError::unexpected_end_of_input("number").error_code().as_str(),
            "E051"
        );
        assert_eq!(SyntaxError::EmptyTokenStream.error_code().as_str(), "E041");
        assert_eq!(
            SyntaxError::trailing_tokens("x", span).error_code().as_str(),
            "E052"
        );
        assert_eq!(
            SyntaxError::max_recursion_depth(span).error_code().as_str(),
            "E087"
        );
    }

    #[test]
    fn test_error_properties() {
        let halting = SyntaxError::max_recursion_depth(Span::dummy());
        assert!(!halting.is_recoverable());
        assert_eq!(
            halting.recommended_action(),
            "Check the grammar for unbounded recursion"
        );

        let unexpected = SyntaxError::unexpected_token("word", "1", Span::dummy());
        assert!(unexpected.is_recoverable());
        assert!(!SyntaxError::EmptyTokenStream.is_recoverable());
    }

    #[test]
    fn test_span_extraction() {
        let span = Span::new(Position::new(10, 1, 11), Position::new(15, 1, 16));
        let error = SyntaxError::trailing_tokens("x", span);

        assert_matches!(error.span(), Some(s) if s.start().column == 11);
        assert_eq!(SyntaxError::EmptyTokenStream.span(), None);
    }
}

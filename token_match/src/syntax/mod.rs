//! Top-level parse driver
//!
//! Runs a rule over a complete token sequence and turns the outcome into a
//! [`SyntaxResult`], logging success or the failure code.

mod error;

pub use error::{SyntaxError, SyntaxResult};

use crate::chain::{Chain, MatchContext, Node};
use crate::config::MatchingPreferences;
use crate::logging::codes;
use crate::tokens::{Scanner, Token, TokenStream};
use crate::{log_debug, log_error, log_success};

/// Parse tokens with a rule using default matching preferences
pub fn parse_tokens(rule: &Chain, tokens: Vec<Token>) -> SyntaxResult<Node> {
    parse_tokens_with(rule, tokens, MatchingPreferences::default())
}

/// Parse tokens with a rule; the rule must consume every significant token
pub fn parse_tokens_with(
    rule: &Chain,
    tokens: Vec<Token>,
    preferences: MatchingPreferences,
) -> SyntaxResult<Node> {
    let mut stream = TokenStream::new(tokens);
    log_debug!("Starting chain parse", "rule" => rule.label(), "tokens" => stream.len());

    let result = parse_stream(rule, &mut stream, preferences);

    match &result {
        Ok(_) => {
            log_success!(codes::success::PARSE_COMPLETE, "Chain parse completed",
                "rule" => rule.label(),
                "tokens" => stream.len()
            );
        }
        Err(error) => match error.span() {
            Some(span) => log_error!(error.error_code(), "Chain parse failed",
                span = span,
                "error" => error,
                "recoverable" => error.is_recoverable(),
                "action" => error.recommended_action()
            ),
            None => log_error!(error.error_code(), "Chain parse failed",
                "error" => error,
                "recoverable" => error.is_recoverable(),
                "action" => error.recommended_action()
            ),
        },
    }

    result
}

fn parse_stream(
    rule: &Chain,
    stream: &mut TokenStream,
    preferences: MatchingPreferences,
) -> SyntaxResult<Node> {
    if stream.is_empty() {
        return Err(SyntaxError::EmptyTokenStream);
    }

    let mut context = MatchContext::new(preferences);
    let outcome = rule.evaluate(stream, &mut context);

    if let Some(span) = context.depth_exceeded() {
        return Err(SyntaxError::max_recursion_depth(span));
    }

    match outcome {
        Some(node) => match stream.read() {
            None => Ok(node),
            Some(token) => Err(SyntaxError::trailing_tokens(&token.value, token.span)),
        },
        None => Err(failure_error(&context, stream)),
    }
}

/// Explain a failed rule from the furthest failure recorded while matching
fn failure_error(context: &MatchContext, stream: &TokenStream) -> SyntaxError {
    let (expected, token) = match context.furthest_failure() {
        Some(failure) => (failure.expected_description(), failure.token.clone()),
        None => ("valid input".to_string(), stream.read().cloned()),
    };

    match token {
        Some(token) => SyntaxError::unexpected_token(&expected, &token.value, token.span),
        None => SyntaxError::unexpected_end_of_input(&expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::many;
    use crate::logging::{with_thread_logger, MemoryLogger};
    use crate::matching::{match_number, match_word};
    use crate::tokens::TokenStreamBuilder;
    use assert_matches::assert_matches;
    use std::sync::Arc;

    #[test]
    fn test_successful_parse_logs_completion() {
        let logger = Arc::new(MemoryLogger::new());
        let rule = crate::chain![match_word(), many([match_number()])];
        let tokens = TokenStreamBuilder::new()
            .word("values")
            .number("1")
            .number("2")
            .into_tokens();

        let node = with_thread_logger(logger.clone(), || parse_tokens(&rule, tokens)).unwrap();

        assert_eq!(node.token_values(), vec!["values", "1", "2"]);
        assert!(logger.has_event_with_code(codes::success::PARSE_COMPLETE));
        assert!(logger.get_errors().is_empty());
    }

    #[test]
    fn test_failed_parse_logs_error_with_span() {
        let logger = Arc::new(MemoryLogger::new());
        let rule = crate::chain!["limit", match_number()];
        let tokens = TokenStreamBuilder::new().word("limit").word("ten").into_tokens();

        let result = with_thread_logger(logger.clone(), || parse_tokens(&rule, tokens));

        assert_matches!(
            result,
            Err(SyntaxError::UnexpectedToken { ref expected, ref found, span })
                if expected == "number" && found == "ten" && span.start.offset == 6
        );
        let errors = logger.get_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, codes::syntax::UNEXPECTED_TOKEN);
        assert!(errors[0].span.is_some());
        assert_eq!(errors[0].context.get("recoverable").map(String::as_str), Some("true"));
        assert_eq!(
            errors[0].context.get("action").map(String::as_str),
            Some("Check the input near the reported position")
        );
    }

    #[test]
    fn test_labels_omitted_when_not_recorded() {
        let rule = crate::chain!["limit", match_number()];
        let tokens = TokenStreamBuilder::new().word("offset").into_tokens();
        let preferences = MatchingPreferences {
            record_expectations: false,
            trace_chains: false,
        };

        assert_matches!(
            parse_tokens_with(&rule, tokens, preferences),
            Err(SyntaxError::UnexpectedToken { ref expected, .. }) if expected == "valid input"
        );
    }
}

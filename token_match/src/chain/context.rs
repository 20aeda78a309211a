//! Per-parse evaluation state: nesting depth and the furthest failure

use crate::config::compile_time::matching::{MAX_EXPECTED_LABELS, MAX_PARSE_DEPTH};
use crate::config::MatchingPreferences;
use crate::tokens::Token;
use crate::utils::Span;

/// The furthest point any element failed at, and what was expected there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub position: usize,
    pub token: Option<Token>,
    pub expected: Vec<String>,
}

impl Failure {
    /// Expected labels joined for an error message
    pub fn expected_description(&self) -> String {
        if self.expected.is_empty() {
            "valid input".to_string()
        } else {
            self.expected.join(" or ")
        }
    }
}

/// Mutable state threaded through one chain evaluation
#[derive(Debug)]
pub struct MatchContext {
    depth: usize,
    max_depth: usize,
    depth_exceeded: Option<Span>,
    furthest: Option<Failure>,
    preferences: MatchingPreferences,
}

impl MatchContext {
    pub fn new(preferences: MatchingPreferences) -> Self {
        Self {
            depth: 0,
            max_depth: MAX_PARSE_DEPTH,
            depth_exceeded: None,
            furthest: None,
            preferences,
        }
    }

    /// Override the nesting limit for this evaluation
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn preferences(&self) -> &MatchingPreferences {
        &self.preferences
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter one nesting level; `false` once the limit is hit
    pub fn enter(&mut self) -> bool {
        if self.depth >= self.max_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Remember where nesting overflowed; only the first overflow is kept
    pub fn mark_depth_exceeded(&mut self, span: Span) {
        self.depth_exceeded.get_or_insert(span);
    }

    pub fn depth_exceeded(&self) -> Option<Span> {
        self.depth_exceeded
    }

    /// Record a failed element at `position`.
    ///
    /// A failure further into the input replaces the current one; a failure
    /// at the same position adds its label.
    pub fn record_failure<F>(&mut self, position: usize, token: Option<Token>, label: F)
    where
        F: FnOnce() -> String,
    {
        match self.furthest.as_ref().map(|current| current.position) {
            Some(current) if current > position => return,
            Some(current) if current == position => {}
            _ => {
                self.furthest = Some(Failure {
                    position,
                    token,
                    expected: Vec::new(),
                })
            }
        }

        let record = self.preferences.record_expectations;
        let failure = match self.furthest.as_mut() {
            Some(failure) => failure,
            None => return,
        };
        if !record || failure.expected.len() >= MAX_EXPECTED_LABELS {
            return;
        }

        let label = label();
        if !failure.expected.contains(&label) {
            failure.expected.push(label);
        }
    }

    pub fn furthest_failure(&self) -> Option<&Failure> {
        self.furthest.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> MatchContext {
        MatchContext::new(MatchingPreferences {
            record_expectations: true,
            trace_chains: false,
        })
    }

    #[test]
    fn test_furthest_failure_wins() {
        let mut ctx = context();
        ctx.record_failure(1, Some(Token::word("a")), || "'x'".to_string());
        ctx.record_failure(0, Some(Token::word("b")), || "'y'".to_string());
        ctx.record_failure(1, Some(Token::word("a")), || "number".to_string());
        ctx.record_failure(1, Some(Token::word("a")), || "'x'".to_string());

        let failure = ctx.furthest_failure().unwrap();
        assert_eq!(failure.position, 1);
        assert_eq!(failure.expected, vec!["'x'", "number"]);
        assert_eq!(failure.expected_description(), "'x' or number");

        ctx.record_failure(3, None, || "string".to_string());
        let failure = ctx.furthest_failure().unwrap();
        assert_eq!(failure.token, None);
        assert_eq!(failure.expected, vec!["string"]);
    }

    #[test]
    fn test_labels_capped() {
        let mut ctx = context();
        for i in 0..MAX_EXPECTED_LABELS + 5 {
            ctx.record_failure(0, None, || format!("label{}", i));
        }
        assert_eq!(
            ctx.furthest_failure().unwrap().expected.len(),
            MAX_EXPECTED_LABELS
        );
    }

    #[test]
    fn test_labels_skipped_when_disabled() {
        let mut ctx = MatchContext::new(MatchingPreferences {
            record_expectations: false,
            trace_chains: false,
        });
        ctx.record_failure(2, None, || "number".to_string());
        let failure = ctx.furthest_failure().unwrap();
        assert_eq!(failure.position, 2);
        assert!(failure.expected.is_empty());
        assert_eq!(failure.expected_description(), "valid input");
    }

    #[test]
    fn test_depth_limit() {
        let mut ctx = context().with_max_depth(2);
        assert!(ctx.enter());
        assert!(ctx.enter());
        assert!(!ctx.enter());
        ctx.exit();
        assert_eq!(ctx.depth(), 1);

        ctx.mark_depth_exceeded(Span::from_offsets(4, 5));
        ctx.mark_depth_exceeded(Span::from_offsets(9, 10));
        assert_eq!(ctx.depth_exceeded(), Some(Span::from_offsets(4, 5)));
    }
}

use crate::tokens::Token;
use serde::{Deserialize, Serialize};

/// Outcome of a single matcher invocation.
///
/// `matched == false` guarantees the scanner cursor did not move. `token` is
/// the inspected token, or `None` when the scanner was exhausted or the
/// matcher is an always-true sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub token: Option<Token>,
    pub matched: bool,
}

impl MatchResult {
    pub fn success(token: Token) -> Self {
        Self {
            token: Some(token),
            matched: true,
        }
    }

    pub fn failure(token: Option<Token>) -> Self {
        Self {
            token,
            matched: false,
        }
    }

    /// Trivially-true sentinel carrying no token
    pub fn always() -> Self {
        Self {
            token: None,
            matched: true,
        }
    }
}

//! Token comparison predicates

use super::MatchResult;
use crate::tokens::{Scanner, Token};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal argument of a matcher: one word or a set of alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pattern {
    One(String),
    AnyOf(Vec<String>),
}

impl Pattern {
    /// Case-insensitive equality against the word, or membership in the set
    pub fn matches(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        match self {
            Pattern::One(word) => word.to_lowercase() == value,
            Pattern::AnyOf(words) => words.iter().any(|word| word.to_lowercase() == value),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::One(word) => write!(f, "'{}'", word),
            Pattern::AnyOf(words) => {
                let quoted: Vec<String> = words.iter().map(|w| format!("'{}'", w)).collect();
                write!(f, "{}", quoted.join(" | "))
            }
        }
    }
}

impl From<&str> for Pattern {
    fn from(word: &str) -> Self {
        Pattern::One(word.to_string())
    }
}

impl From<String> for Pattern {
    fn from(word: String) -> Self {
        Pattern::One(word)
    }
}

impl From<&[&str]> for Pattern {
    fn from(words: &[&str]) -> Self {
        Pattern::AnyOf(words.iter().map(|w| w.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Pattern {
    fn from(words: [&str; N]) -> Self {
        Pattern::AnyOf(words.iter().map(|w| w.to_string()).collect())
    }
}

impl From<Vec<&str>> for Pattern {
    fn from(words: Vec<&str>) -> Self {
        Pattern::AnyOf(words.into_iter().map(String::from).collect())
    }
}

impl From<Vec<String>> for Pattern {
    fn from(words: Vec<String>) -> Self {
        Pattern::AnyOf(words)
    }
}

/// Compare the token at the cursor and advance only on a consuming success
pub fn match_token<F>(scanner: &mut dyn Scanner, compare: F, should_consume: bool) -> MatchResult
where
    F: FnOnce(&Token) -> bool,
{
    let token = match scanner.read() {
        Some(token) => token.clone(),
        None => return MatchResult::failure(None),
    };

    if compare(&token) {
        if should_consume {
            scanner.next();
        }
        MatchResult::success(token)
    } else {
        MatchResult::failure(Some(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{TokenKind, TokenStreamBuilder};

    #[test]
    fn test_single_word_ignores_case() {
        let pattern = Pattern::from("SELECT");
        assert!(pattern.matches("select"));
        assert!(pattern.matches("Select"));
        assert!(pattern.matches("SELECT"));
        assert!(!pattern.matches("selects"));
    }

    #[test]
    fn test_word_set_membership() {
        let pattern = Pattern::from(["select", "insert"]);
        assert!(pattern.matches("INSERT"));
        assert!(!pattern.matches("update"));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        assert!(Pattern::from("STRASSE").matches("strasse"));
        assert!(Pattern::from("ÉTÉ").matches("été"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pattern::from("a").to_string(), "'a'");
        assert_eq!(Pattern::from(vec!["a", "b"]).to_string(), "'a' | 'b'");
    }

    #[test]
    fn test_match_token_failure_keeps_cursor() {
        let mut stream = TokenStreamBuilder::new().word("x").build();
        let result = match_token(&mut stream, |t| t.is(TokenKind::Number), true);
        assert!(!result.matched);
        assert_eq!(result.token.map(|t| t.value), Some("x".to_string()));
        assert_eq!(stream.position(), 0);
    }
}

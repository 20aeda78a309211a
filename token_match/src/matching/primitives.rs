//! Primitive matchers exposed to grammar authors
//!
//! Each `*_factory` function returns the shared [`MatchFactory`]; the
//! `match_*` helpers bind an argument and return a ready [`Matcher`].

use super::matcher::{create_match, MatchFactory, Matcher};
use super::predicate::match_token;
use super::{MatchResult, Pattern};
use crate::tokens::TokenKind;

/// Case-insensitive literal, no category constraint
pub fn literal_factory() -> MatchFactory {
    create_match(
        |scanner, argument, should_consume| match argument {
            Some(pattern) => match_token(scanner, |token| pattern.matches(&token.value), should_consume),
            // An unbound literal has nothing to compare against
            None => match_token(scanner, |_| false, should_consume),
        },
        None,
    )
}

/// Word token, optionally restricted to a literal or literal set
pub fn word_factory() -> MatchFactory {
    create_match(
        |scanner, argument, should_consume| {
            match_token(
                scanner,
                |token| {
                    token.is(TokenKind::Word)
                        && argument.map_or(true, |pattern| pattern.matches(&token.value))
                },
                should_consume,
            )
        },
        Some("word"),
    )
}

/// String token; the argument is ignored
pub fn string_factory() -> MatchFactory {
    create_match(
        |scanner, _, should_consume| {
            match_token(scanner, |token| token.is(TokenKind::String), should_consume)
        },
        Some("string"),
    )
}

/// Number token; the argument is ignored
pub fn number_factory() -> MatchFactory {
    create_match(
        |scanner, _, should_consume| {
            match_token(scanner, |token| token.is(TokenKind::Number), should_consume)
        },
        Some("number"),
    )
}

/// Word or string token; the argument is ignored
pub fn word_or_string_factory() -> MatchFactory {
    create_match(
        |scanner, _, should_consume| {
            match_token(
                scanner,
                |token| token.is(TokenKind::Word) || token.is(TokenKind::String),
                should_consume,
            )
        },
        None,
    )
}

fn sentinel_factory() -> MatchFactory {
    create_match(|_, _, _| MatchResult::always(), None)
}

pub fn match_literal(pattern: impl Into<Pattern>) -> Matcher {
    literal_factory().bind(Some(pattern.into()))
}

/// Any word token
pub fn match_word() -> Matcher {
    word_factory().bind(None)
}

/// A word token equal to `pattern`, ignoring case
pub fn match_word_of(pattern: impl Into<Pattern>) -> Matcher {
    word_factory().bind(Some(pattern.into()))
}

pub fn match_string() -> Matcher {
    string_factory().bind(None)
}

pub fn match_number() -> Matcher {
    number_factory().bind(None)
}

pub fn match_word_or_string() -> Matcher {
    word_or_string_factory().bind(None)
}

/// Always succeeds without touching the scanner
pub fn match_true() -> Matcher {
    sentinel_factory().bind(None)
}

/// Always succeeds without touching the scanner.
///
/// Despite its name this never fails; grammars rely on it as a second
/// always-true sentinel.
pub fn match_false() -> Matcher {
    sentinel_factory().bind(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{Scanner, TokenStream, TokenStreamBuilder};

    fn stream_of(builder: TokenStreamBuilder) -> TokenStream {
        builder.build()
    }

    fn predicate_matchers() -> Vec<Matcher> {
        vec![
            match_literal("select"),
            match_word(),
            match_word_of("select"),
            match_string(),
            match_number(),
            match_word_or_string(),
        ]
    }

    #[test]
    fn test_literal_case_insensitive() {
        for value in ["select", "Select", "SELECT"] {
            let mut stream = stream_of(TokenStreamBuilder::new().word(value));
            assert!(match_literal("SELECT").run(&mut stream, true).matched, "{}", value);
        }
    }

    #[test]
    fn test_literal_set_membership() {
        let matcher = match_literal(["select", "insert"]);

        let mut stream = stream_of(TokenStreamBuilder::new().word("INSERT"));
        assert!(matcher.run(&mut stream, true).matched);

        let mut stream = stream_of(TokenStreamBuilder::new().word("update"));
        assert!(!matcher.run(&mut stream, true).matched);
    }

    #[test]
    fn test_literal_ignores_category() {
        let mut stream = stream_of(TokenStreamBuilder::new().string("select"));
        assert!(match_literal("select").run(&mut stream, true).matched);
    }

    #[test]
    fn test_word_type_gating() {
        let mut stream = stream_of(TokenStreamBuilder::new().string("foo"));
        assert!(!match_word().run(&mut stream, true).matched);
        assert!(!match_word_of("foo").run(&mut stream, true).matched);
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_word_with_argument() {
        let mut stream = stream_of(TokenStreamBuilder::new().word("Foo").word("bar"));
        assert!(match_word_of("foo").run(&mut stream, true).matched);
        assert!(!match_word_of("foo").run(&mut stream, true).matched);
        assert!(match_word().run(&mut stream, true).matched);
        assert!(stream.is_at_end());
    }

    #[test]
    fn test_string_and_number_check_category_only() {
        let mut stream = stream_of(TokenStreamBuilder::new().string("anything").number("42"));
        assert!(!match_number().run(&mut stream, true).matched);
        assert!(match_string().run(&mut stream, true).matched);
        assert!(!match_string().run(&mut stream, true).matched);
        assert!(match_number().run(&mut stream, true).matched);

        let ignored = string_factory().bind(Some(Pattern::from("other")));
        let mut stream = stream_of(TokenStreamBuilder::new().string("anything"));
        assert!(ignored.run(&mut stream, true).matched);
    }

    #[test]
    fn test_word_or_string() {
        let mut stream = stream_of(TokenStreamBuilder::new().word("a").string("b").number("1"));
        assert!(match_word_or_string().run(&mut stream, true).matched);
        assert!(match_word_or_string().run(&mut stream, true).matched);
        assert!(!match_word_or_string().run(&mut stream, true).matched);
        assert_eq!(stream.position(), 2);
    }

    #[test]
    fn test_consume_flag_honored() {
        let mut stream = stream_of(TokenStreamBuilder::new().word("select"));
        for matcher in [match_literal("select"), match_word(), match_word_or_string()] {
            let result = matcher.run(&mut stream, false);
            assert!(result.matched);
            assert_eq!(stream.position(), 0);
        }

        let result = match_word().run(&mut stream, true);
        assert_eq!(result.token.map(|t| t.value), Some("select".to_string()));
        assert_eq!(stream.position(), 1);
    }

    #[test]
    fn test_failure_never_consumes() {
        let mut stream = stream_of(TokenStreamBuilder::new().operator("+"));
        for matcher in predicate_matchers() {
            for should_consume in [true, false] {
                let result = matcher.run(&mut stream, should_consume);
                assert!(!result.matched);
                assert_eq!(result.token.as_ref().map(|t| t.value.as_str()), Some("+"));
                assert_eq!(stream.position(), 0);
            }
        }
    }

    #[test]
    fn test_end_of_input_reports_absent_token() {
        let mut stream = TokenStream::new(Vec::new());
        for matcher in predicate_matchers() {
            let result = matcher.run(&mut stream, true);
            assert_eq!(result, MatchResult::failure(None));
            assert_eq!(stream.position(), 0);
        }
    }

    #[test]
    fn test_sentinels_succeed_without_scanner_interaction() {
        let mut stream = stream_of(TokenStreamBuilder::new().word("x"));
        assert_eq!(match_true().run(&mut stream, true), MatchResult::always());
        assert_eq!(match_false().run(&mut stream, true), MatchResult::always());
        assert_eq!(stream.position(), 0);

        let mut empty = TokenStream::new(Vec::new());
        assert!(match_false().run(&mut empty, true).matched);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(match_word().display_name(), Some("word"));
        assert_eq!(match_word_of("x").display_name(), Some("word"));
        assert_eq!(match_string().display_name(), Some("string"));
        assert_eq!(match_number().display_name(), Some("number"));
        assert_eq!(match_literal("x").display_name(), None);
        assert_eq!(match_word_or_string().display_name(), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(match_literal("from").label(), "'from'");
        assert_eq!(match_number().label(), "number");
        assert_eq!(match_word_or_string().label(), "token");
    }
}

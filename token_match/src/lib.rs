//! Token-matching combinators for hand-rolled recursive-descent parsers
//!
//! Primitive matchers test a single token at a scanner cursor; chains and the
//! `optional` / `plus` / `many` quantifiers compose them into grammar rules.

// Internal modules
pub mod chain;
pub mod config;
#[macro_use]
pub mod logging;
pub mod matching;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use chain::{many, optional, plus, Chain, Element, Node};
pub use config::RuntimeConfig;
pub use matching::{
    create_match, match_false, match_literal, match_number, match_string, match_true, match_word,
    match_word_of, match_word_or_string, MatchFactory, MatchResult, Matcher, MatcherKind, Pattern,
};
pub use syntax::{SyntaxError, SyntaxResult};
pub use tokens::{Scanner, Token, TokenKind, TokenStream, TokenStreamBuilder};

/// Apply runtime configuration and start the global logging service.
///
/// May succeed once per process. Every check runs before any global state is
/// set, so a rejected call leaves the process uninitialized and `init` can be
/// retried with a corrected configuration.
pub fn init(config: &RuntimeConfig) -> Result<(), String> {
    if logging::is_initialized() {
        return Err("Global logger already initialized".to_string());
    }
    config
        .validate()
        .map_err(|e| format!("Configuration validation failed: {}", e))?;
    logging::config::validate_config()
        .map_err(|e| format!("Configuration validation failed: {}", e))?;

    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_applies_logging_preferences() {
        let rejected = RuntimeConfig {
            logging: config::LoggingPreferences {
                use_structured_logging: true,
                enable_console_logging: false,
                ..config::LoggingPreferences::default()
            },
            ..RuntimeConfig::default()
        };
        assert!(init(&rejected).is_err());
        assert!(!logging::is_initialized());

        let config = RuntimeConfig::from_toml_str(
            r#"
            [logging]
            enable_console_logging = false
            min_log_level = "warning"
            "#,
        )
        .unwrap();

        init(&config).unwrap();

        assert!(logging::is_initialized());
        assert_eq!(
            logging::config::get_min_log_level(),
            logging::LogLevel::Warning
        );
        assert!(init(&config).is_err());
    }
}

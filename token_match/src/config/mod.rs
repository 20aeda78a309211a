//! Configuration module for token_match
//! Compile-time limits are generated from TOML by build.rs

// Include generated constants from build.rs
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

pub mod runtime;

pub use runtime::{ConfigError, LoggingPreferences, MatchingPreferences, RuntimeConfig};

#[cfg(test)]
mod tests {
    use super::compile_time::{logging, matching};

    #[test]
    fn test_generated_limits_are_sane() {
        assert!(matching::MAX_PARSE_DEPTH > 0);
        assert!(matching::MAX_EXPECTED_LABELS > 0);
        assert!(logging::LOG_BUFFER_SIZE >= 100);
    }
}

//! Consolidated error codes and classification system
//!
//! Single source of truth for all codes and their metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// Runtime configuration error codes
pub mod config {
    use super::Code;

    pub const CONFIG_LOAD_FAILURE: Code = Code::new("E010");
    pub const CONFIG_INVALID: Code = Code::new("E011");
}

/// Syntax error codes reported by top-level parses
pub mod syntax {
    use super::Code;

    pub const EMPTY_TOKEN_STREAM: Code = Code::new("E041");
    pub const UNEXPECTED_TOKEN: Code = Code::new("E050");
    pub const UNEXPECTED_END_OF_INPUT: Code = Code::new("E051");
    pub const TRAILING_TOKENS: Code = Code::new("E052");
    pub const MAX_RECURSION_DEPTH: Code = Code::new("E087");
}

/// Repetition warnings raised by the chain layer
pub mod matching {
    use super::Code;

    pub const ZERO_WIDTH_REPETITION: Code = Code::new("W061");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const PARSE_COMPLETE: Code = Code::new("I040");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "E010",
                "Configuration",
                Severity::Medium,
                false,
                "Runtime configuration could not be loaded",
                "Check configuration file path and TOML syntax",
            ),
            ErrorMetadata::new(
                "E011",
                "Configuration",
                Severity::Medium,
                false,
                "Runtime configuration holds conflicting values",
                "Adjust the conflicting preferences",
            ),
            ErrorMetadata::new(
                "E041",
                "Syntax",
                Severity::High,
                false,
                "No tokens were supplied to the parser",
                "Provide non-empty input",
            ),
            ErrorMetadata::new(
                "E050",
                "Syntax",
                Severity::High,
                true,
                "Token did not match any expected element",
                "Check the input near the reported position",
            ),
            ErrorMetadata::new(
                "E051",
                "Syntax",
                Severity::High,
                true,
                "Input ended while more tokens were expected",
                "Complete the statement",
            ),
            ErrorMetadata::new(
                "E052",
                "Syntax",
                Severity::Medium,
                true,
                "Rule matched but input tokens remain",
                "Remove the extra tokens or extend the grammar rule",
            ),
            ErrorMetadata::new(
                "E087",
                "Syntax",
                Severity::Critical,
                false,
                "Rule nesting exceeded the maximum parse depth",
                "Check the grammar for unbounded recursion",
            ),
            ErrorMetadata::new(
                "W061",
                "Matching",
                Severity::Low,
                true,
                "Repetition stopped after an iteration consumed no tokens",
                "Avoid repeating rules that can match empty input",
            ),
            ErrorMetadata::new(
                "I004",
                "Success",
                Severity::Low,
                true,
                "Logging system initialized",
                "No action required",
            ),
            ErrorMetadata::new(
                "I040",
                "Success",
                Severity::Low,
                true,
                "Parse completed",
                "No action required",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_error_metadata(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_error_metadata(code)
        .map(|m| m.recoverable)
        .unwrap_or(false)
}

pub fn get_description(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

pub fn get_action(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.recommended_action)
        .unwrap_or("No specific action available")
}

pub fn get_category(code: &str) -> &'static str {
    get_error_metadata(code)
        .map(|m| m.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_constant_has_metadata() {
        let all = [
            config::CONFIG_LOAD_FAILURE,
            config::CONFIG_INVALID,
            syntax::EMPTY_TOKEN_STREAM,
            syntax::UNEXPECTED_TOKEN,
            syntax::UNEXPECTED_END_OF_INPUT,
            syntax::TRAILING_TOKENS,
            syntax::MAX_RECURSION_DEPTH,
            matching::ZERO_WIDTH_REPETITION,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::PARSE_COMPLETE,
        ];
        for code in all {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_category("E999"), "Unknown");
        assert!(!is_recoverable("E999"));
    }

    #[test]
    fn test_syntax_classification() {
        assert!(is_recoverable(syntax::UNEXPECTED_TOKEN.as_str()));
        assert!(!is_recoverable(syntax::MAX_RECURSION_DEPTH.as_str()));
        assert_eq!(
            get_severity(syntax::MAX_RECURSION_DEPTH.as_str()),
            Severity::Critical
        );
    }
}

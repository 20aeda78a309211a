// RUNTIME PREFERENCES (User Experience)

use crate::log_error;
use crate::logging::{codes, Code};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Errors raised while loading runtime configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration value: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::Io { .. } | Self::Parse(_) => codes::config::CONFIG_LOAD_FAILURE,
            Self::Invalid { .. } => codes::config::CONFIG_INVALID,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingPreferences {
    /// Whether failed elements record expected labels for diagnostics
    pub record_expectations: bool,

    /// Whether chain entry and exit are traced at debug level
    pub trace_chains: bool,
}

impl Default for MatchingPreferences {
    fn default() -> Self {
        Self {
            record_expectations: env::var(env_vars::MATCHING_RECORD_EXPECTATIONS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            trace_chains: env::var(env_vars::MATCHING_TRACE_CHAINS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches the logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub matching: MatchingPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse configuration from TOML text; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content).map_err(report)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })
            .and_then(|content| Self::parse(&content))
            .map_err(report)
    }

    fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: RuntimeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject combinations that cannot be honored
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.use_structured_logging && !self.logging.enable_console_logging {
            return Err(ConfigError::Invalid {
                message: "structured logging requires console logging to be enabled".to_string(),
            });
        }
        if self.matching.trace_chains && self.logging.min_log_level < LogLevel::Debug {
            return Err(ConfigError::Invalid {
                message: "chain tracing requires min_log_level = \"debug\"".to_string(),
            });
        }
        Ok(())
    }
}

fn report(error: ConfigError) -> ConfigError {
    log_error!(error.error_code(), "Runtime configuration rejected",
        "error" => &error
    );
    error
}

/// Environment variable names for configuration
pub mod env_vars {
    // Matching
    pub const MATCHING_RECORD_EXPECTATIONS: &str = "TOKEN_MATCH_RECORD_EXPECTATIONS";
    pub const MATCHING_TRACE_CHAINS: &str = "TOKEN_MATCH_TRACE_CHAINS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "TOKEN_MATCH_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "TOKEN_MATCH_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "TOKEN_MATCH_LOGGING_MIN_LEVEL";
}

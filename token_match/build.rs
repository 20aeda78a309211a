// build.rs - TOML-driven constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    matching: MatchingLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct MatchingLimits {
    max_parse_depth: usize,
    max_expected_labels: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=TOKEN_MATCH_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=TOKEN_MATCH_CONFIG_DIR");

    let profile =
        env::var("TOKEN_MATCH_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("TOKEN_MATCH_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of token_match directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_PARSE_DEPTH: usize = 10_000;

    if config.matching.max_parse_depth == 0 {
        panic!("LIMITS: max_parse_depth must be at least 1");
    }

    if config.matching.max_parse_depth > ABSOLUTE_MAX_PARSE_DEPTH {
        panic!("LIMITS: max_parse_depth exceeds absolute maximum");
    }

    if config.matching.max_expected_labels == 0 {
        panic!("LIMITS: max_expected_labels must be at least 1");
    }

    if config.logging.log_buffer_size < 100 {
        panic!("LIMITS: log_buffer_size too small (min: 100)");
    }

    if profile == "production" && config.matching.max_parse_depth > 1_000 {
        panic!("PRODUCTION: max_parse_depth too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod matching {{
        pub const MAX_PARSE_DEPTH: usize = {};
        pub const MAX_EXPECTED_LABELS: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.matching.max_parse_depth,
        config.matching.max_expected_labels,
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}

//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::VigilConfig;
use crate::config::secret::{secret_string, secret_string_opt};
use crate::domain::errors::VigilError;
use crate::domain::result::Result;
use regex::Regex;
use secrecy::ExposeSecret;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into VigilConfig
/// 4. Applies environment variable overrides (VIGIL_* prefix, plus the
///    GITHUB_REPOSITORY / GITHUB_TOKEN conventions of CI runners)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use vigil::config::loader::load_config;
///
/// let config = load_config("vigil.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<VigilConfig> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(VigilError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        VigilError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut config: VigilConfig = toml::from_str(&contents)
        .map_err(|e| VigilError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config)?;

    // Validate configuration
    config
        .validate()
        .map_err(|e| VigilError::Configuration(format!("Configuration validation failed: {}", e)))?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Arguments
///
/// * `input` - String containing ${VAR} placeholders
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        // Process non-comment lines for env var substitution
        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(VigilError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Splits a comma-separated override value into trimmed, non-empty entries
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Applies environment variable overrides using the VIGIL_* prefix
///
/// Environment variables follow the pattern: VIGIL_<SECTION>_<KEY>
/// For example: VIGIL_GITHUB_API_URL, VIGIL_SCAN_THRESHOLD.
///
/// Two CI-runner conventions are also honored as fallbacks when the config
/// file leaves the fields empty: GITHUB_REPOSITORY ("owner/repo") and
/// GITHUB_TOKEN.
///
/// # Arguments
///
/// * `config` - Mutable reference to the configuration to update
fn apply_env_overrides(config: &mut VigilConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("VIGIL_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("VIGIL_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // GitHub overrides
    if let Ok(val) = std::env::var("VIGIL_GITHUB_API_URL") {
        config.github.api_url = val;
    }
    if let Ok(val) = std::env::var("VIGIL_GITHUB_OWNER") {
        config.github.owner = val;
    }
    if let Ok(val) = std::env::var("VIGIL_GITHUB_REPO") {
        config.github.repo = val;
    }
    if let Ok(val) = std::env::var("VIGIL_GITHUB_TOKEN") {
        config.github.token = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("VIGIL_GITHUB_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.github.timeout_seconds = timeout;
        }
    }

    // CI-runner fallbacks, only when the config file left the fields empty
    if config.github.owner.is_empty() || config.github.repo.is_empty() {
        if let Ok(val) = std::env::var("GITHUB_REPOSITORY") {
            if let Some((owner, repo)) = val.split_once('/') {
                if config.github.owner.is_empty() {
                    config.github.owner = owner.to_string();
                }
                if config.github.repo.is_empty() {
                    config.github.repo = repo.to_string();
                }
            }
        }
    }
    let token_missing = config
        .github
        .token
        .as_ref()
        .map(|t| t.expose_secret().is_empty())
        .unwrap_or(true);
    if token_missing {
        config.github.token = secret_string_opt(std::env::var("GITHUB_TOKEN").ok());
    }

    // Checks overrides
    if let Ok(val) = std::env::var("VIGIL_CHECKS_SKIP") {
        config.checks.skip = parse_list(&val);
    }
    if let Ok(val) = std::env::var("VIGIL_CHECKS_ENABLE") {
        config.checks.enable = parse_list(&val);
    }
    if let Ok(val) = std::env::var("VIGIL_CHECKS_ALLOWED_OWNERS") {
        config.checks.allowed_owners = parse_list(&val);
    }
    if let Ok(val) = std::env::var("VIGIL_CHECKS_BOT_USERS") {
        config.checks.bot_users = parse_list(&val);
    }

    // Scan overrides
    if let Ok(val) = std::env::var("VIGIL_SCAN_THRESHOLD") {
        if let Ok(threshold) = val.parse() {
            config.scan.threshold = threshold;
        }
    }
    if let Ok(val) = std::env::var("VIGIL_SCAN_EXTENSIONS") {
        config.scan.extensions = parse_list(&val);
    }
    if let Ok(val) = std::env::var("VIGIL_SCAN_IGNORE_FILE") {
        config.scan.ignore_file = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("VIGIL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("VIGIL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

//! Configuration schema types
//!
//! This module defines the configuration structure for Vigil.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main Vigil configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VigilConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// GitHub API configuration
    #[serde(default)]
    pub github: GitHubConfig,

    /// Check pipeline configuration
    #[serde(default)]
    pub checks: ChecksConfig,

    /// PII scan configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VigilConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.github.validate()?;
        self.checks.validate()?;
        self.scan.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Report-only mode: log findings but never fail the run
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Backoff multiplier
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_delay_ms: default_initial_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
            backoff_multiplier: default_backoff_multiplier(),
        }
    }
}

/// GitHub API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Repository owner (user or organization)
    #[serde(default)]
    pub owner: String,

    /// Repository name
    #[serde(default)]
    pub repo: String,

    /// API token
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Retry configuration
    #[serde(default)]
    pub retry: RetryConfig,
}

impl GitHubConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.api_url.is_empty() {
            return Err("github.api_url cannot be empty".to_string());
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err("github.api_url must start with http:// or https://".to_string());
        }

        if self.owner.is_empty() {
            return Err(
                "github.owner cannot be empty (set it in the config file or via GITHUB_REPOSITORY)"
                    .to_string(),
            );
        }

        if self.repo.is_empty() {
            return Err(
                "github.repo cannot be empty (set it in the config file or via GITHUB_REPOSITORY)"
                    .to_string(),
            );
        }

        if self
            .token
            .as_ref()
            .map(|t| t.expose_secret().is_empty())
            .unwrap_or(true)
        {
            return Err(
                "github.token cannot be empty (set it in the config file or via GITHUB_TOKEN)"
                    .to_string(),
            );
        }

        if self.timeout_seconds == 0 {
            return Err("github.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            owner: String::new(),
            repo: String::new(),
            token: None,
            timeout_seconds: default_timeout_seconds(),
            retry: RetryConfig::default(),
        }
    }
}

/// Check pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksConfig {
    /// Names of checks to skip
    #[serde(default)]
    pub skip: Vec<String>,

    /// Names of optional checks to enable
    #[serde(default)]
    pub enable: Vec<String>,

    /// Repository owners checks are allowed to run for (empty = any owner)
    #[serde(default)]
    pub allowed_owners: Vec<String>,

    /// Author logins treated as bots; bot-triggered events skip all checks
    #[serde(default = "default_bot_users")]
    pub bot_users: Vec<String>,
}

impl ChecksConfig {
    fn validate(&self) -> Result<(), String> {
        for name in self.skip.iter().chain(self.enable.iter()) {
            if name.trim().is_empty() {
                return Err("checks.skip and checks.enable entries cannot be blank".to_string());
            }
        }
        Ok(())
    }
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            skip: vec![],
            enable: vec![],
            allowed_owners: vec![],
            bot_users: default_bot_users(),
        }
    }
}

/// PII scan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Fraction of data lines that must match before a type is reported
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// File extensions eligible for scanning
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Path of the ignore manifest at the repository root
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,
}

impl ScanConfig {
    fn validate(&self) -> Result<(), String> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(format!(
                "scan.threshold must be in (0.0, 1.0], got {}",
                self.threshold
            ));
        }

        if self.extensions.is_empty() {
            return Err("scan.extensions cannot be empty".to_string());
        }

        for ext in &self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(format!(
                    "scan.extensions entries must start with '.', got '{ext}'"
                ));
            }
        }

        if self.ignore_file.trim().is_empty() {
            return Err("scan.ignore_file cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            extensions: default_extensions(),
            ignore_file: default_ignore_file(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB
    #[serde(default = "default_local_max_size_mb")]
    pub local_max_size_mb: usize,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "size"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_max_size_mb == 0 {
            return Err("logging.local_max_size_mb must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
            local_max_size_mb: default_local_max_size_mb(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_max_retries() -> usize {
    3
}

fn default_initial_delay_ms() -> u64 {
    1000
}

fn default_max_delay_ms() -> u64 {
    30000
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_bot_users() -> Vec<String> {
    vec![
        "dependabot[bot]".to_string(),
        "dependabot-preview[bot]".to_string(),
        "snyk-bot".to_string(),
    ]
}

fn default_threshold() -> f64 {
    0.7
}

fn default_extensions() -> Vec<String> {
    vec![".csv".to_string()]
}

fn default_ignore_file() -> String {
    ".piidetectionignore".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_local_max_size_mb() -> usize {
    100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret::secret_string;

    fn valid_github_config() -> GitHubConfig {
        GitHubConfig {
            api_url: "https://api.github.com".to_string(),
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
            token: Some(secret_string("ghp_test".to_string())),
            timeout_seconds: 30,
            retry: RetryConfig::default(),
        }
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig {
            log_level: "info".to_string(),
            dry_run: false,
        };

        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_github_config_validation() {
        let config = valid_github_config();
        assert!(config.validate().is_ok());

        let mut missing_owner = valid_github_config();
        missing_owner.owner = String::new();
        assert!(missing_owner.validate().is_err());

        let mut missing_repo = valid_github_config();
        missing_repo.repo = String::new();
        assert!(missing_repo.validate().is_err());

        let mut bad_url = valid_github_config();
        bad_url.api_url = "api.github.com".to_string();
        assert!(bad_url.validate().is_err());

        let mut zero_timeout = valid_github_config();
        zero_timeout.timeout_seconds = 0;
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_github_config_requires_token() {
        let mut config = valid_github_config();
        config.token = None;
        let err = config.validate().unwrap_err();
        assert!(err.contains("github.token"));

        config.token = Some(secret_string(String::new()));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_checks_config_validation() {
        let mut config = ChecksConfig::default();
        assert!(config.validate().is_ok());

        config.skip = vec!["pii-detection".to_string()];
        assert!(config.validate().is_ok());

        config.skip = vec!["  ".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_checks_config_default_bots() {
        let config = ChecksConfig::default();
        assert!(config.bot_users.contains(&"dependabot[bot]".to_string()));
        assert!(config.allowed_owners.is_empty());
    }

    #[test]
    fn test_scan_config_validation() {
        let mut config = ScanConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.threshold, 0.7);
        assert_eq!(config.extensions, vec![".csv".to_string()]);
        assert_eq!(config.ignore_file, ".piidetectionignore");

        config.threshold = 0.0;
        assert!(config.validate().is_err());

        config.threshold = 1.5;
        assert!(config.validate().is_err());

        config.threshold = 1.0;
        assert!(config.validate().is_ok());

        config.extensions = vec![];
        assert!(config.validate().is_err());

        config.extensions = vec!["csv".to_string()];
        assert!(config.validate().is_err());

        config.extensions = vec![".csv".to_string(), ".tsv".to_string()];
        assert!(config.validate().is_ok());

        config.ignore_file = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert!(!config.local_enabled);
        assert_eq!(config.local_path, "logs");
        assert_eq!(config.local_rotation, "daily");
        assert_eq!(config.local_max_size_mb, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_config_rejects_unknown_rotation() {
        let config = LoggingConfig {
            local_rotation: "weekly".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_full_config_validation() {
        let config = VigilConfig {
            application: ApplicationConfig::default(),
            github: valid_github_config(),
            checks: ChecksConfig::default(),
            scan: ScanConfig::default(),
            logging: LoggingConfig::default(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_api_url(), "https://api.github.com");
        assert_eq!(default_threshold(), 0.7);
        assert_eq!(default_extensions(), vec![".csv".to_string()]);
        assert_eq!(default_ignore_file(), ".piidetectionignore");
        assert_eq!(default_max_retries(), 3);
    }
}

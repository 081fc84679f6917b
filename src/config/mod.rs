//! Configuration management for Vigil.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Vigil uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for optional settings
//! - Comprehensive validation
//! - Type-safe configuration structs
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vigil::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("vigil.toml")?;
//!
//! // Access configuration sections
//! println!("Repository: {}/{}", config.github.owner, config.github.repo);
//! println!("Scan threshold: {}", config.scan.threshold);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! The configuration is organized into sections:
//!
//! - [`ApplicationConfig`] - Application settings (log level, dry run)
//! - [`GitHubConfig`] - GitHub API connection and authentication
//! - [`ChecksConfig`] - Check pipeline gating (skip/enable lists, owners, bots)
//! - [`ScanConfig`] - PII scan settings (threshold, extensions, ignore file)
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [github]
//! owner = "acme"
//! repo = "widgets"
//! token = "${GITHUB_TOKEN}"
//!
//! [checks]
//! skip = []
//! bot_users = ["dependabot[bot]"]
//!
//! [scan]
//! threshold = 0.7
//! extensions = [".csv"]
//! ignore_file = ".piidetectionignore"
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution:
//!
//! ```bash
//! export GITHUB_TOKEN="ghp_secret-token"
//! ```
//!
//! Any setting can also be overridden with a `VIGIL_<SECTION>_<KEY>`
//! variable, e.g. `VIGIL_SCAN_THRESHOLD=0.5`.
//!
//! # Validation
//!
//! Configuration is validated on load:
//!
//! ```rust,no_run
//! use vigil::config::load_config;
//!
//! # fn example() {
//! match load_config("vigil.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ChecksConfig, GitHubConfig, LoggingConfig, RetryConfig, ScanConfig,
    VigilConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};

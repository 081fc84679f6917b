//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "vigil.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Vigil configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        // Generate configuration content
        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        // Write to file
        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Set GITHUB_TOKEN in the environment (or a .env file)");
                println!("  3. Set GITHUB_REPOSITORY (owner/repo), or fill in [github]");
                println!("  4. Validate configuration: vigil validate-config");
                println!("  5. Run the checks: vigil run --event push --sha <sha>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Vigil Configuration File
# CI compliance checks with PII detection

[application]
log_level = "info"
dry_run = false

[github]
# owner, repo, and token normally come from the CI runner environment
# (GITHUB_REPOSITORY and GITHUB_TOKEN); fill them in here for local runs.
owner = ""
repo = ""
timeout_seconds = 30

[checks]
skip = []
enable = []
allowed_owners = []
bot_users = ["dependabot[bot]", "dependabot-preview[bot]", "snyk-bot"]

[scan]
threshold = 0.7
extensions = [".csv"]
ignore_file = ".piidetectionignore"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
local_max_size_mb = 100
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Vigil Configuration File
# CI compliance checks with PII detection
#
# This file contains all configuration options with examples and explanations.
#
# Any value can be overridden with a VIGIL_<SECTION>_<KEY> environment
# variable, e.g. VIGIL_SCAN_THRESHOLD=0.5. The CI runner conventions
# GITHUB_REPOSITORY and GITHUB_TOKEN fill in [github] fields left empty.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (report findings without failing the run)
dry_run = false

# ============================================================================
# GitHub API Configuration
# ============================================================================
[github]
# Base URL of the GitHub REST API (change for GitHub Enterprise)
api_url = "https://api.github.com"

# Repository owner (user or organization). Empty = take from
# GITHUB_REPOSITORY.
owner = ""

# Repository name. Empty = take from GITHUB_REPOSITORY.
repo = ""

# API token (use environment variable substitution)
# token = "${GITHUB_TOKEN}"

# Request timeout in seconds
timeout_seconds = 30

# Retry behavior for transient API failures
[github.retry]
max_retries = 3
initial_delay_ms = 1000
max_delay_ms = 30000
backoff_multiplier = 2.0

# ============================================================================
# Check Pipeline Configuration
# ============================================================================
[checks]
# Names of checks to skip entirely
skip = []

# Names of optional checks to enable
enable = []

# Repository owners checks run for. Empty = any owner. Listing your
# organization here keeps forks from running the checks.
allowed_owners = []

# Author logins treated as bots; bot-triggered events skip all checks
bot_users = ["dependabot[bot]", "dependabot-preview[bot]", "snyk-bot"]

# ============================================================================
# PII Scan Configuration
# ============================================================================
[scan]
# Fraction of data lines that must match before a PII type is reported.
# A file where more than 70% of lines look like emails is flagged; a
# README with one example address is not.
threshold = 0.7

# File extensions eligible for scanning
extensions = [".csv"]

# Path of the ignore manifest at the repository root. One path per line,
# exact match. Files listed here are never scanned (intentional fake
# data, fixtures).
ignore_file = ".piidetectionignore"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging (console logging is always on)
local_enabled = false

# Local log directory
local_path = "logs"

# Log rotation (daily, hourly, or size)
local_rotation = "daily"

# Maximum log file size in MB
local_max_size_mb = 100
"#
        .to_string()
    }
}

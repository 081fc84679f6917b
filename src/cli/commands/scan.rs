//! Scan command implementation
//!
//! This module implements the `scan` command: the PII scan on its own,
//! without the run gating conditions. Useful for trying a threshold or an
//! ignore manifest against a known commit.

use crate::adapters::github::GitHubClient;
use crate::config::load_config;
use crate::core::scan::ScanCoordinator;
use crate::domain::{EventContext, VigilError};
use clap::Args;
use std::sync::Arc;
use tokio::sync::watch;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// CI event name (push or pull_request)
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event: String,

    /// Head commit SHA of the event
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// Pull request number, for pull_request events
    #[arg(long)]
    pub pull_request: Option<u64>,

    /// Git ref to read repository files at
    #[arg(long, env = "GITHUB_REF")]
    pub git_ref: Option<String>,

    /// Report findings without failing the run
    #[arg(long)]
    pub dry_run: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting scan command");

        // Load configuration
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Apply dry-run flag from CLI
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
        let dry_run = config.application.dry_run;

        if dry_run {
            tracing::info!("Dry run mode enabled - findings will not fail the run");
            println!("🔍 DRY RUN MODE - Findings are reported but do not fail the run");
            println!();
        }

        let event = EventContext::from_parts(
            &self.event,
            self.sha.clone(),
            self.pull_request,
            self.git_ref.clone(),
        );

        // Create the GitHub client
        let source = match GitHubClient::new(&config.github) {
            Ok(c) => Arc::new(c),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create GitHub client");
                eprintln!("Failed to initialize GitHub client: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        // Create scan coordinator
        tracing::info!("Creating scan coordinator");
        let coordinator = match ScanCoordinator::new(source, config.scan.clone(), shutdown_signal)
        {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create scan coordinator");
                eprintln!("Failed to initialize scan: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        println!("🚀 Starting scan...");
        println!();

        let summary = match coordinator.execute_scan(&event).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Scan failed");
                eprintln!("Scan failed: {e}");
                return Ok(match e {
                    VigilError::GitHub(_) => 4,    // Connection error exit code
                    VigilError::Validation(_) => 2, // Usage error exit code
                    _ => 5,                         // Fatal error exit code
                });
            }
        };

        // Display summary
        println!();
        println!("📊 Scan Summary:");
        println!("  Candidates: {}", summary.candidates);
        println!("  Scanned: {}", summary.files_scanned);
        println!("  Detections: {}", summary.detections.len());
        println!("  Skipped on errors: {}", summary.skipped.len());
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        if !summary.skipped.is_empty() {
            println!("⚠️  Files skipped on errors:");
            for skipped in &summary.skipped {
                println!("  - {}: {}", skipped.path, skipped.reason);
            }
            println!();
        }

        // Determine exit code
        let exit_code = if !summary.is_clean() {
            println!("{}", summary.failure_message(&config.scan.ignore_file));
            println!();
            if dry_run {
                println!("⚠️  PII detected (dry run, not failing)");
                0
            } else {
                println!("❌ PII detected");
                1 // Check failure exit code
            }
        } else if summary.interrupted {
            println!("⚠️  Scan interrupted before all files were scanned.");
            println!("   Run the same command to scan the full set.");
            tracing::info!("Scan interrupted by user signal");
            130 // SIGINT exit code (standard Unix convention)
        } else {
            println!("✅ No PII detected");
            0
        };

        Ok(exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_args_defaults() {
        let args = ScanArgs {
            event: "push".to_string(),
            sha: Some("0a1b2c3d".to_string()),
            pull_request: None,
            git_ref: None,
            dry_run: false,
        };

        assert_eq!(args.event, "push");
        assert!(args.git_ref.is_none());
        assert!(!args.dry_run);
    }
}

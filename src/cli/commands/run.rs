//! Run command implementation
//!
//! This module implements the `run` command: the full gated check pipeline
//! against one CI event.

use crate::adapters::github::GitHubClient;
use crate::config::load_config;
use crate::core::checks::{CheckContext, CheckPipeline};
use crate::domain::{EventContext, VigilError};
use clap::Args;
use std::sync::Arc;
use tokio::sync::watch;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
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

impl RunArgs {
    /// Execute the run command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting run command");

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
        tracing::info!(
            event = %event.kind,
            repository = format!("{}/{}", config.github.owner, config.github.repo),
            "Running checks"
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

        // Keep a receiver to tell an interrupted run from a completed one
        let shutdown_probe = shutdown_signal.clone();

        let ctx = CheckContext::new(event, source, config, shutdown_signal);
        let pipeline = CheckPipeline::standard();

        println!("🚀 Running checks...");
        println!();

        let report = match pipeline.run(&ctx).await {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "Check run failed");
                eprintln!("Check run failed: {e}");
                return Ok(match e {
                    VigilError::GitHub(_) => 4,    // Connection error exit code
                    VigilError::Validation(_) => 2, // Usage error exit code
                    _ => 5,                         // Fatal error exit code
                });
            }
        };

        // Display summary
        println!();
        println!("📋 Check Summary:");
        println!("  Executed: {}", report.executed.len());
        println!("  Skipped: {}", report.skipped.len());
        println!("  Failures: {}", report.failures.len());
        println!();

        if !report.failures.is_empty() {
            for failure in &report.failures {
                println!("❌ {} failed:", failure.check);
                println!("{}", failure.message);
                println!();
            }
        }

        // Determine exit code
        let exit_code = if let Some(reason) = &report.gated {
            println!("⏭️  All checks skipped: {reason}");
            0
        } else if !report.passed() {
            if dry_run {
                println!("⚠️  Checks reported findings (dry run, not failing)");
                0
            } else {
                println!("❌ Checks failed");
                1 // Check failure exit code
            }
        } else if *shutdown_probe.borrow() {
            println!("⚠️  Run interrupted before all files were scanned.");
            println!("   Run the same command to scan the full set.");
            tracing::info!("Run interrupted by user signal");
            130 // SIGINT exit code (standard Unix convention)
        } else {
            println!("✅ All checks passed");
            0
        };

        Ok(exit_code)
    }
}

//! Core business logic for Vigil.
//!
//! This module contains the check pipeline and the PII scan engine.
//!
//! # Modules
//!
//! - [`checks`] - The check trait, gating conditions, and the pipeline
//! - [`scan`] - The PII scan engine (candidate selection, CSV classification,
//!   threshold prediction)
//!
//! # Run Workflow
//!
//! The typical run:
//!
//! 1. **Gate**: Evaluate run conditions (owner allow-list, bot author, draft)
//! 2. **Discover**: Resolve the event's changed-file list
//! 3. **Select**: Keep scannable extensions, drop ignore-manifest entries
//! 4. **Classify**: Parse each candidate as CSV and match cells against the
//!    detection patterns
//! 5. **Predict**: Report the PII types whose per-line match counts clear the
//!    threshold
//! 6. **Report**: Generate a scan summary and fail the check on detections
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vigil::adapters::github::GitHubClient;
//! use vigil::config::load_config;
//! use vigil::core::checks::{CheckContext, CheckPipeline};
//! use vigil::domain::EventContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = load_config("vigil.toml")?;
//!
//! // Create the GitHub client and shutdown signal
//! let source = Arc::new(GitHubClient::new(&config.github)?);
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//! // Run every registered check against the event
//! let event = EventContext::push("0a1b2c3d");
//! let ctx = CheckContext::new(event, source, config, shutdown_rx);
//! let report = CheckPipeline::standard().run(&ctx).await?;
//!
//! println!("Executed: {}", report.executed.len());
//! println!("Failures: {}", report.failures.len());
//! # Ok(())
//! # }
//! ```

pub mod checks;
pub mod scan;

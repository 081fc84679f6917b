// Vigil - CI compliance checks with PII detection
// Copyright (c) 2025 Vigil Contributors
// Licensed under the MIT License

//! # Vigil - CI compliance checks with PII detection
//!
//! Vigil is a compliance-check runner for GitHub pushes and pull requests.
//! Its built-in check scans an event's changed CSV files for personally
//! identifiable information (phone numbers, emails, SSNs, credit card
//! numbers) and fails the run when a file looks like it is full of it.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Gating** runs on repository owner, bot authorship, and draft status
//! - **Discovering** an event's changed files through the GitHub REST API
//! - **Classifying** CSV content cell-by-cell against PII detection patterns
//! - **Predicting** PII types whose per-line match counts clear a threshold
//!
//! ## Architecture
//!
//! Vigil follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (check pipeline, scan engine)
//! - [`adapters`] - External integrations (GitHub REST API)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vigil::adapters::github::GitHubClient;
//! use vigil::config::load_config;
//! use vigil::core::checks::{CheckContext, CheckPipeline};
//! use vigil::domain::EventContext;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("vigil.toml")?;
//!
//!     // Create the GitHub client and shutdown signal
//!     let source = Arc::new(GitHubClient::new(&config.github)?);
//!     let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//!     // Run the checks against a push event
//!     let event = EventContext::push("0a1b2c3d");
//!     let ctx = CheckContext::new(event, source, config, shutdown_rx);
//!     let report = CheckPipeline::standard().run(&ctx).await?;
//!
//!     println!("Failures: {}", report.failures.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Threshold-Based Detection
//!
//! A file is only flagged when a PII type's cell matches outnumber the
//! threshold share of data lines. One example email in a fixture does not
//! fail a build; a column of them does:
//!
//! ```rust
//! use vigil::core::scan::{classify, PatternCatalog};
//!
//! # fn example() -> vigil::domain::Result<()> {
//! let catalog = PatternCatalog::standard()?;
//! let tally = classify(
//!     "alice@example.com,active\nbob@example.com,inactive\n",
//!     &catalog,
//! )?;
//!
//! let prediction = tally.predict(0.7);
//! assert!(prediction.detected);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ### Ignore Manifest
//!
//! Repositories holding intentional fake data list those paths in an
//! ignore manifest (`.piidetectionignore` by default), one exact path per
//! line. Listed files are never scanned. A missing manifest means nothing
//! is ignored.
//!
//! ### Run Gating
//!
//! Runs triggered by configured bot accounts, draft pull requests, and
//! repositories outside the owner allow-list skip every check and pass.
//! Forks of a private data pipeline don't burn API quota re-scanning
//! upstream fixtures.
//!
//! ## Error Handling
//!
//! Vigil uses the [`domain::VigilError`] type for all errors:
//!
//! ```rust,no_run
//! use vigil::domain::VigilError;
//!
//! fn example() -> Result<(), VigilError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = vigil::config::load_config("vigil.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Vigil uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting scan");
//! warn!(path = "data/users.csv", "File skipped on download error");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

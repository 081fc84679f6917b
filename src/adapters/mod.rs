//! External system integrations for Vigil.
//!
//! This module provides adapters for integrating with external systems:
//!
//! - [`github`] - GitHub REST API integration
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies
//! and enable testing with mock implementations. The repository layer uses
//! trait-based abstraction ([`github::RepoSource`]) so the check pipeline and
//! the scan engine never depend on the concrete HTTP client.
//!
//! # GitHub Adapter
//!
//! ```rust,no_run
//! use vigil::adapters::github::{GitHubClient, RepoSource};
//! use vigil::config::{secret_string, GitHubConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GitHubConfig {
//!     owner: "acme".to_string(),
//!     repo: "widgets".to_string(),
//!     token: Some(secret_string("ghp_example".to_string())),
//!     ..Default::default()
//! };
//!
//! let client = GitHubClient::new(&config)?;
//! let files = client.get_pull_request_files(42).await?;
//! println!("{} files in the diff", files.len());
//! # Ok(())
//! # }
//! ```

pub mod github;

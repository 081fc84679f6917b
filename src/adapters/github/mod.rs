//! GitHub adapter implementation
//!
//! This module provides the integration with the GitHub REST API: the
//! `RepoSource` trait the core consumes and the HTTP client implementing it.

pub mod client;
pub mod source;

pub use client::GitHubClient;
pub use source::{Commit, PullRequest, RepoSource};

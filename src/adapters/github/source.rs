//! Repository source trait definition
//!
//! This module defines the `RepoSource` trait that abstracts the repository
//! hosting API the checks read from. The production implementation talks to
//! the GitHub REST API; tests substitute an in-memory source.

use crate::domain::{ChangedFile, FileContent, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A commit with its changed files and authorship
///
/// Push events resolve their file set through the head commit. The author
/// fields also drive bot detection: hosted bots show up either as a login
/// (`dependabot[bot]`) or only as a commit author name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Commit {
    /// Commit SHA
    pub sha: String,

    /// Login of the commit author account, when the host resolved one
    pub author_login: Option<String>,

    /// Name recorded in the commit metadata
    pub author_name: Option<String>,

    /// Files changed by this commit; absent when the host omits the diff
    pub files: Option<Vec<ChangedFile>>,
}

impl Commit {
    /// Create a commit with no resolved author or file list
    pub fn new(sha: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            author_login: None,
            author_name: None,
            files: None,
        }
    }

    /// Set the author login
    pub fn with_author_login(mut self, login: impl Into<String>) -> Self {
        self.author_login = Some(login.into());
        self
    }

    /// Set the author name
    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    /// Set the changed-file list
    pub fn with_files(mut self, files: Vec<ChangedFile>) -> Self {
        self.files = Some(files);
        self
    }
}

/// Pull request metadata needed for gating and file discovery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PullRequest {
    /// Pull request number
    pub number: u64,

    /// Login of the pull request author
    pub author: Option<String>,

    /// Whether the pull request is a draft
    pub draft: bool,

    /// SHA of the head commit
    pub head_sha: String,
}

/// Trait for repository hosting implementations
///
/// This trait defines the read-only repository operations the check pipeline
/// needs. Implementations must be safe to share across tasks.
///
/// # Example
///
/// ```no_run
/// use vigil::adapters::github::{GitHubClient, RepoSource};
/// use vigil::config::GitHubConfig;
///
/// # async fn example() -> vigil::domain::Result<()> {
/// let config = GitHubConfig::default();
/// let client = GitHubClient::new(&config)?;
///
/// // Fetch the head commit of a push, including its changed files
/// let commit = client.get_commit("0a1b2c3d").await?;
/// println!("{} files changed", commit.files.map(|f| f.len()).unwrap_or(0));
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Fetch a single commit with its changed files
    ///
    /// # Arguments
    ///
    /// * `sha` - The commit SHA to fetch
    ///
    /// # Errors
    ///
    /// Returns an error if the commit does not exist or the request fails.
    async fn get_commit(&self, sha: &str) -> Result<Commit>;

    /// Fetch pull request metadata
    ///
    /// # Arguments
    ///
    /// * `number` - The pull request number
    ///
    /// # Errors
    ///
    /// Returns an error if the pull request does not exist or the request
    /// fails.
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest>;

    /// Fetch the changed-file list of a pull request
    ///
    /// # Arguments
    ///
    /// * `number` - The pull request number
    ///
    /// # Errors
    ///
    /// Returns an error if the pull request does not exist or the request
    /// fails.
    async fn get_pull_request_files(&self, number: u64) -> Result<Vec<ChangedFile>>;

    /// Fetch the contents of a file at a given ref
    ///
    /// # Arguments
    ///
    /// * `path` - Path of the file relative to the repository root
    /// * `git_ref` - Commit-ish to read at; the default branch when `None`
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::GitHubError::NotFound`] (wrapped in
    /// [`crate::domain::VigilError::GitHub`]) when the file does not exist at
    /// that ref, or another error if the request fails.
    async fn fetch_file_content(&self, path: &str, git_ref: Option<&str>) -> Result<FileContent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_builder() {
        let commit = Commit::new("abc123")
            .with_author_login("dependabot[bot]")
            .with_author_name("dependabot")
            .with_files(vec![ChangedFile::new("data/users.csv")]);

        assert_eq!(commit.sha, "abc123");
        assert_eq!(commit.author_login.as_deref(), Some("dependabot[bot]"));
        assert_eq!(commit.author_name.as_deref(), Some("dependabot"));
        assert_eq!(commit.files.as_ref().map(|f| f.len()), Some(1));
    }

    #[test]
    fn test_commit_defaults() {
        let commit = Commit::new("abc123");
        assert!(commit.author_login.is_none());
        assert!(commit.author_name.is_none());
        assert!(commit.files.is_none());
    }

    #[test]
    fn test_pull_request_serialization() {
        let pr = PullRequest {
            number: 42,
            author: Some("octocat".to_string()),
            draft: false,
            head_sha: "abc123".to_string(),
        };

        let json = serde_json::to_string(&pr).unwrap();
        let deserialized: PullRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(pr, deserialized);
    }
}

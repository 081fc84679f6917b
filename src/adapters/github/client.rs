//! GitHub REST API client
//!
//! This module implements the `RepoSource` trait against the GitHub REST v3
//! API. It handles authentication, request retries with exponential backoff,
//! and mapping of HTTP status codes onto domain errors.

use super::source::{Commit, PullRequest, RepoSource};
use crate::config::GitHubConfig;
use crate::domain::{ChangedFile, FileContent, GitHubError, Result, VigilError};
use crate::log_retry_attempt;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::time::Duration;

const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// GitHub REST API client
///
/// # Example
///
/// ```no_run
/// use vigil::adapters::github::GitHubClient;
/// use vigil::config::GitHubConfig;
///
/// # fn example() -> vigil::domain::Result<()> {
/// let config = GitHubConfig::default();
/// let client = GitHubClient::new(&config)?;
/// # Ok(())
/// # }
/// ```
pub struct GitHubClient {
    /// Base URL of the API
    api_url: String,

    /// HTTP client for making requests
    client: Client,

    /// GitHub configuration
    config: GitHubConfig,
}

impl GitHubClient {
    /// Create a new GitHub client from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - GitHub configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("vigil/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                VigilError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            client,
            config: config.clone(),
        })
    }

    /// Base URL of the API this client talks to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn repo_url(&self, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url, self.config.owner, self.config.repo, tail
        )
    }

    /// Build authorization header value
    fn auth_header_value(&self) -> Option<String> {
        self.config
            .token
            .as_ref()
            .map(|token| format!("Bearer {}", token.expose_secret()))
    }

    /// Retry a request with exponential backoff
    ///
    /// Only errors marked retryable (connection failures, timeouts, rate
    /// limits, 5xx) are retried; everything else returns immediately.
    async fn retry_request<F, T, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let max_retries = self.config.retry.max_retries;
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    let retryable = matches!(&e, VigilError::GitHub(g) if g.is_retryable());
                    attempt += 1;
                    if !retryable || attempt >= max_retries {
                        return Err(e);
                    }

                    // Calculate backoff delay
                    let delay_ms = self.config.retry.initial_delay_ms
                        * (self
                            .config
                            .retry
                            .backoff_multiplier
                            .powf((attempt - 1) as f64) as u64);
                    let delay_ms = delay_ms.min(self.config.retry.max_delay_ms);

                    log_retry_attempt!(attempt, max_retries, e);

                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }

    async fn get_json<T>(&self, url: &str, query: &[(&str, &str)], resource: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self
            .client
            .get(url)
            .header("Accept", ACCEPT_HEADER)
            .query(query);

        if let Some(auth) = self.auth_header_value() {
            request = request.header("Authorization", auth);
        }

        let resp = request.send().await.map_err(|e| {
            if e.is_timeout() {
                VigilError::GitHub(GitHubError::Timeout(e.to_string()))
            } else {
                VigilError::GitHub(GitHubError::ConnectionFailed(e.to_string()))
            }
        })?;

        let status = resp.status();
        if status == StatusCode::OK {
            resp.json::<T>()
                .await
                .map_err(|e| VigilError::GitHub(GitHubError::InvalidResponse(e.to_string())))
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(VigilError::GitHub(classify_status(status, &body, resource)))
        }
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn get_commit(&self, sha: &str) -> Result<Commit> {
        let url = self.repo_url(&format!("commits/{sha}"));

        tracing::debug!(url = %url, sha = %sha, "Fetching commit");

        let response = self
            .retry_request(|| async {
                self.get_json::<CommitResponse>(&url, &[], &format!("commit {sha}"))
                    .await
            })
            .await?;

        Ok(response.into_commit())
    }

    async fn get_pull_request(&self, number: u64) -> Result<PullRequest> {
        let url = self.repo_url(&format!("pulls/{number}"));

        tracing::debug!(url = %url, number = number, "Fetching pull request");

        let response = self
            .retry_request(|| async {
                self.get_json::<PullRequestResponse>(&url, &[], &format!("pull request #{number}"))
                    .await
            })
            .await?;

        Ok(PullRequest {
            number: response.number,
            author: response.user.map(|u| u.login),
            draft: response.draft.unwrap_or(false),
            head_sha: response.head.sha,
        })
    }

    async fn get_pull_request_files(&self, number: u64) -> Result<Vec<ChangedFile>> {
        let url = self.repo_url(&format!("pulls/{number}/files"));

        tracing::debug!(url = %url, number = number, "Fetching pull request files");

        let response = self
            .retry_request(|| async {
                self.get_json::<Vec<FileEntryResponse>>(
                    &url,
                    &[("per_page", "100")],
                    &format!("files of pull request #{number}"),
                )
                .await
            })
            .await?;

        Ok(response.into_iter().map(FileEntryResponse::into_changed_file).collect())
    }

    async fn fetch_file_content(&self, path: &str, git_ref: Option<&str>) -> Result<FileContent> {
        let url = self.repo_url(&format!("contents/{path}"));

        tracing::debug!(url = %url, path = %path, git_ref = ?git_ref, "Fetching file content");

        let query: Vec<(&str, &str)> = match git_ref {
            Some(r) => vec![("ref", r)],
            None => vec![],
        };

        self.retry_request(|| async {
            self.get_json::<FileContent>(&url, &query, path).await
        })
        .await
    }
}

/// Map a non-success HTTP status onto a domain error
fn classify_status(status: StatusCode, body: &str, resource: &str) -> GitHubError {
    match status {
        StatusCode::UNAUTHORIZED => GitHubError::AuthenticationFailed(format!(
            "credentials rejected while fetching {resource}"
        )),
        StatusCode::FORBIDDEN if body.to_lowercase().contains("rate limit") => {
            GitHubError::RateLimitExceeded(body.to_string())
        }
        StatusCode::FORBIDDEN => GitHubError::AuthenticationFailed(format!(
            "access forbidden while fetching {resource}"
        )),
        StatusCode::NOT_FOUND => GitHubError::NotFound(resource.to_string()),
        StatusCode::TOO_MANY_REQUESTS => GitHubError::RateLimitExceeded(body.to_string()),
        s if s.is_server_error() => GitHubError::ServerError {
            status: s.as_u16(),
            message: body.to_string(),
        },
        s => GitHubError::ClientError {
            status: s.as_u16(),
            message: body.to_string(),
        },
    }
}

/// One changed-file entry of a commit or pull request diff
#[derive(Debug, Deserialize)]
struct FileEntryResponse {
    filename: String,
    contents_url: Option<String>,
}

impl FileEntryResponse {
    fn into_changed_file(self) -> ChangedFile {
        ChangedFile {
            filename: self.filename,
            contents_url: self.contents_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GitAuthorResponse {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommitDetailResponse {
    author: Option<GitAuthorResponse>,
}

/// Commit response structure
#[derive(Debug, Deserialize)]
struct CommitResponse {
    sha: String,
    commit: Option<CommitDetailResponse>,
    author: Option<UserResponse>,
    files: Option<Vec<FileEntryResponse>>,
}

impl CommitResponse {
    fn into_commit(self) -> Commit {
        Commit {
            sha: self.sha,
            author_login: self.author.map(|u| u.login),
            author_name: self.commit.and_then(|c| c.author).and_then(|a| a.name),
            files: self.files.map(|files| {
                files
                    .into_iter()
                    .map(FileEntryResponse::into_changed_file)
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct HeadResponse {
    sha: String,
}

/// Pull request response structure
#[derive(Debug, Deserialize)]
struct PullRequestResponse {
    number: u64,
    draft: Option<bool>,
    user: Option<UserResponse>,
    head: HeadResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret::secret_string;

    fn test_config() -> GitHubConfig {
        GitHubConfig {
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
            token: Some(secret_string("ghp_test".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_creation() {
        let client = GitHubClient::new(&test_config()).unwrap();
        assert_eq!(client.api_url(), "https://api.github.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = GitHubConfig {
            api_url: "https://github.example.com/api/v3/".to_string(),
            ..test_config()
        };
        let client = GitHubClient::new(&config).unwrap();
        assert_eq!(client.api_url(), "https://github.example.com/api/v3");
        assert_eq!(
            client.repo_url("pulls/1"),
            "https://github.example.com/api/v3/repos/acme/widgets/pulls/1"
        );
    }

    #[test]
    fn test_auth_header_uses_bearer_scheme() {
        let client = GitHubClient::new(&test_config()).unwrap();
        assert_eq!(client.auth_header_value().unwrap(), "Bearer ghp_test");
    }

    #[test]
    fn test_classify_status_not_found() {
        let err = classify_status(StatusCode::NOT_FOUND, "", "contents/.piidetectionignore");
        assert!(matches!(err, GitHubError::NotFound(_)));
    }

    #[test]
    fn test_classify_status_auth() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, "bad credentials", "commit abc"),
            GitHubError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, "nope", "commit abc"),
            GitHubError::AuthenticationFailed(_)
        ));
    }

    #[test]
    fn test_classify_status_rate_limit() {
        assert!(matches!(
            classify_status(
                StatusCode::FORBIDDEN,
                "API rate limit exceeded for install",
                "commit abc"
            ),
            GitHubError::RateLimitExceeded(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, "slow down", "commit abc"),
            GitHubError::RateLimitExceeded(_)
        ));
    }

    #[test]
    fn test_classify_status_server_and_client() {
        assert!(matches!(
            classify_status(StatusCode::BAD_GATEWAY, "", "commit abc"),
            GitHubError::ServerError { status: 502, .. }
        ));
        assert!(matches!(
            classify_status(StatusCode::UNPROCESSABLE_ENTITY, "", "commit abc"),
            GitHubError::ClientError { status: 422, .. }
        ));
    }

    #[test]
    fn test_commit_response_parsing() {
        let json = r#"{
            "sha": "abc123",
            "commit": { "author": { "name": "Jesse Developer" } },
            "author": { "login": "jdev" },
            "files": [
                {
                    "filename": "data/users.csv",
                    "contents_url": "https://api.github.com/repos/acme/widgets/contents/data/users.csv?ref=abc123"
                }
            ]
        }"#;

        let response: CommitResponse = serde_json::from_str(json).unwrap();
        let commit = response.into_commit();

        assert_eq!(commit.sha, "abc123");
        assert_eq!(commit.author_login.as_deref(), Some("jdev"));
        assert_eq!(commit.author_name.as_deref(), Some("Jesse Developer"));
        let files = commit.files.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].contents_ref(), Some("abc123"));
    }

    #[test]
    fn test_pull_request_response_parsing() {
        let json = r#"{
            "number": 42,
            "draft": true,
            "user": { "login": "octocat" },
            "head": { "sha": "abc123" }
        }"#;

        let response: PullRequestResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.number, 42);
        assert_eq!(response.draft, Some(true));
        assert_eq!(response.head.sha, "abc123");
    }
}

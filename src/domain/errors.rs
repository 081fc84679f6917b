//! Domain error types
//!
//! This module defines the error hierarchy for Vigil. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Vigil error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum VigilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// GitHub API errors
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    /// Scan engine errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// A compliance check failed because PII was found
    #[error("PII detected: {0}")]
    PiiDetected(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// GitHub-specific errors
///
/// Errors that occur when talking to the GitHub REST API.
/// These errors don't expose the underlying HTTP client types.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Failed to connect to the GitHub API
    #[error("Failed to connect to GitHub: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Invalid response from the API
    #[error("Invalid response from GitHub: {0}")]
    InvalidResponse(String),

    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl GitHubError {
    /// Whether a retry of the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GitHubError::ConnectionFailed(_)
                | GitHubError::RateLimitExceeded(_)
                | GitHubError::ServerError { .. }
                | GitHubError::Timeout(_)
        )
    }
}

/// Scan engine errors
#[derive(Debug, Error)]
pub enum ScanError {
    /// A required input was missing or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// CSV content could not be parsed
    #[error("CSV parse error: {0}")]
    Csv(String),

    /// A detection pattern failed to compile
    #[error("Pattern compilation failed: {0}")]
    PatternCompile(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for VigilError {
    fn from(err: std::io::Error) -> Self {
        VigilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VigilError {
    fn from(err: serde_json::Error) -> Self {
        VigilError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VigilError {
    fn from(err: toml::de::Error) -> Self {
        VigilError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for ScanError {
    fn from(err: csv::Error) -> Self {
        ScanError::Csv(err.to_string())
    }
}

impl From<fancy_regex::Error> for ScanError {
    fn from(err: fancy_regex::Error) -> Self {
        ScanError::PatternCompile(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vigil_error_display() {
        let err = VigilError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_github_error_conversion() {
        let gh_err = GitHubError::ConnectionFailed("Network error".to_string());
        let vigil_err: VigilError = gh_err.into();
        assert!(matches!(vigil_err, VigilError::GitHub(_)));
    }

    #[test]
    fn test_scan_error_conversion() {
        let scan_err = ScanError::InvalidArgument("missing file list".to_string());
        let vigil_err: VigilError = scan_err.into();
        assert!(matches!(vigil_err, VigilError::Scan(_)));
    }

    #[test]
    fn test_github_error_retryability() {
        assert!(GitHubError::Timeout("30s".to_string()).is_retryable());
        assert!(GitHubError::ServerError {
            status: 502,
            message: "bad gateway".to_string()
        }
        .is_retryable());
        assert!(!GitHubError::NotFound("contents".to_string()).is_retryable());
        assert!(!GitHubError::ClientError {
            status: 422,
            message: "unprocessable".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let vigil_err: VigilError = io_err.into();
        assert!(matches!(vigil_err, VigilError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let vigil_err: VigilError = json_err.into();
        assert!(matches!(vigil_err, VigilError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let vigil_err: VigilError = toml_err.into();
        assert!(matches!(vigil_err, VigilError::Configuration(_)));
        assert!(vigil_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_csv_error_maps_to_scan_error() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,b\nc".as_bytes());
        let bad = reader
            .records()
            .find_map(|r| r.err())
            .map(ScanError::from)
            .unwrap();
        assert!(matches!(bad, ScanError::Csv(_)));
    }

    #[test]
    fn test_vigil_error_implements_std_error() {
        let err = VigilError::Validation("Test error".to_string());
        // Verify it implements std::error::Error
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_github_error_implements_std_error() {
        let err = GitHubError::ConnectionFailed("Test error".to_string());
        // Verify it implements std::error::Error
        let _: &dyn std::error::Error = &err;
    }
}

//! Changed-file and file-content models
//!
//! These are the types the scan engine consumes, independent of which API
//! produced them. `ChangedFile` describes one entry of a push or pull request
//! diff; `FileContent` is a retrieved file body with its transport encoding.

use crate::domain::errors::GitHubError;
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

/// One file touched by a push or pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path of the file relative to the repository root
    pub filename: String,

    /// Contents API URL for this file at the relevant commit, when provided
    #[serde(default)]
    pub contents_url: Option<String>,
}

impl ChangedFile {
    /// Creates a changed-file entry without a contents URL
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            contents_url: None,
        }
    }

    /// The commit-ish the file contents should be fetched at
    ///
    /// Diff entries carry a contents URL of the form
    /// `.../contents/<path>?ref=<sha>`; the ref pins the file body to the
    /// commit under review rather than the default branch.
    pub fn contents_ref(&self) -> Option<&str> {
        self.contents_url
            .as_deref()
            .and_then(|url| url.split_once("?ref=").map(|(_, r)| r))
            .filter(|r| !r.is_empty())
    }
}

/// A retrieved file body and its transport encoding
#[derive(Debug, Clone, Deserialize)]
pub struct FileContent {
    /// The file body, possibly base64-wrapped
    pub content: String,

    /// Encoding of `content`, `base64` or raw text
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_encoding() -> String {
    "raw".to_string()
}

impl FileContent {
    /// Decodes the body into text
    ///
    /// The contents API wraps bodies in line-broken base64; everything else
    /// is passed through unchanged.
    pub fn decode(&self) -> Result<String, GitHubError> {
        if self.encoding == "base64" {
            let compact: String = self.content.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = general_purpose::STANDARD.decode(compact.as_bytes()).map_err(|e| {
                GitHubError::InvalidResponse(format!("invalid base64 content: {e}"))
            })?;
            String::from_utf8(bytes).map_err(|e| {
                GitHubError::InvalidResponse(format!("file content is not valid UTF-8: {e}"))
            })
        } else {
            Ok(self.content.clone())
        }
    }
}

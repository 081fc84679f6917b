//! Triggering event context
//!
//! Checks run against a single CI event. The context captures which kind of
//! event fired and the identifiers needed to resolve its changed files. It is
//! built from CLI arguments and environment variables, never from a CI
//! payload file.

use crate::domain::errors::VigilError;
use crate::domain::result::Result;

/// The kind of event that triggered a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A push to a branch
    Push,
    /// A pull request opened or updated
    PullRequest,
    /// Any other event name, carried verbatim
    Other(String),
}

impl EventKind {
    /// Parses an event name as reported by the CI environment
    ///
    /// Unknown names are preserved as [`EventKind::Other`] so the caller can
    /// still log them. Parsing never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "push" => EventKind::Push,
            "pull_request" => EventKind::PullRequest,
            other => EventKind::Other(other.to_string()),
        }
    }

    /// Whether this event carries a changed-file set worth scanning
    pub fn is_scannable(&self) -> bool {
        matches!(self, EventKind::Push | EventKind::PullRequest)
    }

    /// The event name as the CI environment spells it
    pub fn name(&self) -> &str {
        match self {
            EventKind::Push => "push",
            EventKind::PullRequest => "pull_request",
            EventKind::Other(name) => name,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Context for the event a run operates on
#[derive(Debug, Clone)]
pub struct EventContext {
    /// What kind of event fired
    pub kind: EventKind,

    /// Head commit SHA, when known
    pub sha: Option<String>,

    /// Pull request number, for pull_request events
    pub pull_request: Option<u64>,

    /// Git ref the event points at (e.g. `refs/heads/main`)
    pub git_ref: Option<String>,
}

impl EventContext {
    /// Builds a context from the raw values the CLI collected
    pub fn from_parts(
        event_name: &str,
        sha: Option<String>,
        pull_request: Option<u64>,
        git_ref: Option<String>,
    ) -> Self {
        Self {
            kind: EventKind::from_name(event_name),
            sha,
            pull_request,
            git_ref,
        }
    }

    /// Context for a push event
    pub fn push(sha: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Push,
            sha: Some(sha.into()),
            pull_request: None,
            git_ref: None,
        }
    }

    /// Context for a pull request event
    pub fn pull_request(number: u64, sha: impl Into<String>) -> Self {
        Self {
            kind: EventKind::PullRequest,
            sha: Some(sha.into()),
            pull_request: Some(number),
            git_ref: None,
        }
    }

    /// The head SHA, required for push file discovery
    pub fn head_sha(&self) -> Result<&str> {
        self.sha.as_deref().ok_or_else(|| {
            VigilError::Validation(format!("event '{}' is missing a head SHA", self.kind))
        })
    }

    /// The pull request number, required for pull_request file discovery
    pub fn pull_request_number(&self) -> Result<u64> {
        self.pull_request.ok_or_else(|| {
            VigilError::Validation(format!(
                "event '{}' is missing a pull request number",
                self.kind
            ))
        })
    }
}

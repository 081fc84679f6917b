//! Scan coordination
//!
//! Drives one PII scan end to end: resolve the changed-file set for the
//! triggering event, load the ignore manifest, select candidates, then
//! retrieve and classify each candidate sequentially. A single file failing
//! to download or parse never aborts the run; fatal errors are reserved for
//! structurally missing input and for ignore-manifest retrieval problems
//! other than absence.

use crate::adapters::github::RepoSource;
use crate::config::ScanConfig;
use crate::core::scan::candidates::select_candidates;
use crate::core::scan::classifier::classify;
use crate::core::scan::ignore::load_ignore_list;
use crate::core::scan::patterns::PatternCatalog;
use crate::core::scan::prediction::Prediction;
use crate::core::scan::summary::ScanSummary;
use crate::domain::{ChangedFile, EventContext, EventKind, Result};
use crate::log_scan_start;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Orchestrates a PII scan over one event's changed files
pub struct ScanCoordinator {
    source: Arc<dyn RepoSource>,
    catalog: PatternCatalog,
    config: ScanConfig,
    shutdown: watch::Receiver<bool>,
}

impl ScanCoordinator {
    /// Creates a coordinator with the standard pattern catalog
    pub fn new(
        source: Arc<dyn RepoSource>,
        config: ScanConfig,
        shutdown: watch::Receiver<bool>,
    ) -> Result<Self> {
        let catalog = PatternCatalog::standard()?;
        Ok(Self::with_catalog(source, catalog, config, shutdown))
    }

    /// Creates a coordinator with a caller-supplied catalog
    pub fn with_catalog(
        source: Arc<dyn RepoSource>,
        catalog: PatternCatalog,
        config: ScanConfig,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            source,
            catalog,
            config,
            shutdown,
        }
    }

    /// Runs the scan for the given event
    ///
    /// Only push and pull_request events carry a changed-file set; anything
    /// else short-circuits to a clean summary. The returned summary reports
    /// detections, skips, and whether the run was interrupted; turning
    /// detections into a check failure is the caller's decision.
    pub async fn execute_scan(&self, event: &EventContext) -> Result<ScanSummary> {
        let start_time = Instant::now();
        let mut summary = ScanSummary::new();

        if !event.kind.is_scannable() {
            tracing::info!(
                event = %event.kind,
                "PII detection only runs on push and pull_request events, skipping"
            );
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        let files = self.changed_files(event).await?;

        let ignore = load_ignore_list(
            self.source.as_ref(),
            &self.config.ignore_file,
            event.git_ref.as_deref(),
        )
        .await?;

        let candidates = select_candidates(files.as_deref(), &ignore, &self.config.extensions)?;
        summary.candidates = candidates.len();

        if candidates.is_empty() {
            tracing::info!("No files to scan");
            return Ok(summary.with_duration(start_time.elapsed()));
        }

        log_scan_start!(event.kind, candidates.len());

        for file in &candidates {
            if *self.shutdown.borrow() {
                tracing::warn!(
                    scanned = summary.files_scanned,
                    candidates = candidates.len(),
                    "Shutdown requested, stopping scan early"
                );
                summary.mark_interrupted();
                break;
            }

            match self.scan_file(file).await {
                Ok(prediction) => {
                    summary.files_scanned += 1;
                    if prediction.detected {
                        summary.add_detection(file.filename.clone(), prediction);
                    }
                }
                Err(e) => {
                    tracing::error!(
                        file = %file.filename,
                        error = %e,
                        "Failed to scan file, skipping"
                    );
                    summary.add_skipped(file.filename.clone(), e.to_string());
                }
            }
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }

    /// Resolves the changed-file set for the event
    ///
    /// Push events list files on the head commit; pull_request events list
    /// the PR diff. `None` means the event carried no file list at all,
    /// which candidate selection treats as invalid input.
    async fn changed_files(&self, event: &EventContext) -> Result<Option<Vec<ChangedFile>>> {
        match &event.kind {
            EventKind::Push => {
                let commit = self.source.get_commit(event.head_sha()?).await?;
                Ok(commit.files)
            }
            EventKind::PullRequest => {
                let files = self
                    .source
                    .get_pull_request_files(event.pull_request_number()?)
                    .await?;
                Ok(Some(files))
            }
            // Gated before discovery; a non-scannable event has no file list.
            EventKind::Other(_) => Ok(None),
        }
    }

    /// Retrieves and classifies one candidate file
    async fn scan_file(&self, file: &ChangedFile) -> Result<Prediction> {
        let content = self
            .source
            .fetch_file_content(&file.filename, file.contents_ref())
            .await?;
        let text = content.decode()?;

        let tally = classify(&text, &self.catalog)?;
        Ok(tally.predict(self.config.threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::github::{Commit, PullRequest};
    use crate::domain::{FileContent, GitHubError, VigilError};
    use async_trait::async_trait;

    /// A source that fails every call; useful for proving a path never
    /// reaches the API.
    struct UnreachableSource;

    #[async_trait]
    impl RepoSource for UnreachableSource {
        async fn get_commit(&self, _sha: &str) -> Result<Commit> {
            Err(VigilError::GitHub(GitHubError::ConnectionFailed(
                "no API in this test".to_string(),
            )))
        }

        async fn get_pull_request(&self, _number: u64) -> Result<PullRequest> {
            Err(VigilError::GitHub(GitHubError::ConnectionFailed(
                "no API in this test".to_string(),
            )))
        }

        async fn get_pull_request_files(&self, _number: u64) -> Result<Vec<ChangedFile>> {
            Err(VigilError::GitHub(GitHubError::ConnectionFailed(
                "no API in this test".to_string(),
            )))
        }

        async fn fetch_file_content(
            &self,
            _path: &str,
            _git_ref: Option<&str>,
        ) -> Result<FileContent> {
            Err(VigilError::GitHub(GitHubError::ConnectionFailed(
                "no API in this test".to_string(),
            )))
        }
    }

    fn coordinator(source: Arc<dyn RepoSource>) -> ScanCoordinator {
        let (_tx, rx) = watch::channel(false);
        ScanCoordinator::new(source, ScanConfig::default(), rx).unwrap()
    }

    #[tokio::test]
    async fn test_non_scannable_event_short_circuits() {
        let coordinator = coordinator(Arc::new(UnreachableSource));
        let event = EventContext::from_parts("workflow_dispatch", None, None, None);

        let summary = coordinator.execute_scan(&event).await.unwrap();

        assert!(summary.is_clean());
        assert_eq!(summary.candidates, 0);
        assert_eq!(summary.files_scanned, 0);
    }

    #[tokio::test]
    async fn test_push_without_sha_is_invalid() {
        let coordinator = coordinator(Arc::new(UnreachableSource));
        let event = EventContext::from_parts("push", None, None, None);

        let result = coordinator.execute_scan(&event).await;

        assert!(matches!(result, Err(VigilError::Validation(_))));
    }

    #[tokio::test]
    async fn test_file_discovery_failure_is_fatal() {
        let coordinator = coordinator(Arc::new(UnreachableSource));
        let event = EventContext::push("abc123");

        let result = coordinator.execute_scan(&event).await;

        assert!(matches!(
            result,
            Err(VigilError::GitHub(GitHubError::ConnectionFailed(_)))
        ));
    }
}

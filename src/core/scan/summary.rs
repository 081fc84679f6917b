//! Scan summary and reporting
//!
//! Tracks what one scan run looked at and what it found, and renders the
//! aggregated failure message shown when PII is detected.

use crate::core::scan::prediction::Prediction;
use serde::Serialize;
use std::time::Duration;

/// One file with a positive detection
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Path of the flagged file
    pub file: String,

    /// What was detected
    pub prediction: Prediction,
}

/// A candidate file that could not be scanned
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    /// Path of the skipped file
    pub path: String,

    /// Why it was skipped
    pub reason: String,
}

/// Summary of one scan run
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    /// Number of candidate files after filtering
    pub candidates: usize,

    /// Number of files actually classified
    pub files_scanned: usize,

    /// Positive detections, in scan order
    pub detections: Vec<ScanResult>,

    /// Files skipped because retrieval or parsing failed
    pub skipped: Vec<SkippedFile>,

    /// Whether the run stopped before reaching every candidate
    pub interrupted: bool,

    /// Wall-clock duration of the scan
    pub duration: Duration,
}

impl ScanSummary {
    /// Creates a new empty summary
    pub fn new() -> Self {
        Self {
            candidates: 0,
            files_scanned: 0,
            detections: Vec::new(),
            skipped: Vec::new(),
            interrupted: false,
            duration: Duration::from_secs(0),
        }
    }

    /// Sets the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Records a positive detection
    pub fn add_detection(&mut self, file: impl Into<String>, prediction: Prediction) {
        self.detections.push(ScanResult {
            file: file.into(),
            prediction,
        });
    }

    /// Records a file that could not be scanned
    pub fn add_skipped(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkippedFile {
            path: path.into(),
            reason: reason.into(),
        });
    }

    /// Marks the run as stopped before completion
    pub fn mark_interrupted(&mut self) {
        self.interrupted = true;
    }

    /// Whether the scan found no PII
    pub fn is_clean(&self) -> bool {
        self.detections.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        crate::log_scan_complete!(self.files_scanned, self.detections.len(), self.duration);

        if !self.skipped.is_empty() {
            tracing::warn!(
                skipped = self.skipped.len(),
                "Some candidate files could not be scanned"
            );
            for skip in &self.skipped {
                tracing::warn!(
                    file = %skip.path,
                    reason = %skip.reason,
                    "File skipped during scan"
                );
            }
        }

        for result in &self.detections {
            tracing::warn!(
                file = %result.file,
                data_types = %result.prediction.labels().join(", "),
                "PII detected in file"
            );
        }

        if self.interrupted {
            tracing::warn!(
                files_scanned = self.files_scanned,
                candidates = self.candidates,
                "Scan was interrupted before reaching every candidate"
            );
        }
    }

    /// Renders the aggregated failure message for a run with detections
    ///
    /// Lists every flagged file with its categories, plus the remediation
    /// path for intentional fixtures. Empty when the summary is clean.
    pub fn failure_message(&self, ignore_file: &str) -> String {
        if self.is_clean() {
            return String::new();
        }

        let mut lines = vec![format!(
            "{} of {} scanned file(s) look like they contain PII",
            self.detections.len(),
            self.files_scanned
        )];
        for result in &self.detections {
            lines.push(format!(
                "  {}: {}",
                result.file,
                result.prediction.labels().join(", ")
            ));
        }
        lines.push(format!(
            "If a flagged file holds intentional fake data, list its path in {ignore_file}"
        ));

        lines.join("\n")
    }
}

impl Default for ScanSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scan::patterns::PiiDataType;

    fn detection(types: Vec<PiiDataType>) -> Prediction {
        Prediction {
            detected: true,
            data_types: types,
        }
    }

    #[test]
    fn test_new_summary_is_clean() {
        let summary = ScanSummary::new();

        assert!(summary.is_clean());
        assert_eq!(summary.candidates, 0);
        assert_eq!(summary.files_scanned, 0);
        assert!(!summary.interrupted);
        assert_eq!(summary.duration, Duration::from_secs(0));
    }

    #[test]
    fn test_with_duration() {
        let summary = ScanSummary::new().with_duration(Duration::from_millis(250));
        assert_eq!(summary.duration, Duration::from_millis(250));
    }

    #[test]
    fn test_detection_makes_summary_dirty() {
        let mut summary = ScanSummary::new();
        summary.add_detection("data/users.csv", detection(vec![PiiDataType::Email]));

        assert!(!summary.is_clean());
        assert_eq!(summary.detections.len(), 1);
        assert_eq!(summary.detections[0].file, "data/users.csv");
    }

    #[test]
    fn test_skipped_files_do_not_affect_verdict() {
        let mut summary = ScanSummary::new();
        summary.add_skipped("broken.csv", "download failed");

        assert!(summary.is_clean());
        assert_eq!(summary.skipped.len(), 1);
    }

    #[test]
    fn test_failure_message_lists_every_file() {
        let mut summary = ScanSummary::new();
        summary.files_scanned = 3;
        summary.add_detection(
            "data/users.csv",
            detection(vec![PiiDataType::Email, PiiDataType::Ssn]),
        );
        summary.add_detection(
            "exports/list.csv",
            detection(vec![PiiDataType::UsPhoneNumber]),
        );

        let message = summary.failure_message(".piidetectionignore");

        assert!(message.contains("2 of 3 scanned file(s)"));
        assert!(message.contains("data/users.csv: email, ssn"));
        assert!(message.contains("exports/list.csv: us-phone-number"));
        assert!(message.contains(".piidetectionignore"));
    }

    #[test]
    fn test_failure_message_empty_when_clean() {
        let summary = ScanSummary::new();
        assert!(summary.failure_message(".piidetectionignore").is_empty());
    }
}

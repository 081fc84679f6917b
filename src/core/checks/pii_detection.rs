//! The pii-detection check
//!
//! Wraps the scan coordinator in the check contract: a clean scan passes,
//! detections fail the check with one aggregated message.

use crate::core::checks::{Check, CheckContext};
use crate::core::scan::ScanCoordinator;
use crate::domain::{Result, VigilError};
use async_trait::async_trait;

/// Scans changed CSV files for PII and fails when any file is flagged
pub struct PiiDetectionCheck;

#[async_trait]
impl Check for PiiDetectionCheck {
    fn name(&self) -> &str {
        "pii-detection"
    }

    async fn run(&self, ctx: &CheckContext) -> Result<()> {
        let coordinator = ScanCoordinator::new(
            ctx.source.clone(),
            ctx.config.scan.clone(),
            ctx.shutdown.clone(),
        )?;

        let summary = coordinator.execute_scan(&ctx.event).await?;

        // An interrupted scan that already found PII still fails; only the
        // files it never reached get the benefit of the doubt.
        if !summary.is_clean() {
            return Err(VigilError::PiiDetected(
                summary.failure_message(&ctx.config.scan.ignore_file),
            ));
        }

        if summary.interrupted {
            tracing::warn!(
                files_scanned = summary.files_scanned,
                candidates = summary.candidates,
                "Scan interrupted; files reached so far are clean"
            );
        } else {
            tracing::info!(files_scanned = summary.files_scanned, "No PII detected");
        }

        Ok(())
    }
}

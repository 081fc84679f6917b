//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted file logs
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use vigil::logging::init_logging;
//! use vigil::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! // Use tracing macros for logging
//! tracing::info!("Application started");
//! tracing::error!(error = "Something went wrong", "Error occurred");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a PII scan
///
/// # Example
///
/// ```no_run
/// use vigil::log_scan_start;
///
/// log_scan_start!("push", 3);
/// ```
#[macro_export]
macro_rules! log_scan_start {
    ($event:expr, $candidates:expr) => {
        tracing::info!(
            event = %$event,
            candidates = $candidates,
            "Starting PII scan"
        );
    };
}

/// Log the completion of a PII scan
///
/// # Example
///
/// ```no_run
/// use vigil::log_scan_complete;
/// use std::time::Duration;
///
/// let scanned = 3;
/// let detections = 1;
/// let duration = Duration::from_secs(2);
/// log_scan_complete!(scanned, detections, duration);
/// ```
#[macro_export]
macro_rules! log_scan_complete {
    ($scanned:expr, $detections:expr, $duration:expr) => {
        tracing::info!(
            scanned = $scanned,
            detections = $detections,
            duration_ms = $duration.as_millis(),
            "PII scan completed"
        );
    };
}

/// Log a retry attempt
///
/// # Example
///
/// ```no_run
/// use vigil::log_retry_attempt;
///
/// log_retry_attempt!(2, 3, "Connection timeout");
/// ```
#[macro_export]
macro_rules! log_retry_attempt {
    ($attempt:expr, $max_attempts:expr, $reason:expr) => {
        tracing::warn!(
            attempt = $attempt,
            max_attempts = $max_attempts,
            reason = %$reason,
            "Retrying operation"
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_compile() {
        // These tests just verify that the macros compile correctly
        // Actual logging output is not tested in unit tests
    }
}

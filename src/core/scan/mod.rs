//! PII scan engine
//!
//! This module implements the CSV PII scan, including:
//! - The pattern catalog of sensitive-data categories
//! - Streaming CSV classification and threshold-based detection
//! - Candidate selection and ignore-manifest filtering
//! - Scan coordination with per-file failure isolation

pub mod candidates;
pub mod classifier;
pub mod coordinator;
pub mod ignore;
pub mod patterns;
pub mod prediction;
pub mod summary;

pub use classifier::classify;
pub use coordinator::ScanCoordinator;
pub use patterns::{PatternCatalog, PatternRule, PiiDataType};
pub use prediction::{LineTally, Prediction};
pub use summary::{ScanResult, ScanSummary, SkippedFile};

//! Detection thresholding
//!
//! Turns the per-type match counts accumulated by the classifier into a
//! per-file verdict. A category is reported only when the fraction of data
//! lines carrying it strictly exceeds the configured threshold.

use crate::core::scan::patterns::{PatternCatalog, PiiDataType};
use serde::Serialize;

/// Per-type match counts for one file
///
/// Counters are seeded from the catalog so that reported categories always
/// come out in catalog order regardless of the order matches were recorded.
#[derive(Debug, Clone)]
pub struct LineTally {
    counts: Vec<(PiiDataType, usize)>,
    total_lines: usize,
}

impl LineTally {
    /// Creates a tally with one zeroed counter per catalog rule
    pub fn for_catalog(catalog: &PatternCatalog) -> Self {
        Self {
            counts: catalog.rules().iter().map(|r| (r.data_type, 0)).collect(),
            total_lines: 0,
        }
    }

    /// Records one more counted data line
    pub fn record_line(&mut self) {
        self.total_lines += 1;
    }

    /// Records one cell matching the given category
    pub fn record_match(&mut self, data_type: PiiDataType) {
        if let Some(entry) = self.counts.iter_mut().find(|(t, _)| *t == data_type) {
            entry.1 += 1;
        }
    }

    /// Number of counted data lines
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Number of recorded matches for the given category
    pub fn matches_for(&self, data_type: PiiDataType) -> usize {
        self.counts
            .iter()
            .find(|(t, _)| *t == data_type)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Decides which categories are detected at the given threshold
    ///
    /// A category is detected when its match count strictly exceeds
    /// `total_lines * threshold`; a count exactly at the threshold does not
    /// qualify. A file with no counted lines never detects anything.
    pub fn predict(&self, threshold: f64) -> Prediction {
        if self.total_lines == 0 {
            return Prediction::none();
        }

        let data_types: Vec<PiiDataType> = self
            .counts
            .iter()
            .filter(|(_, count)| *count as f64 > self.total_lines as f64 * threshold)
            .map(|(data_type, _)| *data_type)
            .collect();

        Prediction {
            detected: !data_types.is_empty(),
            data_types,
        }
    }
}

/// Classification outcome for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// Whether any category crossed the threshold
    pub detected: bool,

    /// Detected categories, in catalog order
    pub data_types: Vec<PiiDataType>,
}

impl Prediction {
    /// A negative prediction
    pub fn none() -> Self {
        Self {
            detected: false,
            data_types: Vec::new(),
        }
    }

    /// Labels of the detected categories, in catalog order
    pub fn labels(&self) -> Vec<&'static str> {
        self.data_types.iter().map(|t| t.label()).collect()
    }
}

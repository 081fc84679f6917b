//! Candidate-file selection
//!
//! Filters an event's changed-file set down to the files worth scanning:
//! extension allow-list plus ignore-manifest exclusion. Pure functions with
//! no I/O.

use crate::domain::{ChangedFile, ScanError};
use std::collections::HashSet;

/// Whether a path's extension is in the allow-list
pub fn has_scannable_extension(filename: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| filename.ends_with(ext.as_str()))
}

/// Selects the changed files eligible for scanning
///
/// `files` is `None` when the event carried no file list at all, which is a
/// caller error surfaced as [`ScanError::InvalidArgument`]; an empty list is
/// valid input and yields an empty selection. A file is a candidate when its
/// extension is allow-listed and its path does not appear verbatim in the
/// ignore set. Input order is preserved.
pub fn select_candidates(
    files: Option<&[ChangedFile]>,
    ignore: &HashSet<String>,
    extensions: &[String],
) -> Result<Vec<ChangedFile>, ScanError> {
    let files = files
        .ok_or_else(|| ScanError::InvalidArgument("changed file list is missing".to_string()))?;

    Ok(files
        .iter()
        .filter(|f| {
            !ignore.contains(&f.filename) && has_scannable_extension(&f.filename, extensions)
        })
        .cloned()
        .collect())
}

//! Ignore-manifest loading
//!
//! A repository may carry a manifest listing paths exempt from scanning,
//! `.piidetectionignore` by default. A missing manifest is the normal case
//! and yields an empty set; any other retrieval failure is a real error and
//! aborts the run.

use crate::adapters::github::RepoSource;
use crate::domain::{GitHubError, Result, VigilError};
use std::collections::HashSet;

/// Loads the ignore manifest, tolerating its absence
pub async fn load_ignore_list(
    source: &dyn RepoSource,
    manifest_path: &str,
    git_ref: Option<&str>,
) -> Result<HashSet<String>> {
    let body = match source.fetch_file_content(manifest_path, git_ref).await {
        Ok(content) => content.decode()?,
        Err(VigilError::GitHub(GitHubError::NotFound(_))) => {
            tracing::debug!(
                manifest = manifest_path,
                "No ignore manifest in repository"
            );
            return Ok(HashSet::new());
        }
        Err(e) => return Err(e),
    };

    let ignored = parse_ignore_list(&body);
    tracing::debug!(
        manifest = manifest_path,
        entries = ignored.len(),
        "Loaded ignore manifest"
    );

    Ok(ignored)
}

/// Splits manifest content into the set of ignored paths
///
/// One literal relative path per line; blank lines are discarded. There is no
/// comment syntax and no glob expansion.
pub fn parse_ignore_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_path_per_line() {
        let content = "fake-customer-data.csv\ntests/some/dir/super-fake.csv\n";

        let ignored = parse_ignore_list(content);

        assert_eq!(ignored.len(), 2);
        assert!(ignored.contains("fake-customer-data.csv"));
        assert!(ignored.contains("tests/some/dir/super-fake.csv"));
    }

    #[test]
    fn test_blank_lines_are_discarded() {
        let content = "\na.csv\n\n\nb.csv\n\n";

        let ignored = parse_ignore_list(content);

        assert_eq!(ignored.len(), 2);
        assert!(ignored.contains("a.csv"));
        assert!(ignored.contains("b.csv"));
    }

    #[test]
    fn test_empty_manifest_is_an_empty_set() {
        assert!(parse_ignore_list("").is_empty());
        assert!(parse_ignore_list("\n\n").is_empty());
    }

    #[test]
    fn test_paths_are_literal() {
        // No comment syntax: a leading # is part of the path
        let ignored = parse_ignore_list("# not a comment\ndata.csv\n");

        assert_eq!(ignored.len(), 2);
        assert!(ignored.contains("# not a comment"));
    }
}

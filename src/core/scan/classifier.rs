//! Streaming CSV classification
//!
//! Parses file content row by row and counts, for every rule in the catalog,
//! the cells whose entire value matches that rule. Rows are consumed one at a
//! time and never collected into a table, so large files classify in constant
//! memory.

use crate::core::scan::patterns::PatternCatalog;
use crate::core::scan::prediction::LineTally;
use crate::domain::ScanError;
use csv::{ReaderBuilder, Trim};

/// Classifies CSV content against a pattern catalog
///
/// Cell values are trimmed before matching. Blank lines are not counted; a
/// line of delimited empty cells (`,,`) is a real record and is counted.
/// Every cell of a counted row is tested against every rule, and one cell may
/// increment several counters when it matches more than one category.
///
/// A malformed row (for example a row with a field count different from the
/// rest of the file) stops the parse and surfaces as [`ScanError::Csv`]. The
/// caller decides whether that ends the run or only this file.
pub fn classify(content: &str, catalog: &PatternCatalog) -> Result<LineTally, ScanError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut tally = LineTally::for_catalog(catalog);

    for record in reader.records() {
        let record = record?;

        // A whitespace-only physical line trims down to a single empty field.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        tally.record_line();

        for cell in record.iter() {
            for rule in catalog.rules() {
                if rule.pattern.is_match(cell).unwrap_or(false) {
                    tally.record_match(rule.data_type);
                }
            }
        }
    }

    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scan::patterns::PiiDataType;

    fn catalog() -> PatternCatalog {
        PatternCatalog::standard().unwrap()
    }

    #[test]
    fn test_counts_matching_cells_per_type() {
        let content = "data,data,data,+1 800 444 4444,data\n\
                       data,data,data,+1 800 444 4444,data\n\
                       data,data,data,+1 800 444 4444,data\n";

        let tally = classify(content, &catalog()).unwrap();

        assert_eq!(tally.total_lines(), 3);
        assert_eq!(tally.matches_for(PiiDataType::UsPhoneNumber), 3);
        assert_eq!(tally.matches_for(PiiDataType::Email), 0);
        assert!(tally.predict(0.7).detected);
    }

    #[test]
    fn test_sparse_matches_stay_below_threshold() {
        let mut content = String::new();
        for _ in 0..3 {
            content.push_str("data,data,data,+1 800 444 4444,data\n");
        }
        for _ in 0..7 {
            content.push_str("data,data,data,data,data\n");
        }

        let tally = classify(&content, &catalog()).unwrap();

        assert_eq!(tally.total_lines(), 10);
        assert_eq!(tally.matches_for(PiiDataType::UsPhoneNumber), 3);
        assert!(!tally.predict(0.7).detected);
    }

    #[test]
    fn test_mixed_types_detected_in_catalog_order() {
        let content = "data,489-36-8350,data,someone@mail.com,data\n\
                       data,514-14-8905,data,another.person@mail.co.uk,data\n\
                       data,690-05-5315,data,my@personal.mail,data\n";

        let tally = classify(content, &catalog()).unwrap();
        let prediction = tally.predict(0.7);

        assert!(prediction.detected);
        assert_eq!(
            prediction.data_types,
            vec![PiiDataType::Email, PiiDataType::Ssn]
        );
    }

    #[test]
    fn test_digit_only_card_counts_as_phone_too() {
        // A 16-digit card number is also a plausible phone number with the
        // country code folded in; both counters move.
        let content = "4111111111111111\n";

        let tally = classify(content, &catalog()).unwrap();

        assert_eq!(tally.matches_for(PiiDataType::CreditCardNumber), 1);
        assert_eq!(tally.matches_for(PiiDataType::UsPhoneNumber), 1);
    }

    #[test]
    fn test_blank_lines_are_not_counted() {
        let content = "someone@mail.com\n\n   \nanother@mail.com\n";

        let tally = classify(content, &catalog()).unwrap();

        assert_eq!(tally.total_lines(), 2);
        assert_eq!(tally.matches_for(PiiDataType::Email), 2);
    }

    #[test]
    fn test_delimited_empty_cells_count_as_a_line() {
        let content = ",,\n,,\n";

        let tally = classify(content, &catalog()).unwrap();

        assert_eq!(tally.total_lines(), 2);
        assert!(!tally.predict(0.7).detected);
    }

    #[test]
    fn test_cells_are_trimmed_before_matching() {
        let content = "data,  someone@mail.com  ,data\n";

        let tally = classify(content, &catalog()).unwrap();

        assert_eq!(tally.matches_for(PiiDataType::Email), 1);
    }

    #[test]
    fn test_malformed_row_is_a_parse_error() {
        let content = "a,b,c\nd,e\n";

        let result = classify(content, &catalog());

        assert!(matches!(result, Err(ScanError::Csv(_))));
    }

    #[test]
    fn test_empty_content_yields_empty_tally() {
        let tally = classify("", &catalog()).unwrap();
        assert_eq!(tally.total_lines(), 0);
        assert!(!tally.predict(0.7).detected);
    }
}

//! Pattern catalog for PII detection
//!
//! Each rule pairs a sensitive-data category with an anchored regular
//! expression recognizing it. The patterns are full-cell matchers: a cell
//! counts only when its entire value conforms to the category, never when a
//! valid value is embedded in surrounding text. Compiled once per run and
//! shared across every file scanned.

use crate::domain::ScanError;
use fancy_regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sensitive-data categories the scanner recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PiiDataType {
    /// US phone numbers, with or without country code
    UsPhoneNumber,
    /// Email addresses
    Email,
    /// US Social Security Numbers
    Ssn,
    /// Payment card numbers (Visa, Mastercard, Amex, Diners, Discover, JCB)
    CreditCardNumber,
}

impl PiiDataType {
    /// Stable label used in reports and diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            Self::UsPhoneNumber => "us-phone-number",
            Self::Email => "email",
            Self::Ssn => "ssn",
            Self::CreditCardNumber => "credit-card-number",
        }
    }
}

impl fmt::Display for PiiDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One detection rule: a category and the expression recognizing it
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Category this rule detects
    pub data_type: PiiDataType,

    /// Anchored full-cell matcher
    pub pattern: Regex,
}

impl PatternRule {
    /// Compiles a rule from a pattern string
    pub fn new(data_type: PiiDataType, pattern: &str) -> Result<Self, ScanError> {
        Ok(Self {
            data_type,
            pattern: Regex::new(pattern)?,
        })
    }
}

/// The ordered list of detection rules
///
/// Catalog order is observable: detected categories are always reported in
/// the order their rules appear here.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    rules: Vec<PatternRule>,
}

impl PatternCatalog {
    /// Builds a catalog from caller-supplied rules
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    /// Builds the standard four-rule catalog
    ///
    /// The SSN rule rejects known-invalid area and group numbers with
    /// negative lookahead, which is why rules compile with `fancy_regex`.
    pub fn standard() -> Result<Self, ScanError> {
        let rules = vec![
            // https://gist.github.com/charles-rumley/e13b314662a203e5172a298bc66544b3
            PatternRule::new(
                PiiDataType::UsPhoneNumber,
                r"^\+?(\d+)?[ .-]?\(?(\d{3})\)?[ .-]?(\d{3})[ .-]?(\d{4})$",
            )?,
            // https://ihateregex.io/expr/email
            PatternRule::new(PiiDataType::Email, r"^[^@ \t\r\n]+@[^@ \t\r\n]+\.[^@ \t\r\n]+$")?,
            // https://ihateregex.io/expr/ssn/
            PatternRule::new(
                PiiDataType::Ssn,
                r"^(?!0{3})(?!6{3})[0-8]\d{2}-(?!0{2})\d{2}-(?!0{4})\d{4}$",
            )?,
            // https://ihateregex.io/expr/credit-card/
            PatternRule::new(
                PiiDataType::CreditCardNumber,
                r"^(^4[0-9]{12}(?:[0-9]{3})?$)|(^(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}$)|(3[47][0-9]{13})|(^3(?:0[0-5]|[68][0-9])[0-9]{11}$)|(^6(?:011|5[0-9]{2})[0-9]{12}$)|(^(?:2131|1800|35\d{3})\d{11}$)$",
            )?,
        ];

        Ok(Self { rules })
    }

    /// All rules in catalog order
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Number of rules in the catalog
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_for(catalog: &PatternCatalog, data_type: PiiDataType) -> &PatternRule {
        catalog
            .rules()
            .iter()
            .find(|r| r.data_type == data_type)
            .unwrap()
    }

    fn matches(catalog: &PatternCatalog, data_type: PiiDataType, value: &str) -> bool {
        rule_for(catalog, data_type)
            .pattern
            .is_match(value)
            .unwrap()
    }

    #[test]
    fn test_standard_catalog_order() {
        let catalog = PatternCatalog::standard().unwrap();
        let order: Vec<PiiDataType> = catalog.rules().iter().map(|r| r.data_type).collect();
        assert_eq!(
            order,
            vec![
                PiiDataType::UsPhoneNumber,
                PiiDataType::Email,
                PiiDataType::Ssn,
                PiiDataType::CreditCardNumber,
            ]
        );
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_data_type_labels() {
        assert_eq!(PiiDataType::UsPhoneNumber.label(), "us-phone-number");
        assert_eq!(PiiDataType::Email.label(), "email");
        assert_eq!(PiiDataType::Ssn.label(), "ssn");
        assert_eq!(PiiDataType::CreditCardNumber.label(), "credit-card-number");
    }

    #[test]
    fn test_data_type_serializes_as_label() {
        let json = serde_json::to_string(&PiiDataType::UsPhoneNumber).unwrap();
        assert_eq!(json, "\"us-phone-number\"");

        let parsed: PiiDataType = serde_json::from_str("\"credit-card-number\"").unwrap();
        assert_eq!(parsed, PiiDataType::CreditCardNumber);
    }

    #[test]
    fn test_phone_pattern() {
        let catalog = PatternCatalog::standard().unwrap();

        assert!(matches(&catalog, PiiDataType::UsPhoneNumber, "+1 800 444 4444"));
        assert!(matches(&catalog, PiiDataType::UsPhoneNumber, "(555) 123-4567"));
        assert!(matches(&catalog, PiiDataType::UsPhoneNumber, "555.123.4567"));
        assert!(matches(&catalog, PiiDataType::UsPhoneNumber, "5551234567"));

        assert!(!matches(&catalog, PiiDataType::UsPhoneNumber, "not a phone"));
        // Anchored: a valid number inside other text is not a match
        assert!(!matches(
            &catalog,
            PiiDataType::UsPhoneNumber,
            "call 555-123-4567 now"
        ));
    }

    #[test]
    fn test_email_pattern() {
        let catalog = PatternCatalog::standard().unwrap();

        assert!(matches(&catalog, PiiDataType::Email, "someone@mail.com"));
        assert!(matches(&catalog, PiiDataType::Email, "another.person@mail.co.uk"));
        assert!(matches(&catalog, PiiDataType::Email, "my@personal.mail"));

        assert!(!matches(&catalog, PiiDataType::Email, "plainaddress"));
        assert!(!matches(&catalog, PiiDataType::Email, "missing@tld"));
        assert!(!matches(&catalog, PiiDataType::Email, "spaced @mail.com"));
    }

    #[test]
    fn test_ssn_pattern() {
        let catalog = PatternCatalog::standard().unwrap();

        assert!(matches(&catalog, PiiDataType::Ssn, "489-36-8350"));
        assert!(matches(&catalog, PiiDataType::Ssn, "514-14-8905"));

        // Invalid area, group, and serial numbers
        assert!(!matches(&catalog, PiiDataType::Ssn, "000-12-3456"));
        assert!(!matches(&catalog, PiiDataType::Ssn, "666-12-3456"));
        assert!(!matches(&catalog, PiiDataType::Ssn, "912-34-5678"));
        assert!(!matches(&catalog, PiiDataType::Ssn, "123-00-4567"));
        assert!(!matches(&catalog, PiiDataType::Ssn, "123-45-0000"));
        assert!(!matches(&catalog, PiiDataType::Ssn, "12-345-6789"));
    }

    #[test]
    fn test_credit_card_pattern() {
        let catalog = PatternCatalog::standard().unwrap();

        assert!(matches(&catalog, PiiDataType::CreditCardNumber, "4111111111111111"));
        assert!(matches(&catalog, PiiDataType::CreditCardNumber, "5555555555554444"));
        assert!(matches(&catalog, PiiDataType::CreditCardNumber, "378282246310005"));
        assert!(matches(&catalog, PiiDataType::CreditCardNumber, "6011111111111117"));

        assert!(!matches(&catalog, PiiDataType::CreditCardNumber, "1234567890123456"));
        assert!(!matches(&catalog, PiiDataType::CreditCardNumber, "4111"));
    }

    #[test]
    fn test_custom_catalog() {
        let rules = vec![PatternRule::new(PiiDataType::Email, r"^.+@.+$").unwrap()];
        let catalog = PatternCatalog::new(rules);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_invalid_pattern_fails_to_compile() {
        let result = PatternRule::new(PiiDataType::Email, r"(unclosed");
        assert!(matches!(result, Err(ScanError::PatternCompile(_))));
    }
}

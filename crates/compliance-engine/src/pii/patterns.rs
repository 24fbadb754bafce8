//! Pattern-based PII recognition
//!
//! Each entry pairs a regex with a confidence estimate and an optional
//! validator. Confidence reflects how specific the pattern is: a
//! formatted SSN is near-certain, a bare 9-digit run could be anything.
//!
//! Table order is meaningful. When two patterns produce candidates at
//! the same span with the same confidence, deduplication keeps the one
//! emitted first.

use compliance_types::{DetectionMethod, PiiEntity};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use super::validators::{
    validate_credit_card, validate_ip_address, validate_phone, validate_ssn,
};

/// A compiled PII pattern with its scoring metadata.
pub struct PiiPattern {
    pub label: &'static str,
    pub regex: Regex,
    pub confidence: f64,
    pub validator: Option<fn(&str) -> bool>,
}

fn pii_regex(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap()
}

lazy_static! {
    pub static ref PII_PATTERNS: Vec<PiiPattern> = vec![
        PiiPattern {
            label: "EMAIL",
            regex: pii_regex(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"),
            confidence: 0.95,
            validator: None,
        },
        PiiPattern {
            label: "PHONE",
            regex: pii_regex(r"(?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"),
            confidence: 0.85,
            validator: Some(validate_phone),
        },
        PiiPattern {
            label: "PHONE",
            regex: pii_regex(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b"),
            confidence: 0.80,
            validator: Some(validate_phone),
        },
        PiiPattern {
            label: "SSN",
            regex: pii_regex(r"\b\d{3}-\d{2}-\d{4}\b"),
            confidence: 0.95,
            validator: Some(validate_ssn),
        },
        PiiPattern {
            label: "SSN",
            regex: pii_regex(r"\b\d{9}\b"),
            confidence: 0.60,
            validator: Some(validate_ssn),
        },
        PiiPattern {
            label: "CREDIT_CARD",
            regex: pii_regex(r"\b(?:\d{4}[-\s]?){3}\d{4}\b"),
            confidence: 0.80,
            validator: Some(validate_credit_card),
        },
        PiiPattern {
            label: "IP_ADDRESS",
            regex: pii_regex(r"\b(?:\d{1,3}\.){3}\d{1,3}\b"),
            confidence: 0.75,
            validator: Some(validate_ip_address),
        },
        PiiPattern {
            label: "DRIVER_LICENSE",
            regex: pii_regex(r"\b[A-Z]{1,2}\d{6,8}\b"),
            confidence: 0.70,
            validator: None,
        },
        PiiPattern {
            label: "PASSPORT",
            regex: pii_regex(r"\b[A-Z]{2}\d{7}\b"),
            confidence: 0.75,
            validator: None,
        },
        PiiPattern {
            label: "BANK_ACCOUNT",
            regex: pii_regex(r"\b\d{8,17}\b"),
            confidence: 0.50,
            validator: None,
        },
        PiiPattern {
            label: "DATE_OF_BIRTH",
            regex: pii_regex(r"\b(?:\d{1,2}[/-]\d{1,2}[/-]\d{2,4})|(?:\d{2,4}[/-]\d{1,2}[/-]\d{1,2})\b"),
            confidence: 0.65,
            validator: None,
        },
    ];
}

/// Run every pattern over the text, returning raw candidates.
///
/// Candidates are not deduplicated here. Overlapping matches from
/// different patterns are expected and resolved by the caller.
pub fn detect_with_patterns(text: &str) -> Vec<PiiEntity> {
    let mut entities = Vec::new();

    for pattern in PII_PATTERNS.iter() {
        for m in pattern.regex.find_iter(text) {
            if let Some(validate) = pattern.validator {
                if !validate(m.as_str()) {
                    continue;
                }
            }
            entities.push(PiiEntity {
                text: m.as_str().to_string(),
                label: pattern.label.to_string(),
                start: m.start(),
                end: m.end(),
                confidence: pattern.confidence,
                detection_method: DetectionMethod::Pattern,
            });
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_detection() {
        let entities = detect_with_patterns("Contact alice@example.com today");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "EMAIL");
        assert_eq!(entities[0].text, "alice@example.com");
        assert_eq!(entities[0].confidence, 0.95);
    }

    #[test]
    fn test_email_matches_any_case() {
        let entities = detect_with_patterns("ALICE@EXAMPLE.COM");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "EMAIL");
    }

    #[test]
    fn test_phone_detected_by_both_patterns() {
        let entities = detect_with_patterns("Call 555-123-4567 today");
        let phones: Vec<_> = entities.iter().filter(|e| e.label == "PHONE").collect();
        assert_eq!(phones.len(), 2);
        assert_eq!(phones[0].confidence, 0.85);
        assert_eq!(phones[1].confidence, 0.80);
        assert_eq!(phones[0].start, phones[1].start);
    }

    #[test]
    fn test_repetitive_phone_rejected() {
        let entities = detect_with_patterns("Call 555-555-5555 now");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_formatted_ssn() {
        let entities = detect_with_patterns("SSN: 362-45-1894");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "SSN");
        assert_eq!(entities[0].confidence, 0.95);
    }

    #[test]
    fn test_placeholder_ssn_rejected() {
        let entities = detect_with_patterns("SSN: 123-45-6789");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_bare_nine_digits_is_ambiguous() {
        let entities = detect_with_patterns("Ref 987654321.");
        let labels: Vec<&str> = entities.iter().map(|e| e.label.as_str()).collect();
        assert!(labels.contains(&"SSN"));
        assert!(labels.contains(&"BANK_ACCOUNT"));
    }

    #[test]
    fn test_credit_card_requires_luhn() {
        let entities = detect_with_patterns("Card: 4111 1111 1111 1111");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "CREDIT_CARD");

        let entities = detect_with_patterns("Card: 1234 5678 9012 3456");
        assert!(entities.iter().all(|e| e.label != "CREDIT_CARD"));
    }

    #[test]
    fn test_ip_address_octet_check() {
        let entities = detect_with_patterns("Server at 10.0.0.1");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "IP_ADDRESS");

        let entities = detect_with_patterns("Server at 999.1.1.1");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_license_and_passport_formats() {
        let entities = detect_with_patterns("License D1234567");
        assert!(entities.iter().any(|e| e.label == "DRIVER_LICENSE"));

        let entities = detect_with_patterns("Passport AB1234567");
        assert!(entities.iter().any(|e| e.label == "PASSPORT"));
    }

    #[test]
    fn test_date_of_birth_formats() {
        let entities = detect_with_patterns("DOB: 01/15/1990");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, "DATE_OF_BIRTH");

        let entities = detect_with_patterns("Born 1990-01-15");
        assert!(entities.iter().any(|e| e.label == "DATE_OF_BIRTH"));
    }

    #[test]
    fn test_pattern_order_is_stable() {
        let labels: Vec<&str> = PII_PATTERNS.iter().map(|p| p.label).collect();
        assert_eq!(
            labels,
            vec![
                "EMAIL",
                "PHONE",
                "PHONE",
                "SSN",
                "SSN",
                "CREDIT_CARD",
                "IP_ADDRESS",
                "DRIVER_LICENSE",
                "PASSPORT",
                "BANK_ACCOUNT",
                "DATE_OF_BIRTH",
            ]
        );
    }
}

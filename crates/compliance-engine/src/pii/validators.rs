//! Validation functions for pattern matches
//!
//! Each validator takes the raw matched text and rejects candidates that
//! are structurally valid but obviously not real, cutting the false
//! positive rate of the broad regexes.

use std::collections::HashSet;

/// Luhn checksum over a pure digit string
pub fn luhn_check(digits: &str) -> bool {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let mut sum = 0u32;
    for (i, c) in digits.chars().rev().enumerate() {
        let mut value = c.to_digit(10).unwrap_or(0);
        if i % 2 == 1 {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
    }

    sum % 10 == 0
}

/// Strip separators and run the Luhn check
pub fn validate_credit_card(matched: &str) -> bool {
    let digits: String = matched
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect();
    luhn_check(&digits)
}

/// Reject well-known placeholder SSNs
pub fn validate_ssn(matched: &str) -> bool {
    let digits: String = matched.chars().filter(|c| *c != '-').collect();
    !matches!(
        digits.as_str(),
        "000000000" | "111111111" | "123456789"
    )
}

/// Every octet must parse and fit in 0..=255
pub fn validate_ip_address(matched: &str) -> bool {
    matched
        .split('.')
        .all(|part| matches!(part.parse::<u32>(), Ok(octet) if octet <= 255))
}

/// Reject numbers built from one or two distinct digits (555-5555 and friends)
pub fn validate_phone(matched: &str) -> bool {
    let distinct: HashSet<char> = matched.chars().filter(|c| c.is_ascii_digit()).collect();
    distinct.len() > 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luhn_accepts_valid_card() {
        assert!(luhn_check("4111111111111111"));
        assert!(luhn_check("5500005555555559"));
    }

    #[test]
    fn test_luhn_rejects_invalid_card() {
        assert!(!luhn_check("4111111111111112"));
        assert!(!luhn_check("1234567890123456"));
    }

    #[test]
    fn test_luhn_rejects_non_digits() {
        assert!(!luhn_check(""));
        assert!(!luhn_check("4111-1111-1111-1111"));
        assert!(!luhn_check("abcd"));
    }

    #[test]
    fn test_credit_card_validation_strips_separators() {
        assert!(validate_credit_card("4111-1111-1111-1111"));
        assert!(validate_credit_card("4111 1111 1111 1111"));
        assert!(!validate_credit_card("4111-1111-1111-1112"));
    }

    #[test]
    fn test_ssn_placeholder_rejection() {
        assert!(!validate_ssn("000-00-0000"));
        assert!(!validate_ssn("111-11-1111"));
        assert!(!validate_ssn("123-45-6789"));
        assert!(!validate_ssn("123456789"));
        assert!(validate_ssn("362-45-1894"));
    }

    #[test]
    fn test_ip_octet_ranges() {
        assert!(validate_ip_address("192.168.1.1"));
        assert!(validate_ip_address("0.0.0.0"));
        assert!(validate_ip_address("255.255.255.255"));
        assert!(!validate_ip_address("999.1.1.1"));
        assert!(!validate_ip_address("1.2.3.256"));
    }

    #[test]
    fn test_phone_digit_variety() {
        assert!(validate_phone("555-123-4567"));
        assert!(!validate_phone("555-555-5555"));
        assert!(!validate_phone("121-212-1212"));
        assert!(!validate_phone(""));
    }
}

//! Postal code and phone number extraction.

use super::patterns::{PHONE, PINCODE};
use super::FieldExtractor;

/// Postal code extractor (exactly 6 digits on word boundaries).
///
/// First match wins; an unrelated 6-digit run earlier in the text will
/// shadow the real code. Kept as a documented limitation.
pub struct PincodeExtractor;

impl PincodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PincodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PincodeExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PINCODE
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Phone number extractor (exactly 10 digits on word boundaries).
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE
            .captures_iter(text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

/// Extract the first 6-digit postal code from text.
pub fn extract_pincode(text: &str) -> Option<String> {
    PincodeExtractor::new().extract(text)
}

/// Extract the first 10-digit phone number from text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_pincode() {
        assert_eq!(extract_pincode("PIN Code: 560001"), Some("560001".to_string()));
        assert_eq!(extract_pincode("Pune 411001 India"), Some("411001".to_string()));
    }

    #[test]
    fn test_extract_pincode_exact_length_only() {
        assert_eq!(extract_pincode("12345"), None);
        assert_eq!(extract_pincode("1234567"), None);
        // A 10-digit phone number contains no bounded 6-digit run
        assert_eq!(extract_pincode("9876543210"), None);
    }

    #[test]
    fn test_extract_phone() {
        assert_eq!(extract_phone("Mobile: 9876543210"), Some("9876543210".to_string()));
        assert_eq!(extract_phone("call 98765 43210"), None);
    }

    #[test]
    fn test_extract_phone_ignores_shorter_runs() {
        assert_eq!(extract_phone("560001 411001"), None);
    }
}

//! Aadhaar number and Virtual ID extraction.

use super::patterns::{AADHAAR_NUMBER, VID_NUMBER};
use super::FieldExtractor;

/// Aadhaar number extractor (12 digits, 4-4-4 grouping).
///
/// Digit groups are re-joined with single spaces, so a group run broken
/// across a line wrap still comes out in canonical form.
pub struct AadhaarNumberExtractor;

impl AadhaarNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AadhaarNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AadhaarNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AADHAAR_NUMBER
            .captures_iter(text)
            .map(|caps| format!("{} {} {}", &caps[1], &caps[2], &caps[3]))
            .collect()
    }
}

/// Virtual ID extractor (16 digits after a VID label, 4-4-4-4 grouping).
pub struct VidExtractor;

impl VidExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VidExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for VidExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        VID_NUMBER
            .captures_iter(text)
            .map(|caps| format!("{} {} {} {}", &caps[1], &caps[2], &caps[3], &caps[4]))
            .collect()
    }
}

/// Extract the first Aadhaar number from text.
pub fn extract_aadhaar_number(text: &str) -> Option<String> {
    AadhaarNumberExtractor::new().extract(text)
}

/// Extract the first labeled Virtual ID from text.
pub fn extract_vid(text: &str) -> Option<String> {
    VidExtractor::new().extract(text)
}

/// Mask an Aadhaar number for display and logs (XXXX XXXX dddd).
///
/// Anything that is not a 12-digit number masks completely.
pub fn mask_aadhaar(number: &str) -> String {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 12 {
        return "XXXX XXXX XXXX".to_string();
    }

    format!("XXXX XXXX {}", &digits[8..12])
}

//! Date of birth extraction.

use super::patterns::DOB;
use super::FieldExtractor;

/// Date-of-birth extractor.
///
/// Matches a DOB, Date of Birth or D.O.B label followed by a
/// dd-mm-yyyy or dd/mm/yyyy date. Separators normalize to slashes;
/// the date is not otherwise validated.
pub struct DobExtractor;

impl DobExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DobExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DobExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        DOB.captures_iter(text)
            .map(|caps| caps[2].replace('-', "/"))
            .collect()
    }
}

/// Extract the first labeled date of birth from text.
pub fn extract_dob(text: &str) -> Option<String> {
    DobExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_dob_slash_form() {
        assert_eq!(extract_dob("DOB: 15/08/1990"), Some("15/08/1990".to_string()));
    }

    #[test]
    fn test_extract_dob_normalizes_dashes() {
        assert_eq!(extract_dob("DOB: 15-08-1990"), Some("15/08/1990".to_string()));
    }

    #[test]
    fn test_extract_dob_label_variants() {
        assert_eq!(
            extract_dob("Date of Birth: 01/12/1985"),
            Some("01/12/1985".to_string())
        );
        assert_eq!(extract_dob("D.O.B 5/6/2001"), Some("5/6/2001".to_string()));
        assert_eq!(extract_dob("dob:15-08-1990"), Some("15/08/1990".to_string()));
    }

    #[test]
    fn test_extract_dob_requires_label() {
        assert_eq!(extract_dob("15/08/1990"), None);
        assert_eq!(extract_dob("Born in 1990"), None);
    }
}

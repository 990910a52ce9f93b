//! Gender extraction.

use super::patterns::GENDER;
use super::FieldExtractor;

/// Gender extractor.
///
/// Accepts the full words and the single-letter M/F/T forms some card
/// layouts print. Single letters can collide with stray initials; that
/// trade-off is kept as-is.
pub struct GenderExtractor;

impl GenderExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GenderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GenderExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        GENDER
            .captures_iter(text)
            .map(|caps| capitalize(&caps[1]))
            .collect()
    }
}

/// Extract the first gender token from text.
pub fn extract_gender(text: &str) -> Option<String> {
    GenderExtractor::new().extract(text)
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_gender_words() {
        assert_eq!(extract_gender("Gender: Male"), Some("Male".to_string()));
        assert_eq!(extract_gender("FEMALE"), Some("Female".to_string()));
        assert_eq!(extract_gender("transgender"), Some("Transgender".to_string()));
    }

    #[test]
    fn test_extract_gender_single_letters() {
        assert_eq!(extract_gender("Sex: F"), Some("F".to_string()));
        assert_eq!(extract_gender("m"), Some("M".to_string()));
    }

    #[test]
    fn test_extract_gender_absent() {
        assert_eq!(extract_gender("no token here"), None);
        // Letters inside words do not count
        assert_eq!(extract_gender("formal"), None);
    }
}

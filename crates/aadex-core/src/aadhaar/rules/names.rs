//! Name extraction: dual-script blocks, Latin fallback scan, guardians.

use super::cleanup::clean_name;
use super::patterns::{DUAL_SCRIPT_NAME, GUARDIAN_NAME, LATIN_NAME_LINE};
use super::FieldExtractor;

/// Phrases that disqualify a line from being a personal name.
const BOILERPLATE_PHRASES: [&str; 4] = [
    "Digitally signed by DS Unique",
    "Identification Authority of India",
    "Government of India",
    "Signature Not Verified",
];

/// A name pair captured from adjacent local-script and Latin lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualScriptName {
    /// Name in the local Indic script, trimmed.
    pub local: String,
    /// Latin-script name after cleanup.
    pub latin: String,
}

/// Extract an adjacent local-script / Latin-script name pair.
///
/// Cards print the holder name twice, local script first. The Latin run
/// can bleed into the following line, so it goes through the full name
/// cleanup. The stacked authority header matches the same shape, so any
/// pair whose Latin half carries a boilerplate phrase is skipped and the
/// next pair considered. Both halves are returned independently; either
/// may end up empty.
pub fn extract_dual_script_name(text: &str) -> Option<DualScriptName> {
    for caps in DUAL_SCRIPT_NAME.captures_iter(text) {
        let latin = caps[2].trim().replace('\n', " ");
        if is_boilerplate(&latin) {
            continue;
        }
        return Some(DualScriptName {
            local: caps[1].trim().to_string(),
            latin: clean_name(&latin),
        });
    }
    None
}

/// Scan normalized lines for the first plausible Latin name line.
///
/// A candidate is all Latin letters, spaces, apostrophes and hyphens,
/// has more than one word, and contains no boilerplate phrase. The
/// first candidate decides: its cleaned value is returned even when
/// cleanup empties it.
pub fn scan_name_lines(lines: &[&str]) -> Option<String> {
    for line in lines {
        if is_boilerplate(line) {
            continue;
        }
        if !LATIN_NAME_LINE.is_match(line) {
            continue;
        }
        if line.split_whitespace().count() <= 1 {
            continue;
        }
        return Some(clean_name(line));
    }
    None
}

fn is_boilerplate(line: &str) -> bool {
    let line = line.to_lowercase();
    BOILERPLATE_PHRASES
        .iter()
        .any(|phrase| line.contains(&phrase.to_lowercase()))
}

/// Guardian name extractor (S/o, C/o, D/o, W/o prefixes).
pub struct GuardianExtractor;

impl GuardianExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GuardianExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for GuardianExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        GUARDIAN_NAME
            .captures_iter(text)
            .map(|caps| caps[2].trim().to_string())
            .collect()
    }
}

/// Extract the first guardian name from text.
pub fn extract_guardian_name(text: &str) -> Option<String> {
    GuardianExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dual_script_pair() {
        let text = "राम कुमार\nRAM KUMAR S/O SHYAM KUMAR";
        let pair = extract_dual_script_name(text).unwrap();
        assert_eq!(pair.local, "राम कुमार");
        assert_eq!(pair.latin, "RAM KUMAR");
    }

    #[test]
    fn test_dual_script_absent_without_indic_block() {
        // Single newlines between Latin lines never form a pair
        let text = "Government of India\nRam Kumar\nDOB: 01/01/2000";
        assert_eq!(extract_dual_script_name(text), None);
    }

    #[test]
    fn test_dual_script_skips_authority_header() {
        // e-Aadhaar text opens with the header stacked exactly like a name pair
        let text = "भारत सरकार\nGovernment of India\nराम कुमार\nRam Kumar";
        let pair = extract_dual_script_name(text).unwrap();
        assert_eq!(pair.local, "राम कुमार");
        assert_eq!(pair.latin, "Ram Kumar");
    }

    #[test]
    fn test_dual_script_header_alone_yields_none() {
        let text = "भारत सरकार\nGovernment of India";
        assert_eq!(extract_dual_script_name(text), None);
    }

    #[test]
    fn test_scan_name_lines_picks_first_candidate() {
        let lines = ["Government of India", "Priya Sharma", "Anil Kumar"];
        assert_eq!(scan_name_lines(&lines), Some("Priya Sharma".to_string()));
    }

    #[test]
    fn test_scan_name_lines_skips_single_words() {
        let lines = ["Male", "Priya Sharma"];
        assert_eq!(scan_name_lines(&lines), Some("Priya Sharma".to_string()));
    }

    #[test]
    fn test_scan_name_lines_rejects_boilerplate() {
        let lines = [
            "Signature Not Verified",
            "Digitally signed by DS Unique",
            "Government of India",
        ];
        assert_eq!(scan_name_lines(&lines), None);
    }

    #[test]
    fn test_scan_name_lines_rejects_mixed_content() {
        let lines = ["DOB: 15/08/1990", "1234 5678 9012"];
        assert_eq!(scan_name_lines(&lines), None);
    }

    #[test]
    fn test_extract_guardian_name() {
        let text = "S/O: Shyam Kumar\n12 Gandhi Road";
        assert_eq!(extract_guardian_name(text), Some("Shyam Kumar".to_string()));
    }

    #[test]
    fn test_extract_guardian_name_variants() {
        assert_eq!(
            extract_guardian_name("W/O Mohan Lal\n45 Temple Street"),
            Some("Mohan Lal".to_string())
        );
        assert_eq!(
            extract_guardian_name("c/o. Rajesh Singh, Flat 3"),
            Some("Rajesh Singh".to_string())
        );
        assert_eq!(extract_guardian_name("no prefix in sight: 42"), None);
    }
}

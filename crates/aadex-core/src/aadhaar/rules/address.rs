//! Address block capture and labeled locality fields.

use regex::Regex;

use super::cleanup::collapse_whitespace;
use super::patterns::{
    ADDRESS_LABEL, ADDRESS_TERMINATOR, DISTRICT, EMBEDDED_GUARDIAN, EMBEDDED_ID_GROUP,
    EMBEDDED_PO, EMBEDDED_REGION, POST_OFFICE, STATE, SUB_DISTRICT, VTC,
};

/// Extract the free-text address block.
///
/// The block starts after the first `Address` label and runs to the
/// earliest line starting with District, State, VID, Digitally or a
/// 6-digit code, else to the end of the text.
pub fn extract_address(text: &str) -> Option<String> {
    let label = ADDRESS_LABEL.find(text)?;
    let rest = &text[label.end()..];

    let span = match ADDRESS_TERMINATOR.find(rest) {
        Some(terminator) => &rest[..terminator.start()],
        None => rest,
    };

    Some(clean_address(span))
}

/// Ordered in-span cleanup for a captured address block.
///
/// Relation-prefix runs, grouped ID digits and `PO:` tokens are noise
/// from neighboring fields; district/state words are cut to end of line
/// before newlines collapse away.
fn clean_address(span: &str) -> String {
    let text = span.trim();
    let text = EMBEDDED_GUARDIAN.replace_all(text, "");
    let text = EMBEDDED_ID_GROUP.replace_all(&text, "");
    let text = EMBEDDED_PO.replace_all(&text, "");
    let text = EMBEDDED_REGION.replace_all(&text, "");
    let text = collapse_whitespace(&text);
    let text = text.strip_prefix(',').unwrap_or(&text);
    text.trim().to_string()
}

fn labeled_value(pattern: &Regex, text: &str) -> Option<String> {
    pattern.captures(text).map(|caps| caps[1].trim().to_string())
}

/// Extract the Village/Town/City label value.
pub fn extract_vtc(text: &str) -> Option<String> {
    labeled_value(&VTC, text)
}

/// Extract the post-office label value.
pub fn extract_post_office(text: &str) -> Option<String> {
    labeled_value(&POST_OFFICE, text)
}

/// Extract the sub-district label value.
pub fn extract_sub_district(text: &str) -> Option<String> {
    labeled_value(&SUB_DISTRICT, text)
}

/// Extract the district label value, commas stripped.
pub fn extract_district(text: &str) -> Option<String> {
    labeled_value(&DISTRICT, text).map(|value| value.replace(',', "").trim().to_string())
}

/// Extract the state label value.
pub fn extract_state(text: &str) -> Option<String> {
    labeled_value(&STATE, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_address_stops_at_district() {
        let text = "Address: 123 Main Street, Apt 4B\nDistrict: Bangalore\nState: Karnataka\n560001";
        let address = extract_address(text).unwrap();
        assert_eq!(address, "123 Main Street, Apt 4B");
    }

    #[test]
    fn test_extract_address_stops_at_pincode_line() {
        let text = "Address: 45 Temple Street\nMylapore\n600004\nChennai";
        assert_eq!(extract_address(text), Some("45 Temple Street Mylapore".to_string()));
    }

    #[test]
    fn test_extract_address_runs_to_end_without_terminator() {
        let text = "Address: 12 Gandhi Road, Shivaji Nagar";
        assert_eq!(
            extract_address(text),
            Some("12 Gandhi Road, Shivaji Nagar".to_string())
        );
    }

    #[test]
    fn test_extract_address_absent() {
        assert_eq!(extract_address("no label in this text"), None);
    }

    #[test]
    fn test_clean_address_drops_guardian_run() {
        let text = "Address: S/O Shyam Kumar, 12 Gandhi Road,\nShivaji Nagar,\nDistrict: Pune";
        let address = extract_address(text).unwrap();
        assert_eq!(address, "12 Gandhi Road, Shivaji Nagar,");
    }

    #[test]
    fn test_clean_address_drops_id_groups_and_po() {
        let text = "Address: 1234 5678 9012 Flat 7, PO: Anna Nagar, Chennai";
        let address = extract_address(text).unwrap();
        assert_eq!(address, "Flat 7, Chennai");
    }

    #[test]
    fn test_clean_address_drops_inline_region_words() {
        let text = "Address: 9 Lake View, Dist Jaipur\nLandmark Row";
        let address = extract_address(text).unwrap();
        assert_eq!(address, "9 Lake View, Landmark Row");
    }

    #[test]
    fn test_labeled_locality_fields() {
        let text = "VTC: Pune City\nPO: Shivaji Nagar\nSub District: Haveli\nDistrict: Pune\nState: Maharashtra";

        assert_eq!(extract_vtc(text), Some("Pune City".to_string()));
        assert_eq!(extract_post_office(text), Some("Shivaji Nagar".to_string()));
        assert_eq!(extract_sub_district(text), Some("Haveli".to_string()));
        assert_eq!(extract_state(text), Some("Maharashtra".to_string()));
    }

    #[test]
    fn test_district_strips_commas() {
        assert_eq!(
            extract_district("District: Pune, Maharashtra"),
            Some("Pune Maharashtra".to_string())
        );
    }

    #[test]
    fn test_district_label_collides_with_sub_district() {
        // Unanchored label search: the Sub District line also carries the
        // District label, and it comes first here
        let text = "Sub District: Haveli\nDistrict: Pune";
        assert_eq!(extract_district(text), Some("Haveli".to_string()));
    }
}

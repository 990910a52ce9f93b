//! Rule-based Aadhaar card parser.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::record::AadhaarRecord;

use super::normalize;
use super::rules::{
    address::{
        extract_address, extract_district, extract_post_office, extract_state,
        extract_sub_district, extract_vtc,
    },
    contact::{extract_phone, extract_pincode},
    dates::extract_dob,
    gender::extract_gender,
    names::{extract_dual_script_name, extract_guardian_name, scan_name_lines},
    numbers::{extract_aadhaar_number, extract_vid, mask_aadhaar},
};

/// Result of card extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted card fields.
    pub record: AadhaarRecord,
    /// Names of fields that came back empty.
    pub missing_fields: Vec<&'static str>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for card parsers.
pub trait AadhaarParser {
    /// Parse card fields from text.
    ///
    /// Never fails: any input, including empty text and pure noise,
    /// yields a well-formed record with absent fields left empty.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based parser running every field extractor over the same input.
///
/// Extractors are independent: each searches the original text and none
/// sees the output of another. The only ordered step is the Latin name
/// fallback, which runs when the dual-script block yields nothing.
pub struct RuleBasedParser;

impl RuleBasedParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AadhaarParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing card text of {} characters", text.len());

        let lines = normalize::lines(text);
        let mut record = AadhaarRecord::default();

        record.aadhaar_number = extract_aadhaar_number(text).unwrap_or_default();
        record.vid = extract_vid(text).unwrap_or_default();

        if let Some(pair) = extract_dual_script_name(text) {
            record.name_local = pair.local;
            record.name = pair.latin;
        }
        if record.name.is_empty() {
            record.name = scan_name_lines(&lines).unwrap_or_default();
        }

        record.guardian_name = extract_guardian_name(text).unwrap_or_default();
        record.dob = extract_dob(text).unwrap_or_default();
        record.gender = extract_gender(text).unwrap_or_default();

        record.address = extract_address(text).unwrap_or_default();
        record.vtc = extract_vtc(text).unwrap_or_default();
        record.po = extract_post_office(text).unwrap_or_default();
        record.sub_district = extract_sub_district(text).unwrap_or_default();
        record.district = extract_district(text).unwrap_or_default();
        record.state = extract_state(text).unwrap_or_default();

        record.pincode = extract_pincode(text).unwrap_or_default();
        record.phone = extract_phone(text).unwrap_or_default();

        let missing_fields = record.missing_fields();

        if !record.aadhaar_number.is_empty() {
            debug!(
                "Extracted card {} ({} of {} fields empty)",
                mask_aadhaar(&record.aadhaar_number),
                missing_fields.len(),
                AadhaarRecord::FIELD_NAMES.len(),
            );
        }

        ExtractionResult {
            record,
            missing_fields,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

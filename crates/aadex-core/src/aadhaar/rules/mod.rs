//! Rule-based field extractors for Aadhaar cards.

pub mod numbers;
pub mod names;
pub mod dates;
pub mod gender;
pub mod address;
pub mod contact;
pub mod cleanup;
pub mod patterns;

pub use numbers::{extract_aadhaar_number, extract_vid, mask_aadhaar, AadhaarNumberExtractor, VidExtractor};
pub use names::{
    extract_dual_script_name, extract_guardian_name, scan_name_lines, DualScriptName,
    GuardianExtractor,
};
pub use dates::{extract_dob, DobExtractor};
pub use gender::{extract_gender, GenderExtractor};
pub use address::{
    extract_address, extract_district, extract_post_office, extract_state, extract_sub_district,
    extract_vtc,
};
pub use contact::{extract_phone, extract_pincode, PhoneExtractor, PincodeExtractor};
pub use cleanup::{clean_name, collapse_whitespace, strip_relation_suffix, strip_trailing_initials};
pub use patterns::*;


/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

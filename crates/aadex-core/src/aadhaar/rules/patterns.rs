//! Common regex patterns for Aadhaar card extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Aadhaar number: 12 digits grouped 4-4-4
    pub static ref AADHAAR_NUMBER: Regex = Regex::new(
        r"\b(\d{4})\s(\d{4})\s(\d{4})\b"
    ).unwrap();

    // Virtual ID: 16 digits grouped 4-4-4-4 after the VID label.
    // The label is printed uppercase on cards, so no (?i) here.
    pub static ref VID_NUMBER: Regex = Regex::new(
        r"VID[:\s]*(\d{4})\s(\d{4})\s(\d{4})\s(\d{4})"
    ).unwrap();

    // Indic-script run (Devanagari through Malayalam) directly above a
    // Latin name line
    pub static ref DUAL_SCRIPT_NAME: Regex = Regex::new(
        r"([\u{0900}-\u{0D7F}\s]+)\n([A-Za-z\s'-]+)"
    ).unwrap();

    // Candidate line for the Latin name fallback scan
    pub static ref LATIN_NAME_LINE: Regex = Regex::new(
        r"^[A-Za-z\s'-]+$"
    ).unwrap();

    // Relation prefix introducing a guardian name
    pub static ref GUARDIAN_NAME: Regex = Regex::new(
        r"(?i)(S/o|C/o|D/o|W/o)[.:]?\s*([A-Za-z\s'-]+)"
    ).unwrap();

    // Relation prefix splitting a name from a trailing guardian part
    pub static ref RELATION_SPLIT: Regex = Regex::new(
        r"(?i)\s*(?:S/O|C/O|W/O|D/O)\s*"
    ).unwrap();

    // Stray single-letter relation initial at the end of a name
    pub static ref TRAILING_INITIAL: Regex = Regex::new(
        r"\s+[CWSD]\s*$"
    ).unwrap();

    // Whitespace run
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Date of birth label and a dd-mm-yyyy / dd/mm/yyyy date
    pub static ref DOB: Regex = Regex::new(
        r"(?i)(DOB|Date of Birth|D\.O\.B)[:\s]*?(\d{1,2}[-/]\d{1,2}[-/]\d{4})"
    ).unwrap();

    // Gender tokens, single-letter forms included
    pub static ref GENDER: Regex = Regex::new(
        r"(?i)\b(Male|Female|Transgender|M|F|T)\b"
    ).unwrap();

    // Address label
    pub static ref ADDRESS_LABEL: Regex = Regex::new(
        r"(?i)address[:\s]*"
    ).unwrap();

    // Lines that end the address block
    pub static ref ADDRESS_TERMINATOR: Regex = Regex::new(
        r"(?i)\n(?:district|state|vid|digitally|\d{6})"
    ).unwrap();

    // In-address noise: relation prefix with the name it introduces
    pub static ref EMBEDDED_GUARDIAN: Regex = Regex::new(
        r"(?i)(?:S/o|C/o|D/o|W/o)[.:]?\s*[A-Za-z\s'-]+"
    ).unwrap();

    // In-address noise: grouped Aadhaar digits
    pub static ref EMBEDDED_ID_GROUP: Regex = Regex::new(
        r"\b\d{4}\s\d{4}\s\d{4}\b"
    ).unwrap();

    // In-address noise: post-office token up to the next comma.
    // The label is printed uppercase, so no (?i) here.
    pub static ref EMBEDDED_PO: Regex = Regex::new(
        r"PO:[^,\n]*,"
    ).unwrap();

    // In-address noise: district/state words to end of line
    pub static ref EMBEDDED_REGION: Regex = Regex::new(
        r"(?i)\b(?:dist(?:rict)?|state)\b.*"
    ).unwrap();

    // Labeled locality fields
    pub static ref VTC: Regex = Regex::new(r"(?i)VTC[:\s]*(.*)").unwrap();
    pub static ref POST_OFFICE: Regex = Regex::new(r"(?i)PO[:\s]*(.*)").unwrap();
    pub static ref SUB_DISTRICT: Regex = Regex::new(r"(?i)Sub District[:\s]*(.*)").unwrap();
    pub static ref DISTRICT: Regex = Regex::new(r"(?i)District[:\s]*(.*)").unwrap();
    pub static ref STATE: Regex = Regex::new(r"(?i)State[:\s]*(.*)").unwrap();

    // Postal code: exactly 6 digits
    pub static ref PINCODE: Regex = Regex::new(r"\b(\d{6})\b").unwrap();

    // Phone: exactly 10 digits
    pub static ref PHONE: Regex = Regex::new(r"\b(\d{10})\b").unwrap();
}

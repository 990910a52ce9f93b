//! Aadhaar card field extraction module.

mod parser;
pub mod normalize;
pub mod rules;

pub use parser::{AadhaarParser, ExtractionResult, RuleBasedParser};

//! Data models for card records and configuration.

pub mod config;
pub mod record;

pub use config::{AadexConfig, OcrConfig, PdfConfig, ServerConfig};
pub use record::AadhaarRecord;

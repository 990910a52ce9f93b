//! Core library for Aadhaar card data extraction.
//!
//! This crate provides:
//! - PDF processing (text and image extraction, password handling)
//! - OCR via the Tesseract engine
//! - Aadhaar card field extraction (numbers, names, dates, address, contact)
//! - Card data models serializable to JSON

pub mod aadhaar;
pub mod error;
pub mod models;
pub mod ocr;
pub mod pdf;

pub use aadhaar::{AadhaarParser, ExtractionResult, RuleBasedParser};
pub use error::{AadexError, Result};
pub use models::config::AadexConfig;
pub use models::record::AadhaarRecord;
pub use ocr::{OcrEngine, OcrResult};
#[cfg(feature = "native")]
pub use ocr::TesseractEngine;
pub use pdf::{PdfExtractor, PdfProcessor, PdfType};

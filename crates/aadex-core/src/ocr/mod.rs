//! OCR module backed by Tesseract.

#[cfg(feature = "native")]
mod engine;

#[cfg(feature = "native")]
pub use engine::TesseractEngine;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Result type for OCR operations.
pub type Result<T> = std::result::Result<T, OcrError>;

/// Result of OCR processing on an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResult {
    /// Recognized text.
    pub text: String,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,

    /// Image dimensions (width, height).
    pub image_size: (u32, u32),
}

/// Trait for OCR engine implementations.
pub trait OcrEngine {
    /// Recognize text in an image.
    fn recognize(&self, image: &DynamicImage) -> Result<OcrResult>;
}

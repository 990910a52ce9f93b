//! Tesseract-backed OCR engine.

use std::io::Cursor;
use std::time::Instant;

use image::DynamicImage;
use tesseract::Tesseract;
use tracing::debug;

use super::{OcrEngine, OcrResult, Result};
use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// OCR engine calling into the system Tesseract library.
///
/// Aadhaar cards mix Latin and regional scripts, so the default
/// configuration loads both the `eng` and `tam` traineddata files.
pub struct TesseractEngine {
    config: OcrConfig,
}

impl TesseractEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(OcrConfig::default())
    }

    /// Create an engine with the given configuration.
    pub fn with_config(config: OcrConfig) -> Self {
        Self { config }
    }

    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut data), image::ImageFormat::Png)
            .map_err(|e| OcrError::InvalidImage(e.to_string()))?;
        Ok(data)
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<OcrResult> {
        let start = Instant::now();
        let (width, height) = (image.width(), image.height());

        // Card images stay in memory, nothing is staged on disk
        let png = self.encode_png(image)?;

        let datapath = self.config.data_dir.as_ref().and_then(|p| p.to_str());
        let psm = self.config.page_seg_mode.to_string();

        let mut tess = Tesseract::new(datapath, Some(self.config.languages.as_str()))
            .map_err(|e| OcrError::Init(e.to_string()))?
            .set_variable("tessedit_pageseg_mode", &psm)
            .map_err(|e| OcrError::Init(e.to_string()))?
            .set_image_from_mem(&png)
            .map_err(|e| OcrError::InvalidImage(e.to_string()))?;

        let text = tess
            .get_text()
            .map_err(|e| OcrError::Recognition(e.to_string()))?;

        let processing_time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "OCR recognized {} characters from {}x{} image in {}ms",
            text.len(),
            width,
            height,
            processing_time_ms
        );

        Ok(OcrResult {
            text,
            processing_time_ms,
            image_size: (width, height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_config() {
        let engine = TesseractEngine::new();
        assert_eq!(engine.config.languages, "eng+tam");
        assert_eq!(engine.config.page_seg_mode, 6);
    }

    #[test]
    fn test_engine_with_custom_config() {
        let config = OcrConfig {
            languages: "eng".to_string(),
            ..OcrConfig::default()
        };
        let engine = TesseractEngine::with_config(config);
        assert_eq!(engine.config.languages, "eng");
    }

    #[test]
    fn test_encode_png_produces_valid_header() {
        let engine = TesseractEngine::new();
        let image = DynamicImage::new_rgb8(4, 4);
        let png = engine.encode_png(&image).unwrap();
        assert_eq!(&png[..4], b"\x89PNG");
    }
}

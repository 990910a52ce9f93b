//! CLI subcommands.

use std::path::Path;

use tracing::{debug, warn};

use aadex_core::models::config::AadexConfig;
use aadex_core::ocr::{OcrEngine, TesseractEngine};
use aadex_core::pdf::{PdfExtractor, PdfProcessor};

pub mod batch;
pub mod config;
pub mod process;
pub mod serve;

/// Load configuration from an explicit path, the default location, or defaults.
pub(crate) fn load_config(path: Option<&str>) -> anyhow::Result<AadexConfig> {
    if let Some(path) = path {
        return Ok(AadexConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        return Ok(AadexConfig::from_file(&default_path)?);
    }

    Ok(AadexConfig::default())
}

/// Run OCR over the page images of a loaded PDF.
pub(crate) fn ocr_pdf_images(
    extractor: &PdfExtractor,
    config: &AadexConfig,
) -> anyhow::Result<String> {
    let engine = TesseractEngine::with_config(config.ocr.clone());

    let mut page_count = extractor.page_count();
    if config.pdf.max_pages > 0 {
        page_count = page_count.min(config.pdf.max_pages as u32);
    }

    let mut all_text = Vec::new();

    for page in 1..=page_count {
        let images = match extractor.extract_images(page) {
            Ok(images) => images,
            Err(e) => {
                warn!("Failed to extract images from page {}: {}", page, e);
                continue;
            }
        };

        for image in &images {
            match engine.recognize(image) {
                Ok(result) if !result.text.trim().is_empty() => all_text.push(result.text),
                Ok(_) => debug!("No text detected on page {}", page),
                Err(e) => warn!("OCR failed on page {}: {}", page, e),
            }
        }
    }

    if all_text.is_empty() {
        anyhow::bail!("No text detected in any PDF images");
    }

    Ok(all_text.join("\n\n"))
}

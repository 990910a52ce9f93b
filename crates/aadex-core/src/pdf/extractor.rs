//! PDF text and image extraction using lopdf and pdf-extract.

use image::{DynamicImage, ImageBuffer, Luma, Rgb};
use lopdf::{Document, Object, ObjectId};
use tracing::{debug, trace};

use super::{PdfProcessor, PdfType, Result};
use crate::error::PdfError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Extract all images from the entire document.
    fn scan_all_images(&self) -> Vec<DynamicImage> {
        let doc = match self.document.as_ref() {
            Some(d) => d,
            None => return vec![],
        };

        let images: Vec<DynamicImage> = doc
            .objects
            .values()
            .filter_map(|obj| self.decode_image_object(doc, obj))
            .collect();

        debug!("Found {} images in document", images.len());
        images
    }

    /// Check for image XObjects without decoding them.
    fn has_image_objects(&self) -> bool {
        let doc = match self.document.as_ref() {
            Some(d) => d,
            None => return false,
        };

        doc.objects.values().any(|obj| {
            if let Object::Stream(stream) = obj {
                stream
                    .dict
                    .get(b"Subtype")
                    .ok()
                    .and_then(|s| s.as_name().ok())
                    .map(|name| name == b"Image")
                    .unwrap_or(false)
            } else {
                false
            }
        })
    }

    fn decode_image_object(&self, doc: &Document, obj: &Object) -> Option<DynamicImage> {
        let stream = match obj {
            Object::Stream(stream) => stream,
            _ => return None,
        };
        let dict = &stream.dict;

        let subtype = dict.get(b"Subtype").ok()?;
        if subtype.as_name().ok()? != b"Image" {
            return None;
        }

        let width = dict.get(b"Width").ok()?.as_i64().ok()? as u32;
        let height = dict.get(b"Height").ok()?.as_i64().ok()? as u32;

        trace!("Found image object: {}x{}", width, height);

        if let Ok(filter) = dict.get(b"Filter") {
            let filter_name = match filter {
                Object::Name(name) => Some(name.as_slice()),
                Object::Array(arr) if !arr.is_empty() => {
                    arr.first().and_then(|o| o.as_name().ok())
                }
                _ => None,
            };

            match filter_name {
                Some(b"DCTDecode") => {
                    // JPEG streams decode directly from the compressed content
                    trace!("Decoding JPEG image");
                    return image::load_from_memory_with_format(
                        &stream.content,
                        image::ImageFormat::Jpeg,
                    )
                    .ok();
                }
                Some(b"JPXDecode") | Some(b"CCITTFaxDecode") | Some(b"JBIG2Decode") => {
                    trace!("Unsupported image filter");
                    return None;
                }
                _ => {}
            }
        }

        let data = match stream.decompressed_content() {
            Ok(d) => d,
            Err(_) => stream.content.clone(),
        };

        let color_space = dict
            .get(b"ColorSpace")
            .ok()
            .and_then(|o| match o {
                Object::Name(name) => Some(name.as_slice()),
                Object::Array(arr) => arr.first().and_then(|o| o.as_name().ok()),
                Object::Reference(r) => doc.get_object(*r).ok().and_then(|o| o.as_name().ok()),
                _ => None,
            })
            .unwrap_or(b"DeviceRGB");

        let bits = dict
            .get(b"BitsPerComponent")
            .ok()
            .and_then(|o| o.as_i64().ok())
            .unwrap_or(8) as u8;

        self.image_from_raw_samples(&data, width, height, color_space, bits)
    }

    fn image_from_raw_samples(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        color_space: &[u8],
        bits_per_component: u8,
    ) -> Option<DynamicImage> {
        trace!(
            "Decoding raw image samples: {}x{}, colorspace={:?}, bits={}",
            width,
            height,
            String::from_utf8_lossy(color_space),
            bits_per_component
        );

        if bits_per_component != 8 {
            trace!("Unsupported bits per component: {}", bits_per_component);
            return None;
        }

        match color_space {
            b"DeviceRGB" | b"RGB" => {
                let expected = (width * height * 3) as usize;
                if data.len() < expected {
                    return None;
                }
                ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, data[..expected].to_vec())
                    .map(DynamicImage::ImageRgb8)
            }
            b"DeviceGray" | b"G" => {
                let expected = (width * height) as usize;
                if data.len() < expected {
                    return None;
                }
                ImageBuffer::<Luma<u8>, _>::from_raw(width, height, data[..expected].to_vec())
                    .map(DynamicImage::ImageLuma8)
            }
            _ => {
                trace!("Unsupported color space for raw decode");
                None
            }
        }
    }

    /// Get resources dictionary for a page, walking up the page tree for
    /// inherited entries.
    fn page_resources(&self, doc: &Document, page_id: ObjectId) -> Option<lopdf::Dictionary> {
        let mut node_id = page_id;
        loop {
            let node = doc.get_object(node_id).ok()?;
            let dict = match node {
                Object::Dictionary(dict) => dict,
                _ => return None,
            };

            if let Ok(resources) = dict.get(b"Resources") {
                if let Ok((_, Object::Dictionary(res_dict))) = doc.dereference(resources) {
                    return Some(res_dict.clone());
                }
            }

            match dict.get(b"Parent") {
                Ok(Object::Reference(parent_id)) => node_id = *parent_id,
                _ => return None,
            }
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load_with_password(&mut self, data: &[u8], password: Option<&str>) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            match password {
                Some(password) => {
                    if doc.decrypt(password).is_err() {
                        return Err(PdfError::InvalidPassword);
                    }
                    debug!("Decrypted PDF with supplied password");
                }
                None => {
                    // Owner-only encryption still opens with an empty user password
                    if doc.decrypt("").is_err() {
                        return Err(PdfError::Encrypted);
                    }
                    debug!("Decrypted PDF with empty password");
                }
            }

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn analyze(&self) -> PdfType {
        let text = self.extract_text().unwrap_or_default();
        let has_text = text.len() > 50;
        let has_images = self.has_image_objects();

        let pdf_type = match (has_text, has_images) {
            (true, false) => PdfType::Text,
            (false, true) => PdfType::Image,
            (true, true) => PdfType::Hybrid,
            (false, false) => PdfType::Empty,
        };

        debug!(
            "PDF analysis: has_text={}, has_images={} -> {:?}",
            has_text, has_images, pdf_type
        );
        pdf_type
    }

    fn extract_text(&self) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }

    fn extract_images(&self, page: u32) -> Result<Vec<DynamicImage>> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        let pages = doc.get_pages();
        let page_id = pages.get(&page).ok_or(PdfError::InvalidPage(page))?;

        let mut images = Vec::new();

        if let Some(resources) = self.page_resources(doc, *page_id) {
            if let Ok(xobjects) = resources.get(b"XObject") {
                if let Ok((_, Object::Dictionary(xobj_dict))) = doc.dereference(xobjects) {
                    for (_name, obj_ref) in xobj_dict.iter() {
                        if let Ok((_, obj)) = doc.dereference(obj_ref) {
                            if let Some(img) = self.decode_image_object(doc, obj) {
                                images.push(img);
                            }
                        }
                    }
                }
            }
        }

        // Scanned cards sometimes store the page image outside the XObject table
        if images.is_empty() {
            debug!("No XObject images found on page {}, scanning all objects", page);
            images = self.scan_all_images();
        }

        debug!("Extracted {} images from page {}", images.len(), page);
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream};

    use super::*;

    fn build_pdf(with_text: bool, with_image: bool) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut resources = dictionary! {};
        let mut operations = vec![];
        if with_text {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => "Helvetica",
                "Encoding" => "WinAnsiEncoding",
            });
            resources.set("Font", dictionary! { "F1" => font_id });
            operations = vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(
                        "Name: Ram Kumar DOB: 15/08/1990 Address: 12 Gandhi Road Shivaji Nagar Pune 560001",
                    )],
                ),
                Operation::new("ET", vec![]),
            ];
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources,
        });

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if with_image {
            doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => 2,
                    "Height" => 2,
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8,
                },
                vec![0u8; 4],
            ));
        }

        let mut data = Vec::new();
        doc.save_to(&mut data).unwrap();
        data
    }

    fn minimal_pdf() -> Vec<u8> {
        build_pdf(false, false)
    }

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut extractor = PdfExtractor::new();
        assert!(extractor.load(b"not a pdf").is_err());
    }

    #[test]
    fn test_load_counts_pages() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&minimal_pdf()).unwrap();
        assert_eq!(extractor.page_count(), 1);
    }

    #[test]
    fn test_invalid_page_number() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&minimal_pdf()).unwrap();
        assert!(matches!(
            extractor.extract_images(99),
            Err(PdfError::InvalidPage(99))
        ));
    }

    #[test]
    fn test_analyze_empty_pdf() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&minimal_pdf()).unwrap();
        assert_eq!(extractor.analyze(), PdfType::Empty);
    }

    #[test]
    fn test_analyze_text_pdf() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&build_pdf(true, false)).unwrap();
        assert_eq!(extractor.analyze(), PdfType::Text);
    }

    #[test]
    fn test_analyze_image_pdf() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&build_pdf(false, true)).unwrap();
        assert_eq!(extractor.analyze(), PdfType::Image);
    }

    #[test]
    fn test_analyze_hybrid_pdf() {
        let mut extractor = PdfExtractor::new();
        extractor.load(&build_pdf(true, true)).unwrap();
        assert_eq!(extractor.analyze(), PdfType::Hybrid);
    }
}

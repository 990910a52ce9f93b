//! Process command - extract card data from a single file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use aadex_core::aadhaar::{AadhaarParser, ExtractionResult, RuleBasedParser};
use aadex_core::models::config::AadexConfig;
use aadex_core::models::record::AadhaarRecord;
use aadex_core::ocr::{OcrEngine, TesseractEngine};
use aadex_core::pdf::{PdfExtractor, PdfProcessor, PdfType};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Password for encrypted PDFs
    #[arg(short, long)]
    password: Option<String>,

    /// Skip OCR and use only PDF text extraction
    #[arg(long)]
    text_only: bool,

    /// List fields that came back empty
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let result = match extension.as_str() {
        "pdf" => process_pdf(&args, &config, &pb)?,
        "png" | "jpg" | "jpeg" | "tiff" | "tif" | "bmp" => process_image(&args, &config, &pb)?,
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    };

    pb.finish_with_message("Done");

    let output = format_record(&result.record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_missing && !result.missing_fields.is_empty() {
        println!();
        println!(
            "{} Empty fields: {}",
            style("ℹ").blue(),
            result.missing_fields.join(", ")
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn process_pdf(
    args: &ProcessArgs,
    config: &AadexConfig,
    pb: &ProgressBar,
) -> anyhow::Result<ExtractionResult> {
    pb.set_message("Loading PDF...");
    pb.set_position(10);

    let data = fs::read(&args.input)?;
    let mut extractor = PdfExtractor::new();
    extractor.load_with_password(&data, args.password.as_deref())?;

    debug!("PDF has {} pages", extractor.page_count());

    pb.set_message("Analyzing PDF...");
    pb.set_position(20);

    let pdf_type = extractor.analyze();
    debug!("PDF type: {:?}", pdf_type);

    let text = match pdf_type {
        PdfType::Empty => {
            anyhow::bail!("PDF appears to be empty");
        }
        PdfType::Image if args.text_only => {
            anyhow::bail!("PDF is image-based but --text-only was set. Remove the flag to use OCR.");
        }
        PdfType::Image => {
            pb.set_message("Running OCR...");
            pb.set_position(40);
            super::ocr_pdf_images(&extractor, config)?
        }
        PdfType::Text | PdfType::Hybrid => {
            if !config.pdf.prefer_embedded_text && !args.text_only {
                pb.set_message("Running OCR...");
                pb.set_position(40);
                super::ocr_pdf_images(&extractor, config)?
            } else {
                pb.set_message("Extracting text...");
                pb.set_position(40);
                let extracted = extractor.extract_text()?;

                // Hybrid e-Aadhaar downloads can carry only boilerplate as embedded text
                if !args.text_only && extracted.trim().len() < config.pdf.min_text_length {
                    warn!("Embedded text too short, falling back to OCR");
                    super::ocr_pdf_images(&extractor, config).unwrap_or(extracted)
                } else {
                    extracted
                }
            }
        }
    };

    if text.trim().is_empty() {
        anyhow::bail!("No text could be extracted from the PDF");
    }

    pb.set_message("Extracting card fields...");
    pb.set_position(70);

    let result = RuleBasedParser::new().parse(&text);

    pb.set_position(100);

    Ok(result)
}

fn process_image(
    args: &ProcessArgs,
    config: &AadexConfig,
    pb: &ProgressBar,
) -> anyhow::Result<ExtractionResult> {
    pb.set_message("Loading image...");
    pb.set_position(10);

    let image = image::open(&args.input)?;

    pb.set_message("Running OCR...");
    pb.set_position(30);

    let engine = TesseractEngine::with_config(config.ocr.clone());
    let ocr = engine.recognize(&image)?;

    if ocr.text.trim().is_empty() {
        anyhow::bail!("No text detected in image");
    }

    debug!(
        "OCR produced {} characters in {}ms",
        ocr.text.len(),
        ocr.processing_time_ms
    );

    pb.set_message("Extracting card fields...");
    pb.set_position(70);

    let result = RuleBasedParser::new().parse(&ocr.text);

    pb.set_position(100);

    Ok(result)
}

pub(crate) fn format_record(record: &AadhaarRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &AadhaarRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(AadhaarRecord::FIELD_NAMES)?;
    wtr.write_record(record.field_values())?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &AadhaarRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Aadhaar: {}\n", record.aadhaar_number));
    if !record.vid.is_empty() {
        output.push_str(&format!("VID: {}\n", record.vid));
    }
    output.push('\n');

    output.push_str(&format!("Name: {}\n", record.name));
    if !record.name_local.is_empty() {
        output.push_str(&format!("Name (regional): {}\n", record.name_local));
    }
    if !record.guardian_name.is_empty() {
        output.push_str(&format!("Guardian: {}\n", record.guardian_name));
    }
    output.push_str(&format!("DOB: {}\n", record.dob));
    output.push_str(&format!("Gender: {}\n", record.gender));
    output.push('\n');

    output.push_str(&format!("Address: {}\n", record.address));
    if !record.vtc.is_empty() {
        output.push_str(&format!("  VTC: {}\n", record.vtc));
    }
    if !record.po.is_empty() {
        output.push_str(&format!("  PO: {}\n", record.po));
    }
    if !record.sub_district.is_empty() {
        output.push_str(&format!("  Sub District: {}\n", record.sub_district));
    }
    if !record.district.is_empty() {
        output.push_str(&format!("  District: {}\n", record.district));
    }
    if !record.state.is_empty() {
        output.push_str(&format!("  State: {}\n", record.state));
    }
    if !record.pincode.is_empty() {
        output.push_str(&format!("  Pincode: {}\n", record.pincode));
    }

    if !record.phone.is_empty() {
        output.push_str(&format!("\nPhone: {}\n", record.phone));
    }

    output
}

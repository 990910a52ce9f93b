//! Serve command - HTTP API for card extraction.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use aadex_core::aadhaar::{AadhaarParser, ExtractionResult, RuleBasedParser};
use aadex_core::error::PdfError;
use aadex_core::models::config::AadexConfig;
use aadex_core::models::record::AadhaarRecord;
use aadex_core::ocr::{OcrEngine, TesseractEngine};
use aadex_core::pdf::{PdfExtractor, PdfProcessor};

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(short, long)]
    bind: Option<String>,
}

struct AppState {
    config: AadexConfig,
}

/// Response body for a successful extraction.
#[derive(Debug, Serialize)]
struct ExtractResponse {
    data: AadhaarRecord,
    missing_fields: Vec<&'static str>,
    processing_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// API errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Unsupported media type: {0}")]
    UnsupportedMedia(String),
    #[error("Could not extract card data: {0}")]
    Unprocessable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::UnsupportedMedia(detail) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, detail),
            ApiError::Unprocessable(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            ApiError::Internal(detail) => {
                tracing::error!("API internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let bind_addr = args
        .bind
        .unwrap_or_else(|| config.server.bind_addr.clone());
    let max_upload_bytes = config.server.max_upload_bytes;

    let state = Arc::new(AppState { config });
    let app = router(state, max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    let addr = listener.local_addr()?;

    println!("{} Listening on http://{}", style("✓").green(), addr);
    info!("API server started on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/extract", post(extract))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Accept a multipart upload with a `file` part (PDF or image) and an
/// optional `password` part for encrypted PDFs.
async fn extract(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, ApiError> {
    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut password: Option<String> = None;

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "password" => {
                password = Some(field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read password field: {}", e))
                })?);
            }
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read file data: {}", e))
                })?;
                file_data = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let (filename, bytes) =
        file_data.ok_or_else(|| ApiError::BadRequest("No file provided".to_string()))?;

    debug!("Received upload {} ({} bytes)", filename, bytes.len());

    // OCR and PDF decoding are CPU-bound, keep them off the async runtime
    let config = state.config.clone();
    let result = tokio::task::spawn_blocking(move || {
        extract_from_upload(&filename, &bytes, password.as_deref(), &config)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(ExtractResponse {
        missing_fields: result.missing_fields,
        processing_time_ms: result.processing_time_ms,
        data: result.record,
    }))
}

fn extract_from_upload(
    filename: &str,
    bytes: &[u8],
    password: Option<&str>,
    config: &AadexConfig,
) -> Result<ExtractionResult, ApiError> {
    let text = if is_pdf(filename, bytes) {
        pdf_text(bytes, password, config)?
    } else {
        let image = image::load_from_memory(bytes).map_err(|e| {
            ApiError::UnsupportedMedia(format!("Not a PDF or a decodable image: {}", e))
        })?;

        let engine = TesseractEngine::with_config(config.ocr.clone());
        engine
            .recognize(&image)
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .text
    };

    if text.trim().is_empty() {
        return Err(ApiError::Unprocessable(
            "No text could be extracted from the upload".to_string(),
        ));
    }

    Ok(RuleBasedParser::new().parse(&text))
}

fn pdf_text(
    bytes: &[u8],
    password: Option<&str>,
    config: &AadexConfig,
) -> Result<String, ApiError> {
    let mut extractor = PdfExtractor::new();
    extractor
        .load_with_password(bytes, password)
        .map_err(|e| match e {
            PdfError::InvalidPassword => ApiError::BadRequest("Invalid PDF password".to_string()),
            PdfError::Encrypted => {
                ApiError::BadRequest("PDF is encrypted, supply a password field".to_string())
            }
            other => ApiError::BadRequest(format!("Could not load PDF: {}", other)),
        })?;

    let embedded = extractor.extract_text().unwrap_or_default();
    if embedded.trim().len() >= config.pdf.min_text_length {
        return Ok(embedded);
    }

    // Scanned card: recognize the embedded page images instead
    super::ocr_pdf_images(&extractor, config)
        .map_err(|e| ApiError::Unprocessable(e.to_string()))
}

fn is_pdf(filename: &str, bytes: &[u8]) -> bool {
    filename.to_lowercase().ends_with(".pdf") || bytes.starts_with(b"%PDF")
}

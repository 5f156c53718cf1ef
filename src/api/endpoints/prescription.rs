//! `POST /api/prescription/upload` — prescription image → structured records.
//!
//! Receives one multipart image field, sniffs the format by magic bytes,
//! runs OCR on a blocking thread, and feeds the recognized text through the
//! extraction pipeline. The pipeline itself never fails; everything that can
//! go wrong is rejected here before it runs.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::extraction::{self, MedicineEntry};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// The OCR text, passed through unmodified.
    pub raw_text: String,
    pub medicines: Vec<MedicineEntry>,
    pub doctor: String,
}

pub async fn upload(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    // First field named `file` carries the image
    let mut image_bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;
        image_bytes = Some(bytes.to_vec());
        break;
    }

    let image_bytes =
        image_bytes.ok_or_else(|| ApiError::BadRequest("Missing `file` field".into()))?;

    if image_bytes.is_empty() {
        return Err(ApiError::BadRequest("Uploaded file is empty".into()));
    }
    if image_bytes.len() > ctx.config.max_upload_bytes {
        return Err(ApiError::PayloadTooLarge(format!(
            "Upload exceeds {} byte limit ({} bytes)",
            ctx.config.max_upload_bytes,
            image_bytes.len()
        )));
    }

    let kind = detect_image_kind(&image_bytes)
        .ok_or_else(|| ApiError::UnsupportedMedia("Expected a JPEG, PNG, or WebP image".into()))?;

    // OCR is CPU-bound native code; keep it off the async runtime
    let ocr = ctx.ocr.clone();
    let raw_text = tokio::task::spawn_blocking(move || ocr.recognize(&image_bytes))
        .await
        .map_err(|e| ApiError::Internal(format!("OCR task failed: {e}")))??;

    if raw_text.trim().is_empty() {
        return Err(ApiError::EmptyScan);
    }

    let result = extraction::extract(&raw_text);

    tracing::info!(
        format = kind,
        medicines = result.medicines.len(),
        "Prescription processed"
    );

    Ok(Json(UploadResponse {
        raw_text,
        medicines: result.medicines,
        doctor: result.doctor,
    }))
}

/// Detect the image format from magic bytes. Only formats the OCR engine
/// accepts; anything else is rejected with 415.
fn detect_image_kind(bytes: &[u8]) -> Option<&'static str> {
    if bytes.len() >= 3 && bytes[0..3] == [0xFF, 0xD8, 0xFF] {
        Some("jpeg")
    } else if bytes.len() >= 8 && bytes[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
        Some("png")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("webp")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_jpeg() {
        assert_eq!(detect_image_kind(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("jpeg"));
    }

    #[test]
    fn detect_png() {
        assert_eq!(
            detect_image_kind(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]),
            Some("png")
        );
    }

    #[test]
    fn detect_webp() {
        let mut bytes = b"RIFF".to_vec();
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        bytes.extend_from_slice(b"WEBP");
        assert_eq!(detect_image_kind(&bytes), Some("webp"));
    }

    #[test]
    fn reject_pdf_and_garbage() {
        assert_eq!(detect_image_kind(b"%PDF-1.4"), None);
        assert_eq!(detect_image_kind(&[0x00, 0x01, 0x02]), None);
        assert_eq!(detect_image_kind(&[]), None);
    }
}

use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Response as AxumResponse},
};
use ingrecheck_core::domain::{
    common::entities::app_errors::CoreError,
    ocr::{entities::OcrImage, ports::OcrService},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10 MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtractTextResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[utoipa::path(
    post,
    path = "/ocr",
    tag = "ocr",
    summary = "Extract text from a label photo",
    description = "Relays the `image` field of a multipart form to the OCR API and returns the recognized text, ready to be sent to the analyze endpoint.",
    responses(
        (status = 200, body = ExtractTextResponse, description = "Recognized text, empty when nothing was found"),
        (status = 400, description = "No image received"),
        (status = 500, body = ExtractTextResponse, description = "OCR extraction failed")
    ),
)]
pub async fn extract_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<AxumResponse, ApiError> {
    let mut image: Option<OcrImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("image").to_string();
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read image bytes: {}", e);
            ApiError::BadRequest(format!("Failed to read image: {}", e))
        })?;

        if data.len() > MAX_IMAGE_SIZE {
            warn!(file_name = %file_name, size = data.len(), "Image too large");
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some(OcrImage {
            file_name,
            mime_type,
            data,
        });
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("No image received".to_string()))?;

    match state.service.extract_text(image).await {
        Ok(text) => Ok(Response::OK(ExtractTextResponse { text, error: None }).into_response()),
        Err(CoreError::Invalid(message)) => Err(ApiError::BadRequest(message)),
        Err(e) => {
            error!("OCR extraction failed: {}", e);
            Ok(Response::InternalServerError(ExtractTextResponse {
                text: String::new(),
                error: Some("OCR extraction failed".to_string()),
            })
            .into_response())
        }
    }
}

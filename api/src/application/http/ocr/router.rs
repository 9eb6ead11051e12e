use super::handlers::extract_text::{__path_extract_text, MAX_IMAGE_SIZE, extract_text};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(extract_text))]
pub struct OcrApiDoc;

pub fn ocr_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ocr", state.args.server.root_path),
            post(extract_text),
        )
        // room for the multipart framing around the image
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024))
}

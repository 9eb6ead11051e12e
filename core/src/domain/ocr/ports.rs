use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, ocr::entities::OcrImage};

/// Third-party OCR API
#[cfg_attr(test, mockall::automock)]
pub trait OcrClient: Send + Sync {
    /// Returns the recognized text, empty when nothing was recognized.
    fn recognize(&self, image: OcrImage) -> impl Future<Output = Result<String, CoreError>> + Send;
}

pub trait OcrService: Send + Sync {
    fn extract_text(
        &self,
        image: OcrImage,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

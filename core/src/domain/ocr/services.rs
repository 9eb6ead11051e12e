use tracing::{error, info};

use crate::domain::{
    analysis::ports::AnalysisWebhook,
    common::{entities::app_errors::CoreError, services::Service},
    ocr::{
        entities::OcrImage,
        ports::{OcrClient, OcrService},
    },
};

impl<W, O> OcrService for Service<W, O>
where
    W: AnalysisWebhook,
    O: OcrClient,
{
    async fn extract_text(&self, image: OcrImage) -> Result<String, CoreError> {
        if image.data.is_empty() {
            return Err(CoreError::Invalid("image is empty".to_string()));
        }

        let file_name = image.file_name.clone();
        let text = self.ocr_client.recognize(image).await.map_err(|e| {
            error!(file_name = %file_name, "OCR extraction failed: {}", e);
            e
        })?;

        info!(file_name = %file_name, chars = text.chars().count(), "OCR extraction completed");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{analysis::ports::MockAnalysisWebhook, ocr::ports::MockOcrClient};
    use bytes::Bytes;

    fn image(data: &'static [u8]) -> OcrImage {
        OcrImage {
            file_name: "label.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            data: Bytes::from_static(data),
        }
    }

    fn ocr_answering(response: Result<&str, CoreError>) -> MockOcrClient {
        let response = response.map(str::to_string);
        let mut ocr_client = MockOcrClient::new();
        ocr_client
            .expect_recognize()
            .withf(|image| image.file_name == "label.jpg")
            .times(1)
            .returning(move |_| {
                let response = response.clone();
                Box::pin(async move { response })
            });
        ocr_client
    }

    #[tokio::test]
    async fn test_returns_recognized_text() {
        let service = Service::new(MockAnalysisWebhook::new(), ocr_answering(Ok("sugar, E450")));
        let text = service.extract_text(image(b"\xff\xd8")).await;
        assert_eq!(text, Ok("sugar, E450".to_string()));
    }

    #[tokio::test]
    async fn test_empty_image_is_rejected() {
        let mut ocr_client = MockOcrClient::new();
        ocr_client.expect_recognize().never();

        let service = Service::new(MockAnalysisWebhook::new(), ocr_client);
        let text = service.extract_text(image(b"")).await;
        assert!(matches!(text, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_client_error_is_propagated() {
        let failure = CoreError::ExternalServiceError("OCR API returned 403".to_string());
        let service = Service::new(MockAnalysisWebhook::new(), ocr_answering(Err(failure.clone())));
        assert_eq!(service.extract_text(image(b"\x00")).await, Err(failure));
    }
}

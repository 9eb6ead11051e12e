use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;

use crate::domain::{
    common::{OcrConfig, entities::app_errors::CoreError},
    ocr::{entities::OcrImage, ports::OcrClient},
};

#[derive(Debug, Clone)]
pub struct OcrSpaceClient {
    endpoint: String,
    api_key: String,
    language: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct OcrSpaceResponse {
    #[serde(default)]
    parsed_results: Option<Vec<ParsedResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ParsedResult {
    #[serde(default)]
    parsed_text: Option<String>,
}

impl OcrSpaceClient {
    pub fn new(config: OcrConfig) -> Self {
        Self {
            endpoint: config.endpoint,
            api_key: config.api_key,
            language: config.language,
            client: Client::new(),
        }
    }
}

impl OcrClient for OcrSpaceClient {
    async fn recognize(&self, image: OcrImage) -> Result<String, CoreError> {
        let file = Part::bytes(image.data.to_vec())
            .file_name(image.file_name)
            .mime_str(&image.mime_type)
            .map_err(|e| CoreError::Invalid(format!("Invalid image mime type: {}", e)))?;

        let form = Form::new()
            .part("file", file)
            .text("apikey", self.api_key.clone())
            .text("language", self.language.clone());

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OCR API request failed: {}", e);
                CoreError::ExternalServiceError(format!("OCR API error: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read OCR response body: {}", e);
            CoreError::ExternalServiceError(format!("OCR API error: {}", e))
        })?;

        if !status.is_success() {
            tracing::warn!(%status, "OCR API answered with a non-success status");
        }

        let ocr_response: OcrSpaceResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse OCR response ({}): {} - {}", status, e, body);
            CoreError::ExternalServiceError(format!(
                "Failed to parse OCR response ({}): {}",
                status, e
            ))
        })?;

        Ok(ocr_response
            .parsed_results
            .and_then(|results| results.into_iter().next())
            .and_then(|result| result.parsed_text)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(mock_server: &MockServer) -> OcrSpaceClient {
        OcrSpaceClient::new(OcrConfig {
            endpoint: format!("{}/parse/image", mock_server.uri()),
            api_key: "helloworld".to_string(),
            language: "eng".to_string(),
        })
    }

    fn image() -> OcrImage {
        OcrImage {
            file_name: "label.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            data: Bytes::from_static(b"\xff\xd8\xff"),
        }
    }

    #[tokio::test]
    async fn test_returns_first_parsed_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/parse/image"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ParsedResults": [
                    {"ParsedText": "Sugar, E450\r\n"},
                    {"ParsedText": "ignored"}
                ],
                "IsErroredOnProcessing": false
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let text = client(&mock_server).recognize(image()).await;
        assert_eq!(text, Ok("Sugar, E450\r\n".to_string()));
    }

    #[tokio::test]
    async fn test_missing_results_give_empty_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "IsErroredOnProcessing": true,
                "ErrorMessage": ["Unable to recognize the file type"]
            })))
            .mount(&mock_server)
            .await;

        let text = client(&mock_server).recognize(image()).await;
        assert_eq!(text, Ok(String::new()));
    }

    #[tokio::test]
    async fn test_error_status_with_results_returns_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "ParsedResults": [{"ParsedText": "Salt, sugar"}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let text = client(&mock_server).recognize(image()).await;
        assert_eq!(text, Ok("Salt, sugar".to_string()));
    }

    #[tokio::test]
    async fn test_unparseable_body_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Invalid API key"))
            .mount(&mock_server)
            .await;

        let text = client(&mock_server).recognize(image()).await;
        assert!(matches!(text, Err(CoreError::ExternalServiceError(_))));
    }
}

use reqwest::Client;
use serde::Serialize;
use tracing::{error, warn};

use crate::domain::{
    analysis::ports::AnalysisWebhook,
    common::{AnalysisWebhookConfig, entities::app_errors::CoreError},
};

#[derive(Debug, Clone)]
pub struct HttpAnalysisWebhook {
    url: String,
    max_retries: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct WebhookRequest<'a> {
    ingredients: &'a str,
}

impl HttpAnalysisWebhook {
    pub fn new(config: AnalysisWebhookConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                error!("Failed to build analysis webhook client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            url: config.url,
            max_retries: config.max_retries,
            client,
        })
    }

    async fn post_once(&self, ingredients: &str) -> Result<String, reqwest::Error> {
        let response = self
            .client
            .post(&self.url)
            .json(&WebhookRequest { ingredients })
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Analysis webhook answered {} - {}", status, text);
        }

        Ok(text)
    }
}

/// Connect failures and timeouts are worth another attempt.
fn is_transient(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout()
}

impl AnalysisWebhook for HttpAnalysisWebhook {
    async fn forward(&self, ingredients: String) -> Result<String, CoreError> {
        let mut attempt = 0;

        loop {
            match self.post_once(&ingredients).await {
                Ok(text) => return Ok(text),
                Err(e) if is_transient(&e) && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(attempt, "Analysis webhook transient failure, retrying: {}", e);
                }
                Err(e) => {
                    error!("Analysis webhook request failed: {}", e);
                    return Err(CoreError::ExternalServiceError(format!(
                        "Analysis webhook error: {}",
                        e
                    )));
                }
            }
        }
    }
}

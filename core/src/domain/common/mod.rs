use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct IngrecheckConfig {
    pub analysis: AnalysisWebhookConfig,
    pub ocr: OcrConfig,
}

#[derive(Clone, Debug)]
pub struct AnalysisWebhookConfig {
    pub url: String,
    pub timeout: Duration,
    /// Extra attempts after a transient transport failure (connect or timeout).
    pub max_retries: u32,
}

#[derive(Clone, Debug)]
pub struct OcrConfig {
    pub endpoint: String,
    pub api_key: String,
    pub language: String,
}

use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use ingrecheck_core::domain::common::{AnalysisWebhookConfig, IngrecheckConfig, OcrConfig};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "ingrecheck-api", about = "Ingredient safety verdict API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AnalysisArgs {
    #[arg(long = "analysis-webhook-url", env = "ANALYSIS_WEBHOOK_URL")]
    pub webhook_url: Url,

    #[arg(
        long = "analysis-webhook-timeout-secs",
        env = "ANALYSIS_WEBHOOK_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,

    #[arg(
        long = "analysis-webhook-retries",
        env = "ANALYSIS_WEBHOOK_RETRIES",
        default_value_t = 1
    )]
    pub retries: u32,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct OcrArgs {
    #[arg(
        long = "ocr-endpoint",
        env = "OCR_ENDPOINT",
        default_value = "https://api.ocr.space/parse/image"
    )]
    pub endpoint: Url,

    #[arg(long = "ocr-api-key", env = "OCR_API_KEY", default_value = "helloworld")]
    pub api_key: String,

    #[arg(long = "ocr-language", env = "OCR_LANGUAGE", default_value = "eng")]
    pub language: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for IngrecheckConfig {
    fn from(args: Args) -> Self {
        IngrecheckConfig {
            analysis: AnalysisWebhookConfig {
                url: args.analysis.webhook_url.to_string(),
                timeout: Duration::from_secs(args.analysis.timeout_secs),
                max_retries: args.analysis.retries,
            },
            ocr: OcrConfig {
                endpoint: args.ocr.endpoint.to_string(),
                api_key: args.ocr.api_key,
                language: args.ocr.language,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_applied() {
        let args = Args::try_parse_from([
            "ingrecheck-api",
            "--analysis-webhook-url",
            "https://hooks.example.com/webhook/analyze",
        ])
        .unwrap();

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "/api");
        assert_eq!(args.analysis.timeout_secs, 30);
        assert_eq!(args.analysis.retries, 1);
        assert_eq!(args.ocr.language, "eng");
    }

    #[test]
    fn test_allowed_origins_are_split() {
        let args = Args::try_parse_from([
            "ingrecheck-api",
            "--analysis-webhook-url",
            "https://hooks.example.com/webhook/analyze",
            "--allowed-origins",
            "http://localhost:3000,https://app.example.com",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn test_invalid_webhook_url_is_rejected() {
        let args = Args::try_parse_from([
            "ingrecheck-api",
            "--analysis-webhook-url",
            "not a url",
        ]);
        assert!(args.is_err());
    }

    #[test]
    fn test_into_core_config() {
        let args = Args::try_parse_from([
            "ingrecheck-api",
            "--analysis-webhook-url",
            "https://hooks.example.com/webhook/analyze",
            "--analysis-webhook-timeout-secs",
            "5",
            "--analysis-webhook-retries",
            "0",
        ])
        .unwrap();

        let config = IngrecheckConfig::from(args);
        assert_eq!(config.analysis.url, "https://hooks.example.com/webhook/analyze");
        assert_eq!(config.analysis.timeout, Duration::from_secs(5));
        assert_eq!(config.analysis.max_retries, 0);
        assert_eq!(config.ocr.endpoint, "https://api.ocr.space/parse/image");
    }
}

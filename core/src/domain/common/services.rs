use std::sync::Arc;

use crate::domain::{analysis::ports::AnalysisWebhook, ocr::ports::OcrClient};

/// Service container wiring the outbound ports. Domain services are
/// implemented on it in each domain module.
pub struct Service<W, O>
where
    W: AnalysisWebhook,
    O: OcrClient,
{
    pub(crate) analysis_webhook: Arc<W>,
    pub(crate) ocr_client: Arc<O>,
}

impl<W, O> Service<W, O>
where
    W: AnalysisWebhook,
    O: OcrClient,
{
    pub fn new(analysis_webhook: W, ocr_client: O) -> Self {
        Self {
            analysis_webhook: Arc::new(analysis_webhook),
            ocr_client: Arc::new(ocr_client),
        }
    }
}

impl<W, O> Clone for Service<W, O>
where
    W: AnalysisWebhook,
    O: OcrClient,
{
    fn clone(&self) -> Self {
        Self {
            analysis_webhook: Arc::clone(&self.analysis_webhook),
            ocr_client: Arc::clone(&self.ocr_client),
        }
    }
}

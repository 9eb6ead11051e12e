use crate::{
    domain::common::{IngrecheckConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{ocr::OcrSpaceClient, webhook::HttpAnalysisWebhook},
};

pub type IngrecheckService = Service<HttpAnalysisWebhook, OcrSpaceClient>;

pub fn create_service(config: IngrecheckConfig) -> Result<IngrecheckService, CoreError> {
    let analysis_webhook = HttpAnalysisWebhook::new(config.analysis)?;
    let ocr_client = OcrSpaceClient::new(config.ocr);

    Ok(Service::new(analysis_webhook, ocr_client))
}

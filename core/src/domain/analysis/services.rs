use tracing::{debug, error, info, instrument};

use crate::domain::{
    analysis::{
        normalizer::{AnalysisOutcome, normalize},
        parser::interpret_response,
        ports::{AnalysisService, AnalysisWebhook},
        value_objects::AnalyzeIngredientsInput,
    },
    common::services::Service,
    ocr::ports::OcrClient,
};

impl<W, O> AnalysisService for Service<W, O>
where
    W: AnalysisWebhook,
    O: OcrClient,
{
    #[instrument(skip_all, fields(ingredients_len = input.ingredients.len()))]
    async fn analyze_ingredients(&self, input: AnalyzeIngredientsInput) -> AnalysisOutcome {
        debug!("Sending ingredients to analysis webhook: {}", input.ingredients);

        // 1. Forward to the webhook
        let raw_response = match self.analysis_webhook.forward(input.ingredients).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Analysis webhook call failed: {}", e);
                return AnalysisOutcome::from(e);
            }
        };
        debug!("Raw response from analysis webhook: {}", raw_response);

        // 2. Sanitize, decode and unwrap
        let outcome = normalize(interpret_response(&raw_response));

        info!(
            outcome = %outcome.kind,
            verdict = %outcome.result.verdict_level(),
            "Ingredient analysis completed"
        );

        outcome
    }
}

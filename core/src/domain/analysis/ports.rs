use std::future::Future;

use crate::domain::{
    analysis::{normalizer::AnalysisOutcome, value_objects::AnalyzeIngredientsInput},
    common::entities::app_errors::CoreError,
};

/// Outbound AI analysis webhook
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisWebhook: Send + Sync {
    /// Sends the ingredient text and returns the raw response body,
    /// whatever its status code or content type.
    fn forward(
        &self,
        ingredients: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for ingredient analysis
pub trait AnalysisService: Send + Sync {
    /// Never fails: every error ends up as a fallback record in the outcome.
    fn analyze_ingredients(
        &self,
        input: AnalyzeIngredientsInput,
    ) -> impl Future<Output = AnalysisOutcome> + Send;
}

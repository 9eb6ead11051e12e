use axum::extract::State;
use ingrecheck_core::domain::analysis::{
    AnalysisOutcome, AnalysisResult, AnalysisService, AnalyzeIngredientsInput,
};

use crate::application::http::{
    analysis::validators::AnalyzeIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

impl From<AnalysisOutcome> for Response<AnalysisResult> {
    fn from(outcome: AnalysisOutcome) -> Self {
        if outcome.kind.is_server_error() {
            Response::InternalServerError(outcome.result)
        } else {
            Response::OK(outcome.result)
        }
    }
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "analysis",
    summary = "Analyze ingredients",
    description = "Relays the ingredient text to the AI analysis webhook and normalizes its answer into a verdict record. An unreadable answer is still a 200 with a `no-result` verdict.",
    request_body = AnalyzeIngredientsRequest,
    responses(
        (status = 200, body = AnalysisResult, description = "Verdict, or `no-result` when the AI answer was unreadable"),
        (status = 500, body = AnalysisResult, description = "`no-verdict` fallback after a network or payload error")
    )
)]
pub async fn analyze_ingredients(
    State(state): State<AppState>,
    payload: Result<ValidateJson<AnalyzeIngredientsRequest>, ApiError>,
) -> Response<AnalysisResult> {
    let outcome = match payload {
        Ok(ValidateJson(payload)) => {
            state
                .service
                .analyze_ingredients(AnalyzeIngredientsInput {
                    ingredients: payload.ingredients,
                })
                .await
        }
        Err(e) => {
            tracing::error!("Invalid analysis request: {}", e);
            AnalysisOutcome::internal_error(e.to_string())
        }
    };

    Response::from(outcome)
}

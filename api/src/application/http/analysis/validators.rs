use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeIngredientsRequest {
    #[validate(length(min = 1, message = "ingredients must not be empty"))]
    #[schema(example = "sucralose, E450")]
    pub ingredients: String,
}

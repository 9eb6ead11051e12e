#[derive(Debug, Clone)]
pub struct AnalyzeIngredientsInput {
    pub ingredients: String,
}

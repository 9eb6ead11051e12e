use crate::application::http::{analysis::router::AnalysisApiDoc, ocr::router::OcrApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Ingrecheck API",
    description = "Normalizes AI ingredient analysis answers into verdict records"
))]
pub struct ApiDoc;

impl ApiDoc {
    /// Document with every route group, paths relative to the root path.
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(AnalysisApiDoc::openapi());
        openapi.merge(OcrApiDoc::openapi());
        openapi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_routes() {
        let openapi = ApiDoc::merged();

        assert!(openapi.paths.paths.contains_key("/analyze"));
        assert!(openapi.paths.paths.contains_key("/ocr"));
    }
}

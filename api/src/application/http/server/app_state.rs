use std::sync::Arc;

use ingrecheck_core::application::IngrecheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: IngrecheckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: IngrecheckService) -> Self {
        Self { args, service }
    }
}

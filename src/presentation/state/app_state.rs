use std::sync::Arc;

use crate::application::ports::ModelLister;
use crate::application::services::DocragService;

/// Shared, read-only handler state. Pipelines are never stored here; every
/// request builds its own through the service.
#[derive(Clone)]
pub struct AppState {
    pub docrag_service: Arc<DocragService>,
    pub model_lister: Arc<dyn ModelLister>,
}

impl AppState {
    pub fn new(docrag_service: Arc<DocragService>, model_lister: Arc<dyn ModelLister>) -> Self {
        Self {
            docrag_service,
            model_lister,
        }
    }
}

use std::sync::Arc;

use profile_llm::LLMClient;

use crate::generation::generation_service::GenerationService;

#[derive(Clone)]
pub struct AppService {
    pub generation_service: GenerationService,
}

impl AppService {
    pub fn new(llm_client: Arc<LLMClient>) -> Self {
        let generation_service = GenerationService::new(llm_client);

        Self { generation_service }
    }
}

/// Per-process state. The provider client is created once at startup and
/// only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub service: AppService,
}

impl AppState {
    pub fn new(llm_client: LLMClient) -> Self {
        Self {
            service: AppService::new(Arc::new(llm_client)),
        }
    }
}

use std::sync::Arc;

use profile_llm::{GenerationParams, LLMClient};

use super::{
    generation_model::{GenerationRequest, GenerationResult},
    generation_prompt::{LinkedInPrompt, SYSTEM_INSTRUCTION, TEMPERATURE},
};
use crate::core::error::AppResult;

#[derive(Clone)]
pub struct GenerationService {
    llm_client: Arc<LLMClient>,
    params: GenerationParams,
}

impl GenerationService {
    pub fn new(llm_client: Arc<LLMClient>) -> Self {
        Self {
            llm_client,
            params: GenerationParams {
                system_instruction: SYSTEM_INSTRUCTION.to_string(),
                temperature: TEMPERATURE,
            },
        }
    }

    /// Builds the prompt, makes a single provider call and trims the result.
    /// An empty result is still a success; the caller decides how to surface it.
    pub async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationResult> {
        let prompt = LinkedInPrompt::get_prompt(request);

        let text = self
            .llm_client
            .generate_text(&prompt, &self.params)
            .await
            .map_err(|e| {
                tracing::error!("Error generating LinkedIn content: {:#}", e);
                e
            })?;

        let text = text.trim().to_string();
        if text.is_empty() {
            tracing::warn!("Provider returned no text");
        }

        Ok(GenerationResult { text })
    }
}

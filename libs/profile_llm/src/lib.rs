use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;

pub mod gemini;

pub use gemini::GeminiService;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub enum LLMProvider {
    Gemini {
        api_key: String,
        model: String,
        base_url: String,
    },
}

/// Sampling and steering parameters sent alongside a prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub system_instruction: String,
    pub temperature: f32,
}

/// A text generation backend: takes a prompt plus parameters and returns
/// the generated text, or fails with the provider's error.
#[async_trait]
pub trait LLMService {
    async fn generate_text(&self, prompt: &str, params: &GenerationParams) -> Result<String>;
}

#[derive(Debug, Clone, Default)]
pub struct LLMClientConfig {
    /// Upper bound for a single provider call. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

pub struct LLMClient {
    service: Box<dyn LLMService + Send + Sync>,
    config: LLMClientConfig,
}

impl LLMClient {
    pub fn new(provider: LLMProvider, config: Option<LLMClientConfig>) -> Self {
        let service: Box<dyn LLMService + Send + Sync> = match provider {
            LLMProvider::Gemini {
                api_key,
                model,
                base_url,
            } => Box::new(GeminiService::new(api_key, model).with_base_url(base_url)),
        };

        Self::with_service(service, config)
    }

    pub fn with_service(
        service: Box<dyn LLMService + Send + Sync>,
        config: Option<LLMClientConfig>,
    ) -> Self {
        Self {
            service,
            config: config.unwrap_or_default(),
        }
    }

    /// Runs exactly one provider call. Failures are returned as-is, never retried.
    pub async fn generate_text(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        let call = self.service.generate_text(prompt, params);

        match self.config.timeout {
            Some(limit) => match timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::error!("Provider call timed out after {:?}", limit);
                    Err(anyhow::anyhow!("Provider call timed out after {:?}", limit))
                }
            },
            None => call.await,
        }
    }

    pub fn with_config(mut self, config: LLMClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }
}

use std::{env, time::Duration};

use profile_llm::{LLMClientConfig, LLMProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

use crate::core::error::ConfigError;

pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub port: u16,
    pub provider_timeout: Option<Duration>,
    pub environment: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from any variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let gemini_api_key = read("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let port = match read("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let provider_timeout = match read("PROVIDER_TIMEOUT_SECS") {
            Some(value) => Some(Duration::from_secs(value.parse::<u64>().map_err(|_| {
                ConfigError::Invalid {
                    name: "PROVIDER_TIMEOUT_SECS",
                    value,
                }
            })?)),
            None => None,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model: read("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: read("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            port,
            provider_timeout,
            environment: read("APP_ENVIRONMENT").unwrap_or_else(|| "dev".to_string()),
        })
    }

    pub fn is_dev(&self) -> bool {
        self.environment == "dev"
    }

    pub fn provider(&self) -> LLMProvider {
        LLMProvider::Gemini {
            api_key: self.gemini_api_key.clone(),
            model: self.gemini_model.clone(),
            base_url: self.gemini_base_url.clone(),
        }
    }

    pub fn client_config(&self) -> LLMClientConfig {
        LLMClientConfig {
            timeout: self.provider_timeout,
        }
    }
}

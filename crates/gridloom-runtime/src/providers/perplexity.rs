//! Perplexity chat-completion provider.
//!
//! Perplexity exposes the same wire dialect as OpenAI; only the base
//! URL, credential, and model namespace differ.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use super::factory::ProviderFactory;
use super::openai_compat::chat_completion;
use super::secrets::{ApiCredential, CredentialSource};
use super::{ChatMessage, CompletionProvider, CompletionResponse, ProviderError, SamplingConfig};

/// Environment variable name for the Perplexity API key.
pub const PERPLEXITY_API_KEY_ENV: &str = "PERPLEXITY_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

/// Perplexity provider.
#[derive(Debug)]
pub struct PerplexityProvider {
    credential: ApiCredential,
    base_url: String,
}

impl PerplexityProvider {
    /// Create a provider from an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credential: ApiCredential::new(
                api_key,
                CredentialSource::Programmatic,
                "Perplexity API key",
            ),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a provider from `PERPLEXITY_API_KEY`.
    pub fn from_env() -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_env(PERPLEXITY_API_KEY_ENV, "Perplexity API key")?;
        Ok(Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create from JSON configuration with environment fallback.
    pub fn from_config(config: &JsonValue) -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_config_or_env(
            config,
            "api_key",
            PERPLEXITY_API_KEY_ENV,
            "Perplexity API key",
        )?;
        let base_url = config["base_url"]
            .as_str()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        Ok(Self {
            credential,
            base_url,
        })
    }
}

#[async_trait]
impl CompletionProvider for PerplexityProvider {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        config: &SamplingConfig,
    ) -> Result<CompletionResponse, ProviderError> {
        chat_completion(&self.base_url, &self.credential, &messages, config).await
    }

    async fn health_check(&self) -> bool {
        !self.credential.is_empty()
    }

    fn name(&self) -> &str {
        "perplexity"
    }
}

/// Factory registering Perplexity in a [`super::ProviderRegistry`].
pub struct PerplexityProviderFactory;

impl ProviderFactory for PerplexityProviderFactory {
    fn provider_type(&self) -> &'static str {
        "perplexity"
    }

    fn create(&self, config: &JsonValue) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
        Ok(Arc::new(PerplexityProvider::from_config(config)?))
    }

    fn validate_config(&self, config: &JsonValue) -> Result<(), ProviderError> {
        PerplexityProvider::from_config(config).map(|_| ())
    }

    fn description(&self) -> &'static str {
        "Perplexity chat-completion API (OpenAI-compatible)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let provider = PerplexityProvider::new("pplx-test");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(provider.name(), "perplexity");
    }
}

//! OpenAI chat-completion provider.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use super::factory::ProviderFactory;
use super::openai_compat::chat_completion;
use super::secrets::{ApiCredential, CredentialSource};
use super::{ChatMessage, CompletionProvider, CompletionResponse, ProviderError, SamplingConfig};

/// Environment variable name for the OpenAI API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI provider.
///
/// The API key is stored in an [`ApiCredential`], so it cannot leak
/// through Debug output and is only exposed at the HTTP call site.
#[derive(Debug)]
pub struct OpenAiProvider {
    credential: ApiCredential,
    base_url: String,
}

impl OpenAiProvider {
    /// Create a provider from an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credential: ApiCredential::new(
                api_key,
                CredentialSource::Programmatic,
                "OpenAI API key",
            ),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a provider from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_env(OPENAI_API_KEY_ENV, "OpenAI API key")?;
        Ok(Self {
            credential,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Create from JSON configuration with environment fallback.
    ///
    /// Reads `api_key` (falling back to `OPENAI_API_KEY`) and an
    /// optional `base_url` override.
    pub fn from_config(config: &JsonValue) -> Result<Self, ProviderError> {
        let credential = ApiCredential::from_config_or_env(
            config,
            "api_key",
            OPENAI_API_KEY_ENV,
            "OpenAI API key",
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

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
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
        "openai"
    }
}

/// Factory registering OpenAI in a [`super::ProviderRegistry`].
pub struct OpenAiProviderFactory;

impl ProviderFactory for OpenAiProviderFactory {
    fn provider_type(&self) -> &'static str {
        "openai"
    }

    fn create(&self, config: &JsonValue) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
        Ok(Arc::new(OpenAiProvider::from_config(config)?))
    }

    fn validate_config(&self, config: &JsonValue) -> Result<(), ProviderError> {
        OpenAiProvider::from_config(config).map(|_| ())
    }

    fn description(&self) -> &'static str {
        "OpenAI chat-completion API"
    }
}

//! Completion-provider abstractions for gridloom-runtime.
//!
//! This module defines the trait for text-completion providers and
//! includes implementations for OpenAI and Perplexity, both of which
//! expose the same chat-completion wire dialect.
//!
//! ## Security
//!
//! All providers use the [`secrets`] module for credential handling.
//! See [`ApiCredential`] for the recommended patterns.
//!
//! ## Retry policy
//!
//! Providers never retry internally. A failed call surfaces as a
//! [`ProviderError`] and the orchestrator decides what happens next.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod factory;
pub mod secrets;

#[cfg(any(feature = "openai", feature = "perplexity"))]
mod openai_compat;

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "perplexity")]
mod perplexity;

pub use factory::{default_registry, ProviderFactory, ProviderRegistry};
pub use secrets::{ApiCredential, CredentialSource};

#[cfg(feature = "openai")]
pub use openai::{OpenAiProvider, OpenAiProviderFactory, OPENAI_API_KEY_ENV};

#[cfg(feature = "perplexity")]
pub use perplexity::{PerplexityProvider, PerplexityProviderFactory, PERPLEXITY_API_KEY_ENV};

/// Errors from completion providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("rate limit exceeded, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("response parse error: {0}")]
    Parse(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("timeout after {0:?}")]
    Timeout(Duration),

    #[error("provider not configured: {0}")]
    NotConfigured(String),

    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

/// Sampling configuration for a completion request.
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Provider-specific model identifier
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature (0.0-2.0, higher samples more diversely)
    pub temperature: f32,

    /// Number of completions to request (always 1 in this pipeline)
    pub num_completions: u32,

    /// Penalty on tokens already present, discourages repeats
    pub presence_penalty: Option<f32>,

    /// Penalty on frequent tokens, encourages varied vocabulary
    pub frequency_penalty: Option<f32>,

    /// Nucleus sampling cutoff
    pub top_p: Option<f32>,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 500,
            temperature: 0.7,
            num_completions: 1,
            presence_penalty: None,
            frequency_penalty: None,
            top_p: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl SamplingConfig {
    /// Sampling tuned for candidate-word batches: hot temperature and
    /// strong repetition penalties for a diverse vocabulary.
    pub fn for_words(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            temperature: 0.9,
            presence_penalty: Some(0.6),
            frequency_penalty: Some(0.6),
            top_p: Some(0.95),
            ..Default::default()
        }
    }

    /// Sampling tuned for clue text: slightly creative, mild penalties
    /// so clues do not repeat phrasing.
    pub fn for_hints(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            temperature: 0.8,
            presence_penalty: Some(0.3),
            frequency_penalty: Some(0.3),
            ..Default::default()
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A chat message for completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system" or "user"
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response from a completion.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated text
    pub content: String,

    /// Token usage
    pub usage: TokenUsage,

    /// Model that produced the completion
    pub model: String,
}

/// Token usage from a completion.
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,

    /// Tokens in the completion
    pub completion_tokens: u32,
}

impl TokenUsage {
    /// Total tokens used.
    pub fn total(&self) -> u32 {
        self.prompt_tokens + self.completion_tokens
    }
}

/// Provider abstraction allows swapping completion backends.
///
/// This is the ONLY place where remote text-generation calls are made;
/// everything in `gridloom-core` stays deterministic.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Execute a chat completion and return its raw text.
    ///
    /// An empty or absent completion is an error
    /// ([`ProviderError::EmptyCompletion`]), never an empty string.
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        config: &SamplingConfig,
    ) -> Result<CompletionResponse, ProviderError>;

    /// Check if the provider is usable (credential present).
    async fn health_check(&self) -> bool;

    /// Provider name for logs and the registry.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_creation() {
        let system = ChatMessage::system("You write crossword clues.");
        assert_eq!(system.role, "system");

        let user = ChatMessage::user("Generate 100 words");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Generate 100 words");
    }

    #[test]
    fn test_word_sampling_preset() {
        let config = SamplingConfig::for_words("gpt-4o-mini", 500);
        assert_eq!(config.temperature, 0.9);
        assert_eq!(config.presence_penalty, Some(0.6));
        assert_eq!(config.frequency_penalty, Some(0.6));
        assert_eq!(config.top_p, Some(0.95));
        assert_eq!(config.num_completions, 1);
    }

    #[test]
    fn test_hint_sampling_preset() {
        let config = SamplingConfig::for_hints("gpt-4o-mini", 300);
        assert_eq!(config.temperature, 0.8);
        assert_eq!(config.presence_penalty, Some(0.3));
        assert_eq!(config.top_p, None);
        assert_eq!(config.max_tokens, 300);
    }

    #[test]
    fn test_token_usage_total() {
        let usage = TokenUsage {
            prompt_tokens: 120,
            completion_tokens: 80,
        };
        assert_eq!(usage.total(), 200);
    }
}

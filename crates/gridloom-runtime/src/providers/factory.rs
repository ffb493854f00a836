//! Provider factory pattern for dynamic backend registration.
//!
//! New completion backends register factories that create instances
//! from JSON configuration, so callers select a provider by name
//! without this crate enumerating them in an enum.
//!
//! ## Usage
//!
//! ```ignore
//! let registry = default_registry();
//! let provider = registry.create("openai", &serde_json::json!({}))?;
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::{CompletionProvider, ProviderError};

/// Factory for creating completion providers from configuration.
pub trait ProviderFactory: Send + Sync {
    /// Unique identifier for this provider type.
    ///
    /// Examples: "openai", "perplexity"
    fn provider_type(&self) -> &'static str;

    /// Create a provider instance from JSON configuration.
    fn create(&self, config: &JsonValue) -> Result<Arc<dyn CompletionProvider>, ProviderError>;

    /// Validate configuration without creating a provider.
    fn validate_config(&self, config: &JsonValue) -> Result<(), ProviderError>;

    /// Human-readable description of this provider.
    fn description(&self) -> &'static str {
        "Completion provider"
    }
}

/// Registry of available provider factories.
///
/// Keyed by provider type name; `BTreeMap` keeps listing order
/// deterministic.
#[derive(Default)]
pub struct ProviderRegistry {
    factories: BTreeMap<String, Arc<dyn ProviderFactory>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider factory, replacing any factory of the same
    /// type.
    pub fn register(&mut self, factory: Arc<dyn ProviderFactory>) {
        self.factories
            .insert(factory.provider_type().to_string(), factory);
    }

    /// Create a provider by type name.
    pub fn create(
        &self,
        provider_type: &str,
        config: &JsonValue,
    ) -> Result<Arc<dyn CompletionProvider>, ProviderError> {
        let factory = self.factories.get(provider_type).ok_or_else(|| {
            ProviderError::NotConfigured(format!(
                "unknown provider '{provider_type}', available: {}",
                self.available().join(", ")
            ))
        })?;
        factory.create(config)
    }

    /// Registered provider type names, sorted.
    pub fn available(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }

    /// Whether a provider type is registered.
    pub fn contains(&self, provider_type: &str) -> bool {
        self.factories.contains_key(provider_type)
    }
}

/// A registry with every compiled-in provider registered.
pub fn default_registry() -> ProviderRegistry {
    #[allow(unused_mut)]
    let mut registry = ProviderRegistry::new();

    #[cfg(feature = "openai")]
    registry.register(Arc::new(super::OpenAiProviderFactory));

    #[cfg(feature = "perplexity")]
    registry.register(Arc::new(super::PerplexityProviderFactory));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_is_not_configured() {
        let registry = ProviderRegistry::new();
        let result = registry.create("openai", &serde_json::json!({}));
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }

    #[cfg(feature = "openai")]
    #[test]
    fn test_default_registry_lists_openai() {
        let registry = default_registry();
        assert!(registry.contains("openai"));
        let provider = registry
            .create("openai", &serde_json::json!({ "api_key": "sk-test" }))
            .unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[cfg(feature = "perplexity")]
    #[test]
    fn test_default_registry_lists_perplexity() {
        let registry = default_registry();
        assert!(registry.contains("perplexity"));
    }
}

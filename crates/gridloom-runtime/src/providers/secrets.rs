//! Secure credential handling for completion providers.
//!
//! This module provides a centralized, type-safe way to handle API
//! credentials across all providers. Using this module ensures:
//!
//! - **No accidental logging**: credentials cannot appear in Debug output
//! - **Memory safety**: credentials are zeroed on drop
//! - **Consistent patterns**: all providers load keys the same way
//!
//! ## Usage
//!
//! ```ignore
//! use crate::providers::secrets::ApiCredential;
//!
//! // Load from environment
//! let cred = ApiCredential::from_env("OPENAI_API_KEY", "OpenAI API key")?;
//!
//! // Load from config with env fallback
//! let cred = ApiCredential::from_config_or_env(&config, "api_key", "OPENAI_API_KEY", "OpenAI API key")?;
//!
//! // Use in an HTTP header (explicit exposure)
//! request.bearer_auth(cred.expose());
//! ```

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value as JsonValue;

use super::ProviderError;

/// Where a credential was loaded from.
///
/// Useful for debugging configuration issues without exposing the
/// credential value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from configuration JSON
    Config,
    /// Loaded from an environment variable
    Environment,
    /// Provided programmatically
    Programmatic,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Config => write!(f, "config"),
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// A securely-stored API credential.
///
/// The wrapper shows `[REDACTED]` in Debug output, zeroes its memory on
/// drop via the `secrecy` crate, and requires an explicit `.expose()`
/// at the point of use.
pub struct ApiCredential {
    value: SecretString,
    source: CredentialSource,
    name: &'static str,
}

impl ApiCredential {
    /// Create a credential from a string value.
    ///
    /// The value is immediately wrapped in `SecretString` and cannot be
    /// accidentally logged after this point.
    pub fn new(value: impl Into<String>, source: CredentialSource, name: &'static str) -> Self {
        Self {
            value: SecretString::from(value.into()),
            source,
            name,
        }
    }

    /// Load a credential from an environment variable.
    pub fn from_env(var: &'static str, name: &'static str) -> Result<Self, ProviderError> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => {
                Ok(Self::new(value, CredentialSource::Environment, name))
            }
            _ => Err(ProviderError::Auth(format!("{name} not set ({var})"))),
        }
    }

    /// Load from JSON configuration with environment fallback.
    ///
    /// Checks `config[key]` first, then the environment variable, and
    /// errors when neither is set.
    pub fn from_config_or_env(
        config: &JsonValue,
        key: &str,
        var: &'static str,
        name: &'static str,
    ) -> Result<Self, ProviderError> {
        match config[key].as_str() {
            Some(value) if !value.trim().is_empty() => {
                Ok(Self::new(value, CredentialSource::Config, name))
            }
            _ => Self::from_env(var, name),
        }
    }

    /// Expose the credential value. Call this only at the point of use.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    /// Whether the stored value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().is_empty()
    }

    /// Where this credential came from.
    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_value() {
        let cred = ApiCredential::new("sk-secret", CredentialSource::Programmatic, "test key");
        let debug = format!("{cred:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn test_expose_returns_value() {
        let cred = ApiCredential::new("sk-secret", CredentialSource::Programmatic, "test key");
        assert_eq!(cred.expose(), "sk-secret");
        assert!(!cred.is_empty());
    }

    #[test]
    fn test_config_takes_precedence() {
        let config = serde_json::json!({ "api_key": "from-config" });
        let cred = ApiCredential::from_config_or_env(
            &config,
            "api_key",
            "GRIDLOOM_TEST_UNSET_VAR",
            "test key",
        )
        .unwrap();
        assert_eq!(cred.expose(), "from-config");
        assert_eq!(cred.source(), CredentialSource::Config);
    }

    #[test]
    fn test_missing_everywhere_is_auth_error() {
        let config = serde_json::json!({});
        let result = ApiCredential::from_config_or_env(
            &config,
            "api_key",
            "GRIDLOOM_TEST_UNSET_VAR",
            "test key",
        );
        assert!(matches!(result, Err(ProviderError::Auth(_))));
    }
}

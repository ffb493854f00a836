//! Run configuration for puzzle generation.

use std::time::Duration;

use thiserror::Error;

use gridloom_core::prompt::BatchSize;

use crate::providers::SamplingConfig;

/// Environment variable overriding the HTTP timeout, in humantime
/// notation ("30s", "2m").
pub const HTTP_TIMEOUT_ENV: &str = "GRIDLOOM_HTTP_TIMEOUT";

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Errors from configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Caller-supplied parameters are malformed. Always fatal to the
    /// run; detected before any remote call.
    #[error("invalid configuration: {0}")]
    InvalidInput(String),

    #[error("cannot parse {var}: {source}")]
    BadDuration {
        var: &'static str,
        source: humantime::DurationError,
    },
}

/// Tuning parameters for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Theme applied to word choice and clue phrasing; empty for none
    pub theme: String,

    /// Fetch a fresh word batch after each failed grid attempt. When
    /// false, the first batch is reused across attempts and only one
    /// provider call is made for words.
    pub regenerate: bool,

    /// Words to request per batch
    pub max_words: BatchSize,

    /// Grid-assembly attempts before giving up
    pub max_attempts: u32,

    /// Minimum themed entries the grid must contain
    pub theme_words: usize,

    /// Token budget for the word completion
    pub word_tokens: u32,

    /// Token budget for the clue completion
    pub hint_tokens: u32,

    /// Required length of every grid entry
    pub word_length: usize,

    /// Model used for candidate words
    pub word_model: String,

    /// Model used for clue text
    pub hint_model: String,

    /// Timeout applied to each provider call
    pub http_timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            theme: String::new(),
            regenerate: false,
            max_words: BatchSize::Exactly(100),
            max_attempts: 15,
            theme_words: 3,
            word_tokens: 500,
            hint_tokens: 300,
            word_length: 5,
            word_model: DEFAULT_MODEL.to_string(),
            hint_model: DEFAULT_MODEL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl GenerationConfig {
    /// Validate caller input before any remote call is made.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidInput(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.word_length < 2 {
            return Err(ConfigError::InvalidInput(format!(
                "word_length must be at least 2, got {}",
                self.word_length
            )));
        }
        if let BatchSize::Exactly(0) = self.max_words {
            return Err(ConfigError::InvalidInput(
                "max_words must be at least 1 (or unbounded)".to_string(),
            ));
        }
        if self.word_tokens == 0 || self.hint_tokens == 0 {
            return Err(ConfigError::InvalidInput(
                "token budgets must be nonzero".to_string(),
            ));
        }
        if self.theme_words > 2 * self.word_length {
            return Err(ConfigError::InvalidInput(format!(
                "theme_words {} exceeds the {} entries of a {}x{} grid",
                self.theme_words,
                2 * self.word_length,
                self.word_length,
                self.word_length
            )));
        }
        Ok(())
    }

    /// Sampling configuration for the word completion.
    pub fn word_sampling(&self) -> SamplingConfig {
        SamplingConfig::for_words(&self.word_model, self.word_tokens)
            .with_timeout(self.http_timeout)
    }

    /// Sampling configuration for the clue completion.
    pub fn hint_sampling(&self) -> SamplingConfig {
        SamplingConfig::for_hints(&self.hint_model, self.hint_tokens)
            .with_timeout(self.http_timeout)
    }

    /// Read the HTTP timeout from [`HTTP_TIMEOUT_ENV`], defaulting to
    /// 30 seconds when unset.
    pub fn http_timeout_from_env() -> Result<Duration, ConfigError> {
        match std::env::var(HTTP_TIMEOUT_ENV) {
            Ok(raw) => humantime::parse_duration(raw.trim()).map_err(|source| {
                ConfigError::BadDuration {
                    var: HTTP_TIMEOUT_ENV,
                    source,
                }
            }),
            Err(_) => Ok(DEFAULT_HTTP_TIMEOUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GenerationConfig::default();
        config.validate().unwrap();
        assert_eq!(config.max_words, BatchSize::Exactly(100));
        assert_eq!(config.max_attempts, 15);
        assert_eq!(config.word_length, 5);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = GenerationConfig {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_theme_words_bounded_by_grid_entries() {
        let config = GenerationConfig {
            theme_words: 11,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unbounded_batch_is_valid() {
        let config = GenerationConfig {
            max_words: BatchSize::Unbounded,
            ..Default::default()
        };
        config.validate().unwrap();
    }

    #[test]
    fn test_sampling_carries_timeout() {
        let config = GenerationConfig {
            http_timeout: Duration::from_secs(5),
            ..Default::default()
        };
        assert_eq!(config.word_sampling().timeout, Duration::from_secs(5));
        assert_eq!(config.hint_sampling().timeout, Duration::from_secs(5));
        assert_eq!(config.word_sampling().max_tokens, 500);
        assert_eq!(config.hint_sampling().max_tokens, 300);
    }
}

//! # gridloom-runtime
//!
//! The completion-provider side of Gridloom and the orchestration that
//! ties it to the deterministic core.
//!
//! This crate provides:
//! - [`CompletionProvider`]: the chat-completion abstraction, with
//!   OpenAI and Perplexity implementations behind feature flags
//!   (`openai`, `perplexity`, or `all-providers`)
//! - [`PuzzleOrchestrator`]: the end-to-end generation sequence with
//!   its bounded grid-assembly retry loop
//! - [`GenerationConfig`]: validated tuning parameters for one run
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gridloom_core::WordSquareAssembler;
//! use gridloom_runtime::{GenerationConfig, PuzzleOrchestrator};
//! use gridloom_runtime::providers::OpenAiProvider;
//!
//! let provider = Arc::new(OpenAiProvider::from_env()?);
//! let assembler = Arc::new(WordSquareAssembler::new());
//! let config = GenerationConfig {
//!     theme: "space".to_string(),
//!     ..Default::default()
//! };
//!
//! let orchestrator = PuzzleOrchestrator::new(provider, assembler, config);
//! let result = orchestrator.generate().await?;
//! println!("{}", serde_json::to_string(&result)?);
//! ```

pub mod config;
pub mod orchestrator;
pub mod providers;

// Re-export main types at crate root
pub use config::{ConfigError, GenerationConfig, HTTP_TIMEOUT_ENV};
pub use orchestrator::{PuzzleOrchestrator, RunError};
pub use providers::{
    ChatMessage, CompletionProvider, CompletionResponse, ProviderError, SamplingConfig, TokenUsage,
};

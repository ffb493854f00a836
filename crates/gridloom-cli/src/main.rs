//! Command-line entry point for Gridloom.
//!
//! Emits exactly one JSON object on stdout:
//! `{"solution": [...]|null, "hints": [...]|null, "success": bool}`.
//! All diagnostics go to stderr via tracing, so the two streams never
//! interleave. Pipeline failures are reported inside the JSON body
//! with `success: false`; only bootstrap problems (bad arguments,
//! missing credential) error out before JSON is produced.

use std::sync::Arc;

use anyhow::Context;
use clap::builder::BoolishValueParser;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gridloom_core::prompt::BatchSize;
use gridloom_core::result::PuzzleResult;
use gridloom_core::WordSquareAssembler;
use gridloom_runtime::providers::default_registry;
use gridloom_runtime::{GenerationConfig, PuzzleOrchestrator};

mod lexicon;

#[derive(Parser, Debug)]
#[command(
    name = "gridloom",
    version,
    about = "Generate a themed crossword puzzle with LLM-supplied words and clues"
)]
struct Cli {
    /// Theme for words and clues; empty for no thematic constraint
    #[arg(default_value = "")]
    theme: String,

    /// Fetch a fresh word batch on every retry ("true"/"false")
    #[arg(default_value = "false", value_parser = BoolishValueParser::new())]
    regenerate: bool,

    /// Words to request per batch; -1 asks for as many as the model will give
    #[arg(default_value_t = 100, allow_hyphen_values = true)]
    max_words: i64,

    /// Grid-assembly attempts before giving up
    #[arg(default_value_t = 15)]
    max_attempts: u32,

    /// Minimum themed entries the grid must contain
    #[arg(default_value_t = 3)]
    theme_words: usize,

    /// Token budget for the word completion
    #[arg(default_value_t = 500)]
    word_tokens: u32,

    /// Token budget for the clue completion
    #[arg(default_value_t = 300)]
    hint_tokens: u32,

    /// Completion backend to use
    #[arg(long, default_value = "openai")]
    provider: String,

    /// Model for candidate words
    #[arg(long, default_value = "gpt-4o-mini")]
    word_model: String,

    /// Model for clue text
    #[arg(long, default_value = "gpt-4o-mini")]
    hint_model: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = default_registry();
    let provider = registry
        .create(&cli.provider, &serde_json::json!({}))
        .with_context(|| format!("failed to configure provider '{}'", cli.provider))?;

    let config = GenerationConfig {
        theme: cli.theme,
        regenerate: cli.regenerate,
        max_words: BatchSize::from_sentinel(cli.max_words),
        max_attempts: cli.max_attempts,
        theme_words: cli.theme_words,
        word_tokens: cli.word_tokens,
        hint_tokens: cli.hint_tokens,
        word_model: cli.word_model,
        hint_model: cli.hint_model,
        http_timeout: GenerationConfig::http_timeout_from_env()?,
        ..Default::default()
    };

    let assembler = Arc::new(WordSquareAssembler::with_lexicon(
        lexicon::FILL_WORDS.iter().copied(),
    ));

    let orchestrator = PuzzleOrchestrator::new(provider, assembler, config);
    let result = match orchestrator.generate().await {
        Ok(result) => result,
        Err(err) => {
            tracing::error!(error = %err, "puzzle generation aborted");
            PuzzleResult::failed()
        }
    };

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

//! End-to-end puzzle generation: words, grid, clues.
//!
//! The orchestrator drives the bounded retry loop: acquire a word
//! batch, hand it to the grid assembler, and on failure widen the
//! exclusion set and try again, up to `max_attempts`. Once a grid
//! exists, a second completion call produces the clues. One
//! orchestrator instance serves exactly one run; the exclusion set and
//! attempt counter are local to [`PuzzleOrchestrator::generate`], so
//! concurrent runs need only separate instances.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use gridloom_core::assembler::{AssemblyError, GridAssembler, GridConstraints};
use gridloom_core::grid::Grid;
use gridloom_core::parse::{parse_hints, parse_words, ParseError};
use gridloom_core::prompt::{build_hint_prompt, build_word_prompt};
use gridloom_core::result::PuzzleResult;

use crate::config::{ConfigError, GenerationConfig};
use crate::providers::{ChatMessage, CompletionProvider, ProviderError};

/// Errors that abort a run before any grid exists.
///
/// Failures after a grid was assembled do not become a `RunError`;
/// they degrade to a partial [`PuzzleResult`] so the grid is not
/// discarded.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("completion provider failed during {stage}: {source}")]
    Provider {
        stage: &'static str,
        source: ProviderError,
    },

    #[error("completion text unusable during {stage}: {source}")]
    Parse {
        stage: &'static str,
        source: ParseError,
    },

    /// The assembler rejected its input outright (not a solvability
    /// failure). Never retried.
    #[error("grid assembly rejected input: {0}")]
    Assembly(#[from] AssemblyError),
}

/// Drives one puzzle-generation run.
pub struct PuzzleOrchestrator {
    provider: Arc<dyn CompletionProvider>,
    assembler: Arc<dyn GridAssembler>,
    config: GenerationConfig,
}

impl PuzzleOrchestrator {
    /// Create an orchestrator for one run.
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        assembler: Arc<dyn GridAssembler>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            provider,
            assembler,
            config,
        }
    }

    /// Run the full generation sequence.
    ///
    /// Returns `Err` only for failures before a grid exists: invalid
    /// configuration, provider or parse failures during word
    /// acquisition, or malformed assembler input. Attempt exhaustion
    /// and clue-stage failures return `Ok` with a failed or partial
    /// [`PuzzleResult`].
    pub async fn generate(&self) -> Result<PuzzleResult, RunError> {
        self.config.validate()?;
        info!(
            theme = %self.config.theme,
            regenerate = self.config.regenerate,
            max_attempts = self.config.max_attempts,
            theme_words = self.config.theme_words,
            "starting puzzle generation"
        );

        let constraints = GridConstraints {
            word_length: self.config.word_length,
            min_theme_words: self.config.theme_words,
        };
        let mut excluded: BTreeSet<String> = BTreeSet::new();
        let mut retained_batch: Option<Vec<String>> = None;
        let mut grid: Option<Grid> = None;

        for attempt in 1..=self.config.max_attempts {
            // regenerate=false reuses the first batch instead of
            // spending another provider call on every retry.
            let words = match retained_batch.take() {
                Some(batch) => batch,
                None => self.acquire_words(&excluded).await?,
            };

            let pool: Vec<String> = words
                .iter()
                .filter(|w| w.chars().count() == self.config.word_length)
                .cloned()
                .collect();
            debug!(
                attempt,
                received = words.len(),
                usable = pool.len(),
                "attempting grid assembly"
            );

            match self.assembler.assemble(&pool, &constraints) {
                Ok(g) => {
                    info!(attempt, "grid assembled");
                    grid = Some(g);
                    break;
                }
                Err(AssemblyError::Unsatisfiable) => {
                    warn!(attempt, "grid assembly failed");
                    excluded.extend(words.iter().cloned());
                    if !self.config.regenerate {
                        retained_batch = Some(words);
                    }
                }
                Err(err @ AssemblyError::InvalidInput(_)) => return Err(err.into()),
            }
        }

        let Some(grid) = grid else {
            warn!(
                max_attempts = self.config.max_attempts,
                "exhausted grid-assembly attempts"
            );
            return Ok(PuzzleResult::failed());
        };

        match self.generate_hints(&grid).await {
            Ok(hints) => Ok(PuzzleResult::solved(grid, hints)),
            Err(err) => {
                warn!(error = %err, "clue generation failed, returning partial result");
                Ok(PuzzleResult::partial(grid))
            }
        }
    }

    async fn acquire_words(&self, excluded: &BTreeSet<String>) -> Result<Vec<String>, RunError> {
        let prompt = build_word_prompt(
            &self.config.theme,
            self.config.max_words,
            self.config.word_length,
            excluded,
        );
        debug!(excluded = excluded.len(), "requesting candidate words");

        let response = self
            .provider
            .complete(vec![ChatMessage::user(prompt)], &self.config.word_sampling())
            .await
            .map_err(|source| RunError::Provider {
                stage: "word acquisition",
                source,
            })?;

        let words = parse_words(&response.content).map_err(|source| RunError::Parse {
            stage: "word acquisition",
            source,
        })?;
        info!(count = words.len(), "candidate words received");
        Ok(words)
    }

    /// Clue generation. Failures here must not discard the grid, so
    /// errors are reported with the same taxonomy but mapped to a
    /// partial result by the caller. A clue count that does not match
    /// the grid is a contract violation and counts as a failure.
    async fn generate_hints(&self, grid: &Grid) -> Result<Vec<String>, RunError> {
        let down = grid.down_words();
        let prompt = build_hint_prompt(grid.rows(), &down, &self.config.theme);

        let response = self
            .provider
            .complete(vec![ChatMessage::user(prompt)], &self.config.hint_sampling())
            .await
            .map_err(|source| RunError::Provider {
                stage: "hint generation",
                source,
            })?;

        let hints = parse_hints(&response.content).map_err(|source| RunError::Parse {
            stage: "hint generation",
            source,
        })?;

        if hints.len() != grid.expected_hint_count() {
            warn!(
                got = hints.len(),
                expected = grid.expected_hint_count(),
                "clue count does not match grid"
            );
            return Err(RunError::Parse {
                stage: "hint generation",
                source: ParseError::EmptyResult,
            });
        }
        Ok(hints)
    }
}

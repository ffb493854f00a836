//! The grid-assembly seam and a default word-square assembler.
//!
//! The orchestrator treats grid assembly as an opaque, potentially
//! expensive collaborator: word pool in, filled grid or failure out.
//! [`WordSquareAssembler`] is the built-in collaborator; callers with a
//! real crossword engine substitute their own [`GridAssembler`].

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use crate::grid::{Grid, GridError};

/// Errors from grid assembly.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// No valid grid exists for the supplied pool. Recoverable: the
    /// orchestrator retries with a fresh word batch.
    #[error("no grid can be filled from the supplied word pool")]
    Unsatisfiable,

    /// The caller handed over malformed input. Never retried.
    #[error("invalid assembly input: {0}")]
    InvalidInput(String),
}

impl From<GridError> for AssemblyError {
    fn from(err: GridError) -> Self {
        AssemblyError::InvalidInput(err.to_string())
    }
}

/// Constraints a grid must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConstraints {
    /// Side length of the square; every entry has this length.
    pub word_length: usize,

    /// Minimum number of entries (across + down combined) that must
    /// come from the themed pool rather than the assembler's own
    /// fill lexicon.
    pub min_theme_words: usize,
}

/// The grid-assembly collaborator contract.
pub trait GridAssembler: Send + Sync {
    /// Fill a grid from the pool under the given constraints.
    fn assemble(&self, pool: &[String], constraints: &GridConstraints)
        -> Result<Grid, AssemblyError>;
}

/// Deterministic backtracking word-square filler.
///
/// Builds an N×N square in which every row and every column is a word,
/// drawn from the themed pool or from the assembler's fill lexicon.
/// Candidate order is sorted, so the same pool always yields the same
/// square (or the same failure).
#[derive(Debug, Clone, Default)]
pub struct WordSquareAssembler {
    lexicon: Vec<String>,
}

impl WordSquareAssembler {
    /// An assembler with no fill lexicon; every entry must come from
    /// the pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// An assembler that may complete squares with non-themed fill
    /// words, subject to `min_theme_words`.
    pub fn with_lexicon<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lexicon: words.into_iter().map(|w| w.into().to_uppercase()).collect(),
        }
    }
}

impl GridAssembler for WordSquareAssembler {
    fn assemble(
        &self,
        pool: &[String],
        constraints: &GridConstraints,
    ) -> Result<Grid, AssemblyError> {
        let n = constraints.word_length;
        if n < 2 {
            return Err(AssemblyError::InvalidInput(format!(
                "word length must be at least 2, got {n}"
            )));
        }
        if constraints.min_theme_words > 2 * n {
            return Err(AssemblyError::InvalidInput(format!(
                "min_theme_words {} exceeds the {} entries of a {n}x{n} square",
                constraints.min_theme_words,
                2 * n
            )));
        }

        let themed: BTreeSet<String> = pool
            .iter()
            .filter(|w| w.chars().count() == n && w.chars().all(|c| c.is_alphabetic()))
            .map(|w| w.to_uppercase())
            .collect();
        if themed.is_empty() {
            return Err(AssemblyError::Unsatisfiable);
        }

        let mut candidates: Vec<String> = themed.iter().cloned().collect();
        candidates.extend(
            self.lexicon
                .iter()
                .filter(|w| w.chars().count() == n && !themed.contains(*w))
                .cloned(),
        );
        candidates.sort();
        candidates.dedup();
        debug!(
            themed = themed.len(),
            candidates = candidates.len(),
            side = n,
            "starting word-square search"
        );

        let search = Search {
            candidates: &candidates,
            themed: &themed,
            side: n,
            min_theme_words: constraints.min_theme_words,
        };
        let mut rows: Vec<&str> = Vec::with_capacity(n);
        match search.fill(&mut rows) {
            Some(rows) => Ok(Grid::new(rows)?),
            None => Err(AssemblyError::Unsatisfiable),
        }
    }
}

struct Search<'a> {
    candidates: &'a [String],
    themed: &'a BTreeSet<String>,
    side: usize,
    min_theme_words: usize,
}

impl<'a> Search<'a> {
    fn fill(&self, rows: &mut Vec<&'a str>) -> Option<Vec<String>> {
        if rows.len() == self.side {
            return self.complete(rows);
        }

        for word in self.candidates {
            if rows.contains(&word.as_str()) {
                continue;
            }
            if !self.columns_viable(rows, word) {
                continue;
            }
            rows.push(word.as_str());
            if let Some(done) = self.fill(rows) {
                return Some(done);
            }
            rows.pop();
        }
        None
    }

    /// After placing `next` as the following row, every column prefix
    /// must still extend to some candidate word.
    fn columns_viable(&self, rows: &[&str], next: &str) -> bool {
        let mut prefix = String::with_capacity(rows.len() + 1);
        for col in 0..self.side {
            prefix.clear();
            for row in rows {
                prefix.push(row.chars().nth(col).unwrap_or(' '));
            }
            prefix.push(next.chars().nth(col).unwrap_or(' '));
            if !has_with_prefix(self.candidates, &prefix) {
                return false;
            }
        }
        true
    }

    /// A full set of rows succeeds only if every column is itself a
    /// candidate word and enough entries are themed.
    fn complete(&self, rows: &[&'a str]) -> Option<Vec<String>> {
        let columns: Vec<String> = (0..self.side)
            .map(|col| rows.iter().map(|r| r.chars().nth(col).unwrap_or(' ')).collect())
            .collect();
        for column in &columns {
            if self.candidates.binary_search(column).is_err() {
                return None;
            }
        }

        let theme_count = rows
            .iter()
            .filter(|r| self.themed.contains(**r))
            .count()
            + columns.iter().filter(|c| self.themed.contains(*c)).count();
        if theme_count < self.min_theme_words {
            return None;
        }

        Some(rows.iter().map(|r| r.to_string()).collect())
    }
}

fn has_with_prefix(sorted: &[String], prefix: &str) -> bool {
    let start = sorted.partition_point(|w| w.as_str() < prefix);
    sorted.get(start).is_some_and(|w| w.starts_with(prefix))
}

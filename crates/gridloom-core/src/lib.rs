//! # gridloom-core
//!
//! Deterministic building blocks for themed crossword generation.
//!
//! This crate contains everything that does NOT talk to a completion
//! provider:
//! - The [`Grid`] letter-matrix model and its across/down word derivation
//! - Prompt text construction for the two completion tasks
//! - Parsers that turn raw completion text into word lists and clue lists
//! - The [`GridAssembler`] seam and a default word-square assembler
//! - The [`PuzzleResult`] value returned to callers
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: same input always produces same output
//! 2. **No network**: all completion calls live in `gridloom-runtime`
//! 3. **Localized text assumptions**: every assumption about the shape
//!    of completion output lives in the [`parse`] module
//!
//! ## Example
//!
//! ```rust
//! use gridloom_core::parse::parse_words;
//!
//! let words = parse_words("cat,,dog , EEL").unwrap();
//! assert_eq!(words, vec!["CAT", "DOG", "EEL"]);
//! ```

pub mod assembler;
pub mod grid;
pub mod parse;
pub mod prompt;
pub mod result;

// Re-export main types at crate root
pub use assembler::{AssemblyError, GridAssembler, GridConstraints, WordSquareAssembler};
pub use grid::{Grid, GridError};
pub use parse::{parse_hints, parse_words, ParseError};
pub use prompt::{build_hint_prompt, build_word_prompt, BatchSize};
pub use result::PuzzleResult;

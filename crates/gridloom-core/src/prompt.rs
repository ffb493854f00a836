//! Instruction text for the two completion tasks.
//!
//! Both builders are pure functions of their inputs. The exact wording
//! matters less than two hard requirements the parsers rely on: word
//! batches must be uppercase and comma-separated, and clues must come
//! one per line in the order the words were listed.

use std::collections::BTreeSet;

/// At most this many excluded words are listed in a word prompt.
///
/// The cap bounds prompt size; exclusion is a bias, not a guarantee,
/// so dropping the tail is acceptable.
pub const MAX_EXCLUSIONS_IN_PROMPT: usize = 20;

/// How many candidate words to request in one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSize {
    /// Ask for exactly this many words.
    Exactly(u32),

    /// Ask the model for as many words as it can produce.
    Unbounded,
}

impl BatchSize {
    /// Map the CLI sentinel (`-1` means unbounded) to a batch size.
    pub fn from_sentinel(raw: i64) -> Self {
        if raw < 0 {
            Self::Unbounded
        } else {
            Self::Exactly(raw as u32)
        }
    }
}

/// Build the instruction text for candidate-word generation.
///
/// The theme clause appears only when `theme` is non-empty, and the
/// exclusion clause only when `excluded` is non-empty (truncated to
/// [`MAX_EXCLUSIONS_IN_PROMPT`] entries).
pub fn build_word_prompt(
    theme: &str,
    batch: BatchSize,
    word_length: usize,
    excluded: &BTreeSet<String>,
) -> String {
    let mut prompt = match batch {
        BatchSize::Exactly(n) => format!("Generate exactly {n} different"),
        BatchSize::Unbounded => "Generate as many as you can different".to_string(),
    };
    prompt.push_str(&format!(
        " real, {word_length}-letter (must be an actual word or commonly used abbreviation) \
         English words that could be used in a crossword puzzle."
    ));
    if !theme.is_empty() {
        prompt.push_str(&format!(" Must be related to '{theme}'."));
    }
    prompt.push_str(" Use common English words that often appear in crosswords.");
    prompt.push_str(" Return only uppercase words, separated by commas, nothing else.");
    prompt.push_str(" Try to reference recent events, popular culture, and other current events.");
    if !excluded.is_empty() {
        let listed: Vec<&str> = excluded
            .iter()
            .take(MAX_EXCLUSIONS_IN_PROMPT)
            .map(String::as_str)
            .collect();
        prompt.push_str(&format!(" Exclude: {}.", listed.join(", ")));
    }
    prompt
}

/// Build the instruction text for clue generation.
///
/// Words are listed across-first then down, and the prompt asks for one
/// clue per line in that order; the hint parser depends on this.
pub fn build_hint_prompt(across: &[String], down: &[String], theme: &str) -> String {
    let words: Vec<&str> = across.iter().chain(down.iter()).map(String::as_str).collect();

    let mut prompt =
        "Give me a clue for each of the following words in the style of the NYT mini crossword."
            .to_string();
    if !theme.is_empty() {
        prompt.push_str(&format!(
            " If the word can relate to '{theme}', make sure to include that in the clue."
        ));
    }
    prompt.push_str(
        " Return one clue per line, in the same order as the words, with no extra text.",
    );
    prompt.push_str(&format!(" Words: {}.", words.join(", ")));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excluded(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_exact_count_phrasing() {
        let prompt = build_word_prompt("", BatchSize::Exactly(100), 5, &BTreeSet::new());
        assert!(prompt.starts_with("Generate exactly 100 different"));
        assert!(prompt.contains("5-letter"));
        assert!(prompt.contains("uppercase words, separated by commas"));
    }

    #[test]
    fn test_unbounded_phrasing() {
        let prompt = build_word_prompt("", BatchSize::Unbounded, 5, &BTreeSet::new());
        assert!(prompt.starts_with("Generate as many as you can different"));
        assert!(!prompt.contains("exactly"));
    }

    #[test]
    fn test_theme_clause_only_when_themed() {
        let themed = build_word_prompt("space", BatchSize::Exactly(10), 5, &BTreeSet::new());
        assert!(themed.contains("Must be related to 'space'."));

        let plain = build_word_prompt("", BatchSize::Exactly(10), 5, &BTreeSet::new());
        assert!(!plain.contains("Must be related"));
    }

    #[test]
    fn test_exclusion_clause_lists_words() {
        let prompt = build_word_prompt("", BatchSize::Exactly(10), 5, &excluded(&["ABBEY", "ZEBRA"]));
        assert!(prompt.contains("Exclude: ABBEY, ZEBRA."));

        let prompt = build_word_prompt("", BatchSize::Exactly(10), 5, &BTreeSet::new());
        assert!(!prompt.contains("Exclude"));
    }

    #[test]
    fn test_exclusion_clause_truncates_at_cap() {
        let many: BTreeSet<String> = (0..50).map(|i| format!("WORD{i:02}")).collect();
        let prompt = build_word_prompt("", BatchSize::Exactly(10), 5, &many);

        let clause = prompt.split("Exclude: ").nth(1).unwrap();
        assert_eq!(clause.matches("WORD").count(), MAX_EXCLUSIONS_IN_PROMPT);
    }

    #[test]
    fn test_hint_prompt_orders_across_then_down() {
        let across = vec!["CAT".to_string(), "ARE".to_string()];
        let down = vec!["TEN".to_string()];
        let prompt = build_hint_prompt(&across, &down, "");

        assert!(prompt.contains("Words: CAT, ARE, TEN."));
        assert!(prompt.contains("one clue per line"));
    }

    #[test]
    fn test_hint_prompt_theme_clause() {
        let words = vec!["CAT".to_string()];
        let themed = build_hint_prompt(&words, &[], "pets");
        assert!(themed.contains("relate to 'pets'"));

        let plain = build_hint_prompt(&words, &[], "");
        assert!(!plain.contains("relate to"));
    }

    #[test]
    fn test_sentinel_mapping() {
        assert_eq!(BatchSize::from_sentinel(-1), BatchSize::Unbounded);
        assert_eq!(BatchSize::from_sentinel(100), BatchSize::Exactly(100));
        assert_eq!(BatchSize::from_sentinel(0), BatchSize::Exactly(0));
    }
}

//! Parsers for raw completion text.
//!
//! Completion output is free text with only soft formatting guarantees.
//! Every assumption about its shape lives here: the comma delimiter for
//! word batches, the line delimiter for clues, and the ordinal-list
//! prefix some models echo back despite being asked not to. Provider
//! formatting drift is fixed by updating these two functions, nowhere
//! else.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// A leading `"N. "` or `"NN. "` list marker, anchored to line start.
    static ref ORDINAL_PREFIX: Regex = Regex::new(r"^[0-9]{1,2}\. ").unwrap();
}

/// Errors from completion-text parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The provider call succeeded but the text yielded zero usable
    /// items. The caller must treat this as a generation failure, not
    /// proceed with an empty list.
    #[error("completion text yielded no usable items")]
    EmptyResult,
}

/// Parse a candidate-word completion into normalized words.
///
/// Splits on commas, trims each token, drops empty tokens, and
/// uppercases survivors. No length filtering happens here; rejecting
/// words of the wrong length is the grid-assembly caller's concern.
pub fn parse_words(raw: &str) -> Result<Vec<String>, ParseError> {
    let words: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_uppercase)
        .collect();

    if words.is_empty() {
        return Err(ParseError::EmptyResult);
    }
    Ok(words)
}

/// Parse a clue completion into ordered clue strings.
///
/// Splits on line breaks, trims each line, drops blank lines, and
/// strips exactly one leading ordinal marker (`"1. "`, `"12. "`) when
/// present. Line order is preserved; it corresponds 1:1 to the
/// across-then-down word order the prompt was built with.
pub fn parse_hints(raw: &str) -> Result<Vec<String>, ParseError> {
    let hints: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| ORDINAL_PREFIX.replace(line, "").into_owned())
        .collect();

    if hints.is_empty() {
        return Err(ParseError::EmptyResult);
    }
    Ok(hints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_words_normalizes() {
        assert_eq!(
            parse_words("cat,,dog , EEL").unwrap(),
            vec!["CAT", "DOG", "EEL"]
        );
    }

    #[test]
    fn test_parse_words_empty_input_fails() {
        assert_eq!(parse_words(""), Err(ParseError::EmptyResult));
        assert_eq!(parse_words(" , ,, "), Err(ParseError::EmptyResult));
    }

    #[test]
    fn test_parse_hints_strips_ordinal_prefixes() {
        assert_eq!(
            parse_hints("1. A feline\n2. A canine").unwrap(),
            vec!["A feline", "A canine"]
        );
        assert_eq!(
            parse_hints("12. Two-digit marker").unwrap(),
            vec!["Two-digit marker"]
        );
    }

    #[test]
    fn test_parse_hints_passes_unmarked_lines_through() {
        assert_eq!(
            parse_hints("A feline\n\n  A canine  ").unwrap(),
            vec!["A feline", "A canine"]
        );
    }

    #[test]
    fn test_parse_hints_strips_only_the_marker() {
        // Three-digit numbers are not list markers for a 10-clue puzzle.
        assert_eq!(parse_hints("100. Century").unwrap(), vec!["100. Century"]);
        // A bare number-dot without the space is left alone.
        assert_eq!(parse_hints("1.Clue").unwrap(), vec!["1.Clue"]);
        // Only the first marker goes; inner ones stay.
        assert_eq!(
            parse_hints("1. See 2. Across").unwrap(),
            vec!["See 2. Across"]
        );
    }

    #[test]
    fn test_parse_hints_empty_input_fails() {
        assert_eq!(parse_hints(""), Err(ParseError::EmptyResult));
        assert_eq!(parse_hints("\n  \n"), Err(ParseError::EmptyResult));
    }

    #[test]
    fn test_parse_hints_preserves_order() {
        let hints = parse_hints("1. first\n2. second\n3. third").unwrap();
        assert_eq!(hints, vec!["first", "second", "third"]);
    }

    proptest! {
        #[test]
        fn prop_parse_words_idempotent(raw in "[a-zA-Z ,]{1,200}") {
            if let Ok(words) = parse_words(&raw) {
                let rejoined = words.join(",");
                prop_assert_eq!(parse_words(&rejoined).unwrap(), words);
            }
        }

        #[test]
        fn prop_parse_words_output_is_clean(raw in "[a-zA-Z ,]{1,200}") {
            if let Ok(words) = parse_words(&raw) {
                for word in &words {
                    prop_assert!(!word.is_empty());
                    prop_assert_eq!(word.trim(), word.as_str());
                    prop_assert_eq!(&word.to_uppercase(), word);
                }
            }
        }

        #[test]
        fn prop_parse_hints_strips_exact_prefix(
            n in 1u32..=99,
            clue in "[A-Za-z][A-Za-z ']{0,40}[A-Za-z]",
        ) {
            let hints = parse_hints(&format!("{n}. {clue}")).unwrap();
            prop_assert_eq!(hints, vec![clue]);
        }
    }
}

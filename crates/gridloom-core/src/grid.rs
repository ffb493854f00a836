//! The letter-matrix model for a filled puzzle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from grid construction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {index} has length {found}, expected {expected}")]
    RaggedRow {
        index: usize,
        found: usize,
        expected: usize,
    },

    #[error("row {index} contains a blank or non-letter cell")]
    IncompleteCell { index: usize },
}

/// A fully populated letter matrix.
///
/// Rows are the across words, read top to bottom; down words are the
/// column-wise read of the same matrix. Construction validates that
/// every row has identical length and that no cell is blank, so a
/// `Grid` in hand is always a complete, rectangular fill.
///
/// Serializes as a plain JSON array of row strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<String>,
}

impl Grid {
    /// Build a grid from row strings, validating shape and fill.
    pub fn new(rows: Vec<String>) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.chars().count()).ok_or(GridError::Empty)?;
        if width == 0 {
            return Err(GridError::Empty);
        }
        for (index, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    index,
                    found,
                    expected: width,
                });
            }
            if !row.chars().all(|c| c.is_alphabetic()) {
                return Err(GridError::IncompleteCell { index });
            }
        }
        Ok(Self { rows })
    }

    /// The across words, in row order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows (and therefore across words).
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (and therefore down words).
    pub fn width(&self) -> usize {
        self.rows[0].chars().count()
    }

    /// The down words, derived by reading the matrix column-wise.
    pub fn down_words(&self) -> Vec<String> {
        let cells: Vec<Vec<char>> = self.rows.iter().map(|r| r.chars().collect()).collect();
        (0..self.width())
            .map(|col| cells.iter().map(|row| row[col]).collect())
            .collect()
    }

    /// One clue per across word plus one per down word.
    pub fn expected_hint_count(&self) -> usize {
        self.height() + self.width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::new(rows.iter().map(|r| r.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_down_words_are_column_wise() {
        let g = grid(&["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY"]);
        assert_eq!(
            g.down_words(),
            vec!["AFKPU", "BGLQV", "CHMRW", "DINSX", "EJOTY"]
        );
    }

    #[test]
    fn test_hint_count_is_height_plus_width() {
        let g = grid(&["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY"]);
        assert_eq!(g.expected_hint_count(), 10);

        let g = grid(&["ABC", "DEF"]);
        assert_eq!(g.expected_hint_count(), 5);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Grid::new(vec!["ABC".to_string(), "DE".to_string()]);
        assert_eq!(
            result,
            Err(GridError::RaggedRow {
                index: 1,
                found: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn test_blank_cells_rejected() {
        let result = Grid::new(vec!["A C".to_string(), "DEF".to_string()]);
        assert_eq!(result, Err(GridError::IncompleteCell { index: 0 }));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert_eq!(Grid::new(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::new(vec![String::new()]), Err(GridError::Empty));
    }

    #[test]
    fn test_serializes_as_row_array() {
        let g = grid(&["AB", "BA"]);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"["AB","BA"]"#);
    }
}

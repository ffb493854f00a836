//! The value a generation run hands back to callers.

use serde::Serialize;

use crate::grid::Grid;

/// Outcome of one puzzle-generation run.
///
/// Immutable once built; the constructors are the only way to get one,
/// so `success` is always consistent with the presence of both fields.
/// A run that produced a grid but no clues stays `success: false` — a
/// partial result is never upgraded.
///
/// Serializes to the wire shape consumers expect:
/// `{"solution": [...]|null, "hints": [...]|null, "success": bool}`.
#[derive(Debug, Clone, Serialize)]
pub struct PuzzleResult {
    pub solution: Option<Grid>,
    pub hints: Option<Vec<String>>,
    pub success: bool,
}

impl PuzzleResult {
    /// A complete puzzle: grid plus clues.
    pub fn solved(solution: Grid, hints: Vec<String>) -> Self {
        Self {
            solution: Some(solution),
            hints: Some(hints),
            success: true,
        }
    }

    /// A grid was assembled but clue generation failed.
    pub fn partial(solution: Grid) -> Self {
        Self {
            solution: Some(solution),
            hints: None,
            success: false,
        }
    }

    /// Nothing usable was produced.
    pub fn failed() -> Self {
        Self {
            solution: None,
            hints: None,
            success: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(vec!["AB".to_string(), "BA".to_string()]).unwrap()
    }

    #[test]
    fn test_success_requires_both_fields() {
        let solved = PuzzleResult::solved(grid(), vec!["a".into(), "b".into()]);
        assert!(solved.success);

        let partial = PuzzleResult::partial(grid());
        assert!(partial.solution.is_some());
        assert!(partial.hints.is_none());
        assert!(!partial.success);

        let failed = PuzzleResult::failed();
        assert!(failed.solution.is_none());
        assert!(!failed.success);
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_string(&PuzzleResult::failed()).unwrap();
        assert_eq!(json, r#"{"solution":null,"hints":null,"success":false}"#);

        let json =
            serde_json::to_string(&PuzzleResult::solved(grid(), vec!["x".into()])).unwrap();
        assert_eq!(json, r#"{"solution":["AB","BA"],"hints":["x"],"success":true}"#);
    }
}

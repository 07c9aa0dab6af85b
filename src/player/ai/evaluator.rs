//! Evaluator trait for cell scoring
//!
//! Defines a common interface for different scoring strategies.

use crate::core::{Grid, Position};

/// Trait for scoring a candidate cell
pub trait Evaluator: Send + Sync {
    /// Score an empty cell of `grid` from the evaluator's own side.
    ///
    /// Higher is better. Occupied cells are never passed in.
    fn score(&self, grid: &Grid, pos: Position) -> f64;

    /// Get evaluator name for debugging
    fn name(&self) -> &str;
}

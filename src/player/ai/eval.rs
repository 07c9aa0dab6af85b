//! # Line Evaluation Module
//!
//! Scores an empty cell by looking along the four line directions through
//! it. The score of a cell is the sum of its four per-direction scores.
//!
//! ## Per-direction scoring
//! Each of the two senses of a direction is first classified with a
//! one-step lookahead: the adjacent cell if it holds a stone, otherwise the
//! cell behind it. A side that leans to our own stones extends our run, a
//! side that leans to the opponent extends theirs. The walk then goes up to
//! five cells, tolerating a single gap per run, and records how many ends of
//! the run are blocked (by an enemy stone or the board edge).
//!
//! ## Values
//! Own lines always outrank blocking the same length of opponent line:
//! four 10000 / 9000, three 1000 / 900, two 100 / 90, one 10 / 9.
//! A run that bridged a gap is worth half.

use super::evaluator::Evaluator;
use crate::core::{Grid, Position, Stone};
use crate::logic::DIRECTIONS;

const SCORE_FOUR: f64 = 10000.0;
const SCORE_FOUR_BLOCK: f64 = 9000.0;
const SCORE_THREE: [f64; 2] = [1000.0, 100.0];
const SCORE_THREE_BLOCK: [f64; 2] = [900.0, 90.0];
const SCORE_TWO: [f64; 2] = [100.0, 10.0];
const SCORE_TWO_BLOCK: [f64; 2] = [90.0, 9.0];
const SCORE_ONE: f64 = 10.0;
const SCORE_ONE_BLOCK: f64 = 9.0;

/// How far a run is followed from the scored cell.
const REACH: i32 = 5;

/// Gap bookkeeping of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gap {
    None,
    /// An empty cell was passed but no stone followed it yet.
    Pending,
    /// A stone followed the gap: the run is split.
    Bridged,
}

/// One run along a direction (ours or the opponent's).
#[derive(Debug, Clone, Copy)]
struct Run {
    count: u32,
    blocked: u32,
    gap: Gap,
}

impl Run {
    fn new() -> Self {
        Run {
            count: 0,
            blocked: 0,
            gap: Gap::None,
        }
    }

    fn value(&self, four: f64, three: [f64; 2], two: [f64; 2], one: f64) -> Option<f64> {
        let by_ends = |table: [f64; 2]| match self.blocked {
            0 => table[0],
            1 => table[1],
            _ => 0.0,
        };
        match self.count {
            4 => Some(four),
            3 => Some(by_ends(three)),
            2 => Some(by_ends(two)),
            1 => Some(one),
            _ => None,
        }
    }
}

/// Which run a side of the scored cell extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lean {
    Mine,
    Theirs,
}

/// Heuristic line evaluator for one side.
#[derive(Debug, Clone, Copy)]
pub struct LineEvaluator {
    me: Stone,
}

impl LineEvaluator {
    pub fn new(me: Stone) -> Self {
        LineEvaluator { me }
    }

    /// Sum of the four per-direction scores at `pos`.
    pub fn score_point(&self, grid: &Grid, pos: Position) -> f64 {
        DIRECTIONS
            .iter()
            .map(|&(dx, dy)| self.score_direction(grid, pos, dx, dy))
            .sum()
    }

    /// Score of `pos` along one line direction (both senses).
    pub fn score_direction(&self, grid: &Grid, pos: Position, dx: i32, dy: i32) -> f64 {
        let mut mine = Run::new();
        let mut theirs = Run::new();

        for (sx, sy) in [(dx, dy), (-dx, -dy)] {
            if let Some(lean) = self.lean(grid, pos, sx, sy) {
                let run = match lean {
                    Lean::Mine => &mut mine,
                    Lean::Theirs => &mut theirs,
                };
                self.walk(grid, pos, sx, sy, lean, run);
            }
            // A trailing gap on the first side does not split the run.
            for run in [&mut mine, &mut theirs] {
                if run.gap == Gap::Pending {
                    run.gap = Gap::None;
                }
            }
        }

        let score = Self::prioritized(&mine, &theirs).unwrap_or(0.0);
        if mine.gap == Gap::Bridged || theirs.gap == Gap::Bridged {
            score / 2.0
        } else {
            score
        }
    }

    // First match wins, walking down the length ladder from four to one.
    fn prioritized(mine: &Run, theirs: &Run) -> Option<f64> {
        for len in (1..=4).rev() {
            if mine.count == len {
                return mine.value(SCORE_FOUR, SCORE_THREE, SCORE_TWO, SCORE_ONE);
            }
            if theirs.count == len {
                return theirs.value(
                    SCORE_FOUR_BLOCK,
                    SCORE_THREE_BLOCK,
                    SCORE_TWO_BLOCK,
                    SCORE_ONE_BLOCK,
                );
            }
        }
        None
    }

    // 隣が空なら一つ先まで覗く
    fn lean(&self, grid: &Grid, pos: Position, sx: i32, sy: i32) -> Option<Lean> {
        for step in 1..=2 {
            let stone = grid.get(grid.offset(pos, sx, sy, step)?)?;
            if stone == self.me {
                return Some(Lean::Mine);
            }
            if stone == self.me.opponent() {
                return Some(Lean::Theirs);
            }
        }
        None
    }

    fn walk(&self, grid: &Grid, pos: Position, sx: i32, sy: i32, lean: Lean, run: &mut Run) {
        let own = match lean {
            Lean::Mine => self.me,
            Lean::Theirs => self.me.opponent(),
        };
        for step in 1..=REACH {
            let stone = match grid.offset(pos, sx, sy, step).and_then(|p| grid.get(p)) {
                Some(stone) => stone,
                None => {
                    // 盤端
                    run.blocked += 1;
                    break;
                }
            };
            if stone == own {
                run.count += 1;
                if run.gap == Gap::Pending {
                    run.gap = Gap::Bridged;
                }
            } else if stone.is_empty() {
                if run.gap == Gap::None {
                    run.gap = Gap::Pending;
                } else {
                    break;
                }
            } else {
                run.blocked += 1;
                break;
            }
        }
    }
}

impl Evaluator for LineEvaluator {
    fn score(&self, grid: &Grid, pos: Position) -> f64 {
        self.score_point(grid, pos)
    }

    fn name(&self) -> &str {
        "line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn grid_with(size: usize, stones: &[((usize, usize), Stone)]) -> Grid {
        let mut grid = Grid::new(size);
        for &((x, y), s) in stones {
            grid.set(Position::new(x, y), s);
        }
        grid
    }

    fn row(xs: &[usize], y: usize, s: Stone) -> Vec<((usize, usize), Stone)> {
        xs.iter().map(|&x| ((x, y), s)).collect()
    }

    #[test]
    fn test_open_four_extension() {
        let grid = grid_with(19, &row(&[5, 6, 7, 8], 9, Stone::White));
        let ai = LineEvaluator::new(Stone::White);
        assert_eq!(ai.score_direction(&grid, Position::new(4, 9), 1, 0), 10000.0);
        // 他の方向は空なので合計も同じ
        assert_eq!(ai.score_point(&grid, Position::new(4, 9)), 10000.0);
        assert_eq!(ai.score(&grid, Position::new(4, 9)), 10000.0);
    }

    #[test]
    fn test_block_opponent_four() {
        let grid = grid_with(19, &row(&[5, 6, 7, 8], 9, Stone::Black));
        let ai = LineEvaluator::new(Stone::White);
        assert_eq!(ai.score_point(&grid, Position::new(9, 9)), 9000.0);
    }

    #[test]
    fn test_three_by_blocked_ends() {
        let ai = LineEvaluator::new(Stone::White);
        let open = grid_with(19, &row(&[5, 6, 7], 9, Stone::White));
        assert_eq!(ai.score_direction(&open, Position::new(4, 9), 1, 0), 1000.0);

        let mut stones = row(&[5, 6, 7], 9, Stone::White);
        stones.push(((8, 9), Stone::Black));
        let capped = grid_with(19, &stones);
        assert_eq!(ai.score_direction(&capped, Position::new(4, 9), 1, 0), 100.0);

        // 盤端も一つの塞がりとして数える
        let edge = grid_with(19, &row(&[1, 2, 3], 0, Stone::White));
        assert_eq!(ai.score_direction(&edge, Position::new(4, 0), 1, 0), 100.0);
    }

    #[test]
    fn test_opponent_three() {
        let ai = LineEvaluator::new(Stone::White);
        let grid = grid_with(19, &row(&[5, 6, 7], 9, Stone::Black));
        assert_eq!(ai.score_direction(&grid, Position::new(4, 9), 1, 0), 900.0);
    }

    #[test]
    fn test_gap_halves_score() {
        let ai = LineEvaluator::new(Stone::White);
        let grid = grid_with(19, &row(&[5, 7], 9, Stone::White));
        assert_eq!(ai.score_direction(&grid, Position::new(4, 9), 1, 0), 50.0);
    }

    #[test]
    fn test_single_stones() {
        let ai = LineEvaluator::new(Stone::White);
        let mine = grid_with(19, &[((5, 9), Stone::White)]);
        assert_eq!(ai.score_point(&mine, Position::new(4, 9)), 10.0);
        let theirs = grid_with(19, &[((5, 9), Stone::Black)]);
        assert_eq!(ai.score_point(&theirs, Position::new(4, 9)), 9.0);
        // 一つ空けた石も覗き込みで拾うが、空きを挟むので半分
        assert_eq!(ai.score_point(&theirs, Position::new(3, 9)), 4.5);
        // 二つ空くと届かない
        assert_eq!(ai.score_point(&theirs, Position::new(2, 9)), 0.0);
    }

    #[test]
    fn test_own_line_outranks_block() {
        let ai = LineEvaluator::new(Stone::White);
        let mut stones = row(&[5, 6, 7], 9, Stone::White);
        stones.extend(row(&[1, 2, 3], 9, Stone::Black));
        let grid = grid_with(19, &stones);
        assert_eq!(ai.score_direction(&grid, Position::new(4, 9), 1, 0), 1000.0);
    }

    #[test]
    fn test_empty_grid_scores_zero() {
        let ai = LineEvaluator::new(Stone::Black);
        let grid = Grid::new(7);
        assert!(grid.empty_cells().all(|p| ai.score_point(&grid, p) == 0.0));
    }
}

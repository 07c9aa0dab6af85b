use super::error::GameError;
use super::grid::Grid;
use super::r#move::{Move, Outcome};
use super::types::{Player, Position, Stone};
use crate::logic::is_five;
use tracing::{debug, info};

pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 255;

/// 盤面
///
/// The grid always equals `history[..shown]` replayed onto an empty grid.
/// `shown` only lags behind `history.len()` while a finished game is being
/// browsed with [`Board::replay_to`].
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    /// 棋譜
    history: Vec<Move>,
    shown: usize,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) || size % 2 == 0 {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Board {
            grid: Grid::new(size),
            history: Vec::with_capacity(size * size),
            shown: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn get(&self, pos: Position) -> Option<Stone> {
        self.grid.get(pos)
    }

    /// Read-only view of the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current grid.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of history moves currently applied to the grid.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.shown.checked_sub(1).map(|i| &self.history[i])
    }

    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    pub fn can_place(&self, pos: Position) -> bool {
        self.grid.is_empty_at(pos)
    }

    /// 着手して勝敗を判定する
    pub fn place(&mut self, player: &Player, pos: Position) -> Result<Outcome, GameError> {
        match self.grid.get(pos) {
            None => {
                return Err(GameError::OutOfBounds {
                    position: pos,
                    size: self.size(),
                })
            }
            Some(Stone::Empty) => {}
            Some(_) => return Err(GameError::CellOccupied(pos)),
        }

        self.discard_unshown();
        self.grid.set(pos, player.stone());
        self.history.push(Move::new(player.clone(), pos));
        self.shown = self.history.len();
        debug!(player = %player, position = %pos, "stone placed");

        if is_five(&self.grid, pos) {
            info!(player = %player, moves = self.history.len(), "five in a row");
            Ok(Outcome::Winner(player.clone()))
        } else {
            Ok(Outcome::NoWinner)
        }
    }

    /// 一手戻す
    pub fn undo(&mut self) -> bool {
        self.discard_unshown();
        match self.history.pop() {
            Some(mv) => {
                self.grid.set(mv.position, Stone::Empty);
                self.shown = self.history.len();
                debug!(undone = %mv, "move undone");
                true
            }
            None => false,
        }
    }

    /// 指定手数まで並べ直す (棋譜は切り詰めない)
    pub fn replay_to(&mut self, step: usize) -> bool {
        if step > self.history.len() {
            return false;
        }
        self.grid.clear();
        for mv in &self.history[..step] {
            self.grid.set(mv.position, mv.player.stone());
        }
        self.shown = step;
        true
    }

    // Moves past the replay cursor are dropped before the position is edited.
    fn discard_unshown(&mut self) {
        if self.shown < self.history.len() {
            debug!(
                kept = self.shown,
                dropped = self.history.len() - self.shown,
                "truncating history at replay cursor"
            );
            self.history.truncate(self.shown);
        }
    }
}

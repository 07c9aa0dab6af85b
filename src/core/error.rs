use super::types::{PlayerId, Position};
use thiserror::Error;

/// Errors raised by the board, the AI and the game session.
///
/// Every variant is recoverable; nothing in the engine is left half-updated
/// when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The position is outside the board
    #[error("position {position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: usize },

    /// The position already holds a stone
    #[error("position {0} is already occupied")]
    CellOccupied(Position),

    /// Replay step beyond the recorded history
    #[error("replay step {step} is outside 0..={len}")]
    InvalidReplayStep { step: usize, len: usize },

    /// The AI was asked to move on a full board
    #[error("no empty cell left to play")]
    NoLegalMove,

    #[error("board size {0} must be odd and between 5 and 255")]
    InvalidBoardSize(usize),

    /// A configured player sits in the other colour's slot
    #[error("the {slot:?} slot holds a {found:?} player")]
    PlayerMismatch { slot: PlayerId, found: PlayerId },

    #[error("the game is already over")]
    GameOver,

    #[error("moves cannot be played while reviewing a game")]
    ReplayActive,

    #[error("review is only available once the game has ended")]
    NotFinished,
}

impl GameError {
    /// `OutOfBounds` and `CellOccupied` are the two ways a placement is invalid.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBounds { .. } | GameError::CellOccupied(_)
        )
    }
}

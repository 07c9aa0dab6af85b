pub mod board;
pub mod error;
pub mod grid;
pub mod r#move;
pub mod types;

pub use board::Board;
pub use error::GameError;
pub use grid::Grid;
pub use r#move::{Move, Outcome};
pub use types::{Player, PlayerId, Position, Rgb, Stone};

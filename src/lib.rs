//! Gobang (five in a row) engine: board and history, win detection, a
//! one-ply heuristic computer player, a human-versus-computer session with
//! review, and computer self-play.

pub mod core;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;


pub use crate::core::{Board, GameError, Grid, Move, Outcome, Player, PlayerId, Position, Stone};
pub use crate::game::{Game, GameConfig, ReplayViewer};

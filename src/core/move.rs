use super::types::{Player, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 着手 (誰が・どこに)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub position: Position,
}

impl Move {
    pub fn new(player: Player, position: Position) -> Self {
        Move { player, position }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.player, self.position)
    }
}

/// 着手の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    NoWinner,
    Winner(Player),
}

impl Outcome {
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::NoWinner => None,
            Outcome::Winner(p) => Some(p),
        }
    }
}

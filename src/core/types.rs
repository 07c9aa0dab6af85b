use serde::{Deserialize, Serialize};
use std::fmt;

/// 交点の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }

    /// 相手の石 (Empty は Empty のまま)
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}

/// プレイヤーID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerId {
    #[default]
    Black, // 先手
    White, // 後手
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Black => PlayerId::White,
            PlayerId::White => PlayerId::Black,
        }
    }

    pub fn stone(self) -> Stone {
        match self {
            PlayerId::Black => Stone::Black,
            PlayerId::White => Stone::White,
        }
    }
}

/// 表示用の色 (ロジックでは使わない)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// プレイヤー (ID・表示名・石の色)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: Rgb,
}

impl Player {
    pub fn new(id: PlayerId, name: &str, color: Rgb) -> Self {
        Player {
            id,
            name: name.to_string(),
            color,
        }
    }

    pub fn black() -> Self {
        Self::new(PlayerId::Black, "Black", Rgb(45, 45, 45))
    }

    pub fn white() -> Self {
        Self::new(PlayerId::White, "White", Rgb(219, 219, 219))
    }

    pub fn stone(&self) -> Stone {
        self.id.stone()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// 盤面座標 (0-indexed, x = 列, y = 行)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

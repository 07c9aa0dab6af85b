use crate::core::{Player, PlayerId};
use crate::player::ai::AIConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// 対局設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the board; odd and at least 5.
    pub board_size: usize,
    pub black: Player,
    pub white: Player,
    /// Side played by the human; the computer takes the other one.
    pub human: PlayerId,
    pub ai: AIConfig,
    /// Delay between steps when a review plays itself.
    pub autoplay_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: 19,
            black: Player::black(),
            white: Player::white(),
            human: PlayerId::Black,
            ai: AIConfig::default(),
            autoplay_interval_ms: 1000,
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// 設定ファイルがなければデフォルト、壊れていれば警告してデフォルト
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "falling back to default config");
            Self::default()
        })
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::Black => &self.black,
            PlayerId::White => &self.white,
        }
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

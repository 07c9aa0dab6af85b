use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How equal-scoring candidate cells are settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Every newly found tie replaces the held candidate on a coin flip.
    /// Later ties are favoured; the pick is not uniform.
    #[default]
    Legacy,
    /// Uniform choice among all tied cells (reservoir sampling).
    Uniform,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AIConfig {
    pub tie_break: TieBreak,
    /// Fixed RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl AIConfig {
    pub fn seeded(seed: u64) -> Self {
        AIConfig {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config: AIConfig = serde_json::from_str(r#"{"tie_break":"uniform"}"#).unwrap();
        assert_eq!(config.tie_break, TieBreak::Uniform);
        assert_eq!(config.seed, None);

        let config: AIConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AIConfig::default());
        assert_eq!(config.tie_break, TieBreak::Legacy);
    }
}

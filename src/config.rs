use serde::{Deserialize, Serialize};

use crate::piece::Color;
use crate::rules::FIFTY_MOVE_LIMIT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Cpu,
}

/// How the starting position is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartKind {
    Classic,
    /// Back row drawn at random, see [`crate::setup::fischer_back_row`].
    Fischer,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid game configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for a new game. Missing fields in JSON take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub start: StartKind,
    /// Half-moves without a capture before the game is drawn.
    pub fifty_move_limit: u32,
    /// Seed for the Fischer draw and the CPU players; random if absent.
    pub seed: Option<u64>,
    pub white_player: String,
    pub black_player: String,
    pub event: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Human with white against the CPU, classic start.
    pub fn new() -> Self {
        GameConfig {
            white: PlayerKind::Human,
            black: PlayerKind::Cpu,
            start: StartKind::Classic,
            fifty_move_limit: FIFTY_MOVE_LIMIT,
            seed: None,
            white_player: "player".to_string(),
            black_player: "cpu".to_string(),
            event: String::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn player(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

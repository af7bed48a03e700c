use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::board::BOARD_CELLS;
use super::bot_controller::MEDIUM_DEPTH_LIMIT;
use super::types::{Difficulty, FirstPlayerMode, GameMode};

fn default_medium_depth_limit() -> usize {
    MEDIUM_DEPTH_LIMIT
}

/// Move-selection policy. Has no effect on the board or on win detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
    #[serde(default = "default_medium_depth_limit")]
    pub medium_depth_limit: usize,
}

impl GameConfig {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            mode,
            difficulty,
            ..Self::default()
        }
    }

    pub fn vs_computer(&self) -> bool {
        self.mode == GameMode::PlayerVsComputer
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsComputer,
            difficulty: Difficulty::Medium,
            first_player: FirstPlayerMode::Human,
            medium_depth_limit: MEDIUM_DEPTH_LIMIT,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.medium_depth_limit == 0 || self.medium_depth_limit > BOARD_CELLS {
            return Err(format!(
                "medium_depth_limit must be between 1 and {}, got {}",
                BOARD_CELLS, self.medium_depth_limit
            ));
        }
        Ok(())
    }
}

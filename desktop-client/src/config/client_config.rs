use serde::{Deserialize, Serialize};
use tictactoe_common::LogLevel;
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_common::games::tictactoe::{Difficulty, GameConfig, GameMode};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ClientConfigManager {
    ConfigManager::from_yaml_file(get_config_path())
}

/// Last-used settings. Game history is never written here.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct ClientConfig {
    pub game: GameConfig,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl ClientConfig {
    /// Saved game settings with command-line overrides applied. `self` is left
    /// untouched so the overrides are never written back.
    pub fn session_game(&self, mode: Option<GameMode>, difficulty: Option<Difficulty>) -> GameConfig {
        let mut game = self.game;
        if let Some(mode) = mode {
            game.mode = mode;
        }
        if let Some(difficulty) = difficulty {
            game.difficulty = difficulty;
        }
        game
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()
    }
}

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

use rand::Rng;
use tictactoe_engine::Player;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Human,
    Computer,
    Random,
}

impl FirstPlayer {
    pub fn resolve(self) -> Player {
        match self {
            FirstPlayer::Human => Player::Human,
            FirstPlayer::Computer => Player::Computer,
            FirstPlayer::Random => {
                if rand::rng().random() {
                    Player::Human
                } else {
                    Player::Computer
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_player: FirstPlayer,
    pub human_mark: char,
    pub computer_mark: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::Human,
            human_mark: 'X',
            computer_mark: 'O',
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.human_mark == self.computer_mark {
            return Err(format!(
                "Player marks must differ, both are '{}'",
                self.human_mark
            ));
        }
        if self.human_mark == ' ' || self.computer_mark == ' ' {
            return Err("Player marks must not be blank".to_string());
        }
        Ok(())
    }
}

/// Loads the config from `path`, or from `tictactoe_config.yaml` next to the
/// executable when no path is given. A missing default file means defaults;
/// an explicitly named file must exist.
pub fn load(path: Option<&str>) -> Result<GameConfig, String> {
    let (path, required) = match path {
        Some(path) => (path.to_string(), true),
        None => (default_config_path(), false),
    };

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound && !required => {
            return Ok(GameConfig::default());
        }
        Err(err) => return Err(format!("Failed to read config file {}: {}", path, err)),
    };

    let config: GameConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_yaml() {
        let default_config = GameConfig::default();
        let serialized = serde_yaml_ng::to_string(&default_config).unwrap();
        let deserialized: GameConfig = serde_yaml_ng::from_str(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: GameConfig = serde_yaml_ng::from_str("first_player: computer\n").unwrap();
        assert_eq!(config.first_player, FirstPlayer::Computer);
        assert_eq!(config.human_mark, 'X');
        assert_eq!(config.computer_mark, 'O');
    }

    #[test]
    fn validate_rejects_identical_marks() {
        let config = GameConfig {
            first_player: FirstPlayer::Human,
            human_mark: 'X',
            computer_mark: 'X',
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_marks() {
        let config = GameConfig {
            human_mark: ' ',
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn fixed_first_player_resolves_to_itself() {
        assert_eq!(FirstPlayer::Human.resolve(), Player::Human);
        assert_eq!(FirstPlayer::Computer.resolve(), Player::Computer);
    }
}

//! Game configuration loaded from TOML.

use crate::error::{ConfigError, SetupError, SetupErrorKind};
use crate::game::{DEFAULT_BOARD_SIZE, GameState};
use crate::player::{Player, PlayerColor};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One player entry in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Glyph placed on the board.
    label: char,
    /// Color used to draw the label.
    color: PlayerColor,
    /// Display name; defaults to `Player {ordinal}`.
    #[serde(default)]
    name: Option<String>,
}

impl PlayerConfig {
    /// Creates a player entry.
    pub fn new(label: char, color: PlayerColor, name: Option<String>) -> Self {
        Self { label, color, name }
    }

    fn into_player(self, ordinal: u32) -> Player {
        match self.name {
            Some(name) => Player::named(ordinal, name, self.label, self.color),
            None => Player::new(ordinal, self.label, self.color),
        }
    }
}

/// Board size and the two players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Exactly two entries, first to move first.
    #[serde(default = "default_players")]
    players: Vec<PlayerConfig>,
}

#[instrument]
fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

#[instrument]
fn default_players() -> Vec<PlayerConfig> {
    vec![
        PlayerConfig::new('X', PlayerColor::Blue, None),
        PlayerConfig::new('O', PlayerColor::Red, None),
    ]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            players: default_players(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Validates the configuration and builds a fresh game.
    ///
    /// # Errors
    ///
    /// Fails unless exactly two players are listed, or when
    /// [`GameState::new`] rejects the board size or labels.
    #[instrument(skip(self), fields(board_size = self.board_size, players = self.players.len()))]
    pub fn build(&self) -> Result<GameState, SetupError> {
        let [first, second]: [PlayerConfig; 2] = self
            .players
            .clone()
            .try_into()
            .map_err(|players: Vec<PlayerConfig>| {
                SetupError::new(SetupErrorKind::PlayerCount(players.len()))
            })?;

        GameState::new(
            [first.into_player(1), second.into_player(2)],
            self.board_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.board_size(), 3);
    }

    #[test]
    fn test_players_parse_from_tables() {
        let config = GameConfig::from_toml(
            r#"
            board_size = 4

            [[players]]
            label = "A"
            color = "green"
            name = "Alice"

            [[players]]
            label = "B"
            color = "Magenta"
            "#,
        )
        .unwrap();

        assert_eq!(*config.board_size(), 4);
        assert_eq!(config.players()[0].name().as_deref(), Some("Alice"));
        assert_eq!(*config.players()[1].color(), PlayerColor::Magenta);
    }

    #[test]
    fn test_bad_color_is_config_error() {
        let err = GameConfig::from_toml(
            r#"
            [[players]]
            label = "X"
            color = "gold"
            "#,
        )
        .unwrap_err();
        assert!(err.message.contains("gold"));
    }

    #[test]
    fn test_multi_char_label_is_config_error() {
        let err = GameConfig::from_toml(
            r#"
            [[players]]
            label = "XX"
            color = "red"
            "#,
        );
        assert!(err.is_err());
    }
}

use std::path::Path;

use crate::ai::{AgentKind, Depth, PruneRule};
use crate::error::{ConfigError, GameError};
use crate::game::{GameState, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub players: PlayersConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to search before evaluating; absent means search to the end.
    pub depth: Option<u32>,
    pub prune_rule: PruneRule,
}

impl SearchConfig {
    pub fn depth(&self) -> Depth {
        Depth::from(self.depth)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: AgentKind,
    pub two: AgentKind,
    pub games: usize,
    /// Seed for random agents; absent means seeded from the OS.
    pub seed: Option<u64>,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: AgentKind::Human,
            two: AgentKind::Prune,
            games: 1,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        if self.board.win_length == 0 {
            return Err(ConfigError::Validation(
                "board.win_length must be > 0".into(),
            ));
        }
        if self.board.win_length > self.board.rows.max(self.board.cols) {
            return Err(ConfigError::Validation(
                "board.win_length must fit in board.rows or board.cols".into(),
            ));
        }
        if self.players.games == 0 {
            return Err(ConfigError::Validation(
                "players.games must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Empty starting position for the configured board.
    pub fn initial_state(&self) -> Result<GameState, GameError> {
        GameState::new(self.board.rows, self.board.cols, self.board.win_length)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}

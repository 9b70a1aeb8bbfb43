//! Game settings file.
//!
//! Same layout as the classic `settings.json`:
//!
//! ```json
//! {
//!   "Bot": { "IsBlackBot": true, "BlackBotLevel": 5, "Optimization": "O1" },
//!   "Game": { "MaxNumTurns": 120 }
//! }
//! ```
//!
//! TOML with the same section and key names is accepted too. Missing keys fall
//! back to defaults; unknown sections (window size and the like) are ignored.

use std::path::{Path, PathBuf};
use std::time::Duration;

use draughts_core::{Color, PruningLevel, ScoringMode, SearchConfig, SeedPolicy};
use serde::{Deserialize, Serialize};

/// Errors raised while reading or writing a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("cannot serialize TOML settings: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("unsupported settings format `{0}` (expected .json or .toml)")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BotSettings {
    pub is_white_bot: bool,
    pub is_black_bot: bool,
    pub white_bot_level: u32,
    pub black_bot_level: u32,
    /// `NumberAndPotential`, anything else means a plain count
    pub bot_scoring_type: String,
    /// `O0` disables pruning
    pub optimization: String,
    pub no_random: bool,
    #[serde(rename = "BotDelayMS")]
    pub bot_delay_ms: u64,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            is_white_bot: false,
            is_black_bot: true,
            white_bot_level: 5,
            black_bot_level: 5,
            bot_scoring_type: "NumberAndPotential".to_string(),
            optimization: "O1".to_string(),
            no_random: false,
            bot_delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GameSettings {
    /// Turns (both colors counted) before the game is declared drawn
    pub max_num_turns: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { max_num_turns: 120 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Settings {
    pub bot: BotSettings,
    pub game: GameSettings,
}

impl Settings {
    /// Load settings, picking the parser from the file extension
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match extension(path).as_str() {
            "json" => Self::from_json(&contents),
            "toml" => Self::from_toml(&contents),
            other => Err(SettingsError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Save settings in the format implied by the file extension
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let text = match extension(path).as_str() {
            "json" => serde_json::to_string_pretty(self)?,
            "toml" => toml::to_string_pretty(self)?,
            other => return Err(SettingsError::UnsupportedFormat(other.to_string())),
        };
        std::fs::write(path, text).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_toml(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    pub fn is_bot(&self, color: Color) -> bool {
        match color {
            Color::White => self.bot.is_white_bot,
            Color::Black => self.bot.is_black_bot,
        }
    }

    pub fn bot_level(&self, color: Color) -> u32 {
        match color {
            Color::White => self.bot.white_bot_level,
            Color::Black => self.bot.black_bot_level,
        }
    }

    /// Search configuration for the bot playing `color`
    pub fn search_config(&self, color: Color) -> SearchConfig {
        SearchConfig::depth(self.bot_level(color))
            .with_scoring(ScoringMode::from_setting(&self.bot.bot_scoring_type))
            .with_pruning(PruningLevel::from_setting(&self.bot.optimization))
            .with_seed(SeedPolicy::from_no_random(self.bot.no_random))
    }

    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot.bot_delay_ms)
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;

//! Configuration management module
//!
//! Handles loading, saving, and validation of the quiz configuration.

use crate::app::state::Screen;
use crate::{QuizError, Result, APP_NAME, CONFIG_FILE, LOG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod persistence;

/// What the question screen records when it is left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitRecording {
    /// Record the last outcome, `false` if nothing was answered
    #[default]
    LastOutcome,
    /// Record only when at least one answer was given
    AnsweredOnly,
}

/// Quiz configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Directory for statistics and logs; platform data dir when unset
    pub data_dir: Option<PathBuf>,
    /// Route id of the first screen
    pub start_screen: String,
    /// Input poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Outcome recording policy for the question screen
    pub exit_recording: ExitRecording,
    /// Default log filter, overridden by RUST_LOG
    pub log_level: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            start_screen: Screen::MainMenu.route().to_string(),
            tick_rate_ms: 250,
            exit_recording: ExitRecording::LastOutcome,
            log_level: "info".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl QuizConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        Screen::from_route(&self.start_screen)?;

        const MIN_TICK_MS: u64 = 10;
        const MAX_TICK_MS: u64 = 5000;
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.tick_rate_ms) {
            return Err(QuizError::ConfigError(format!(
                "Tick rate must be between {} and {} ms, got {}",
                MIN_TICK_MS, MAX_TICK_MS, self.tick_rate_ms
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(QuizError::ConfigError(format!(
                "Unknown log level {:?} (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = Some(dir);
        self
    }

    pub fn with_exit_recording(mut self, policy: ExitRecording) -> Self {
        self.exit_recording = policy;
        self
    }

    pub fn with_start_screen(mut self, screen: Screen) -> Self {
        self.start_screen = screen.route().to_string();
        self
    }

    /// First screen to show
    pub fn start_screen(&self) -> Result<Screen> {
        Screen::from_route(&self.start_screen)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Directory holding persisted preferences and the log file
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir().ok_or_else(|| {
            QuizError::ConfigError("Unable to determine data directory".to_string())
        })?;
        Ok(data_dir.join(APP_NAME))
    }

    pub fn log_file_path(&self) -> Result<PathBuf> {
        Ok(self.resolved_data_dir()?.join(LOG_FILE))
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`, defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuizError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(path, content).map_err(|e| {
            QuizError::ConfigError(format!(
                "Failed to write config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/preguntas/preguntas.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuizError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

//! Configuration file handling.
//!
//! Lives at `<config dir>/ivp/config.toml`. Every section is optional; a
//! missing file or section falls back to the built-in defaults.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::checkpoint::{
    default_checkpoints, CheckpointDefinition, CheckpointScheduler, DEFAULT_RESTART_THRESHOLD,
    DEFAULT_TRIGGER_WINDOW,
};
use crate::subtitles::{default_slots, SubtitleSlot};
use crate::upload::DEFAULT_ALLOWED_EXTENSIONS;

/// MIME type the stream is loaded with.
pub const HLS_MIME: &str = "application/x-mpegURL";

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub upload: UploadConfig,
    pub checkpoints: Vec<CheckpointDefinition>,
    pub subtitles: Vec<SubtitleSlot>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playback: PlaybackConfig::default(),
            upload: UploadConfig::default(),
            checkpoints: default_checkpoints(),
            subtitles: default_slots(),
        }
    }
}

/// Checkpoint timing and stream loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Seconds after a checkpoint during which it may still fire
    pub trigger_window: f64,
    /// Play events before this position reset all checkpoints
    pub restart_threshold: f64,
    /// MIME type passed to the engine with the stream URL
    pub stream_mime: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            trigger_window: DEFAULT_TRIGGER_WINDOW,
            restart_threshold: DEFAULT_RESTART_THRESHOLD,
            stream_mime: HLS_MIME.to_string(),
        }
    }
}

/// Where and how videos are uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub endpoint: String,
    /// Multipart form field carrying the file
    pub field_name: String,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "/upload_video".to_string(),
            field_name: "videoFile".to_string(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("playback.trigger_window must be a positive number of seconds, got {0}")]
    InvalidWindow(f64),

    #[error("playback.restart_threshold must be zero or more seconds, got {0}")]
    InvalidRestartThreshold(f64),

    #[error("checkpoint {index} has invalid time {time} (must be finite and >= 0)")]
    InvalidCheckpointTime { index: usize, time: f64 },

    #[error("subtitle slot {index} has an empty language code")]
    EmptyLanguage { index: usize },

    #[error("subtitle language '{0}' is configured more than once")]
    DuplicateLanguage(String),
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("ivp").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse and validate TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = self.playback.trigger_window;
        if !(window.is_finite() && window > 0.0) {
            return Err(ConfigError::InvalidWindow(window));
        }
        let threshold = self.playback.restart_threshold;
        if !(threshold.is_finite() && threshold >= 0.0) {
            return Err(ConfigError::InvalidRestartThreshold(threshold));
        }

        for (index, cp) in self.checkpoints.iter().enumerate() {
            if !(cp.trigger_time.is_finite() && cp.trigger_time >= 0.0) {
                return Err(ConfigError::InvalidCheckpointTime {
                    index,
                    time: cp.trigger_time,
                });
            }
        }

        let mut seen = HashSet::new();
        for (index, slot) in self.subtitles.iter().enumerate() {
            if slot.lang.trim().is_empty() {
                return Err(ConfigError::EmptyLanguage { index });
            }
            if !seen.insert(slot.lang.as_str()) {
                return Err(ConfigError::DuplicateLanguage(slot.lang.clone()));
            }
        }

        Ok(())
    }

    /// A fresh scheduler over the configured checkpoints.
    pub fn scheduler(&self) -> CheckpointScheduler {
        CheckpointScheduler::new(self.checkpoints.clone())
            .with_window(self.playback.trigger_window)
            .with_restart_threshold(self.playback.restart_threshold)
    }
}

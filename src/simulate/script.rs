//! Playback script format.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Stream URL used when the header names none.
const DEFAULT_STREAM_URL: &str = "/video_stream/simulated/stream.m3u8";

/// First line of a script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptHeader {
    /// Stream duration; `null` simulates an engine that is not ready yet
    pub duration: Option<f64>,
    #[serde(default = "default_stream_url")]
    pub stream_url: String,
}

fn default_stream_url() -> String {
    DEFAULT_STREAM_URL.to_string()
}

/// One scripted engine event or viewer action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Engine reports position `at`
    TimeUpdate { at: f64 },
    /// Engine seeks to `to`
    Seek { to: f64 },
    /// Playback starts, optionally from `at`
    Play {
        #[serde(default)]
        at: Option<f64>,
    },
    /// End of stream
    Ended,
    /// Viewer acknowledges the presented checkpoint
    Continue,
    /// Viewer attaches a subtitle file (relative to the script)
    Subtitle { lang: String, file: PathBuf },
    /// Engine reports a media error
    Error {
        code: u16,
        #[serde(default)]
        message: Option<String>,
    },
}

/// A parsed script.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub header: ScriptHeader,
    pub steps: Vec<ScriptStep>,
}

/// Errors reading a script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Script is empty (expected a header line)")]
    Empty,

    #[error("Invalid script header on line {line}: {source}")]
    Header {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid step on line {line}: {source}")]
    Step {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse script text. Blank lines and `#` comments are skipped.
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

        let (line, header_line) = lines.next().ok_or(ScriptError::Empty)?;
        let header = serde_json::from_str(header_line)
            .map_err(|source| ScriptError::Header { line, source })?;

        let steps = lines
            .map(|(line, text)| {
                serde_json::from_str(text).map_err(|source| ScriptError::Step { line, source })
            })
            .collect::<Result<Vec<ScriptStep>, _>>()?;

        Ok(Self { header, steps })
    }
}

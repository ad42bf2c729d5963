//! Subtitle loading errors.

use std::path::PathBuf;

use crate::player::EngineError;

/// Errors that can occur while attaching a subtitle track.
#[derive(Debug, thiserror::Error)]
pub enum SubtitleError {
    #[error("No subtitle slot for language '{lang}'")]
    UnknownLanguage { lang: String },

    #[error("Failed to read subtitle file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Subtitle file is empty: {path}")]
    Empty { path: PathBuf },

    #[error("Player rejected subtitle track: {0}")]
    Engine(#[from] EngineError),

    #[error("No active player session")]
    NoSession,
}

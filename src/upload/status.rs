//! Status line shown to the viewer during upload and playback.

use crate::player::MediaError;

/// Visual style of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Neutral,
    Error,
    Success,
}

impl StatusKind {
    /// Style class name for front ends.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Neutral => "status-message",
            Self::Error => "status-message error",
            Self::Success => "status-message success",
        }
    }
}

/// A status message and its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn neutral(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Neutral, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, text)
    }

    /// Blank neutral status shown before anything happens.
    pub fn empty() -> Self {
        Self::neutral("")
    }

    pub fn no_file_selected() -> Self {
        Self::error("Please select a video file.")
    }

    pub fn uploading() -> Self {
        Self::neutral("Uploading and processing video... This may take a moment.")
    }

    pub fn processed() -> Self {
        Self::success("Video processed! Loading player...")
    }

    pub fn unexpected() -> Self {
        Self::error("An unexpected error occurred during upload.")
    }

    /// Failure reported by the processing endpoint.
    pub fn upload_failed(error: Option<&str>, details: Option<&str>) -> Self {
        let error = error.filter(|e| !e.is_empty()).unwrap_or("Upload failed.");
        match details.filter(|d| !d.is_empty()) {
            Some(details) => Self::error(format!("Error: {} ({})", error, details)),
            None => Self::error(format!("Error: {}", error)),
        }
    }

    /// Failure reported by the playback engine.
    pub fn player_error(error: &MediaError) -> Self {
        let message = error
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("Unknown error");
        let mut text = format!("Video player error: {}", message);
        if error.is_source_unsupported() {
            text.push_str(" (Could not load HLS stream. Check server logs and FFmpeg output.)");
        }
        Self::error(text)
    }

    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

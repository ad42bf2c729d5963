//! Playback engine seam.
//!
//! The session never holds a global player; it owns something implementing
//! these traits and passes it down to whoever needs to issue commands.

use std::path::Path;

use crate::checkpoint::PositionReport;

/// Pause/resume commands. All the scheduler needs.
pub trait PlaybackControl {
    fn pause(&mut self);
    fn play(&mut self);
}

/// A video playback engine hosting one stream.
pub trait PlaybackEngine: PlaybackControl {
    /// Point the engine at a stream.
    fn load_source(&mut self, url: &str, mime: &str);

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Whether a seek is in progress.
    fn is_seeking(&self) -> bool;

    /// Stream duration, `None` while unknown.
    fn duration(&self) -> Option<f64>;

    /// Snapshot of position, seeking flag and duration.
    fn position_report(&self) -> PositionReport {
        PositionReport::new(self.current_time(), self.is_seeking(), self.duration())
    }

    /// Attach an out-of-band text track.
    fn add_remote_text_track(&mut self, track: &TextTrackSpec) -> Result<TrackHandle, EngineError>;

    /// Detach a track previously returned by `add_remote_text_track`.
    fn remove_remote_text_track(&mut self, handle: TrackHandle) -> Result<(), EngineError>;

    /// Expose a local file to the engine under a temporary URL.
    fn create_object_url(&mut self, file: &Path) -> String;

    /// Release a URL from `create_object_url`.
    fn revoke_object_url(&mut self, url: &str);
}

/// Opaque handle for an attached text track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackHandle(pub u64);

impl std::fmt::Display for TrackHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "track#{}", self.0)
    }
}

/// Text track kinds understood by engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Subtitles,
}

impl TrackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subtitles => "subtitles",
        }
    }
}

/// Description of a text track to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTrackSpec {
    pub kind: TrackKind,
    /// URL the engine loads cues from
    pub src: String,
    /// Language code (e.g. "en")
    pub srclang: String,
    /// Label shown in the track menu
    pub label: String,
    /// Whether the track is enabled by default
    pub default: bool,
}

/// Errors reported by an engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("engine rejected text track: {reason}")]
    TrackRejected { reason: String },

    #[error("unknown text track {0}")]
    UnknownTrack(TrackHandle),
}

//! Events delivered by the playback engine.

/// Media error code for an unsupported or unloadable source.
pub const MEDIA_ERR_SRC_NOT_SUPPORTED: u16 = 4;

/// Engine events, handled strictly in arrival order.
///
/// Position data is not carried by the event; the session reads it from
/// the engine when the event is handled.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Playback position changed
    TimeUpdate,
    /// A seek started; the engine already reports the target position
    Seeking,
    /// Playback started or resumed
    Play,
    /// End of stream reached
    Ended,
    /// The engine failed to load or decode the stream
    Error(MediaError),
}

/// Error reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaError {
    /// Media error code (1 aborted, 2 network, 3 decode, 4 source not supported)
    pub code: u16,
    pub message: Option<String>,
}

impl MediaError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
        }
    }

    pub fn is_source_unsupported(&self) -> bool {
        self.code == MEDIA_ERR_SRC_NOT_SUPPORTED
    }
}

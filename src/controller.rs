//! Top-level controller tying upload, session and status together.
//!
//! Holds at most one player session. Every processed upload gets a brand
//! new engine and session; the previous one is disposed first.

use std::fmt::Display;
use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::player::{PlaybackEngine, PlayerEvent, PlayerSession, SessionSignal};
use crate::subtitles::{LoadedTrack, SubtitleError};
use crate::upload::{interpret_response, validate_selection, StatusMessage, UploadRequest};

/// Drives the upload → play flow for a single viewer.
pub struct Controller<E, F>
where
    E: PlaybackEngine,
    F: FnMut() -> E,
{
    config: Config,
    new_engine: F,
    session: Option<PlayerSession<E>>,
    status: StatusMessage,
}

impl<E, F> Controller<E, F>
where
    E: PlaybackEngine,
    F: FnMut() -> E,
{
    /// Create a controller that builds engines with `new_engine`.
    pub fn new(config: Config, new_engine: F) -> Self {
        Self {
            config,
            new_engine,
            session: None,
            status: StatusMessage::empty(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn session(&self) -> Option<&PlayerSession<E>> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut PlayerSession<E>> {
        self.session.as_mut()
    }

    /// Subtitle inputs are usable once a stream is playing.
    pub fn subtitles_enabled(&self) -> bool {
        self.session.is_some()
    }

    /// Viewer submitted the upload form.
    ///
    /// Returns the request to send, or `None` when the selection is
    /// invalid (the status explains why).
    pub fn submit(&mut self, selection: Option<&Path>) -> Option<UploadRequest> {
        match validate_selection(selection, &self.config.upload) {
            Ok(request) => {
                info!(file = %request.file_name, size = %request.size_display(), "uploading video");
                self.status = StatusMessage::uploading();
                Some(request)
            }
            Err(status) => {
                self.status = status;
                None
            }
        }
    }

    /// The processing endpoint replied. Returns true if a session started.
    pub fn receive_response(&mut self, http_status: u16, body: &str) -> bool {
        match interpret_response(http_status, body) {
            Ok(video) => {
                info!(
                    url = %video.stream_url,
                    video_id = ?video.video_id,
                    message = ?video.message,
                    "upload processed"
                );
                self.status = StatusMessage::processed();
                self.start_session(&video.stream_url);
                true
            }
            Err(status) => {
                self.status = status;
                false
            }
        }
    }

    /// The upload could not be sent or its reply not received.
    pub fn transport_failed(&mut self, error: &dyn Display) {
        warn!(error = %error, "upload transport failed");
        self.status = StatusMessage::unexpected();
    }

    /// Forward an engine event to the current session.
    pub fn dispatch(&mut self, event: PlayerEvent) -> SessionSignal {
        let Some(session) = self.session.as_mut() else {
            return SessionSignal::Continue;
        };
        let signal = session.handle_event(event);
        if let SessionSignal::Failed(status) = &signal {
            self.status = status.clone();
        }
        signal
    }

    /// Viewer pressed "continue" on a presented checkpoint.
    pub fn acknowledge(&mut self) -> bool {
        self.session
            .as_mut()
            .map(PlayerSession::acknowledge)
            .unwrap_or(false)
    }

    /// Viewer picked a subtitle file for `lang`.
    pub fn load_subtitle(
        &mut self,
        lang: &str,
        path: &Path,
    ) -> Result<&LoadedTrack, SubtitleError> {
        match self.session.as_mut() {
            Some(session) => session.load_subtitle(lang, path),
            None => Err(SubtitleError::NoSession),
        }
    }

    /// Dispose the current session, if any.
    pub fn close(&mut self) -> Option<E> {
        self.session.take().map(PlayerSession::dispose)
    }

    fn start_session(&mut self, stream_url: &str) {
        self.close();
        let engine = (self.new_engine)();
        self.session = Some(PlayerSession::start(engine, stream_url, &self.config));
    }
}

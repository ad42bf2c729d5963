//! One player session per stream.
//!
//! A session owns its engine, a scheduler built fresh from the configured
//! checkpoints, and an empty subtitle registry. Nothing carries over from a
//! previous stream; a new upload disposes the old session and starts another.

use std::path::Path;

use tracing::{info, warn};

use super::engine::PlaybackEngine;
use super::events::PlayerEvent;
use crate::checkpoint::CheckpointScheduler;
use crate::config::Config;
use crate::subtitles::{LoadedTrack, SubtitleError, SubtitleRegistry};
use crate::upload::StatusMessage;

/// What the front end should do after an event was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionSignal {
    /// Nothing to show
    Continue,
    /// Playback was paused; show the payload until the viewer acknowledges
    Present {
        index: usize,
        trigger_time: f64,
        payload: String,
    },
    /// The engine reported an error; show the status
    Failed(StatusMessage),
}

/// Playback state for a single stream.
#[derive(Debug)]
pub struct PlayerSession<E: PlaybackEngine> {
    engine: E,
    stream_url: String,
    scheduler: CheckpointScheduler,
    subtitles: SubtitleRegistry,
}

impl<E: PlaybackEngine> PlayerSession<E> {
    /// Load `stream_url` into `engine` and set up fresh session state.
    pub fn start(mut engine: E, stream_url: impl Into<String>, config: &Config) -> Self {
        let stream_url = stream_url.into();
        engine.load_source(&stream_url, &config.playback.stream_mime);
        info!(url = %stream_url, checkpoints = config.checkpoints.len(), "player session started");

        Self {
            engine,
            stream_url,
            scheduler: config.scheduler(),
            subtitles: SubtitleRegistry::new(config.subtitles.clone()),
        }
    }

    pub fn stream_url(&self) -> &str {
        &self.stream_url
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn scheduler(&self) -> &CheckpointScheduler {
        &self.scheduler
    }

    pub fn subtitles(&self) -> &SubtitleRegistry {
        &self.subtitles
    }

    /// Handle one engine event. Position data is read from the engine now.
    pub fn handle_event(&mut self, event: PlayerEvent) -> SessionSignal {
        match event {
            PlayerEvent::TimeUpdate => {
                let report = self.engine.position_report();
                match self.scheduler.on_position_update(report, &mut self.engine) {
                    Some(index) => self.present(index),
                    None => SessionSignal::Continue,
                }
            }
            PlayerEvent::Seeking => {
                self.scheduler
                    .on_seek(self.engine.current_time(), self.engine.duration());
                SessionSignal::Continue
            }
            PlayerEvent::Play => {
                self.scheduler.on_play(self.engine.current_time());
                SessionSignal::Continue
            }
            PlayerEvent::Ended => {
                self.scheduler.on_ended();
                SessionSignal::Continue
            }
            PlayerEvent::Error(error) => {
                warn!(code = error.code, message = ?error.message, "player error");
                SessionSignal::Failed(StatusMessage::player_error(&error))
            }
        }
    }

    /// Viewer dismissed the presented checkpoint. Resumes playback.
    pub fn acknowledge(&mut self) -> bool {
        self.scheduler.on_resume(&mut self.engine)
    }

    /// Attach a subtitle file for `lang`, replacing any earlier one.
    pub fn load_subtitle(
        &mut self,
        lang: &str,
        path: &Path,
    ) -> Result<&LoadedTrack, SubtitleError> {
        self.subtitles.load(&mut self.engine, lang, path)
    }

    /// Tear down the session, releasing subtitle URLs. Returns the engine.
    pub fn dispose(mut self) -> E {
        self.subtitles.dispose(&mut self.engine);
        info!(url = %self.stream_url, "player session disposed");
        self.engine
    }

    fn present(&self, index: usize) -> SessionSignal {
        match self.scheduler.checkpoints().get(index) {
            Some(cp) => SessionSignal::Present {
                index,
                trigger_time: cp.trigger_time,
                payload: cp.payload.clone(),
            },
            None => SessionSignal::Continue,
        }
    }
}

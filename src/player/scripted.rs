//! In-memory playback engine.
//!
//! Holds position/seek/duration as plain fields that a driver sets
//! directly, and records every command it receives. Drives the simulator
//! and the tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::engine::{EngineError, PlaybackControl, PlaybackEngine, TextTrackSpec, TrackHandle};

/// A command issued to the engine, in the order received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Load { url: String, mime: String },
    Pause,
    Play,
    AddTrack { handle: TrackHandle, srclang: String },
    RemoveTrack(TrackHandle),
    CreateUrl(String),
    RevokeUrl(String),
}

/// Engine whose state is set by its driver.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    position: f64,
    seeking: bool,
    duration: Option<f64>,
    paused: bool,
    source: Option<String>,
    tracks: BTreeMap<TrackHandle, TextTrackSpec>,
    object_urls: BTreeSet<String>,
    next_id: u64,
    reject_tracks: bool,
    commands: Vec<EngineCommand>,
}

impl ScriptedEngine {
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            duration,
            paused: true,
            ..Self::default()
        }
    }

    /// Make every subsequent `add_remote_text_track` fail.
    pub fn rejecting_tracks(mut self) -> Self {
        self.reject_tracks = true;
        self
    }

    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    pub fn set_duration(&mut self, duration: Option<f64>) {
        self.duration = duration;
    }

    /// Jump to `position` and mark a seek as in progress.
    pub fn begin_seek(&mut self, position: f64) {
        self.position = position;
        self.seeking = true;
    }

    pub fn finish_seek(&mut self) {
        self.seeking = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn tracks(&self) -> impl Iterator<Item = (&TrackHandle, &TextTrackSpec)> {
        self.tracks.iter()
    }

    pub fn live_object_urls(&self) -> impl Iterator<Item = &str> {
        self.object_urls.iter().map(String::as_str)
    }

    pub fn commands(&self) -> &[EngineCommand] {
        &self.commands
    }

    /// Drain the command log.
    pub fn take_commands(&mut self) -> Vec<EngineCommand> {
        std::mem::take(&mut self.commands)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl PlaybackControl for ScriptedEngine {
    fn pause(&mut self) {
        self.paused = true;
        self.commands.push(EngineCommand::Pause);
    }

    fn play(&mut self) {
        self.paused = false;
        self.commands.push(EngineCommand::Play);
    }
}

impl PlaybackEngine for ScriptedEngine {
    fn load_source(&mut self, url: &str, mime: &str) {
        self.source = Some(url.to_string());
        self.position = 0.0;
        self.seeking = false;
        self.commands.push(EngineCommand::Load {
            url: url.to_string(),
            mime: mime.to_string(),
        });
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn is_seeking(&self) -> bool {
        self.seeking
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn add_remote_text_track(&mut self, track: &TextTrackSpec) -> Result<TrackHandle, EngineError> {
        if self.reject_tracks {
            return Err(EngineError::TrackRejected {
                reason: format!("tracks disabled for {}", track.srclang),
            });
        }
        let handle = TrackHandle(self.next_id());
        self.tracks.insert(handle, track.clone());
        self.commands.push(EngineCommand::AddTrack {
            handle,
            srclang: track.srclang.clone(),
        });
        Ok(handle)
    }

    fn remove_remote_text_track(&mut self, handle: TrackHandle) -> Result<(), EngineError> {
        self.tracks
            .remove(&handle)
            .ok_or(EngineError::UnknownTrack(handle))?;
        self.commands.push(EngineCommand::RemoveTrack(handle));
        Ok(())
    }

    fn create_object_url(&mut self, file: &Path) -> String {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let url = format!("blob:ivp/{}/{}", self.next_id(), name);
        self.object_urls.insert(url.clone());
        self.commands.push(EngineCommand::CreateUrl(url.clone()));
        url
    }

    fn revoke_object_url(&mut self, url: &str) {
        self.object_urls.remove(url);
        self.commands.push(EngineCommand::RevokeUrl(url.to_string()));
    }
}

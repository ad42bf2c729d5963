//! Per-session registry of attached subtitle tracks.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::SubtitleError;
use crate::player::{PlaybackEngine, TextTrackSpec, TrackHandle, TrackKind};

/// Language enabled by default when its track is attached.
const DEFAULT_LANGUAGE: &str = "en";

/// A language a viewer can attach subtitles for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleSlot {
    /// Language code (e.g. "en")
    pub lang: String,
    /// Label shown in the track menu
    pub label: String,
}

impl SubtitleSlot {
    pub fn new(lang: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            label: label.into(),
        }
    }
}

/// The slots offered when none are configured.
pub fn default_slots() -> Vec<SubtitleSlot> {
    vec![
        SubtitleSlot::new("en", "English"),
        SubtitleSlot::new("es", "Spanish"),
        SubtitleSlot::new("fr", "French"),
    ]
}

/// Subtitle file format, sniffed from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Vtt,
    Srt,
}

impl SubtitleFormat {
    /// WebVTT files must open with a `WEBVTT` line; anything else is taken as SRT.
    pub fn detect(content: &str) -> Self {
        let content = content.trim_start_matches('\u{feff}').trim_start();
        if content.starts_with("WEBVTT") {
            Self::Vtt
        } else {
            Self::Srt
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Vtt => "VTT",
            Self::Srt => "SRT",
        }
    }
}

/// A track currently attached to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTrack {
    pub lang: String,
    pub label: String,
    pub handle: TrackHandle,
    pub object_url: String,
    pub format: SubtitleFormat,
    pub default: bool,
}

/// Attached subtitle tracks for one player session, keyed by language.
#[derive(Debug, Clone, Default)]
pub struct SubtitleRegistry {
    slots: Vec<SubtitleSlot>,
    loaded: BTreeMap<String, LoadedTrack>,
}

impl SubtitleRegistry {
    pub fn new(slots: Vec<SubtitleSlot>) -> Self {
        Self {
            slots,
            loaded: BTreeMap::new(),
        }
    }

    pub fn slots(&self) -> &[SubtitleSlot] {
        &self.slots
    }

    pub fn get(&self, lang: &str) -> Option<&LoadedTrack> {
        self.loaded.get(lang)
    }

    pub fn loaded(&self) -> impl Iterator<Item = &LoadedTrack> {
        self.loaded.values()
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    /// Attach the subtitle file at `path` for `lang`.
    ///
    /// Replaces any track already loaded for the language: the old track is
    /// detached (failures are logged and ignored) and its object URL revoked
    /// before the new one is created.
    pub fn load<E>(
        &mut self,
        engine: &mut E,
        lang: &str,
        path: &Path,
    ) -> Result<&LoadedTrack, SubtitleError>
    where
        E: PlaybackEngine + ?Sized,
    {
        let label = self
            .slots
            .iter()
            .find(|s| s.lang == lang)
            .map(|s| s.label.clone())
            .ok_or_else(|| SubtitleError::UnknownLanguage {
                lang: lang.to_string(),
            })?;

        // The engine reads the file itself; the text is only sniffed here, so
        // legacy encodings such as Windows-1252 are decoded lossily.
        let bytes = fs::read(path).map_err(|source| SubtitleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        if content.trim().is_empty() {
            return Err(SubtitleError::Empty {
                path: path.to_path_buf(),
            });
        }
        let format = SubtitleFormat::detect(&content);

        if let Some(old) = self.loaded.remove(lang) {
            if let Err(e) = engine.remove_remote_text_track(old.handle) {
                warn!(
                    lang,
                    handle = %old.handle,
                    error = %e,
                    "could not remove old subtitle track"
                );
            }
            engine.revoke_object_url(&old.object_url);
        }

        let object_url = engine.create_object_url(path);
        let wanted = TextTrackSpec {
            kind: TrackKind::Subtitles,
            src: object_url.clone(),
            srclang: lang.to_string(),
            label: label.clone(),
            default: lang == DEFAULT_LANGUAGE,
        };

        let handle = match engine.add_remote_text_track(&wanted) {
            Ok(handle) => handle,
            Err(e) => {
                engine.revoke_object_url(&object_url);
                return Err(e.into());
            }
        };

        debug!(
            lang,
            %handle,
            kind = wanted.kind.as_str(),
            format = format.name(),
            "subtitle track attached"
        );
        let track = LoadedTrack {
            lang: lang.to_string(),
            label,
            handle,
            object_url,
            format,
            default: wanted.default,
        };
        Ok(self.loaded.entry(lang.to_string()).or_insert(track))
    }

    /// Release every object URL and forget all tracks.
    ///
    /// Tracks are not detached; the engine is being torn down with them.
    pub fn dispose<E>(&mut self, engine: &mut E)
    where
        E: PlaybackEngine + ?Sized,
    {
        for track in std::mem::take(&mut self.loaded).into_values() {
            engine.revoke_object_url(&track.object_url);
        }
    }
}

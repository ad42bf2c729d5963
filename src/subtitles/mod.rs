//! Runtime subtitle tracks.
//!
//! Viewers attach subtitle files per language while a stream plays. Each
//! language has one slot; loading a second file for the same language
//! replaces the first.

mod error;
mod registry;

pub use error::SubtitleError;
pub use registry::{default_slots, LoadedTrack, SubtitleFormat, SubtitleRegistry, SubtitleSlot};

//! ivp - interactive video player controller
//!
//! Turns an uploaded video's stream URL into a player session that pauses at
//! timed checkpoints and accepts subtitle tracks at runtime. The playback
//! engine and the processing endpoint are external; this crate decides when
//! to pause, what to show, and what to tell the viewer.

pub mod checkpoint;
pub mod cli;
pub mod config;
pub mod controller;
pub mod player;
pub mod simulate;
pub mod subtitles;
pub mod upload;

pub use checkpoint::{CheckpointDefinition, CheckpointScheduler, Overlay, PositionReport};
pub use config::Config;
pub use controller::Controller;
pub use player::{PlaybackControl, PlaybackEngine, PlayerEvent, PlayerSession, SessionSignal};

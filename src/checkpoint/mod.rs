//! Timed interaction checkpoints.
//!
//! A checkpoint is a timestamp at which playback pauses and a payload is
//! presented to the viewer until they acknowledge it.
//!
//! # Module Structure
//!
//! - [`definition`] - Checkpoint definitions and the built-in set
//! - [`overlay`] - Two-state presentation machine (idle / presenting)
//! - [`scheduler`] - Position-driven trigger logic with fired flags

mod definition;
mod overlay;
mod scheduler;

pub use definition::{default_checkpoints, CheckpointDefinition};
pub use overlay::Overlay;
pub use scheduler::{
    CheckpointScheduler, PositionReport, DEFAULT_RESTART_THRESHOLD, DEFAULT_TRIGGER_WINDOW,
};

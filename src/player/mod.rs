//! Player session plumbing.
//!
//! Connects a playback engine (the thing that actually decodes and shows
//! video) to the checkpoint scheduler and the subtitle registry.
//!
//! # Architecture
//!
//! - `engine`: Traits the host engine implements, plus text-track types
//! - `events`: Engine events delivered to a session, and media errors
//! - `session`: One `PlayerSession` per stream, rebuilt for every upload
//! - `scripted`: In-memory engine used by the simulator and tests
//!
//! # Usage
//!
//! ```
//! use ivp::player::{PlayerEvent, PlayerSession, ScriptedEngine, SessionSignal};
//! use ivp::Config;
//!
//! let engine = ScriptedEngine::new(Some(30.0));
//! let url = "/video_stream/abc/stream.m3u8";
//! let mut session = PlayerSession::start(engine, url, &Config::default());
//!
//! session.engine_mut().set_position(5.2);
//! match session.handle_event(PlayerEvent::TimeUpdate) {
//!     SessionSignal::Present { trigger_time, .. } => assert_eq!(trigger_time, 5.0),
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert!(session.acknowledge());
//! ```

mod engine;
mod events;
mod scripted;
mod session;

pub use engine::{
    EngineError, PlaybackControl, PlaybackEngine, TextTrackSpec, TrackHandle, TrackKind,
};
pub use events::{MediaError, PlayerEvent, MEDIA_ERR_SRC_NOT_SUPPORTED};
pub use scripted::{EngineCommand, ScriptedEngine};
pub use session::{PlayerSession, SessionSignal};

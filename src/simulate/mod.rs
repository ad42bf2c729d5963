//! Playback simulation.
//!
//! Replays a recorded sequence of engine events against a player session
//! backed by [`ScriptedEngine`](crate::player::ScriptedEngine) and reports
//! what the viewer would have seen. Useful for checking checkpoint timing
//! without a browser.
//!
//! Scripts are JSON lines: a header object, then one step per line.
//!
//! ```text
//! {"duration": 30.0}
//! {"event": "time_update", "at": 4.9}
//! {"event": "time_update", "at": 5.2}
//! {"event": "continue"}
//! {"event": "seek", "to": 3.0}
//! ```

mod runner;
mod script;

pub use runner::{format_clock, run, Entry, Report};
pub use script::{Script, ScriptError, ScriptHeader, ScriptStep};

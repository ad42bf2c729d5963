//! Checkpoint definitions.

use serde::{Deserialize, Serialize};

/// A time-keyed trigger and the content shown when it fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointDefinition {
    /// Seconds from stream start
    #[serde(rename = "time")]
    pub trigger_time: f64,
    /// Renderable content (markup or text), opaque to the scheduler
    #[serde(rename = "content")]
    pub payload: String,
}

impl CheckpointDefinition {
    pub fn new(trigger_time: f64, payload: impl Into<String>) -> Self {
        Self {
            trigger_time,
            payload: payload.into(),
        }
    }

    /// Whether `position` falls inside `[trigger_time, trigger_time + window)`.
    pub fn in_window(&self, position: f64, window: f64) -> bool {
        position >= self.trigger_time && position < self.trigger_time + window
    }

    /// First heading of the payload, or its first line with markup removed.
    ///
    /// Used for one-line listings; the payload itself is never altered.
    pub fn title(&self) -> String {
        let text = strip_markup(&self.payload);
        text.lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("")
            .to_string()
    }
}

/// Remove `<...>` tags, turning closing block tags into line breaks.
fn strip_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut tag = String::new();
    let mut in_tag = false;

    for c in markup.chars() {
        match c {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                if tag.starts_with('/') {
                    out.push('\n');
                }
            }
            _ if in_tag => tag.push(c),
            _ => out.push(c),
        }
    }

    out
}

/// The checkpoints shipped with the player when none are configured.
pub fn default_checkpoints() -> Vec<CheckpointDefinition> {
    vec![
        CheckpointDefinition::new(
            5.0,
            "<h2>Checkpoint 1!</h2><p>First stop. Video uploaded and playing via HLS!</p>",
        ),
        CheckpointDefinition::new(
            12.0,
            "<h2>Quiz Time!</h2><p>What format are the subtitles?</p>\
             <button onclick=\"alert('Correct! VTT is used.')\">VTT</button> \
             <button onclick=\"alert('Nope!')\">SRT</button>",
        ),
        CheckpointDefinition::new(
            20.0,
            "<h2>Section End</h2><p>Nice work making it this far.</p>",
        ),
    ]
}

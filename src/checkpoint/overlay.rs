//! Presentation overlay state.
//!
//! The overlay is either idle or presenting exactly one checkpoint payload.
//! It carries no rendering; a front end observes it and draws accordingly.

/// Two-state presentation machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    /// Nothing shown, playback unblocked
    #[default]
    Idle,
    /// A checkpoint payload is shown and blocks further triggers
    Presenting {
        /// Index of the checkpoint in the scheduler's ordered list
        index: usize,
        /// Content being shown
        payload: String,
    },
}

impl Overlay {
    pub fn is_presenting(&self) -> bool {
        matches!(self, Self::Presenting { .. })
    }

    /// Show a payload. Refused (returns false) while already presenting.
    pub fn trigger(&mut self, index: usize, payload: impl Into<String>) -> bool {
        if self.is_presenting() {
            return false;
        }
        *self = Self::Presenting {
            index,
            payload: payload.into(),
        };
        true
    }

    /// Viewer acknowledgment. Returns the dismissed checkpoint index, if any.
    pub fn acknowledge(&mut self) -> Option<usize> {
        match std::mem::take(self) {
            Self::Presenting { index, .. } => Some(index),
            Self::Idle => None,
        }
    }

    /// Payload currently shown.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Presenting { payload, .. } => Some(payload),
            Self::Idle => None,
        }
    }
}

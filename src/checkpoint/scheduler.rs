//! Checkpoint scheduling.
//!
//! Watches playback position reports and pauses playback once per checkpoint
//! per forward pass. Fired flags are re-armed by seeking back before a
//! checkpoint, by playing from the start, and by reaching the end.

use tracing::debug;

use super::definition::CheckpointDefinition;
use super::overlay::Overlay;
use crate::player::PlaybackControl;

/// Width of the trigger window in seconds.
///
/// Position reports arrive at coarse, irregular intervals; a checkpoint
/// stays eligible for this long after its timestamp.
pub const DEFAULT_TRIGGER_WINDOW: f64 = 0.7;

/// Play events below this position count as a restart.
pub const DEFAULT_RESTART_THRESHOLD: f64 = 1.0;

/// Snapshot of the engine's playback position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionReport {
    /// Current position in seconds
    pub position: f64,
    /// Whether the engine is in the middle of a seek
    pub seeking: bool,
    /// Stream duration, `None` until the engine knows it
    pub duration: Option<f64>,
}

impl PositionReport {
    pub fn new(position: f64, seeking: bool, duration: Option<f64>) -> Self {
        Self {
            position,
            seeking,
            duration,
        }
    }

    /// Whether the stream is ready (duration known and non-zero).
    pub fn is_ready(&self) -> bool {
        duration_known(self.duration)
    }
}

/// Live streams report an infinite duration; that still counts as known.
fn duration_known(duration: Option<f64>) -> bool {
    matches!(duration, Some(d) if d > 0.0)
}

/// Position-driven checkpoint trigger logic for one player session.
#[derive(Debug, Clone)]
pub struct CheckpointScheduler {
    checkpoints: Vec<CheckpointDefinition>,
    fired: Vec<bool>,
    overlay: Overlay,
    window: f64,
    restart_threshold: f64,
}

impl CheckpointScheduler {
    /// Create a scheduler over `checkpoints`, ordered by trigger time.
    ///
    /// Ties keep their list order.
    pub fn new(mut checkpoints: Vec<CheckpointDefinition>) -> Self {
        checkpoints.sort_by(|a, b| a.trigger_time.total_cmp(&b.trigger_time));
        let fired = vec![false; checkpoints.len()];
        Self {
            checkpoints,
            fired,
            overlay: Overlay::Idle,
            window: DEFAULT_TRIGGER_WINDOW,
            restart_threshold: DEFAULT_RESTART_THRESHOLD,
        }
    }

    pub fn with_window(mut self, window: f64) -> Self {
        self.window = window;
        self
    }

    pub fn with_restart_threshold(mut self, threshold: f64) -> Self {
        self.restart_threshold = threshold;
        self
    }

    pub fn checkpoints(&self) -> &[CheckpointDefinition] {
        &self.checkpoints
    }

    pub fn window(&self) -> f64 {
        self.window
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Whether a checkpoint is currently presented.
    pub fn is_active(&self) -> bool {
        self.overlay.is_presenting()
    }

    /// The checkpoint currently presented.
    pub fn active(&self) -> Option<&CheckpointDefinition> {
        match self.overlay {
            Overlay::Presenting { index, .. } => self.checkpoints.get(index),
            Overlay::Idle => None,
        }
    }

    pub fn is_fired(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }

    pub fn fired_flags(&self) -> &[bool] {
        &self.fired
    }

    /// Handle a position report.
    ///
    /// Fires at most one checkpoint: the first unfired one whose window
    /// contains the position. Pauses playback through `control` and returns
    /// the index of the checkpoint now presented.
    pub fn on_position_update<C>(
        &mut self,
        report: PositionReport,
        control: &mut C,
    ) -> Option<usize>
    where
        C: PlaybackControl + ?Sized,
    {
        if report.seeking || !report.is_ready() || self.is_active() {
            return None;
        }

        let index = self
            .checkpoints
            .iter()
            .zip(&self.fired)
            .position(|(cp, fired)| !fired && cp.in_window(report.position, self.window))?;

        let checkpoint = &self.checkpoints[index];
        control.pause();
        self.overlay.trigger(index, checkpoint.payload.as_str());
        self.fired[index] = true;
        debug!(
            index,
            trigger_time = checkpoint.trigger_time,
            position = report.position,
            "checkpoint triggered"
        );
        Some(index)
    }

    /// Handle a seek. Re-arms every checkpoint after `position`.
    ///
    /// Checkpoints at or before the new position keep their flags, so
    /// skipping ahead never replays them. Returns how many were re-armed.
    pub fn on_seek(&mut self, position: f64, duration: Option<f64>) -> usize {
        if !duration_known(duration) {
            return 0;
        }

        let mut rearmed = 0;
        for (cp, fired) in self.checkpoints.iter().zip(self.fired.iter_mut()) {
            if cp.trigger_time > position {
                if *fired {
                    rearmed += 1;
                }
                *fired = false;
            }
        }

        if rearmed > 0 {
            debug!(position, rearmed, "checkpoints re-armed by seek");
        }
        rearmed
    }

    /// Handle a play event. Playing from (near) the start re-arms everything.
    pub fn on_play(&mut self, position: f64) {
        if position < self.restart_threshold {
            debug!(position, "play from start, resetting checkpoints");
            self.reset();
        }
    }

    /// Handle end of stream, preparing for a replay.
    pub fn on_ended(&mut self) {
        debug!("stream ended, resetting checkpoints");
        self.reset();
    }

    /// Viewer acknowledged the presented checkpoint.
    ///
    /// Clears the overlay and resumes playback. Does nothing (and returns
    /// false) when no checkpoint is active.
    pub fn on_resume<C>(&mut self, control: &mut C) -> bool
    where
        C: PlaybackControl + ?Sized,
    {
        match self.overlay.acknowledge() {
            Some(index) => {
                debug!(index, "checkpoint acknowledged, resuming");
                control.play();
                true
            }
            None => false,
        }
    }

    fn reset(&mut self) {
        self.fired.iter_mut().for_each(|f| *f = false);
    }
}

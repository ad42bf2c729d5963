//! Executes a script against a player session.

use std::path::Path;

use super::script::{Script, ScriptStep};
use crate::config::Config;
use crate::player::{
    MediaError, PlaybackControl, PlaybackEngine, PlayerEvent, PlayerSession, ScriptedEngine,
    SessionSignal,
};

/// Format seconds as MM:SS.cc.
pub fn format_clock(seconds: f64) -> String {
    let centis = (seconds.max(0.0) * 100.0).round() as u64;
    let mins = centis / 6000;
    let secs = (centis / 100) % 60;
    format!("{:02}:{:02}.{:02}", mins, secs, centis % 100)
}

/// Something the viewer would have noticed.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Playback paused and a checkpoint shown
    Presented {
        at: f64,
        index: usize,
        trigger_time: f64,
        title: String,
    },
    /// Viewer continued past a checkpoint
    Resumed { at: f64 },
    /// Fired checkpoints armed again (seek back, restart, end)
    Rearmed { at: f64, count: usize },
    SubtitleLoaded {
        at: f64,
        lang: String,
        label: String,
        format: &'static str,
    },
    SubtitleFailed { at: f64, lang: String, error: String },
    /// Player error status shown
    Failed { at: f64, status: String },
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Presented {
                at,
                index,
                trigger_time,
                title,
            } => write!(
                f,
                "{}  present   #{} at {}  {}",
                format_clock(*at),
                index + 1,
                format_clock(*trigger_time),
                title
            ),
            Entry::Resumed { at } => write!(f, "{}  resume", format_clock(*at)),
            Entry::Rearmed { at, count } => {
                write!(f, "{}  rearm     {} checkpoint(s)", format_clock(*at), count)
            }
            Entry::SubtitleLoaded {
                at,
                lang,
                label,
                format,
            } => write!(
                f,
                "{}  subtitle  {} {} ({})",
                format_clock(*at),
                lang,
                label,
                format
            ),
            Entry::SubtitleFailed { at, lang, error } => {
                write!(f, "{}  subtitle  {} failed: {}", format_clock(*at), lang, error)
            }
            Entry::Failed { at, status } => {
                write!(f, "{}  error     {}", format_clock(*at), status)
            }
        }
    }
}

/// Outcome of a simulation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub entries: Vec<Entry>,
}

impl Report {
    pub fn presentations(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, Entry::Presented { .. }))
            .count()
    }
}

/// Run `script` with checkpoints and timing from `config`.
///
/// Subtitle paths in the script resolve against `base_dir`.
pub fn run(script: &Script, config: &Config, base_dir: &Path) -> Report {
    let engine = ScriptedEngine::new(script.header.duration);
    let mut session = PlayerSession::start(engine, script.header.stream_url.as_str(), config);
    let mut report = Report::default();

    for step in &script.steps {
        let armed_before = fired_count(&session);
        let entry = apply(&mut session, step, base_dir);
        let at = session.engine().current_time();

        let armed_after = fired_count(&session);
        if armed_after < armed_before {
            report.entries.push(Entry::Rearmed {
                at,
                count: armed_before - armed_after,
            });
        }
        report.entries.extend(entry);
    }

    session.dispose();
    report
}

fn fired_count(session: &PlayerSession<ScriptedEngine>) -> usize {
    session
        .scheduler()
        .fired_flags()
        .iter()
        .filter(|f| **f)
        .count()
}

fn apply(
    session: &mut PlayerSession<ScriptedEngine>,
    step: &ScriptStep,
    base_dir: &Path,
) -> Option<Entry> {
    let signal = match step {
        ScriptStep::TimeUpdate { at } => {
            session.engine_mut().set_position(*at);
            session.handle_event(PlayerEvent::TimeUpdate)
        }
        ScriptStep::Seek { to } => {
            session.engine_mut().begin_seek(*to);
            let signal = session.handle_event(PlayerEvent::Seeking);
            session.engine_mut().finish_seek();
            signal
        }
        ScriptStep::Play { at } => {
            if let Some(at) = at {
                session.engine_mut().set_position(*at);
            }
            session.engine_mut().play();
            session.handle_event(PlayerEvent::Play)
        }
        ScriptStep::Ended => {
            if let Some(end) = session.engine().duration().filter(|d| d.is_finite()) {
                session.engine_mut().set_position(end);
            }
            session.handle_event(PlayerEvent::Ended)
        }
        ScriptStep::Continue => {
            let at = session.engine().current_time();
            return session.acknowledge().then_some(Entry::Resumed { at });
        }
        ScriptStep::Subtitle { lang, file } => {
            let at = session.engine().current_time();
            let path = base_dir.join(file);
            return Some(match session.load_subtitle(lang, &path) {
                Ok(track) => Entry::SubtitleLoaded {
                    at,
                    lang: track.lang.clone(),
                    label: track.label.clone(),
                    format: track.format.name(),
                },
                Err(e) => Entry::SubtitleFailed {
                    at,
                    lang: lang.clone(),
                    error: e.to_string(),
                },
            });
        }
        ScriptStep::Error { code, message } => session.handle_event(PlayerEvent::Error(MediaError {
            code: *code,
            message: message.clone(),
        })),
    };

    let at = session.engine().current_time();
    match signal {
        SessionSignal::Continue => None,
        SessionSignal::Present {
            index,
            trigger_time,
            ..
        } => Some(Entry::Presented {
            at,
            index,
            trigger_time,
            title: session.scheduler().checkpoints()[index].title(),
        }),
        SessionSignal::Failed(status) => Some(Entry::Failed {
            at,
            status: status.text,
        }),
    }
}

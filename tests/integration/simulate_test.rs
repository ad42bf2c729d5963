//! Integration tests for script simulation against fixtures

use std::path::Path;

use ivp::simulate::{run, Entry, Script};
use ivp::Config;

use super::helpers::{fixture, fixtures_dir};

#[test]
fn walkthrough_fixture_presents_three_times() {
    let script = Script::load(&fixture("walkthrough.jsonl")).unwrap();
    let report = run(&script, &Config::default(), &fixtures_dir());

    assert_eq!(report.presentations(), 3);

    let presented: Vec<f64> = report
        .entries
        .iter()
        .filter_map(|e| match e {
            Entry::Presented { trigger_time, .. } => Some(*trigger_time),
            _ => None,
        })
        .collect();
    assert_eq!(presented, vec![5.0, 5.0, 12.0]);
}

#[test]
fn walkthrough_fixture_loads_subtitles_and_rearms_at_end() {
    let script = Script::load(&fixture("walkthrough.jsonl")).unwrap();
    let report = run(&script, &Config::default(), &fixtures_dir());

    assert!(report.entries.iter().any(|e| matches!(
        e,
        Entry::SubtitleLoaded { lang, format: "VTT", .. } if lang == "en"
    )));
    assert_eq!(
        report.entries.last(),
        Some(&Entry::Rearmed { at: 30.0, count: 2 })
    );
}

#[test]
fn coarse_updates_skip_missed_window() {
    let script = Script::load(&fixture("coarse_updates.jsonl")).unwrap();
    let report = run(&script, &Config::default(), &fixtures_dir());
    assert_eq!(report.presentations(), 0);
}

#[test]
fn wider_window_catches_coarse_updates() {
    let script = Script::load(&fixture("coarse_updates.jsonl")).unwrap();
    let mut config = Config::default();
    config.playback.trigger_window = 1.0;

    let report = run(&script, &config, &fixtures_dir());
    assert_eq!(report.presentations(), 1);
}

#[test]
fn unacknowledged_checkpoint_blocks_the_next() {
    let config = Config::load_from(&fixture("custom_config.toml")).unwrap();
    let script = Script::parse(
        r#"{"duration": 20}
{"event": "time_update", "at": 2.9}
{"event": "time_update", "at": 8.6}
"#,
    )
    .unwrap();

    let report = run(&script, &config, Path::new("."));
    assert_eq!(report.presentations(), 1);
}

#[test]
fn custom_config_checkpoints_drive_simulation() {
    let config = Config::load_from(&fixture("custom_config.toml")).unwrap();
    let script = Script::parse(
        r#"{"duration": 20}
{"event": "time_update", "at": 2.9}
{"event": "continue"}
{"event": "time_update", "at": 8.6}
"#,
    )
    .unwrap();

    let report = run(&script, &config, Path::new("."));
    let titles: Vec<&str> = report
        .entries
        .iter()
        .filter_map(|e| match e {
            Entry::Presented { title, .. } => Some(title.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(titles, vec!["Warm-up", "Plain text break"]);
}

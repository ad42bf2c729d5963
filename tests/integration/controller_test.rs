//! Integration tests for the upload → play → checkpoint flow

use ivp::player::{EngineCommand, ScriptedEngine};
use ivp::upload::StatusKind;
use ivp::{Config, Controller, PlayerEvent, SessionSignal};

use super::helpers::{fixture, temp_file};

const PROCESSED: &str = r#"{
    "message": "Video processed successfully!",
    "hls_url": "/video_stream/7f3a/stream.m3u8",
    "video_id": "7f3a"
}"#;

fn controller() -> Controller<ScriptedEngine, impl FnMut() -> ScriptedEngine> {
    Controller::new(Config::default(), || ScriptedEngine::new(Some(30.0)))
}

/// Move the current session's engine to `position` and report it.
fn report_position<F>(c: &mut Controller<ScriptedEngine, F>, position: f64) -> SessionSignal
where
    F: FnMut() -> ScriptedEngine,
{
    c.session_mut()
        .expect("session should be running")
        .engine_mut()
        .set_position(position);
    c.dispatch(PlayerEvent::TimeUpdate)
}

#[test]
fn upload_then_checkpoint_then_resume() {
    let (_dir, video) = temp_file("lecture.mp4", b"not really a video");
    let mut c = controller();

    let request = c.submit(Some(&video)).expect("valid selection");
    assert_eq!(request.field, "videoFile");
    assert_eq!(c.status().kind, StatusKind::Neutral);

    assert!(c.receive_response(200, PROCESSED));
    assert_eq!(c.status().kind, StatusKind::Success);

    assert_eq!(report_position(&mut c, 4.9), SessionSignal::Continue);
    match report_position(&mut c, 5.2) {
        SessionSignal::Present { trigger_time, .. } => assert_eq!(trigger_time, 5.0),
        other => panic!("expected checkpoint, got {:?}", other),
    }
    assert!(c.session().unwrap().engine().is_paused());

    assert!(c.acknowledge());
    assert!(!c.session().unwrap().engine().is_paused());
    assert_eq!(report_position(&mut c, 5.3), SessionSignal::Continue);
}

#[test]
fn seek_back_replays_checkpoint() {
    let mut c = controller();
    c.receive_response(200, PROCESSED);

    report_position(&mut c, 5.2);
    c.acknowledge();

    let engine = c.session_mut().unwrap().engine_mut();
    engine.begin_seek(3.0);
    c.dispatch(PlayerEvent::Seeking);
    c.session_mut().unwrap().engine_mut().finish_seek();

    assert!(matches!(
        report_position(&mut c, 5.2),
        SessionSignal::Present { index: 0, .. }
    ));
}

#[test]
fn subtitles_attach_and_replace_within_session() {
    let mut c = controller();
    c.receive_response(200, PROCESSED);

    let first = c.load_subtitle("en", &fixture("en.vtt")).unwrap().clone();
    assert!(first.default);
    let second = c.load_subtitle("en", &fixture("en.vtt")).unwrap().clone();
    assert_ne!(first.handle, second.handle);

    let es = c.load_subtitle("es", &fixture("es.srt")).unwrap();
    assert!(!es.default);
    assert_eq!(es.label, "Spanish");

    let engine = c.session().unwrap().engine();
    assert_eq!(engine.tracks().count(), 2);
    assert!(engine
        .commands()
        .contains(&EngineCommand::RevokeUrl(first.object_url.clone())));
}

#[test]
fn new_upload_disposes_previous_session() {
    let mut c = controller();
    c.receive_response(200, PROCESSED);
    c.load_subtitle("en", &fixture("en.vtt")).unwrap();

    let old = c.close().expect("session was running");
    assert_eq!(old.live_object_urls().count(), 0);

    c.receive_response(200, PROCESSED);
    assert!(c.session().unwrap().subtitles().is_empty());
}

#[test]
fn failed_processing_reports_details() {
    let mut c = controller();
    let accepted = c.receive_response(
        500,
        r#"{
            "error": "FFmpeg processing failed.",
            "details": "Invalid data found when processing input"
        }"#,
    );

    assert!(!accepted);
    assert_eq!(
        c.status().text,
        "Error: FFmpeg processing failed. (Invalid data found when processing input)"
    );
    assert!(!c.subtitles_enabled());
}

//! End-to-end navigation scenarios through the threaded pipeline.
//!
//! Scripted adapters stand in for the camera and microphone; the
//! recording sink captures what would have been spoken.

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use common::{building_catalog, building_graph, test_config, RecordingGuidance};
use disha_nav::adapters::{ScriptedScanner, ScriptedVoice, VoiceOutcome};
use disha_nav::directive::Directive;
use disha_nav::events::VoiceFailureReason;
use disha_nav::shared::SharedState;
use disha_nav::threads::{spawn_threads, ThreadHandles};

fn wait_for_session(shared: &SharedState, timeout: Duration) {
    let deadline = Instant::now() + timeout;
    while !shared.is_session_done() {
        assert!(
            Instant::now() < deadline,
            "session did not reach a terminal phase in time"
        );
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn shut_down(shared: &SharedState, handles: ThreadHandles) {
    shared.signal_shutdown();
    handles.scanner.join().expect("scanner thread");
    handles.voice.join().expect("voice thread");
    handles.control.join().expect("control thread");
}

fn spawn(
    scans: Vec<&str>,
    voice: ScriptedVoice,
    shared: &Arc<SharedState>,
    recorder: &RecordingGuidance,
) -> ThreadHandles {
    let catalog = Arc::new(building_catalog());
    let graph = Arc::new(building_graph(&catalog));
    let scans: Vec<String> = scans.into_iter().map(String::from).collect();

    spawn_threads(
        &test_config(),
        catalog,
        graph,
        Arc::clone(shared),
        Box::new(ScriptedScanner::cycling(scans)),
        Box::new(voice),
        Box::new(recorder.clone()),
    )
    .expect("spawn threads")
}

#[test]
fn test_walkthrough_reaches_destination() {
    let shared = Arc::new(SharedState::new());
    let recorder = RecordingGuidance::new();

    // Scan A1, say "A3", walk A1 -> A2 -> B1 -> A3
    let handles = spawn(
        vec!["A1", "A2", "B1", "A3"],
        ScriptedVoice::from_transcripts(vec!["A3".to_string()]),
        &shared,
        &recorder,
    );

    wait_for_session(&shared, Duration::from_secs(5));
    shut_down(&shared, handles);

    let directives = recorder.recorded();
    assert!(directives.contains(&Directive::StartConfirmed {
        name: "Room 515".to_string()
    }));
    assert!(directives.contains(&Directive::DestinationReached));

    // Waypoint arrivals in walking order
    let arrivals: Vec<String> = directives
        .iter()
        .filter_map(|d| match d {
            Directive::ArrivedAtWaypoint { name } => Some(name.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        arrivals,
        vec![
            "Room 515",
            "MTech Lab 514",
            "Intermediate Code 1",
            "Staff Room Door 1",
        ]
    );
}

#[test]
fn test_unreachable_destination_aborts() {
    let shared = Arc::new(SharedState::new());
    let recorder = RecordingGuidance::new();

    // Z9 is in the catalog but no corridor reaches it
    let handles = spawn(
        vec!["A1"],
        ScriptedVoice::from_transcripts(vec!["Z9".to_string()]),
        &shared,
        &recorder,
    );

    wait_for_session(&shared, Duration::from_secs(5));
    shut_down(&shared, handles);

    let directives = recorder.recorded();
    assert!(directives.contains(&Directive::NavigationAborted));
    assert!(!directives.contains(&Directive::DestinationReached));
    assert_eq!(shared.phase_label(), "Aborted");
}

#[test]
fn test_voice_failures_are_retried_until_understood() {
    let shared = Arc::new(SharedState::new());
    let recorder = RecordingGuidance::new();

    // Two failed captures, one unknown code, then the real destination
    let voice = ScriptedVoice::new(vec![
        VoiceOutcome::Failure(VoiceFailureReason::Timeout),
        VoiceOutcome::Failure(VoiceFailureReason::NetworkError),
        VoiceOutcome::Recognized("Q9".to_string()),
        VoiceOutcome::Recognized("A2".to_string()),
    ]);

    let handles = spawn(vec!["A1", "A2"], voice, &shared, &recorder);

    wait_for_session(&shared, Duration::from_secs(5));
    shut_down(&shared, handles);

    let directives = recorder.recorded();
    let retries = directives
        .iter()
        .filter(|d| matches!(d, Directive::RecognitionRetry))
        .count();
    assert_eq!(retries, 2);
    assert!(directives.contains(&Directive::InvalidDestination));
    assert!(directives.contains(&Directive::DestinationReached));
}

#[test]
fn test_unknown_scans_do_not_disturb_navigation() {
    let shared = Arc::new(SharedState::new());
    let recorder = RecordingGuidance::new();

    // Camera noise interleaved with the real markers
    let handles = spawn(
        vec!["", "??", "A1", "junk", "A2", "?"],
        ScriptedVoice::from_transcripts(vec!["A2".to_string()]),
        &shared,
        &recorder,
    );

    wait_for_session(&shared, Duration::from_secs(5));
    shut_down(&shared, handles);

    let directives = recorder.recorded();
    assert!(directives.contains(&Directive::DestinationReached));
    assert_eq!(shared.phase_label(), "Arrived");
}

//! Multi-threaded architecture for DishaNav.
//!
//! Separates concerns into three threads:
//! - Scanner thread: polls the QR scan source and forwards decoded text
//! - Voice thread: captures a destination code when prompted
//! - Control thread: the single event consumer driving the session

mod control;
mod scanner;
mod voice;

pub use control::ControlThread;
pub use scanner::ScannerThread;
pub use voice::{VoicePrompt, VoiceThread};

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::adapters::{GuidanceSink, ScanSource, VoiceInput};
use crate::catalog::WaypointCatalog;
use crate::config::DishaConfig;
use crate::error::Result;
use crate::gateway;
use crate::graph::LocationGraph;
use crate::shared::SharedState;

/// Gateway queue capacity. The scan producer is lossy, so the bound only
/// shapes burst tolerance.
const GATEWAY_CAPACITY: usize = 16;

/// Thread handles for the running controller.
pub struct ThreadHandles {
    pub scanner: JoinHandle<()>,
    pub voice: JoinHandle<()>,
    pub control: JoinHandle<()>,
}

/// Spawn all threads and return handles.
pub fn spawn_threads(
    config: &DishaConfig,
    catalog: Arc<WaypointCatalog>,
    graph: Arc<LocationGraph>,
    shared_state: Arc<SharedState>,
    scan_source: Box<dyn ScanSource>,
    voice_input: Box<dyn VoiceInput>,
    guidance: Box<dyn GuidanceSink>,
) -> Result<ThreadHandles> {
    // Single-consumer gateway serializing all input events
    let (event_tx, event_rx) = gateway::channel(GATEWAY_CAPACITY);

    // Prompt channel: the control thread requests one capture at a time
    let (prompt_tx, prompt_rx) = mpsc::sync_channel::<VoicePrompt>(1);

    // Clone shared state for each thread
    let scanner_state = Arc::clone(&shared_state);
    let voice_state = Arc::clone(&shared_state);
    let control_state = Arc::clone(&shared_state);

    let scan_tx = event_tx.clone();
    let voice_tx = event_tx;

    let poll_interval = config.scanner.poll_interval();

    let scanner_handle = thread::Builder::new()
        .name("scanner".into())
        .spawn(move || {
            let mut scanner =
                ScannerThread::new(scan_source, scan_tx, scanner_state, poll_interval);
            scanner.run();
        })
        .expect("Failed to spawn scanner thread");

    let voice_handle = thread::Builder::new()
        .name("voice".into())
        .spawn(move || {
            let mut voice = VoiceThread::new(voice_input, prompt_rx, voice_tx, voice_state);
            voice.run();
        })
        .expect("Failed to spawn voice thread");

    let control_handle = thread::Builder::new()
        .name("control".into())
        .spawn(move || {
            let mut control = ControlThread::new(
                catalog,
                graph,
                event_rx,
                prompt_tx,
                guidance,
                control_state,
            );
            control.run();
        })
        .expect("Failed to spawn control thread");

    Ok(ThreadHandles {
        scanner: scanner_handle,
        voice: voice_handle,
        control: control_handle,
    })
}

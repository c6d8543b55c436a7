//! DishaNav binary: wires scripted adapters to the navigation controller.
//!
//! Hardware adapters (camera QR decoding, speech recognition, speech
//! synthesis) live outside this crate and plug in through the
//! [`disha_nav::adapters`] traits; the binary runs the controller against
//! the scripted inputs from the `[simulation]` config section.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use disha_nav::adapters::{ConsoleGuidance, ScriptedScanner, ScriptedVoice};
use disha_nav::catalog::{WaypointCatalog, WaypointCode};
use disha_nav::config::DishaConfig;
use disha_nav::error::{DishaError, Result};
use disha_nav::graph::LocationGraph;
use disha_nav::shared::SharedState;
use disha_nav::threads::spawn_threads;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("disha_nav=info".parse().unwrap()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();

    let config = if args.len() > 1 {
        let config_path = Path::new(&args[1]);
        info!("Loading configuration from {:?}", config_path);
        DishaConfig::load(config_path)?
    } else if Path::new("disha.toml").exists() {
        info!("Loading configuration from disha.toml");
        DishaConfig::load(Path::new("disha.toml"))?
    } else {
        return Err(DishaError::Config(
            "no configuration found: pass a config path or provide disha.toml".to_string(),
        ));
    };

    info!("DishaNav v{}", env!("CARGO_PKG_VERSION"));

    // Build the immutable map data, failing fast on config mismatches
    let entries: Vec<(String, String)> = config
        .map
        .waypoints
        .iter()
        .map(|w| (w.code.clone(), w.name.clone()))
        .collect();
    let catalog = Arc::new(WaypointCatalog::from_entries(&entries)?);

    let edges: Vec<(WaypointCode, WaypointCode)> = config
        .map
        .edges
        .iter()
        .map(|(u, v)| (WaypointCode::new(u), WaypointCode::new(v)))
        .collect();
    let graph = Arc::new(LocationGraph::build(&catalog, &edges)?);

    info!(
        "Map loaded: {} waypoints, {} corridors",
        catalog.len(),
        graph.edge_count()
    );

    let Some(sim) = config.simulation.clone() else {
        return Err(DishaError::Config(
            "no [simulation] section: the disha-nav binary needs scripted scan and voice input"
                .to_string(),
        ));
    };

    let scan_source = Box::new(ScriptedScanner::cycling(sim.scans));
    let voice_input = Box::new(ScriptedVoice::from_transcripts(sim.voice));
    let guidance = Box::new(ConsoleGuidance::new());

    let shared_state = Arc::new(SharedState::new());

    // Spawn worker threads
    info!("Starting navigation controller...");
    let handles = spawn_threads(
        &config,
        Arc::clone(&catalog),
        Arc::clone(&graph),
        Arc::clone(&shared_state),
        scan_source,
        voice_input,
        guidance,
    )?;

    // Main thread: monitor and wait for completion
    let check_interval = Duration::from_millis(500);

    loop {
        std::thread::sleep(check_interval);

        if shared_state.is_session_done() {
            info!("Navigation session finished: {}", shared_state.phase_label());
            break;
        }

        if handles.control.is_finished() {
            warn!("Control thread exited unexpectedly");
            break;
        }

        if handles.scanner.is_finished() || handles.voice.is_finished() {
            warn!("A producer thread exited unexpectedly");
            break;
        }
    }

    // Signal shutdown to all threads
    shared_state.signal_shutdown();

    info!("Waiting for threads to finish...");

    if let Err(e) = handles.scanner.join() {
        error!("Scanner thread panicked: {:?}", e);
    }
    if let Err(e) = handles.voice.join() {
        error!("Voice thread panicked: {:?}", e);
    }
    if let Err(e) = handles.control.join() {
        error!("Control thread panicked: {:?}", e);
    }

    info!("DishaNav finished");
    Ok(())
}

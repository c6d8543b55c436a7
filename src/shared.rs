//! Shared state between the worker threads.
//!
//! Flags and counters shared by the scanner, voice, control, and main
//! threads. The catalog and graph are shared separately as immutable
//! `Arc` data and need no synchronization.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use crate::session::SessionPhase;

const PHASE_AWAITING_START: u8 = 0;
const PHASE_AWAITING_DESTINATION: u8 = 1;
const PHASE_ROUTE_PLANNED: u8 = 2;
const PHASE_NAVIGATING: u8 = 3;
const PHASE_ARRIVED: u8 = 4;
const PHASE_ABORTED: u8 = 5;

fn encode_phase(phase: SessionPhase) -> u8 {
    match phase {
        SessionPhase::AwaitingStart => PHASE_AWAITING_START,
        SessionPhase::AwaitingDestination => PHASE_AWAITING_DESTINATION,
        SessionPhase::RoutePlanned => PHASE_ROUTE_PLANNED,
        SessionPhase::Navigating => PHASE_NAVIGATING,
        SessionPhase::Arrived => PHASE_ARRIVED,
        SessionPhase::Aborted(_) => PHASE_ABORTED,
    }
}

/// Shared state between all threads.
#[derive(Debug)]
pub struct SharedState {
    /// Shutdown signal for graceful termination
    shutdown: AtomicBool,
    /// Set once the session reaches a terminal phase
    session_done: AtomicBool,
    /// Snapshot of the session phase for status reporting
    phase: AtomicU8,
    /// Number of decodes forwarded by the scanner thread
    scans_forwarded: AtomicU32,
    /// Number of events consumed by the control thread
    events_processed: AtomicU32,
}

impl SharedState {
    /// Create new shared state for a fresh session.
    pub fn new() -> Self {
        Self {
            shutdown: AtomicBool::new(false),
            session_done: AtomicBool::new(false),
            phase: AtomicU8::new(PHASE_AWAITING_START),
            scans_forwarded: AtomicU32::new(0),
            events_processed: AtomicU32::new(0),
        }
    }

    /// Signal shutdown.
    pub fn signal_shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
    }

    /// Check if shutdown is signaled.
    pub fn should_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    /// Mark the session as terminally finished.
    pub fn set_session_done(&self) {
        self.session_done.store(true, Ordering::Release);
    }

    /// Check if the session reached a terminal phase.
    pub fn is_session_done(&self) -> bool {
        self.session_done.load(Ordering::Acquire)
    }

    /// Record the phase reached after the latest event.
    pub fn set_phase(&self, phase: SessionPhase) {
        self.phase.store(encode_phase(phase), Ordering::Release);
    }

    /// Label of the last recorded phase, for status logs.
    pub fn phase_label(&self) -> &'static str {
        match self.phase.load(Ordering::Acquire) {
            PHASE_AWAITING_START => "Awaiting start scan",
            PHASE_AWAITING_DESTINATION => "Awaiting destination",
            PHASE_ROUTE_PLANNED => "Route planned",
            PHASE_NAVIGATING => "Navigating",
            PHASE_ARRIVED => "Arrived",
            _ => "Aborted",
        }
    }

    /// Increment the forwarded-scan count.
    pub fn increment_scans(&self) {
        self.scans_forwarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn scans_forwarded(&self) -> u32 {
        self.scans_forwarded.load(Ordering::Relaxed)
    }

    /// Increment the consumed-event count.
    pub fn increment_events(&self) {
        self.events_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn events_processed(&self) -> u32 {
        self.events_processed.load(Ordering::Relaxed)
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

//! Control thread: the single consumer of the event gateway.
//!
//! Owns the navigation session, announces its directives through the
//! guidance sink, and drives the caller side of the voice retry loop.

use std::sync::mpsc::{SyncSender, TrySendError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::adapters::GuidanceSink;
use crate::catalog::WaypointCatalog;
use crate::directive::Directive;
use crate::gateway::EventGateway;
use crate::graph::LocationGraph;
use crate::session::NavigationSession;
use crate::shared::SharedState;

use super::voice::VoicePrompt;

/// Control thread state and logic.
pub struct ControlThread {
    session: NavigationSession,
    events: EventGateway,
    voice_prompts: SyncSender<VoicePrompt>,
    guidance: Box<dyn GuidanceSink>,
    shared_state: Arc<SharedState>,
    last_status_time: Instant,
    status_interval: Duration,
}

impl ControlThread {
    /// Create a new control thread with a fresh session.
    pub fn new(
        catalog: Arc<WaypointCatalog>,
        graph: Arc<LocationGraph>,
        events: EventGateway,
        voice_prompts: SyncSender<VoicePrompt>,
        guidance: Box<dyn GuidanceSink>,
        shared_state: Arc<SharedState>,
    ) -> Self {
        Self {
            session: NavigationSession::new(catalog, graph),
            events,
            voice_prompts,
            guidance,
            shared_state,
            last_status_time: Instant::now(),
            status_interval: Duration::from_secs(3),
        }
    }

    /// Run the control loop until the session ends or shutdown is signaled.
    pub fn run(&mut self) {
        tracing::info!("Control thread started, waiting for the starting scan");

        let recv_timeout = Duration::from_millis(100);

        loop {
            if self.shared_state.should_shutdown() {
                tracing::info!("Control thread shutting down");
                break;
            }

            if let Some(event) = self.events.recv_timeout(recv_timeout) {
                self.shared_state.increment_events();

                let step = self.session.handle(&event);
                self.shared_state.set_phase(step.phase);

                for directive in &step.directives {
                    self.guidance.announce(directive);
                    self.react(directive);
                }

                if step.phase.is_terminal() {
                    tracing::info!("Session ended: {}", step.phase.label());
                    self.shared_state.set_session_done();
                    break;
                }
            }

            if self.last_status_time.elapsed() >= self.status_interval {
                self.log_status();
                self.last_status_time = Instant::now();
            }
        }
    }

    /// Caller-side reactions to announced directives.
    fn react(&mut self, directive: &Directive) {
        match directive {
            // The destination arrives by voice: prompt once on entering the
            // waiting phase and again after every failed attempt
            Directive::StartConfirmed { .. }
            | Directive::InvalidDestination
            | Directive::RecognitionRetry => self.request_voice_capture(),
            _ => {}
        }
    }

    fn request_voice_capture(&self) {
        match self.voice_prompts.try_send(VoicePrompt) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                // One outstanding prompt is enough
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!("Voice thread gone, cannot request destination");
            }
        }
    }

    fn log_status(&self) {
        tracing::info!(
            "Session: phase={}, events={}, scans={}",
            self.session.phase().label(),
            self.shared_state.events_processed(),
            self.shared_state.scans_forwarded(),
        );
    }
}

//! Voice thread: captures a destination code when prompted.
//!
//! The control thread sends one prompt per capture attempt; each prompt
//! produces exactly one result or failure event. Blocking and timeouts
//! stay inside the voice adapter.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::{VoiceInput, VoiceOutcome};
use crate::events::NavEvent;
use crate::gateway::EventSender;
use crate::shared::SharedState;

/// Marker sent by the control thread to request one voice capture.
#[derive(Clone, Copy, Debug)]
pub struct VoicePrompt;

/// Voice thread state and logic.
pub struct VoiceThread {
    input: Box<dyn VoiceInput>,
    prompts: Receiver<VoicePrompt>,
    events: EventSender,
    shared_state: Arc<SharedState>,
}

impl VoiceThread {
    /// Create a new voice thread.
    pub fn new(
        input: Box<dyn VoiceInput>,
        prompts: Receiver<VoicePrompt>,
        events: EventSender,
        shared_state: Arc<SharedState>,
    ) -> Self {
        Self {
            input,
            prompts,
            events,
            shared_state,
        }
    }

    /// Run the voice loop until shutdown.
    pub fn run(&mut self) {
        tracing::info!("Voice thread started");

        let poll = Duration::from_millis(100);

        loop {
            if self.shared_state.should_shutdown() {
                tracing::info!("Voice thread shutting down");
                break;
            }

            match self.prompts.recv_timeout(poll) {
                Ok(VoicePrompt) => self.capture(),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::info!("Prompt channel closed, voice thread exiting");
                    break;
                }
            }
        }
    }

    /// One capture attempt: listen, then forward the outcome.
    fn capture(&mut self) {
        tracing::info!("Listening for destination code...");

        let event = match self.input.listen() {
            VoiceOutcome::Recognized(text) => {
                tracing::info!("Recognized (voice): {}", text);
                NavEvent::VoiceResult { text }
            }
            VoiceOutcome::Failure(reason) => {
                tracing::warn!("Voice capture failed: {:?}", reason);
                NavEvent::VoiceFailure { reason }
            }
        };

        // Blocking send: a capture result must not be lost
        if !self.events.send(event) {
            tracing::warn!("Event gateway closed, voice result dropped");
        }
    }
}

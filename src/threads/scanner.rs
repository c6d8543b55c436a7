//! Scanner thread: polls the QR scan source and forwards decodes.
//!
//! Decoded text is forwarded as-is, even when empty or unknown: tolerance
//! for camera noise lives in the session's transition table, not here.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::ScanSource;
use crate::events::NavEvent;
use crate::gateway::EventSender;
use crate::shared::SharedState;

/// Scanner thread state and logic.
pub struct ScannerThread {
    source: Box<dyn ScanSource>,
    events: EventSender,
    shared_state: Arc<SharedState>,
    poll_interval: Duration,
}

impl ScannerThread {
    /// Create a new scanner thread.
    pub fn new(
        source: Box<dyn ScanSource>,
        events: EventSender,
        shared_state: Arc<SharedState>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            source,
            events,
            shared_state,
            poll_interval,
        }
    }

    /// Run the scanner loop until shutdown.
    pub fn run(&mut self) {
        tracing::info!("Scanner thread started");

        loop {
            if self.shared_state.should_shutdown() {
                tracing::info!("Scanner thread shutting down");
                break;
            }

            match self.source.next_scan() {
                Ok(Some(code)) => {
                    self.shared_state.increment_scans();
                    tracing::debug!("Decoded {:?}", code);

                    // A dropped decode is re-scanned on the next poll
                    if !self.events.try_send(NavEvent::Scan { code }) {
                        tracing::warn!("Scan dropped (queue full or closed)");
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Scan source error: {}", e);
                }
            }

            std::thread::sleep(self.poll_interval);
        }
    }
}

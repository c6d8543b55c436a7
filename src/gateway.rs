//! Event gateway: the single ordered consumption point for input events.
//!
//! Multiple producers (the scan and voice threads) feed one bounded queue;
//! the control thread is the only consumer. The session therefore sees a
//! serialized event stream and transitions atomically per event.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TrySendError};
use std::time::Duration;

use crate::events::NavEvent;

/// Producer handle into the gateway. Clone one per producer thread.
#[derive(Clone)]
pub struct EventSender {
    tx: SyncSender<NavEvent>,
}

impl EventSender {
    /// Queue an event without blocking.
    ///
    /// Returns `false` when the queue is full or the consumer is gone.
    /// The scan producer uses this: a dropped decode is re-scanned on the
    /// next poll.
    pub fn try_send(&self, event: NavEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) | Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Queue an event, blocking while the queue is full.
    ///
    /// The voice producer uses this: a recognition result must not be
    /// lost. Returns `false` when the consumer is gone.
    pub fn send(&self, event: NavEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Consumer end of the gateway. Exactly one per session control loop.
pub struct EventGateway {
    rx: Receiver<NavEvent>,
}

impl EventGateway {
    /// Wait up to `timeout` for the next event.
    ///
    /// `None` covers both an idle queue and disconnected producers; the
    /// control loop distinguishes shutdown through the shared state.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<NavEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Create a gateway with the given queue capacity.
pub fn channel(capacity: usize) -> (EventSender, EventGateway) {
    let (tx, rx) = mpsc::sync_channel(capacity);
    (EventSender { tx }, EventGateway { rx })
}

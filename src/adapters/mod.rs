//! Adapter seams for the excluded I/O surfaces.
//!
//! The controller never owns a camera, microphone, or speech engine. It
//! talks to them through these traits; the scripted implementations give
//! hardware-free runs for simulation and tests.

mod console;
mod scripted;

pub use console::ConsoleGuidance;
pub use scripted::{ScriptedScanner, ScriptedVoice};

use crate::directive::Directive;
use crate::error::Result;
use crate::events::VoiceFailureReason;

/// Outcome of one blocking voice capture attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoiceOutcome {
    /// A transcript was recognized (not yet validated as a waypoint code)
    Recognized(String),
    /// Capture failed; the reason feeds a retry directive
    Failure(VoiceFailureReason),
}

/// A source of decoded QR text, polled by the scanner thread.
pub trait ScanSource: Send {
    /// One decode attempt. `Ok(None)` means no code is in view.
    fn next_scan(&mut self) -> Result<Option<String>>;
}

/// A blocking voice capture device, driven by the voice thread.
///
/// Implementations own their timeout: a capture that hears nothing must
/// return `Failure(Timeout)` rather than block forever.
pub trait VoiceInput: Send {
    fn listen(&mut self) -> VoiceOutcome;
}

/// Renders directives as speech and/or log output.
pub trait GuidanceSink: Send {
    fn announce(&mut self, directive: &Directive);
}

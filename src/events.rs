//! Event shapes delivered by the input adapters.
//!
//! Producers push these through the event gateway; the navigation session
//! consumes them one at a time.

/// Why a voice capture attempt produced no destination code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceFailureReason {
    /// No speech arrived before the producer's deadline
    Timeout,
    /// Speech was captured but not understood
    Unintelligible,
    /// The recognition backend could not be reached
    NetworkError,
}

/// An input event for the navigation session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Raw decoded text from the QR detector; may be empty or unknown
    Scan { code: String },
    /// A recognized voice transcript, expected to name a destination code
    VoiceResult { text: String },
    /// Voice capture failed; the session answers with a retry directive
    VoiceFailure { reason: VoiceFailureReason },
}

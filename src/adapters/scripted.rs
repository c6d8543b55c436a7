//! Scripted input adapters for hardware-free runs.

use super::{ScanSource, VoiceInput, VoiceOutcome};
use crate::error::Result;
use crate::events::VoiceFailureReason;

/// Replays a fixed sequence of decoded QR strings, one per poll.
pub struct ScriptedScanner {
    script: Vec<String>,
    position: usize,
    cycling: bool,
}

impl ScriptedScanner {
    /// One-shot script: once exhausted, every poll sees an empty view.
    pub fn new(script: Vec<String>) -> Self {
        Self {
            script,
            position: 0,
            cycling: false,
        }
    }

    /// Cycling script: restarts from the top when exhausted, like a camera
    /// that keeps re-reading the markers in front of it.
    pub fn cycling(script: Vec<String>) -> Self {
        Self {
            script,
            position: 0,
            cycling: true,
        }
    }
}

impl ScanSource for ScriptedScanner {
    fn next_scan(&mut self) -> Result<Option<String>> {
        if self.position >= self.script.len() {
            if !self.cycling || self.script.is_empty() {
                return Ok(None);
            }
            self.position = 0;
        }

        let code = self.script[self.position].clone();
        self.position += 1;
        Ok(Some(code))
    }
}

/// Replays a fixed sequence of voice capture outcomes.
///
/// An exhausted script behaves like silence: every further capture times
/// out.
pub struct ScriptedVoice {
    script: std::vec::IntoIter<VoiceOutcome>,
}

impl ScriptedVoice {
    pub fn new(script: Vec<VoiceOutcome>) -> Self {
        Self {
            script: script.into_iter(),
        }
    }

    /// Convenience constructor from plain transcripts.
    pub fn from_transcripts(transcripts: Vec<String>) -> Self {
        Self::new(
            transcripts
                .into_iter()
                .map(VoiceOutcome::Recognized)
                .collect(),
        )
    }
}

impl VoiceInput for ScriptedVoice {
    fn listen(&mut self) -> VoiceOutcome {
        self.script
            .next()
            .unwrap_or(VoiceOutcome::Failure(VoiceFailureReason::Timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_script_exhausts_to_empty_view() {
        let mut scanner = ScriptedScanner::new(vec!["A1".to_string()]);

        assert_eq!(scanner.next_scan().unwrap(), Some("A1".to_string()));
        assert_eq!(scanner.next_scan().unwrap(), None);
        assert_eq!(scanner.next_scan().unwrap(), None);
    }

    #[test]
    fn test_cycling_script_repeats() {
        let mut scanner =
            ScriptedScanner::cycling(vec!["A1".to_string(), "A2".to_string()]);

        assert_eq!(scanner.next_scan().unwrap(), Some("A1".to_string()));
        assert_eq!(scanner.next_scan().unwrap(), Some("A2".to_string()));
        assert_eq!(scanner.next_scan().unwrap(), Some("A1".to_string()));
    }

    #[test]
    fn test_empty_cycling_script_sees_nothing() {
        let mut scanner = ScriptedScanner::cycling(Vec::new());
        assert_eq!(scanner.next_scan().unwrap(), None);
    }

    #[test]
    fn test_exhausted_voice_script_times_out() {
        let mut voice = ScriptedVoice::from_transcripts(vec!["A5".to_string()]);

        assert_eq!(voice.listen(), VoiceOutcome::Recognized("A5".to_string()));
        assert_eq!(
            voice.listen(),
            VoiceOutcome::Failure(VoiceFailureReason::Timeout)
        );
    }
}

//! Log-backed guidance renderer.
//!
//! Stands in for the text-to-speech adapter: every directive becomes the
//! sentence the speech engine would say, emitted through `tracing`.

use super::GuidanceSink;
use crate::directive::Directive;

/// Renders directives as spoken-style log lines.
#[derive(Debug, Default)]
pub struct ConsoleGuidance;

impl ConsoleGuidance {
    pub fn new() -> Self {
        Self
    }

    /// The sentence a speech engine would render for this directive.
    pub fn phrase(directive: &Directive) -> String {
        match directive {
            Directive::StartConfirmed { name } => {
                format!("Starting location detected: {}.", name)
            }
            Directive::InvalidDestination => {
                "Invalid destination code. Please try again.".to_string()
            }
            Directive::RecognitionRetry => {
                "Sorry, I did not catch that. Please try again.".to_string()
            }
            Directive::RouteAnnounced { codes } => {
                let joined = codes
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Route found: {}.", joined)
            }
            Directive::NavigationAborted => {
                "No path found to the destination. Ending navigation.".to_string()
            }
            Directive::ArrivedAtWaypoint { name } => format!("You are at {}.", name),
            Directive::NextWaypointHint { name } => {
                format!("Next, please take ten steps forward to {}.", name)
            }
            Directive::UnexpectedWaypoint => {
                "This is not the expected code. Please keep scanning.".to_string()
            }
            Directive::DestinationReached => {
                "You have reached your destination. Navigation complete.".to_string()
            }
        }
    }
}

impl GuidanceSink for ConsoleGuidance {
    fn announce(&mut self, directive: &Directive) {
        tracing::info!("[guidance] {}", Self::phrase(directive));
    }
}

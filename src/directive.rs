//! Guidance directives emitted by the navigation session.
//!
//! A directive is an instruction for the guidance adapter to render as
//! speech and/or log output; the session itself never speaks.

use crate::catalog::WaypointCode;

/// Instruction for the guidance adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// The starting location was scanned and recognized
    StartConfirmed { name: String },
    /// The recognized destination is not a known waypoint
    InvalidDestination,
    /// Voice capture failed; ask the user to try again
    RecognitionRetry,
    /// A route was planned; codes in walking order
    RouteAnnounced { codes: Vec<WaypointCode> },
    /// No route exists to the destination; the session has ended
    NavigationAborted,
    /// The expected waypoint was scanned
    ArrivedAtWaypoint { name: String },
    /// Name of the next waypoint to walk toward
    NextWaypointHint { name: String },
    /// A known waypoint was scanned, but not the expected one
    UnexpectedWaypoint,
    /// The final waypoint was reached; navigation is complete
    DestinationReached,
}

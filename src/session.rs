//! Navigation session state machine.
//!
//! One session is one start-to-destination attempt. The session consumes
//! scan and voice events (already serialized by the event gateway) and
//! emits guidance directives; it never blocks and never speaks itself.
//!
//! Noisy input (undecodable scans, unknown codes, unrecognized speech) is
//! absorbed by the transition table. The only terminal failure is an
//! impossible route.

use std::sync::Arc;

use crate::catalog::{WaypointCatalog, WaypointCode};
use crate::directive::Directive;
use crate::events::NavEvent;
use crate::graph::LocationGraph;
use crate::planning::{self, Route};

/// Why a session ended without reaching the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// The destination is unreachable from the start
    NoPath,
}

/// Phase of a navigation session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the user to scan the starting waypoint
    AwaitingStart,
    /// Waiting for a voice-recognized destination code
    AwaitingDestination,
    /// Destination recorded, planning pending. Planning is synchronous, so
    /// this phase is entered and resolved within the same event that
    /// recorded the destination.
    RoutePlanned,
    /// Guiding the user along the planned route
    Navigating,
    /// Destination reached (terminal)
    Arrived,
    /// Session ended without reaching the destination (terminal)
    Aborted(AbortReason),
}

impl SessionPhase {
    /// Human-readable label for status logs.
    pub fn label(&self) -> &'static str {
        match self {
            SessionPhase::AwaitingStart => "Awaiting start scan",
            SessionPhase::AwaitingDestination => "Awaiting destination",
            SessionPhase::RoutePlanned => "Route planned",
            SessionPhase::Navigating => "Navigating",
            SessionPhase::Arrived => "Arrived",
            SessionPhase::Aborted(_) => "Aborted",
        }
    }

    /// Terminal phases accept no further events.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionPhase::Arrived | SessionPhase::Aborted(_))
    }
}

/// Result of feeding one event to the session.
#[derive(Clone, Debug)]
pub struct SessionStep {
    /// Phase after the event was absorbed
    pub phase: SessionPhase,
    /// Directives for the guidance adapter, in announcement order
    pub directives: Vec<Directive>,
}

/// One start-to-destination navigation attempt.
///
/// Owned by the control thread; all mutation happens through [`handle`],
/// one event at a time, so `phase` and `route_index` transition
/// atomically per event.
///
/// [`handle`]: NavigationSession::handle
pub struct NavigationSession {
    catalog: Arc<WaypointCatalog>,
    graph: Arc<LocationGraph>,
    phase: SessionPhase,
    current_location: Option<WaypointCode>,
    destination: Option<WaypointCode>,
    route: Option<Route>,
    route_index: usize,
}

impl NavigationSession {
    /// Create a session waiting for its starting scan.
    pub fn new(catalog: Arc<WaypointCatalog>, graph: Arc<LocationGraph>) -> Self {
        Self {
            catalog,
            graph,
            phase: SessionPhase::AwaitingStart,
            current_location: None,
            destination: None,
            route: None,
            route_index: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_location(&self) -> Option<&WaypointCode> {
        self.current_location.as_ref()
    }

    pub fn destination(&self) -> Option<&WaypointCode> {
        self.destination.as_ref()
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn route_index(&self) -> usize {
        self.route_index
    }

    /// Feed one event to the session.
    ///
    /// Never fails: noisy input is ignored or answered with a retry
    /// directive, and terminal phases swallow everything.
    pub fn handle(&mut self, event: &NavEvent) -> SessionStep {
        let mut directives = Vec::new();

        match self.phase {
            SessionPhase::AwaitingStart => {
                self.handle_awaiting_start(event, &mut directives)
            }
            SessionPhase::AwaitingDestination => {
                self.handle_awaiting_destination(event, &mut directives)
            }
            // Planning resolves within the destination event; nothing
            // arrives while this phase is current
            SessionPhase::RoutePlanned => {}
            SessionPhase::Navigating => self.handle_navigating(event, &mut directives),
            // Terminal: the caller discards the session
            SessionPhase::Arrived | SessionPhase::Aborted(_) => {}
        }

        SessionStep {
            phase: self.phase,
            directives,
        }
    }

    fn handle_awaiting_start(&mut self, event: &NavEvent, directives: &mut Vec<Directive>) {
        let NavEvent::Scan { code } = event else {
            return;
        };

        let code = WaypointCode::new(code);
        let Some(name) = self.catalog.lookup(&code) else {
            // Unknown or undecodable scan: keep scanning
            return;
        };

        tracing::info!("Start location {} ({})", code, name);
        directives.push(Directive::StartConfirmed {
            name: name.to_string(),
        });
        self.current_location = Some(code);
        self.phase = SessionPhase::AwaitingDestination;
    }

    fn handle_awaiting_destination(
        &mut self,
        event: &NavEvent,
        directives: &mut Vec<Directive>,
    ) {
        match event {
            NavEvent::VoiceResult { text } => {
                let code = WaypointCode::new(text);
                if !self.catalog.contains(&code) {
                    tracing::info!("Rejected destination {:?}", text);
                    directives.push(Directive::InvalidDestination);
                    return;
                }

                tracing::info!("Destination {}", code);
                self.destination = Some(code.clone());
                self.phase = SessionPhase::RoutePlanned;
                self.plan_route(code, directives);
            }
            NavEvent::VoiceFailure { reason } => {
                tracing::debug!("Voice capture failed: {:?}", reason);
                directives.push(Directive::RecognitionRetry);
            }
            // Scans are not consulted while the destination is captured
            NavEvent::Scan { .. } => {}
        }
    }

    /// Run the planner for the recorded start and destination.
    fn plan_route(&mut self, goal: WaypointCode, directives: &mut Vec<Directive>) {
        let Some(start) = self.current_location.clone() else {
            // AwaitingDestination is only reachable after a start scan
            return;
        };

        match planning::plan(&self.graph, &start, &goal) {
            Ok(Some(route)) => {
                tracing::info!(
                    "Route planned: {} waypoints, {} edges",
                    route.len(),
                    route.edge_count()
                );
                directives.push(Directive::RouteAnnounced {
                    codes: route.waypoints().to_vec(),
                });
                self.route = Some(route);
                self.route_index = 0;
                self.phase = SessionPhase::Navigating;
            }
            Ok(None) => {
                tracing::warn!("No route from {} to {}", start, goal);
                directives.push(Directive::NavigationAborted);
                self.phase = SessionPhase::Aborted(AbortReason::NoPath);
            }
            Err(e) => {
                // Startup validation guarantees every catalog code is a
                // graph node; treat a planner rejection like an impossible
                // route instead of crossing the event loop with an error
                tracing::error!("Planner rejected validated waypoints: {}", e);
                directives.push(Directive::NavigationAborted);
                self.phase = SessionPhase::Aborted(AbortReason::NoPath);
            }
        }
    }

    fn handle_navigating(&mut self, event: &NavEvent, directives: &mut Vec<Directive>) {
        let NavEvent::Scan { code } = event else {
            return;
        };

        let code = WaypointCode::new(code);
        if !self.catalog.contains(&code) {
            // Unknown or undecodable scan: keep scanning
            return;
        }

        let Some(route) = self.route.as_ref() else {
            return;
        };
        let Some(expected) = route.get(self.route_index) else {
            return;
        };

        if &code != expected {
            // A known waypoint, but not the one ahead: the user has not
            // reached the expected point yet, so the index stays put
            tracing::debug!("Scanned {} while expecting {}", code, expected);
            directives.push(Directive::UnexpectedWaypoint);
            return;
        }

        let name = self
            .catalog
            .lookup(&code)
            .unwrap_or(code.as_str())
            .to_string();
        directives.push(Directive::ArrivedAtWaypoint { name });

        if route.is_last_index(self.route_index) {
            tracing::info!("Destination reached at {}", code);
            directives.push(Directive::DestinationReached);
            self.phase = SessionPhase::Arrived;
            self.current_location = Some(code);
            return;
        }

        self.route_index += 1;
        if let Some(next) = route.get(self.route_index) {
            let next_name = self
                .catalog
                .lookup(next)
                .unwrap_or(next.as_str())
                .to_string();
            tracing::info!(
                "Waypoint {}/{} confirmed, next is {}",
                self.route_index,
                route.len(),
                next
            );
            directives.push(Directive::NextWaypointHint { name: next_name });
        }
        self.current_location = Some(code);
    }
}

//! A planned route: an ordered chain of adjacent waypoints.

use crate::catalog::WaypointCode;

/// Shortest waypoint sequence from a session's start to its destination.
///
/// Always non-empty; consecutive elements are adjacent in the location
/// graph. A single-element route means start and destination coincide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    waypoints: Vec<WaypointCode>,
}

impl Route {
    /// Wrap a waypoint sequence; `None` when the sequence is empty.
    pub(crate) fn from_waypoints(waypoints: Vec<WaypointCode>) -> Option<Self> {
        if waypoints.is_empty() {
            None
        } else {
            Some(Self { waypoints })
        }
    }

    /// Waypoints in walking order.
    pub fn waypoints(&self) -> &[WaypointCode] {
        &self.waypoints
    }

    pub fn get(&self, index: usize) -> Option<&WaypointCode> {
        self.waypoints.get(index)
    }

    pub fn first(&self) -> &WaypointCode {
        &self.waypoints[0]
    }

    pub fn last(&self) -> &WaypointCode {
        &self.waypoints[self.waypoints.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Number of corridors walked along the route.
    pub fn edge_count(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Whether `index` points at the destination.
    pub fn is_last_index(&self, index: usize) -> bool {
        index + 1 == self.waypoints.len()
    }
}

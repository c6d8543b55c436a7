//! Breadth-first shortest-path search.

use std::collections::{HashMap, VecDeque};

use crate::catalog::WaypointCode;
use crate::error::{DishaError, Result};
use crate::graph::LocationGraph;

use super::route::Route;

/// Plan the shortest route between two waypoints.
///
/// `Ok(None)` means the waypoints lie in disconnected parts of the
/// building: a normal outcome the caller ends the session on, not an
/// error. An endpoint outside the graph is a configuration error;
/// startup validation makes that unreachable in a running controller.
/// Ties between equally short routes are broken by lexicographic
/// neighbor order.
pub fn plan(
    graph: &LocationGraph,
    start: &WaypointCode,
    goal: &WaypointCode,
) -> Result<Option<Route>> {
    if !graph.contains(start) {
        return Err(DishaError::UnknownWaypoint(start.to_string()));
    }
    if !graph.contains(goal) {
        return Err(DishaError::UnknownWaypoint(goal.to_string()));
    }

    if start == goal {
        return Ok(Route::from_waypoints(vec![start.clone()]));
    }

    let mut parent: HashMap<WaypointCode, WaypointCode> = HashMap::new();
    let mut queue = VecDeque::new();

    parent.insert(start.clone(), start.clone()); // Start is its own parent
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current)? {
            if parent.contains_key(neighbor) {
                continue;
            }
            parent.insert(neighbor.clone(), current.clone());

            if neighbor == goal {
                return Ok(Route::from_waypoints(reconstruct(&parent, goal)));
            }
            queue.push_back(neighbor.clone());
        }
    }

    // Goal unreachable from start
    Ok(None)
}

/// Walk the parent map back from the goal to the start.
fn reconstruct(
    parent: &HashMap<WaypointCode, WaypointCode>,
    goal: &WaypointCode,
) -> Vec<WaypointCode> {
    let mut path = Vec::new();
    let mut current = goal.clone();

    loop {
        path.push(current.clone());
        match parent.get(&current) {
            Some(p) if p != &current => current = p.clone(),
            _ => break,
        }
    }

    path.reverse();
    path
}

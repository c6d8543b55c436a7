//! Location graph: walkable-corridor adjacency over waypoint codes.
//!
//! The graph is built once at startup from the configured edge list and
//! never mutated afterwards, so all threads may read it unsynchronized
//! behind an `Arc`.

use std::collections::{BTreeSet, HashMap};

use crate::catalog::{WaypointCatalog, WaypointCode};
use crate::error::{DishaError, Result};

/// Undirected adjacency over the catalog's waypoints.
#[derive(Clone, Debug)]
pub struct LocationGraph {
    adjacency: HashMap<WaypointCode, BTreeSet<WaypointCode>>,
}

impl LocationGraph {
    /// Build the graph from the configured corridor list.
    ///
    /// Every catalog code becomes a node, even when no corridor touches it.
    /// Each (u, v) pair is inserted in both directions; repeated pairs are
    /// idempotent. An endpoint missing from the catalog is a configuration
    /// error and aborts startup.
    pub fn build(
        catalog: &WaypointCatalog,
        edges: &[(WaypointCode, WaypointCode)],
    ) -> Result<Self> {
        let mut adjacency: HashMap<WaypointCode, BTreeSet<WaypointCode>> = catalog
            .codes()
            .map(|code| (code.clone(), BTreeSet::new()))
            .collect();

        for (u, v) in edges {
            if !catalog.contains(u) {
                return Err(DishaError::UnknownWaypoint(u.to_string()));
            }
            if !catalog.contains(v) {
                return Err(DishaError::UnknownWaypoint(v.to_string()));
            }

            adjacency.entry(u.clone()).or_default().insert(v.clone());
            adjacency.entry(v.clone()).or_default().insert(u.clone());
        }

        Ok(Self { adjacency })
    }

    pub fn contains(&self, code: &WaypointCode) -> bool {
        self.adjacency.contains_key(code)
    }

    /// Neighbors of a node, in deterministic (lexicographic) order.
    pub fn neighbors(
        &self,
        code: &WaypointCode,
    ) -> Result<impl Iterator<Item = &WaypointCode>> {
        self.adjacency
            .get(code)
            .map(|set| set.iter())
            .ok_or_else(|| DishaError::UnknownWaypoint(code.to_string()))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected corridors.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(codes: &[&str]) -> WaypointCatalog {
        let entries: Vec<(String, String)> = codes
            .iter()
            .map(|c| (c.to_string(), format!("Location {}", c)))
            .collect();
        WaypointCatalog::from_entries(&entries).unwrap()
    }

    fn edges(pairs: &[(&str, &str)]) -> Vec<(WaypointCode, WaypointCode)> {
        pairs
            .iter()
            .map(|(u, v)| (WaypointCode::new(u), WaypointCode::new(v)))
            .collect()
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let catalog = catalog(&["A1", "A2", "B1", "B2"]);
        let graph =
            LocationGraph::build(&catalog, &edges(&[("A1", "A2"), ("A2", "B1"), ("B1", "B2")]))
                .unwrap();

        for code in catalog.codes() {
            for neighbor in graph.neighbors(code).unwrap() {
                let back: Vec<_> = graph.neighbors(neighbor).unwrap().collect();
                assert!(back.contains(&code), "{} -> {} has no reverse edge", code, neighbor);
            }
        }
    }

    #[test]
    fn test_duplicate_edges_are_idempotent() {
        let catalog = catalog(&["A1", "A2"]);
        let graph = LocationGraph::build(
            &catalog,
            &edges(&[("A1", "A2"), ("A1", "A2"), ("A2", "A1")]),
        )
        .unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&WaypointCode::new("A1")).unwrap().count(), 1);
    }

    #[test]
    fn test_isolated_node_is_legal() {
        let catalog = catalog(&["A1", "A2", "Z9"]);
        let graph = LocationGraph::build(&catalog, &edges(&[("A1", "A2")])).unwrap();

        assert!(graph.contains(&WaypointCode::new("Z9")));
        assert_eq!(graph.neighbors(&WaypointCode::new("Z9")).unwrap().count(), 0);
    }

    #[test]
    fn test_edge_endpoint_outside_catalog_is_rejected() {
        let catalog = catalog(&["A1"]);
        let result = LocationGraph::build(&catalog, &edges(&[("A1", "A2")]));

        assert!(matches!(result, Err(DishaError::UnknownWaypoint(_))));
    }

    #[test]
    fn test_neighbors_of_unknown_node_fails() {
        let catalog = catalog(&["A1"]);
        let graph = LocationGraph::build(&catalog, &[]).unwrap();

        assert!(graph.neighbors(&WaypointCode::new("Q5")).is_err());
    }
}

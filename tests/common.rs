//! Test helpers: a small building map and a recording guidance sink.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use disha_nav::adapters::GuidanceSink;
use disha_nav::catalog::{WaypointCatalog, WaypointCode};
use disha_nav::config::{DishaConfig, MapConfig, ScannerConfig};
use disha_nav::directive::Directive;
use disha_nav::graph::LocationGraph;

/// A corridor of four connected waypoints plus a disconnected annex.
pub fn building_catalog() -> WaypointCatalog {
    let entries: Vec<(String, String)> = [
        ("A1", "Room 515"),
        ("A2", "MTech Lab 514"),
        ("B1", "Intermediate Code 1"),
        ("A3", "Staff Room Door 1"),
        ("Z9", "Annex Storeroom"),
    ]
    .iter()
    .map(|(c, n)| (c.to_string(), n.to_string()))
    .collect();

    WaypointCatalog::from_entries(&entries).expect("valid test catalog")
}

pub fn building_graph(catalog: &WaypointCatalog) -> LocationGraph {
    let edges = edges(&[("A1", "A2"), ("A2", "B1"), ("B1", "A3")]);
    LocationGraph::build(catalog, &edges).expect("valid test graph")
}

pub fn code(s: &str) -> WaypointCode {
    WaypointCode::new(s)
}

pub fn edges(pairs: &[(&str, &str)]) -> Vec<(WaypointCode, WaypointCode)> {
    pairs.iter().map(|(u, v)| (code(u), code(v))).collect()
}

/// Controller config for tests: fast polling, map data unused because the
/// catalog and graph are built in code.
pub fn test_config() -> DishaConfig {
    DishaConfig {
        scanner: ScannerConfig {
            poll_interval_ms: 5,
        },
        map: MapConfig {
            waypoints: Vec::new(),
            edges: Vec::new(),
        },
        simulation: None,
    }
}

/// Guidance sink that records every announced directive.
#[derive(Clone, Default)]
pub struct RecordingGuidance {
    directives: Arc<Mutex<Vec<Directive>>>,
}

impl RecordingGuidance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<Directive> {
        self.directives.lock().expect("guidance lock").clone()
    }
}

impl GuidanceSink for RecordingGuidance {
    fn announce(&mut self, directive: &Directive) {
        self.directives
            .lock()
            .expect("guidance lock")
            .push(directive.clone());
    }
}

//! Configuration loading for DishaNav

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::{DishaError, Result};

/// Main configuration structure
#[derive(Clone, Debug, Deserialize)]
pub struct DishaConfig {
    #[serde(default)]
    pub scanner: ScannerConfig,
    pub map: MapConfig,
    pub simulation: Option<SimulationConfig>,
}

/// QR scan producer settings
#[derive(Clone, Debug, Deserialize)]
pub struct ScannerConfig {
    /// Interval between decode attempts in milliseconds (default: 200)
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl ScannerConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

/// Waypoint table and corridor list for one building
#[derive(Clone, Debug, Deserialize)]
pub struct MapConfig {
    /// Waypoint entries: QR code and display name
    pub waypoints: Vec<WaypointEntry>,
    /// Walkable corridors as code pairs; symmetry is applied at build time
    pub edges: Vec<(String, String)>,
}

/// One waypoint table row
#[derive(Clone, Debug, Deserialize)]
pub struct WaypointEntry {
    pub code: String,
    pub name: String,
}

/// Scripted adapter inputs for hardware-free runs
#[derive(Clone, Debug, Deserialize)]
pub struct SimulationConfig {
    /// Decoded QR strings, one per scanner poll
    #[serde(default)]
    pub scans: Vec<String>,
    /// Voice transcripts, one per capture attempt
    #[serde(default)]
    pub voice: Vec<String>,
}

// Default value functions
fn default_poll_interval_ms() -> u64 {
    200
}

impl DishaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DishaError::Config(format!("Failed to read config file: {}", e)))?;
        let config: DishaConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: DishaConfig = toml::from_str(
            r#"
            [scanner]
            poll_interval_ms = 50

            [simulation]
            scans = ["A1", "A2"]
            voice = ["A2"]

            [map]
            waypoints = [
                { code = "A1", name = "Room 515" },
                { code = "A2", name = "MTech Lab 514" },
            ]
            edges = [["A1", "A2"]]
            "#,
        )
        .unwrap();

        assert_eq!(config.scanner.poll_interval(), Duration::from_millis(50));
        assert_eq!(config.map.waypoints.len(), 2);
        assert_eq!(config.map.edges, vec![("A1".to_string(), "A2".to_string())]);
        assert_eq!(config.simulation.unwrap().voice, vec!["A2".to_string()]);
    }

    #[test]
    fn test_scanner_defaults_apply() {
        let config: DishaConfig = toml::from_str(
            r#"
            [map]
            waypoints = [{ code = "A1", name = "Room 515" }]
            edges = []
            "#,
        )
        .unwrap();

        assert_eq!(config.scanner.poll_interval_ms, 200);
        assert!(config.simulation.is_none());
    }
}

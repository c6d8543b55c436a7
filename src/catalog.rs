//! Waypoint catalog: the code-to-location-name table.
//!
//! Codes are the short identifiers printed as QR markers at physical
//! locations (e.g. "A7" on the stairwell door). The catalog is built once
//! at startup, validated, and read-only for the rest of the process.

use std::collections::HashMap;
use std::fmt;

use crate::error::{DishaError, Result};

/// A waypoint identifier, case-normalized to uppercase.
///
/// Both QR decodes and voice transcripts pass through [`WaypointCode::new`]
/// so that "a7", " A7 " and "A7" name the same marker.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WaypointCode(String);

impl WaypointCode {
    /// Normalize raw adapter text into a code.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for WaypointCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable mapping from waypoint codes to display names.
#[derive(Clone, Debug)]
pub struct WaypointCatalog {
    names: HashMap<WaypointCode, String>,
}

impl WaypointCatalog {
    /// Build a catalog from (code, name) entries.
    ///
    /// Codes must be unique after normalization and non-empty; names must
    /// be non-empty. Violations are configuration errors and abort startup.
    pub fn from_entries(entries: &[(String, String)]) -> Result<Self> {
        let mut names = HashMap::with_capacity(entries.len());

        for (raw_code, name) in entries {
            let code = WaypointCode::new(raw_code);
            if code.is_empty() {
                return Err(DishaError::Config("empty waypoint code".to_string()));
            }

            let name = name.trim();
            if name.is_empty() {
                return Err(DishaError::Config(format!(
                    "waypoint {} has an empty name",
                    code
                )));
            }

            if names.insert(code.clone(), name.to_string()).is_some() {
                return Err(DishaError::Config(format!(
                    "duplicate waypoint code: {}",
                    code
                )));
            }
        }

        Ok(Self { names })
    }

    /// Display name for a code, if the code is in the catalog.
    pub fn lookup(&self, code: &WaypointCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn contains(&self, code: &WaypointCode) -> bool {
        self.names.contains_key(code)
    }

    /// All catalog codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &WaypointCode> {
        self.names.keys()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(c, n)| (c.to_string(), n.to_string()))
            .collect()
    }

    #[test]
    fn test_lookup_normalizes_case_and_whitespace() {
        let catalog =
            WaypointCatalog::from_entries(&entries(&[("A1", "Room 515")])).unwrap();

        assert_eq!(catalog.lookup(&WaypointCode::new("a1")), Some("Room 515"));
        assert_eq!(catalog.lookup(&WaypointCode::new(" A1 ")), Some("Room 515"));
        assert_eq!(catalog.lookup(&WaypointCode::new("A2")), None);
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let result = WaypointCatalog::from_entries(&entries(&[
            ("A1", "Room 515"),
            ("a1", "Room 515 again"),
        ]));

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_code_rejected() {
        let result = WaypointCatalog::from_entries(&entries(&[("  ", "Nowhere")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = WaypointCatalog::from_entries(&entries(&[("A1", "   ")]));
        assert!(result.is_err());
    }
}

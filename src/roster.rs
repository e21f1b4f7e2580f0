//! Roster directory
//!
//! Maps player identifiers to display names for presentation. Aggregation
//! is always keyed by identifier, never by name, so two players sharing a
//! name are never merged.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct RosterEntry {
    id: String,
    name: String,
}

/// Identifier-to-name lookup loaded from `roster.json` at the data root.
#[derive(Debug, Default)]
pub(crate) struct Roster {
    names: HashMap<String, String>,
}

impl Roster {
    /// Load a roster file. A missing file yields an empty roster (records
    /// carry embedded names); an unreadable or malformed file is an error.
    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Ok(Roster::default());
        }
        let content = fs::read_to_string(path).map_err(|source| AppError::RosterRead {
            path: path.display().to_string(),
            source,
        })?;
        let entries: Vec<RosterEntry> =
            serde_json::from_str(&content).map_err(|source| AppError::RosterParse {
                path: path.display().to_string(),
                source,
            })?;

        let names = entries.into_iter().map(|e| (e.id, e.name)).collect();
        Ok(Roster { names })
    }

    pub(crate) fn display_name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Resolve a display name: roster entry first, then the name embedded
    /// on the record, then the raw identifier.
    pub(crate) fn resolve(&self, id: &str, record_name: &str) -> String {
        if let Some(name) = self.display_name(id) {
            return name.to_string();
        }
        if !record_name.is_empty() {
            return record_name.to_string();
        }
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with(entries: &[(&str, &str)]) -> Roster {
        Roster {
            names: entries
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
        }
    }

    #[test]
    fn roster_entry_wins_over_record_name() {
        let roster = roster_with(&[("B1", "Tanaka Ichiro")]);
        assert_eq!(roster.resolve("B1", "old name"), "Tanaka Ichiro");
    }

    #[test]
    fn record_name_used_when_roster_has_no_entry() {
        let roster = Roster::default();
        assert_eq!(roster.resolve("B1", "Suzuki Kenta"), "Suzuki Kenta");
    }

    #[test]
    fn identifier_is_the_last_resort() {
        let roster = Roster::default();
        assert_eq!(roster.resolve("B1", ""), "B1");
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let roster = Roster::load(Path::new("/nonexistent/roster.json")).unwrap();
        assert!(roster.display_name("B1").is_none());
    }
}

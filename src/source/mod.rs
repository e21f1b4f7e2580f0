//! Event store ingestion
//!
//! Each schema version from the system's history implements the Source
//! trait, normalizing its native records to the unified [`PitchEvent`]
//! before the aggregation core ever sees them.

pub(crate) mod legacy;
pub(crate) mod loader;
pub(crate) mod registry;
pub(crate) mod unified;

use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::core::PitchEvent;
use crate::utils::parse_debug_enabled;

/// Events parsed from one file plus the number of lines skipped as blank,
/// malformed, or missing required fields.
#[derive(Debug, Default)]
pub(crate) struct Parsed {
    pub(crate) events: Vec<PitchEvent>,
    pub(crate) skipped: i64,
}

/// One stored schema version of the event log.
pub(crate) trait Source: Send + Sync {
    /// Unique name for this source (matches its data subdirectory)
    fn name(&self) -> &'static str;

    /// Display name for diagnostics
    fn display_name(&self) -> &'static str {
        self.name()
    }

    /// Find all log files for this source under the data root
    fn find_files(&self, data_root: &Path) -> Vec<PathBuf>;

    /// Parse a single file into unified events
    fn parse_file(&self, path: &Path) -> Parsed;
}

/// Box type for dynamic dispatch
pub(crate) type BoxedSource = Box<dyn Source>;

/// Discover `*.jsonl` files in one subdirectory of the data root.
pub(super) fn find_jsonl_files(data_root: &Path, subdir: &str) -> Vec<PathBuf> {
    let pattern = format!("{}/{}/**/*.jsonl", data_root.display(), subdir);
    let mut files = Vec::new();
    if let Ok(entries) = glob::glob(&pattern) {
        for entry in entries.flatten() {
            files.push(entry);
        }
    }
    files
}

/// Read a JSONL file, deserializing each line as `W` and converting it
/// with `convert`. A line failing either step is skipped and counted; a
/// skip never aborts the file.
pub(super) fn parse_jsonl<W, F>(path: &Path, convert: F) -> Parsed
where
    W: DeserializeOwned,
    F: Fn(W) -> Option<PitchEvent>,
{
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            if parse_debug_enabled() {
                eprintln!("Failed to open {}: {}", path.display(), err);
            }
            return Parsed::default();
        }
    };
    let reader = BufReader::new(file);

    let mut parsed = Parsed::default();
    for (line_no, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                if parse_debug_enabled() {
                    eprintln!(
                        "Failed to read line {} in {}: {}",
                        line_no + 1,
                        path.display(),
                        err
                    );
                }
                parsed.skipped += 1;
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let wire: W = match serde_json::from_str(&line) {
            Ok(wire) => wire,
            Err(err) => {
                if parse_debug_enabled() {
                    eprintln!("Invalid JSON at {}:{}: {}", path.display(), line_no + 1, err);
                }
                parsed.skipped += 1;
                continue;
            }
        };

        match convert(wire) {
            Some(event) => parsed.events.push(event),
            None => parsed.skipped += 1,
        }
    }
    parsed
}

/// Empty identifier strings mean no identifier.
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// Re-export the loader and registry entry points
pub(crate) use loader::load_events;
pub(crate) use registry::all_sources;

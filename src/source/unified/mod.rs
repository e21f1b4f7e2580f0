//! Unified per-pitch schema source
//!
//! The current schema revision: one record per pitch carrying both the
//! pitcher-side and batter-side fields. Stored under `unified_logs/`.

mod parser;

use std::path::{Path, PathBuf};

use crate::source::{Parsed, Source, find_jsonl_files, parse_jsonl};

pub(crate) struct UnifiedSource;

impl UnifiedSource {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl Source for UnifiedSource {
    fn name(&self) -> &'static str {
        "unified_logs"
    }

    fn display_name(&self) -> &'static str {
        "unified"
    }

    fn find_files(&self, data_root: &Path) -> Vec<PathBuf> {
        find_jsonl_files(data_root, self.name())
    }

    fn parse_file(&self, path: &Path) -> Parsed {
        parse_jsonl(path, parser::convert)
    }
}

//! Parallel event loader
//!
//! Discovery and parsing pipeline: find every log file across all
//! registered sources, parse them in parallel, concatenate the events.
//! Ordering of the result is irrelevant to correctness because the
//! accumulators are commutative folds.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::core::LoadResult;
use crate::source::{BoxedSource, Parsed, Source};

pub(crate) fn load_events(sources: &[BoxedSource], data_root: &Path, quiet: bool) -> LoadResult {
    let start = Instant::now();

    let mut files: Vec<(&dyn Source, PathBuf)> = Vec::new();
    for source in sources {
        let found = source.find_files(data_root);
        if !quiet && !found.is_empty() {
            eprintln!("Scanning {} {} files...", found.len(), source.display_name());
        }
        files.extend(found.into_iter().map(|path| (source.as_ref(), path)));
    }

    if files.is_empty() {
        return LoadResult::default();
    }

    let parsed = files
        .par_iter()
        .map(|(source, path)| source.parse_file(path))
        .reduce(Parsed::default, |mut acc, part| {
            acc.events.extend(part.events);
            acc.skipped += part.skipped;
            acc
        });

    LoadResult {
        events: parsed.events,
        skipped: parsed.skipped,
        files: files.len(),
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}

//! Event source registry
//!
//! All schema versions the loader knows how to ingest.

use std::sync::LazyLock;

use super::BoxedSource;
use super::legacy::{BatterLogSource, PitchLogSource};
use super::unified::UnifiedSource;

static SOURCES: LazyLock<Vec<BoxedSource>> = LazyLock::new(|| {
    vec![
        Box::new(UnifiedSource::new()),
        Box::new(BatterLogSource::new()),
        Box::new(PitchLogSource::new()),
        // Add new schema versions here
    ]
});

pub(crate) fn all_sources() -> &'static [BoxedSource] {
    &SOURCES
}

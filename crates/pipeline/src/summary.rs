//! End-of-run accounting.

use std::collections::BTreeMap;

use tracing::info;

/// What a run wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Record source the run replaced.
    pub source: String,
    /// Records accepted by the sink.
    pub records_written: usize,
    /// Batches accepted by the sink.
    pub batches_flushed: usize,
    /// Records written per indicator id.
    pub per_indicator: BTreeMap<String, usize>,
    /// Slices sampled from a gridded dataset.
    pub raster_slices: usize,
    /// Slices served by the fallback model.
    pub fallback_slices: usize,
    /// Whether the run stopped early on cancellation.
    pub cancelled: bool,
}

impl RunSummary {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Logs totals and per-indicator counts at `info`.
    pub fn log(&self) {
        info!(
            source = %self.source,
            records = self.records_written,
            batches = self.batches_flushed,
            raster_slices = self.raster_slices,
            fallback_slices = self.fallback_slices,
            cancelled = self.cancelled,
            "run complete"
        );
        for (indicator, count) in &self.per_indicator {
            info!(source = %self.source, indicator = %indicator, count, "records by indicator");
        }
    }
}

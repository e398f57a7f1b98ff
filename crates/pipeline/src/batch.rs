//! Bounded record buffering.

use isotherm_io::{IndicatorRecord, RecordSink};
use tracing::{debug, info, warn};

use crate::cancel::CancellationToken;
use crate::error::PipelineError;
use crate::summary::RunSummary;

/// Buffers records and hands them to a sink `threshold` at a time.
///
/// The cancellation token is checked before each flush. Once it is seen,
/// the buffered records are discarded and further pushes are ignored;
/// batches flushed earlier remain in the sink.
pub struct BatchedWriter<'a, S: RecordSink + ?Sized> {
    sink: &'a mut S,
    buffer: Vec<IndicatorRecord>,
    threshold: usize,
    cancel: CancellationToken,
    summary: RunSummary,
}

impl<'a, S: RecordSink + ?Sized> BatchedWriter<'a, S> {
    /// Creates a writer for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Config`] if `threshold` is zero.
    pub fn new(
        sink: &'a mut S,
        source: &str,
        threshold: usize,
        cancel: CancellationToken,
    ) -> Result<Self, PipelineError> {
        if threshold == 0 {
            return Err(PipelineError::Config {
                reason: "batch size must be greater than 0".to_string(),
            });
        }
        Ok(Self {
            sink,
            buffer: Vec::with_capacity(threshold),
            threshold,
            cancel,
            summary: RunSummary::new(source),
        })
    }

    /// Whether cancellation has been observed.
    pub fn cancelled(&self) -> bool {
        self.summary.cancelled
    }

    /// Buffers a record, flushing once the threshold is reached.
    pub fn push(&mut self, record: IndicatorRecord) -> Result<(), PipelineError> {
        if self.summary.cancelled {
            return Ok(());
        }
        self.buffer.push(record);
        if self.buffer.len() >= self.threshold {
            self.flush()?;
        }
        Ok(())
    }

    /// Writes the buffered records as one batch.
    pub fn flush(&mut self) -> Result<(), PipelineError> {
        if self.cancel.is_cancelled() {
            if !self.summary.cancelled {
                info!(
                    source = %self.summary.source,
                    discarded = self.buffer.len(),
                    "run cancelled"
                );
            }
            self.summary.cancelled = true;
            self.buffer.clear();
            return Ok(());
        }
        if self.buffer.is_empty() {
            return Ok(());
        }

        self.sink.append_batch(&self.buffer)?;
        for record in &self.buffer {
            *self
                .summary
                .per_indicator
                .entry(record.indicator_id().to_string())
                .or_default() += 1;
        }
        self.summary.records_written += self.buffer.len();
        self.summary.batches_flushed += 1;
        debug!(
            source = %self.summary.source,
            records = self.buffer.len(),
            total = self.summary.records_written,
            "flushed batch"
        );
        self.buffer.clear();
        Ok(())
    }

    /// Mutable access to the summary, e.g. for slice counters.
    pub fn summary_mut(&mut self) -> &mut RunSummary {
        &mut self.summary
    }

    /// Flushes the remainder, finalises the sink and returns the summary.
    ///
    /// If the final flush fails the sink is still finalised, keeping the
    /// batches written before it.
    pub fn finish(mut self) -> Result<RunSummary, PipelineError> {
        if let Err(e) = self.flush() {
            self.abandon();
            return Err(e);
        }
        self.sink.finish()?;
        Ok(self.summary)
    }

    /// Drops the buffer and finalises the sink after a failed run.
    ///
    /// Batches already flushed stay in the sink. A failure to finalise is
    /// logged; the caller reports the error that ended the run.
    pub fn abandon(mut self) {
        warn!(
            source = %self.summary.source,
            written = self.summary.records_written,
            discarded = self.buffer.len(),
            "run failed, keeping flushed batches"
        );
        self.buffer.clear();
        if let Err(e) = self.sink.finish() {
            warn!(source = %self.summary.source, error = %e, "could not finalise sink");
        }
    }
}

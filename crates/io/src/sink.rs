//! Record sinks.

use std::collections::HashSet;

use tracing::debug;

use crate::error::IoError;
use crate::record::{IndicatorRecord, RecordKey};

/// Destination for indicator records.
///
/// A run calls [`replace_all_for_source`](RecordSink::replace_all_for_source)
/// once, then appends batches, then calls [`finish`](RecordSink::finish).
pub trait RecordSink {
    /// Removes every record previously stored for `source`.
    fn replace_all_for_source(&mut self, source: &str) -> Result<(), IoError>;

    /// Stores a batch of records.
    fn append_batch(&mut self, records: &[IndicatorRecord]) -> Result<(), IoError>;

    /// Flushes and finalises any open output.
    fn finish(&mut self) -> Result<(), IoError> {
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn replace_all_for_source(&mut self, source: &str) -> Result<(), IoError> {
        (**self).replace_all_for_source(source)
    }

    fn append_batch(&mut self, records: &[IndicatorRecord]) -> Result<(), IoError> {
        (**self).append_batch(records)
    }

    fn finish(&mut self) -> Result<(), IoError> {
        (**self).finish()
    }
}

/// Sink that keeps records in memory, in insertion order.
///
/// Appending a record whose key is already stored fails and leaves the
/// sink unchanged.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<IndicatorRecord>,
    keys: HashSet<RecordKey>,
    batches: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[IndicatorRecord] {
        &self.records
    }

    pub fn records_for_source<'a>(
        &'a self,
        source: &'a str,
    ) -> impl Iterator<Item = &'a IndicatorRecord> + 'a {
        self.records.iter().filter(move |r| r.source() == source)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of batches appended so far.
    pub fn batches(&self) -> usize {
        self.batches
    }
}

impl RecordSink for MemorySink {
    fn replace_all_for_source(&mut self, source: &str) -> Result<(), IoError> {
        let before = self.records.len();
        self.records.retain(|r| r.source() != source);
        self.keys.retain(|k| k.source != source);
        debug!(source, removed = before - self.records.len(), "cleared source");
        Ok(())
    }

    fn append_batch(&mut self, records: &[IndicatorRecord]) -> Result<(), IoError> {
        let mut incoming = HashSet::with_capacity(records.len());
        for record in records {
            if self.keys.contains(record.key()) || !incoming.insert(record.key()) {
                return Err(IoError::DuplicateRecord {
                    key: record.key().to_string(),
                });
            }
        }
        self.keys.extend(records.iter().map(|r| r.key().clone()));
        self.records.extend_from_slice(records);
        self.batches += 1;
        Ok(())
    }
}

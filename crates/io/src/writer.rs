//! Parquet record sink and its configuration.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use arrow::datatypes::SchemaRef;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use tracing::{debug, info};

use crate::error::IoError;
use crate::parquet_write;
use crate::record::IndicatorRecord;
use crate::sink::RecordSink;

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    /// Converts to the corresponding `parquet::basic::Compression` variant.
    fn to_parquet(self) -> Result<parquet::basic::Compression, IoError> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level =
                    parquet::basic::ZstdLevel::try_new(3).map_err(|e| IoError::Parquet {
                        reason: e.to_string(),
                    })?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

/// Configuration for writing indicator records to Parquet.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Compression algorithm to use.
    compression: Compression,
    /// Maximum number of rows per row group.
    row_group_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            row_group_size: 1_000_000,
        }
    }
}

impl WriterConfig {
    /// Sets the compression algorithm.
    pub fn with_compression(mut self, comp: Compression) -> Self {
        self.compression = comp;
        self
    }

    /// Sets the maximum number of rows per row group.
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }

    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `row_group_size` is zero.
    fn validate(&self) -> Result<(), IoError> {
        if self.row_group_size == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "row_group_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn properties(&self) -> Result<WriterProperties, IoError> {
        Ok(WriterProperties::builder()
            .set_compression(self.compression.to_parquet()?)
            .set_max_row_group_size(self.row_group_size)
            .build())
    }
}

/// Sink writing one `<source>.parquet` file per source into a directory.
///
/// Files are created on first use and must be finalised with
/// [`RecordSink::finish`]; a file left unfinished is not readable. Every
/// appended batch is flushed as its own row group, so finishing after a
/// failed append keeps all batches accepted before it.
pub struct ParquetSink {
    dir: PathBuf,
    config: WriterConfig,
    schema: SchemaRef,
    writers: BTreeMap<String, ArrowWriter<File>>,
    rows: BTreeMap<String, usize>,
}

impl std::fmt::Debug for ParquetSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParquetSink")
            .field("dir", &self.dir)
            .field("config", &self.config)
            .field("open", &self.writers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ParquetSink {
    /// Creates a sink writing into `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] for an invalid configuration or
    /// [`IoError::Io`] if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>, config: WriterConfig) -> Result<Self, IoError> {
        config.validate()?;
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            config,
            schema: parquet_write::build_schema(),
            writers: BTreeMap::new(),
            rows: BTreeMap::new(),
        })
    }

    /// Path of the file holding records for `source`.
    pub fn path_for(&self, source: &str) -> PathBuf {
        self.dir.join(format!("{source}.parquet"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn open(&mut self, source: &str) -> Result<(), IoError> {
        let path = self.path_for(source);
        let file = File::create(&path)?;
        let writer = ArrowWriter::try_new(
            file,
            self.schema.clone(),
            Some(self.config.properties()?),
        )?;
        debug!(path = %path.display(), "opened record file");
        self.writers.insert(source.to_string(), writer);
        self.rows.insert(source.to_string(), 0);
        Ok(())
    }
}

impl RecordSink for ParquetSink {
    fn replace_all_for_source(&mut self, source: &str) -> Result<(), IoError> {
        // dropping an open writer abandons its partial file before truncation
        self.writers.remove(source);
        self.open(source)
    }

    fn append_batch(&mut self, records: &[IndicatorRecord]) -> Result<(), IoError> {
        let mut by_source: BTreeMap<&str, Vec<&IndicatorRecord>> = BTreeMap::new();
        for r in records {
            by_source.entry(r.source()).or_default().push(r);
        }

        for (source, group) in by_source {
            if !self.writers.contains_key(source) {
                self.open(source)?;
            }
            let batch = parquet_write::records_to_batch(&group, &self.schema)?;
            if let Some(writer) = self.writers.get_mut(source) {
                writer.write(&batch)?;
                // each accepted batch becomes its own row group
                writer.flush()?;
            }
            *self.rows.entry(source.to_string()).or_default() += group.len();
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), IoError> {
        for (source, writer) in std::mem::take(&mut self.writers) {
            writer.close()?;
            info!(
                source,
                rows = self.rows.get(&source).copied().unwrap_or(0),
                path = %self.path_for(&source).display(),
                "wrote record file"
            );
        }
        Ok(())
    }
}

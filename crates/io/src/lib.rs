//! # isotherm-io
//!
//! Everything that touches data outside the process: gridded rasters
//! (NetCDF files or in-memory arrays), nearest-neighbour point sampling,
//! the canonical [`IndicatorRecord`], record sinks (memory and Parquet) and
//! best-effort remote dataset downloads.

mod error;
mod extract;
mod fetch;
mod netcdf_read;
mod parquet_read;
mod parquet_write;
mod raster;
mod record;
mod sink;
mod writer;

pub use error::IoError;
pub use extract::{LAT_ALIASES, LON_ALIASES, SampledValue, extract_at_points, resolve_variable};
pub use fetch::{
    DEFAULT_FETCH_TIMEOUT, DatasetOutcome, DatasetSource, FetchOutcome, acquire_dataset,
    fetch_remote,
};
pub use netcdf_read::NetcdfRaster;
pub use parquet_read::read_records;
pub use raster::{MemoryRaster, RasterSource};
pub use record::{DEFAULT_PERCENTILE, IndicatorRecord, RecordKey};
pub use sink::{MemorySink, RecordSink};
pub use writer::{Compression, ParquetSink, WriterConfig};

//! Error types for isotherm-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the isotherm-io crate.
///
/// Covers format-specific failures from NetCDF, Arrow and Parquet, raster
/// layout problems met while sampling, record integrity checks and remote
/// download failures.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Wraps an error originating from the Parquet library.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Wraps an error originating from the Arrow library.
    #[error("arrow error: {reason}")]
    Arrow {
        /// Description of the underlying Arrow failure.
        reason: String,
    },

    /// Returned when none of the coordinate aliases exist in a dataset.
    #[error("{axis} axis not found (tried {})", tried.join(", "))]
    AxisNotFound {
        /// `"latitude"` or `"longitude"`.
        axis: &'static str,
        /// Aliases that were looked up.
        tried: Vec<&'static str>,
    },

    /// Returned when a requested variable cannot be resolved.
    #[error("variable '{name}' not found")]
    VariableNotFound {
        /// Name as requested.
        name: String,
    },

    /// Returned when a dimension has an unexpected size.
    #[error("dimension '{name}' mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the dimension.
        name: String,
        /// Expected size.
        expected: usize,
        /// Actual size.
        got: usize,
    },

    /// Returned when a record value is NaN or infinite.
    #[error("non-finite value for '{indicator_id}' at ({latitude}, {longitude})")]
    NonFiniteValue {
        /// Indicator the value belongs to.
        indicator_id: String,
        /// Latitude of the record.
        latitude: f64,
        /// Longitude of the record.
        longitude: f64,
    },

    /// Returned when a sink already holds a record with the same key.
    #[error("duplicate record {key}")]
    DuplicateRecord {
        /// Rendered record key.
        key: String,
    },

    /// Returned when a remote download fails.
    #[error("fetch of {url} failed: {reason}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// Description of the failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Wraps a filesystem error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<netcdf::Error> for IoError {
    fn from(e: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: e.to_string(),
        }
    }
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Arrow {
            reason: e.to_string(),
        }
    }
}

//! Best-effort acquisition of gridded datasets.
//!
//! Every failure here is reported as an outcome rather than an error: a
//! dataset that cannot be opened or downloaded sends the caller to the
//! fallback model.

use std::path::PathBuf;
use std::time::Duration;

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::error::IoError;
use crate::netcdf_read::NetcdfRaster;

/// Default timeout for a single download.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Result of a download attempt.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The body was written to a temporary file, deleted on drop.
    Fetched(NamedTempFile),
    /// The download failed; use the fallback model instead.
    FallbackRequired { reason: String },
}

/// Where a gridded dataset lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DatasetSource {
    Local(PathBuf),
    Remote { url: String, timeout: Duration },
}

impl DatasetSource {
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote {
            url: url.into(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// Result of [`acquire_dataset`].
#[derive(Debug)]
pub enum DatasetOutcome {
    Ready(NetcdfRaster),
    FallbackRequired { reason: String },
}

fn download(url: &str, timeout: Duration) -> Result<NamedTempFile, IoError> {
    let fetch_err = |reason: String| IoError::Fetch {
        url: url.to_string(),
        reason,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| fetch_err(e.to_string()))?;
    let mut response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| fetch_err(e.to_string()))?;

    let mut file = tempfile::Builder::new()
        .prefix("isotherm-")
        .suffix(".nc")
        .tempfile()?;
    let bytes = response
        .copy_to(file.as_file_mut())
        .map_err(|e| fetch_err(e.to_string()))?;
    info!(url, bytes, "downloaded dataset");
    Ok(file)
}

/// Streams `url` into a temporary file.
///
/// Network errors, non-success statuses and timeouts all produce
/// [`FetchOutcome::FallbackRequired`] with a warning logged.
pub fn fetch_remote(url: &str, timeout: Duration) -> FetchOutcome {
    match download(url, timeout) {
        Ok(file) => FetchOutcome::Fetched(file),
        Err(e) => {
            warn!(url, error = %e, "download failed, falling back");
            FetchOutcome::FallbackRequired {
                reason: e.to_string(),
            }
        }
    }
}

/// Opens a local file or downloads a remote one.
pub fn acquire_dataset(source: &DatasetSource) -> DatasetOutcome {
    let opened = match source {
        DatasetSource::Local(path) => NetcdfRaster::open(path),
        DatasetSource::Remote { url, timeout } => match fetch_remote(url, *timeout) {
            FetchOutcome::Fetched(file) => NetcdfRaster::from_download(file),
            FetchOutcome::FallbackRequired { reason } => {
                return DatasetOutcome::FallbackRequired { reason };
            }
        },
    };
    match opened {
        Ok(raster) => DatasetOutcome::Ready(raster),
        Err(e) => {
            warn!(?source, error = %e, "dataset unavailable, falling back");
            DatasetOutcome::FallbackRequired {
                reason: e.to_string(),
            }
        }
    }
}

//! NetCDF-backed raster.

use std::path::{Path, PathBuf};

use ndarray::{ArrayD, IxDyn};
use netcdf::AttributeValue;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::IoError;
use crate::raster::RasterSource;

/// Attributes whose value marks a missing cell.
const MISSING_ATTRIBUTES: [&str; 2] = ["_FillValue", "missing_value"];

/// Open a NetCDF file at `path`, returning [`IoError::FileNotFound`] if the
/// path does not exist on disk.
fn open_file(path: &Path) -> Result<netcdf::File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

fn attribute_as_f64(value: AttributeValue) -> Option<f64> {
    match value {
        AttributeValue::Double(v) => Some(v),
        AttributeValue::Float(v) => Some(f64::from(v)),
        AttributeValue::Int(v) => Some(f64::from(v)),
        AttributeValue::Short(v) => Some(f64::from(v)),
        _ => None,
    }
}

/// A NetCDF file opened for reading. The handle is closed on drop.
pub struct NetcdfRaster {
    file: netcdf::File,
    path: PathBuf,
    // keeps a downloaded file alive until the handle above is dropped
    _download: Option<NamedTempFile>,
}

impl std::fmt::Debug for NetcdfRaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetcdfRaster")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl NetcdfRaster {
    /// Opens a NetCDF file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] if `path` does not exist or
    /// [`IoError::Netcdf`] if it cannot be parsed.
    pub fn open(path: &Path) -> Result<Self, IoError> {
        Ok(Self {
            file: open_file(path)?,
            path: path.to_path_buf(),
            _download: None,
        })
    }

    /// Opens a downloaded temporary file, deleting it when the raster drops.
    pub(crate) fn from_download(download: NamedTempFile) -> Result<Self, IoError> {
        let path = download.path().to_path_buf();
        Ok(Self {
            file: open_file(&path)?,
            path,
            _download: Some(download),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RasterSource for NetcdfRaster {
    fn variable_names(&self) -> Vec<String> {
        self.file.variables().map(|v| v.name()).collect()
    }

    fn read_variable(&self, name: &str) -> Result<ArrayD<f64>, IoError> {
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| IoError::VariableNotFound {
                name: name.to_string(),
            })?;

        let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
        let mut data = var.get_values::<f64, _>(..)?;

        let missing: Vec<f64> = MISSING_ATTRIBUTES
            .iter()
            .filter_map(|attr| var.attribute_value(attr))
            .filter_map(|res| res.ok())
            .filter_map(attribute_as_f64)
            .collect();
        if !missing.is_empty() {
            let mut masked = 0usize;
            for v in data.iter_mut().filter(|v| missing.contains(v)) {
                *v = f64::NAN;
                masked += 1;
            }
            debug!(variable = name, masked, "masked missing values");
        }

        ArrayD::from_shape_vec(IxDyn(&shape), data).map_err(|e| IoError::Netcdf {
            reason: format!("variable '{name}' has inconsistent shape: {e}"),
        })
    }
}

//! Gridded dataset abstraction.

use ndarray::{Array1, ArrayD};

use crate::error::IoError;

/// A dataset of named n-dimensional `f64` variables.
///
/// Coordinate axes (latitude, longitude) are ordinary 1-D variables.
pub trait RasterSource {
    /// Variable names in dataset order.
    fn variable_names(&self) -> Vec<String>;

    /// Reads a whole variable. Missing values are returned as NaN.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::VariableNotFound`] if no variable has exactly this
    /// name, or a format error if it cannot be decoded.
    fn read_variable(&self, name: &str) -> Result<ArrayD<f64>, IoError>;
}

/// Raster held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRaster {
    variables: Vec<(String, ArrayD<f64>)>,
}

impl MemoryRaster {
    /// An empty raster with no variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a variable, keeping first-insertion order.
    pub fn with_variable(mut self, name: impl Into<String>, data: ArrayD<f64>) -> Self {
        self.insert(name, data);
        self
    }

    /// Adds a 1-D coordinate axis.
    pub fn with_axis(self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.with_variable(name, Array1::from(values).into_dyn())
    }

    /// In-place form of [`MemoryRaster::with_variable`].
    pub fn insert(&mut self, name: impl Into<String>, data: ArrayD<f64>) {
        let name = name.into();
        match self.variables.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = data,
            None => self.variables.push((name, data)),
        }
    }
}

impl RasterSource for MemoryRaster {
    fn variable_names(&self) -> Vec<String> {
        self.variables.iter().map(|(n, _)| n.clone()).collect()
    }

    fn read_variable(&self, name: &str) -> Result<ArrayD<f64>, IoError> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data.clone())
            .ok_or_else(|| IoError::VariableNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn insertion_order_is_kept() {
        let raster = MemoryRaster::new()
            .with_axis("lat", vec![0.0, 1.0])
            .with_axis("lon", vec![0.0])
            .with_variable("pr", Array2::zeros((2, 1)).into_dyn());
        assert_eq!(raster.variable_names(), vec!["lat", "lon", "pr"]);
    }

    #[test]
    fn replacing_keeps_position() {
        let raster = MemoryRaster::new()
            .with_axis("lat", vec![0.0])
            .with_axis("lon", vec![0.0])
            .with_axis("lat", vec![5.0, 6.0]);
        assert_eq!(raster.variable_names(), vec!["lat", "lon"]);
        assert_eq!(raster.read_variable("lat").unwrap().len(), 2);
    }

    #[test]
    fn missing_variable() {
        let err = MemoryRaster::new().read_variable("tas").unwrap_err();
        assert!(matches!(err, IoError::VariableNotFound { .. }));
    }
}

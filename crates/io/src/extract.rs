//! Nearest-neighbour point sampling of gridded rasters.

use isotherm_pathway::SamplePoint;
use isotherm_stats::{nan_mean, nearest_index};
use ndarray::{ArrayD, Ix2, Ix3, s};
use tracing::debug;

use crate::error::IoError;
use crate::raster::RasterSource;

/// Names tried, in order, for the latitude axis.
pub const LAT_ALIASES: [&str; 3] = ["lat", "latitude", "y"];

/// Names tried, in order, for the longitude axis.
pub const LON_ALIASES: [&str; 3] = ["lon", "longitude", "x"];

/// One value sampled at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledValue {
    pub label: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
}

/// Resolves a requested variable name against a dataset's variables.
///
/// An exact match wins; otherwise the first variable (in dataset order)
/// whose lower-cased name contains the lower-cased request.
pub fn resolve_variable(names: &[String], requested: &str) -> Option<String> {
    if let Some(exact) = names.iter().find(|n| *n == requested) {
        return Some(exact.clone());
    }
    let needle = requested.to_lowercase();
    names
        .iter()
        .find(|n| n.to_lowercase().contains(&needle))
        .cloned()
}

fn read_axis<R: RasterSource + ?Sized>(
    dataset: &R,
    names: &[String],
    axis: &'static str,
    aliases: &[&'static str],
) -> Result<Vec<f64>, IoError> {
    let name = aliases
        .iter()
        .find(|alias| names.iter().any(|n| n == *alias))
        .ok_or_else(|| IoError::AxisNotFound {
            axis,
            tried: aliases.to_vec(),
        })?;
    let data = dataset.read_variable(name)?;
    if data.ndim() != 1 {
        return Err(IoError::DimensionMismatch {
            name: format!("{name} rank"),
            expected: 1,
            got: data.ndim(),
        });
    }
    Ok(data.iter().copied().collect())
}

fn check_trailing(data: &ArrayD<f64>, ny: usize, nx: usize) -> Result<(), IoError> {
    let shape = data.shape();
    let n = shape.len();
    if shape[n - 2] != ny {
        return Err(IoError::DimensionMismatch {
            name: "latitude".to_string(),
            expected: ny,
            got: shape[n - 2],
        });
    }
    if shape[n - 1] != nx {
        return Err(IoError::DimensionMismatch {
            name: "longitude".to_string(),
            expected: nx,
            got: shape[n - 1],
        });
    }
    Ok(())
}

/// How a variable is reduced to one value per grid cell.
enum Layout {
    /// `(leading, lat, lon)`: NaN-ignoring mean over the leading axis.
    Series(ndarray::Array3<f64>),
    /// `(lat, lon)`: the cell value itself.
    Field(ndarray::Array2<f64>),
    /// Anything else: one NaN-ignoring mean for every point.
    Scalar(f64),
}

impl Layout {
    fn classify(data: ArrayD<f64>, ny: usize, nx: usize) -> Result<Self, IoError> {
        match data.ndim() {
            3 => {
                check_trailing(&data, ny, nx)?;
                let arr = data.into_dimensionality::<Ix3>().map_err(shape_error)?;
                Ok(Self::Series(arr))
            }
            2 => {
                check_trailing(&data, ny, nx)?;
                let arr = data.into_dimensionality::<Ix2>().map_err(shape_error)?;
                Ok(Self::Field(arr))
            }
            _ => Ok(Self::Scalar(nan_mean(data.iter()))),
        }
    }

    fn value_at(&self, i: usize, j: usize) -> f64 {
        match self {
            Self::Series(arr) => nan_mean(arr.slice(s![.., i, j]).iter()),
            Self::Field(arr) => arr[[i, j]],
            Self::Scalar(v) => *v,
        }
    }
}

fn shape_error(e: ndarray::ShapeError) -> IoError {
    IoError::Validation {
        count: 1,
        details: e.to_string(),
    }
}

/// Samples `variable` at each point using nearest-neighbour axis lookup.
///
/// Points whose sampled value is NaN or infinite are dropped. When the
/// dataset's longitudes run over [0, 360) the query longitude is shifted
/// into that convention first.
///
/// # Errors
///
/// Returns [`IoError::AxisNotFound`] when no latitude or longitude alias
/// exists, [`IoError::VariableNotFound`] when the variable cannot be
/// resolved, and [`IoError::DimensionMismatch`] when a 2-D or 3-D
/// variable's trailing dimensions disagree with the axes.
pub fn extract_at_points<R: RasterSource + ?Sized>(
    dataset: &R,
    variable: &str,
    points: &[SamplePoint],
) -> Result<Vec<SampledValue>, IoError> {
    let names = dataset.variable_names();
    let lats = read_axis(dataset, &names, "latitude", &LAT_ALIASES)?;
    let lons = read_axis(dataset, &names, "longitude", &LON_ALIASES)?;

    let resolved =
        resolve_variable(&names, variable).ok_or_else(|| IoError::VariableNotFound {
            name: variable.to_string(),
        })?;
    let layout = Layout::classify(dataset.read_variable(&resolved)?, lats.len(), lons.len())?;

    let lon_max = lons
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);
    let wraps_east = lon_max > 180.0;

    let mut out = Vec::with_capacity(points.len());
    for point in points {
        let query_lon = if wraps_east {
            point.lon().rem_euclid(360.0)
        } else {
            point.lon()
        };
        let (Some(i), Some(j)) = (
            nearest_index(&lats, point.lat()),
            nearest_index(&lons, query_lon),
        ) else {
            continue;
        };
        let value = layout.value_at(i, j);
        if !value.is_finite() {
            debug!(lat = point.lat(), lon = point.lon(), "dropping non-finite sample");
            continue;
        }
        out.push(SampledValue {
            label: point.label().map(str::to_string),
            lat: point.lat(),
            lon: point.lon(),
            value,
        });
    }

    debug!(
        variable = %resolved,
        requested = points.len(),
        sampled = out.len(),
        "extracted point values"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::MemoryRaster;
    use approx::assert_relative_eq;
    use ndarray::{Array2, Array3};

    fn grid3x3() -> Array2<f64> {
        Array2::from_shape_fn((3, 3), |(i, j)| (i * 3 + j) as f64)
    }

    fn point(lat: f64, lon: f64) -> SamplePoint {
        SamplePoint::new(lat, lon).unwrap()
    }

    #[test]
    fn nearest_centre_cell() {
        let raster = MemoryRaster::new()
            .with_axis("lat", vec![-10.0, 0.0, 10.0])
            .with_axis("lon", vec![-10.0, 0.0, 10.0])
            .with_variable("v", grid3x3().into_dyn());
        let out = extract_at_points(&raster, "v", &[point(4.0, 4.0)]).unwrap();
        assert_eq!(out.len(), 1);
        // index (1, 1)
        assert_eq!(out[0].value, 4.0);
    }

    #[test]
    fn ties_pick_lowest_index() {
        let raster = MemoryRaster::new()
            .with_axis("latitude", vec![-10.0, 0.0, 10.0])
            .with_axis("longitude", vec![-10.0, 0.0, 10.0])
            .with_variable("v", grid3x3().into_dyn());
        let out = extract_at_points(&raster, "v", &[point(5.0, -5.0)]).unwrap();
        // lat 5 ties between 0 and 10 → index 1; lon -5 ties → index 0
        assert_eq!(out[0].value, 3.0);
    }

    #[test]
    fn series_uses_nan_mean() {
        let mut data = Array3::from_elem((3, 2, 2), 1.0);
        data[[0, 0, 0]] = 2.0;
        data[[1, 0, 0]] = f64::NAN;
        data[[2, 0, 0]] = 4.0;
        let raster = MemoryRaster::new()
            .with_axis("y", vec![0.0, 1.0])
            .with_axis("x", vec![0.0, 1.0])
            .with_variable("pr", data.into_dyn());
        let out = extract_at_points(&raster, "pr", &[point(0.0, 0.0), point(1.0, 1.0)]).unwrap();
        assert_relative_eq!(out[0].value, 3.0);
        assert_relative_eq!(out[1].value, 1.0);
    }

    #[test]
    fn all_nan_cells_are_dropped() {
        let mut data = Array3::from_elem((2, 1, 2), 7.0);
        data[[0, 0, 1]] = f64::NAN;
        data[[1, 0, 1]] = f64::NAN;
        let raster = MemoryRaster::new()
            .with_axis("lat", vec![0.0])
            .with_axis("lon", vec![0.0, 1.0])
            .with_variable("pr", data.into_dyn());
        let out = extract_at_points(&raster, "pr", &[point(0.0, 0.0), point(0.0, 1.0)]).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lon, 0.0);
    }

    #[test]
    fn other_ranks_use_global_mean() {
        let data = ndarray::Array1::from(vec![1.0, f64::NAN, 3.0]).into_dyn();
        let raster = MemoryRaster::new()
            .with_axis("lat", vec![0.0, 1.0])
            .with_axis("lon", vec![0.0])
            .with_variable("spei", data);
        let out = extract_at_points(&raster, "spei", &[point(0.0, 0.0), point(1.0, 0.0)]).unwrap();
        assert_eq!(out.len(), 2);
        assert_relative_eq!(out[0].value, 2.0);
        assert_relative_eq!(out[1].value, 2.0);
    }

    #[test]
    fn substring_resolution() {
        let names = vec!["lat".to_string(), "lon".to_string(), "TAS_mean".to_string()];
        assert_eq!(resolve_variable(&names, "tas").as_deref(), Some("TAS_mean"));
        assert_eq!(resolve_variable(&names, "pr"), None);
    }

    #[test]
    fn exact_match_beats_substring() {
        let names = vec!["tas_max".to_string(), "tas".to_string()];
        assert_eq!(resolve_variable(&names, "tas").as_deref(), Some("tas"));
    }

    #[test]
    fn missing_latitude_axis() {
        let raster = MemoryRaster::new()
            .with_axis("lon", vec![0.0])
            .with_variable("v", Array2::zeros((1, 1)).into_dyn());
        let err = extract_at_points(&raster, "v", &[point(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, IoError::AxisNotFound { axis: "latitude", .. }));
    }

    #[test]
    fn missing_variable() {
        let raster = MemoryRaster::new()
            .with_axis("lat", vec![0.0])
            .with_axis("lon", vec![0.0]);
        let err = extract_at_points(&raster, "flddph", &[]).unwrap_err();
        assert!(matches!(err, IoError::VariableNotFound { .. }));
    }

    #[test]
    fn trailing_dimension_mismatch() {
        let raster = MemoryRaster::new()
            .with_axis("lat", vec![0.0, 1.0, 2.0])
            .with_axis("lon", vec![0.0, 1.0])
            .with_variable("v", Array2::zeros((2, 2)).into_dyn());
        let err = extract_at_points(&raster, "v", &[point(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, IoError::DimensionMismatch { expected: 3, got: 2, .. }));
    }

    #[test]
    fn east_positive_longitudes() {
        let lons: Vec<f64> = (0..4).map(|i| i as f64 * 90.0).collect();
        let data = Array2::from_shape_vec((1, 4), vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        let raster = MemoryRaster::new()
            .with_axis("lat", vec![0.0])
            .with_axis("lon", lons)
            .with_variable("v", data.into_dyn());
        let out = extract_at_points(&raster, "v", &[point(0.0, -90.0)]).unwrap();
        // -90 → 270
        assert_eq!(out[0].value, 3.0);
        assert_eq!(out[0].lon, -90.0);
    }

    #[test]
    fn labels_are_carried() {
        let raster = MemoryRaster::new()
            .with_axis("lat", vec![0.0])
            .with_axis("lon", vec![0.0])
            .with_variable("v", Array2::from_elem((1, 1), 9.0).into_dyn());
        let p = point(0.0, 0.0).with_label("Null Island");
        let out = extract_at_points(&raster, "v", &[p]).unwrap();
        assert_eq!(out[0].label.as_deref(), Some("Null Island"));
    }
}

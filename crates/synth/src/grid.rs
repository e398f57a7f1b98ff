//! Regular latitude/longitude grid specification.

use isotherm_pathway::SamplePoint;

use crate::error::SynthError;

/// A half-open range of axis values `start, start + step, ...` below `stop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// First value.
    pub start: f64,
    /// Exclusive upper bound.
    pub stop: f64,
    /// Positive spacing.
    pub step: f64,
}

impl AxisRange {
    /// Creates a range; validated by [`AxisRange::values`].
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Materialises the axis.
    ///
    /// Values are computed as `start + i * step` so long axes do not
    /// accumulate error.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidGrid`] if the step is not a positive
    /// finite number or the range is empty.
    pub fn values(&self) -> Result<Vec<f64>, SynthError> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SynthError::InvalidGrid {
                reason: format!("step must be positive and finite, got {}", self.step),
            });
        }
        if !self.start.is_finite() || !self.stop.is_finite() || self.start >= self.stop {
            return Err(SynthError::InvalidGrid {
                reason: format!("empty range [{}, {})", self.start, self.stop),
            });
        }
        let count = ((self.stop - self.start) / self.step).ceil() as usize;
        Ok((0..count)
            .map(|i| self.start + i as f64 * self.step)
            .filter(|v| *v < self.stop)
            .collect())
    }
}

/// Grid of sample points, latitude-major.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    lat: AxisRange,
    lon: AxisRange,
}

impl Default for GridSpec {
    /// Latitudes -60..=80 and longitudes -180..=175, both every 5°.
    fn default() -> Self {
        Self {
            lat: AxisRange::new(-60.0, 85.0, 5.0),
            lon: AxisRange::new(-180.0, 180.0, 5.0),
        }
    }
}

impl GridSpec {
    /// Grid over the cross product of two axes.
    pub fn new(lat: AxisRange, lon: AxisRange) -> Self {
        Self { lat, lon }
    }

    /// Grid from an inclusive latitude extent and an exclusive longitude
    /// extent sharing one step.
    pub fn from_extent(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64, step: f64) -> Self {
        // half a step past the end keeps `lat_max` itself
        Self {
            lat: AxisRange::new(lat_min, lat_max + step / 2.0, step),
            lon: AxisRange::new(lon_min, lon_max, step),
        }
    }

    /// Latitude axis.
    pub fn lat(&self) -> &AxisRange {
        &self.lat
    }

    /// Longitude axis, before wrapping into [-180, 180).
    pub fn lon(&self) -> &AxisRange {
        &self.lon
    }

    /// All points, row by row from the southernmost latitude.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidGrid`] for a malformed axis and
    /// [`SynthError::Pathway`] if a latitude falls outside [-90, 90].
    pub fn points(&self) -> Result<Vec<SamplePoint>, SynthError> {
        let lats = self.lat.values()?;
        let lons = self.lon.values()?;
        let mut points = Vec::with_capacity(lats.len() * lons.len());
        for &lat in &lats {
            for &lon in &lons {
                points.push(SamplePoint::new(lat, lon)?);
            }
        }
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_29_by_72() {
        let points = GridSpec::default().points().unwrap();
        assert_eq!(points.len(), 29 * 72);
        assert_eq!(points[0].lat(), -60.0);
        assert_eq!(points[0].lon(), -180.0);
        let last = points.last().unwrap();
        assert_eq!(last.lat(), 80.0);
        assert_eq!(last.lon(), 175.0);
    }

    #[test]
    fn from_extent_matches_default() {
        let grid = GridSpec::from_extent(-60.0, 80.0, -180.0, 180.0, 5.0);
        assert_eq!(grid.points().unwrap(), GridSpec::default().points().unwrap());
    }

    #[test]
    fn fractional_step_has_no_drift() {
        let values = AxisRange::new(0.0, 1.0, 0.1).values().unwrap();
        assert_eq!(values.len(), 10);
        assert_eq!(values[3], 0.30000000000000004);
    }

    #[test]
    fn zero_step_rejected() {
        let err = AxisRange::new(0.0, 10.0, 0.0).values().unwrap_err();
        assert!(matches!(err, SynthError::InvalidGrid { .. }));
    }

    #[test]
    fn empty_range_rejected() {
        assert!(AxisRange::new(10.0, 10.0, 1.0).values().is_err());
        assert!(AxisRange::new(f64::NAN, 10.0, 1.0).values().is_err());
    }

    #[test]
    fn latitude_out_of_range_is_pathway_error() {
        let grid = GridSpec::new(AxisRange::new(85.0, 100.0, 10.0), AxisRange::new(0.0, 10.0, 5.0));
        assert!(matches!(grid.points(), Err(SynthError::Pathway(_))));
    }
}

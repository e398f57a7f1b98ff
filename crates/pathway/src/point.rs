//! Geographic sample points.

use crate::error::PathwayError;

/// A location at which indicators are synthesised or sampled.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180).
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePoint {
    lat: f64,
    lon: f64,
    label: Option<String>,
}

impl SamplePoint {
    /// Creates an unlabelled point.
    ///
    /// Longitudes outside [-180, 180) are wrapped into that range (so `190`
    /// and `-170` name the same meridian). In-range longitudes are kept
    /// bit-for-bit.
    ///
    /// # Errors
    ///
    /// Returns [`PathwayError::InvalidCoordinate`] for a non-finite
    /// coordinate or a latitude outside [-90, 90].
    pub fn new(lat: f64, lon: f64) -> Result<Self, PathwayError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(PathwayError::InvalidCoordinate {
                reason: format!("non-finite coordinate ({lat}, {lon})"),
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(PathwayError::InvalidCoordinate {
                reason: format!("latitude {lat} outside [-90, 90]"),
            });
        }
        Ok(Self {
            lat,
            lon: normalize_longitude(lon),
            label: None,
        })
    }

    /// Attaches a human-readable label such as a city name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Latitude in degrees north.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees east, within [-180, 180).
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Optional label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Wraps a finite longitude into [-180, 180).
pub fn normalize_longitude(lon: f64) -> f64 {
    if (-180.0..180.0).contains(&lon) {
        return lon;
    }
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped >= 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

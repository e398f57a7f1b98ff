//! Latitude zones and the coastal heuristic.

/// Climate zone by absolute latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateZone {
    /// |lat| < 23.5
    Tropical,
    /// 23.5 ≤ |lat| < 35
    Subtropical,
    /// 35 ≤ |lat| < 55
    Temperate,
    /// |lat| ≥ 55
    Polar,
}

impl ClimateZone {
    pub fn classify(lat: f64) -> Self {
        let abs_lat = lat.abs();
        if abs_lat < 23.5 {
            Self::Tropical
        } else if abs_lat < 35.0 {
            Self::Subtropical
        } else if abs_lat < 55.0 {
            Self::Temperate
        } else {
            Self::Polar
        }
    }
}

/// Crude coastal flag: far east/west or near the prime meridian.
pub fn is_coastal(lon: f64) -> bool {
    lon.abs() > 100.0 || lon.abs() < 20.0
}

/// Zone and coastal flag for one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneProfile {
    /// Zone from the absolute latitude.
    pub zone: ClimateZone,
    /// Result of [`is_coastal`] for the longitude.
    pub coastal: bool,
}

impl ZoneProfile {
    /// Profile of the location `(lat, lon)`.
    pub fn classify(lat: f64, lon: f64) -> Self {
        Self {
            zone: ClimateZone::classify(lat),
            coastal: is_coastal(lon),
        }
    }

    /// Whether the location falls in `zone`.
    pub fn is(&self, zone: ClimateZone) -> bool {
        self.zone == zone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_boundaries() {
        assert_eq!(ClimateZone::classify(23.4), ClimateZone::Tropical);
        assert_eq!(ClimateZone::classify(-23.5), ClimateZone::Subtropical);
        assert_eq!(ClimateZone::classify(35.0), ClimateZone::Temperate);
        assert_eq!(ClimateZone::classify(-54.99), ClimateZone::Temperate);
        assert_eq!(ClimateZone::classify(55.0), ClimateZone::Polar);
        assert_eq!(ClimateZone::classify(-90.0), ClimateZone::Polar);
    }

    #[test]
    fn coastal_heuristic() {
        assert!(is_coastal(-0.1278));
        assert!(is_coastal(139.65));
        assert!(is_coastal(-122.4));
        assert!(!is_coastal(-74.0));
        assert!(!is_coastal(20.0));
        assert!(!is_coastal(100.0));
    }
}

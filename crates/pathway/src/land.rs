//! Land/ocean classification.

/// Capability to tell land from ocean at a coordinate.
///
/// Implementations must be pure: the same coordinate always classifies the
/// same way.
pub trait LandClassifier: Send + Sync {
    /// Whether `(lat, lon)` is treated as land.
    fn is_land(&self, lat: f64, lon: f64) -> bool;
}

/// Axis-aligned box with open bounds on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Region name, for diagnostics.
    pub name: &'static str,
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl BoundingBox {
    /// Whether the point lies strictly inside the box.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lon > self.lon_min && lon < self.lon_max && lat > self.lat_min && lat < self.lat_max
    }
}

/// Coarse continental boxes.
///
/// The boxes overlap coastal seas and inland water; that is an accepted
/// approximation, not a defect.
pub static CONTINENT_BOXES: [BoundingBox; 5] = [
    BoundingBox {
        name: "north_america",
        lon_min: -130.0,
        lon_max: -60.0,
        lat_min: 10.0,
        lat_max: 70.0,
    },
    BoundingBox {
        name: "south_america",
        lon_min: -80.0,
        lon_max: -35.0,
        lat_min: -55.0,
        lat_max: 10.0,
    },
    BoundingBox {
        name: "europe_africa",
        lon_min: -20.0,
        lon_max: 60.0,
        lat_min: -35.0,
        lat_max: 70.0,
    },
    BoundingBox {
        name: "asia",
        lon_min: 60.0,
        lon_max: 150.0,
        lat_min: -10.0,
        lat_max: 70.0,
    },
    BoundingBox {
        name: "australia",
        lon_min: 110.0,
        lon_max: 155.0,
        lat_min: -45.0,
        lat_max: -10.0,
    },
];

/// Land mask built from a fixed list of bounding boxes.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBoxLandMask {
    boxes: &'static [BoundingBox],
}

impl BoundingBoxLandMask {
    /// Mask over an arbitrary static box list.
    pub const fn new(boxes: &'static [BoundingBox]) -> Self {
        Self { boxes }
    }

    /// Name of the first box containing the point, if any.
    pub fn region(&self, lat: f64, lon: f64) -> Option<&'static str> {
        self.boxes
            .iter()
            .find(|b| b.contains(lat, lon))
            .map(|b| b.name)
    }
}

impl Default for BoundingBoxLandMask {
    fn default() -> Self {
        Self::new(&CONTINENT_BOXES)
    }
}

impl LandClassifier for BoundingBoxLandMask {
    fn is_land(&self, lat: f64, lon: f64) -> bool {
        self.region(lat, lon).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_york_is_land() {
        let mask = BoundingBoxLandMask::default();
        assert!(mask.is_land(40.0, -74.0));
        assert_eq!(mask.region(40.0, -74.0), Some("north_america"));
    }

    #[test]
    fn open_pacific_is_ocean() {
        let mask = BoundingBoxLandMask::default();
        assert!(!mask.is_land(0.0, -150.0));
        assert!(!mask.is_land(-30.0, 170.0));
    }

    #[test]
    fn box_edges_are_open() {
        let mask = BoundingBoxLandMask::default();
        // lon = -130 is the western edge of North America.
        assert!(!mask.is_land(40.0, -130.0));
        // lat = 70 is the northern edge of every northern box.
        assert!(!mask.is_land(70.0, 100.0));
    }

    #[test]
    fn other_continents() {
        let mask = BoundingBoxLandMask::default();
        assert_eq!(mask.region(-15.0, -50.0), Some("south_america"));
        assert_eq!(mask.region(0.0, 20.0), Some("europe_africa"));
        assert_eq!(mask.region(30.0, 100.0), Some("asia"));
        assert_eq!(mask.region(-25.0, 135.0), Some("australia"));
    }

    #[test]
    fn custom_box_list() {
        static ONLY: [BoundingBox; 1] = [BoundingBox {
            name: "island",
            lon_min: 0.0,
            lon_max: 1.0,
            lat_min: 0.0,
            lat_max: 1.0,
        }];
        let mask = BoundingBoxLandMask::new(&ONLY);
        assert!(mask.is_land(0.5, 0.5));
        assert!(!mask.is_land(40.0, -74.0));
    }
}

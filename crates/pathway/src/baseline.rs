//! Piecewise-linear climatology baselines indexed by latitude.

/// An ordered set of `(latitude, value)` anchors, strictly increasing in
/// latitude.
#[derive(Debug, Clone, Copy)]
pub struct ClimatologyTable {
    anchors: &'static [(f64, f64)],
}

impl ClimatologyTable {
    /// Wraps a static anchor slice.
    pub const fn new(anchors: &'static [(f64, f64)]) -> Self {
        Self { anchors }
    }

    /// The anchor points.
    pub fn anchors(&self) -> &'static [(f64, f64)] {
        self.anchors
    }

    /// Interpolated value at `lat`. See [`interpolate`].
    pub fn value_at(&self, lat: f64) -> f64 {
        interpolate(self.anchors, lat)
    }

    /// Whether anchor latitudes are strictly increasing.
    pub fn is_strictly_increasing(&self) -> bool {
        self.anchors.windows(2).all(|w| w[0].0 < w[1].0)
    }
}

/// 1950–1980 mean surface temperature by latitude (°C).
pub static BASELINE_TEMPERATURE: ClimatologyTable = ClimatologyTable::new(&[
    (-60.0, -10.0),
    (-50.0, -5.0),
    (-40.0, 5.0),
    (-30.0, 14.0),
    (-20.0, 22.0),
    (-10.0, 25.5),
    (0.0, 26.5),
    (10.0, 25.5),
    (20.0, 22.0),
    (30.0, 18.0),
    (40.0, 12.0),
    (50.0, 5.0),
    (60.0, -2.0),
    (70.0, -10.0),
]);

/// Annual precipitation by latitude (mm/year).
pub static BASELINE_PRECIPITATION: ClimatologyTable = ClimatologyTable::new(&[
    (-60.0, 800.0),
    (-50.0, 1000.0),
    (-40.0, 900.0),
    (-30.0, 600.0),
    (-20.0, 1500.0),
    (-10.0, 2200.0),
    (0.0, 2000.0),
    (10.0, 1800.0),
    (20.0, 1200.0),
    (30.0, 700.0),
    (40.0, 800.0),
    (50.0, 700.0),
    (60.0, 500.0),
    (70.0, 300.0),
]);

/// Linear interpolation between the two anchors bracketing `lat`.
///
/// Latitudes below the first anchor take the first anchor's value and
/// latitudes above the last take the last anchor's value; there is no
/// extrapolation. An exact anchor match returns the anchor value exactly.
/// An empty table yields 0.0.
pub fn interpolate(anchors: &[(f64, f64)], lat: f64) -> f64 {
    let Some(&(_, last)) = anchors.last() else {
        return 0.0;
    };
    for (i, &(a_lat, a_val)) in anchors.iter().enumerate() {
        if lat == a_lat {
            return a_val;
        }
        if lat < a_lat {
            if i == 0 {
                return a_val;
            }
            let (p_lat, p_val) = anchors[i - 1];
            let frac = (lat - p_lat) / (a_lat - p_lat);
            return p_val + frac * (a_val - p_val);
        }
    }
    last
}

/// Baseline temperature (°C) at `lat`.
pub fn baseline_temperature(lat: f64) -> f64 {
    BASELINE_TEMPERATURE.value_at(lat)
}

/// Baseline annual precipitation (mm/year) at `lat`.
pub fn baseline_precipitation(lat: f64) -> f64 {
    BASELINE_PRECIPITATION.value_at(lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tables_are_strictly_increasing() {
        assert!(BASELINE_TEMPERATURE.is_strictly_increasing());
        assert!(BASELINE_PRECIPITATION.is_strictly_increasing());
    }

    #[test]
    fn anchors_are_exact() {
        for table in [BASELINE_TEMPERATURE, BASELINE_PRECIPITATION] {
            for &(lat, value) in table.anchors() {
                assert_eq!(table.value_at(lat), value);
            }
        }
    }

    #[test]
    fn midpoint_is_linear() {
        // Between (30, 18) and (40, 12).
        assert_relative_eq!(baseline_temperature(35.0), 15.0, epsilon = 1e-12);
        // Between (-20, 1500) and (-10, 2200).
        assert_relative_eq!(baseline_precipitation(-12.5), 2025.0, epsilon = 1e-9);
    }

    #[test]
    fn clamps_below_and_above() {
        assert_eq!(baseline_temperature(-90.0), -10.0);
        assert_eq!(baseline_temperature(-60.5), -10.0);
        assert_eq!(baseline_temperature(85.0), -10.0);
        assert_eq!(baseline_precipitation(90.0), 300.0);
        assert_eq!(baseline_precipitation(-75.0), 800.0);
    }

    #[test]
    fn empty_table_is_zero() {
        assert_eq!(interpolate(&[], 10.0), 0.0);
    }

    #[test]
    fn single_anchor_table() {
        let anchors = [(10.0, 4.0)];
        assert_eq!(interpolate(&anchors, -50.0), 4.0);
        assert_eq!(interpolate(&anchors, 10.0), 4.0);
        assert_eq!(interpolate(&anchors, 50.0), 4.0);
    }
}

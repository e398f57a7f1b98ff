//! Scenario warming levels, latitude amplification and precipitation
//! sensitivity.

use crate::scenario::{Scenario, TimePeriod};

/// Global mean warming (°C above pre-industrial) for a scenario and epoch.
///
/// Best estimates after IPCC AR6 WG1 Table 4.2. The historical period is
/// zero for every scenario.
pub fn global_warming(scenario: Scenario, period: TimePeriod) -> f64 {
    use Scenario::*;
    use TimePeriod::*;
    match (scenario, period) {
        (_, Historical) => 0.0,
        (Ssp126, P2030) => 1.5,
        (Ssp126, P2050) => 1.7,
        (Ssp126, P2070) => 1.7,
        (Ssp126, P2090) => 1.4,
        (Ssp245, P2030) => 1.5,
        (Ssp245, P2050) => 2.0,
        (Ssp245, P2070) => 2.4,
        (Ssp245, P2090) => 2.7,
        (Ssp370, P2030) => 1.5,
        (Ssp370, P2050) => 2.1,
        (Ssp370, P2070) => 2.9,
        (Ssp370, P2090) => 3.6,
        (Ssp585, P2030) => 1.6,
        (Ssp585, P2050) => 2.4,
        (Ssp585, P2070) => 3.5,
        (Ssp585, P2090) => 4.4,
    }
}

/// Latitude band used for polar amplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmplificationBand {
    /// North of 60°N.
    Arctic,
    /// 50°N–60°N.
    Subarctic,
    /// 30°N–50°N.
    TemperateNorth,
    /// 30°S–30°N.
    Tropical,
    /// 50°S–30°S.
    TemperateSouth,
    /// South of 50°S.
    Subantarctic,
}

impl AmplificationBand {
    /// Band containing `lat`. Lower bounds are exclusive.
    pub fn classify(lat: f64) -> Self {
        if lat > 60.0 {
            Self::Arctic
        } else if lat > 50.0 {
            Self::Subarctic
        } else if lat > 30.0 {
            Self::TemperateNorth
        } else if lat > -30.0 {
            Self::Tropical
        } else if lat > -50.0 {
            Self::TemperateSouth
        } else {
            Self::Subantarctic
        }
    }

    /// Multiplier on global warming.
    pub fn factor(self) -> f64 {
        match self {
            Self::Arctic => 2.5,
            Self::Subarctic => 1.8,
            Self::TemperateNorth => 1.2,
            Self::Tropical => 0.8,
            Self::TemperateSouth => 1.0,
            Self::Subantarctic => 1.4,
        }
    }
}

/// Polar amplification factor at `lat`.
pub fn amplification(lat: f64) -> f64 {
    AmplificationBand::classify(lat).factor()
}

/// Region used for the precipitation response to warming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensitivityRegion {
    /// lat > 60
    Arctic,
    /// 50 < lat ≤ 60
    Subarctic,
    /// Northern mid-latitudes under westerly, ocean-fed flow.
    TemperateNorthWest,
    /// 30 < lat ≤ 50 outside the westerly sectors.
    TemperateNorthEast,
    /// 10 < lat ≤ 30
    SubtropicalNorth,
    /// Intensifying ITCZ sectors (Amazon, maritime continent).
    TropicalWet,
    /// -10 < lat ≤ 10 outside the wet sectors.
    TropicalDry,
    /// Mediterranean-type southern subtropics.
    SubtropicalSouth,
    /// -50 < lat ≤ -30
    TemperateSouth,
    /// lat ≤ -50
    Subantarctic,
}

impl SensitivityRegion {
    /// Region containing `(lat, lon)`.
    pub fn classify(lat: f64, lon: f64) -> Self {
        if lat > 60.0 {
            Self::Arctic
        } else if lat > 50.0 {
            Self::Subarctic
        } else if lat > 30.0 {
            let west = (lon > -130.0 && lon < -60.0)
                || (lon > -10.0 && lon < 40.0)
                || (lon > 100.0 && lon < 160.0);
            if west {
                Self::TemperateNorthWest
            } else {
                Self::TemperateNorthEast
            }
        } else if lat > 10.0 {
            Self::SubtropicalNorth
        } else if lat > -10.0 {
            let wet = (lon > -80.0 && lon < -30.0) || (lon > 90.0 && lon < 150.0);
            if wet {
                Self::TropicalWet
            } else {
                Self::TropicalDry
            }
        } else if lat > -30.0 {
            Self::SubtropicalSouth
        } else if lat > -50.0 {
            Self::TemperateSouth
        } else {
            Self::Subantarctic
        }
    }

    /// Precipitation change in percent per °C of global warming.
    pub fn percent_per_degree(self) -> f64 {
        match self {
            Self::Arctic => 5.0,
            Self::Subarctic => 3.5,
            Self::TemperateNorthWest => 2.0,
            Self::TemperateNorthEast => 0.5,
            Self::SubtropicalNorth => -3.0,
            Self::TropicalWet => 2.0,
            Self::TropicalDry => -2.5,
            Self::SubtropicalSouth => -4.0,
            Self::TemperateSouth => 1.0,
            Self::Subantarctic => 3.0,
        }
    }
}

/// Precipitation sensitivity (% per °C) at `(lat, lon)`.
pub fn precip_sensitivity(lat: f64, lon: f64) -> f64 {
    SensitivityRegion::classify(lat, lon).percent_per_degree()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn historical_is_zero_for_all_scenarios() {
        for s in Scenario::ALL {
            assert_eq!(global_warming(s, TimePeriod::Historical), 0.0);
        }
    }

    #[test]
    fn warming_table_spot_checks() {
        assert_eq!(global_warming(Scenario::Ssp245, TimePeriod::P2050), 2.0);
        assert_eq!(global_warming(Scenario::Ssp585, TimePeriod::P2090), 4.4);
        assert_eq!(global_warming(Scenario::Ssp126, TimePeriod::P2090), 1.4);
    }

    #[test]
    fn warming_is_nonnegative_and_ordered_late_century() {
        for s in Scenario::ALL {
            for p in TimePeriod::ALL {
                assert!(global_warming(s, p) >= 0.0);
            }
        }
        let late: Vec<f64> = Scenario::ALL
            .iter()
            .map(|&s| global_warming(s, TimePeriod::P2090))
            .collect();
        assert!(late.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn amplification_band_edges_are_exclusive() {
        assert_eq!(AmplificationBand::classify(60.0), AmplificationBand::Subarctic);
        assert_eq!(AmplificationBand::classify(60.1), AmplificationBand::Arctic);
        assert_eq!(AmplificationBand::classify(30.0), AmplificationBand::Tropical);
        assert_eq!(AmplificationBand::classify(-30.0), AmplificationBand::TemperateSouth);
        assert_eq!(AmplificationBand::classify(-50.0), AmplificationBand::Subantarctic);
        assert_eq!(amplification(40.0), 1.2);
        assert_eq!(amplification(-89.0), 1.4);
    }

    #[test]
    fn temperate_north_west_east_split() {
        assert_eq!(
            SensitivityRegion::classify(40.0, -74.0),
            SensitivityRegion::TemperateNorthWest
        );
        assert_eq!(
            SensitivityRegion::classify(40.0, 60.0),
            SensitivityRegion::TemperateNorthEast
        );
        assert_eq!(precip_sensitivity(40.0, 10.0), 2.0);
        assert_eq!(precip_sensitivity(40.0, -170.0), 0.5);
    }

    #[test]
    fn tropics_wet_dry_split() {
        assert_eq!(
            SensitivityRegion::classify(0.0, -60.0),
            SensitivityRegion::TropicalWet
        );
        assert_eq!(
            SensitivityRegion::classify(0.0, 20.0),
            SensitivityRegion::TropicalDry
        );
        assert_eq!(precip_sensitivity(5.0, 120.0), 2.0);
        assert_eq!(precip_sensitivity(-5.0, 0.0), -2.5);
    }

    #[test]
    fn remaining_regions() {
        assert_eq!(precip_sensitivity(70.0, 0.0), 5.0);
        assert_eq!(precip_sensitivity(55.0, 0.0), 3.5);
        assert_eq!(precip_sensitivity(20.0, 0.0), -3.0);
        assert_eq!(precip_sensitivity(-20.0, 0.0), -4.0);
        assert_eq!(precip_sensitivity(-40.0, 0.0), 1.0);
        assert_eq!(precip_sensitivity(-60.0, 0.0), 3.0);
    }
}

//! Impact indicator catalogue.

use std::fmt;
use std::str::FromStr;

use crate::error::ImpactError;
use crate::zone::{ClimateZone, ZoneProfile};

/// Record source for impact indicators.
pub const IMPACT_SOURCE: &str = "isimip";

/// Percentile attached to impact records.
pub const IMPACT_PERCENTILE: u8 = 50;

/// Climate impact indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImpactIndicator {
    FloodDepth,
    DroughtSeverity,
    WaterStress,
    CropYieldChange,
    WildfireRisk,
    TropicalCycloneExposure,
    RiverDischargeChange,
    HeatMortality,
}

impl ImpactIndicator {
    /// Every impact indicator, in record emission order.
    pub const ALL: [ImpactIndicator; 8] = [
        ImpactIndicator::FloodDepth,
        ImpactIndicator::DroughtSeverity,
        ImpactIndicator::WaterStress,
        ImpactIndicator::CropYieldChange,
        ImpactIndicator::WildfireRisk,
        ImpactIndicator::TropicalCycloneExposure,
        ImpactIndicator::RiverDischargeChange,
        ImpactIndicator::HeatMortality,
    ];

    /// Stable snake_case id, stored as `indicator_id`.
    pub fn id(self) -> &'static str {
        match self {
            Self::FloodDepth => "flood_depth",
            Self::DroughtSeverity => "drought_severity",
            Self::WaterStress => "water_stress",
            Self::CropYieldChange => "crop_yield_change",
            Self::WildfireRisk => "wildfire_risk",
            Self::TropicalCycloneExposure => "tropical_cyclone_exposure",
            Self::RiverDischargeChange => "river_discharge_change",
            Self::HeatMortality => "heat_mortality",
        }
    }

    /// Human-readable display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FloodDepth => "Flood Depth",
            Self::DroughtSeverity => "Drought Severity Index",
            Self::WaterStress => "Water Stress",
            Self::CropYieldChange => "Crop Yield Change",
            Self::WildfireRisk => "Wildfire Risk",
            Self::TropicalCycloneExposure => "Tropical Cyclone Exposure",
            Self::RiverDischargeChange => "River Discharge Change",
            Self::HeatMortality => "Heat-Related Mortality Risk",
        }
    }

    /// Unit of the stored value.
    pub fn unit(self) -> &'static str {
        match self {
            Self::FloodDepth => "m",
            Self::DroughtSeverity => "index",
            Self::WaterStress | Self::CropYieldChange | Self::RiverDischargeChange => "%",
            Self::WildfireRisk => "probability",
            Self::TropicalCycloneExposure => "events/year",
            Self::HeatMortality => "deaths/100k",
        }
    }

    /// Variable name expected in a gridded impact dataset.
    pub fn raster_variable(self) -> &'static str {
        match self {
            Self::FloodDepth => "flddph",
            Self::DroughtSeverity => "spei",
            Self::WaterStress => "pwtot",
            Self::CropYieldChange => "yield",
            Self::WildfireRisk => "burntarea",
            Self::TropicalCycloneExposure => "tc_genesis",
            Self::RiverDischargeChange => "dis",
            Self::HeatMortality => "mortality",
        }
    }

    /// Impact model that produces the indicator.
    pub fn impact_model(self) -> &'static str {
        match self {
            Self::FloodDepth => "clm45",
            Self::DroughtSeverity | Self::RiverDischargeChange => "h08",
            Self::WaterStress => "watergap2",
            Self::CropYieldChange => "lpjml",
            Self::WildfireRisk => "jules-es",
            Self::TropicalCycloneExposure => "storm",
            Self::HeatMortality => "impact2c",
        }
    }

    /// Model label stored with each record, e.g. `isimip3b-h08`.
    pub fn model_label(self) -> String {
        format!("isimip3b-{}", self.impact_model())
    }

    /// Inclusive `(min, max)` range of valid values.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::FloodDepth => (0.0, 5.0),
            Self::DroughtSeverity => (-4.0, 4.0),
            Self::WaterStress | Self::HeatMortality => (0.0, 100.0),
            Self::CropYieldChange => (-50.0, 30.0),
            Self::WildfireRisk => (0.0, 1.0),
            Self::TropicalCycloneExposure => (0.0, 10.0),
            Self::RiverDischargeChange => (-50.0, 50.0),
        }
    }

    /// Standard deviation of the additive noise in the fallback model.
    pub fn noise_sigma(self) -> f64 {
        match self {
            Self::FloodDepth => 0.1,
            Self::DroughtSeverity => 0.2,
            Self::WaterStress | Self::RiverDischargeChange => 5.0,
            Self::CropYieldChange => 3.0,
            Self::WildfireRisk => 0.02,
            Self::TropicalCycloneExposure => 0.3,
            Self::HeatMortality => 2.0,
        }
    }

    /// `(base, variation)` for a location in the fallback model.
    pub fn base_and_variation(self, profile: ZoneProfile) -> (f64, f64) {
        use ClimateZone::*;

        let zone = profile.zone;
        let coastal = profile.coastal;
        match self {
            Self::FloodDepth => {
                let base = if zone == Tropical {
                    0.8
                } else if coastal {
                    0.6
                } else {
                    0.3
                };
                (base, 0.3)
            }
            Self::DroughtSeverity => {
                let base = match zone {
                    Tropical if !coastal => -0.5,
                    Subtropical => -0.8,
                    _ => -0.3,
                };
                (base, -1.5)
            }
            Self::WaterStress => {
                let base = match zone {
                    Subtropical if !coastal => 40.0,
                    Tropical => 25.0,
                    _ => 20.0,
                };
                (base, 30.0)
            }
            Self::CropYieldChange => match zone {
                Tropical => (-5.0, -20.0),
                Temperate => (2.0, -10.0),
                _ => (0.0, -15.0),
            },
            Self::WildfireRisk => {
                let base = match zone {
                    Subtropical if !coastal => 0.15,
                    Temperate => 0.08,
                    _ => 0.03,
                };
                (base, 0.25)
            }
            Self::TropicalCycloneExposure => {
                let base = match zone {
                    Tropical if coastal => 2.5,
                    Subtropical if coastal => 1.5,
                    _ => 0.2,
                };
                (base, 1.5)
            }
            Self::RiverDischargeChange => match zone {
                Tropical => (5.0, -15.0),
                Polar => (10.0, 20.0),
                _ => (0.0, -10.0),
            },
            Self::HeatMortality => {
                let base = match zone {
                    Tropical => 15.0,
                    Subtropical => 10.0,
                    _ => 5.0,
                };
                (base, 30.0)
            }
        }
    }
}

impl fmt::Display for ImpactIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ImpactIndicator {
    type Err = ImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.id() == wanted)
            .ok_or_else(|| ImpactError::UnknownIndicator {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse() {
        for ind in ImpactIndicator::ALL {
            assert_eq!(ind.id().parse::<ImpactIndicator>().unwrap(), ind);
        }
        assert!("sea_level".parse::<ImpactIndicator>().is_err());
    }

    #[test]
    fn model_labels() {
        assert_eq!(ImpactIndicator::FloodDepth.model_label(), "isimip3b-clm45");
        assert_eq!(ImpactIndicator::WildfireRisk.model_label(), "isimip3b-jules-es");
    }

    #[test]
    fn ranges_are_ordered() {
        for ind in ImpactIndicator::ALL {
            let (lo, hi) = ind.range();
            assert!(lo < hi, "{ind}");
        }
    }

    #[test]
    fn coastal_tropics_get_cyclones() {
        let profile = ZoneProfile {
            zone: ClimateZone::Tropical,
            coastal: true,
        };
        assert_eq!(
            ImpactIndicator::TropicalCycloneExposure.base_and_variation(profile),
            (2.5, 1.5)
        );
        let inland = ZoneProfile {
            coastal: false,
            ..profile
        };
        assert_eq!(
            ImpactIndicator::TropicalCycloneExposure.base_and_variation(inland),
            (0.2, 1.5)
        );
    }

    #[test]
    fn coastal_tropical_drought_uses_default_base() {
        let profile = ZoneProfile {
            zone: ClimateZone::Tropical,
            coastal: true,
        };
        assert_eq!(
            ImpactIndicator::DroughtSeverity.base_and_variation(profile),
            (-0.3, -1.5)
        );
    }
}

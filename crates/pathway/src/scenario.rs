//! Emissions scenarios and target epochs.

use std::fmt;
use std::str::FromStr;

use crate::error::PathwayError;

/// Shared Socioeconomic Pathway used to drive long-run warming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scenario {
    /// SSP1-2.6, strong mitigation.
    Ssp126,
    /// SSP2-4.5, middle of the road.
    Ssp245,
    /// SSP3-7.0, regional rivalry.
    Ssp370,
    /// SSP5-8.5, fossil-fuelled development.
    Ssp585,
}

impl Scenario {
    /// All scenarios in ascending forcing order.
    pub const ALL: [Scenario; 4] = [
        Scenario::Ssp126,
        Scenario::Ssp245,
        Scenario::Ssp370,
        Scenario::Ssp585,
    ];

    /// Canonical lower-case identifier, e.g. `"ssp245"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Ssp126 => "ssp126",
            Scenario::Ssp245 => "ssp245",
            Scenario::Ssp370 => "ssp370",
            Scenario::Ssp585 => "ssp585",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = PathwayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ssp126" => Ok(Scenario::Ssp126),
            "ssp245" => Ok(Scenario::Ssp245),
            "ssp370" => Ok(Scenario::Ssp370),
            "ssp585" => Ok(Scenario::Ssp585),
            _ => Err(PathwayError::UnknownScenario {
                name: s.to_string(),
            }),
        }
    }
}

/// Target epoch for which a warming level is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimePeriod {
    /// Reference climate; zero warming under every scenario.
    Historical,
    /// Centred on 2030.
    P2030,
    /// Centred on 2050.
    P2050,
    /// Centred on 2070.
    P2070,
    /// Centred on 2090.
    P2090,
}

impl TimePeriod {
    /// Every period, historical first.
    pub const ALL: [TimePeriod; 5] = [
        TimePeriod::Historical,
        TimePeriod::P2030,
        TimePeriod::P2050,
        TimePeriod::P2070,
        TimePeriod::P2090,
    ];

    /// Future periods only.
    pub const FUTURE: [TimePeriod; 4] = [
        TimePeriod::P2030,
        TimePeriod::P2050,
        TimePeriod::P2070,
        TimePeriod::P2090,
    ];

    /// Canonical identifier, e.g. `"2050"` or `"historical"`.
    pub fn as_str(self) -> &'static str {
        match self {
            TimePeriod::Historical => "historical",
            TimePeriod::P2030 => "2030",
            TimePeriod::P2050 => "2050",
            TimePeriod::P2070 => "2070",
            TimePeriod::P2090 => "2090",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimePeriod {
    type Err = PathwayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "historical" => Ok(TimePeriod::Historical),
            "2030" => Ok(TimePeriod::P2030),
            "2050" => Ok(TimePeriod::P2050),
            "2070" => Ok(TimePeriod::P2070),
            "2090" => Ok(TimePeriod::P2090),
            _ => Err(PathwayError::UnknownPeriod {
                name: s.to_string(),
            }),
        }
    }
}

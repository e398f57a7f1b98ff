//! Grid indicator catalogue.

use std::fmt;
use std::str::FromStr;

use crate::error::SynthError;

/// Record source for gridded projections.
pub const GRID_SOURCE: &str = "cmip6";

/// Model label attached to gridded records (multi-model mean).
pub const GRID_MODEL: &str = "CMIP6-MMM";

/// Percentile attached to gridded records.
pub const GRID_PERCENTILE: u8 = 50;

/// Indicators produced by the synthesis engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GridIndicator {
    /// Mean temperature anomaly.
    Tas,
    /// Maximum temperature anomaly.
    Tasmax,
    /// Minimum temperature anomaly.
    Tasmin,
    /// Annual precipitation.
    Pr,
    /// Days per year above 35 °C.
    Hd35,
    /// Days per year above 40 °C.
    Hd40,
    /// Longest run of consecutive dry days.
    Cdd,
}

impl GridIndicator {
    /// Every grid indicator, in record emission order.
    pub const ALL: [GridIndicator; 7] = [
        GridIndicator::Tas,
        GridIndicator::Tasmax,
        GridIndicator::Tasmin,
        GridIndicator::Pr,
        GridIndicator::Hd35,
        GridIndicator::Hd40,
        GridIndicator::Cdd,
    ];

    /// Record identifier, e.g. `"tasmax"`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Tas => "tas",
            Self::Tasmax => "tasmax",
            Self::Tasmin => "tasmin",
            Self::Pr => "pr",
            Self::Hd35 => "hd35",
            Self::Hd40 => "hd40",
            Self::Cdd => "cdd",
        }
    }

    /// Unit string stored with each record.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Tas | Self::Tasmax | Self::Tasmin => "°C",
            Self::Pr => "mm/year",
            Self::Hd35 | Self::Hd40 | Self::Cdd => "days",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tas => "Temperature Anomaly",
            Self::Tasmax => "Max Temp Anomaly",
            Self::Tasmin => "Min Temp Anomaly",
            Self::Pr => "Precipitation",
            Self::Hd35 => "Hot Days >35°C",
            Self::Hd40 => "Extreme Heat Days >40°C",
            Self::Cdd => "Consecutive Dry Days",
        }
    }
}

impl fmt::Display for GridIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GridIndicator {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.id() == wanted)
            .ok_or_else(|| SynthError::UnknownIndicator {
                name: s.to_string(),
            })
    }
}

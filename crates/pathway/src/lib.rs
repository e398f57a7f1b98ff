//! # isotherm-pathway
//!
//! Fixed lookup tables and pure classifiers that describe how much, and
//! where, the climate warms under a given emissions scenario and epoch.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `scenario` | [`Scenario`] and [`TimePeriod`] enumerations |
//! | `point` | [`SamplePoint`] with coordinate validation |
//! | `baseline` | Piecewise-linear climatology by latitude |
//! | `warming` | Global warming table, polar amplification, precipitation sensitivity |
//! | `land` | [`LandClassifier`] capability and the bounding-box land mask |
//!
//! Every function in this crate is pure; all tables are `static`.

mod baseline;
mod error;
mod land;
mod point;
mod scenario;
mod warming;

pub use baseline::{
    BASELINE_PRECIPITATION, BASELINE_TEMPERATURE, ClimatologyTable, baseline_precipitation,
    baseline_temperature, interpolate,
};
pub use error::PathwayError;
pub use land::{BoundingBox, BoundingBoxLandMask, CONTINENT_BOXES, LandClassifier};
pub use point::{SamplePoint, normalize_longitude};
pub use scenario::{Scenario, TimePeriod};
pub use warming::{
    AmplificationBand, SensitivityRegion, amplification, global_warming, precip_sensitivity,
};

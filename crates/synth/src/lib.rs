//! # isotherm-synth
//!
//! Composes the warming pathway model and the perturbation generator into
//! gridded indicator values.
//!
//! ## Indicator chain
//!
//! ```text
//! global_warming × amplification (× land) ──perturb──▶ tas ──▶ tasmax, tasmin
//!                                                       │
//!                                                       └──perturb──▶ hd35 ──perturb──▶ hd40
//! baseline_precip × sensitivity response ──perturb──▶ pr ──perturb──▶ cdd
//! ```
//!
//! Derived indicators are computed from the already-perturbed upstream
//! value, so they are correlated with it on purpose.
//!
//! ## Quick Start
//!
//! ```ignore
//! use isotherm_pathway::{SamplePoint, Scenario, TimePeriod};
//! use isotherm_synth::{GridIndicator, SynthesisEngine};
//!
//! let engine = SynthesisEngine::new();
//! let point = SamplePoint::new(40.0, -74.0)?;
//! let values = engine.synthesize(&point, Scenario::Ssp245, TimePeriod::P2050);
//! let tas = values.value(GridIndicator::Tas);
//! ```

mod engine;
mod error;
mod grid;
mod indicator;

pub use engine::{PointIndicators, SynthesisEngine};
pub use error::SynthError;
pub use grid::{AxisRange, GridSpec};
pub use indicator::{GRID_MODEL, GRID_PERCENTILE, GRID_SOURCE, GridIndicator};

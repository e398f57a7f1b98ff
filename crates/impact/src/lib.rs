//! # isotherm-impact
//!
//! Impact indicators (flooding, drought, water stress, crop yield, wildfire,
//! tropical cyclones, river discharge, heat mortality) and the
//! zone-classification model that supplies plausible values for them when
//! no gridded impact dataset is available.
//!
//! ```text
//! value = base(zone, coastal) + scenario_mult × time_mult × variation + N(0, σ)
//!         clamped to the indicator range
//! ```

mod cities;
mod error;
mod indicator;
mod model;
mod zone;

pub use cities::{City, GLOBAL_CITIES, default_points};
pub use error::ImpactError;
pub use indicator::{IMPACT_PERCENTILE, IMPACT_SOURCE, ImpactIndicator};
pub use model::{scenario_multiplier, synthetic_value, synthetic_value_for_id, time_multiplier};
pub use zone::{ClimateZone, ZoneProfile, is_coastal};

//! Fallback value model.

use isotherm_pathway::{Scenario, TimePeriod};
use isotherm_perturb::{SeedContext, clamp_to, normal_noise};
use tracing::warn;

use crate::indicator::ImpactIndicator;
use crate::zone::ZoneProfile;

/// Scales the projected change by emissions intensity.
pub fn scenario_multiplier(scenario: Scenario) -> f64 {
    match scenario {
        Scenario::Ssp126 => 0.4,
        Scenario::Ssp245 => 0.7,
        Scenario::Ssp370 => 1.0,
        Scenario::Ssp585 => 1.4,
    }
}

/// Scales the projected change by time horizon; zero for the historical period.
pub fn time_multiplier(period: TimePeriod) -> f64 {
    match period {
        TimePeriod::Historical => 0.0,
        TimePeriod::P2030 => 0.4,
        TimePeriod::P2050 => 0.7,
        TimePeriod::P2070 => 0.9,
        TimePeriod::P2090 => 1.0,
    }
}

/// Plausible value for `indicator` at a location, clamped to its range.
///
/// The noise draw is seeded by the indicator id, scenario, period and
/// coordinates, so repeated calls agree bit for bit.
pub fn synthetic_value(
    indicator: ImpactIndicator,
    lat: f64,
    lon: f64,
    scenario: Scenario,
    period: TimePeriod,
) -> f64 {
    let (base, variation) = indicator.base_and_variation(ZoneProfile::classify(lat, lon));
    let change = scenario_multiplier(scenario) * time_multiplier(period) * variation;
    let ctx = SeedContext::for_run(indicator.id(), scenario, period);
    let noise = normal_noise(&ctx, lat, lon, indicator.noise_sigma());
    let (lo, hi) = indicator.range();
    clamp_to(base + change + noise, lo, hi)
}

/// String-keyed variant of [`synthetic_value`]. Unknown ids yield `0.0`.
pub fn synthetic_value_for_id(
    indicator_id: &str,
    lat: f64,
    lon: f64,
    scenario: Scenario,
    period: TimePeriod,
) -> f64 {
    match indicator_id.parse::<ImpactIndicator>() {
        Ok(indicator) => synthetic_value(indicator, lat, lon, scenario, period),
        Err(_) => {
            warn!(indicator_id, "unknown impact indicator, using 0");
            0.0
        }
    }
}

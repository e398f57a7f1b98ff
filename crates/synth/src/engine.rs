//! Indicator synthesis engine.

use isotherm_pathway::{
    BoundingBoxLandMask, LandClassifier, SamplePoint, Scenario, TimePeriod, amplification,
    baseline_precipitation, baseline_temperature, global_warming, precip_sensitivity,
};
use isotherm_perturb::{Perturber, SeedContext, channel, clamp_to, floor_at};
use isotherm_stats::round_dp;

use crate::indicator::GridIndicator;

/// Warming multiplier applied over land.
const LAND_FACTOR: f64 = 1.3;
/// Daily maximum anomaly relative to the mean anomaly.
const TASMAX_FACTOR: f64 = 1.2;
/// Daily minimum anomaly relative to the mean anomaly.
const TASMIN_FACTOR: f64 = 0.85;
/// Minimum annual precipitation (mm/year).
const PRECIP_FLOOR: f64 = 50.0;
/// Baseline temperature above which hot days accumulate.
const HOT_DAY_THRESHOLD: f64 = 25.0;
const HOT_DAY_CAP: f64 = 180.0;
const EXTREME_HEAT_SHARE: f64 = 0.15;
const CDD_FLOOR: f64 = 5.0;
const CDD_CAP: f64 = 200.0;

/// All seven grid indicators for one point, scenario and period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointIndicators {
    /// Mean temperature anomaly (°C, 2 dp).
    pub tas: f64,
    /// Maximum temperature anomaly (°C).
    pub tasmax: f64,
    /// Minimum temperature anomaly (°C).
    pub tasmin: f64,
    /// Annual precipitation (mm/year, 1 dp).
    pub pr: f64,
    /// Days above 35 °C.
    pub hd35: f64,
    /// Days above 40 °C.
    pub hd40: f64,
    /// Consecutive dry days.
    pub cdd: f64,
}

impl PointIndicators {
    /// Value of a single indicator.
    pub fn value(&self, indicator: GridIndicator) -> f64 {
        match indicator {
            GridIndicator::Tas => self.tas,
            GridIndicator::Tasmax => self.tasmax,
            GridIndicator::Tasmin => self.tasmin,
            GridIndicator::Pr => self.pr,
            GridIndicator::Hd35 => self.hd35,
            GridIndicator::Hd40 => self.hd40,
            GridIndicator::Cdd => self.cdd,
        }
    }

    /// `(indicator, value)` pairs in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (GridIndicator, f64)> + '_ {
        GridIndicator::ALL.into_iter().map(|i| (i, self.value(i)))
    }
}

/// Synthesises grid indicators from the warming pathway model.
///
/// Every value is a pure function of the point, scenario and period. The
/// land classifier is pluggable; the default is the continental
/// bounding-box approximation.
#[derive(Debug, Clone)]
pub struct SynthesisEngine<L = BoundingBoxLandMask> {
    land: L,
    perturber: Perturber,
}

impl SynthesisEngine<BoundingBoxLandMask> {
    /// Engine with the default land mask and ±15 % perturbation.
    pub fn new() -> Self {
        Self::with_land_classifier(BoundingBoxLandMask::default())
    }
}

impl Default for SynthesisEngine<BoundingBoxLandMask> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LandClassifier> SynthesisEngine<L> {
    /// Engine with a custom land classifier.
    pub fn with_land_classifier(land: L) -> Self {
        Self {
            land,
            perturber: Perturber::default(),
        }
    }

    /// Replaces the perturbation generator.
    pub fn with_perturber(mut self, perturber: Perturber) -> Self {
        self.perturber = perturber;
        self
    }

    /// The land classifier in use.
    pub fn land(&self) -> &L {
        &self.land
    }

    /// The perturbation generator in use.
    pub fn perturber(&self) -> &Perturber {
        &self.perturber
    }

    fn perturbed(
        &self,
        tag: &str,
        value: f64,
        point: &SamplePoint,
        scenario: Scenario,
        period: TimePeriod,
    ) -> f64 {
        let ctx = SeedContext::for_run(tag, scenario, period);
        self.perturber.perturb(value, point.lat(), point.lon(), &ctx)
    }

    /// Temperature anomaly before perturbation and rounding.
    pub fn raw_temperature_anomaly(
        &self,
        point: &SamplePoint,
        scenario: Scenario,
        period: TimePeriod,
    ) -> f64 {
        let mut anomaly = global_warming(scenario, period) * amplification(point.lat());
        if self.land.is_land(point.lat(), point.lon()) {
            anomaly *= LAND_FACTOR;
        }
        anomaly
    }

    /// Mean temperature anomaly (°C), rounded to 2 decimals.
    pub fn temperature_anomaly(
        &self,
        point: &SamplePoint,
        scenario: Scenario,
        period: TimePeriod,
    ) -> f64 {
        let raw = self.raw_temperature_anomaly(point, scenario, period);
        round_dp(
            self.perturbed(channel::TEMPERATURE, raw, point, scenario, period),
            2,
        )
    }

    /// Precipitation before perturbation.
    pub fn raw_precipitation(&self, point: &SamplePoint, scenario: Scenario, period: TimePeriod) -> f64 {
        let gw = global_warming(scenario, period);
        let sensitivity = precip_sensitivity(point.lat(), point.lon());
        baseline_precipitation(point.lat()) * (1.0 + sensitivity * gw / 100.0)
    }

    /// Annual precipitation (mm/year), floored at 50 and rounded to 1 decimal.
    pub fn precipitation(&self, point: &SamplePoint, scenario: Scenario, period: TimePeriod) -> f64 {
        let raw = self.raw_precipitation(point, scenario, period);
        let perturbed = self.perturbed(channel::PRECIPITATION, raw, point, scenario, period);
        round_dp(floor_at(perturbed, PRECIP_FLOOR), 1)
    }

    /// Days above 35 °C given the already-rounded mean anomaly.
    pub fn hot_days(
        &self,
        point: &SamplePoint,
        scenario: Scenario,
        period: TimePeriod,
        anomaly: f64,
    ) -> f64 {
        let baseline = baseline_temperature(point.lat());
        let raw = if baseline + anomaly > HOT_DAY_THRESHOLD {
            ((baseline - 20.0) * 5.0).max(0.0) * (1.0 + anomaly * 0.3)
        } else {
            0.0
        };
        let perturbed = self.perturbed(channel::HOT_DAYS, raw, point, scenario, period);
        round_dp(clamp_to(perturbed, 0.0, HOT_DAY_CAP), 0)
    }

    /// Days above 40 °C as a share of hot days.
    pub fn extreme_heat_days(
        &self,
        point: &SamplePoint,
        scenario: Scenario,
        period: TimePeriod,
        hot_days: f64,
    ) -> f64 {
        let raw = hot_days * EXTREME_HEAT_SHARE;
        let perturbed = self.perturbed(channel::EXTREME_HEAT, raw, point, scenario, period);
        round_dp(floor_at(perturbed, 0.0), 0)
    }

    /// Longest dry spell given the already-rounded precipitation.
    pub fn consecutive_dry_days(
        &self,
        point: &SamplePoint,
        scenario: Scenario,
        period: TimePeriod,
        precipitation: f64,
    ) -> f64 {
        let gw = global_warming(scenario, period);
        let raw = (150.0 - precipitation / 10.0).max(CDD_FLOOR) * (1.0 + gw * 0.05);
        let perturbed =
            self.perturbed(channel::CONSECUTIVE_DRY_DAYS, raw, point, scenario, period);
        round_dp(clamp_to(perturbed, CDD_FLOOR, CDD_CAP), 0)
    }

    /// Computes every grid indicator for one point.
    pub fn synthesize(
        &self,
        point: &SamplePoint,
        scenario: Scenario,
        period: TimePeriod,
    ) -> PointIndicators {
        let tas = self.temperature_anomaly(point, scenario, period);
        let pr = self.precipitation(point, scenario, period);
        let hd35 = self.hot_days(point, scenario, period, tas);
        let hd40 = self.extreme_heat_days(point, scenario, period, hd35);
        let cdd = self.consecutive_dry_days(point, scenario, period, pr);

        PointIndicators {
            tas,
            tasmax: tas * TASMAX_FACTOR,
            tasmin: tas * TASMIN_FACTOR,
            pr,
            hd35,
            hd40,
            cdd,
        }
    }
}

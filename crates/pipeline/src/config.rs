//! Run configuration.

use std::collections::HashMap;

use isotherm_impact::ImpactIndicator;
use isotherm_io::DatasetSource;
use isotherm_pathway::{SamplePoint, Scenario, TimePeriod};
use isotherm_synth::{GridIndicator, GridSpec};

use crate::error::PipelineError;

/// Records per batch for grid runs.
pub const DEFAULT_GRID_BATCH_SIZE: usize = 2_000;

/// Records per batch for impact runs.
pub const DEFAULT_IMPACT_BATCH_SIZE: usize = 1_000;

fn check_non_empty<T>(items: &[T], what: &str) -> Result<(), PipelineError> {
    if items.is_empty() {
        return Err(PipelineError::Config {
            reason: format!("no {what} selected"),
        });
    }
    Ok(())
}

/// Rejects points that would produce the same record key.
///
/// Longitudes are already normalised by [`SamplePoint::new`]; `-0.0` and
/// `0.0` are treated as the same coordinate.
fn check_unique_points(points: &[SamplePoint]) -> Result<(), PipelineError> {
    let key = |v: f64| if v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() };
    let mut seen: HashMap<(u64, u64), usize> = HashMap::with_capacity(points.len());
    for (i, p) in points.iter().enumerate() {
        if let Some(first) = seen.insert((key(p.lat()), key(p.lon())), i) {
            return Err(PipelineError::Config {
                reason: format!(
                    "duplicate point ({}, {}) at positions {first} and {i}",
                    p.lat(),
                    p.lon()
                ),
            });
        }
    }
    Ok(())
}

/// Configuration for a gridded synthesis run.
#[derive(Debug, Clone)]
pub struct GridRunConfig {
    scenarios: Vec<Scenario>,
    periods: Vec<TimePeriod>,
    indicators: Vec<GridIndicator>,
    points: Vec<SamplePoint>,
    batch_size: usize,
}

impl GridRunConfig {
    /// All scenarios, future periods and indicators over `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Synth`] if the grid cannot be materialised.
    pub fn from_grid(grid: &GridSpec) -> Result<Self, PipelineError> {
        Ok(Self::from_points(grid.points()?))
    }

    /// All scenarios, future periods and indicators over explicit points.
    pub fn from_points(points: Vec<SamplePoint>) -> Self {
        Self {
            scenarios: Scenario::ALL.to_vec(),
            periods: TimePeriod::FUTURE.to_vec(),
            indicators: GridIndicator::ALL.to_vec(),
            points,
            batch_size: DEFAULT_GRID_BATCH_SIZE,
        }
    }

    pub fn with_scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    pub fn with_periods(mut self, periods: Vec<TimePeriod>) -> Self {
        self.periods = periods;
        self
    }

    pub fn with_indicators(mut self, indicators: Vec<GridIndicator>) -> Self {
        self.indicators = indicators;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn periods(&self) -> &[TimePeriod] {
        &self.periods
    }

    pub fn indicators(&self) -> &[GridIndicator] {
        &self.indicators
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of records a complete run produces.
    pub fn expected_records(&self) -> usize {
        self.points.len() * self.scenarios.len() * self.periods.len() * self.indicators.len()
    }

    /// Checks the selection before a run touches its sink.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Config`] for an empty selection, a zero
    /// batch size or two points with the same coordinates.
    pub fn validate(&self) -> Result<(), PipelineError> {
        check_non_empty(&self.scenarios, "scenarios")?;
        check_non_empty(&self.periods, "time periods")?;
        check_non_empty(&self.indicators, "grid indicators")?;
        check_non_empty(&self.points, "points")?;
        check_unique_points(&self.points)?;
        if self.batch_size == 0 {
            return Err(PipelineError::Config {
                reason: "batch size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Binds a gridded dataset to an impact indicator.
///
/// `None` for scenario or period matches any value; the most specific
/// matching binding wins, then the earliest.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterBinding {
    pub indicator: ImpactIndicator,
    pub scenario: Option<Scenario>,
    pub period: Option<TimePeriod>,
    pub source: DatasetSource,
}

impl RasterBinding {
    fn matches(&self, indicator: ImpactIndicator, scenario: Scenario, period: TimePeriod) -> bool {
        self.indicator == indicator
            && self.scenario.is_none_or(|s| s == scenario)
            && self.period.is_none_or(|p| p == period)
    }

    fn specificity(&self) -> u8 {
        u8::from(self.scenario.is_some()) + u8::from(self.period.is_some())
    }
}

/// Configuration for an impact-indicator run.
#[derive(Debug, Clone)]
pub struct ImpactRunConfig {
    scenarios: Vec<Scenario>,
    periods: Vec<TimePeriod>,
    indicators: Vec<ImpactIndicator>,
    points: Vec<SamplePoint>,
    bindings: Vec<RasterBinding>,
    batch_size: usize,
}

impl ImpactRunConfig {
    /// All scenarios, all periods (historical included) and all indicators
    /// over `points`, using the fallback model throughout.
    pub fn from_points(points: Vec<SamplePoint>) -> Self {
        Self {
            scenarios: Scenario::ALL.to_vec(),
            periods: TimePeriod::ALL.to_vec(),
            indicators: ImpactIndicator::ALL.to_vec(),
            points,
            bindings: Vec::new(),
            batch_size: DEFAULT_IMPACT_BATCH_SIZE,
        }
    }

    pub fn with_scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    pub fn with_periods(mut self, periods: Vec<TimePeriod>) -> Self {
        self.periods = periods;
        self
    }

    pub fn with_indicators(mut self, indicators: Vec<ImpactIndicator>) -> Self {
        self.indicators = indicators;
        self
    }

    pub fn with_binding(mut self, binding: RasterBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn periods(&self) -> &[TimePeriod] {
        &self.periods
    }

    pub fn indicators(&self) -> &[ImpactIndicator] {
        &self.indicators
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn bindings(&self) -> &[RasterBinding] {
        &self.bindings
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Dataset bound to this slice, if any.
    pub fn binding_for(
        &self,
        indicator: ImpactIndicator,
        scenario: Scenario,
        period: TimePeriod,
    ) -> Option<&RasterBinding> {
        self.bindings
            .iter()
            .filter(|b| b.matches(indicator, scenario, period))
            .fold(None, |best: Option<&RasterBinding>, b| match best {
                Some(current) if current.specificity() >= b.specificity() => Some(current),
                _ => Some(b),
            })
    }

    /// Checks the selection before a run touches its sink.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Config`] for an empty selection, a zero
    /// batch size or two points with the same coordinates.
    pub fn validate(&self) -> Result<(), PipelineError> {
        check_non_empty(&self.scenarios, "scenarios")?;
        check_non_empty(&self.periods, "time periods")?;
        check_non_empty(&self.indicators, "impact indicators")?;
        check_non_empty(&self.points, "points")?;
        check_unique_points(&self.points)?;
        if self.batch_size == 0 {
            return Err(PipelineError::Config {
                reason: "batch size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

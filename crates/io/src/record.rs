//! The canonical indicator record.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use isotherm_pathway::{Scenario, TimePeriod};
use isotherm_stats::round_dp;

use crate::error::IoError;

/// Percentile stored with every record.
pub const DEFAULT_PERCENTILE: u8 = 50;

/// Decimal places kept in stored values.
const VALUE_DECIMALS: u32 = 4;

/// Identity of a record within a sink.
///
/// Coordinates compare by bit pattern with `-0.0` folded into `0.0`.
#[derive(Debug, Clone)]
pub struct RecordKey {
    pub source: String,
    pub indicator_id: String,
    pub scenario: Scenario,
    pub time_period: TimePeriod,
    pub latitude: f64,
    pub longitude: f64,
}

impl RecordKey {
    fn identity(&self) -> (&str, &str, Scenario, TimePeriod, u64, u64) {
        (
            &self.source,
            &self.indicator_id,
            self.scenario,
            self.time_period,
            canonical_bits(self.latitude),
            canonical_bits(self.longitude),
        )
    }
}

fn canonical(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

fn canonical_bits(v: f64) -> u64 {
    canonical(v).to_bits()
}

impl PartialEq for RecordKey {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for RecordKey {}

impl Hash for RecordKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for RecordKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self, other);
        a.source
            .cmp(&b.source)
            .then_with(|| a.indicator_id.cmp(&b.indicator_id))
            .then_with(|| a.scenario.cmp(&b.scenario))
            .then_with(|| a.time_period.cmp(&b.time_period))
            .then_with(|| canonical(a.latitude).total_cmp(&canonical(b.latitude)))
            .then_with(|| canonical(a.longitude).total_cmp(&canonical(b.longitude)))
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{} at ({}, {})",
            self.source,
            self.indicator_id,
            self.scenario,
            self.time_period,
            self.latitude,
            self.longitude
        )
    }
}

/// One indicator value for a location, scenario and period.
///
/// The value is always finite and rounded to four decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRecord {
    key: RecordKey,
    value: f64,
    unit: String,
    model: String,
    percentile: u8,
}

impl IndicatorRecord {
    /// Builds a record, rounding `value` to four decimals.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::NonFiniteValue`] if `value` or either coordinate
    /// is NaN or infinite.
    pub fn new(
        key: RecordKey,
        value: f64,
        unit: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, IoError> {
        if !value.is_finite() || !key.latitude.is_finite() || !key.longitude.is_finite() {
            return Err(IoError::NonFiniteValue {
                indicator_id: key.indicator_id,
                latitude: key.latitude,
                longitude: key.longitude,
            });
        }
        Ok(Self {
            key,
            value: round_dp(value, VALUE_DECIMALS),
            unit: unit.into(),
            model: model.into(),
            percentile: DEFAULT_PERCENTILE,
        })
    }

    pub fn with_percentile(mut self, percentile: u8) -> Self {
        self.percentile = percentile;
        self
    }

    pub fn key(&self) -> &RecordKey {
        &self.key
    }

    pub fn source(&self) -> &str {
        &self.key.source
    }

    pub fn indicator_id(&self) -> &str {
        &self.key.indicator_id
    }

    pub fn scenario(&self) -> Scenario {
        self.key.scenario
    }

    pub fn time_period(&self) -> TimePeriod {
        self.key.time_period
    }

    pub fn latitude(&self) -> f64 {
        self.key.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.key.longitude
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn percentile(&self) -> u8 {
        self.percentile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn key(lat: f64, lon: f64) -> RecordKey {
        RecordKey {
            source: "cmip6".to_string(),
            indicator_id: "tas".to_string(),
            scenario: Scenario::Ssp245,
            time_period: TimePeriod::P2050,
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn value_is_rounded() {
        let r = IndicatorRecord::new(key(1.0, 2.0), 3.123_456_7, "°C", "CMIP6-MMM").unwrap();
        assert_eq!(r.value(), 3.1235);
        assert_eq!(r.percentile(), 50);
    }

    #[test]
    fn non_finite_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = IndicatorRecord::new(key(1.0, 2.0), bad, "m", "x").unwrap_err();
            assert!(matches!(err, IoError::NonFiniteValue { .. }));
        }
        assert!(IndicatorRecord::new(key(f64::NAN, 2.0), 1.0, "m", "x").is_err());
    }

    #[test]
    fn negative_zero_is_same_key() {
        let mut set = HashSet::new();
        set.insert(key(0.0, 10.0));
        assert!(set.contains(&key(-0.0, 10.0)));
        assert_eq!(key(0.0, 10.0).cmp(&key(-0.0, 10.0)), Ordering::Equal);
    }

    #[test]
    fn keys_differ_by_period() {
        let mut other = key(1.0, 1.0);
        other.time_period = TimePeriod::P2090;
        assert_ne!(key(1.0, 1.0), other);
        assert!(key(1.0, 1.0) < other);
    }

    #[test]
    fn display_key() {
        assert_eq!(key(40.0, -74.0).to_string(), "cmip6/tas/ssp245/2050 at (40, -74)");
    }
}

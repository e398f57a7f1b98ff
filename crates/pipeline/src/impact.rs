//! Impact-indicator run.

use std::collections::HashMap;

use isotherm_impact::{IMPACT_PERCENTILE, IMPACT_SOURCE, ImpactIndicator, synthetic_value};
use isotherm_io::{
    DatasetOutcome, DatasetSource, IndicatorRecord, RecordKey, RecordSink, acquire_dataset,
    extract_at_points,
};
use isotherm_pathway::{SamplePoint, Scenario, TimePeriod};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::batch::BatchedWriter;
use crate::cancel::CancellationToken;
use crate::config::ImpactRunConfig;
use crate::error::PipelineError;
use crate::summary::RunSummary;

/// One value for one point within a slice.
struct SliceValue {
    lat: f64,
    lon: f64,
    value: f64,
}

/// Datasets acquired during one run, keyed by where they came from.
///
/// Each source is opened or downloaded at most once; a failed acquisition
/// is remembered too, so every slice bound to it falls back without
/// retrying.
struct DatasetCache<F> {
    acquire: F,
    outcomes: HashMap<DatasetSource, DatasetOutcome>,
}

impl<F> DatasetCache<F>
where
    F: Fn(&DatasetSource) -> DatasetOutcome,
{
    fn new(acquire: F) -> Self {
        Self {
            acquire,
            outcomes: HashMap::new(),
        }
    }

    fn get(&mut self, source: &DatasetSource) -> &DatasetOutcome {
        let acquire = &self.acquire;
        self.outcomes
            .entry(source.clone())
            .or_insert_with(|| acquire(source))
    }
}

/// Values for a slice sampled from its bound dataset, or `None` when the
/// slice has to use the fallback model.
fn sample_bound_dataset<F>(
    config: &ImpactRunConfig,
    indicator: ImpactIndicator,
    scenario: Scenario,
    period: TimePeriod,
    datasets: &mut DatasetCache<F>,
) -> Option<Vec<SliceValue>>
where
    F: Fn(&DatasetSource) -> DatasetOutcome,
{
    let binding = config.binding_for(indicator, scenario, period)?;
    let raster = match datasets.get(&binding.source) {
        DatasetOutcome::Ready(raster) => raster,
        DatasetOutcome::FallbackRequired { reason } => {
            warn!(%indicator, %scenario, %period, %reason, "dataset unavailable, using fallback model");
            return None;
        }
    };
    match extract_at_points(raster, indicator.raster_variable(), config.points()) {
        Ok(samples) if !samples.is_empty() => Some(
            samples
                .into_iter()
                .map(|s| SliceValue {
                    lat: s.lat,
                    lon: s.lon,
                    value: s.value,
                })
                .collect(),
        ),
        Ok(_) => {
            warn!(%indicator, %scenario, %period, "dataset yielded no values, using fallback model");
            None
        }
        Err(e) => {
            warn!(%indicator, %scenario, %period, error = %e, "sampling failed, using fallback model");
            None
        }
    }
}

fn fallback_slice(
    points: &[SamplePoint],
    indicator: ImpactIndicator,
    scenario: Scenario,
    period: TimePeriod,
) -> Vec<SliceValue> {
    points
        .par_iter()
        .map(|p| SliceValue {
            lat: p.lat(),
            lon: p.lon(),
            value: synthetic_value(indicator, p.lat(), p.lon(), scenario, period),
        })
        .collect()
}

/// Produces every configured impact indicator and writes the records.
///
/// Slices with a bound dataset are sampled from it; any slice whose
/// dataset cannot be acquired or sampled falls back to the zone model.
///
/// # Errors
///
/// Returns [`PipelineError::Config`] before touching the sink if the
/// configuration is invalid, and [`PipelineError::Sink`] if a write fails.
/// On failure the sink is still finalised, so batches written before it
/// remain readable.
pub fn run_impact<S>(
    config: &ImpactRunConfig,
    sink: &mut S,
    cancel: &CancellationToken,
) -> Result<RunSummary, PipelineError>
where
    S: RecordSink + ?Sized,
{
    run_impact_with(config, sink, cancel, acquire_dataset)
}

/// [`run_impact`] with a custom dataset loader.
///
/// `acquire` is called at most once per distinct [`DatasetSource`] in a run.
pub fn run_impact_with<S, F>(
    config: &ImpactRunConfig,
    sink: &mut S,
    cancel: &CancellationToken,
    acquire: F,
) -> Result<RunSummary, PipelineError>
where
    S: RecordSink + ?Sized,
    F: Fn(&DatasetSource) -> DatasetOutcome,
{
    config.validate()?;
    info!(
        points = config.points().len(),
        indicators = config.indicators().len(),
        bindings = config.bindings().len(),
        "starting impact run"
    );

    sink.replace_all_for_source(IMPACT_SOURCE)?;
    let mut writer =
        BatchedWriter::new(sink, IMPACT_SOURCE, config.batch_size(), cancel.clone())?;

    let mut datasets = DatasetCache::new(acquire);
    if let Err(e) = emit_slices(config, &mut writer, &mut datasets) {
        writer.abandon();
        return Err(e);
    }

    let summary = writer.finish()?;
    summary.log();
    Ok(summary)
}

/// Produces slice by slice and pushes every record into `writer`.
fn emit_slices<S, F>(
    config: &ImpactRunConfig,
    writer: &mut BatchedWriter<'_, S>,
    datasets: &mut DatasetCache<F>,
) -> Result<(), PipelineError>
where
    S: RecordSink + ?Sized,
    F: Fn(&DatasetSource) -> DatasetOutcome,
{
    for &indicator in config.indicators() {
        info!(indicator = indicator.name(), "processing indicator");
        let model = indicator.model_label();

        for &scenario in config.scenarios() {
            for &period in config.periods() {
                let sampled = sample_bound_dataset(config, indicator, scenario, period, datasets);
                let values = match sampled {
                    Some(values) => {
                        writer.summary_mut().raster_slices += 1;
                        values
                    }
                    None => {
                        writer.summary_mut().fallback_slices += 1;
                        fallback_slice(config.points(), indicator, scenario, period)
                    }
                };
                debug!(%indicator, %scenario, %period, values = values.len(), "slice ready");

                for v in values {
                    let key = RecordKey {
                        source: IMPACT_SOURCE.to_string(),
                        indicator_id: indicator.id().to_string(),
                        scenario,
                        time_period: period,
                        latitude: v.lat,
                        longitude: v.lon,
                    };
                    let record =
                        IndicatorRecord::new(key, v.value, indicator.unit(), model.as_str())
                            .map_err(PipelineError::Record)?
                            .with_percentile(IMPACT_PERCENTILE);
                    writer.push(record)?;
                    if writer.cancelled() {
                        return Ok(());
                    }
                }
            }
        }
    }
    Ok(())
}

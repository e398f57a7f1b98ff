//! Gridded synthesis run.

use isotherm_io::{IndicatorRecord, RecordKey, RecordSink};
use isotherm_pathway::LandClassifier;
use isotherm_synth::{GRID_MODEL, GRID_PERCENTILE, GRID_SOURCE, PointIndicators, SynthesisEngine};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::batch::BatchedWriter;
use crate::cancel::CancellationToken;
use crate::config::GridRunConfig;
use crate::error::PipelineError;
use crate::summary::RunSummary;

/// Synthesises every configured grid indicator and writes the records.
///
/// The `cmip6` source is cleared once before the first batch. Each
/// scenario × period slice is computed in parallel over points, then
/// emitted point by point in configuration order, so output order does not
/// depend on thread scheduling.
///
/// # Errors
///
/// Returns [`PipelineError::Config`] before touching the sink if the
/// configuration is invalid, and [`PipelineError::Sink`] if a write fails.
/// On failure the sink is still finalised, so batches written before it
/// remain readable.
pub fn run_grid<L, S>(
    engine: &SynthesisEngine<L>,
    config: &GridRunConfig,
    sink: &mut S,
    cancel: &CancellationToken,
) -> Result<RunSummary, PipelineError>
where
    L: LandClassifier,
    S: RecordSink + ?Sized,
{
    config.validate()?;
    info!(
        points = config.points().len(),
        scenarios = config.scenarios().len(),
        periods = config.periods().len(),
        indicators = config.indicators().len(),
        expected = config.expected_records(),
        "starting grid run"
    );

    sink.replace_all_for_source(GRID_SOURCE)?;
    let mut writer = BatchedWriter::new(sink, GRID_SOURCE, config.batch_size(), cancel.clone())?;

    if let Err(e) = emit_slices(engine, config, &mut writer) {
        writer.abandon();
        return Err(e);
    }

    let summary = writer.finish()?;
    summary.log();
    Ok(summary)
}

/// Synthesises slice by slice and pushes every record into `writer`.
fn emit_slices<L, S>(
    engine: &SynthesisEngine<L>,
    config: &GridRunConfig,
    writer: &mut BatchedWriter<'_, S>,
) -> Result<(), PipelineError>
where
    L: LandClassifier,
    S: RecordSink + ?Sized,
{
    for &scenario in config.scenarios() {
        for &period in config.periods() {
            let values: Vec<PointIndicators> = config
                .points()
                .par_iter()
                .map(|p| engine.synthesize(p, scenario, period))
                .collect();
            debug!(%scenario, %period, points = values.len(), "synthesised slice");

            for (point, indicators) in config.points().iter().zip(&values) {
                for &indicator in config.indicators() {
                    let key = RecordKey {
                        source: GRID_SOURCE.to_string(),
                        indicator_id: indicator.id().to_string(),
                        scenario,
                        time_period: period,
                        latitude: point.lat(),
                        longitude: point.lon(),
                    };
                    let record = IndicatorRecord::new(
                        key,
                        indicators.value(indicator),
                        indicator.unit(),
                        GRID_MODEL,
                    )
                    .map_err(PipelineError::Record)?
                    .with_percentile(GRID_PERCENTILE);
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

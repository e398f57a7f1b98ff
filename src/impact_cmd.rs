//! Impact command: produce impact indicators for sample points.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use isotherm_pipeline::{CancellationToken, run_impact};

use crate::cli::RunArgs;
use crate::convert;
use crate::output;

/// Run the impact-indicator pipeline.
pub fn run(args: &RunArgs) -> Result<()> {
    let _cmd = info_span!("impact").entered();

    let config = output::load_config(args)?;
    let run_cfg = convert::build_impact_config(&config.impact, &config.output)?;
    let mut sink = output::open_sink(args.sink, &config)?;

    let summary = run_impact(&run_cfg, sink.as_mut(), &CancellationToken::new())
        .context("impact run failed")?;

    info!(
        records = summary.records_written,
        raster_slices = summary.raster_slices,
        fallback_slices = summary.fallback_slices,
        "impact command finished"
    );
    Ok(())
}

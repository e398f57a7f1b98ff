//! Grid command: synthesise gridded climate indicators.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use isotherm_pipeline::{CancellationToken, run_grid};
use isotherm_synth::SynthesisEngine;

use crate::cli::RunArgs;
use crate::convert;
use crate::output;

/// Run the gridded synthesis.
pub fn run(args: &RunArgs) -> Result<()> {
    let _cmd = info_span!("grid").entered();

    let config = output::load_config(args)?;
    let run_cfg = convert::build_grid_config(&config.grid, &config.output)?;
    let mut sink = output::open_sink(args.sink, &config)?;

    let engine = SynthesisEngine::new();
    let summary = run_grid(&engine, &run_cfg, sink.as_mut(), &CancellationToken::new())
        .context("grid run failed")?;

    info!(
        records = summary.records_written,
        expected = run_cfg.expected_records(),
        "grid command finished"
    );
    Ok(())
}

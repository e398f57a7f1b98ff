//! Config resolution and sink construction shared by the run commands.

use anyhow::{Context, Result};
use tracing::info;

use isotherm_io::{MemorySink, ParquetSink, RecordSink};

use crate::cli::{RunArgs, SinkKind};
use crate::config::IsothermConfig;
use crate::convert;

/// Loads the configuration named on the command line and applies overrides.
pub fn load_config(args: &RunArgs) -> Result<IsothermConfig> {
    let mut config = match &args.config {
        Some(path) => IsothermConfig::load(path)?,
        None => IsothermConfig::default(),
    };
    if let Some(dir) = &args.output_dir {
        config.output.dir = dir.clone();
    }
    Ok(config)
}

/// Opens the sink selected on the command line.
pub fn open_sink(kind: SinkKind, config: &IsothermConfig) -> Result<Box<dyn RecordSink>> {
    match kind {
        SinkKind::Parquet => {
            let writer_cfg = convert::build_writer_config(&config.output)?;
            let dir = &config.output.dir;
            let sink = ParquetSink::new(dir, writer_cfg).with_context(|| {
                format!("failed to prepare output directory: {}", dir.display())
            })?;
            info!(dir = %dir.display(), "writing Parquet output");
            Ok(Box::new(sink))
        }
        SinkKind::Memory => {
            info!("records are kept in memory and discarded");
            Ok(Box::new(MemorySink::new()))
        }
    }
}

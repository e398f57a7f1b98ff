use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Isotherm synthetic climate-indicator generator.
#[derive(Parser)]
#[command(
    name = "isotherm",
    version,
    about = "Deterministic synthetic climate-indicator generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Synthesise gridded climate indicators (`cmip6` source).
    Grid(RunArgs),
    /// Produce impact indicators for sample points (`isimip` source).
    Impact(RunArgs),
    /// Run `grid` then `impact`.
    All(RunArgs),
}

/// Where records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SinkKind {
    /// One Parquet file per source under the output directory.
    Parquet,
    /// Keep records in memory and discard them; useful as a dry run.
    Memory,
}

/// Arguments shared by all run subcommands.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Record sink.
    #[arg(long, value_enum, default_value_t = SinkKind::Parquet)]
    pub sink: SinkKind,
}

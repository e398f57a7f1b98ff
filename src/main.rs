mod cli;
mod config;
mod convert;
mod grid_cmd;
mod impact_cmd;
mod logging;
mod output;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Grid(args) => grid_cmd::run(&args),
        Command::Impact(args) => impact_cmd::run(&args),
        Command::All(args) => {
            grid_cmd::run(&args)?;
            impact_cmd::run(&args)
        }
    }
}

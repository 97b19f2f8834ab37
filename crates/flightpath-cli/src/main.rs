#![forbid(unsafe_code)]

//! # Flightpath CLI
//!
//! ```bash
//! flightpath schematic 12/5/-1/3
//! flightpath overlay --tee 10,90 --basket 90,10
//! ```

use clap::Parser;
use flightpath_cli::cli::Cli;
use flightpath_cli::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    flightpath_cli::init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let output = flightpath_cli::run(&cli, &config)?;
    println!("{output}");
    Ok(())
}

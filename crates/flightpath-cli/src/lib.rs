#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Flightpath CLI
//!
//! Command-line front end for the [`flightpath`] geometry library.
//!
//! ```bash
//! flightpath schematic 12/5/-1/3 --format svg > driver.svg
//! flightpath overlay --tee 10,90 --basket 90,10 --flight 9/5/-1/2
//! ```
//!
//! Settings resolve as defaults, then the `--config` TOML file, then flags.
//! Logging goes to stderr; `-v` raises the level and `RUST_LOG` overrides it.

pub mod cli;
pub mod config;
pub mod output;

use anyhow::Context;
use flightpath::{
    FlightNumbers, compute_overlay_path, compute_schematic_paths, try_compute_overlay_path,
    try_compute_schematic_paths,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, OverlayArgs, SchematicArgs};
use config::Config;
use output::{AnglePath, OutputFormat, OverlayDocument};

/// Installs the stderr `tracing` subscriber.
///
/// Verbosity 0 = warn, 1 = info, 2 = debug, 3+ = trace. `RUST_LOG` wins when set.
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs the parsed command and returns the text to print.
pub fn run(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    let format = cli.format.unwrap_or(config.format);
    let strict = cli.strict || config.strict;

    match &cli.command {
        Command::Schematic(args) => run_schematic(args, config, format, strict),
        Command::Overlay(args) => run_overlay(args, config, format, strict),
    }
}

fn run_schematic(
    args: &SchematicArgs,
    config: &Config,
    format: OutputFormat,
    strict: bool,
) -> anyhow::Result<String> {
    let throw = args.throw.unwrap_or(config.throw_type);
    let canvas = args.canvas(&config.canvas);
    info!(flight = %args.flight, %throw, strict, "computing schematic paths");

    let paths = if strict {
        try_compute_schematic_paths(&args.flight, throw, Some(&canvas))
            .context("cannot draw schematic paths")?
    } else {
        compute_schematic_paths(&args.flight, throw, Some(&canvas))
    };
    let selected = output::select_paths(&paths, args.angle);

    Ok(match format {
        OutputFormat::Path => output::render_paths(&selected),
        OutputFormat::Json => serde_json::to_string_pretty(&output::schematic_document(
            &args.flight,
            throw,
            &canvas,
            selected,
        ))?,
        OutputFormat::Svg => {
            output::render_svg(canvas.width, canvas.height, canvas.start(), &selected)
        }
    })
}

fn run_overlay(
    args: &OverlayArgs,
    config: &Config,
    format: OutputFormat,
    strict: bool,
) -> anyhow::Result<String> {
    let angle = args.angle.unwrap_or(config.overlay.release_angle);
    let hand = args.hand.unwrap_or(config.overlay.hand);
    let width = args.width.unwrap_or(config.overlay.width);
    let height = args.height.unwrap_or(config.overlay.height);
    info!(tee = %args.tee, basket = %args.basket, %angle, %hand, strict, "computing overlay path");

    let numbers = args.flight.as_ref();
    let path = if strict {
        try_compute_overlay_path(numbers, angle, hand, args.tee, args.basket, width, height)
            .context("cannot draw overlay path")?
    } else {
        compute_overlay_path(numbers, angle, hand, args.tee, args.basket, width, height)
    };

    Ok(match format {
        OutputFormat::Path => path.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&OverlayDocument {
            flight_numbers: numbers
                .copied()
                .unwrap_or(FlightNumbers::DEFAULT_OVERLAY)
                .to_string(),
            release_angle: angle,
            hand,
            tee: path.tee(),
            basket: path.basket(),
            canvas_width: width,
            canvas_height: height,
            path,
        })?,
        OutputFormat::Svg => output::render_svg(
            width,
            height,
            path.tee(),
            &[AnglePath {
                release_angle: angle,
                path: *path.path(),
            }],
        ),
    })
}

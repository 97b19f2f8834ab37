//! Command-line interface for `flightpath`.
//!
//! # Examples
//!
//! ```bash
//! # Compare hyzer, flat, and anhyzer lines for a driver
//! flightpath schematic 12/5/-1/3
//!
//! # Forehand, one angle, as SVG
//! flightpath schematic 12/5/-1/3 --throw right-forehand --angle hyzer --format svg
//!
//! # Overlay a throw on a 1080x1920 photo
//! flightpath overlay --tee 12,88 --basket 71,9 --width 1080 --height 1920 --flight 9/5/-1/2
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use flightpath::{
    CanvasConfig, FlightNumbers, NormalizedPoint, ReleaseAngle, ThrowType, ThrowingHand,
};

use crate::output::OutputFormat;

/// Draw disc golf flight paths from flight numbers.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "flightpath",
    author,
    version,
    about = "Draw disc golf flight paths from flight numbers",
    long_about = "Turns speed/glide/turn/fade flight numbers into cubic Bézier \
                  path descriptions, either as a hyzer/flat/anhyzer comparison \
                  or as a single tee-to-basket curve over a photo."
)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, short = 'c', env = "FLIGHTPATH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, env = "FLIGHTPATH_FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    /// Reject non-finite numbers and coincident points instead of drawing NaN
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Draw hyzer, flat, and anhyzer curves on the schematic canvas
    Schematic(SchematicArgs),

    /// Draw one tee-to-basket curve over a photo
    Overlay(OverlayArgs),
}

/// Arguments for schematic mode.
#[derive(Args, Debug, Clone)]
pub struct SchematicArgs {
    /// Flight numbers as speed/glide/turn/fade, e.g. 9/5/-1/2
    #[arg(allow_hyphen_values = true)]
    pub flight: FlightNumbers,

    /// Throw type: right-backhand, right-forehand, left-backhand, left-forehand
    #[arg(long, short = 't', env = "FLIGHTPATH_THROW")]
    pub throw: Option<ThrowType>,

    /// Only output the curve for this release angle
    #[arg(long, short = 'a')]
    pub angle: Option<ReleaseAngle>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in pixels
    #[arg(long)]
    pub height: Option<f64>,

    /// X coordinate of the launch point
    #[arg(long)]
    pub start_x: Option<f64>,

    /// Y coordinate of the launch point
    #[arg(long)]
    pub start_y: Option<f64>,

    /// Distance in feet covered by the full canvas height
    #[arg(long)]
    pub max_distance: Option<f64>,
}

impl SchematicArgs {
    /// Applies the canvas flags on top of `base`.
    pub fn canvas(&self, base: &CanvasConfig) -> CanvasConfig {
        CanvasConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            start_x: self.start_x.unwrap_or(base.start_x),
            start_y: self.start_y.unwrap_or(base.start_y),
            max_distance: self.max_distance.unwrap_or(base.max_distance),
        }
    }
}

/// Arguments for overlay mode.
#[derive(Args, Debug, Clone)]
pub struct OverlayArgs {
    /// Tee position as x,y in percent of the image
    #[arg(long, allow_hyphen_values = true)]
    pub tee: NormalizedPoint,

    /// Basket position as x,y in percent of the image
    #[arg(long, allow_hyphen_values = true)]
    pub basket: NormalizedPoint,

    /// Flight numbers as speed/glide/turn/fade (defaults to 9/5/0/2)
    #[arg(long, allow_hyphen_values = true)]
    pub flight: Option<FlightNumbers>,

    /// Release angle: hyzer, flat, anhyzer
    #[arg(long, short = 'a')]
    pub angle: Option<ReleaseAngle>,

    /// Throwing hand: right, left
    #[arg(long, env = "FLIGHTPATH_HAND")]
    pub hand: Option<ThrowingHand>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<f64>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<f64>,
}

//! Output rendering: raw path strings, JSON documents, and standalone SVG.

use std::fmt::Write;

use clap::ValueEnum;
use flightpath::{
    CanvasConfig, CubicPath, FlightNumbers, OverlayPath, Point, ReleaseAngle, SchematicFlightPaths,
    ThrowType, ThrowingHand,
};
use serde::{Deserialize, Serialize};

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Bare path description strings.
    #[default]
    Path,
    /// A JSON document with inputs and paths.
    Json,
    /// A standalone SVG document.
    Svg,
}

/// A path tagged with the release angle it was drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnglePath {
    /// Release angle.
    pub release_angle: ReleaseAngle,
    /// The curve.
    pub path: CubicPath,
}

/// JSON document for schematic mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchematicDocument {
    /// Flight numbers in slash notation.
    pub flight_numbers: String,
    /// Throw type used for mirroring.
    pub throw_type: ThrowType,
    /// Canvas geometry.
    pub canvas: CanvasConfig,
    /// Curves, in hyzer, flat, anhyzer order.
    pub paths: Vec<AnglePath>,
}

/// JSON document for overlay mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayDocument {
    /// Flight numbers in slash notation, after applying the default disc.
    pub flight_numbers: String,
    /// Release angle.
    pub release_angle: ReleaseAngle,
    /// Throwing hand.
    pub hand: ThrowingHand,
    /// Tee in pixels.
    pub tee: Point,
    /// Basket in pixels.
    pub basket: Point,
    /// Image width in pixels.
    pub canvas_width: f64,
    /// Image height in pixels.
    pub canvas_height: f64,
    /// The curve.
    pub path: OverlayPath,
}

/// Picks the requested curves, or all three.
pub fn select_paths(paths: &SchematicFlightPaths, angle: Option<ReleaseAngle>) -> Vec<AnglePath> {
    paths
        .iter()
        .filter(|(a, _)| angle.is_none_or(|wanted| wanted == *a))
        .map(|(release_angle, path)| AnglePath {
            release_angle,
            path: *path,
        })
        .collect()
}

/// Formats path strings, one per line. A single curve prints bare; several
/// are prefixed with their angle.
pub fn render_paths(paths: &[AnglePath]) -> String {
    match paths {
        [only] => only.path.to_string(),
        _ => paths
            .iter()
            .map(|p| format!("{}: {}", p.release_angle, p.path))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Builds the schematic JSON document.
pub fn schematic_document(
    numbers: &FlightNumbers,
    throw_type: ThrowType,
    canvas: &CanvasConfig,
    paths: Vec<AnglePath>,
) -> SchematicDocument {
    SchematicDocument {
        flight_numbers: numbers.to_string(),
        throw_type,
        canvas: *canvas,
        paths,
    }
}

/// Stroke color per release angle.
const fn stroke_color(angle: ReleaseAngle) -> &'static str {
    match angle {
        ReleaseAngle::Hyzer => "#e4572e",
        ReleaseAngle::Flat => "#29335c",
        ReleaseAngle::Anhyzer => "#17bebb",
    }
}

const TEE_COLOR: &str = "#f3a712";

/// Renders a standalone SVG document with one `<path>` per curve and a tee marker.
pub fn render_svg(width: f64, height: f64, tee: Point, paths: &[AnglePath]) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    for p in paths {
        let _ = writeln!(
            svg,
            r#"  <path data-release-angle="{}" d="{}" fill="none" stroke="{}" stroke-width="3" stroke-linecap="round"/>"#,
            p.release_angle,
            p.path,
            stroke_color(p.release_angle),
        );
    }
    let _ = writeln!(
        svg,
        r#"  <circle cx="{}" cy="{}" r="5" fill="{TEE_COLOR}"/>"#,
        tee.x, tee.y
    );
    svg.push_str("</svg>");
    svg
}

//! Schematic mode: three comparison curves on a fixed vertical canvas.
//!
//! The disc leaves from an anchor near the bottom of the canvas and flies
//! upward. Flight length comes from speed and glide, clamped so the curve
//! never leaves the canvas; sideways movement comes from turn and fade.
//! One curve is produced per [`ReleaseAngle`].
//!
//! # Example
//!
//! ```rust
//! use flightpath::{compute_schematic_paths, FlightNumbers, ReleaseAngle, ThrowType};
//!
//! let numbers = FlightNumbers::new(9.0, 5.0, -1.0, 2.0);
//! let paths = compute_schematic_paths(&numbers, ThrowType::RightBackhand, None);
//!
//! for (angle, path) in paths.iter() {
//!     assert!(path.to_string().starts_with("M 100 280 C"));
//!     println!("{angle}: {path}");
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{FlightPathError, Result};
use crate::flight::{EffectWeights, FlightNumbers, ReleaseAngle, ThrowType, lateral_effects};
use crate::geometry::Point;
use crate::path::CubicPath;

/// Pixels kept free above the anchor's flight so the curve never touches the
/// top edge.
pub const HEADROOM: f64 = 20.0;

/// Curve length, in pixels, at which `effect_scale` is 1.
pub const REFERENCE_LENGTH: f64 = 250.0;

/// Geometry of the schematic canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// X coordinate of the launch anchor.
    pub start_x: f64,
    /// Y coordinate of the launch anchor. Must exceed [`HEADROOM`].
    pub start_y: f64,
    /// Distance in feet represented by the full drawable height.
    pub max_distance: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 300.0,
            start_x: 100.0,
            start_y: 280.0,
            max_distance: 400.0,
        }
    }
}

impl CanvasConfig {
    /// The launch anchor.
    #[inline]
    pub const fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    /// Vertical pixels per foot of flight.
    #[inline]
    pub fn pixels_per_foot(&self) -> f64 {
        (self.start_y - HEADROOM) / self.max_distance
    }

    /// Checks that the canvas can hold a curve.
    ///
    /// # Errors
    ///
    /// Returns [`FlightPathError::InvalidCanvas`] if any field is non-finite,
    /// `start_y <= 20`, or `max_distance <= 0`.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("start_x", self.start_x),
            ("start_y", self.start_y),
            ("max_distance", self.max_distance),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FlightPathError::InvalidCanvas(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if self.start_y <= HEADROOM {
            return Err(FlightPathError::InvalidCanvas(format!(
                "start_y must exceed {HEADROOM}, got {}",
                self.start_y
            )));
        }
        if self.max_distance <= 0.0 {
            return Err(FlightPathError::InvalidCanvas(format!(
                "max_distance must be positive, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }
}

/// Estimated throw distance in feet, capped at `max_distance`.
///
/// `30 + speed * 28` plus a glide bonus of `glide * 5`.
pub fn estimated_distance(numbers: &FlightNumbers, max_distance: f64) -> f64 {
    let base_distance = 30.0 + numbers.speed * 28.0;
    let glide_bonus = numbers.glide * 5.0;
    let distance = base_distance + glide_bonus;
    // f64::min would swallow a NaN distance
    if distance > max_distance {
        max_distance
    } else {
        distance
    }
}

/// The three schematic curves, one per release angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchematicFlightPaths {
    /// Hyzer release.
    pub hyzer: CubicPath,
    /// Flat release.
    pub flat: CubicPath,
    /// Anhyzer release.
    pub anhyzer: CubicPath,
}

impl SchematicFlightPaths {
    /// Returns the curve for `angle`.
    pub const fn get(&self, angle: ReleaseAngle) -> &CubicPath {
        match angle {
            ReleaseAngle::Hyzer => &self.hyzer,
            ReleaseAngle::Flat => &self.flat,
            ReleaseAngle::Anhyzer => &self.anhyzer,
        }
    }

    /// Iterates `(angle, path)` in hyzer, flat, anhyzer order.
    pub fn iter(&self) -> impl Iterator<Item = (ReleaseAngle, &CubicPath)> {
        ReleaseAngle::ALL
            .into_iter()
            .map(move |angle| (angle, self.get(angle)))
    }

    /// The three path description strings in hyzer, flat, anhyzer order.
    pub fn to_strings(&self) -> [String; 3] {
        [
            self.hyzer.to_string(),
            self.flat.to_string(),
            self.anhyzer.to_string(),
        ]
    }
}

fn schematic_path(
    numbers: &FlightNumbers,
    angle: ReleaseAngle,
    mirror: bool,
    canvas: &CanvasConfig,
) -> CubicPath {
    let flight_length = estimated_distance(numbers, canvas.max_distance) * canvas.pixels_per_foot();
    let effect_scale = flight_length / REFERENCE_LENGTH;

    let effects = lateral_effects(numbers, angle, effect_scale, mirror, EffectWeights::SCHEMATIC);
    let arc_height = numbers.glide * 6.0 * effect_scale;

    trace!(
        %angle,
        flight_length,
        effect_scale,
        turn_effect = effects.turn,
        fade_effect = effects.fade,
        arc_height,
        "schematic curve parameters"
    );

    let start = canvas.start();
    let end = Point::new(start.x - effects.fade, start.y - flight_length);
    let control1 = Point::new(start.x + effects.turn, start.y - flight_length * 0.4);
    let control2 = Point::new(
        start.x + effects.turn * 0.5 - effects.fade * 0.3,
        end.y + arc_height,
    );

    CubicPath::new(start, control1, control2, end)
}

/// Computes the hyzer, flat, and anhyzer curves for a disc.
///
/// Uses [`CanvasConfig::default`] when `canvas` is `None`. Input is not
/// validated: `NaN` or infinite numbers flow through into the coordinates.
/// See [`try_compute_schematic_paths`] for the checked variant.
pub fn compute_schematic_paths(
    numbers: &FlightNumbers,
    throw_type: ThrowType,
    canvas: Option<&CanvasConfig>,
) -> SchematicFlightPaths {
    let default_canvas = CanvasConfig::default();
    let canvas = canvas.unwrap_or(&default_canvas);
    let mirror = throw_type.is_mirrored();

    if !numbers.is_finite() {
        warn!(%numbers, "non-finite flight numbers, schematic paths will contain NaN");
    }

    SchematicFlightPaths {
        hyzer: schematic_path(numbers, ReleaseAngle::Hyzer, mirror, canvas),
        flat: schematic_path(numbers, ReleaseAngle::Flat, mirror, canvas),
        anhyzer: schematic_path(numbers, ReleaseAngle::Anhyzer, mirror, canvas),
    }
}

/// Like [`compute_schematic_paths`], but rejects input that would produce a
/// non-finite or off-canvas curve.
///
/// # Errors
///
/// - [`FlightPathError::NonFiniteFlightNumbers`] if any flight number is `NaN` or infinite.
/// - [`FlightPathError::InvalidCanvas`] if [`CanvasConfig::validate`] fails.
/// - [`FlightPathError::InvalidInput`] if finite but extreme numbers still
///   push a curve coordinate out of `f64` range.
pub fn try_compute_schematic_paths(
    numbers: &FlightNumbers,
    throw_type: ThrowType,
    canvas: Option<&CanvasConfig>,
) -> Result<SchematicFlightPaths> {
    if !numbers.is_finite() {
        return Err(FlightPathError::NonFiniteFlightNumbers(*numbers));
    }
    if let Some(canvas) = canvas {
        canvas.validate()?;
    }
    let paths = compute_schematic_paths(numbers, throw_type, canvas);
    if let Some((angle, path)) = paths.iter().find(|(_, path)| !path.is_finite()) {
        return Err(FlightPathError::InvalidInput(format!(
            "{angle} path for {numbers} is not finite: {path}"
        )));
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_default_canvas() {
        let c = CanvasConfig::default();
        assert_eq!(c.start(), Point::new(100.0, 280.0));
        assert!(approx_eq(c.pixels_per_foot(), 0.65));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_canvas_validation() {
        let low = CanvasConfig {
            start_y: 20.0,
            ..CanvasConfig::default()
        };
        assert!(matches!(low.validate(), Err(FlightPathError::InvalidCanvas(_))));

        let zero = CanvasConfig {
            max_distance: 0.0,
            ..CanvasConfig::default()
        };
        assert!(zero.validate().unwrap_err().to_string().contains("max_distance"));

        let nan = CanvasConfig {
            width: f64::NAN,
            ..CanvasConfig::default()
        };
        assert!(nan.validate().unwrap_err().to_string().contains("width"));
    }

    #[test]
    fn test_estimated_distance() {
        let n = FlightNumbers::new(9.0, 5.0, -1.0, 2.0);
        // 30 + 252 + 25
        assert!(approx_eq(estimated_distance(&n, 400.0), 307.0));
        assert!(approx_eq(estimated_distance(&n, 300.0), 300.0));
        assert!(estimated_distance(&FlightNumbers::new(f64::NAN, 5.0, 0.0, 0.0), 400.0).is_nan());
    }

    #[test]
    fn test_flat_path_coordinates() {
        // speed 5 → 30 + 140 + 25 = 195 ft → 126.75 px, effect scale 0.507
        let n = FlightNumbers::new(5.0, 5.0, -1.0, 1.0);
        let paths = compute_schematic_paths(&n, ThrowType::RightBackhand, None);
        let p = paths.flat;

        let length = 195.0 * 0.65;
        let scale = length / 250.0;
        let turn = -10.0 * scale;
        let fade = 15.0 * scale;

        assert_eq!(p.start, Point::new(100.0, 280.0));
        assert!(approx_eq(p.end.x, 100.0 - fade));
        assert!(approx_eq(p.end.y, 280.0 - length));
        assert!(approx_eq(p.control1.x, 100.0 + turn));
        assert!(approx_eq(p.control1.y, 280.0 - length * 0.4));
        assert!(approx_eq(p.control2.x, 100.0 + turn * 0.5 - fade * 0.3));
        assert!(approx_eq(p.control2.y, 280.0 - length + 5.0 * 6.0 * scale));
    }

    #[test]
    fn test_paths_distinct_and_share_start() {
        let n = FlightNumbers::new(7.0, 5.0, -1.0, 2.0);
        let paths = compute_schematic_paths(&n, ThrowType::LeftForehand, None);
        let [h, f, a] = paths.to_strings();

        assert_ne!(h, f);
        assert_ne!(f, a);
        assert_ne!(h, a);
        for s in [&h, &f, &a] {
            assert!(s.starts_with("M 100 280 C "));
            assert_eq!(s.matches('C').count(), 1);
        }
    }

    #[test]
    fn test_get_and_iter_order() {
        let n = FlightNumbers::new(7.0, 5.0, -1.0, 2.0);
        let paths = compute_schematic_paths(&n, ThrowType::RightBackhand, None);
        let angles: Vec<ReleaseAngle> = paths.iter().map(|(a, _)| a).collect();

        assert_eq!(angles, ReleaseAngle::ALL.to_vec());
        assert_eq!(paths.get(ReleaseAngle::Anhyzer), &paths.anhyzer);
    }

    #[test]
    fn test_custom_canvas() {
        let canvas = CanvasConfig {
            width: 400.0,
            height: 600.0,
            start_x: 200.0,
            start_y: 520.0,
            max_distance: 500.0,
        };
        let n = FlightNumbers::new(14.0, 5.0, -1.0, 3.0);
        let paths = compute_schematic_paths(&n, ThrowType::RightBackhand, Some(&canvas));

        // 30 + 392 + 25 = 447 ft at 1 px/ft
        assert_eq!(paths.flat.start, Point::new(200.0, 520.0));
        assert!(approx_eq(paths.flat.end.y, 520.0 - 447.0));
    }

    #[test]
    fn test_try_compute() {
        let n = FlightNumbers::new(7.0, 5.0, -1.0, 2.0);
        let checked = try_compute_schematic_paths(&n, ThrowType::RightBackhand, None).unwrap();
        assert_eq!(checked, compute_schematic_paths(&n, ThrowType::RightBackhand, None));

        let bad = FlightNumbers::new(7.0, f64::INFINITY, -1.0, 2.0);
        assert!(matches!(
            try_compute_schematic_paths(&bad, ThrowType::RightBackhand, None),
            Err(FlightPathError::NonFiniteFlightNumbers(_))
        ));

        let canvas = CanvasConfig {
            start_y: 10.0,
            ..CanvasConfig::default()
        };
        assert!(try_compute_schematic_paths(&n, ThrowType::RightBackhand, Some(&canvas)).is_err());
    }

    #[test]
    fn test_nan_propagates_without_panic() {
        let n = FlightNumbers::new(9.0, 5.0, f64::NAN, 2.0);
        let paths = compute_schematic_paths(&n, ThrowType::RightBackhand, None);
        assert!(paths.flat.to_string().contains("NaN"));
        assert!(paths.flat.end.is_finite());
    }
}

//! Single-segment cubic Bézier paths.
//!
//! A [`CubicPath`] renders as a vector path description with one moveto and
//! one cubic curve command:
//!
//! ```text
//! M x y C c1x c1y, c2x c2y, ex ey
//! ```
//!
//! Coordinates use Rust's shortest round-trip `f64` formatting, so integral
//! values print without a fractional part and `NaN` prints as `NaN`.
//!
//! # Example
//!
//! ```rust
//! use flightpath::{CubicPath, Point};
//!
//! let path = CubicPath::new(
//!     Point::new(100.0, 280.0),
//!     Point::new(90.0, 180.0),
//!     Point::new(95.0, 60.0),
//!     Point::new(110.0, 40.0),
//! );
//! assert_eq!(path.to_string(), "M 100 280 C 90 180, 95 60, 110 40");
//!
//! let parsed: CubicPath = "M 100 280 C 90 180, 95 60, 110 40".parse().unwrap();
//! assert_eq!(parsed, path);
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FlightPathError, Result};
use crate::geometry::Point;

/// A cubic Bézier curve from `start` to `end`.
///
/// Serializes as its path description string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CubicPath {
    /// Moveto point.
    pub start: Point,
    /// First control point.
    pub control1: Point,
    /// Second control point.
    pub control2: Point,
    /// Terminal point.
    pub end: Point,
}

impl CubicPath {
    /// Creates a new path from its four defining points.
    #[inline]
    pub const fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// Renders the path description. Same as `to_string()`.
    pub fn to_svg_path(&self) -> String {
        self.to_string()
    }

    /// Evaluates the curve at `t`, clamped to `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        let mt = 1.0 - t;

        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;

        Point::new(
            a * self.start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            a * self.start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        )
    }

    /// Returns `segments + 1` points evenly spaced in `t`, from `start` to `end`.
    ///
    /// Useful for animating a marker along the flight.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        if segments == 0 {
            return vec![self.start];
        }
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }

    /// Returns `true` if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite()
            && self.control1.is_finite()
            && self.control2.is_finite()
            && self.end.is_finite()
    }
}

impl fmt::Display for CubicPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y,
        )
    }
}

fn parse_coords(part: &str, expected: usize) -> Result<Vec<f64>> {
    let coords = part
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|e| FlightPathError::MalformedPath(format!("{token:?}: {e}")))
        })
        .collect::<Result<Vec<f64>>>()?;

    if coords.len() != expected {
        return Err(FlightPathError::MalformedPath(format!(
            "expected {expected} coordinates, found {}",
            coords.len()
        )));
    }
    Ok(coords)
}

impl FromStr for CubicPath {
    type Err = FlightPathError;

    fn from_str(s: &str) -> Result<Self> {
        let rest = s
            .trim()
            .strip_prefix('M')
            .ok_or_else(|| FlightPathError::MalformedPath("missing moveto command".into()))?;
        let (moveto, curve) = rest
            .split_once('C')
            .ok_or_else(|| FlightPathError::MalformedPath("missing cubic curve command".into()))?;

        let m = parse_coords(moveto, 2)?;
        let c = parse_coords(curve, 6)?;

        Ok(Self::new(
            Point::new(m[0], m[1]),
            Point::new(c[0], c[1]),
            Point::new(c[2], c[3]),
            Point::new(c[4], c[5]),
        ))
    }
}

impl From<CubicPath> for String {
    fn from(path: CubicPath) -> Self {
        path.to_string()
    }
}

impl TryFrom<String> for CubicPath {
    type Error = FlightPathError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

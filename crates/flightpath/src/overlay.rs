//! Overlay mode: one curve from tee to basket over a photo.
//!
//! Tee and basket are given in percent of the image size. The curve bends
//! sideways relative to the tee→basket line: the first control point sits
//! 35% along the line, pushed out by the turn effect, and the second sits at
//! 75%, pulled back by the fade.
//!
//! # Example
//!
//! ```rust
//! use flightpath::{NormalizedPoint, OverlayRequest, ReleaseAngle, ThrowingHand};
//!
//! let path = OverlayRequest::new(
//!     NormalizedPoint::new(10.0, 90.0),
//!     NormalizedPoint::new(90.0, 10.0),
//!     300.0,
//!     300.0,
//! )
//! .release_angle(ReleaseAngle::Hyzer)
//! .hand(ThrowingHand::Left)
//! .compute();
//!
//! assert!(path.to_string().starts_with("M 30 270 C"));
//! assert!(path.to_string().ends_with(", 270 30"));
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{FlightPathError, Result};
use crate::flight::{EffectWeights, FlightNumbers, ReleaseAngle, ThrowingHand, lateral_effects};
use crate::geometry::Point;
use crate::path::CubicPath;

/// Tee→basket pixel distance at which `effect_scale` is 1.
pub const REFERENCE_DISTANCE: f64 = 200.0;

/// Fraction of the tee→basket line where the turn control point sits.
const TURN_POINT: f64 = 0.35;

/// Fraction of the tee→basket line where the fade control point sits.
const FADE_POINT: f64 = 0.75;

/// A position in percent of the canvas, `0..=100` on both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Percent of canvas width.
    pub x: f64,
    /// Percent of canvas height.
    pub y: f64,
}

impl NormalizedPoint {
    /// Creates a new normalized point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts to pixel coordinates on a `width` × `height` canvas.
    #[inline]
    pub fn to_pixels(self, width: f64, height: f64) -> Point {
        Point::new(self.x * width / 100.0, self.y * height / 100.0)
    }
}

impl fmt::Display for NormalizedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parses `"x,y"`, e.g. `"10,90"`.
impl FromStr for NormalizedPoint {
    type Err = FlightPathError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid =
            || FlightPathError::InvalidInput(format!("expected \"x,y\" in percent, got {s:?}"));

        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<f64>().map_err(|_| invalid())?;
        let y = y.trim().parse::<f64>().map_err(|_| invalid())?;
        Ok(Self::new(x, y))
    }
}

/// A single tee-to-basket curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayPath {
    path: CubicPath,
}

impl OverlayPath {
    /// The underlying curve.
    pub const fn path(&self) -> &CubicPath {
        &self.path
    }

    /// Tee position in pixels.
    pub const fn tee(&self) -> Point {
        self.path.start
    }

    /// Basket position in pixels.
    pub const fn basket(&self) -> Point {
        self.path.end
    }
}

impl fmt::Display for OverlayPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}

impl From<OverlayPath> for CubicPath {
    fn from(overlay: OverlayPath) -> Self {
        overlay.path
    }
}

/// Computes the overlay curve for one throw.
///
/// `numbers` falls back to [`FlightNumbers::DEFAULT_OVERLAY`]. Input is not
/// validated: non-finite numbers or positions flow through into the
/// coordinates, and if tee and basket land on the same pixel the control
/// points come out as `NaN`. Each of these logs a warning. See
/// [`try_compute_overlay_path`] for the checked variant.
pub fn compute_overlay_path(
    numbers: Option<&FlightNumbers>,
    angle: ReleaseAngle,
    hand: ThrowingHand,
    start: NormalizedPoint,
    end: NormalizedPoint,
    canvas_width: f64,
    canvas_height: f64,
) -> OverlayPath {
    let numbers = numbers.unwrap_or(&FlightNumbers::DEFAULT_OVERLAY);
    if !numbers.is_finite() {
        warn!(%numbers, "non-finite flight numbers, overlay path will contain NaN");
    }

    let tee = start.to_pixels(canvas_width, canvas_height);
    let basket = end.to_pixels(canvas_width, canvas_height);
    let line = basket - tee;
    let distance = line.magnitude();

    if !tee.is_finite() || !basket.is_finite() {
        warn!(
            %start,
            %end,
            canvas_width,
            canvas_height,
            "non-finite tee or basket position, overlay path will contain NaN"
        );
    } else if distance == 0.0 {
        warn!(x = tee.x, y = tee.y, "tee and basket coincide, overlay path is degenerate");
    } else if !distance.is_finite() {
        warn!(distance, "tee to basket distance is not finite, overlay path is degenerate");
    }

    let effect_scale = distance / REFERENCE_DISTANCE;
    let effects = lateral_effects(
        numbers,
        angle,
        effect_scale,
        hand.is_mirrored(),
        EffectWeights::OVERLAY,
    );
    let normal = line.perpendicular() / distance;

    trace!(
        %angle,
        %hand,
        distance,
        effect_scale,
        turn_effect = effects.turn,
        fade_effect = effects.fade,
        "overlay curve parameters"
    );

    let control1 = tee + line * TURN_POINT + normal * effects.turn;
    let control2 = tee + line * FADE_POINT + normal * (effects.turn * 0.3 - effects.fade);

    OverlayPath {
        path: CubicPath::new(tee, control1, control2, basket),
    }
}

/// Like [`compute_overlay_path`], but rejects degenerate input.
///
/// # Errors
///
/// - [`FlightPathError::NonFiniteFlightNumbers`] if given flight numbers are not finite.
/// - [`FlightPathError::InvalidCanvas`] if the canvas size is non-finite or not positive.
/// - [`FlightPathError::InvalidInput`] if a point has a non-finite coordinate.
/// - [`FlightPathError::CoincidentPoints`] if tee and basket map to the same pixel.
/// - [`FlightPathError::InvalidInput`] if the tee→basket distance or the
///   resulting curve is not finite.
pub fn try_compute_overlay_path(
    numbers: Option<&FlightNumbers>,
    angle: ReleaseAngle,
    hand: ThrowingHand,
    start: NormalizedPoint,
    end: NormalizedPoint,
    canvas_width: f64,
    canvas_height: f64,
) -> Result<OverlayPath> {
    if let Some(numbers) = numbers.filter(|n| !n.is_finite()) {
        return Err(FlightPathError::NonFiniteFlightNumbers(*numbers));
    }
    for (name, size) in [("width", canvas_width), ("height", canvas_height)] {
        if !size.is_finite() || size <= 0.0 {
            return Err(FlightPathError::InvalidCanvas(format!(
                "{name} must be positive, got {size}"
            )));
        }
    }
    for (name, point) in [("tee", start), ("basket", end)] {
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(FlightPathError::InvalidInput(format!(
                "{name} position must be finite, got {point}"
            )));
        }
    }

    let tee = start.to_pixels(canvas_width, canvas_height);
    let distance = (end.to_pixels(canvas_width, canvas_height) - tee).magnitude();
    if distance == 0.0 {
        return Err(FlightPathError::CoincidentPoints { x: tee.x, y: tee.y });
    }
    if !distance.is_finite() {
        return Err(FlightPathError::InvalidInput(format!(
            "tee to basket distance must be finite, got {distance}"
        )));
    }

    let path = compute_overlay_path(
        numbers,
        angle,
        hand,
        start,
        end,
        canvas_width,
        canvas_height,
    );
    if !path.path.is_finite() {
        return Err(FlightPathError::InvalidInput(format!(
            "overlay path is not finite: {path}"
        )));
    }
    Ok(path)
}

/// Builder for an overlay computation.
///
/// Defaults: no flight numbers (use [`FlightNumbers::DEFAULT_OVERLAY`]),
/// flat release, right hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayRequest {
    /// Flight numbers of the identified disc, if any.
    pub flight_numbers: Option<FlightNumbers>,
    /// Release angle of the throw.
    pub release_angle: ReleaseAngle,
    /// Throwing hand.
    pub hand: ThrowingHand,
    /// Tee position in percent.
    pub start: NormalizedPoint,
    /// Basket position in percent.
    pub end: NormalizedPoint,
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
}

impl OverlayRequest {
    /// Creates a request for a throw from `start` to `end`.
    pub const fn new(
        start: NormalizedPoint,
        end: NormalizedPoint,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Self {
        Self {
            flight_numbers: None,
            release_angle: ReleaseAngle::Flat,
            hand: ThrowingHand::Right,
            start,
            end,
            canvas_width,
            canvas_height,
        }
    }

    /// Sets the disc's flight numbers.
    pub fn flight_numbers(mut self, numbers: FlightNumbers) -> Self {
        self.flight_numbers = Some(numbers);
        self
    }

    /// Sets the release angle.
    pub fn release_angle(mut self, angle: ReleaseAngle) -> Self {
        self.release_angle = angle;
        self
    }

    /// Sets the throwing hand.
    pub fn hand(mut self, hand: ThrowingHand) -> Self {
        self.hand = hand;
        self
    }

    /// Runs [`compute_overlay_path`].
    pub fn compute(&self) -> OverlayPath {
        compute_overlay_path(
            self.flight_numbers.as_ref(),
            self.release_angle,
            self.hand,
            self.start,
            self.end,
            self.canvas_width,
            self.canvas_height,
        )
    }

    /// Runs [`try_compute_overlay_path`].
    ///
    /// # Errors
    ///
    /// See [`try_compute_overlay_path`].
    pub fn try_compute(&self) -> Result<OverlayPath> {
        try_compute_overlay_path(
            self.flight_numbers.as_ref(),
            self.release_angle,
            self.hand,
            self.start,
            self.end,
            self.canvas_width,
            self.canvas_height,
        )
    }
}

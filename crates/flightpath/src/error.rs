//! Error types for the validating entry points.
//!
//! The plain `compute_*` functions never fail: bad numeric input shows up as
//! `NaN` or `inf` in the generated path. The `try_compute_*` functions and the
//! `FromStr` impls report problems through [`FlightPathError`].

use thiserror::Error;

use crate::flight::FlightNumbers;

/// Errors reported by validating constructors and parsers.
///
/// | Variant | Raised by |
/// |---------|-----------|
/// | [`NonFiniteFlightNumbers`](FlightPathError::NonFiniteFlightNumbers) | `try_compute_*` |
/// | [`InvalidCanvas`](FlightPathError::InvalidCanvas) | [`CanvasConfig::validate`](crate::CanvasConfig::validate), overlay canvas checks |
/// | [`CoincidentPoints`](FlightPathError::CoincidentPoints) | [`try_compute_overlay_path`](crate::try_compute_overlay_path) |
/// | [`InvalidInput`](FlightPathError::InvalidInput) | non-finite overlay coordinates |
/// | [`InvalidFlightNumbers`](FlightPathError::InvalidFlightNumbers) | `FlightNumbers::from_str` |
/// | [`MalformedPath`](FlightPathError::MalformedPath) | `CubicPath::from_str` |
/// | [`UnknownVariant`](FlightPathError::UnknownVariant) | enum `from_str` impls |
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlightPathError {
    /// One or more flight numbers is `NaN` or infinite.
    #[error("flight numbers must be finite, got {0}")]
    NonFiniteFlightNumbers(FlightNumbers),

    /// The canvas geometry cannot hold a flight path.
    #[error("invalid canvas: {0}")]
    InvalidCanvas(String),

    /// Tee and basket map to the same pixel, so the throw has no direction.
    #[error("tee and basket coincide at ({x}, {y})")]
    CoincidentPoints {
        /// X pixel coordinate shared by both points.
        x: f64,
        /// Y pixel coordinate shared by both points.
        y: f64,
    },

    /// Generic invalid numeric input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Flight number notation could not be parsed.
    #[error("invalid flight numbers {input:?}: {reason}")]
    InvalidFlightNumbers {
        /// The text that failed to parse.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A path description string could not be parsed.
    #[error("malformed path: {0}")]
    MalformedPath(String),

    /// A name did not match any variant of an enum.
    #[error("unknown {kind} {value:?}")]
    UnknownVariant {
        /// Which enum was being parsed.
        kind: &'static str,
        /// The unrecognized text.
        value: String,
    },
}

/// Result alias for fallible flightpath operations.
pub type Result<T> = std::result::Result<T, FlightPathError>;

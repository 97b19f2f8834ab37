#![forbid(unsafe_code)]
// Allow these clippy lints for geometry code readability
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::use_self)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

//! # Flightpath
//!
//! Turns a disc golf disc's flight numbers into a drawable curve.
//!
//! A disc is described by four numbers: speed, glide, turn, and fade.
//! Flightpath maps them to a single cubic Bézier curve in one of two
//! coordinate regimes:
//!
//! - **Schematic**: a fixed vertical canvas with the disc launched from a
//!   bottom anchor, producing one curve per release angle for comparison.
//! - **Overlay**: an arbitrary tee→basket segment on a photo, producing one
//!   curve for the chosen release angle.
//!
//! Both produce path descriptions of the form `M x y C c1x c1y, c2x c2y, ex ey`
//! that any vector-graphics renderer accepts. The output is decorative and
//! informational, not a physical simulation: identical input always gives
//! byte-identical output.
//!
//! ## Schematic Example
//!
//! ```rust
//! use flightpath::{compute_schematic_paths, FlightNumbers, ThrowType};
//!
//! let numbers: FlightNumbers = "12/5/-1/3".parse().unwrap();
//! let paths = compute_schematic_paths(&numbers, ThrowType::RightBackhand, None);
//!
//! let hyzer = paths.hyzer.to_string();
//! assert!(hyzer.starts_with("M 100 280 C"));
//! ```
//!
//! ## Overlay Example
//!
//! ```rust
//! use flightpath::{compute_overlay_path, NormalizedPoint, ReleaseAngle, ThrowingHand};
//!
//! let path = compute_overlay_path(
//!     None,
//!     ReleaseAngle::Flat,
//!     ThrowingHand::Right,
//!     NormalizedPoint::new(10.0, 90.0),
//!     NormalizedPoint::new(90.0, 10.0),
//!     300.0,
//!     300.0,
//! );
//! assert!(path.to_string().starts_with("M 30 270 C"));
//! ```
//!
//! ## Mirroring
//!
//! | Throw | Schematic | Overlay |
//! |-------|-----------|---------|
//! | Right backhand | as computed | as computed (right hand) |
//! | Left forehand | as computed | mirrored (left hand) |
//! | Right forehand | mirrored | as computed (right hand) |
//! | Left backhand | mirrored | mirrored (left hand) |
//!
//! ## Bad Input
//!
//! `compute_*` never fails; `NaN` and infinities flow into the output string.
//! `try_compute_*` validates first and returns a [`FlightPathError`].

mod error;
mod flight;
mod geometry;
mod overlay;
mod path;
mod schematic;

pub use error::{FlightPathError, Result};
pub use flight::{
    EffectWeights, FlightNumbers, LateralEffects, ReleaseAngle, ThrowStyle, ThrowType,
    ThrowingHand, lateral_effects,
};
pub use geometry::{Point, Vector};
pub use overlay::{
    NormalizedPoint, OverlayPath, OverlayRequest, REFERENCE_DISTANCE, compute_overlay_path,
    try_compute_overlay_path,
};
pub use path::CubicPath;
pub use schematic::{
    CanvasConfig, HEADROOM, REFERENCE_LENGTH, SchematicFlightPaths, compute_schematic_paths,
    estimated_distance, try_compute_schematic_paths,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::flight::{FlightNumbers, ReleaseAngle, ThrowStyle, ThrowType, ThrowingHand};
    pub use crate::overlay::{NormalizedPoint, OverlayRequest, compute_overlay_path};
    pub use crate::path::CubicPath;
    pub use crate::schematic::{CanvasConfig, compute_schematic_paths};
}

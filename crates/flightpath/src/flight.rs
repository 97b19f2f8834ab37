//! Flight numbers, throw configuration, and the shared lateral-effect model.
//!
//! Both drawing modes turn `turn` and `fade` into sideways pixel offsets the
//! same way: scale by a per-mode weight and by the curve length, apply the
//! release-angle multipliers, then flip the sign for mirrored throws. That
//! step lives here in [`lateral_effects`] so the multiplier table exists once.
//!
//! # Example
//!
//! ```rust
//! use flightpath::{lateral_effects, EffectWeights, FlightNumbers, ReleaseAngle, ThrowType};
//!
//! let numbers: FlightNumbers = "12/5/-1/3".parse().unwrap();
//! let throw = ThrowType::RightForehand;
//!
//! let effects = lateral_effects(
//!     &numbers,
//!     ReleaseAngle::Hyzer,
//!     1.0,
//!     throw.is_mirrored(),
//!     EffectWeights::SCHEMATIC,
//! );
//! assert_eq!(effects.turn, 5.0);
//! ```

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FlightPathError, Result};

/// The four numbers that describe how a disc flies.
///
/// No bounds are enforced. Values outside the usual ranges (speed 1–15,
/// glide 1–7, turn −5..1, fade 0–5) are extrapolated linearly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightNumbers {
    /// How fast the disc must be thrown to fly as rated.
    pub speed: f64,
    /// How well the disc holds its altitude.
    pub glide: f64,
    /// High-speed drift in the direction of spin (negative = turns over).
    pub turn: f64,
    /// Low-speed hook against the direction of spin at the end of flight.
    pub fade: f64,
}

impl FlightNumbers {
    /// A straight, stable mid-range disc. Overlay mode falls back to this
    /// when no identification data is available.
    pub const DEFAULT_OVERLAY: Self = Self::new(9.0, 5.0, 0.0, 2.0);

    /// Creates a new set of flight numbers.
    #[inline]
    pub const fn new(speed: f64, glide: f64, turn: f64, fade: f64) -> Self {
        Self {
            speed,
            glide,
            turn,
            fade,
        }
    }

    /// Returns `true` if all four numbers are finite.
    pub fn is_finite(&self) -> bool {
        self.speed.is_finite()
            && self.glide.is_finite()
            && self.turn.is_finite()
            && self.fade.is_finite()
    }
}

impl fmt::Display for FlightNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.speed, self.glide, self.turn, self.fade)
    }
}

/// Parses the catalog notation `speed/glide/turn/fade`, e.g. `"9/5/-1/2"`.
impl FromStr for FlightNumbers {
    type Err = FlightPathError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| FlightPathError::InvalidFlightNumbers {
            input: s.to_string(),
            reason,
        };

        let fields: Vec<&str> = s.split('/').map(str::trim).collect();
        if fields.len() != 4 {
            return Err(invalid(format!("expected 4 fields, found {}", fields.len())));
        }

        let mut values = [0.0; 4];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field
                .parse::<f64>()
                .map_err(|e| invalid(format!("{field:?}: {e}")))?;
        }

        let [speed, glide, turn, fade] = values;
        Ok(Self::new(speed, glide, turn, fade))
    }
}

/// Which hand throws the disc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThrowingHand {
    /// Right-handed thrower.
    #[default]
    Right,
    /// Left-handed thrower.
    Left,
}

impl ThrowingHand {
    /// Overlay mode mirrors every left-handed throw.
    #[inline]
    pub const fn is_mirrored(self) -> bool {
        matches!(self, Self::Left)
    }

    /// Returns the kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

/// Throwing technique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThrowStyle {
    /// Backhand throw.
    #[default]
    Backhand,
    /// Forehand (sidearm) throw.
    Forehand,
}

impl ThrowStyle {
    /// Returns the kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backhand => "backhand",
            Self::Forehand => "forehand",
        }
    }
}

/// Hand and technique combined.
///
/// Right backhand and left forehand spin the disc the same way and share the
/// unmirrored geometry; right forehand and left backhand are their mirror image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThrowType {
    /// Right-hand backhand (RHBH).
    #[default]
    RightBackhand,
    /// Right-hand forehand (RHFH).
    RightForehand,
    /// Left-hand backhand (LHBH).
    LeftBackhand,
    /// Left-hand forehand (LHFH).
    LeftForehand,
}

impl ThrowType {
    /// All throw types.
    pub const ALL: [ThrowType; 4] = [
        Self::RightBackhand,
        Self::RightForehand,
        Self::LeftBackhand,
        Self::LeftForehand,
    ];

    /// Composes a throw type from a profile's hand and preferred style.
    pub const fn new(hand: ThrowingHand, style: ThrowStyle) -> Self {
        match (hand, style) {
            (ThrowingHand::Right, ThrowStyle::Backhand) => Self::RightBackhand,
            (ThrowingHand::Right, ThrowStyle::Forehand) => Self::RightForehand,
            (ThrowingHand::Left, ThrowStyle::Backhand) => Self::LeftBackhand,
            (ThrowingHand::Left, ThrowStyle::Forehand) => Self::LeftForehand,
        }
    }

    /// The throwing hand.
    pub const fn hand(self) -> ThrowingHand {
        match self {
            Self::RightBackhand | Self::RightForehand => ThrowingHand::Right,
            Self::LeftBackhand | Self::LeftForehand => ThrowingHand::Left,
        }
    }

    /// The throwing technique.
    pub const fn style(self) -> ThrowStyle {
        match self {
            Self::RightBackhand | Self::LeftBackhand => ThrowStyle::Backhand,
            Self::RightForehand | Self::LeftForehand => ThrowStyle::Forehand,
        }
    }

    /// Whether the curve is drawn mirrored, i.e. the disc spins clockwise
    /// when seen from above.
    #[inline]
    pub const fn is_mirrored(self) -> bool {
        matches!(self, Self::RightForehand | Self::LeftBackhand)
    }

    /// Returns the kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RightBackhand => "right-backhand",
            Self::RightForehand => "right-forehand",
            Self::LeftBackhand => "left-backhand",
            Self::LeftForehand => "left-forehand",
        }
    }
}

/// Angle of the disc relative to the ground at release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseAngle {
    /// Outer edge tilted down: less turn, more fade.
    Hyzer,
    /// Level release.
    #[default]
    Flat,
    /// Outer edge tilted up: more turn, less fade.
    Anhyzer,
}

impl ReleaseAngle {
    /// All release angles, in display order.
    pub const ALL: [ReleaseAngle; 3] = [Self::Hyzer, Self::Flat, Self::Anhyzer];

    /// `(turn, fade)` multipliers applied to the base lateral effects.
    #[inline]
    pub const fn multipliers(self) -> (f64, f64) {
        match self {
            Self::Hyzer => (0.5, 1.4),
            Self::Flat => (1.0, 1.0),
            Self::Anhyzer => (1.6, 0.6),
        }
    }

    /// Returns the kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hyzer => "hyzer",
            Self::Flat => "flat",
            Self::Anhyzer => "anhyzer",
        }
    }
}

macro_rules! impl_name_conversions {
    ($ty:ty, $kind:literal, [$($pattern:pat => $variant:expr),* $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = FlightPathError;

            fn from_str(s: &str) -> Result<Self> {
                let name = s.trim().to_ascii_lowercase().replace('_', "-");
                match name.as_str() {
                    $($pattern => Ok($variant),)*
                    _ => Err(FlightPathError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

impl_name_conversions!(ThrowingHand, "throwing hand", [
    "right" | "r" => ThrowingHand::Right,
    "left" | "l" => ThrowingHand::Left,
]);

impl_name_conversions!(ThrowStyle, "throw style", [
    "backhand" | "bh" => ThrowStyle::Backhand,
    "forehand" | "fh" | "sidearm" => ThrowStyle::Forehand,
]);

impl_name_conversions!(ThrowType, "throw type", [
    "right-backhand" | "rhbh" => ThrowType::RightBackhand,
    "right-forehand" | "rhfh" => ThrowType::RightForehand,
    "left-backhand" | "lhbh" => ThrowType::LeftBackhand,
    "left-forehand" | "lhfh" => ThrowType::LeftForehand,
]);

impl_name_conversions!(ReleaseAngle, "release angle", [
    "hyzer" => ReleaseAngle::Hyzer,
    "flat" => ReleaseAngle::Flat,
    "anhyzer" => ReleaseAngle::Anhyzer,
]);

/// Base pixel coefficients for turn and fade, per drawing mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectWeights {
    /// Pixels of deflection per unit of turn at unit effect scale.
    pub turn: f64,
    /// Pixels of deflection per unit of fade at unit effect scale.
    pub fade: f64,
}

impl EffectWeights {
    /// Weights for the fixed schematic canvas.
    pub const SCHEMATIC: Self = Self {
        turn: 10.0,
        fade: 15.0,
    };

    /// Weights for the photo overlay.
    pub const OVERLAY: Self = Self {
        turn: 8.0,
        fade: 12.0,
    };
}

/// Signed sideways offsets, in pixels, derived from turn and fade.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LateralEffects {
    /// Deflection during the early, turn-dominated phase.
    pub turn: f64,
    /// Deflection during the late, fade-dominated phase.
    pub fade: f64,
}

/// Computes the lateral effects shared by both drawing modes.
///
/// `effect_scale` is the curve length divided by the mode's reference length,
/// so short curves get proportionally less sideways movement.
pub fn lateral_effects(
    numbers: &FlightNumbers,
    angle: ReleaseAngle,
    effect_scale: f64,
    mirror: bool,
    weights: EffectWeights,
) -> LateralEffects {
    let (turn_multiplier, fade_multiplier) = angle.multipliers();

    let mut turn = numbers.turn * weights.turn * effect_scale * turn_multiplier;
    let mut fade = numbers.fade * weights.fade * effect_scale * fade_multiplier;

    if mirror {
        turn = -turn;
        fade = -fade;
    }

    LateralEffects { turn, fade }
}

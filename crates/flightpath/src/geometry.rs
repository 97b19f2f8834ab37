//! 2D points and vectors in canvas space.
//!
//! Canvas space follows the usual vector-graphics convention: the origin is
//! the top-left corner, x grows to the right and y grows downward.
//!
//! # Example
//!
//! ```rust
//! use flightpath::{Point, Vector};
//!
//! let tee = Point::new(30.0, 270.0);
//! let basket = Point::new(270.0, 30.0);
//! let line = basket - tee;
//!
//! assert_eq!(tee + line, basket);
//! assert_eq!(line.perpendicular(), Vector::new(240.0, 240.0));
//! ```

use core::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        self + (other - self) * t
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, v: Vector) -> Point {
        Point {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl Sub for Point {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Point) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// A displacement in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// Uses [`f64::hypot`], so tiny or huge components neither underflow to
    /// zero nor overflow to infinity.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the vector rotated a quarter turn: `(-y, x)`.
    ///
    /// The result has the same length as `self`. Divide by the magnitude to
    /// get the unit normal.
    #[inline]
    pub fn perpendicular(&self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, scalar: f64) -> Vector {
        Vector {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn div(self, scalar: f64) -> Vector {
        Vector {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

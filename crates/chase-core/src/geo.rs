//! 2-D vector type used for positions, displacements, and facings.
//!
//! Coordinates are canvas units (the same space tile rectangles live in), so
//! `f64` keeps positions exact for the small integer tile sizes the grid
//! produces and avoids drift when an agent interpolates along many edges.

use std::ops::{Add, Mul, Neg, Sub};

/// A point or displacement in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction, or [`Vector::ZERO`] for a zero vector.
    #[inline]
    pub fn normalize(self) -> Vector {
        let len = self.length();
        if len == 0.0 {
            return Vector::ZERO;
        }
        Vector::new(self.x / len, self.y / len)
    }

    #[inline]
    pub fn scale(self, k: f64) -> Vector {
        Vector::new(self.x * k, self.y * k)
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn distance(self, other: Vector) -> f64 {
        (other - self).length()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise comparison within `tolerance`.
    pub fn almost_equals(self, other: Vector, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, k: f64) -> Vector {
        self.scale(k)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#![warn(missing_docs)]

//! Math types for ellray.
//!
//! Thin wrappers around nalgebra providing the types used for ray/ellipsoid
//! geometry in a body-centered Cartesian frame: points, vectors, and
//! tolerance constants. Linear quantities are in kilometers.

use nalgebra::Vector3;

/// A point in the body-centered frame (km).
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in the body-centered frame.
pub type Vec3 = Vector3<f64>;

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in km.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-6 km, i.e. one millimetre).
    pub const DEFAULT: Self = Self { linear: 1e-6 };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

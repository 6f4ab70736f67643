//! Ray representation.

use ellray_math::{Point3, Vec3};

/// A ray in the body-centered frame, defined by an origin offset and a
/// direction.
///
/// The direction is kept as given: the parameter `t` of [`Ray::at`] is
/// measured in multiples of `|direction|`, not in kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Offset of the ray origin from the ellipsoid center (km).
    pub origin: Point3,
    /// Direction of the ray. Must be non-zero to intersect anything.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin offset and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Build a ray from the six raw components `d_x, d_y, d_z, c_x, c_y, c_z`.
    pub fn from_components(d: [f64; 3], c: [f64; 3]) -> Self {
        Self::new(Point3::new(c[0], c[1], c[2]), Vec3::new(d[0], d[1], d[2]))
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

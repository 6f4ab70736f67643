//! Ray-surface intersection algorithms.
//!
//! Intersectors return an explicit [`Intersection`] so that a geometric miss
//! is never confused with a parameter error.

mod ellipsoid;

pub use ellipsoid::intersect_ellipsoid;

use ellray_math::Point3;

/// Nearest valid intersection of a ray with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidHit {
    /// Intersection point in the body-centered frame (km).
    pub point: Point3,
    /// Parameter along the ray where the intersection occurs (`t >= 0`).
    pub distance: f64,
}

/// Outcome of intersecting a ray with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The ray strikes the surface at `t >= 0`.
    Hit(EllipsoidHit),
    /// No intersection exists for `t >= 0`.
    Miss,
}

impl Intersection {
    /// Returns `true` for [`Intersection::Hit`].
    pub fn is_hit(&self) -> bool {
        matches!(self, Intersection::Hit(_))
    }

    /// The hit, if any.
    pub fn hit(&self) -> Option<&EllipsoidHit> {
        match self {
            Intersection::Hit(hit) => Some(hit),
            Intersection::Miss => None,
        }
    }

    /// The intersection point, if any.
    pub fn point(&self) -> Option<Point3> {
        self.hit().map(|h| h.point)
    }
}

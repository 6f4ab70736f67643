//! Ray-ellipsoid intersection (quadratic equation).

use log::{debug, trace};

use super::{EllipsoidHit, Intersection};
use crate::error::{RaytraceError, Result};
use crate::{EllipsoidShape, Ray};

/// Intersect a ray with an oblate ellipsoid centered at the origin.
///
/// Substitutes `P(t) = c + t*d` into `x² + y² + z²/(1 - e²) = R_E²` and
/// solves the resulting quadratic. The smaller root is preferred when it is
/// non-negative, otherwise the larger one; if both are negative the body is
/// behind the ray and the result is [`Intersection::Miss`].
///
/// Fails with [`RaytraceError::InvalidParameter`] if the direction is zero.
pub fn intersect_ellipsoid(ray: &Ray, shape: &EllipsoidShape) -> Result<Intersection> {
    let q = shape.polar_factor();
    let c = &ray.origin;
    let d = &ray.direction;
    let r = shape.equatorial_radius();

    // z terms divide by q; a product with 1/q rounds differently and flips
    // the exact sign test on grazing rays
    let a = d.z * d.z / q + d.y * d.y + d.x * d.x;
    let b = 2.0 * (c.x * d.x + c.y * d.y + c.z * d.z / q);
    let cc = c.x * c.x + c.y * c.y + c.z * c.z / q - r * r;

    // A is positive definite in d, so this only happens for d = 0
    if a == 0.0 {
        return Err(RaytraceError::InvalidParameter(
            "ray direction must be non-zero".into(),
        ));
    }

    let discriminant = b * b - 4.0 * a * cc;
    trace!("ellipsoid quadratic: a={a} b={b} c={cc} discriminant={discriminant}");
    if discriminant < 0.0 {
        return Ok(Intersection::Miss);
    }

    let sqrt_disc = discriminant.sqrt();
    let t_near = (-b - sqrt_disc) / (2.0 * a);
    let t_far = (-b + sqrt_disc) / (2.0 * a);

    let t = if t_near >= 0.0 {
        t_near
    } else if t_far >= 0.0 {
        t_far
    } else {
        debug!("both roots behind ray origin: t_near={t_near} t_far={t_far}");
        return Ok(Intersection::Miss);
    };
    debug!("selected root t={t} (t_near={t_near}, t_far={t_far})");

    Ok(Intersection::Hit(EllipsoidHit {
        point: ray.at(t),
        distance: t,
    }))
}

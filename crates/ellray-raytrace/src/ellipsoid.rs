//! Oblate reference ellipsoids of revolution about the z axis.

use ellray_math::{Point3, Tolerance};

use crate::error::{RaytraceError, Result};

/// Shape of an oblate spheroid: equatorial radius and first eccentricity.
///
/// The implicit surface is `x² + y² + z²/(1 - e²) = R_E²`. A value of this
/// type always satisfies `R_E > 0` and `0 <= e < 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidShape {
    radius: f64,
    eccentricity: f64,
}

impl EllipsoidShape {
    /// Earth reference ellipsoid in kilometers.
    pub const EARTH: Self = Self {
        radius: 6378.137,
        eccentricity: 0.081819221456,
    };

    /// Create a shape from an equatorial radius (km) and first eccentricity.
    ///
    /// Fails with [`RaytraceError::InvalidParameter`] unless `radius` is
    /// finite and positive and `eccentricity` lies in `[0, 1)`.
    pub fn new(radius: f64, eccentricity: f64) -> Result<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(RaytraceError::InvalidParameter(format!(
                "equatorial radius must be positive, got {radius}"
            )));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(RaytraceError::InvalidParameter(format!(
                "eccentricity must be in [0, 1), got {eccentricity}"
            )));
        }
        Ok(Self {
            radius,
            eccentricity,
        })
    }

    /// Equatorial radius `R_E` (km).
    pub fn equatorial_radius(&self) -> f64 {
        self.radius
    }

    /// First eccentricity `e`.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Divisor of the z² terms in the implicit equation: `1 - e²`.
    #[inline]
    pub fn polar_factor(&self) -> f64 {
        1.0 - self.eccentricity * self.eccentricity
    }

    /// Polar semi-axis `R_E * sqrt(1 - e²)` (km).
    pub fn polar_radius(&self) -> f64 {
        self.radius * self.polar_factor().sqrt()
    }

    /// Left-hand side of the implicit equation: `x² + y² + z²/(1 - e²)`.
    ///
    /// Equals `R_E²` exactly on the surface, less inside, greater outside.
    pub fn implicit(&self, p: &Point3) -> f64 {
        p.x * p.x + p.y * p.y + p.z * p.z / self.polar_factor()
    }

    /// First-order signed distance from the surface (km), positive outside.
    pub fn surface_offset(&self, p: &Point3) -> f64 {
        (self.implicit(p) - self.radius * self.radius) / (2.0 * self.radius)
    }

    /// Check whether `p` lies on the surface within `tol`.
    pub fn is_on_surface(&self, p: &Point3, tol: &Tolerance) -> bool {
        tol.is_zero(self.surface_offset(p))
    }
}

impl Default for EllipsoidShape {
    fn default() -> Self {
        Self::EARTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_earth_constants() {
        let earth = EllipsoidShape::default();
        assert_relative_eq!(earth.equatorial_radius(), 6378.137);
        assert_relative_eq!(earth.eccentricity(), 0.081819221456);
        assert_relative_eq!(earth.polar_radius(), 6356.752, epsilon = 1e-3);
    }

    #[test]
    fn test_new_accepts_valid() {
        let shape = EllipsoidShape::new(1.0, 0.5).unwrap();
        assert_relative_eq!(shape.polar_factor(), 0.75);
        assert!(EllipsoidShape::new(6378.137, 0.0).is_ok());
    }

    #[test]
    fn test_new_rejects_bad_radius() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = EllipsoidShape::new(r, 0.1).unwrap_err();
            assert!(matches!(err, RaytraceError::InvalidParameter(_)));
        }
    }

    #[test]
    fn test_new_rejects_bad_eccentricity() {
        for e in [1.0, 1.5, -0.1, f64::NAN] {
            let err = EllipsoidShape::new(6378.137, e).unwrap_err();
            assert!(matches!(err, RaytraceError::InvalidParameter(_)));
        }
    }

    #[test]
    fn test_surface_points() {
        let earth = EllipsoidShape::EARTH;
        let tol = Tolerance::DEFAULT;
        let equator = Point3::new(0.0, earth.equatorial_radius(), 0.0);
        let pole = Point3::new(0.0, 0.0, -earth.polar_radius());
        assert!(earth.is_on_surface(&equator, &tol));
        assert!(earth.is_on_surface(&pole, &tol));
        assert!(!earth.is_on_surface(&Point3::new(8000.0, 0.0, 0.0), &tol));
    }

    #[test]
    fn test_surface_offset_sign() {
        let sphere = EllipsoidShape::new(10.0, 0.0).unwrap();
        assert!(sphere.surface_offset(&Point3::origin()) < 0.0);
        assert!(sphere.surface_offset(&Point3::new(0.0, 0.0, 11.0)) > 0.0);
        // first-order estimate: (121 - 100) / 20
        assert_relative_eq!(sphere.surface_offset(&Point3::new(11.0, 0.0, 0.0)), 1.05);
    }
}

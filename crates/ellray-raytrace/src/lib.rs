#![warn(missing_docs)]

//! Ray intersection with oblate reference ellipsoids.
//!
//! Answers a single question for a line of sight in a body-centered frame:
//! does the ray strike the body's reference ellipsoid, and where?
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin offset and direction
//! - [`EllipsoidShape`] - Validated spheroid parameters (`R_E`, `e`)
//! - [`intersect`] - Ray-ellipsoid intersection returning [`Intersection`]
//!
//! # Example
//!
//! ```
//! use ellray_raytrace::{intersect_ellipsoid, EllipsoidShape, Intersection, Ray};
//!
//! let ray = Ray::from_components([-1.0, 0.0, 0.0], [8000.0, 0.0, 0.0]);
//! let result = intersect_ellipsoid(&ray, &EllipsoidShape::EARTH).unwrap();
//! match result {
//!     Intersection::Hit(hit) => assert!((hit.point.x - 6378.137).abs() < 1e-9),
//!     Intersection::Miss => unreachable!(),
//! }
//! ```

mod ellipsoid;
mod error;
pub mod intersect;
mod ray;

pub use ellipsoid::EllipsoidShape;
pub use error::{RaytraceError, Result};
pub use intersect::{intersect_ellipsoid, EllipsoidHit, Intersection};
pub use ray::Ray;

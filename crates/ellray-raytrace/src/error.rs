//! Error types for ray/ellipsoid intersection.

use thiserror::Error;

/// Errors that can occur when building shapes or intersecting rays.
///
/// A ray that misses the body is not an error; see
/// [`Intersection::Miss`](crate::Intersection::Miss).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RaytraceError {
    /// Shape or ray parameters violate their preconditions.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for raytrace operations.
pub type Result<T> = std::result::Result<T, RaytraceError>;

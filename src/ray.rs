//! Ray representation for 3D ray tracing.
//!
//! A ray is the half-line r(t) = origin + t * direction. Which t-values count
//! as hits is decided by the caller through an [`Interval`](crate::interval::Interval).

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or a surface point for shadow
    /// and reflection rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized; the shading math divides by vector
    /// lengths where it matters. The direction must be nonzero — a
    /// zero-length direction makes every derived quantity meaningless.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

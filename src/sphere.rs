//! Sphere primitive for ray tracing.
//!
//! The only geometry the tracer knows. Each sphere carries its shading
//! attributes directly: base color, Phong specular exponent, and the
//! reflectance used to blend in the mirrored ray.

use glam::Vec3A;

use crate::ray::Ray;

/// RGB color type using Vec3A for SIMD optimization.
///
/// Channels are conventionally in [0, 1] but are not clamped here; clamping
/// to a displayable range happens during image serialization.
pub type Color = Vec3A;

/// Sphere primitive with per-surface shading attributes.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3A,

    /// Radius of the sphere (positive).
    pub radius: f32,

    /// Base surface color.
    pub color: Color,

    /// Phong specular exponent; `None` disables the specular term for this
    /// surface entirely.
    pub specular: Option<f32>,

    /// Fraction of the final color taken from the reflected ray rather than
    /// local shading, in [0, 1].
    pub reflectance: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(
        center: Vec3A,
        radius: f32,
        color: Color,
        specular: Option<f32>,
        reflectance: f32,
    ) -> Self {
        Self {
            center,
            radius,
            color,
            specular,
            reflectance,
        }
    }

    /// Both parametric roots of the ray/sphere quadratic.
    ///
    /// Substituting r(t) = origin + t * direction into |P - center| = radius
    /// gives a*t^2 + b*t + c = 0. The roots come back in the `+`/`-` branch
    /// order of the quadratic formula — NOT sorted; callers must test both.
    /// A negative discriminant returns `(INFINITY, INFINITY)`, which no
    /// finite acceptance range contains. A tangent ray returns two equal
    /// finite roots, so tangency stays distinguishable from a miss.
    pub fn intersect(&self, ray: &Ray) -> (f32, f32) {
        // Vector from sphere center to ray origin
        let co = ray.origin - self.center;

        // Quadratic equation coefficients
        let a = ray.direction.length_squared();
        let b = 2.0 * co.dot(ray.direction);
        let c = co.length_squared() - self.radius * self.radius;

        // Calculate discriminant
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return (f32::INFINITY, f32::INFINITY);
        }

        let sqrtd = discriminant.sqrt();
        ((-b + sqrtd) / (2.0 * a), (-b - sqrtd) / (2.0 * a))
    }
}

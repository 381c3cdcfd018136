//! Light sources for the shading model.
//!
//! Three kinds of light, each carrying exactly the fields its kind uses, so
//! no unused position or direction can leak into the lighting math.

use glam::Vec3A;

/// Light source variants.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    /// Constant illumination added to every shaded point.
    Ambient {
        /// Scalar intensity added unconditionally.
        intensity: f32,
    },

    /// Light radiating from a world-space position.
    Point {
        /// Scalar intensity before the cosine falloff.
        intensity: f32,
        /// World-space location of the emitter.
        position: Vec3A,
    },

    /// Parallel light arriving along a fixed direction.
    Directional {
        /// Scalar intensity before the cosine falloff.
        intensity: f32,
        /// Direction toward the light, identical for every shaded point.
        direction: Vec3A,
    },
}

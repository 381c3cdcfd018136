//! Scene data and nearest-hit queries.
//!
//! A scene is an ordered list of spheres plus an ordered list of lights,
//! immutable for the duration of a render. Sphere order matters only for
//! tie-breaking in [`Scene::closest_hit`].

use crate::interval::Interval;
use crate::light::Light;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Ordered collection of surfaces and lights forming a scene.
pub struct Scene {
    /// Spheres in scan order; earlier spheres win exact intersection ties.
    pub spheres: Vec<Sphere>,
    /// Lights evaluated in order by the shading model.
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Nearest accepted intersection along `ray`, or `None` on a miss.
    ///
    /// Scans every sphere in scene order and tests both quadratic roots
    /// against `bounds`; the smallest accepted t wins. The comparison is
    /// strict `<`, so on an exact numeric tie the first sphere in scan order
    /// is kept — deterministic, and deliberately left that way.
    pub fn closest_hit(&self, ray: &Ray, bounds: Interval) -> Option<(&Sphere, f32)> {
        let mut closest_t = f32::INFINITY;
        let mut closest: Option<&Sphere> = None;

        for sphere in &self.spheres {
            let (t1, t2) = sphere.intersect(ray);
            if bounds.contains(t1) && t1 < closest_t {
                closest_t = t1;
                closest = Some(sphere);
            }
            if bounds.contains(t2) && t2 < closest_t {
                closest_t = t2;
                closest = Some(sphere);
            }
        }

        closest.map(|sphere| (sphere, closest_t))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

//! Recursive Whitted-style tracer.
//!
//! One ray in, one color out: resolve the nearest hit, shade it with the
//! Phong-like lighting model (ambient + diffuse + specular, with a shadow
//! test per non-ambient light), then recurse into the mirrored ray while the
//! depth budget and the surface's reflectance allow it.

use glam::Vec3A;

use crate::interval::Interval;
use crate::light::Light;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::sphere::Color;

/// Color returned when a ray escapes the scene.
const BACKGROUND: Color = Color::ZERO;

/// Lower parametric bound for shadow rays.
///
/// The shading point sits on a sphere surface up to roundoff, so a shadow
/// ray started at t=0 can re-hit its own surface. Starting slightly along
/// the ray avoids that.
const SHADOW_EPSILON: f32 = 1e-3;

/// Reflect `v` about the normal `n`: n * 2 * dot(n, v) - v.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    n * 2.0 * n.dot(v) - v
}

/// Scalar illumination at a surface point.
///
/// Accumulates ambient, diffuse, and specular contributions over every
/// light in the scene. Point and directional lights are shadow-tested
/// first; an occluded light contributes nothing at all. `specular` is the
/// surface's Phong exponent, `None` skipping the specular term entirely.
///
/// The sum is NOT clamped — a brightly lit point can exceed 1.0, and the
/// caller decides what to do about it.
pub fn lighting(
    point: Vec3A,
    normal: Vec3A,
    view: Vec3A,
    scene: &Scene,
    specular: Option<f32>,
) -> f32 {
    let mut total = 0.0_f32;
    let shadow_bounds = Interval::new(SHADOW_EPSILON, f32::INFINITY);

    for light in &scene.lights {
        let (intensity, light_vec) = match *light {
            Light::Ambient { intensity } => {
                total += intensity;
                continue;
            }
            Light::Point {
                intensity,
                position,
            } => (intensity, position - point),
            Light::Directional {
                intensity,
                direction,
            } => (intensity, direction),
        };

        // shadow check
        let shadow_ray = Ray::new(point, light_vec);
        if scene.closest_hit(&shadow_ray, shadow_bounds).is_some() {
            continue;
        }

        // diffuse: cosine of the angle between normal and light vector,
        // independent of either vector's length
        let n_dot_l = normal.dot(light_vec);
        if n_dot_l > 0.0 {
            total += intensity * n_dot_l / (normal.length() * light_vec.length());
        }

        // specular
        if let Some(exponent) = specular {
            let r = reflect(light_vec, normal);
            let r_dot_v = r.dot(view);
            if r_dot_v > 0.0 {
                total += intensity * (r_dot_v / (r.length() * view.length())).powf(exponent);
            }
        }
    }

    total
}

/// Trace `ray` through `scene` and return its color.
///
/// `bounds` restricts which intersections count as hits; it is passed
/// unchanged to every reflected ray. `depth` is the remaining reflection
/// budget: each bounce decrements it, so the recursion performs at most
/// depth + 1 calls. A surface with zero reflectance terminates early
/// regardless of budget.
pub fn trace(ray: &Ray, scene: &Scene, bounds: Interval, depth: u32) -> Color {
    let Some((sphere, t)) = scene.closest_hit(ray, bounds) else {
        return BACKGROUND;
    };

    let point = ray.at(t);
    let normal = (point - sphere.center).normalize();
    let local_color =
        sphere.color * lighting(point, normal, -ray.direction, scene, sphere.specular);

    let reflectance = sphere.reflectance;
    if depth == 0 || reflectance <= 0.0 {
        return local_color;
    }

    let reflected_ray = Ray::new(point, reflect(-ray.direction, normal));
    let reflected_color = trace(&reflected_ray, scene, bounds, depth - 1);

    local_color * (1.0 - reflectance) + reflected_color * reflectance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::Sphere;

    const TRACE_BOUNDS: Interval = Interval {
        min: 0.001,
        max: f32::INFINITY,
    };

    fn single_sphere_scene(specular: Option<f32>, reflectance: f32) -> Scene {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3A::new(0.0, 0.0, -5.0),
            1.0,
            Color::new(1.0, 0.0, 0.0),
            specular,
            reflectance,
        ));
        scene.add_light(Light::Ambient { intensity: 0.5 });
        scene
    }

    #[test]
    fn reflect_mirrors_about_the_normal() {
        let v = Vec3A::new(1.0, -1.0, 0.0);
        let n = Vec3A::new(0.0, 1.0, 0.0);
        assert_eq!(reflect(v, n), Vec3A::new(-1.0, -1.0, 0.0));
    }

    #[test]
    fn normalized_directions_have_unit_length() {
        let d = Vec3A::new(3.0, -2.0, 7.5).normalize();
        assert!((d.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ambient_light_contributes_unconditionally() {
        let mut scene = Scene::new();
        scene.add_light(Light::Ambient { intensity: 0.2 });

        let total = lighting(
            Vec3A::new(0.0, 0.0, -4.0),
            Vec3A::new(0.0, 0.0, 1.0),
            Vec3A::new(0.0, 0.0, 1.0),
            &scene,
            None,
        );
        assert_eq!(total, 0.2);
    }

    #[test]
    fn unobstructed_point_light_adds_cosine_diffuse() {
        let mut scene = Scene::new();
        scene.add_light(Light::Point {
            intensity: 0.6,
            position: Vec3A::new(0.0, 10.0, 0.0),
        });

        // Light straight above a point with an upward normal: cos = 1.
        let total = lighting(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0), Vec3A::ONE, &scene, None);
        assert!((total - 0.6).abs() < 1e-5);

        // Normal at 45 degrees to the light: cos = sqrt(2)/2.
        let tilted = lighting(
            Vec3A::ZERO,
            Vec3A::new(1.0, 1.0, 0.0),
            Vec3A::ONE,
            &scene,
            None,
        );
        assert!((tilted - 0.6 * std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn occluded_light_contributes_nothing() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3A::new(0.0, 5.0, 0.0),
            1.0,
            Color::new(1.0, 1.0, 1.0),
            None,
            0.0,
        ));
        scene.add_light(Light::Point {
            intensity: 0.6,
            position: Vec3A::new(0.0, 10.0, 0.0),
        });

        let total = lighting(Vec3A::ZERO, Vec3A::new(0.0, 1.0, 0.0), Vec3A::ONE, &scene, None);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn specular_term_respects_the_disable_sentinel() {
        let mut scene = Scene::new();
        scene.add_light(Light::Directional {
            intensity: 1.0,
            direction: Vec3A::new(0.0, 1.0, 0.0),
        });

        let point = Vec3A::ZERO;
        let normal = Vec3A::new(0.0, 1.0, 0.0);
        let view = Vec3A::new(0.0, 1.0, 0.0);

        // View aligned with the reflected light vector: the specular term
        // contributes its full intensity on top of the diffuse term.
        let with_specular = lighting(point, normal, view, &scene, Some(10.0));
        let without = lighting(point, normal, view, &scene, None);
        assert!((without - 1.0).abs() < 1e-5);
        assert!((with_specular - 2.0).abs() < 1e-5);
    }

    #[test]
    fn miss_returns_background() {
        let scene = Scene::new();
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert_eq!(trace(&ray, &scene, TRACE_BOUNDS, 3), BACKGROUND);
    }

    #[test]
    fn depth_zero_returns_pure_local_color() {
        // Even a fully reflective surface cannot recurse without budget.
        let scene = single_sphere_scene(None, 1.0);
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        let color = trace(&ray, &scene, TRACE_BOUNDS, 0);
        assert_eq!(color, Color::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn zero_reflectance_ignores_the_depth_budget() {
        let scene = single_sphere_scene(None, 0.0);
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));

        assert_eq!(
            trace(&ray, &scene, TRACE_BOUNDS, 5),
            trace(&ray, &scene, TRACE_BOUNDS, 0)
        );
    }

    #[test]
    fn reflectance_blends_local_and_reflected_exactly() {
        // The mirrored ray at the entry point leaves the scene, so the
        // reflected color is the black background and the blend reduces to
        // local * (1 - r).
        let ray = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let local = trace(&ray, &single_sphere_scene(None, 0.5), TRACE_BOUNDS, 0);

        let half = trace(&ray, &single_sphere_scene(None, 0.5), TRACE_BOUNDS, 1);
        assert_eq!(half, local * 0.5);

        let mirror = trace(&ray, &single_sphere_scene(None, 1.0), TRACE_BOUNDS, 1);
        assert_eq!(mirror, Color::ZERO);
    }
}

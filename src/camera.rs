//! Camera for primary-ray generation and frame sampling.

use glam::Vec3A;
use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::interval::Interval;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::tracer;

/// Lower parametric bound for primary rays.
///
/// The projection plane sits at z = -1 in camera space; hits closer than
/// the plane are discarded so geometry cannot clip through it.
const T_MIN: f32 = 1.0;

/// Perspective camera and frame sampler.
///
/// Holds everything that used to be a scattered literal: viewport size,
/// field of view, camera position, and the shared recursion budget. One
/// primary ray per pixel; no sampling, no defocus.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Vertical field of view in degrees (default: 90)
    pub vfov: f32,
    /// Camera position in world space; fixed across the whole frame
    pub origin: Vec3A,
    /// Reflection recursion budget passed unchanged to every pixel's trace
    pub max_depth: u32,
}

impl Camera {
    /// Creates a new camera with default settings.
    ///
    /// Default: 1024x768 image, 90° vertical FOV, origin (0, 3, 0), three
    /// reflection bounces.
    pub fn new() -> Self {
        Self {
            image_width: 1024,
            image_height: 768,
            vfov: 90.0,
            origin: Vec3A::new(0.0, 3.0, 0.0),
            max_depth: 3,
        }
    }

    /// Renders the scene to an HDR framebuffer.
    ///
    /// Casts one primary ray through each pixel center and traces it with
    /// the camera's recursion budget. The resulting f32 RGB values are raw
    /// tracer output — unclamped, possibly above 1.0 on brightly lit
    /// surfaces; quantization happens at serialization time.
    pub fn render(&self, scene: &Scene) -> ImageBuffer<Rgb<f32>, Vec<f32>> {
        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> =
            ImageBuffer::new(self.image_width, self.image_height);

        info!(
            "Rendering {}x{} with {} reflection bounces...",
            self.image_width, self.image_height, self.max_depth
        );
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new((self.image_width * self.image_height) as u64);
        pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}").unwrap());

        let bounds = Interval::new(T_MIN, f32::INFINITY);
        let half_tan = (self.vfov.to_radians() / 2.0).tan();
        let aspect_ratio = self.image_width as f32 / self.image_height as f32;

        for (i, j, pixel) in image.enumerate_pixels_mut() {
            // Screen-space coordinates of the pixel center, scaled by the
            // FOV and stretched horizontally by the aspect ratio
            let x = (2.0 * (i as f32 + 0.5) / self.image_width as f32 - 1.0)
                * half_tan
                * aspect_ratio;
            let y = -(2.0 * (j as f32 + 0.5) / self.image_height as f32 - 1.0) * half_tan;
            let direction = Vec3A::new(x, y, -1.0).normalize();

            let color = tracer::trace(
                &Ray::new(self.origin, direction),
                scene,
                bounds,
                self.max_depth,
            );
            *pixel = Rgb([color.x, color.y, color.z]);
            pb.inc(1);
        }

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use crate::sphere::{Color, Sphere};

    #[test]
    fn empty_scene_renders_background_everywhere() {
        let mut camera = Camera::new();
        camera.image_width = 4;
        camera.image_height = 4;

        let image = camera.render(&Scene::new());
        assert_eq!(image.dimensions(), (4, 4));
        for pixel in image.pixels() {
            assert_eq!(pixel.0, [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn center_pixel_sees_the_sphere_dead_ahead() {
        let mut camera = Camera::new();
        camera.image_width = 3;
        camera.image_height = 3;
        camera.origin = Vec3A::ZERO;

        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3A::new(0.0, 0.0, -5.0),
            1.0,
            Color::new(1.0, 0.0, 0.0),
            None,
            0.0,
        ));
        scene.add_light(Light::Ambient { intensity: 0.5 });

        let image = camera.render(&scene);
        // The middle pixel's ray is exactly (0, 0, -1).
        let center = image.get_pixel(1, 1);
        assert!(center.0[0] > 0.0);
        // Corner rays fan out past the unit sphere.
        assert_eq!(image.get_pixel(0, 0).0, [0.0, 0.0, 0.0]);
    }
}

use log::info;
use glam::Vec3A;
use clap::Parser;

mod ray;
mod cli;
mod logger;
mod output;
mod sphere;
mod light;
mod interval;
mod scene;
mod tracer;
mod camera;

use cli::Args;
use logger::init_logger;
use output::{save_image_as_png, save_image_as_ppm};
use sphere::Sphere;
use light::Light;
use scene::Scene;
use camera::Camera;

/// Create the demo scene: five colored spheres floating above a giant
/// ground sphere, lit by one ambient, one point, and one directional light.
fn create_scene() -> Scene {
    let mut scene = Scene::new();

    scene.add_sphere(Sphere::new(
        Vec3A::new(-5.0, 0.0, -15.0),
        1.5,
        Vec3A::new(0.8, 0.0, 0.0),
        Some(500.0),
        0.4,
    )); // red
    scene.add_sphere(Sphere::new(
        Vec3A::new(3.0, 0.0, -17.0),
        2.0,
        Vec3A::new(0.0, 1.0, 0.0),
        Some(500.0),
        0.5,
    )); // green
    scene.add_sphere(Sphere::new(
        Vec3A::new(-1.0, 0.0, -14.0),
        2.0,
        Vec3A::new(0.0, 0.0, 1.0),
        Some(500.0),
        0.4,
    )); // blue
    scene.add_sphere(Sphere::new(
        Vec3A::new(-10.0, 0.0, -20.0),
        1.5,
        Vec3A::new(1.0, 0.0, 1.0),
        Some(500.0),
        0.5,
    )); // purple
    scene.add_sphere(Sphere::new(
        Vec3A::new(7.0, 0.0, -20.0),
        1.5,
        Vec3A::new(1.0, 1.0, 0.0),
        Some(500.0),
        0.4,
    )); // yellow (small)
    scene.add_sphere(Sphere::new(
        Vec3A::new(0.0, -5001.0, 0.0),
        5000.0,
        Vec3A::new(1.0, 1.0, 0.0),
        Some(1000.0),
        0.5,
    )); // yellow ground

    scene.add_light(Light::Ambient { intensity: 0.2 });
    scene.add_light(Light::Point {
        intensity: 0.6,
        position: Vec3A::new(2.0, 5.0, 0.0),
    });
    scene.add_light(Light::Directional {
        intensity: 0.6,
        direction: Vec3A::new(1.0, 4.0, 4.0),
    });

    scene
}

/// Create the camera from command line settings
fn create_camera(args: &Args) -> Camera {
    let mut camera = Camera::new();
    camera.image_width = args.width;
    camera.image_height = args.height;
    camera.vfov = args.fov;
    camera.max_depth = args.depth;
    camera
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!("Glint - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, reflection depth: {}",
        args.width, args.height, args.depth
    );

    let scene = create_scene();
    let camera = create_camera(&args);

    let image = camera.render(&scene);

    // Save image based on file extension
    if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output);
    } else if args.output.ends_with(".ppm") {
        save_image_as_ppm(&image, &args.output);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .png and .ppm formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}

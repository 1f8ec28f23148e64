//! Simple ray tracer example.
//!
//! Renders a basic scene with spheres, a floor and two lights and saves it as PNG.

use prism_renderer::{ColorRgb, Material, Plane, PointLight, Renderer, Scene, Sphere, Vector3};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("Prism Ray Tracer - Simple Example");
    println!("=================================");

    // Build the scene
    let start = std::time::Instant::now();
    let scene = build_scene()?;
    println!("Scene built in {:?}", start.elapsed());

    let renderer = Renderer::new(800, 600, 3)?;

    println!("Rendering 800x600 @ 3 bounces...");

    // Render
    let start = std::time::Instant::now();
    let image = renderer.render_parallel(&scene);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    image.save(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Result<Scene, prism_core::SceneError> {
    let mut scene = Scene::new().with_ambient(ColorRgb::splat(0.02));

    // Floor
    scene.add_object(Box::new(Plane::new(
        Vector3::new(0.0, -1.0, 0.0),
        Vector3::Y,
        Material::new(ColorRgb::splat(0.6)).with_reflectivity(0.2),
    )?));

    // Three main spheres
    scene.add_object(Box::new(Sphere::new(
        Vector3::new(-2.2, 0.0, 7.0),
        1.0,
        Material::new(ColorRgb::new(0.9, 0.2, 0.2)).with_reflectivity(0.0),
    )?));

    scene.add_object(Box::new(Sphere::new(
        Vector3::new(0.0, 0.0, 8.0),
        1.0,
        Material::new(ColorRgb::new(0.95, 0.95, 0.95)).with_reflectivity(0.8),
    )?));

    scene.add_object(Box::new(Sphere::new(
        Vector3::new(2.2, 0.0, 7.0),
        1.0,
        Material::new(ColorRgb::new(0.2, 0.3, 0.9)).with_phong(0.9, 0.6, 40.0),
    )?));

    scene.add_light(PointLight::new(Vector3::new(-4.0, 5.0, 2.0), ColorRgb::WHITE, 300.0));
    scene.add_light(PointLight::new(Vector3::new(5.0, 3.0, 4.0), ColorRgb::new(1.0, 0.9, 0.7), 120.0));

    println!("Created {} objects", scene.object_count());
    Ok(scene)
}

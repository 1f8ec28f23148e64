//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example load_scene -- scenes/three_spheres.json

use std::env;

use prism_core::load_scene;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-scene-json>");
        println!("\nExample:");
        println!("  cargo run --example load_scene -- scenes/three_spheres.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene ===");
            println!("Objects: {}", scene.object_count());
            println!("Lights: {}", scene.light_count());
            println!("Ambient: {:?}", scene.ambient());

            println!("\n--- Objects ---");
            for (i, object) in scene.objects().iter().enumerate() {
                let material = object.material();
                println!(
                    "  [{}] {:?} kd={} ks={} alpha={} reflectivity={}",
                    i, material.color, material.kd, material.ks, material.alpha, material.reflectivity
                );
            }

            println!("\n--- Lights ---");
            for light in scene.lights() {
                println!(
                    "  position={:?} color={:?} intensity={}",
                    light.position, light.color, light.intensity
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to load scene: {}", e);
            std::process::exit(1);
        }
    }
}

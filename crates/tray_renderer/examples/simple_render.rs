//! Simple ray tracer example.
//!
//! Renders a mirror sphere, a glass sphere and a box over a checkered floor
//! and saves it to PPM format.

use std::fs::File;
use std::io::{BufWriter, Write};

use tray_core::{Camera, Light, Material, Primitive, Scene};
use tray_renderer::{color_to_rgb8, Color, Framebuffer, RayTracer, TraceFlags, Vec3};

fn main() {
    println!("Tray Ray Tracer - Simple Example");
    println!("================================");

    let scene = build_scene();

    let mut engine = RayTracer::new(800, 600)
        .with_flags(TraceFlags::ALL)
        .with_trace_level(5);

    println!("Rendering 800x600 with {:?}...", engine.flags());

    let start = std::time::Instant::now();
    engine.render(&scene);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(engine.framebuffer(), filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let camera = Camera::new(Vec3::new(0.0, 2.0, 10.0), Vec3::new(0.0, 0.5, 0.0), Vec3::Y)
        .with_view_distance(2.0);
    let mut scene = Scene::new(camera).with_view_size(2.0, 1.5);

    // Floor
    scene.add_primitive(Primitive::plane(
        Vec3::Y,
        -1.0,
        Material::matte(Color::ZERO, Color::new(0.8, 0.8, 0.8)),
    ));

    scene.add_primitive(Primitive::sphere(
        Vec3::new(-2.0, 0.0, 0.0),
        1.0,
        Material::new(Color::splat(0.6), Color::splat(0.3), Color::ONE, 20.0),
    ));

    scene.add_primitive(Primitive::sphere(
        Vec3::new(0.5, 0.0, 1.5),
        1.0,
        Material::new(
            Color::new(0.2, 0.4, 0.9),
            Color::new(0.2, 0.3, 0.6),
            Color::ONE,
            10.0,
        ),
    ));

    scene.add_primitive(Primitive::cuboid(
        Vec3::new(2.5, 0.0, -1.0),
        Vec3::new(1.5, 2.0, 1.5),
        Material::new(
            Color::new(0.3, 0.1, 0.1),
            Color::new(0.8, 0.2, 0.2),
            Color::splat(0.5),
            4.0,
        ),
    ));

    scene.add_light(Light::new(Vec3::new(5.0, 10.0, 8.0), Color::ONE));

    scene
}

fn save_ppm(image: &Framebuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "255")?;

    // PPM is top row first; row 0 of the framebuffer is the bottom
    for y in (0..image.height()).rev() {
        for x in 0..image.width() {
            let rgb = color_to_rgb8(image.get(x, y));
            writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
        }
    }

    Ok(())
}

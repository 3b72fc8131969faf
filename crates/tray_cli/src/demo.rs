//! Built-in scene used when no scene file is given.

use tray_core::{Camera, Light, Material, Primitive, Scene};
use tray_math::{Color, Vec3};

/// Checkered floor, three spheres, a box and one light.
pub fn demo_scene() -> Scene {
    let eye = Vec3::new(0.0, 3.0, 12.0);
    let target = Vec3::new(0.0, 0.5, 0.0);
    let camera = Camera::new(eye, target, Vec3::Y).with_view_distance(2.0);
    let mut scene = Scene::new(camera)
        .with_background(Color::new(0.05, 0.05, 0.1))
        .with_view_size(2.0, 1.5);

    scene.add_primitive(Primitive::plane(
        Vec3::Y,
        -1.0,
        Material::matte(Color::ZERO, Color::new(0.9, 0.9, 0.9)),
    ));

    // Bright, mostly mirror-like
    scene.add_primitive(Primitive::sphere(
        Vec3::new(-2.5, 0.0, 0.0),
        1.0,
        Material::new(Color::splat(0.7), Color::splat(0.2), Color::ONE, 20.0),
    ));

    scene.add_primitive(Primitive::sphere(
        Vec3::new(0.0, 0.5, -1.5),
        1.5,
        Material::new(
            Color::new(0.1, 0.1, 0.3),
            Color::new(0.2, 0.3, 0.8),
            Color::ONE,
            10.0,
        ),
    ));

    scene.add_primitive(Primitive::sphere(
        Vec3::new(1.2, -0.4, 2.0),
        0.6,
        Material::new(
            Color::new(0.3, 0.3, 0.1),
            Color::new(0.8, 0.7, 0.1),
            Color::splat(0.8),
            6.0,
        ),
    ));

    scene.add_primitive(Primitive::cuboid(
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(1.5, 2.0, 1.5),
        Material::new(
            Color::new(0.2, 0.05, 0.05),
            Color::new(0.8, 0.2, 0.2),
            Color::splat(0.5),
            4.0,
        ),
    ));

    scene.add_light(Light::new(Vec3::new(5.0, 10.0, 8.0), Color::ONE));

    scene
}

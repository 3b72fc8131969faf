//! Surface shading at a hit point.
//!
//! Ambient base (or the checkerboard on planes), plus Lambertian diffuse and
//! Blinn-Phong specular per light. Results are unclamped.

use tray_core::{Hit, Light, Material, PrimitiveKind};
use tray_math::{Color, Optics, Vec3};

use crate::TraceFlags;

/// Color of the "odd" checkerboard cells on planes.
pub const GRID_GREY: Color = Color::new(0.1, 0.1, 0.1);

/// Grid pattern for planes: cells are 2 units wide, centred on the origin.
///
/// A point lies in an odd cell if any axis index is odd.
pub fn checker_colour(point: Vec3, diffuse: Color) -> Color {
    let cell = |c: f32| ((c * 0.5).abs() + 0.5).floor() as i64;

    if cell(point.x) % 2 != 0 || cell(point.y) % 2 != 0 || cell(point.z) % 2 != 0 {
        GRID_GREY
    } else {
        diffuse
    }
}

/// Compute the color at `hit` seen from `eye`.
///
/// `eye` is the origin of the ray being shaded: the camera for primary rays.
pub fn shade(flags: TraceFlags, lights: &[Light], eye: Vec3, hit: &Hit<'_>) -> Color {
    let material = hit.material();

    // Planes replace both the ambient term and the diffuse base with the grid
    let (base, diffuse_base) = if hit.kind() == PrimitiveKind::Plane {
        let checker = checker_colour(hit.point, material.diffuse());
        (checker, checker)
    } else {
        (material.ambient(), material.diffuse())
    };

    let mut color = if flags.contains(TraceFlags::AMBIENT) {
        base
    } else {
        Color::ZERO
    };

    if flags.contains(TraceFlags::DIFFUSE_AND_SPECULAR) {
        let view = (eye - hit.point).normalized_or_self();
        for light in lights {
            color += light_contribution(light, hit, view, diffuse_base, material);
        }
    }

    color
}

fn light_contribution(
    light: &Light,
    hit: &Hit<'_>,
    view: Vec3,
    diffuse_base: Color,
    material: &Material,
) -> Color {
    let light_vector = (light.position() - hit.point).normalized_or_self();
    let normal = hit.normal;

    let diffuse_intensity = light_vector.dot(normal).max(0.0);
    let diffuse = diffuse_base * light.color() * diffuse_intensity;

    let half_vector = (light_vector + view).normalized_or_self();
    let spec_angle = normal.dot(half_vector);
    let specular = if spec_angle > 0.0 {
        let intensity = spec_angle.powf(material.specular_power() * 5.0);
        material.specular() * light.color() * intensity
    } else {
        Color::ZERO
    };

    diffuse + specular
}

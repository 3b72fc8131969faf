//! Recursive Whitted-style tracing.
//!
//! Each hit is shaded, then optionally spawns one reflected and one
//! refracted ray and is darkened for every light it cannot see.

use tray_core::{Hit, Light, Scene};
use tray_math::{Color, Optics, Ray, Vec3};

use crate::lighting::shade;
use crate::TraceFlags;

/// Default maximum recursion depth for primary rays.
pub const DEFAULT_TRACE_LEVEL: i32 = 5;

/// Ratio of refractive indices used for every refracted ray.
pub const REFRACTIVE_INDEX: f32 = 0.9;

/// Attenuation applied once per occluded light.
pub const SHADOW_FACTOR: Color = Color::new(0.25, 0.25, 0.25);

/// Distance secondary rays are pushed along their direction before tracing,
/// so they do not re-hit the surface they leave.
pub const RAY_OFFSET: f32 = 1e-3;

/// State handed to a secondary ray.
#[derive(Clone, Copy)]
struct TraceParams<'s> {
    start: Vec3,
    scene: &'s Scene,
    /// Colour accumulated so far; returned if the secondary ray escapes
    color: Color,
    depth: i32,
    shadow_ray: bool,
}

/// The recursive tracer: feature flags plus the depth a primary ray starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracer {
    pub flags: TraceFlags,
    pub max_depth: i32,
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new(TraceFlags::default(), DEFAULT_TRACE_LEVEL)
    }
}

impl Tracer {
    pub fn new(flags: TraceFlags, max_depth: i32) -> Self {
        Self { flags, max_depth }
    }

    /// Trace a primary ray, starting from the scene background.
    pub fn trace_primary(&self, scene: &Scene, ray: &Ray) -> Color {
        self.trace(scene, ray, scene.background(), self.max_depth, false)
    }

    /// Colour seen along `ray`.
    ///
    /// `color` is returned unchanged when the depth is exhausted or the ray
    /// misses everything. With `shadow_ray` set only direct lighting is
    /// evaluated.
    pub fn trace(
        &self,
        scene: &Scene,
        ray: &Ray,
        color: Color,
        depth: i32,
        shadow_ray: bool,
    ) -> Color {
        if depth <= 0 {
            return color;
        }

        let Some(hit) = scene.intersect(ray) else {
            return color;
        };

        let mut out = shade(self.flags, scene.lights(), ray.origin(), &hit);
        if shadow_ray {
            return out;
        }

        let kind = hit.kind();

        if self.flags.contains(TraceFlags::REFLECTION) && kind.reflects() {
            let direction = ray.direction().reflected(hit.normal);
            let reflected = self.trace_secondary(&self.params(scene, &hit, out, depth), direction);
            out *= reflected;
        }

        if self.flags.contains(TraceFlags::REFRACTION) && kind.refracts() {
            let direction = ray.direction().refracted(hit.normal, REFRACTIVE_INDEX);
            let refracted = self.trace_secondary(&self.params(scene, &hit, out, depth), direction);
            out = (out + refracted) * 0.5;
        }

        if self.flags.contains(TraceFlags::SHADOW) {
            for light in scene.lights() {
                if is_occluded(scene, light, &hit) {
                    out *= SHADOW_FACTOR;
                }
            }
        }

        out
    }

    fn params<'s>(
        &self,
        scene: &'s Scene,
        hit: &Hit<'_>,
        color: Color,
        depth: i32,
    ) -> TraceParams<'s> {
        TraceParams {
            start: hit.point,
            scene,
            color,
            depth: depth - 1,
            shadow_ray: false,
        }
    }

    fn trace_secondary(&self, params: &TraceParams<'_>, direction: Vec3) -> Color {
        // A zero direction stays zero and the ray hits nothing
        let ray = Ray::new(params.start + direction * RAY_OFFSET, direction);
        self.trace(
            params.scene,
            &ray,
            params.color,
            params.depth,
            params.shadow_ray,
        )
    }
}

/// True if a shadow-casting primitive other than the one at `hit` is the
/// first thing seen from `light` toward the hit point.
fn is_occluded(scene: &Scene, light: &Light, hit: &Hit<'_>) -> bool {
    let shadow_ray = Ray::new(light.position(), hit.point - light.position());

    match scene.intersect(&shadow_ray) {
        Some(occluder) => occluder.kind().casts_shadow() && occluder.id != hit.id,
        None => false,
    }
}

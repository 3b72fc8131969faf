//! Primary ray generation and the render loop.
//!
//! One ray per pixel through the view plane, buckets traced in parallel,
//! results written to the framebuffer once per pixel.

use std::time::Instant;

use rayon::prelude::*;
use tray_core::Scene;
use tray_math::{Color, Ray, Vec3};

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::framebuffer::Framebuffer;
use crate::tracer::{Tracer, DEFAULT_TRACE_LEVEL};
use crate::TraceFlags;

/// The view plane of a scene's camera, sampled at a fixed resolution.
#[derive(Debug, Clone, Copy)]
pub struct ViewPlane {
    eye: Vec3,
    /// World position of the bottom-left corner
    origin: Vec3,
    /// One pixel to the right
    step_x: Vec3,
    /// One pixel up
    step_y: Vec3,
}

impl ViewPlane {
    pub fn new(scene: &Scene, width: u32, height: u32) -> Self {
        let camera = scene.camera();
        let right = camera.right_vector();
        let up = camera.up_vector();
        let (view_width, view_height) = (scene.view_width(), scene.view_height());

        let origin = camera.view_centre() - (right * view_width + up * view_height) / 2.0;

        Self {
            eye: camera.position(),
            origin,
            step_x: right * (view_width / width.max(1) as f32),
            step_y: up * (view_height / height.max(1) as f32),
        }
    }

    /// World position of the centre of pixel (`row`, `col`). Row 0 is the bottom.
    pub fn pixel_position(&self, row: u32, col: u32) -> Vec3 {
        self.origin + self.step_y * (row as f32 + 0.5) + self.step_x * (col as f32 + 0.5)
    }

    /// Ray from the eye through the centre of pixel (`row`, `col`).
    pub fn primary_ray(&self, row: u32, col: u32) -> Ray {
        Ray::new(self.eye, self.pixel_position(row, col) - self.eye)
    }
}

/// Whitted ray tracing engine bound to one framebuffer.
///
/// Configure flags and depth, then call [`RayTracer::render`]. A finished
/// render is not repeated until [`RayTracer::reset`] is called.
#[derive(Debug, Clone)]
pub struct RayTracer {
    framebuffer: Framebuffer,
    tracer: Tracer,
    bucket_size: u32,
    render_count: u32,
}

impl RayTracer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: Framebuffer::new(width, height),
            tracer: Tracer::new(TraceFlags::default(), DEFAULT_TRACE_LEVEL),
            bucket_size: DEFAULT_BUCKET_SIZE,
            render_count: 0,
        }
    }

    pub fn with_flags(mut self, flags: TraceFlags) -> Self {
        self.tracer.flags = flags;
        self
    }

    pub fn with_trace_level(mut self, depth: i32) -> Self {
        self.tracer.max_depth = depth;
        self
    }

    pub fn with_bucket_size(mut self, size: u32) -> Self {
        self.bucket_size = size;
        self
    }

    pub fn set_flags(&mut self, flags: TraceFlags) {
        self.tracer.flags = flags;
    }

    pub fn set_trace_level(&mut self, depth: i32) {
        self.tracer.max_depth = depth;
    }

    pub fn flags(&self) -> TraceFlags {
        self.tracer.flags
    }

    pub fn trace_level(&self) -> i32 {
        self.tracer.max_depth
    }

    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn render_count(&self) -> u32 {
        self.render_count
    }

    /// Trace `ray` with this engine's flags.
    pub fn trace(&self, scene: &Scene, ray: &Ray, color: Color, depth: i32) -> Color {
        self.tracer.trace(scene, ray, color, depth, false)
    }

    /// Render `scene` into the framebuffer.
    ///
    /// Returns `false` without tracing if a render has already completed.
    pub fn render(&mut self, scene: &Scene) -> bool {
        if self.render_count > 0 {
            log::debug!("Render already completed; call reset() to render again");
            return false;
        }

        let (width, height) = (self.framebuffer.width(), self.framebuffer.height());
        log::info!(
            "Tracing {}x{} at depth {} with {:?}",
            width,
            height,
            self.tracer.max_depth,
            self.tracer.flags
        );

        let start = Instant::now();
        let view = ViewPlane::new(scene, width, height);
        let buckets = generate_buckets(width, height, self.bucket_size);
        log::debug!("{} buckets of up to {} px", buckets.len(), self.bucket_size);

        let tracer = &self.tracer;
        let results: Vec<BucketResult> = buckets
            .par_iter()
            .map(|bucket| {
                let pixels = render_bucket(bucket, &view, scene, tracer);
                BucketResult::new(*bucket, pixels)
            })
            .collect();

        for result in &results {
            for (x, y, color) in result.iter() {
                self.framebuffer.write_pixel(color, x, y);
            }
        }

        self.render_count += 1;
        log::info!("Trace finished in {:.2?}", start.elapsed());
        true
    }

    /// Allow the next [`RayTracer::render`] call to trace again.
    pub fn reset(&mut self) {
        self.render_count = 0;
    }
}

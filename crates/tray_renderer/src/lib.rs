//! Tray renderer - recursive CPU ray tracing
//!
//! A Whitted-style tracer: Phong lighting, hard shadows, mirror reflection
//! and refraction with a bounded recursion depth. Primary rays are traced
//! in parallel buckets.

mod bucket;
mod flags;
mod framebuffer;
pub mod lighting;
mod renderer;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use flags::TraceFlags;
pub use framebuffer::{color_to_rgb8, Framebuffer};
pub use renderer::{RayTracer, ViewPlane};
pub use tracer::{Tracer, DEFAULT_TRACE_LEVEL, RAY_OFFSET, REFRACTIVE_INDEX, SHADOW_FACTOR};

/// Re-export the math types used in the public API
pub use tray_math::{Color, Ray, Vec3};

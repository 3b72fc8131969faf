//! Tray Core - scene model and intersection queries.
//!
//! This crate provides:
//!
//! - **Primitives**: planes, spheres and axis-aligned boxes, tagged by `PrimitiveKind`
//! - **Scene**: materials, point lights, the camera and nearest-hit queries
//! - **Scene files**: JSON scene descriptions
//!
//! # Example
//!
//! ```no_run
//! use tray_core::Scene;
//!
//! let scene = Scene::load("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     scene.primitives().len(),
//!     scene.lights().len());
//! # Ok::<(), tray_core::SceneError>(())
//! ```

pub mod camera;
pub mod cuboid;
pub mod description;
pub mod hit;
pub mod scene;
pub mod shape;

// Re-export commonly used types
pub use camera::Camera;
pub use cuboid::Cuboid;
pub use description::{SceneDescription, SceneError, SceneResult};
pub use hit::{Hit, PrimitiveId};
pub use scene::{Light, Material, Primitive, Scene};
pub use shape::{Plane, PrimitiveKind, Shape, Sphere, SurfaceHit};

//! Intersection records returned by the scene.

use tray_math::Vec3;

use crate::scene::{Material, Primitive};
use crate::shape::PrimitiveKind;

/// Index of a primitive within its scene.
///
/// Used as primitive identity, e.g. to keep a surface from shadowing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveId(pub usize);

/// Record of the nearest ray-scene intersection.
///
/// Only exists for an actual hit; a miss is `None` at the query site.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// World-space intersection point
    pub point: Vec3,
    /// Unit surface normal at the point
    pub normal: Vec3,
    /// Distance along the ray
    pub distance: f32,
    /// The primitive that was hit (owned by the scene)
    pub primitive: &'a Primitive,
    /// Identity of the hit primitive
    pub id: PrimitiveId,
}

impl<'a> Hit<'a> {
    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.primitive.kind()
    }

    #[inline]
    pub fn material(&self) -> &'a Material {
        &self.primitive.material
    }
}

//! Primitive shapes and their exact ray intersection routines.

use tray_math::{Interval, Optics, Ray, Vec3};

use crate::cuboid::Cuboid;

/// Closed set of primitive kinds.
///
/// Reflection, refraction and shadow casting are capabilities of the kind,
/// not of the material: planes only ever receive their grid shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Plane,
    Sphere,
    Box,
}

impl PrimitiveKind {
    /// Whether hits on this kind spawn a reflected ray.
    #[inline]
    pub fn reflects(self) -> bool {
        self.is_solid()
    }

    /// Whether hits on this kind spawn a refracted ray.
    #[inline]
    pub fn refracts(self) -> bool {
        self.is_solid()
    }

    /// Whether this kind can occlude a light.
    #[inline]
    pub fn casts_shadow(self) -> bool {
        self.is_solid()
    }

    fn is_solid(self) -> bool {
        matches!(self, PrimitiveKind::Sphere | PrimitiveKind::Box)
    }
}

/// Distance and unit normal of a ray-shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub distance: f32,
    pub normal: Vec3,
}

/// An infinite plane: all points `p` with `normal · p = offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    offset: f32,
}

impl Plane {
    /// Create a plane. The normal is normalised.
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self {
            normal: normal.normalized_or_self(),
            offset,
        }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        let denom = self.normal.dot(ray.direction());

        // Ray is parallel to the plane
        if denom.abs() < 1e-8 {
            return None;
        }

        let t = (self.offset - self.normal.dot(ray.origin())) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(SurfaceHit {
            distance: t,
            normal: self.normal,
        })
    }
}

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Nearest intersection in `ray_t`. A sphere without positive radius is
    /// never hit.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        if self.radius <= 0.0 {
            return None;
        }

        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(SurfaceHit {
            distance: root,
            normal: outward_normal.normalized_or_self(),
        })
    }
}

/// Geometry of a primitive, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Plane(Plane),
    Sphere(Sphere),
    Box(Cuboid),
}

impl Shape {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Shape::Plane(_) => PrimitiveKind::Plane,
            Shape::Sphere(_) => PrimitiveKind::Sphere,
            Shape::Box(_) => PrimitiveKind::Box,
        }
    }

    /// Nearest intersection with `ray` whose distance lies strictly inside `ray_t`.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        match self {
            Shape::Plane(plane) => plane.hit(ray, ray_t),
            Shape::Sphere(sphere) => sphere.hit(ray, ray_t),
            Shape::Box(cuboid) => cuboid.hit(ray, ray_t),
        }
    }
}

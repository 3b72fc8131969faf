//! Axis-aligned box primitive.
//!
//! The box is tessellated into 12 triangles (two per face) and intersected
//! with the Möller-Trumbore algorithm behind a bounding-box reject.

use tray_math::{Aabb, Interval, Ray, Vec3};

use crate::shape::SurfaceHit;

/// One face triangle with its outward normal.
#[derive(Debug, Clone, PartialEq)]
struct Triangle {
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    normal: Vec3,
}

impl Triangle {
    fn new(v0: Vec3, v1: Vec3, v2: Vec3, normal: Vec3) -> Self {
        Self { v0, v1, v2, normal }
    }

    /// Möller-Trumbore ray-triangle intersection algorithm.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction().cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to triangle
        if a.abs() < 1e-8 {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin() - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction().dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        ray_t.surrounds(t).then_some(t)
    }
}

/// An axis-aligned box given by its centre and full extents.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    center: Vec3,
    size: Vec3,
    triangles: Vec<Triangle>,
    bbox: Aabb,
}

impl Cuboid {
    /// Create a box centred at `center` with `size = (width, height, depth)`.
    pub fn new(center: Vec3, size: Vec3) -> Self {
        let size = size.abs();
        let half = size * 0.5;
        let bbox = Aabb::from_points(center - half, center + half);

        let mut triangles = Vec::with_capacity(12);
        for axis in 0..3 {
            let u_axis = (axis + 1) % 3;
            let v_axis = (axis + 2) % 3;
            let e_u = Vec3::AXES[u_axis] * half[u_axis];
            let e_v = Vec3::AXES[v_axis] * half[v_axis];

            for sign in [-1.0, 1.0] {
                let normal = Vec3::AXES[axis] * sign;
                let face_center = center + normal * half[axis];

                let p00 = face_center - e_u - e_v;
                let p10 = face_center + e_u - e_v;
                let p11 = face_center + e_u + e_v;
                let p01 = face_center - e_u + e_v;

                triangles.push(Triangle::new(p00, p10, p11, normal));
                triangles.push(Triangle::new(p00, p11, p01, normal));
            }
        }

        Self {
            center,
            size,
            triangles,
            bbox,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn size(&self) -> Vec3 {
        self.size
    }

    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<SurfaceHit> {
        if !self.bbox.hit(ray, ray_t) {
            return None;
        }

        let mut closest = None;
        let mut search = ray_t;
        for triangle in &self.triangles {
            if let Some(t) = triangle.hit(ray, search) {
                search = search.up_to(t);
                closest = Some(SurfaceHit {
                    distance: t,
                    normal: triangle.normal,
                });
            }
        }

        closest
    }
}

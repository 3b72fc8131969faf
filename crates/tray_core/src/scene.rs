//! Scene types for Tray.
//!
//! A scene owns its primitives, lights and camera, and answers
//! nearest-hit queries for the tracer.

use tray_math::{Color, Interval, Ray, Vec3};

use crate::camera::Camera;
use crate::cuboid::Cuboid;
use crate::hit::{Hit, PrimitiveId};
use crate::shape::{Plane, PrimitiveKind, Shape, Sphere};

/// Phong-style surface material.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Ambient color, the base term before lighting
    pub ambient: Color,

    /// Diffuse color (also the "even" cell color on planes)
    pub diffuse: Color,

    /// Specular highlight color
    pub specular: Color,

    /// Specular exponent (scaled by 5 when shading)
    pub specular_power: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::splat(0.1),
            diffuse: Color::splat(0.5),
            specular: Color::ONE,
            specular_power: 10.0,
        }
    }
}

impl Material {
    pub fn new(ambient: Color, diffuse: Color, specular: Color, specular_power: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            specular_power,
        }
    }

    /// A material with only an ambient and a diffuse color.
    pub fn matte(ambient: Color, diffuse: Color) -> Self {
        Self {
            ambient,
            diffuse,
            specular: Color::ZERO,
            ..Default::default()
        }
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    pub fn specular(&self) -> Color {
        self.specular
    }

    pub fn specular_power(&self) -> f32 {
        self.specular_power
    }
}

/// A point light.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    position: Vec3,
    color: Color,
}

impl Light {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self { position, color }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// A shape paired with its material.
#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub material: Material,
}

impl Primitive {
    pub fn new(shape: Shape, material: Material) -> Self {
        Self { shape, material }
    }

    pub fn plane(normal: Vec3, offset: f32, material: Material) -> Self {
        Self::new(Shape::Plane(Plane::new(normal, offset)), material)
    }

    pub fn sphere(center: Vec3, radius: f32, material: Material) -> Self {
        Self::new(Shape::Sphere(Sphere::new(center, radius)), material)
    }

    pub fn cuboid(center: Vec3, size: Vec3, material: Material) -> Self {
        Self::new(Shape::Box(Cuboid::new(center, size)), material)
    }

    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }
}

/// A complete scene: geometry, lights, camera and view-plane extent.
#[derive(Clone, Debug)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
    camera: Camera,
    background: Color,
    view_width: f32,
    view_height: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl Scene {
    /// Create an empty scene seen through `camera`.
    pub fn new(camera: Camera) -> Self {
        Self {
            primitives: Vec::new(),
            lights: Vec::new(),
            camera,
            background: Color::ZERO,
            view_width: 2.0,
            view_height: 1.5,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the world-space size of the view plane.
    pub fn with_view_size(mut self, width: f32, height: f32) -> Self {
        self.view_width = width;
        self.view_height = height;
        self
    }

    /// Add a primitive and return its ID.
    pub fn add_primitive(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = PrimitiveId(self.primitives.len());
        self.primitives.push(primitive);
        id
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn primitive(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(id.0)
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn view_width(&self) -> f32 {
        self.view_width
    }

    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    /// Find the nearest intersection along `ray` at a strictly positive distance.
    ///
    /// A ray with a zero direction hits nothing.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        if ray.is_degenerate() {
            return None;
        }

        let mut closest = None;
        let mut ray_t = Interval::POSITIVE;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(surface) = primitive.shape.hit(ray, ray_t) {
                ray_t = ray_t.up_to(surface.distance);
                closest = Some(Hit {
                    point: ray.at(surface.distance),
                    normal: surface.normal,
                    distance: surface.distance,
                    primitive,
                    id: PrimitiveId(index),
                });
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_spheres() -> Scene {
        let mut scene = Scene::default();
        scene.add_primitive(Primitive::sphere(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            Material::default(),
        ));
        scene.add_primitive(Primitive::sphere(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::default(),
        ));
        scene
    }

    #[test]
    fn test_add_primitive_ids() {
        let scene = two_spheres();
        assert_eq!(scene.primitives().len(), 2);
        assert!(scene.primitive(PrimitiveId(1)).is_some());
        assert!(scene.primitive(PrimitiveId(2)).is_none());
    }

    #[test]
    fn test_intersect_returns_nearest() {
        let scene = two_spheres();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = scene.intersect(&ray).expect("ray should hit");
        assert_eq!(hit.id, PrimitiveId(1));
        assert!((hit.distance - 4.0).abs() < 0.001);
        assert!((hit.point - Vec3::new(0.0, 0.0, -4.0)).length() < 0.001);
        assert!((hit.normal - Vec3::Z).length() < 0.001);
        assert_eq!(hit.kind(), PrimitiveKind::Sphere);
    }

    #[test]
    fn test_intersect_order_independent() {
        let mut scene = Scene::default();
        scene.add_primitive(Primitive::sphere(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::default(),
        ));
        scene.add_primitive(Primitive::sphere(
            Vec3::new(0.0, 0.0, -10.0),
            1.0,
            Material::default(),
        ));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = scene.intersect(&ray).expect("ray should hit");
        assert_eq!(hit.id, PrimitiveId(0));
    }

    #[test]
    fn test_intersect_miss() {
        let scene = two_spheres();
        assert!(scene.intersect(&Ray::new(Vec3::ZERO, Vec3::Z)).is_none());
    }

    #[test]
    fn test_degenerate_ray_hits_nothing() {
        let mut scene = two_spheres();
        scene.add_primitive(Primitive::plane(Vec3::Y, -1.0, Material::default()));

        // Origin inside the near sphere, no direction
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO);
        assert!(scene.intersect(&ray).is_none());
    }

    #[test]
    fn test_hit_exposes_material() {
        let mut scene = Scene::default();
        let material = Material::matte(Color::splat(0.2), Color::new(1.0, 0.0, 0.0));
        scene.add_primitive(Primitive::cuboid(Vec3::ZERO, Vec3::ONE, material.clone()));

        let hit = scene
            .intersect(&Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z))
            .expect("ray should hit box");
        assert_eq!(hit.kind(), PrimitiveKind::Box);
        assert_eq!(hit.material(), &material);
    }
}

//! JSON scene descriptions.
//!
//! A scene file lists the camera, the view-plane extent, lights and
//! primitives. Vectors are written as `[x, y, z]` arrays.
//!
//! ```json
//! {
//!   "camera": { "position": [0, 2, 10], "look_at": [0, 0, 0] },
//!   "lights": [ { "position": [0, 10, 5] } ],
//!   "primitives": [
//!     { "type": "plane", "normal": [0, 1, 0], "offset": -1 },
//!     { "type": "sphere", "center": [0, 0, 0], "radius": 1,
//!       "material": { "diffuse": [0.8, 0.1, 0.1] } }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tray_math::{Color, Vec3};

use crate::camera::Camera;
use crate::scene::{Light, Material, Primitive, Scene};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid primitive #{index}: {reason}")]
    InvalidPrimitive { index: usize, reason: String },

    #[error("Invalid view: {0}")]
    InvalidView(String),
}

/// Result type for scene loading.
pub type SceneResult<T> = Result<T, SceneError>;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    #[serde(default)]
    pub view: ViewDescription,
    #[serde(default)]
    pub background: [f32; 3],
    #[serde(default)]
    pub lights: Vec<LightDescription>,
    #[serde(default)]
    pub primitives: Vec<PrimitiveDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CameraDescription {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
    #[serde(default = "default_up")]
    pub up: [f32; 3],
    #[serde(default = "default_view_distance")]
    pub view_distance: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewDescription {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewDescription {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 1.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDescription {
    pub position: [f32; 3],
    #[serde(default = "default_light_color")]
    pub color: [f32; 3],
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrimitiveDescription {
    #[serde(flatten)]
    pub shape: ShapeDescription,
    #[serde(default)]
    pub material: MaterialDescription,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDescription {
    Plane { normal: [f32; 3], offset: f32 },
    Sphere { center: [f32; 3], radius: f32 },
    Box { center: [f32; 3], size: [f32; 3] },
}

/// Material fields; anything omitted falls back to `Material::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaterialDescription {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub specular_power: f32,
}

impl Default for MaterialDescription {
    fn default() -> Self {
        let material = Material::default();
        Self {
            ambient: material.ambient.to_array(),
            diffuse: material.diffuse.to_array(),
            specular: material.specular.to_array(),
            specular_power: material.specular_power,
        }
    }
}

impl From<&MaterialDescription> for Material {
    fn from(desc: &MaterialDescription) -> Self {
        Material::new(
            Color::from_array(desc.ambient),
            Color::from_array(desc.diffuse),
            Color::from_array(desc.specular),
            desc.specular_power,
        )
    }
}

fn default_up() -> [f32; 3] {
    [0.0, 1.0, 0.0]
}

fn default_view_distance() -> f32 {
    1.0
}

fn default_light_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

fn invalid(index: usize, reason: &str) -> SceneError {
    SceneError::InvalidPrimitive {
        index,
        reason: reason.to_string(),
    }
}

impl ShapeDescription {
    fn to_primitive(&self, index: usize, material: Material) -> SceneResult<Primitive> {
        match self {
            ShapeDescription::Plane { normal, offset } => {
                let normal = Vec3::from_array(*normal);
                if normal.length_squared() < 1e-8 {
                    return Err(invalid(index, "plane normal must be non-zero"));
                }
                Ok(Primitive::plane(normal, *offset, material))
            }
            ShapeDescription::Sphere { center, radius } => {
                if *radius <= 0.0 {
                    return Err(invalid(index, "sphere radius must be positive"));
                }
                let center = Vec3::from_array(*center);
                Ok(Primitive::sphere(center, *radius, material))
            }
            ShapeDescription::Box { center, size } => {
                if size.iter().any(|extent| *extent <= 0.0) {
                    return Err(invalid(index, "box extents must be positive"));
                }
                Ok(Primitive::cuboid(
                    Vec3::from_array(*center),
                    Vec3::from_array(*size),
                    material,
                ))
            }
        }
    }
}

impl SceneDescription {
    /// Validate the description and build a `Scene`.
    pub fn into_scene(self) -> SceneResult<Scene> {
        if self.view.width <= 0.0 || self.view.height <= 0.0 {
            return Err(SceneError::InvalidView(format!(
                "view extent must be positive, got {}x{}",
                self.view.width, self.view.height
            )));
        }
        if self.camera.view_distance <= 0.0 {
            return Err(SceneError::InvalidView(
                "view distance must be positive".to_string(),
            ));
        }

        let camera = Camera::new(
            Vec3::from_array(self.camera.position),
            Vec3::from_array(self.camera.look_at),
            Vec3::from_array(self.camera.up),
        )
        .with_view_distance(self.camera.view_distance);

        if !camera.has_valid_basis() {
            return Err(SceneError::InvalidView(
                "camera must look away from its position and up must not be parallel to the view"
                    .to_string(),
            ));
        }

        let mut scene = Scene::new(camera)
            .with_background(Color::from_array(self.background))
            .with_view_size(self.view.width, self.view.height);

        for (index, primitive) in self.primitives.iter().enumerate() {
            let material = Material::from(&primitive.material);
            scene.add_primitive(primitive.shape.to_primitive(index, material)?);
        }

        for light in &self.lights {
            scene.add_light(Light::new(
                Vec3::from_array(light.position),
                Color::from_array(light.color),
            ));
        }

        if scene.lights().is_empty() {
            log::warn!("Scene has no lights; only ambient shading will be visible");
        }

        log::debug!(
            "Built scene: {} primitives, {} lights",
            scene.primitives().len(),
            scene.lights().len()
        );

        Ok(scene)
    }
}

impl Scene {
    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(json: &str) -> SceneResult<Scene> {
        let description: SceneDescription = serde_json::from_str(json)?;
        description.into_scene()
    }

    /// Load a scene from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
        let path = path.as_ref();
        log::info!("Loading scene from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::PrimitiveKind;

    const SCENE: &str = r#"{
        "camera": { "position": [0, 2, 10], "look_at": [0, 0, 0] },
        "view": { "width": 4, "height": 3 },
        "background": [0.1, 0.2, 0.3],
        "lights": [ { "position": [0, 10, 5] } ],
        "primitives": [
            { "type": "plane", "normal": [0, 1, 0], "offset": -1 },
            { "type": "sphere", "center": [0, 0, 0], "radius": 1,
              "material": { "diffuse": [0.8, 0.1, 0.1], "specular_power": 4 } },
            { "type": "box", "center": [2, 0, 0], "size": [1, 1, 1] }
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let scene = Scene::from_json_str(SCENE).expect("scene should parse");

        assert_eq!(scene.primitives().len(), 3);
        assert_eq!(scene.lights().len(), 1);
        assert_eq!(scene.lights()[0].color(), Color::ONE);
        assert_eq!(scene.background(), Color::new(0.1, 0.2, 0.3));
        assert_eq!(scene.view_width(), 4.0);
        assert_eq!(scene.view_height(), 3.0);

        let kinds: Vec<_> = scene.primitives().iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![PrimitiveKind::Plane, PrimitiveKind::Sphere, PrimitiveKind::Box]
        );
    }

    #[test]
    fn test_material_defaults_fill_missing_fields() {
        let scene = Scene::from_json_str(SCENE).expect("scene should parse");
        let sphere = &scene.primitives()[1].material;
        let defaults = Material::default();

        assert_eq!(sphere.diffuse, Color::new(0.8, 0.1, 0.1));
        assert_eq!(sphere.specular_power, 4.0);
        assert_eq!(sphere.ambient, defaults.ambient);
        assert_eq!(scene.primitives()[2].material, defaults);
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let json = r#"{
            "camera": { "position": [0, 0, 5], "look_at": [0, 0, 0] },
            "primitives": [ { "type": "sphere", "center": [0, 0, 0], "radius": 0 } ]
        }"#;

        match Scene::from_json_str(json) {
            Err(SceneError::InvalidPrimitive { index, .. }) => assert_eq!(index, 0),
            other => panic!("expected InvalidPrimitive, got {other:?}"),
        }
    }

    #[test]
    fn test_flat_box_rejected() {
        let json = r#"{
            "camera": { "position": [0, 0, 5], "look_at": [0, 0, 0] },
            "primitives": [
                { "type": "sphere", "center": [0, 0, 0], "radius": 1 },
                { "type": "box", "center": [0, 0, 0], "size": [1, 0, 1] }
            ]
        }"#;

        match Scene::from_json_str(json) {
            Err(SceneError::InvalidPrimitive { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidPrimitive, got {other:?}"),
        }
    }

    #[test]
    fn test_degenerate_camera_rejected() {
        let json = r#"{ "camera": { "position": [1, 1, 1], "look_at": [1, 1, 1] } }"#;
        assert!(matches!(
            Scene::from_json_str(json),
            Err(SceneError::InvalidView(_))
        ));
    }

    #[test]
    fn test_unknown_shape_is_json_error() {
        let json = r#"{
            "camera": { "position": [0, 0, 5], "look_at": [0, 0, 0] },
            "primitives": [ { "type": "torus", "center": [0, 0, 0] } ]
        }"#;
        let result = Scene::from_json_str(json);
        assert!(matches!(result, Err(SceneError::Json(_))));
    }

    #[test]
    fn test_bundled_scene_parses() {
        let json = include_str!("../../../scenes/mirror_room.json");
        let scene = Scene::from_json_str(json).expect("bundled scene should parse");

        assert_eq!(scene.primitives().len(), 4);
        assert_eq!(scene.lights()[1].color(), Color::new(0.4, 0.4, 0.6));
        assert_eq!(scene.camera().view_distance(), 2.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            Scene::load("/nonexistent/tray/scene.json"),
            Err(SceneError::Io(_))
        ));
    }
}

//! Pinhole camera: an eye position and an orthonormal view basis.

use tray_math::{Optics, Vec3};

/// Camera for generating primary rays.
///
/// The view plane sits `view_distance` in front of the eye, centred on the
/// view vector. Its extent is a property of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    view: Vec3,
    up: Vec3,
    right: Vec3,
    view_distance: f32,
}

impl Camera {
    /// Create a camera at `position` looking at `look_at`.
    ///
    /// `up` only needs to be roughly up; it is re-orthogonalised against the
    /// view direction.
    pub fn new(position: Vec3, look_at: Vec3, up: Vec3) -> Self {
        let view = (look_at - position).normalized_or_self();
        let right = view.cross(up).normalized_or_self();
        let up = right.cross(view);

        Self {
            position,
            view,
            up,
            right,
            view_distance: 1.0,
        }
    }

    /// Set the distance from the eye to the view plane.
    pub fn with_view_distance(mut self, distance: f32) -> Self {
        self.view_distance = distance;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn view_vector(&self) -> Vec3 {
        self.view
    }

    pub fn up_vector(&self) -> Vec3 {
        self.up
    }

    pub fn right_vector(&self) -> Vec3 {
        self.right
    }

    pub fn view_distance(&self) -> f32 {
        self.view_distance
    }

    /// Centre of the view plane in world space.
    pub fn view_centre(&self) -> Vec3 {
        self.position + self.view * self.view_distance
    }

    /// False when the basis collapsed (looking at itself, or `up` parallel
    /// to the view direction).
    pub fn has_valid_basis(&self) -> bool {
        self.view.length_squared() > 0.5 && self.right.length_squared() > 0.5
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y)
    }
}

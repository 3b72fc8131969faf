//! Reflection, refraction and guarded normalisation on `Vec3`.

use crate::Vec3;

/// Squared norm below which a vector is treated as degenerate.
const DEGENERATE_NORM_SQUARED: f32 = 1.0e-8;

/// Optical helpers used by the tracer.
pub trait Optics {
    /// Normalise, or return the vector unchanged when its norm is near zero.
    fn normalized_or_self(self) -> Self;

    /// Reflect this incident vector about the unit normal `n`.
    fn reflected(self, n: Self) -> Self;

    /// Refract this incident vector through a surface with unit normal `n`
    /// and relative refractive index `eta`.
    ///
    /// The normal may face either way; it is flipped when the vector leaves
    /// the surface. Returns `Vec3::ZERO` on total internal reflection.
    fn refracted(self, n: Self, eta: f32) -> Self;
}

impl Optics for Vec3 {
    #[inline]
    fn normalized_or_self(self) -> Vec3 {
        let length_squared = self.length_squared();
        if length_squared > DEGENERATE_NORM_SQUARED {
            self / length_squared.sqrt()
        } else {
            self
        }
    }

    #[inline]
    fn reflected(self, n: Vec3) -> Vec3 {
        self - 2.0 * self.dot(n) * n
    }

    fn refracted(self, n: Vec3, eta: f32) -> Vec3 {
        let mut cos_i = -self.dot(n);
        let mut normal = n;
        if cos_i < 0.0 {
            normal = -n;
            cos_i = -cos_i;
        }

        let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
        if k < 0.0 {
            return Vec3::ZERO;
        }

        self * eta + normal * (eta * cos_i - k.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vec3::new(3.0, 0.0, 4.0).normalized_or_self();
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!(approx(v, Vec3::new(0.6, 0.0, 0.8)));
    }

    #[test]
    fn test_normalize_zero_vector_is_finite() {
        let v = Vec3::ZERO.normalized_or_self();
        assert_eq!(v, Vec3::ZERO);
        assert!(v.is_finite());

        let tiny = Vec3::new(1e-6, 0.0, 0.0);
        assert_eq!(tiny.normalized_or_self(), tiny);
    }

    #[test]
    fn test_reflect_about_normal() {
        let incoming = Vec3::new(1.0, -1.0, 0.0).normalize();
        let reflected = incoming.reflected(Vec3::Y);
        assert!(approx(reflected, Vec3::new(1.0, 1.0, 0.0).normalize()));
    }

    #[test]
    fn test_refract_head_on_passes_straight() {
        let refracted = Vec3::NEG_Y.refracted(Vec3::Y, 0.9);
        assert!(approx(refracted, Vec3::NEG_Y));
    }

    #[test]
    fn test_refract_bends_toward_normal() {
        // eta < 1 bends the ray toward the normal on entry
        let incoming = Vec3::new(1.0, -1.0, 0.0).normalize();
        let refracted = incoming.refracted(Vec3::Y, 0.9);

        assert!(refracted.y < 0.0);
        assert!(refracted.x < incoming.x);
        assert!((refracted.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_refract_exiting_flips_normal() {
        // Leaving the surface along the normal: same result as entering
        let refracted = Vec3::Y.refracted(Vec3::Y, 0.9);
        assert!(approx(refracted, Vec3::Y));
    }

    #[test]
    fn test_refract_total_internal_reflection_is_zero() {
        // Grazing incidence with eta > 1 cannot refract
        let grazing = Vec3::new(1.0, -0.05, 0.0).normalize();
        assert_eq!(grazing.refracted(Vec3::Y, 1.5), Vec3::ZERO);
    }
}

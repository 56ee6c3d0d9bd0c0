//! Vector helpers for the lighting model.
//!
//! Decoded normals are not guaranteed to be unit length, so every operation
//! here works on raw `DVec3` values and rejects zero-length input instead of
//! dividing by zero.

use crate::error::LightError;
use glam::DVec3;

/// Standard 3-component dot product.
#[inline]
pub fn dot(a: DVec3, b: DVec3) -> f64 {
    a.dot(b)
}

/// Reflect `light` about `normal`: `R = L - 2·N·(L·N)/(N·N)`.
///
/// Dividing by `N·N` keeps the projection correct for non-unit normals.
pub fn reflect(light: DVec3, normal: DVec3) -> Result<DVec3, LightError> {
    let n_dot_n = dot(normal, normal);
    if n_dot_n == 0.0 {
        return Err(LightError::DegenerateVector { pixel: None });
    }
    let projection = normal * (dot(light, normal) / n_dot_n);
    Ok(light - projection * 2.0)
}

/// Scale `v` to unit length.
///
/// Any finite, non-zero vector normalizes; components are pre-scaled by the
/// largest magnitude so the length cannot overflow or underflow.
pub fn normalize(v: DVec3) -> Result<DVec3, LightError> {
    let largest = v.abs().max_element();
    if !v.is_finite() || largest == 0.0 {
        return Err(LightError::DegenerateVector { pixel: None });
    }
    let scaled = v / largest;
    Ok(scaled / scaled.length())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        assert_eq!(dot(DVec3::new(1.0, 2.0, 3.0), DVec3::new(4.0, -5.0, 6.0)), 12.0);
    }

    #[test]
    fn test_reflect_about_unit_normal() {
        // Light along +X against a +Z normal is unchanged.
        let r = reflect(DVec3::X, DVec3::Z).unwrap();
        assert!((r - DVec3::X).length() < 1e-12);

        // Light along +Z against a +Z normal flips.
        let r = reflect(DVec3::Z, DVec3::Z).unwrap();
        assert!((r - DVec3::NEG_Z).length() < 1e-12);
    }

    #[test]
    fn test_reflect_ignores_normal_length() {
        let unit = reflect(DVec3::new(0.6, 0.0, 0.8), DVec3::Z).unwrap();
        let long = reflect(DVec3::new(0.6, 0.0, 0.8), DVec3::Z * 3.5).unwrap();
        assert!((unit - long).length() < 1e-12);
    }

    #[test]
    fn test_reflect_zero_normal() {
        assert_eq!(
            reflect(DVec3::X, DVec3::ZERO),
            Err(LightError::DegenerateVector { pixel: None })
        );
    }

    #[test]
    fn test_normalize() {
        let v = normalize(DVec3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((v.x - 0.6).abs() < 1e-10);
        assert!((v.y - 0.0).abs() < 1e-10);
        assert!((v.z - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_normalize_extreme_magnitudes() {
        let v = normalize(DVec3::new(1e200, 0.0, 0.0)).unwrap();
        assert_eq!(v, DVec3::X);

        let v = normalize(DVec3::new(3e300, 0.0, -4e300)).unwrap();
        assert!((v - DVec3::new(0.6, 0.0, -0.8)).length() < 1e-12);

        let v = normalize(DVec3::new(0.0, 1e-200, 0.0)).unwrap();
        assert_eq!(v, DVec3::Y);
    }

    #[test]
    fn test_normalize_non_finite() {
        assert!(normalize(DVec3::new(f64::INFINITY, 0.0, 0.0)).is_err());
        assert!(normalize(DVec3::new(f64::NAN, 1.0, 0.0)).is_err());
    }

    #[test]
    fn test_normalize_zero() {
        assert!(matches!(
            normalize(DVec3::ZERO),
            Err(LightError::DegenerateVector { .. })
        ));
    }
}

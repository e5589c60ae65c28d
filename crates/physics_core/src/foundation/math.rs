//! Math utilities and types
//!
//! Single-precision nalgebra aliases shared by bodies, shapes and the world.

pub use nalgebra::{Unit, UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Unit quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Builds the orientation increment for a rotation vector via the exponential map.
///
/// The vector's length is the angle in radians and its direction the rotation
/// axis. Returns `None` for a zero vector, where no rotation applies.
pub fn rotation_increment(rotation_vector: Vec3) -> Option<Quat> {
    let angle = rotation_vector.norm();
    if angle == 0.0 {
        return None;
    }
    let axis = Unit::new_normalize(rotation_vector);
    Some(Quat::from_axis_angle(&axis, angle))
}

/// Replaces a vector with exactly zero when its magnitude is below `threshold`.
pub fn snap_to_zero(vector: Vec3, threshold: f32) -> Vec3 {
    if vector.norm() < threshold {
        Vec3::zeros()
    } else {
        vector
    }
}

/// Whether every component of the vector is finite
pub fn is_finite(vector: &Vec3) -> bool {
    vector.iter().all(|component| component.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_increment_zero_vector() {
        assert!(rotation_increment(Vec3::zeros()).is_none());
    }

    #[test]
    fn test_rotation_increment_quarter_turn() {
        let increment = rotation_increment(Vec3::new(0.0, FRAC_PI_2, 0.0)).unwrap();
        assert_relative_eq!(increment.angle(), FRAC_PI_2, epsilon = 1e-6);

        // Quarter turn about +Y maps +X onto -Z
        let rotated = increment * Vec3::x();
        assert_relative_eq!(rotated, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_snap_to_zero() {
        assert_eq!(snap_to_zero(Vec3::new(0.0005, 0.0, 0.0), 0.001), Vec3::zeros());
        let kept = Vec3::new(0.002, 0.0, 0.0);
        assert_eq!(snap_to_zero(kept, 0.001), kept);
    }

    #[test]
    fn test_is_finite() {
        assert!(is_finite(&Vec3::new(1.0, -2.0, 3.0)));
        assert!(!is_finite(&Vec3::new(f32::NAN, 0.0, 0.0)));
        assert!(!is_finite(&Vec3::new(0.0, f32::INFINITY, 0.0)));
    }
}

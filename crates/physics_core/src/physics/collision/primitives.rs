//! Primitive collision volumes and separation measures
//!
//! Every test returns a signed separation: positive when apart, zero when
//! touching, negative when interpenetrating.

use crate::foundation::math::Vec3;

/// A sphere placed in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Creates a new bounding sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Center distance minus radius sum
    pub fn separation(&self, other: &BoundingSphere) -> f32 {
        (self.center - other.center).norm() - (self.radius + other.radius)
    }

    /// Check if this sphere touches or overlaps another
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        self.separation(other) <= 0.0
    }
}

/// An infinite plane in world space; everything behind it counts as inside.
///
/// Points `x` on the plane satisfy `normal · x == offset`. The normal is used
/// as given and is expected to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfSpace {
    /// Outward plane normal
    pub normal: Vec3,
    /// Plane offset along the normal from the world origin
    pub offset: f32,
}

impl HalfSpace {
    /// Plane through `origin` shifted by `constant` along `normal`
    pub fn new(normal: Vec3, origin: Vec3, constant: f32) -> Self {
        Self {
            normal,
            offset: normal.dot(&origin) + constant,
        }
    }

    /// Signed distance of a point from the plane (positive on the normal side)
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) - self.offset
    }

    /// Signed distance of the sphere center minus its radius
    pub fn sphere_separation(&self, sphere: &BoundingSphere) -> f32 {
        self.signed_distance(&sphere.center) - sphere.radius
    }
}

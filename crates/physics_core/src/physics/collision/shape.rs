//! Body-attached collision shapes
//!
//! A [`Shape`] holds geometry relative to its owning body. For a test it is
//! placed at the body's position as a [`WorldSpaceShape`], and pairs are
//! routed through a closed match over every shape combination.

use serde::{Serialize, Deserialize};

use super::primitives::{BoundingSphere, HalfSpace};
use crate::foundation::math::Vec3;

/// Shape type tag used for collision routing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// Infinite plane
    Plane,
    /// Sphere
    Sphere,
}

/// Collision shape types (immutable once built)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Plane through the body's position with the given world-space normal,
    /// shifted by `constant` along that normal
    Plane {
        /// Plane normal, expected unit length
        normal: Vec3,
        /// Offset along the normal from the body position
        constant: f32,
    },
    /// Sphere centered on the body's position
    Sphere {
        /// Sphere radius
        radius: f32,
    },
}

impl Shape {
    /// Creates a plane shape
    pub fn plane(normal: Vec3, constant: f32) -> Self {
        Self::Plane { normal, constant }
    }

    /// Creates a sphere shape with given radius
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Shape type tag
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Plane { .. } => ShapeType::Plane,
            Self::Sphere { .. } => ShapeType::Sphere,
        }
    }

    /// Whether this is a plane
    pub fn is_plane(&self) -> bool {
        self.shape_type() == ShapeType::Plane
    }

    /// Sphere radius, `None` for planes
    pub fn radius(&self) -> Option<f32> {
        match self {
            Self::Sphere { radius } => Some(*radius),
            Self::Plane { .. } => None,
        }
    }

    /// Plane normal, `None` for spheres
    pub fn normal(&self) -> Option<Vec3> {
        match self {
            Self::Plane { normal, .. } => Some(*normal),
            Self::Sphere { .. } => None,
        }
    }

    /// Place this shape at a body position for testing
    pub fn to_world_space(&self, position: Vec3) -> WorldSpaceShape {
        match *self {
            Self::Plane { normal, constant } => {
                WorldSpaceShape::Plane(HalfSpace::new(normal, position, constant))
            }
            Self::Sphere { radius } => {
                WorldSpaceShape::Sphere(BoundingSphere::new(position, radius))
            }
        }
    }
}

/// World-space collision shape (temporary, for testing only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldSpaceShape {
    /// World-space plane
    Plane(HalfSpace),
    /// World-space sphere
    Sphere(BoundingSphere),
}

impl WorldSpaceShape {
    /// Signed separation between two shapes.
    ///
    /// Returns `None` for combinations that are never tested (plane against
    /// plane); otherwise a value `<= 0.0` means the shapes touch or overlap.
    pub fn separation(&self, other: &WorldSpaceShape) -> Option<f32> {
        match (self, other) {
            (Self::Sphere(a), Self::Sphere(b)) => Some(a.separation(b)),

            (Self::Plane(plane), Self::Sphere(sphere)) |
            (Self::Sphere(sphere), Self::Plane(plane)) => Some(plane.sphere_separation(sphere)),

            (Self::Plane(_), Self::Plane(_)) => None,
        }
    }

    /// Test if this shape touches or overlaps another shape
    pub fn intersects(&self, other: &WorldSpaceShape) -> bool {
        self.separation(other).is_some_and(|separation| separation <= 0.0)
    }
}

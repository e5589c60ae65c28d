//! Pairwise overlap detection
//!
//! Every unordered pair of bodies is tested each step; there is no broad
//! phase. The handler only reports overlaps and never moves bodies.

use crate::foundation::collections::{BodyHandle, BodyMap};
use crate::physics::collision::{ShapeType, WorldSpaceShape};
use crate::physics::rigid_body::RigidBody;

/// Two bodies found touching or overlapping during one detection pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPair {
    /// Body that comes first in world iteration order
    pub body_a: BodyHandle,
    /// Body that comes later in world iteration order
    pub body_b: BodyHandle,
    /// Shape type of `body_a`
    pub shape_a: ShapeType,
    /// Shape type of `body_b`
    pub shape_b: ShapeType,
    /// Signed separation (always `<= 0.0` for reported pairs)
    pub separation: f32,
}

impl CollisionPair {
    /// Whether either member is a plane
    pub fn involves_plane(&self) -> bool {
        self.shape_a == ShapeType::Plane || self.shape_b == ShapeType::Plane
    }

    /// Whether the pair refers to the given body
    pub fn contains(&self, body: BodyHandle) -> bool {
        self.body_a == body || self.body_b == body
    }
}

/// Narrow-phase tester run once per world step
#[derive(Debug, Default)]
pub struct CollisionHandler {
    /// Log every reported pair at debug level
    pub debug_enabled: bool,
}

impl CollisionHandler {
    /// Create a new collision handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Test every unordered pair of distinct bodies and return the overlapping ones
    pub fn collide(&self, dt: f32, bodies: &BodyMap<RigidBody>) -> Vec<CollisionPair> {
        let placed: Vec<(BodyHandle, ShapeType, WorldSpaceShape)> = bodies
            .iter()
            .map(|(handle, body)| {
                let shape = body.shape();
                (handle, shape.shape_type(), shape.to_world_space(body.position()))
            })
            .collect();

        let mut pairs = Vec::new();
        for (i, (handle_a, type_a, shape_a)) in placed.iter().enumerate() {
            for (handle_b, type_b, shape_b) in &placed[i + 1..] {
                let Some(separation) = shape_a.separation(shape_b) else {
                    continue;
                };
                if separation > 0.0 {
                    continue;
                }

                if self.debug_enabled {
                    log::debug!(
                        "Overlap {:?} ({:?}) <-> {:?} ({:?}), separation {:.4}",
                        handle_a,
                        type_a,
                        handle_b,
                        type_b,
                        separation
                    );
                }

                pairs.push(CollisionPair {
                    body_a: *handle_a,
                    body_b: *handle_b,
                    shape_a: *type_a,
                    shape_b: *type_b,
                    separation,
                });
            }
        }

        log::trace!(
            "Collision pass (dt = {:.4}): {} bodies, {} overlapping pairs",
            dt,
            placed.len(),
            pairs.len()
        );
        pairs
    }
}

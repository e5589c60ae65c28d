//! Rigid-body physics
//!
//! Bodies are integrated with a split-velocity leapfrog scheme, tested for
//! overlaps pairwise, and overlapping non-plane pairs are reported to a
//! single callback registered with the world.

pub mod collision;
pub mod collision_handler;
pub mod error;
pub mod rigid_body;
pub mod world;

#[cfg(test)]
mod tests;

pub use collision::{Shape, ShapeType};
pub use collision_handler::{CollisionHandler, CollisionPair};
pub use error::PhysicsError;
pub use rigid_body::{RigidBody, RigidBodyDesc};
pub use world::{CollisionCallback, PhysicsWorld, StepReport};

//! # Physics Core
//!
//! A fixed-pipeline rigid-body world stepper: bodies are integrated with a
//! leapfrog scheme, tested pairwise for plane/sphere overlaps, and overlapping
//! pairs are reported to a callback injected at world construction.
//!
//! ## Quick Start
//!
//! ```rust
//! use physics_core::prelude::*;
//!
//! fn main() -> Result<(), PhysicsError> {
//!     let mut world = PhysicsWorld::create(|| log::info!("ball hit"))?;
//!     world.set_gravity(Vec3::new(0.0, -9.81, 0.0));
//!
//!     let ground = RigidBody::create(
//!         RigidBodyDesc::fixed(Vec3::zeros()),
//!         Shape::plane(Vec3::y(), 0.0),
//!     )?;
//!     let ball = RigidBody::create(
//!         RigidBodyDesc::new(1.0).with_position(Vec3::new(0.0, 3.0, 0.0)),
//!         Shape::sphere(0.5),
//!     )?;
//!     world.add_body(ground);
//!     let ball = world.add_body(ball);
//!
//!     for _ in 0..60 {
//!         world.update(1.0 / 60.0);
//!     }
//!     assert!(world.body(ball).unwrap().position().y < 3.0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;

/// Common imports for physics users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PhysicsConfig},
        foundation::{
            collections::BodyHandle,
            math::{Quat, Vec3},
            time::FrameClock,
        },
        physics::{
            CollisionPair, PhysicsError, PhysicsWorld, RigidBody, RigidBodyDesc, Shape, ShapeType,
            StepReport,
        },
    };
}

//! Shape geometry and narrow-phase overlap tests
//!
//! Shapes are stored relative to their owning body and placed into world
//! space only for the duration of a test.
//!
//! # Module Organization
//!
//! - [`primitives`] - World-space primitives (bounding spheres, half-spaces)
//! - [`shape`] - Body-attached shapes and the pairwise dispatch table

pub mod primitives;
pub mod shape;

pub use primitives::{BoundingSphere, HalfSpace};
pub use shape::{Shape, ShapeType, WorldSpaceShape};

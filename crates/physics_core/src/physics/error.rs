//! Physics construction errors

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while building bodies or worlds.
///
/// Stepping never fails; only construction can.
#[derive(Error, Debug)]
pub enum PhysicsError {
    /// A body descriptor holds a value the integrator cannot work with
    #[error("Invalid rigid body descriptor: {0}")]
    InvalidDescriptor(String),

    /// World configuration was rejected
    #[error("World configuration error: {0}")]
    Config(#[from] ConfigError),
}

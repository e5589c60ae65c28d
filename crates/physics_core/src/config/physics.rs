//! World-level physics settings

use serde::{Serialize, Deserialize};

use super::{Config, ConfigError};
use crate::foundation::math::{self, Vec3};

/// # Physics Configuration
///
/// Settings a physics world is built from: world gravity, the magnitude of
/// the diagnostic random impulse, and collision debug logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity applied to every dynamic body each step
    pub gravity: Vec3,
    /// Random impulse components are drawn from `[-range, range]` and scaled by mass
    pub random_impulse_range: f32,
    /// Log every overlapping pair at debug level
    pub debug_collisions: bool,
}

impl PhysicsConfig {
    /// Standard earth gravity along -Y
    pub const EARTH_GRAVITY: f32 = -9.81;

    /// Default symmetric range for the diagnostic random impulse
    pub const DEFAULT_RANDOM_IMPULSE_RANGE: f32 = 50.0;

    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            gravity: Vec3::new(0.0, Self::EARTH_GRAVITY, 0.0),
            random_impulse_range: Self::DEFAULT_RANDOM_IMPULSE_RANGE,
            debug_collisions: false,
        }
    }

    /// Set world gravity
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the random impulse range
    pub fn with_random_impulse_range(mut self, range: f32) -> Self {
        self.random_impulse_range = range;
        self
    }

    /// Enable or disable per-pair collision logging
    pub fn with_debug_collisions(mut self, enabled: bool) -> Self {
        self.debug_collisions = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !math::is_finite(&self.gravity) {
            return Err(ConfigError::InvalidValue {
                field: "gravity",
                reason: format!("components must be finite, got {:?}", self.gravity),
            });
        }

        if !self.random_impulse_range.is_finite() || self.random_impulse_range < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "random_impulse_range",
                reason: format!("must be finite and non-negative, got {}", self.random_impulse_range),
            });
        }

        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for PhysicsConfig {}

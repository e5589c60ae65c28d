//! Scene description for the sandbox driver

use serde::{Serialize, Deserialize};

use physics_core::prelude::*;

/// One body to spawn at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySpec {
    /// Name used in log output
    pub name: String,
    /// Creation descriptor
    #[serde(default)]
    pub desc: RigidBodyDesc,
    /// Attached shape
    pub shape: Shape,
}

/// A scripted scene: world settings, timing, diagnostics and bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// World settings
    pub physics: PhysicsConfig,
    /// Fixed simulation step in seconds
    pub timestep: f32,
    /// Simulated frame length in seconds; frames longer than `timestep` run several steps
    pub frame_time: f32,
    /// Number of frames to run
    pub frames: u32,
    /// Frames on which every body receives a random impulse
    pub random_force_frames: Vec<u32>,
    /// Frames on which every body is reset to its descriptor
    pub reset_frames: Vec<u32>,
    /// Bodies to spawn
    pub bodies: Vec<BodySpec>,
}

impl SceneConfig {
    /// Check timing values before the run starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("timestep", self.timestep), ("frame_time", self.frame_time)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be a positive number of seconds, got {value}"),
                });
            }
        }
        self.physics.validate()
    }

    fn wall(name: &str, position: Vec3, normal: Vec3) -> BodySpec {
        BodySpec {
            name: name.to_string(),
            desc: RigidBodyDesc::fixed(position),
            shape: Shape::plane(normal, 0.0),
        }
    }

    fn ball(name: &str, position: Vec3, radius: f32) -> BodySpec {
        BodySpec {
            name: name.to_string(),
            // Heavier balls are bigger
            desc: RigidBodyDesc::new(radius)
                .with_position(position)
                .with_damping(0.05, 0.98)
                .with_material(0.8, 0.3),
            shape: Shape::sphere(radius),
        }
    }
}

impl Default for SceneConfig {
    /// A walled floor with a handful of balls dropped onto it
    fn default() -> Self {
        let timestep = 1.0 / 60.0;
        let bodies = vec![
            BodySpec {
                desc: RigidBodyDesc::fixed(Vec3::zeros()).with_ground(true),
                ..Self::wall("floor", Vec3::zeros(), Vec3::y())
            },
            Self::wall("wall_east", Vec3::new(10.0, 0.0, 0.0), -Vec3::x()),
            Self::wall("wall_west", Vec3::new(-10.0, 0.0, 0.0), Vec3::x()),
            Self::wall("wall_north", Vec3::new(0.0, 0.0, 10.0), -Vec3::z()),
            Self::wall("wall_south", Vec3::new(0.0, 0.0, -10.0), Vec3::z()),
            Self::ball("ball_large", Vec3::new(0.0, 4.0, 0.0), 1.0),
            Self::ball("ball_medium", Vec3::new(0.5, 6.0, 0.2), 0.6),
            Self::ball("ball_small", Vec3::new(-2.0, 3.0, 1.0), 0.3),
            Self::ball("ball_tiny", Vec3::new(-2.1, 5.0, 1.1), 0.2),
        ];

        Self {
            physics: PhysicsConfig::default(),
            timestep,
            frame_time: timestep,
            frames: 600,
            random_force_frames: vec![120, 300],
            reset_frames: vec![480],
            bodies,
        }
    }
}

impl Config for SceneConfig {}

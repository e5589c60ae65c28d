//! Physics world: body ownership and the per-frame step pipeline

use std::fmt;

use rand::Rng;

use crate::config::PhysicsConfig;
use crate::foundation::collections::{BodyHandle, BodyMap};
use crate::foundation::math::Vec3;
use crate::physics::collision_handler::{CollisionHandler, CollisionPair};
use crate::physics::error::PhysicsError;
use crate::physics::rigid_body::RigidBody;

/// Sink invoked once per qualifying collision pair per step
pub type CollisionCallback = Box<dyn FnMut()>;

/// Outcome of one [`PhysicsWorld::update`] call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    /// Every overlapping pair found this step, planes included
    pub pairs: Vec<CollisionPair>,
    /// How many times the collision callback fired
    pub notifications: usize,
}

/// Owns every simulated body and steps them together.
///
/// Bodies live in a dense arena addressed by [`BodyHandle`]s. Iteration
/// follows insertion order; removing a body moves the last body into its
/// slot.
pub struct PhysicsWorld {
    gravity: Vec3,
    bodies: BodyMap<RigidBody>,
    collision_handler: CollisionHandler,
    on_collision: CollisionCallback,
    random_impulse_range: f32,
}

impl PhysicsWorld {
    /// Create an empty world with zero gravity.
    ///
    /// `on_collision` fires once for every overlapping pair that does not
    /// involve a plane.
    pub fn create(on_collision: impl FnMut() + 'static) -> Result<Self, PhysicsError> {
        let config = PhysicsConfig::new().with_gravity(Vec3::zeros());
        Self::with_config(&config, on_collision)
    }

    /// Create an empty world from a configuration
    pub fn with_config(
        config: &PhysicsConfig,
        on_collision: impl FnMut() + 'static,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;

        let collision_handler = CollisionHandler {
            debug_enabled: config.debug_collisions,
        };

        log::info!(
            "Physics world created (gravity {:?}, random impulse range {})",
            config.gravity,
            config.random_impulse_range
        );

        Ok(Self {
            gravity: config.gravity,
            bodies: BodyMap::with_key(),
            collision_handler,
            on_collision: Box::new(on_collision),
            random_impulse_range: config.random_impulse_range,
        })
    }

    /// Set the gravity applied to every dynamic body
    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    /// World gravity
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Take ownership of a body and return its handle
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        let handle = self.bodies.insert(body);
        log::debug!("Added body {:?} ({} total)", handle, self.bodies.len());
        handle
    }

    /// Destroy a body. Returns `false` if the handle is stale or unknown.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        match self.bodies.remove(handle) {
            Some(_) => {
                log::debug!("Removed body {:?} ({} left)", handle, self.bodies.len());
                true
            }
            None => false,
        }
    }

    /// Whether the handle refers to a live body
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains_key(handle)
    }

    /// Look up a body
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    /// Look up a body mutably, e.g. to apply forces before the next step
    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    /// Number of bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the world holds no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate bodies in world order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        self.bodies.iter()
    }

    /// Collision handler used by [`update`](Self::update)
    pub fn collision_handler(&self) -> &CollisionHandler {
        &self.collision_handler
    }

    /// Mutable access to the collision handler, e.g. to toggle debug logging
    pub fn collision_handler_mut(&mut self) -> &mut CollisionHandler {
        &mut self.collision_handler
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Accelerations are refreshed, velocities advanced by half a step,
    /// positions integrated, overlaps detected and reported, and velocities
    /// advanced by the second half before the force accumulators are cleared.
    pub fn update(&mut self, dt: f32) -> StepReport {
        let half_dt = dt / 2.0;

        for body in self.bodies.values_mut() {
            body.update_acceleration(self.gravity);
        }

        for body in self.bodies.values_mut() {
            body.velocity_half_step(dt);
            body.apply_damping(half_dt);
        }

        for body in self.bodies.values_mut() {
            body.integrate_position(dt);
        }

        let pairs = self.collision_handler.collide(dt, &self.bodies);

        let notifications = pairs.iter().filter(|pair| !pair.involves_plane()).count();
        for _ in 0..notifications {
            (self.on_collision)();
        }

        for body in self.bodies.values_mut() {
            body.velocity_half_step(dt);
            body.apply_damping(half_dt);
            body.kill_forces();
        }

        log::trace!(
            "Stepped {} bodies by {:.4}s: {} pairs, {} notifications",
            self.bodies.len(),
            dt,
            pairs.len(),
            notifications
        );

        StepReport { pairs, notifications }
    }

    /// Kick every body with a random horizontal impulse from the thread RNG
    pub fn apply_random_force(&mut self) {
        self.apply_random_force_with(&mut rand::thread_rng());
    }

    /// Kick every body with a random horizontal impulse drawn from `rng`.
    ///
    /// X and Z are drawn independently from `[-range, range]` and scaled by
    /// the body's mass, so static bodies are unaffected.
    pub fn apply_random_force_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let range = self.random_impulse_range;
        for body in self.bodies.values_mut() {
            let x = rng.gen_range(-range..=range);
            let z = rng.gen_range(-range..=range);
            let mass = body.mass();
            body.apply_impulse(Vec3::new(x * mass, 0.0, z * mass));
        }
        log::debug!("Applied random impulse to {} bodies", self.bodies.len());
    }

    /// Restore every body to its creation descriptor
    pub fn reset_all_rigid_bodies(&mut self) {
        for body in self.bodies.values_mut() {
            body.reset_all();
        }
        log::debug!("Reset {} bodies to their descriptors", self.bodies.len());
    }
}

impl fmt::Debug for PhysicsWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhysicsWorld")
            .field("gravity", &self.gravity)
            .field("bodies", &self.bodies.len())
            .field("collision_handler", &self.collision_handler)
            .field("random_impulse_range", &self.random_impulse_range)
            .finish_non_exhaustive()
    }
}

impl Drop for PhysicsWorld {
    fn drop(&mut self) {
        if !self.bodies.is_empty() {
            log::debug!("Physics world dropped with {} bodies", self.bodies.len());
        }
    }
}

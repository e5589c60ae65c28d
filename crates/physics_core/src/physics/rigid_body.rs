//! Rigid bodies and their per-step integration
//!
//! Each body keeps the descriptor it was created from and can restore itself
//! from it at any time. Motion is integrated with a leapfrog layout driven by
//! [`PhysicsWorld::update`](crate::physics::PhysicsWorld::update):
//!
//! 1. [`RigidBody::update_acceleration`]
//! 2. [`RigidBody::velocity_half_step`] then [`RigidBody::apply_damping`] with `dt / 2`
//! 3. [`RigidBody::integrate_position`]
//! 4. [`RigidBody::velocity_half_step`] then [`RigidBody::apply_damping`] with `dt / 2`
//! 5. [`RigidBody::kill_forces`]
//!
//! Angular acceleration and linear impulses scale by the inverse mass
//! squared rather than by an inertia tensor.

use serde::{Serialize, Deserialize};

use super::collision::Shape;
use super::error::PhysicsError;
use crate::foundation::math::{self, Quat, Vec3};

/// Velocities with a smaller magnitude are snapped to zero after damping
pub const VELOCITY_DEAD_ZONE: f32 = 0.001;

/// Integrated heights below this are treated as having fallen out of the world
pub const FALL_THROUGH_HEIGHT: f32 = -10.0;

/// Height a fallen body is moved back to
pub const RECOVERY_HEIGHT: f32 = 5.0;

/// Allowed deviation of a descriptor rotation's norm from 1
pub const ROTATION_NORM_TOLERANCE: f32 = 1e-4;

/// Initial configuration of a rigid body, retained for reset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigidBodyDesc {
    /// Body never moves; forced on when `mass <= 0`
    pub is_static: bool,
    /// Marks level geometry the player can stand on
    pub is_ground: bool,
    /// Mass in kilograms
    pub mass: f32,
    /// Initial world position
    pub position: Vec3,
    /// Initial orientation
    pub rotation: Quat,
    /// Initial linear velocity
    pub linear_velocity: Vec3,
    /// Initial angular velocity (rotation vector per second)
    pub angular_velocity: Vec3,
    /// Per-axis linear response factor
    pub linear_factor: Vec3,
    /// Per-axis angular response factor
    pub angular_factor: Vec3,
    /// Bounciness coefficient
    pub restitution: f32,
    /// Friction coefficient
    pub friction: f32,
    /// Fraction of linear velocity lost per second
    pub linear_damping: f32,
    /// Scale applied to angular velocity on every damping pass (1.0 keeps it)
    pub angular_damping: f32,
}

impl RigidBodyDesc {
    /// Create a dynamic descriptor with the given mass at the origin
    pub fn new(mass: f32) -> Self {
        Self {
            mass,
            ..Self::default()
        }
    }

    /// Create a static descriptor at `position`
    pub fn fixed(position: Vec3) -> Self {
        Self {
            is_static: true,
            mass: 0.0,
            position,
            ..Self::default()
        }
    }

    /// Set the initial position
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the initial orientation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the initial linear velocity
    pub fn with_linear_velocity(mut self, velocity: Vec3) -> Self {
        self.linear_velocity = velocity;
        self
    }

    /// Set the initial angular velocity
    pub fn with_angular_velocity(mut self, velocity: Vec3) -> Self {
        self.angular_velocity = velocity;
        self
    }

    /// Set linear and angular damping
    pub fn with_damping(mut self, linear: f32, angular: f32) -> Self {
        self.linear_damping = linear;
        self.angular_damping = angular;
        self
    }

    /// Mark the body as ground geometry
    pub fn with_ground(mut self, is_ground: bool) -> Self {
        self.is_ground = is_ground;
        self
    }

    /// Set restitution and friction
    pub fn with_material(mut self, restitution: f32, friction: f32) -> Self {
        self.restitution = restitution;
        self.friction = friction;
        self
    }

    /// Reject values the integrator cannot work with
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let scalars = [
            ("mass", self.mass),
            ("restitution", self.restitution),
            ("friction", self.friction),
            ("linear_damping", self.linear_damping),
            ("angular_damping", self.angular_damping),
        ];
        if let Some((name, value)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(PhysicsError::InvalidDescriptor(format!("{name} is not finite: {value}")));
        }

        let vectors = [
            ("position", &self.position),
            ("linear_velocity", &self.linear_velocity),
            ("angular_velocity", &self.angular_velocity),
            ("linear_factor", &self.linear_factor),
            ("angular_factor", &self.angular_factor),
        ];
        if let Some((name, value)) = vectors.iter().find(|(_, value)| !math::is_finite(value)) {
            return Err(PhysicsError::InvalidDescriptor(format!("{name} is not finite: {value:?}")));
        }

        if !self.rotation.coords.iter().all(|c| c.is_finite()) {
            return Err(PhysicsError::InvalidDescriptor(format!(
                "rotation is not finite: {:?}",
                self.rotation
            )));
        }

        // Unit quaternions deserialize without renormalizing
        let norm = self.rotation.quaternion().norm();
        if (norm - 1.0).abs() > ROTATION_NORM_TOLERANCE {
            return Err(PhysicsError::InvalidDescriptor(format!(
                "rotation is not a unit quaternion (norm {norm})"
            )));
        }

        Ok(())
    }
}

impl Default for RigidBodyDesc {
    fn default() -> Self {
        Self {
            is_static: false,
            is_ground: false,
            mass: 1.0,
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            linear_velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            linear_factor: Vec3::new(1.0, 1.0, 1.0),
            angular_factor: Vec3::new(1.0, 1.0, 1.0),
            restitution: 0.0,
            friction: 0.0,
            linear_damping: 0.0,
            angular_damping: 1.0,
        }
    }
}

/// A simulated body with one attached shape
#[derive(Debug)]
pub struct RigidBody {
    desc: RigidBodyDesc,
    shape: Shape,

    is_static: bool,
    is_ground: bool,
    mass: f32,
    inv_mass: f32,

    position: Vec3,
    previous_position: Vec3,
    rotation: Quat,
    linear_velocity: Vec3,
    angular_velocity: Vec3,
    linear_acceleration: Vec3,
    angular_acceleration: Vec3,

    force: Vec3,
    torque: Vec3,

    linear_factor: Vec3,
    angular_factor: Vec3,
    restitution: f32,
    friction: f32,
    linear_damping: f32,
    angular_damping: f32,
}

impl RigidBody {
    /// Create a body from a descriptor, taking ownership of its shape.
    ///
    /// A static descriptor or `mass <= 0` yields a static body with zero mass
    /// and zero inverse mass.
    pub fn create(desc: RigidBodyDesc, shape: Shape) -> Result<Self, PhysicsError> {
        desc.validate()?;

        let mut body = Self {
            desc,
            shape,
            is_static: false,
            is_ground: false,
            mass: 0.0,
            inv_mass: 0.0,
            position: Vec3::zeros(),
            previous_position: Vec3::zeros(),
            rotation: Quat::identity(),
            linear_velocity: Vec3::zeros(),
            angular_velocity: Vec3::zeros(),
            linear_acceleration: Vec3::zeros(),
            angular_acceleration: Vec3::zeros(),
            force: Vec3::zeros(),
            torque: Vec3::zeros(),
            linear_factor: Vec3::zeros(),
            angular_factor: Vec3::zeros(),
            restitution: 0.0,
            friction: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
        };
        body.load_desc();
        body.previous_position = body.position;

        Ok(body)
    }

    /// Copy every descriptor-backed field into the live state
    fn load_desc(&mut self) {
        let desc = &self.desc;

        self.is_ground = desc.is_ground;
        if desc.is_static || desc.mass <= 0.0 {
            self.is_static = true;
            self.mass = 0.0;
            self.inv_mass = 0.0;
        } else {
            self.is_static = false;
            self.mass = desc.mass;
            self.inv_mass = 1.0 / desc.mass;
        }

        self.restitution = desc.restitution;
        self.friction = desc.friction;
        self.linear_damping = desc.linear_damping;
        self.angular_damping = desc.angular_damping;

        self.position = desc.position;
        self.rotation = desc.rotation;
        self.linear_velocity = desc.linear_velocity;
        self.angular_velocity = desc.angular_velocity;
        self.linear_factor = desc.linear_factor;
        self.angular_factor = desc.angular_factor;
    }

    /// Restore all descriptor-backed state from the retained descriptor
    pub fn reset_all(&mut self) {
        self.load_desc();
    }

    // --- Per-step integration (driven by the world) ---

    /// Recompute accelerations from the accumulators and world gravity
    pub(crate) fn update_acceleration(&mut self, gravity: Vec3) {
        if self.is_static {
            return;
        }

        self.linear_acceleration = self.force * self.inv_mass + gravity;
        self.angular_acceleration = self.torque * self.inv_mass * self.inv_mass;
    }

    /// Advance velocities by half a step of the current accelerations
    pub(crate) fn velocity_half_step(&mut self, dt: f32) {
        if self.is_static {
            return;
        }

        let half_dt = dt * 0.5;
        self.linear_velocity += self.linear_acceleration * half_dt;
        self.angular_velocity += self.angular_acceleration * half_dt;
    }

    /// Damp velocities over `dt` and snap slow ones to rest
    pub(crate) fn apply_damping(&mut self, dt: f32) {
        if self.is_static {
            return;
        }

        self.linear_velocity *= (1.0 - self.linear_damping).powf(dt);
        self.angular_velocity *= self.angular_damping;

        self.linear_velocity = math::snap_to_zero(self.linear_velocity, VELOCITY_DEAD_ZONE);
        self.angular_velocity = math::snap_to_zero(self.angular_velocity, VELOCITY_DEAD_ZONE);
    }

    /// Integrate position and orientation over `dt`
    pub(crate) fn integrate_position(&mut self, dt: f32) {
        if self.is_static {
            return;
        }

        self.previous_position = self.position;
        self.position += (self.linear_velocity + self.linear_acceleration * dt) * dt;

        if self.position.y < FALL_THROUGH_HEIGHT {
            log::debug!(
                "Body fell through the world at {:?}, moving back to y = {}",
                self.position,
                RECOVERY_HEIGHT
            );
            self.position.y = RECOVERY_HEIGHT;
        }

        let rotation_vector = self.angular_velocity + self.angular_acceleration * dt;
        if let Some(increment) = math::rotation_increment(rotation_vector) {
            self.rotation *= increment;
        }
    }

    /// Clear the force and torque accumulators
    pub(crate) fn kill_forces(&mut self) {
        self.force = Vec3::zeros();
        self.torque = Vec3::zeros();
    }

    // --- Forces and impulses ---

    /// Accumulate a force through the center of mass
    pub fn apply_force(&mut self, force: Vec3) {
        self.force += force;
    }

    /// Accumulate a force applied at a point relative to the center of mass
    pub fn apply_force_at_point(&mut self, force: Vec3, relative_point: Vec3) {
        self.apply_force(force);
        self.apply_torque(relative_point.cross(&force));
    }

    /// Accumulate a torque
    pub fn apply_torque(&mut self, torque: Vec3) {
        self.torque += torque;
    }

    /// Change linear velocity immediately
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.linear_velocity += impulse * self.inv_mass * self.inv_mass;
    }

    /// Convert an impulse at a relative point into a torque impulse
    pub fn apply_impulse_at_point(&mut self, impulse: Vec3, relative_point: Vec3) {
        self.apply_torque_impulse(relative_point.cross(&impulse));
    }

    /// Change angular velocity immediately
    pub fn apply_torque_impulse(&mut self, torque_impulse: Vec3) {
        self.angular_velocity += torque_impulse;
    }

    // --- Accessors ---

    /// Descriptor the body was created from
    pub fn desc(&self) -> &RigidBodyDesc {
        &self.desc
    }

    /// Attached collision shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Whether the body is static
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether the body is ground geometry
    pub fn is_ground(&self) -> bool {
        self.is_ground
    }

    /// Mass (0.0 for static bodies)
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Inverse mass (0.0 for static bodies)
    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the body, e.g. when the owning object is teleported
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Position before the last integration
    pub fn previous_position(&self) -> Vec3 {
        self.previous_position
    }

    /// Current orientation
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Set the orientation
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Current linear velocity
    pub fn linear_velocity(&self) -> Vec3 {
        self.linear_velocity
    }

    /// Current angular velocity
    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    /// Linear acceleration from the last update
    pub fn linear_acceleration(&self) -> Vec3 {
        self.linear_acceleration
    }

    /// Angular acceleration from the last update
    pub fn angular_acceleration(&self) -> Vec3 {
        self.angular_acceleration
    }

    /// Accumulated force
    pub fn force(&self) -> Vec3 {
        self.force
    }

    /// Accumulated torque
    pub fn torque(&self) -> Vec3 {
        self.torque
    }

    /// Per-axis linear response factor
    pub fn linear_factor(&self) -> Vec3 {
        self.linear_factor
    }

    /// Per-axis angular response factor
    pub fn angular_factor(&self) -> Vec3 {
        self.angular_factor
    }

    /// Restitution coefficient
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    /// Friction coefficient
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Linear damping fraction
    pub fn linear_damping(&self) -> f32 {
        self.linear_damping
    }

    /// Angular damping scale
    pub fn angular_damping(&self) -> f32 {
        self.angular_damping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    fn ball(mass: f32) -> RigidBody {
        RigidBody::create(RigidBodyDesc::new(mass), Shape::sphere(0.5)).unwrap()
    }

    #[test]
    fn test_create_dynamic() {
        let body = ball(4.0);
        assert!(!body.is_static());
        assert_eq!(body.mass(), 4.0);
        assert_eq!(body.inv_mass(), 0.25);
        assert_eq!(body.shape(), &Shape::sphere(0.5));
        assert_eq!(body.position(), Vec3::zeros());
        assert_eq!(body.previous_position(), Vec3::zeros());
        assert_eq!(body.rotation(), Quat::identity());
    }

    #[test]
    fn test_non_positive_mass_forces_static() {
        for mass in [0.0, -3.0] {
            let body = ball(mass);
            assert!(body.is_static());
            assert_eq!(body.inv_mass(), 0.0);
            assert_eq!(body.mass(), 0.0);
        }
    }

    #[test]
    fn test_static_flag_overrides_mass() {
        let desc = RigidBodyDesc { is_static: true, mass: 10.0, ..RigidBodyDesc::default() };
        let body = RigidBody::create(desc, Shape::plane(Vec3::y(), 0.0)).unwrap();
        assert!(body.is_static());
        assert_eq!(body.inv_mass(), 0.0);
        assert_eq!(body.mass(), 0.0);
        // The descriptor itself is kept as given
        assert_eq!(body.desc().mass, 10.0);
    }

    #[test]
    fn test_create_rejects_non_finite_descriptor() {
        let desc = RigidBodyDesc::new(1.0).with_position(Vec3::new(0.0, f32::NAN, 0.0));
        let result = RigidBody::create(desc, Shape::sphere(1.0));
        assert!(matches!(result, Err(PhysicsError::InvalidDescriptor(_))));

        let desc = RigidBodyDesc::new(f32::INFINITY);
        assert!(RigidBody::create(desc, Shape::sphere(1.0)).is_err());
    }

    #[test]
    fn test_create_rejects_non_unit_rotation() {
        use nalgebra::Quaternion;

        let zero = RigidBodyDesc::new(1.0)
            .with_rotation(Quat::new_unchecked(Quaternion::new(0.0, 0.0, 0.0, 0.0)));
        assert!(matches!(
            RigidBody::create(zero, Shape::sphere(1.0)),
            Err(PhysicsError::InvalidDescriptor(_))
        ));

        let stretched = RigidBodyDesc::new(1.0)
            .with_rotation(Quat::new_unchecked(Quaternion::new(2.0, 0.0, 0.0, 0.0)));
        assert!(RigidBody::create(stretched, Shape::sphere(1.0)).is_err());

        let tilted = RigidBodyDesc::new(1.0)
            .with_rotation(Quat::from_axis_angle(&Vec3::z_axis(), 0.3));
        assert!(RigidBody::create(tilted, Shape::sphere(1.0)).is_ok());
    }

    #[test]
    fn test_descriptor_rotation_from_file_must_be_unit() {
        let desc: RigidBodyDesc = toml::from_str("rotation = [0.0, 0.0, 0.0, 0.5]").unwrap();
        assert!(matches!(desc.validate(), Err(PhysicsError::InvalidDescriptor(_))));
    }

    #[test]
    fn test_update_acceleration_with_gravity_only() {
        let mut body = ball(3.0);
        let gravity = Vec3::new(0.0, -9.81, 0.0);
        body.update_acceleration(gravity);
        assert_eq!(body.linear_acceleration(), gravity);
        assert_eq!(body.angular_acceleration(), Vec3::zeros());
    }

    #[test]
    fn test_update_acceleration_uses_inverse_mass() {
        let mut body = ball(2.0);
        body.apply_force(Vec3::new(4.0, 0.0, 0.0));
        body.apply_torque(Vec3::new(0.0, 8.0, 0.0));
        body.update_acceleration(Vec3::zeros());

        assert_eq!(body.linear_acceleration(), Vec3::new(2.0, 0.0, 0.0));
        // Torque scales by inverse mass squared
        assert_eq!(body.angular_acceleration(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_velocity_half_step() {
        let mut body = ball(1.0);
        body.update_acceleration(Vec3::new(0.0, -10.0, 0.0));
        body.velocity_half_step(0.5);
        assert_eq!(body.linear_velocity(), Vec3::new(0.0, -2.5, 0.0));
        body.velocity_half_step(0.5);
        assert_eq!(body.linear_velocity(), Vec3::new(0.0, -5.0, 0.0));
    }

    #[test]
    fn test_linear_damping_is_exponential_in_dt() {
        let desc = RigidBodyDesc::new(1.0)
            .with_linear_velocity(Vec3::new(4.0, 0.0, 0.0))
            .with_damping(0.75, 1.0);
        let mut body = RigidBody::create(desc, Shape::sphere(1.0)).unwrap();

        body.apply_damping(0.5);
        // (1 - 0.75)^0.5 = 0.5
        assert_relative_eq!(body.linear_velocity().x, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_angular_damping_is_constant_scale() {
        let desc = RigidBodyDesc::new(1.0)
            .with_angular_velocity(Vec3::new(0.0, 2.0, 0.0))
            .with_damping(0.0, 0.5);
        let mut body = RigidBody::create(desc, Shape::sphere(1.0)).unwrap();

        body.apply_damping(0.001);
        assert_eq!(body.angular_velocity(), Vec3::new(0.0, 1.0, 0.0));
        body.apply_damping(10.0);
        assert_eq!(body.angular_velocity(), Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn test_damping_dead_zone() {
        let desc = RigidBodyDesc::new(1.0)
            .with_linear_velocity(Vec3::new(0.0005, 0.0, 0.0005))
            .with_angular_velocity(Vec3::new(0.0, 0.0009, 0.0));
        let mut body = RigidBody::create(desc, Shape::sphere(1.0)).unwrap();

        body.apply_damping(DT * 0.5);
        assert_eq!(body.linear_velocity(), Vec3::zeros());
        assert_eq!(body.angular_velocity(), Vec3::zeros());
    }

    #[test]
    fn test_velocity_above_dead_zone_survives() {
        let desc = RigidBodyDesc::new(1.0).with_linear_velocity(Vec3::new(0.0, 0.0, 0.01));
        let mut body = RigidBody::create(desc, Shape::sphere(1.0)).unwrap();

        body.apply_damping(DT * 0.5);
        assert_eq!(body.linear_velocity(), Vec3::new(0.0, 0.0, 0.01));
    }

    #[test]
    fn test_integrate_position() {
        let desc = RigidBodyDesc::new(1.0)
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_linear_velocity(Vec3::new(2.0, 0.0, 0.0));
        let mut body = RigidBody::create(desc, Shape::sphere(1.0)).unwrap();
        body.update_acceleration(Vec3::new(0.0, -4.0, 0.0));

        body.integrate_position(0.5);
        // (v + a*dt) * dt = ((2, 0, 0) + (0, -2, 0)) * 0.5
        assert_eq!(body.position(), Vec3::new(2.0, 1.0, 3.0));
        assert_eq!(body.previous_position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_fall_through_recovery() {
        let desc = RigidBodyDesc::new(1.0)
            .with_position(Vec3::new(3.0, -9.9, -2.0))
            .with_linear_velocity(Vec3::new(0.0, -60.0, 0.0));
        let mut body = RigidBody::create(desc, Shape::sphere(1.0)).unwrap();

        body.integrate_position(DT);
        assert_eq!(body.position().y, RECOVERY_HEIGHT);
        assert_eq!(body.position().x, 3.0);
        assert_eq!(body.position().z, -2.0);
    }

    #[test]
    fn test_integrate_orientation() {
        let spin = Vec3::new(0.0, std::f32::consts::PI, 0.0);
        let desc = RigidBodyDesc::new(1.0).with_angular_velocity(spin);
        let mut body = RigidBody::create(desc, Shape::sphere(1.0)).unwrap();

        body.integrate_position(1.0);
        let expected = Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::PI);
        assert_relative_eq!(body.rotation().angle_to(&expected), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_orientation_increment_is_body_local() {
        let start = Quat::from_axis_angle(&Vec3::x_axis(), std::f32::consts::FRAC_PI_2);
        let desc = RigidBodyDesc::new(1.0)
            .with_rotation(start)
            .with_angular_velocity(Vec3::new(0.0, 0.5, 0.0));
        let mut body = RigidBody::create(desc, Shape::sphere(1.0)).unwrap();

        body.integrate_position(1.0);
        let expected = start * Quat::from_axis_angle(&Vec3::y_axis(), 0.5);
        assert_relative_eq!(body.rotation().angle_to(&expected), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_static_body_ignores_integration() {
        let desc = RigidBodyDesc::fixed(Vec3::new(0.0, -20.0, 0.0))
            .with_linear_velocity(Vec3::new(1.0, 0.0, 0.0))
            .with_angular_velocity(Vec3::new(0.0, 1.0, 0.0));
        let mut body = RigidBody::create(desc, Shape::sphere(1.0)).unwrap();
        body.apply_force(Vec3::new(100.0, 100.0, 100.0));

        body.update_acceleration(Vec3::new(0.0, -9.81, 0.0));
        body.velocity_half_step(DT);
        body.apply_damping(DT * 0.5);
        body.integrate_position(DT);

        assert_eq!(body.linear_acceleration(), Vec3::zeros());
        assert_eq!(body.position(), Vec3::new(0.0, -20.0, 0.0));
        assert_eq!(body.rotation(), Quat::identity());
        assert_eq!(body.linear_velocity(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_force_at_point_adds_torque() {
        let mut body = ball(1.0);
        body.apply_force_at_point(Vec3::new(0.0, 0.0, 5.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(body.force(), Vec3::new(0.0, 0.0, 5.0));
        // (2, 0, 0) x (0, 0, 5) = (0, -10, 0)
        assert_eq!(body.torque(), Vec3::new(0.0, -10.0, 0.0));
    }

    #[test]
    fn test_forces_accumulate_until_killed() {
        let mut body = ball(1.0);
        body.apply_force(Vec3::new(1.0, 0.0, 0.0));
        body.apply_force(Vec3::new(0.0, 2.0, 0.0));
        body.apply_torque(Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(body.force(), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(body.torque(), Vec3::new(0.0, 0.0, 3.0));

        body.kill_forces();
        assert_eq!(body.force(), Vec3::zeros());
        assert_eq!(body.torque(), Vec3::zeros());
    }

    #[test]
    fn test_impulse_scales_by_inverse_mass_squared() {
        let mut body = ball(2.0);
        body.apply_impulse(Vec3::new(8.0, 0.0, -4.0));
        assert_eq!(body.linear_velocity(), Vec3::new(2.0, 0.0, -1.0));
    }

    #[test]
    fn test_impulse_on_static_body_is_ignored() {
        let mut body = ball(0.0);
        body.apply_impulse(Vec3::new(8.0, 0.0, -4.0));
        assert_eq!(body.linear_velocity(), Vec3::zeros());
    }

    #[test]
    fn test_impulse_at_point_only_spins() {
        let mut body = ball(2.0);
        body.apply_impulse_at_point(Vec3::new(0.0, 3.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(body.linear_velocity(), Vec3::zeros());
        // (1, 0, 0) x (0, 3, 0) = (0, 0, 3)
        assert_eq!(body.angular_velocity(), Vec3::new(0.0, 0.0, 3.0));

        body.apply_torque_impulse(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(body.angular_velocity(), Vec3::new(1.0, 0.0, 3.0));
    }

    #[test]
    fn test_reset_all_restores_descriptor_state() {
        let rotation = Quat::from_axis_angle(&Vec3::z_axis(), 0.3);
        let desc = RigidBodyDesc::new(2.0)
            .with_position(Vec3::new(1.0, 4.0, -1.0))
            .with_rotation(rotation)
            .with_linear_velocity(Vec3::new(0.5, 0.0, 0.0))
            .with_angular_velocity(Vec3::new(0.0, 0.25, 0.0));
        let mut body = RigidBody::create(desc.clone(), Shape::sphere(1.0)).unwrap();

        body.set_position(Vec3::new(9.0, 9.0, 9.0));
        body.set_rotation(Quat::identity());
        body.apply_impulse(Vec3::new(40.0, 40.0, 40.0));
        body.apply_torque_impulse(Vec3::new(3.0, 3.0, 3.0));

        body.reset_all();
        assert_eq!(body.position(), desc.position);
        assert_eq!(body.rotation(), desc.rotation);
        assert_eq!(body.linear_velocity(), desc.linear_velocity);
        assert_eq!(body.angular_velocity(), desc.angular_velocity);
        assert_eq!(body.desc(), &desc);
    }

    #[test]
    fn test_descriptor_serde_defaults() {
        let desc: RigidBodyDesc = toml::from_str("mass = 3.0\nposition = [0.0, 2.0, 0.0]").unwrap();
        assert_eq!(desc.mass, 3.0);
        assert_eq!(desc.position, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(desc.rotation, Quat::identity());
        assert_eq!(desc.angular_damping, 1.0);
    }
}

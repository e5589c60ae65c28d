//! Cross-component tests driving full world steps


use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::math::Vec3;
use crate::physics::{PhysicsWorld, RigidBody, RigidBodyDesc, Shape};

/// World with zero gravity whose callback bumps the returned counter
fn counting_world() -> (PhysicsWorld, Rc<Cell<usize>>) {
    let hits = Rc::new(Cell::new(0));
    let sink = Rc::clone(&hits);
    let world = PhysicsWorld::create(move || sink.set(sink.get() + 1)).unwrap();
    (world, hits)
}

fn sphere(desc: RigidBodyDesc, radius: f32) -> RigidBody {
    RigidBody::create(desc, Shape::sphere(radius)).unwrap()
}

fn ground_plane() -> RigidBody {
    RigidBody::create(
        RigidBodyDesc::fixed(Vec3::zeros()).with_ground(true),
        Shape::plane(Vec3::y(), 0.0),
    )
    .unwrap()
}

//! Headless physics sandbox
//!
//! Loads a scene, drops its bodies into a physics world and steps it for a
//! fixed number of frames. Diagnostic actions (random impulse, reset) fire on
//! the frames the scene lists, and every ball-on-ball hit is counted the way
//! a game would trigger a sound.

mod scene;

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use physics_core::foundation::logging;
use physics_core::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use scene::SceneConfig;

/// Command-line options
#[derive(Debug, Parser)]
#[command(name = "physics_sandbox", about = "Step a rigid-body scene without a renderer")]
struct Args {
    /// Scene file (.toml or .ron); the built-in scene is used when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Override the number of frames to simulate
    #[arg(short, long)]
    frames: Option<u32>,

    /// Seed for the random impulse; the thread RNG is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write the built-in scene to this path and exit
    #[arg(long)]
    write_default: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    if let Some(path) = &args.write_default {
        SceneConfig::default()
            .save_to_file(path)
            .with_context(|| format!("writing default scene to {}", path.display()))?;
        log::info!("Default scene written to {}", path.display());
        return Ok(());
    }

    let mut scene = match &args.scene {
        Some(path) => SceneConfig::load_from_file(path)
            .with_context(|| format!("loading scene {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(frames) = args.frames {
        scene.frames = frames;
    }
    scene.validate().context("invalid scene")?;

    run(&scene, args.seed)
}

fn run(scene: &SceneConfig, seed: Option<u64>) -> anyhow::Result<()> {
    let ball_hits = Rc::new(Cell::new(0_u64));
    let sink = Rc::clone(&ball_hits);
    let mut world = PhysicsWorld::with_config(&scene.physics, move || {
        sink.set(sink.get() + 1);
        log::trace!("ball hit");
    })?;

    let mut names = Vec::with_capacity(scene.bodies.len());
    for spec in &scene.bodies {
        let body = RigidBody::create(spec.desc.clone(), spec.shape)
            .with_context(|| format!("creating body `{}`", spec.name))?;
        let handle = world.add_body(body);
        names.push((handle, spec.name.as_str()));
    }
    log::info!("Spawned {} bodies", world.body_count());

    let mut rng = seed.map(StdRng::seed_from_u64);
    let mut clock = FrameClock::new(scene.timestep);
    let mut overlap_steps = 0_u64;
    let started = Instant::now();

    for frame in 0..scene.frames {
        if scene.random_force_frames.contains(&frame) {
            log::info!("Frame {}: applying random impulse", frame);
            match rng.as_mut() {
                Some(rng) => world.apply_random_force_with(rng),
                None => world.apply_random_force(),
            }
        }
        if scene.reset_frames.contains(&frame) {
            log::info!("Frame {}: resetting all bodies", frame);
            world.reset_all_rigid_bodies();
        }

        for _ in 0..clock.advance(scene.frame_time) {
            let report = world.update(clock.fixed_dt());
            if !report.pairs.is_empty() {
                overlap_steps += 1;
            }
        }
    }

    let elapsed = started.elapsed();
    log::info!(
        "Simulated {} frames ({} steps, {:.2}s of scene time) in {:.2?}",
        clock.frame_count(),
        clock.step_count(),
        clock.total_time(),
        elapsed
    );
    log::info!(
        "Ball hits: {}, steps with overlaps: {}",
        ball_hits.get(),
        overlap_steps
    );

    for (handle, name) in names {
        if let Some(body) = world.body(handle) {
            let p = body.position();
            log::info!(
                "  {:<12} position ({:>7.3}, {:>7.3}, {:>7.3})  speed {:.3}",
                name,
                p.x,
                p.y,
                p.z,
                body.linear_velocity().norm()
            );
        }
    }

    Ok(())
}

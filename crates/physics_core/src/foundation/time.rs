//! Time management utilities

/// Fixed-timestep frame clock.
///
/// Accumulates variable frame deltas and reports how many fixed simulation
/// steps the caller should run for each frame. Leftover time carries over to
/// the next frame; the backlog is capped so a long stall cannot trigger an
/// unbounded burst of steps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    fixed_dt: f32,
    max_steps_per_frame: u32,
    accumulator: f32,
    total_time: f32,
    frame_count: u64,
    step_count: u64,
}

impl FrameClock {
    /// Default cap on fixed steps per frame
    pub const DEFAULT_MAX_STEPS: u32 = 8;

    /// Create a new clock stepping at `fixed_dt` seconds
    pub fn new(fixed_dt: f32) -> Self {
        Self {
            fixed_dt,
            max_steps_per_frame: Self::DEFAULT_MAX_STEPS,
            accumulator: 0.0,
            total_time: 0.0,
            frame_count: 0,
            step_count: 0,
        }
    }

    /// Set the maximum number of fixed steps a single frame may request
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps_per_frame = max_steps.max(1);
        self
    }

    /// Feed one frame's elapsed time and return the number of fixed steps to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.frame_count += 1;
        self.total_time += frame_dt;
        self.accumulator += frame_dt.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.fixed_dt && steps < self.max_steps_per_frame {
            self.accumulator -= self.fixed_dt;
            steps += 1;
        }

        if steps == self.max_steps_per_frame && self.accumulator >= self.fixed_dt {
            log::warn!(
                "Frame clock dropped {:.4}s of backlog after {} steps",
                self.accumulator,
                steps
            );
            self.accumulator = 0.0;
        }

        self.step_count += u64::from(steps);
        steps
    }

    /// Fixed step length in seconds
    pub fn fixed_dt(&self) -> f32 {
        self.fixed_dt
    }

    /// Time carried over to the next frame
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Total time fed into the clock
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of frames fed into the clock
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Number of fixed steps handed out so far
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

//! Variable-timestep frame pacing.
//!
//! The simulation advances by whatever delta the last frame took; the clock
//! scales that delta to the 60 fps reference rate so the scene moves at the
//! same apparent speed on any display. This loop measures the delta, clamps
//! pathological stalls, and keeps the statistics the debug summary reports.

use std::time::Instant;
use tracing::warn;

/// Maximum frame time accepted as real. Longer gaps (a suspended laptop, a
/// debugger pause) are clamped so the scene does not teleport.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Wall-clock frame pacing state.
///
/// Call [`tick`](Self::tick) once per frame; it hands the clamped delta to
/// the frame function exactly once.
pub struct FrameLoop {
    previous_time: Instant,
    frame_count: u64,
    total_time: f64,
}

impl FrameLoop {
    /// Creates a new `FrameLoop` starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            frame_count: 0,
            total_time: 0.0,
        }
    }

    /// Run one frame: measure the elapsed delta, clamp it, and call
    /// `frame_fn(dt)` with the result.
    pub fn tick(&mut self, mut frame_fn: impl FnMut(f64)) {
        let now = Instant::now();
        let mut dt = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;

        if dt > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                dt * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            dt = MAX_FRAME_TIME;
        }

        frame_fn(dt);
        self.frame_count += 1;
        self.total_time += dt;
    }

    /// Returns the total number of frames run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total clamped time handed to the simulation, in seconds.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Average delta over the run so far, in seconds.
    pub fn average_frame_time(&self) -> f64 {
        if self.frame_count == 0 {
            0.0
        } else {
            self.total_time / self.frame_count as f64
        }
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// A testable version of the frame loop that accepts explicit frame times
/// instead of measuring wall-clock time.
#[cfg(test)]
struct TestableFrameLoop {
    frame_count: u64,
    total_time: f64,
}

#[cfg(test)]
impl TestableFrameLoop {
    fn new() -> Self {
        Self {
            frame_count: 0,
            total_time: 0.0,
        }
    }

    fn tick(&mut self, frame_time: f64, mut frame_fn: impl FnMut(f64)) {
        let dt = if frame_time > MAX_FRAME_TIME {
            MAX_FRAME_TIME
        } else {
            frame_time
        };

        frame_fn(dt);
        self.frame_count += 1;
        self.total_time += dt;
    }
}

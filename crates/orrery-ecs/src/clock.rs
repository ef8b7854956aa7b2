//! The simulation clock and its user-adjustable speed settings.

use bevy_ecs::prelude::*;

/// Frame rate the original animation constants were tuned against. Per-tick
/// speed scales are expressed in radians per reference frame; the clock
/// converts wall-clock deltas into reference frames so motion looks the
/// same at any display rate.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Adjustable range for the orbit and rotation speed multipliers.
pub const SPEED_MULTIPLIER_RANGE: (f64, f64) = (0.0, 10.0);
/// Adjustable range for the sun's emissive intensity.
pub const SUN_INTENSITY_RANGE: (f64, f64) = (1.0, 10.0);

/// Process-wide simulation time and speed settings.
///
/// Created once at startup, advanced exactly once per frame, and mutated
/// only by user-input handlers between frames. Never reset mid-session.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Total simulated wall-clock seconds since startup.
    pub elapsed: f64,
    /// Wall-clock seconds covered by the current frame.
    pub delta: f64,
    /// `delta` expressed in reference frames; the factor every per-tick
    /// speed scale is multiplied by.
    pub frame_scale: f64,
    /// Global multiplier on orbital advancement, `[0, 10]`. Selection
    /// pauses orbits by setting this to 0.
    pub orbit_speed_multiplier: f64,
    /// Global multiplier on self-rotation, `[0, 10]`.
    pub rotation_speed_multiplier: f64,
    /// Sun emissive intensity, `[1, 10]`.
    pub sun_intensity: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            frame_scale: 0.0,
            orbit_speed_multiplier: 1.0,
            rotation_speed_multiplier: 1.0,
            sun_intensity: 1.9,
        }
    }
}

impl SimulationClock {
    /// Advance the clock by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.delta = dt;
        self.frame_scale = dt * REFERENCE_FRAME_RATE;
        self.elapsed += dt;
    }

    /// Set the orbit speed multiplier, clamped into `[0, 10]`.
    pub fn set_orbit_speed_multiplier(&mut self, value: f64) {
        let (lo, hi) = SPEED_MULTIPLIER_RANGE;
        self.orbit_speed_multiplier = value.clamp(lo, hi);
    }

    /// Set the rotation speed multiplier, clamped into `[0, 10]`.
    pub fn set_rotation_speed_multiplier(&mut self, value: f64) {
        let (lo, hi) = SPEED_MULTIPLIER_RANGE;
        self.rotation_speed_multiplier = value.clamp(lo, hi);
    }

    /// Set the sun intensity, clamped into `[1, 10]`.
    pub fn set_sun_intensity(&mut self, value: f64) {
        let (lo, hi) = SUN_INTENSITY_RANGE;
        self.sun_intensity = value.clamp(lo, hi);
    }

    /// Total elapsed time in milliseconds. Moon phases are a direct
    /// function of this value rather than an accumulated step.
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed * 1000.0
    }

    /// Per-tick orbital advancement for a body with the given speed scale.
    pub fn orbit_step(&self, speed_scale: f64) -> f64 {
        speed_scale * self.orbit_speed_multiplier * self.frame_scale
    }

    /// Per-tick self-rotation advancement for the given speed scale.
    pub fn rotation_step(&self, speed_scale: f64) -> f64 {
        speed_scale * self.rotation_speed_multiplier * self.frame_scale
    }
}

//! Motion components layered on the core body components.

use bevy_ecs::prelude::*;
use orrery_math::{MoonOrbit, OrbitalElements};

/// Elliptical orbit around the scene origin.
#[derive(Component, Clone, Copy, Debug)]
pub struct OrbitState {
    /// Shape and orientation of the orbit.
    pub elements: OrbitalElements,
    /// Current phase angle, kept wrapped into `[0, 2π)`.
    pub angle: f64,
    /// Radians advanced per reference frame at orbit multiplier 1.
    pub speed_scale: f64,
}

impl OrbitState {
    /// Orbit starting at phase angle 0.
    pub fn new(elements: OrbitalElements, speed_scale: f64) -> Self {
        Self {
            elements,
            angle: 0.0,
            speed_scale,
        }
    }
}

/// Self-rotation about the body's local spin axis.
///
/// The accumulated angle is unbounded: it is only ever turned into a
/// rotation, where extra full turns are harmless, and wrapping it would
/// cause a visible snap for anything mid-interpolation.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SpinState {
    /// Accumulated rotation in radians.
    pub angle: f64,
    /// Radians advanced per reference frame at rotation multiplier 1.
    pub speed_scale: f64,
}

impl SpinState {
    pub fn with_speed(speed_scale: f64) -> Self {
        Self {
            angle: 0.0,
            speed_scale,
        }
    }
}

/// Fixed lean of the spin axis, in radians.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct AxialTilt(pub f64);

/// Circular orbit around a parent body's current position.
#[derive(Component, Clone, Copy, Debug)]
pub struct MoonOf {
    pub parent: Entity,
    pub orbit: MoonOrbit,
}

/// Keeps a decoration (ring, atmosphere shell) at its owner's position.
#[derive(Component, Clone, Copy, Debug)]
pub struct FollowsBody(pub Entity);

/// Marks a body spawned from a fetched catalog record rather than the
/// built-in set.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MinorBody;

/// A rock field revolving as one group about the scene Y axis. The rocks
/// are static in the belt's local frame.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct AsteroidBelt {
    /// Accumulated revolution angle, kept wrapped into `[0, 2π)`.
    pub revolution: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_state_starts_at_phase_zero() {
        let elements = OrbitalElements::circular(100.0).unwrap();
        let orbit = OrbitState::new(elements, 0.01);
        assert_eq!(orbit.angle, 0.0);
        assert_eq!(orbit.speed_scale, 0.01);
    }

    #[test]
    fn test_spin_state_defaults_to_rest() {
        let spin = SpinState::default();
        assert_eq!(spin.angle, 0.0);
        assert_eq!(spin.speed_scale, 0.0);
    }
}

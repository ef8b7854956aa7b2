//! Circular moon orbits around a moving parent body.

use glam::DVec3;

/// Circular orbit of a moon around its parent planet.
///
/// Moons do not use the full element set: a radius, an angular speed, and
/// an optional fixed tilt describe the motion. The orbit center is the
/// parent's *current* position, re-read every tick, so moons track their
/// planet across its ellipse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoonOrbit {
    /// Orbit radius in scene units, measured from the parent center.
    pub radius: f64,
    /// Phase advance in radians per millisecond of wall-clock time. Moons
    /// follow the clock directly and ignore the orbit speed multiplier.
    pub speed: f64,
    /// Fixed tilt of the orbit plane in radians. 0 = parent's equatorial plane.
    pub tilt: f64,
}

impl MoonOrbit {
    /// Flat circular orbit.
    pub fn flat(radius: f64, speed: f64) -> Self {
        Self {
            radius,
            speed,
            tilt: 0.0,
        }
    }

    /// Tilted circular orbit; tilt in radians.
    pub fn tilted(radius: f64, speed: f64, tilt: f64) -> Self {
        Self {
            radius,
            speed,
            tilt,
        }
    }

    /// Offset from the parent's position at the given phase angle.
    ///
    /// The tilt leans the circle out of the XZ plane: the Y component grows
    /// with `sin(tilt)` while the Z component shrinks with `cos(tilt)`, so
    /// the path stays a circle of the configured radius.
    pub fn offset_at(&self, phase: f64) -> DVec3 {
        DVec3::new(
            self.radius * phase.cos(),
            self.radius * phase.sin() * self.tilt.sin(),
            self.radius * phase.sin() * self.tilt.cos(),
        )
    }
}

//! Parametric orbital mechanics and picking-ray primitives for the orrery.
//!
//! Positions come from the classic conic-section radius formula with the
//! orbit phase angle used directly as the anomaly. This is a visual
//! simplification, not an ephemeris. Everything here is pure math with no
//! ECS or renderer dependencies.

mod angles;
mod elements;
mod moon;
mod ray;

pub use angles::{degrees_to_radians, wrap_angle};
pub use elements::{DISPLAY_UNITS_PER_AU, ElementsError, OrbitalElements};
pub use moon::MoonOrbit;
pub use ray::{Ray, SphereTarget, nearest_sphere_hit};

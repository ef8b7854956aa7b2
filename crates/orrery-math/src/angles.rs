//! Angle helpers shared by the propagation and catalog code.

use std::f64::consts::TAU;

/// Wrap an angle into `[0, TAU)`.
///
/// Orbit phase angles are advanced monotonically each tick and wrapped here
/// so they stay well-conditioned over long sessions.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can return TAU itself when the input is a tiny negative
    // number, due to rounding.
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert degrees to radians. Catalog data and fetched records use degrees.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}

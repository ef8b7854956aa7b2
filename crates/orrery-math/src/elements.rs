//! Orbital elements and the parametric position transform.

use crate::angles::degrees_to_radians;

/// Scene units per astronomical unit. Catalog distances are pre-scaled;
/// fetched records arrive in AU and are scaled at construction.
pub const DISPLAY_UNITS_PER_AU: f64 = 100.0;

/// Invalid orbital element combinations rejected at construction.
#[derive(Debug, thiserror::Error)]
pub enum ElementsError {
    /// Eccentricity outside `[0, 1)`. Only bounded orbits are representable.
    #[error("eccentricity {value} outside [0, 1)")]
    Eccentricity { value: f64 },
    /// Semi-major axis must be strictly positive.
    #[error("semi-major axis {value} is not positive")]
    SemiMajorAxis { value: f64 },
    /// Element values must be finite numbers.
    #[error("non-finite element value in field `{field}`")]
    NonFinite { field: &'static str },
}

/// Shape and orientation of one elliptical orbit, in scene units and radians.
///
/// The phase angle is *not* part of the elements: it lives on the body and
/// is fed into [`position_at`](Self::position_at) each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis in scene units.
    pub semi_major_axis: f64,
    /// Eccentricity [0, 1). 0 = circular orbit.
    pub eccentricity: f64,
    /// Inclination in radians relative to the ecliptic plane.
    pub inclination: f64,
    /// Argument of periapsis in radians.
    pub argument_periapsis: f64,
    /// Longitude of ascending node in radians.
    pub longitude_ascending: f64,
}

impl Default for OrbitalElements {
    /// A flat circular orbit at 1 AU display scale, the safe fallback when
    /// a record carries unusable elements.
    fn default() -> Self {
        Self {
            semi_major_axis: DISPLAY_UNITS_PER_AU,
            eccentricity: 0.0,
            inclination: 0.0,
            argument_periapsis: 0.0,
            longitude_ascending: 0.0,
        }
    }
}

impl OrbitalElements {
    /// Validate and construct a full element set. Angles in radians.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        argument_periapsis: f64,
        longitude_ascending: f64,
    ) -> Result<Self, ElementsError> {
        let elements = Self {
            semi_major_axis,
            eccentricity,
            inclination,
            argument_periapsis,
            longitude_ascending,
        };
        elements.validate()?;
        Ok(elements)
    }

    /// A flat circular orbit of the given radius. Always valid for
    /// `radius > 0`; this is also the safe fallback shape when a record
    /// carries unusable elements.
    pub fn circular(radius: f64) -> Result<Self, ElementsError> {
        Self::new(radius, 0.0, 0.0, 0.0, 0.0)
    }

    /// Construct from a data record: distance in AU, angles in degrees.
    pub fn from_au_degrees(
        semi_major_axis_au: f64,
        eccentricity: f64,
        inclination_deg: f64,
        argument_periapsis_deg: f64,
        longitude_ascending_deg: f64,
    ) -> Result<Self, ElementsError> {
        Self::new(
            semi_major_axis_au * DISPLAY_UNITS_PER_AU,
            eccentricity,
            degrees_to_radians(inclination_deg),
            degrees_to_radians(argument_periapsis_deg),
            degrees_to_radians(longitude_ascending_deg),
        )
    }

    fn validate(&self) -> Result<(), ElementsError> {
        for (field, value) in [
            ("semi_major_axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("argument_periapsis", self.argument_periapsis),
            ("longitude_ascending", self.longitude_ascending),
        ] {
            if !value.is_finite() {
                return Err(ElementsError::NonFinite { field });
            }
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ElementsError::Eccentricity {
                value: self.eccentricity,
            });
        }
        if self.semi_major_axis <= 0.0 {
            return Err(ElementsError::SemiMajorAxis {
                value: self.semi_major_axis,
            });
        }
        Ok(())
    }

    /// Orbit radius at the given phase angle: `a(1 - e²) / (1 + e cos θ)`.
    ///
    /// The phase angle is used directly as the anomaly. With `e < 1` the
    /// denominator stays positive, so the radius is finite for every angle
    /// and bounded by `[a(1-e), a(1+e)]`.
    pub fn radius_at(&self, angle: f64) -> f64 {
        let e = self.eccentricity;
        self.semi_major_axis * (1.0 - e * e) / (1.0 + e * angle.cos())
    }

    /// Periapsis distance `a(1 - e)`.
    pub fn periapsis_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Apoapsis distance `a(1 + e)`.
    pub fn apoapsis_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Scene-space position at the given phase angle.
    ///
    /// Computes the in-plane point, then rotates it by inclination, argument
    /// of periapsis, and longitude of ascending node. The scene frame is
    /// Y-up: the ecliptic lies in the XZ plane and inclination lifts the
    /// orbit along Y.
    pub fn position_at(&self, angle: f64) -> glam::DVec3 {
        let r = self.radius_at(angle);

        // Position in the orbital plane.
        let x_orb = r * angle.cos();
        let y_orb = r * angle.sin();

        // Rotate into 3D space using orbital elements.
        let cos_o = self.longitude_ascending.cos();
        let sin_o = self.longitude_ascending.sin();
        let cos_i = self.inclination.cos();
        let sin_i = self.inclination.sin();
        let cos_w = self.argument_periapsis.cos();
        let sin_w = self.argument_periapsis.sin();

        let x = x_orb * (cos_o * cos_w - sin_o * sin_w * cos_i)
            - y_orb * (cos_o * sin_w + sin_o * cos_w * cos_i);
        let y = x_orb * (sin_o * cos_w + cos_o * sin_w * cos_i)
            - y_orb * (sin_o * sin_w - cos_o * cos_w * cos_i);
        let z = x_orb * (sin_w * sin_i) + y_orb * (cos_w * sin_i);

        // Out-of-plane component becomes scene Y.
        glam::DVec3::new(x, z, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn flat_circle(a: f64) -> OrbitalElements {
        OrbitalElements::circular(a).unwrap()
    }

    #[test]
    fn test_position_is_deterministic() {
        let orbit = OrbitalElements::new(152.4, 0.09, 0.1, 1.2, 0.7).unwrap();
        let a = orbit.position_at(2.3);
        let b = orbit.position_at(2.3);
        assert_eq!(a, b, "same angle must yield the same position");
    }

    #[test]
    fn test_reference_circle_lands_on_x_axis() {
        let orbit = flat_circle(100.0);
        let pos = orbit.position_at(0.0);
        assert!((pos.x - 100.0).abs() < 1e-9, "x = {}", pos.x);
        assert!(pos.y.abs() < 1e-9, "y = {}", pos.y);
        assert!(pos.z.abs() < 1e-9, "z = {}", pos.z);
    }

    #[test]
    fn test_full_turn_returns_to_start() {
        let orbit = OrbitalElements::new(100.0, 0.3, 0.2, 0.9, 1.5).unwrap();
        let start = orbit.position_at(0.25);
        let after = orbit.position_at(0.25 + TAU);
        let dist = (after - start).length();
        assert!(dist < 1e-9, "drift after full turn = {dist}");
    }

    #[test]
    fn test_radius_stays_within_conic_bounds() {
        for &e in &[0.0, 0.2, 0.5, 0.9, 0.99] {
            let orbit = OrbitalElements::new(100.0, e, 0.0, 0.0, 0.0).unwrap();
            let lo = orbit.periapsis_radius();
            let hi = orbit.apoapsis_radius();
            for i in 0..256 {
                let angle = (i as f64 / 256.0) * TAU;
                let r = orbit.radius_at(angle);
                assert!(
                    r >= lo - 1e-9 && r <= hi + 1e-9,
                    "e={e} angle={angle}: r={r} outside [{lo}, {hi}]"
                );
                assert!(r.is_finite(), "e={e} angle={angle}: r not finite");
            }
        }
    }

    #[test]
    fn test_high_eccentricity_extremes() {
        let orbit = OrbitalElements::new(100.0, 0.9, 0.0, 0.0, 0.0).unwrap();
        // Periapsis at angle 0, apoapsis at angle PI.
        let near = orbit.radius_at(0.0);
        let far = orbit.radius_at(std::f64::consts::PI);
        assert!((near - 10.0).abs() < 1e-9, "periapsis = {near}");
        assert!((far - 190.0).abs() < 1e-9, "apoapsis = {far}");
    }

    #[test]
    fn test_inclination_lifts_orbit_out_of_plane() {
        let flat = flat_circle(100.0);
        let tilted = OrbitalElements::new(100.0, 0.0, 0.5, 0.0, 0.0).unwrap();

        let flat_pos = flat.position_at(std::f64::consts::FRAC_PI_2);
        let tilted_pos = tilted.position_at(std::f64::consts::FRAC_PI_2);
        assert!(flat_pos.y.abs() < 1e-9, "flat orbit off plane: {}", flat_pos.y);
        assert!(
            (tilted_pos.y - 100.0 * 0.5f64.sin()).abs() < 1e-9,
            "tilted y = {}",
            tilted_pos.y
        );
    }

    #[test]
    fn test_rejects_out_of_range_elements() {
        assert!(matches!(
            OrbitalElements::new(100.0, 1.0, 0.0, 0.0, 0.0),
            Err(ElementsError::Eccentricity { .. })
        ));
        assert!(matches!(
            OrbitalElements::new(100.0, -0.1, 0.0, 0.0, 0.0),
            Err(ElementsError::Eccentricity { .. })
        ));
        assert!(matches!(
            OrbitalElements::new(0.0, 0.1, 0.0, 0.0, 0.0),
            Err(ElementsError::SemiMajorAxis { .. })
        ));
        assert!(matches!(
            OrbitalElements::new(f64::NAN, 0.1, 0.0, 0.0, 0.0),
            Err(ElementsError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_from_au_degrees_applies_display_scale() {
        let orbit = OrbitalElements::from_au_degrees(1.0, 0.0167, 0.0, 102.9, 0.0).unwrap();
        assert!(
            (orbit.semi_major_axis - DISPLAY_UNITS_PER_AU).abs() < 1e-9,
            "a = {}",
            orbit.semi_major_axis
        );
        assert!(
            (orbit.argument_periapsis - degrees_to_radians(102.9)).abs() < 1e-12,
            "w = {}",
            orbit.argument_periapsis
        );
    }
}

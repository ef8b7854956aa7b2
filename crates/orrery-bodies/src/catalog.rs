//! The built-in body catalog: the default solar system spawned at startup.
//!
//! Distances are display units (100 per AU), radii are display units,
//! tilts are degrees, and speed scales are radians per reference frame.
//! Orbit speeds derive from the body's period so one Earth year takes the
//! same wall-clock time at every display rate.

/// Base orbital speed: radians per reference frame for a one-year period.
pub const ORBIT_SPEED_BASE: f64 = 0.01;

/// How far an atmosphere shell sits above its planet's surface.
pub const ATMOSPHERE_SHELL_MARGIN: f64 = 0.1;

/// A planetary ring, drawn as a flat annulus around the planet.
#[derive(Clone, Copy, Debug)]
pub struct RingSpec {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub texture: &'static str,
}

/// A translucent haze shell around a planet. Pickable; hits resolve to the
/// owning planet.
#[derive(Clone, Copy, Debug)]
pub struct AtmosphereSpec {
    pub texture: &'static str,
    /// The haze rotates independently of the surface underneath.
    pub spin_step: f64,
}

/// One moon on a circular orbit around its planet.
#[derive(Clone, Copy, Debug)]
pub struct MoonSpec {
    pub name: &'static str,
    /// Sphere radius when no mesh is given; ignored for mesh moons.
    pub radius: f64,
    pub orbit_radius: f64,
    /// Phase advance in radians per millisecond of wall-clock time.
    pub orbit_speed: f64,
    /// Tilt of the orbit plane in degrees.
    pub tilt_deg: f64,
    pub spin_step: f64,
    pub texture: Option<&'static str>,
    /// A model to load asynchronously; the moon attaches once it arrives.
    pub mesh: Option<&'static str>,
}

/// One planet of the built-in set.
#[derive(Clone, Copy, Debug)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub radius: f64,
    /// Circular orbit radius in display units (semi-major axis × 100/AU).
    pub orbit_radius: f64,
    pub period_years: f64,
    pub axial_tilt_deg: f64,
    pub spin_step: f64,
    /// Camera distance when this body is selected.
    pub view_offset: f64,
    pub texture: &'static str,
    pub ring: Option<RingSpec>,
    pub atmosphere: Option<AtmosphereSpec>,
    pub moons: &'static [MoonSpec],
}

impl PlanetSpec {
    /// Orbit phase advance per reference frame at multiplier 1.
    pub fn orbit_speed_scale(&self) -> f64 {
        ORBIT_SPEED_BASE / self.period_years
    }
}

/// The central star.
#[derive(Clone, Copy, Debug)]
pub struct SunSpec {
    pub radius: f64,
    pub spin_step: f64,
    pub view_offset: f64,
    pub texture: &'static str,
}

/// One deterministic rock belt.
#[derive(Clone, Copy, Debug)]
pub struct BeltSpec {
    pub label: &'static str,
    pub seed: u64,
    pub rock_count: u32,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

pub const SUN: SunSpec = SunSpec {
    radius: 697.0 / 40.0,
    spin_step: 0.001,
    view_offset: 40.0,
    texture: "images/sun.jpg",
};

const EARTH_MOONS: [MoonSpec; 1] = [MoonSpec {
    name: "Moon",
    radius: 1.6,
    orbit_radius: 10.0,
    orbit_speed: 0.001,
    tilt_deg: 5.0,
    spin_step: 0.01,
    texture: Some("images/moon.jpg"),
    mesh: None,
}];

const MARS_MOONS: [MoonSpec; 2] = [
    MoonSpec {
        name: "Phobos",
        radius: 1.0,
        orbit_radius: 5.0,
        orbit_speed: 0.002,
        tilt_deg: 0.0,
        spin_step: 0.001,
        texture: None,
        mesh: Some("models/phobos.glb"),
    },
    MoonSpec {
        name: "Deimos",
        radius: 1.0,
        orbit_radius: 9.0,
        orbit_speed: 0.0005,
        tilt_deg: 0.0,
        spin_step: 0.001,
        texture: None,
        mesh: Some("models/deimos.glb"),
    },
];

const JUPITER_MOONS: [MoonSpec; 4] = [
    MoonSpec {
        name: "Io",
        radius: 1.8,
        orbit_radius: 20.0,
        orbit_speed: 0.0005,
        tilt_deg: 0.0,
        spin_step: 0.01,
        texture: None,
        mesh: None,
    },
    MoonSpec {
        name: "Europa",
        radius: 1.6,
        orbit_radius: 24.0,
        orbit_speed: 0.00025,
        tilt_deg: 0.0,
        spin_step: 0.01,
        texture: None,
        mesh: None,
    },
    MoonSpec {
        name: "Ganymede",
        radius: 2.6,
        orbit_radius: 28.0,
        orbit_speed: 0.000125,
        tilt_deg: 0.0,
        spin_step: 0.01,
        texture: None,
        mesh: None,
    },
    MoonSpec {
        name: "Callisto",
        radius: 2.4,
        orbit_radius: 32.0,
        orbit_speed: 0.00006,
        tilt_deg: 0.0,
        spin_step: 0.01,
        texture: None,
        mesh: None,
    },
];

pub const PLANETS: [PlanetSpec; 9] = [
    PlanetSpec {
        name: "Mercury",
        radius: 2.4,
        orbit_radius: 100.0 * 0.387,
        period_years: 0.241,
        axial_tilt_deg: 0.0,
        spin_step: 0.001,
        view_offset: 10.0,
        texture: "images/mercury.jpg",
        ring: None,
        atmosphere: None,
        moons: &[],
    },
    PlanetSpec {
        name: "Venus",
        radius: 6.1,
        orbit_radius: 100.0 * 0.723,
        period_years: 0.615,
        axial_tilt_deg: 3.0,
        spin_step: 0.0005,
        view_offset: 25.0,
        texture: "images/venus.jpg",
        ring: None,
        atmosphere: Some(AtmosphereSpec {
            texture: "images/venus_atmosphere.jpg",
            spin_step: 0.0005,
        }),
        moons: &[],
    },
    PlanetSpec {
        name: "Earth",
        radius: 6.4,
        orbit_radius: 100.0,
        period_years: 1.0,
        axial_tilt_deg: 23.0,
        spin_step: 0.005,
        view_offset: 25.0,
        texture: "images/earth.jpg",
        ring: None,
        atmosphere: Some(AtmosphereSpec {
            texture: "images/earth_atmosphere.jpg",
            spin_step: 0.001,
        }),
        moons: &EARTH_MOONS,
    },
    PlanetSpec {
        name: "Mars",
        radius: 3.4,
        orbit_radius: 100.0 * 1.524,
        period_years: 1.881,
        axial_tilt_deg: 25.0,
        spin_step: 0.01,
        view_offset: 15.0,
        texture: "images/mars.jpg",
        ring: None,
        atmosphere: None,
        moons: &MARS_MOONS,
    },
    PlanetSpec {
        name: "Jupiter",
        radius: 69.0 / 4.0,
        orbit_radius: 100.0 * 5.203,
        period_years: 11.862,
        axial_tilt_deg: 3.0,
        spin_step: 0.005,
        view_offset: 50.0,
        texture: "images/jupiter.jpg",
        ring: None,
        atmosphere: None,
        moons: &JUPITER_MOONS,
    },
    PlanetSpec {
        name: "Saturn",
        radius: 58.0 / 4.0,
        orbit_radius: 100.0 * 9.537,
        period_years: 29.457,
        axial_tilt_deg: 26.0,
        spin_step: 0.01,
        view_offset: 50.0,
        texture: "images/saturn.jpg",
        ring: Some(RingSpec {
            inner_radius: 18.0,
            outer_radius: 29.0,
            texture: "images/saturn_ring.png",
        }),
        atmosphere: None,
        moons: &[],
    },
    PlanetSpec {
        name: "Uranus",
        radius: 25.0 / 4.0,
        orbit_radius: 100.0 * 19.191,
        period_years: 84.011,
        axial_tilt_deg: 82.0,
        spin_step: 0.005,
        view_offset: 25.0,
        texture: "images/uranus.jpg",
        ring: Some(RingSpec {
            inner_radius: 6.6,
            outer_radius: 10.0,
            texture: "images/uranus_ring.png",
        }),
        atmosphere: None,
        moons: &[],
    },
    PlanetSpec {
        name: "Neptune",
        radius: 24.0 / 4.0,
        orbit_radius: 100.0 * 30.069,
        period_years: 164.79,
        axial_tilt_deg: 28.0,
        spin_step: 0.005,
        view_offset: 20.0,
        texture: "images/neptune.jpg",
        ring: None,
        atmosphere: None,
        moons: &[],
    },
    PlanetSpec {
        name: "Pluto",
        radius: 1.0,
        orbit_radius: 100.0 * 39.069,
        period_years: 247.94,
        axial_tilt_deg: 57.0,
        spin_step: 0.001,
        view_offset: 10.0,
        texture: "images/pluto.jpg",
        ring: None,
        atmosphere: None,
        moons: &[],
    },
];

pub const BELTS: [BeltSpec; 2] = [
    BeltSpec {
        label: "main belt",
        seed: 7,
        rock_count: 1000,
        inner_radius: 210.0,
        outer_radius: 250.0,
    },
    BeltSpec {
        label: "kuiper belt",
        seed: 8,
        rock_count: 3000,
        inner_radius: 352.0,
        outer_radius: 370.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_math::OrbitalElements;

    #[test]
    fn test_every_planet_yields_valid_elements() {
        for spec in &PLANETS {
            assert!(
                OrbitalElements::circular(spec.orbit_radius).is_ok(),
                "{} has an unusable orbit radius {}",
                spec.name,
                spec.orbit_radius
            );
            assert!(spec.period_years > 0.0, "{} period", spec.name);
            assert!(spec.radius > 0.0, "{} radius", spec.name);
            assert!(spec.view_offset > 0.0, "{} view offset", spec.name);
        }
    }

    #[test]
    fn test_planet_names_are_unique() {
        let mut names: Vec<&str> = PLANETS.iter().map(|p| p.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PLANETS.len());
    }

    #[test]
    fn test_orbit_radii_increase_outward() {
        for pair in PLANETS.windows(2) {
            assert!(
                pair[0].orbit_radius < pair[1].orbit_radius,
                "{} should orbit inside {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn test_orbit_speed_falls_with_period() {
        let mercury = &PLANETS[0];
        let pluto = &PLANETS[8];
        assert!(mercury.orbit_speed_scale() > pluto.orbit_speed_scale());
        assert!((PLANETS[2].orbit_speed_scale() - ORBIT_SPEED_BASE).abs() < 1e-12);
    }

    #[test]
    fn test_decorations_sit_on_expected_planets() {
        let by_name = |name: &str| {
            PLANETS
                .iter()
                .find(|p| p.name == name)
                .unwrap_or_else(|| panic!("{name} missing from catalog"))
        };

        assert!(by_name("Saturn").ring.is_some());
        assert!(by_name("Uranus").ring.is_some());
        assert!(by_name("Venus").atmosphere.is_some());
        assert!(by_name("Earth").atmosphere.is_some());
        assert_eq!(by_name("Earth").moons.len(), 1);
        assert_eq!(by_name("Mars").moons.len(), 2);
        assert_eq!(by_name("Jupiter").moons.len(), 4);
        assert!(
            by_name("Mars").moons.iter().all(|m| m.mesh.is_some()),
            "Mars moons load from models"
        );
        assert!(by_name("Jupiter").moons.iter().all(|m| m.mesh.is_none()));
    }

    #[test]
    fn test_belt_bands_do_not_overlap_planets_inward() {
        for belt in &BELTS {
            assert!(belt.inner_radius < belt.outer_radius, "{}", belt.label);
            assert!(belt.rock_count > 0, "{}", belt.label);
        }
        assert_eq!(BELTS[0].rock_count, 1000);
        assert_eq!(BELTS[1].rock_count, 3000);
    }
}

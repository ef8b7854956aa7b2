//! Orbit path polylines and habitable-zone bands.

use glam::DVec3;
use orrery_math::OrbitalElements;

/// Segments per orbit path. The path is handed to the renderer once at
/// startup as a closed polyline.
pub const ORBIT_PATH_SEGMENTS: usize = 100;

/// Sample a closed polyline along an orbit.
///
/// Uses the same parametric transform the propagation uses, so the drawn
/// path and the body's motion always coincide. The last point repeats the
/// first to close the loop.
pub fn orbit_path_points(elements: &OrbitalElements) -> Vec<DVec3> {
    let mut points = Vec::with_capacity(ORBIT_PATH_SEGMENTS + 1);
    for i in 0..=ORBIT_PATH_SEGMENTS {
        let angle = (i as f64 / ORBIT_PATH_SEGMENTS as f64) * std::f64::consts::TAU;
        points.push(elements.position_at(angle));
    }
    points
}

/// One habitable-zone annulus at display scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneBand {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub label: &'static str,
}

/// The three classical zone estimates, in scene units.
pub fn habitable_zone_bands() -> [ZoneBand; 3] {
    [
        ZoneBand {
            inner_radius: 45.0,
            outer_radius: 85.0,
            label: "optimistic inner zone",
        },
        ZoneBand {
            inner_radius: 85.0,
            outer_radius: 137.0,
            label: "conservative zone",
        },
        ZoneBand {
            inner_radius: 137.0,
            outer_radius: 170.0,
            label: "optimistic outer zone",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_closed_and_fully_sampled() {
        let orbit = OrbitalElements::circular(100.0).unwrap();
        let points = orbit_path_points(&orbit);
        assert_eq!(points.len(), ORBIT_PATH_SEGMENTS + 1);
        let gap = (points[0] - points[ORBIT_PATH_SEGMENTS]).length();
        assert!(gap < 1e-9, "loop gap = {gap}");
    }

    #[test]
    fn test_path_follows_the_propagated_positions() {
        let orbit = OrbitalElements::new(152.4, 0.09, 0.03, 1.0, 0.8).unwrap();
        let points = orbit_path_points(&orbit);
        for (i, point) in points.iter().enumerate().take(ORBIT_PATH_SEGMENTS) {
            let angle = (i as f64 / ORBIT_PATH_SEGMENTS as f64) * std::f64::consts::TAU;
            let expected = orbit.position_at(angle);
            assert!(
                (*point - expected).length() < 1e-12,
                "sample {i} diverges from propagation"
            );
        }
    }

    #[test]
    fn test_zone_bands_tile_without_gaps() {
        let bands = habitable_zone_bands();
        assert!(bands[0].outer_radius == bands[1].inner_radius);
        assert!(bands[1].outer_radius == bands[2].inner_radius);
        for band in bands {
            assert!(band.inner_radius < band.outer_radius, "{}", band.label);
        }
    }
}

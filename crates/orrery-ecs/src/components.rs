//! Core component types shared by every body in the simulation.

use bevy_ecs::prelude::*;
use glam::DVec3;

/// Human-readable body name, unique across the catalog. Used for selection
/// info and log messages.
#[derive(Component, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Name(pub String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Current world-space position, recomputed from orbital state every tick.
///
/// Derived data: only the propagation systems write this. Everything else
/// (picking, camera, rendering) reads it.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyPosition(pub DVec3);

impl BodyPosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }
}

/// Bounding radius in scene units. Doubles as the pick-sphere radius.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct BodyRadius(pub f64);

impl Default for BodyRadius {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Preferred camera distance when this body is selected.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ViewOffset(pub f64);

impl Default for ViewOffset {
    fn default() -> Self {
        Self(15.0)
    }
}

/// The component set every celestial body starts from.
#[derive(Bundle, Default)]
pub struct BodyBundle {
    pub name: Name,
    pub position: BodyPosition,
    pub radius: BodyRadius,
    pub view_offset: ViewOffset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_from_str_and_string() {
        let a = Name::new("Mars");
        let b = Name::new(String::from("Mars"));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "Mars");
    }

    #[test]
    fn test_body_position_default_is_origin() {
        let pos = BodyPosition::default();
        assert_eq!(pos.0, DVec3::ZERO);
    }

    #[test]
    fn test_body_radius_default_is_unit() {
        assert_eq!(BodyRadius::default().0, 1.0);
    }

    #[test]
    fn test_bundle_spawns_with_all_components() {
        let mut world = World::new();
        let entity = world
            .spawn(BodyBundle {
                name: Name::new("Earth"),
                position: BodyPosition::new(100.0, 0.0, 0.0),
                radius: BodyRadius(6.4),
                view_offset: ViewOffset(25.0),
            })
            .id();

        assert_eq!(world.get::<Name>(entity).unwrap().as_str(), "Earth");
        assert_eq!(world.get::<BodyPosition>(entity).unwrap().0.x, 100.0);
        assert_eq!(world.get::<BodyRadius>(entity).unwrap().0, 6.4);
        assert_eq!(world.get::<ViewOffset>(entity).unwrap().0, 25.0);
    }
}

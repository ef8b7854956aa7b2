//! Startup spawning: turns the catalog into entities and scene nodes.

use std::path::Path;

use bevy_ecs::prelude::*;
use glam::DVec3;
use tracing::{info, warn};

use orrery_ecs::{BodyBundle, BodyPosition, BodyRadius, Name, ViewOffset};
use orrery_math::{MoonOrbit, OrbitalElements, degrees_to_radians};
use orrery_picking::PickRegistry;
use orrery_scene::{
    NodeDesc, NodeHandle, NodeTransform, SceneNode, SceneRenderer, habitable_zone_bands,
    orbit_path_points,
};

use crate::belt::BeltGenerator;
use crate::catalog::{ATMOSPHERE_SHELL_MARGIN, BELTS, MoonSpec, PLANETS, PlanetSpec, SUN};
use crate::components::{AsteroidBelt, AxialTilt, FollowsBody, MoonOf, OrbitState, SpinState};
use crate::loads::PendingMoonLoads;

/// Entities created by [`spawn_solar_system`], kept for wiring and tests.
pub struct SpawnedSystem {
    pub sun: Entity,
    pub planets: Vec<Entity>,
    pub belts: Vec<Entity>,
}

/// Build the default body set: sun, planets with rings, atmospheres, and
/// moons, rock belts, orbit paths, and habitable-zone bands.
///
/// Requires the [`PickRegistry`] and [`PendingMoonLoads`] resources. A
/// catalog entry that fails element validation is skipped with a warning
/// instead of aborting startup.
pub fn spawn_solar_system(world: &mut World, renderer: &dyn SceneRenderer) -> SpawnedSystem {
    let sun = spawn_sun(world, renderer);

    let mut planets = Vec::with_capacity(PLANETS.len());
    for spec in &PLANETS {
        match spawn_planet(world, renderer, spec) {
            Some(entity) => planets.push(entity),
            None => warn!("{} left out of the scene", spec.name),
        }
    }

    let mut belts = Vec::with_capacity(BELTS.len());
    for spec in &BELTS {
        let rocks = BeltGenerator::from_spec(spec).generate();
        let node = renderer.add_node(NodeDesc::RockField {
            rocks,
            label: spec.label.to_string(),
        });
        belts.push(world.spawn((AsteroidBelt::default(), SceneNode(node))).id());
    }

    for band in habitable_zone_bands() {
        renderer.add_node(NodeDesc::Annulus {
            inner_radius: band.inner_radius,
            outer_radius: band.outer_radius,
            label: band.label.to_string(),
        });
    }

    info!(
        "spawned the sun, {} planets, and {} belts",
        planets.len(),
        belts.len()
    );
    SpawnedSystem { sun, planets, belts }
}

fn spawn_sun(world: &mut World, renderer: &dyn SceneRenderer) -> Entity {
    renderer.load_texture(Path::new(SUN.texture));
    let node = renderer.add_node(NodeDesc::Sphere {
        radius: SUN.radius,
        label: "Sun".to_string(),
    });
    let sun = world
        .spawn((
            BodyBundle {
                name: Name::new("Sun"),
                position: BodyPosition(DVec3::ZERO),
                radius: BodyRadius(SUN.radius),
                view_offset: ViewOffset(SUN.view_offset),
            },
            SpinState::with_speed(SUN.spin_step),
            SceneNode(node),
        ))
        .id();
    world.resource_mut::<PickRegistry>().register_body(sun);
    sun
}

fn spawn_planet(
    world: &mut World,
    renderer: &dyn SceneRenderer,
    spec: &PlanetSpec,
) -> Option<Entity> {
    let elements = match OrbitalElements::circular(spec.orbit_radius) {
        Ok(elements) => elements,
        Err(err) => {
            warn!("{}: {err}", spec.name);
            return None;
        }
    };

    renderer.load_texture(Path::new(spec.texture));
    let node = renderer.add_node(NodeDesc::Sphere {
        radius: spec.radius,
        label: spec.name.to_string(),
    });
    renderer.add_node(NodeDesc::Path {
        points: orbit_path_points(&elements),
        label: format!("{} orbit", spec.name),
    });

    let start = elements.position_at(0.0);
    let planet = world
        .spawn((
            BodyBundle {
                name: Name::new(spec.name),
                position: BodyPosition(start),
                radius: BodyRadius(spec.radius),
                view_offset: ViewOffset(spec.view_offset),
            },
            OrbitState::new(elements, spec.orbit_speed_scale()),
            SpinState::with_speed(spec.spin_step),
            AxialTilt(degrees_to_radians(spec.axial_tilt_deg)),
            SceneNode(node),
        ))
        .id();
    world.resource_mut::<PickRegistry>().register_body(planet);

    if let Some(ring) = &spec.ring {
        renderer.load_texture(Path::new(ring.texture));
        let ring_node = renderer.add_node(NodeDesc::Annulus {
            inner_radius: ring.inner_radius,
            outer_radius: ring.outer_radius,
            label: format!("{} ring", spec.name),
        });
        renderer.set_transform(ring_node, NodeTransform::at(start));
        world.spawn((BodyPosition(start), FollowsBody(planet), SceneNode(ring_node)));
    }

    if let Some(atmosphere) = &spec.atmosphere {
        renderer.load_texture(Path::new(atmosphere.texture));
        let shell_radius = spec.radius + ATMOSPHERE_SHELL_MARGIN;
        let shell_node = renderer.add_node(NodeDesc::Shell {
            radius: shell_radius,
            label: format!("{} atmosphere", spec.name),
        });
        world.spawn((
            BodyPosition(start),
            FollowsBody(planet),
            SpinState::with_speed(atmosphere.spin_step),
            SceneNode(shell_node),
        ));
        world
            .resource_mut::<PickRegistry>()
            .register_shell(planet, shell_radius);
    }

    for moon in spec.moons {
        if let Some(mesh) = moon.mesh {
            let ticket = renderer.load_mesh(Path::new(mesh));
            world
                .resource_mut::<PendingMoonLoads>()
                .push(planet, *moon, ticket);
        } else {
            if let Some(texture) = moon.texture {
                renderer.load_texture(Path::new(texture));
            }
            let moon_node = renderer.add_node(NodeDesc::Sphere {
                radius: moon.radius,
                label: moon.name.to_string(),
            });
            spawn_moon(world, planet, moon, moon_node);
        }
    }

    Some(planet)
}

/// Attach one moon to its parent, starting at phase 0 of its circle.
///
/// Shared between startup spawning and the deferred mesh-load path.
pub fn spawn_moon(world: &mut World, parent: Entity, spec: &MoonSpec, node: NodeHandle) -> Entity {
    let parent_position = world
        .get::<BodyPosition>(parent)
        .map(|position| position.0)
        .unwrap_or(DVec3::ZERO);
    let orbit = MoonOrbit::tilted(
        spec.orbit_radius,
        spec.orbit_speed,
        degrees_to_radians(spec.tilt_deg),
    );
    world
        .spawn((
            Name::new(spec.name),
            BodyPosition(parent_position + orbit.offset_at(0.0)),
            MoonOf { parent, orbit },
            SpinState::with_speed(spec.spin_step),
            SceneNode(node),
        ))
        .id()
}

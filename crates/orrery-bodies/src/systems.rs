//! Per-frame motion: orbital advancement, moon tracking, self-rotation,
//! and belt revolution.

use bevy_ecs::prelude::*;
use tracing::{debug, warn};

use orrery_ecs::{BodyPosition, Name, SimSchedules, SimStage, SimulationClock};
use orrery_math::wrap_angle;

use crate::belt::BELT_REVOLUTION_STEP;
use crate::components::{AsteroidBelt, FollowsBody, MoonOf, OrbitState, SpinState};

/// Advance every orbiting body's phase angle and recompute its position.
///
/// A body whose propagation produces a non-finite position keeps its
/// previous state and is skipped this frame; the rest of the set is
/// unaffected.
pub fn advance_orbits(
    clock: Res<SimulationClock>,
    mut bodies: Query<(&mut OrbitState, &mut BodyPosition, &Name)>,
) {
    for (mut orbit, mut position, name) in &mut bodies {
        let next_angle = wrap_angle(orbit.angle + clock.orbit_step(orbit.speed_scale));
        let next_position = orbit.elements.position_at(next_angle);
        if !next_position.is_finite() {
            warn!(
                "{} produced a non-finite position, keeping last frame's",
                name.as_str()
            );
            continue;
        }
        orbit.angle = next_angle;
        position.0 = next_position;
    }
}

/// Place every moon on its circle around the parent's current position.
///
/// Runs after [`advance_orbits`] so the circle's center is this frame's
/// parent position. The phase follows wall-clock time directly: pausing
/// the orbit multiplier freezes the planets but their moons keep circling.
pub fn update_moon_positions(
    clock: Res<SimulationClock>,
    parents: Query<&BodyPosition, Without<MoonOf>>,
    mut moons: Query<(&MoonOf, &mut BodyPosition, &Name)>,
) {
    for (moon, mut position, name) in &mut moons {
        let Ok(parent_position) = parents.get(moon.parent) else {
            debug!("moon {} has no parent position this frame", name.as_str());
            continue;
        };
        let phase = clock.elapsed_millis() * moon.orbit.speed;
        position.0 = parent_position.0 + moon.orbit.offset_at(phase);
    }
}

/// Snap rings and atmosphere shells to their owner's position.
pub fn update_followers(
    owners: Query<&BodyPosition, Without<FollowsBody>>,
    mut followers: Query<(&FollowsBody, &mut BodyPosition)>,
) {
    for (follows, mut position) in &mut followers {
        if let Ok(owner) = owners.get(follows.0) {
            position.0 = owner.0;
        }
    }
}

/// Accumulate self-rotation.
pub fn advance_spins(clock: Res<SimulationClock>, mut spinners: Query<&mut SpinState>) {
    for mut spin in &mut spinners {
        spin.angle += clock.rotation_step(spin.speed_scale);
    }
}

/// Revolve each rock belt as one group.
pub fn advance_belts(clock: Res<SimulationClock>, mut belts: Query<&mut AsteroidBelt>) {
    for mut belt in &mut belts {
        belt.revolution = wrap_angle(belt.revolution + clock.orbit_step(BELT_REVOLUTION_STEP));
    }
}

/// Install the motion systems in the advance stage, chained so moons and
/// followers read this frame's parent positions.
pub fn add_motion_systems(schedules: &mut SimSchedules) {
    schedules.add_system(
        SimStage::Advance,
        (
            advance_orbits,
            update_moon_positions,
            update_followers,
            advance_spins,
            advance_belts,
        )
            .chain(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use orrery_ecs::{BodyBundle, BodyRadius, ViewOffset, create_world, spawn_entity};
    use orrery_math::{MoonOrbit, OrbitalElements};
    use std::f64::consts::TAU;

    const TICK: f64 = 1.0 / 60.0;

    fn motion_schedules() -> SimSchedules {
        let mut schedules = SimSchedules::new();
        add_motion_systems(&mut schedules);
        schedules
    }

    fn tick(world: &mut World, schedules: &mut SimSchedules) {
        world.resource_mut::<SimulationClock>().advance(TICK);
        schedules.run(world);
    }

    fn spawn_orbiting(world: &mut World, name: &str, radius: f64, speed: f64) -> Entity {
        let elements = OrbitalElements::circular(radius).unwrap();
        let entity = spawn_entity(
            world,
            BodyBundle {
                name: Name::new(name),
                position: BodyPosition(elements.position_at(0.0)),
                radius: BodyRadius(5.0),
                view_offset: ViewOffset(25.0),
            },
        );
        world
            .entity_mut(entity)
            .insert(OrbitState::new(elements, speed));
        entity
    }

    #[test]
    fn test_orbit_position_follows_phase_angle() {
        let mut world = create_world();
        let mut schedules = motion_schedules();
        let planet = spawn_orbiting(&mut world, "Earth", 100.0, 0.01);

        tick(&mut world, &mut schedules);

        let orbit = *world.get::<OrbitState>(planet).unwrap();
        assert!((orbit.angle - 0.01).abs() < 1e-12, "angle = {}", orbit.angle);
        let expected = orbit.elements.position_at(orbit.angle);
        let actual = world.get::<BodyPosition>(planet).unwrap().0;
        assert!((actual - expected).length() < 1e-12, "position = {actual}");
    }

    #[test]
    fn test_phase_angle_wraps_at_full_turn() {
        let mut world = create_world();
        let mut schedules = motion_schedules();
        let planet = spawn_orbiting(&mut world, "Sprinter", 100.0, 4.0);

        tick(&mut world, &mut schedules);
        tick(&mut world, &mut schedules);

        let orbit = world.get::<OrbitState>(planet).unwrap();
        assert!(
            (0.0..TAU).contains(&orbit.angle),
            "angle {} escaped [0, 2pi)",
            orbit.angle
        );
        assert!(
            (orbit.angle - wrap_angle(8.0)).abs() < 1e-9,
            "angle = {}",
            orbit.angle
        );
    }

    #[test]
    fn test_paused_orbits_hold_position() {
        let mut world = create_world();
        let mut schedules = motion_schedules();
        let planet = spawn_orbiting(&mut world, "Earth", 100.0, 0.01);

        tick(&mut world, &mut schedules);
        let before = world.get::<BodyPosition>(planet).unwrap().0;

        world
            .resource_mut::<SimulationClock>()
            .set_orbit_speed_multiplier(0.0);
        for _ in 0..10 {
            tick(&mut world, &mut schedules);
        }

        let after = world.get::<BodyPosition>(planet).unwrap().0;
        assert_eq!(before, after, "paused planet drifted");
    }

    #[test]
    fn test_moon_circles_parents_fresh_position() {
        let mut world = create_world();
        let mut schedules = motion_schedules();
        // Fast parent so a stale center would be obvious.
        let planet = spawn_orbiting(&mut world, "Mars", 150.0, 0.5);
        let moon = world
            .spawn((
                Name::new("Phobos"),
                BodyPosition(DVec3::ZERO),
                MoonOf {
                    parent: planet,
                    orbit: MoonOrbit::flat(5.0, 0.001),
                },
            ))
            .id();

        tick(&mut world, &mut schedules);

        let parent_now = world.get::<BodyPosition>(planet).unwrap().0;
        let moon_now = world.get::<BodyPosition>(moon).unwrap().0;
        let offset = moon_now - parent_now;
        assert!(
            (offset.length() - 5.0).abs() < 1e-9,
            "moon is {} units from its parent",
            offset.length()
        );
    }

    #[test]
    fn test_moons_keep_moving_while_orbits_paused() {
        let mut world = create_world();
        let mut schedules = motion_schedules();
        let planet = spawn_orbiting(&mut world, "Earth", 100.0, 0.01);
        let moon = world
            .spawn((
                Name::new("Moon"),
                BodyPosition(DVec3::ZERO),
                MoonOf {
                    parent: planet,
                    orbit: MoonOrbit::flat(10.0, 0.001),
                },
            ))
            .id();

        world
            .resource_mut::<SimulationClock>()
            .set_orbit_speed_multiplier(0.0);

        tick(&mut world, &mut schedules);
        let first = world.get::<BodyPosition>(moon).unwrap().0;
        for _ in 0..20 {
            tick(&mut world, &mut schedules);
        }
        let later = world.get::<BodyPosition>(moon).unwrap().0;

        assert!(
            (later - first).length() > 1e-3,
            "moon froze with the planets: moved {}",
            (later - first).length()
        );
    }

    #[test]
    fn test_followers_snap_to_owner() {
        let mut world = create_world();
        let mut schedules = motion_schedules();
        let planet = spawn_orbiting(&mut world, "Saturn", 953.7, 0.1);
        let ring = world
            .spawn((BodyPosition(DVec3::ZERO), FollowsBody(planet)))
            .id();

        tick(&mut world, &mut schedules);

        let planet_position = world.get::<BodyPosition>(planet).unwrap().0;
        let ring_position = world.get::<BodyPosition>(ring).unwrap().0;
        assert_eq!(planet_position, ring_position);
    }

    #[test]
    fn test_spin_angle_is_unbounded() {
        let mut world = create_world();
        let mut schedules = motion_schedules();
        let body = world.spawn(SpinState::with_speed(4.0)).id();

        tick(&mut world, &mut schedules);
        tick(&mut world, &mut schedules);

        let spin = world.get::<SpinState>(body).unwrap();
        assert!(
            (spin.angle - 8.0).abs() < 1e-9,
            "spin must accumulate without wrapping, got {}",
            spin.angle
        );
        assert!(spin.angle > TAU);
    }

    #[test]
    fn test_belt_revolution_scales_with_multiplier() {
        let mut world = create_world();
        let mut schedules = motion_schedules();
        let belt = world.spawn(AsteroidBelt::default()).id();

        world
            .resource_mut::<SimulationClock>()
            .set_orbit_speed_multiplier(2.0);
        tick(&mut world, &mut schedules);

        let revolution = world.get::<AsteroidBelt>(belt).unwrap().revolution;
        assert!(
            (revolution - BELT_REVOLUTION_STEP * 2.0).abs() < 1e-15,
            "revolution = {revolution}"
        );
    }

    #[test]
    fn test_bad_elements_skip_only_that_body() {
        let mut world = create_world();
        let mut schedules = motion_schedules();
        let good = spawn_orbiting(&mut world, "Earth", 100.0, 0.01);

        // Forged state that validation would never produce.
        let broken_elements = OrbitalElements {
            semi_major_axis: f64::NAN,
            ..OrbitalElements::default()
        };
        let bad = world
            .spawn((
                Name::new("Forged"),
                BodyPosition(DVec3::new(1.0, 2.0, 3.0)),
                OrbitState::new(broken_elements, 0.01),
            ))
            .id();

        tick(&mut world, &mut schedules);

        let bad_position = world.get::<BodyPosition>(bad).unwrap().0;
        assert_eq!(
            bad_position,
            DVec3::new(1.0, 2.0, 3.0),
            "broken body must keep its previous position"
        );
        assert_eq!(world.get::<OrbitState>(bad).unwrap().angle, 0.0);

        let good_orbit = world.get::<OrbitState>(good).unwrap();
        assert!(
            good_orbit.angle > 0.0,
            "healthy bodies must keep advancing past a broken one"
        );
    }

    #[test]
    fn test_same_ticks_produce_same_positions() {
        let build = || {
            let mut world = create_world();
            let planet = spawn_orbiting(&mut world, "Earth", 100.0, 0.01);
            let moon = world
                .spawn((
                    Name::new("Moon"),
                    BodyPosition(DVec3::ZERO),
                    MoonOf {
                        parent: planet,
                        orbit: MoonOrbit::tilted(10.0, 0.001, 5.0_f64.to_radians()),
                    },
                ))
                .id();
            (world, planet, moon)
        };

        let (mut world_a, planet_a, moon_a) = build();
        let (mut world_b, planet_b, moon_b) = build();
        let mut schedules_a = motion_schedules();
        let mut schedules_b = motion_schedules();

        for _ in 0..50 {
            tick(&mut world_a, &mut schedules_a);
            tick(&mut world_b, &mut schedules_b);
        }

        assert_eq!(
            world_a.get::<BodyPosition>(planet_a).unwrap().0,
            world_b.get::<BodyPosition>(planet_b).unwrap().0,
        );
        assert_eq!(
            world_a.get::<BodyPosition>(moon_a).unwrap().0,
            world_b.get::<BodyPosition>(moon_b).unwrap().0,
        );
    }
}

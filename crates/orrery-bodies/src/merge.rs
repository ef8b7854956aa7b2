//! Merging fetched catalog records into the running world.

use bevy_ecs::prelude::*;
use tracing::{info, warn};

use orrery_data::{BodyKind, BodyRecord};
use orrery_ecs::{BodyBundle, BodyPosition, BodyRadius, Name, ViewOffset};
use orrery_math::{DISPLAY_UNITS_PER_AU, OrbitalElements};
use orrery_picking::PickRegistry;
use orrery_scene::{NodeDesc, RendererHandle, SceneNode};

use crate::catalog::ORBIT_SPEED_BASE;
use crate::components::{MinorBody, OrbitState};

/// Inclination assigned to fetched records, which do not carry one.
pub const RECORD_INCLINATION_DEG: f64 = 7.0;

const MINOR_BODY_RADIUS: f64 = 1.0;
const MINOR_BODY_VIEW_OFFSET: f64 = 10.0;

/// What one batch of records did to the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordMergeReport {
    /// Bodies already in the scene whose elements were replaced.
    pub updated: usize,
    /// New minor bodies spawned.
    pub spawned: usize,
}

/// Apply one batch of fetched records.
///
/// A record whose name matches a body already in the scene replaces that
/// body's orbital elements in place, keeping its phase angle. Anything
/// else becomes a new minor body. Name matching ignores ASCII case, since
/// feeds disagree with the catalog about it.
pub fn apply_records(
    world: &mut World,
    kind: BodyKind,
    records: &[BodyRecord],
) -> RecordMergeReport {
    let mut report = RecordMergeReport::default();

    for record in records {
        let name = record.display_name();
        let elements = elements_from_record(record);

        if let Some(entity) = find_by_name(world, name)
            && let Some(mut orbit) = world.get_mut::<OrbitState>(entity)
        {
            orbit.elements = elements;
            report.updated += 1;
            info!("updated {name} from the {kind} feed");
            continue;
        }

        spawn_minor_body(world, kind, name, elements);
        report.spawned += 1;
    }

    report
}

/// Elements from a record, falling back to a circular orbit when the
/// record's values are unusable.
fn elements_from_record(record: &BodyRecord) -> OrbitalElements {
    match OrbitalElements::from_au_degrees(
        record.semi_major_axis,
        record.eccentricity,
        RECORD_INCLINATION_DEG,
        record.argument_periapsis,
        record.longitude_ascending,
    ) {
        Ok(elements) => elements,
        Err(err) => {
            warn!(
                "record {} carries unusable elements ({err}), using the fallback orbit",
                record.display_name()
            );
            let scaled = record.semi_major_axis * DISPLAY_UNITS_PER_AU;
            if scaled.is_finite() && scaled > 0.0 {
                OrbitalElements {
                    semi_major_axis: scaled,
                    ..OrbitalElements::default()
                }
            } else {
                OrbitalElements::default()
            }
        }
    }
}

fn find_by_name(world: &mut World, name: &str) -> Option<Entity> {
    let mut query = world.query::<(Entity, &Name)>();
    query
        .iter(world)
        .find(|(_, existing)| existing.as_str().eq_ignore_ascii_case(name))
        .map(|(entity, _)| entity)
}

fn spawn_minor_body(world: &mut World, kind: BodyKind, name: &str, elements: OrbitalElements) {
    // Kepler's third law ties the period to the semi-major axis, keeping
    // fetched bodies on the same speed convention as the catalog.
    let semi_major_au = elements.semi_major_axis / DISPLAY_UNITS_PER_AU;
    let period_years = semi_major_au.powf(1.5);
    let speed_scale = ORBIT_SPEED_BASE / period_years;

    let node = world
        .get_resource::<RendererHandle>()
        .cloned()
        .map(|renderer| {
            renderer.add_node(NodeDesc::Sphere {
                radius: MINOR_BODY_RADIUS,
                label: format!("{name} ({kind})"),
            })
        });

    let entity = world
        .spawn((
            BodyBundle {
                name: Name::new(name),
                position: BodyPosition(elements.position_at(0.0)),
                radius: BodyRadius(MINOR_BODY_RADIUS),
                view_offset: ViewOffset(MINOR_BODY_VIEW_OFFSET),
            },
            OrbitState::new(elements, speed_scale),
            MinorBody,
        ))
        .id();
    if let Some(node) = node {
        world.entity_mut(entity).insert(SceneNode(node));
    }
    if let Some(mut registry) = world.get_resource_mut::<PickRegistry>() {
        registry.register_body(entity);
    }
    info!("spawned minor body {name} from the {kind} feed");
}

//! Hover and click picking against the registered proxies.

use bevy_ecs::prelude::*;
use glam::{DVec2, DVec3};
use tracing::{debug, info};

use orrery_ecs::{
    BodyPosition, BodyRadius, CameraPhase, CameraRig, Name, PointerState, SelectionState,
    SimulationClock, ViewOffset,
};
use orrery_math::{SphereTarget, nearest_sphere_hit};

use crate::registry::{PickRegistry, ProxySurface};

/// A resolved pick: the owning body and the ray distance of the hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub body: Entity,
    pub distance: f64,
}

/// Cast the pointer ray against every registered proxy and resolve the
/// nearest hit to its owning body.
///
/// `lookup` supplies `(position, radius)` for a body; proxies whose body
/// cannot be resolved are skipped rather than intersected, so stale
/// registry entries can never produce a selection.
pub fn hit_test(
    ndc: DVec2,
    rig: &CameraRig,
    registry: &PickRegistry,
    mut lookup: impl FnMut(Entity) -> Option<(DVec3, f64)>,
) -> Option<PickHit> {
    let ray = rig.ray_through(ndc);

    let mut targets = Vec::with_capacity(registry.len());
    let mut owners = Vec::with_capacity(registry.len());
    for entry in registry.entries() {
        let Some((center, body_radius)) = lookup(entry.body) else {
            continue;
        };
        let radius = match entry.surface {
            ProxySurface::Body => body_radius,
            ProxySurface::Shell(shell_radius) => shell_radius,
        };
        targets.push(SphereTarget { center, radius });
        owners.push(entry.body);
    }

    nearest_sphere_hit(&ray, &targets).map(|(index, distance)| PickHit {
        body: owners[index],
        distance,
    })
}

/// Refresh the hover highlight from the current cursor position.
///
/// Runs every frame; hovering an atmosphere shell highlights the planet
/// that owns it.
pub fn hover_pick_system(
    pointer: Res<PointerState>,
    rig: Res<CameraRig>,
    registry: Res<PickRegistry>,
    bodies: Query<(&BodyPosition, &BodyRadius)>,
    mut selection: ResMut<SelectionState>,
) {
    let Some(cursor) = pointer.cursor_ndc else {
        selection.hovered = None;
        return;
    };

    let hit = hit_test(cursor, &rig, &registry, |entity| {
        bodies.get(entity).ok().map(|(pos, radius)| (pos.0, radius.0))
    });
    selection.hovered = hit.map(|hit| hit.body);
}

/// Turn a pointer press into a selection and start the camera approach.
///
/// All selection side effects happen here together within one tick: the
/// orbit multiplier drops to zero, the camera target and look-at update,
/// and the phase flips to `MovingToTarget`. Re-selecting while a previous
/// transition is still running restarts the approach immediately. A press
/// on empty space changes nothing.
pub fn click_select_system(
    pointer: Res<PointerState>,
    registry: Res<PickRegistry>,
    bodies: Query<(&BodyPosition, &BodyRadius)>,
    details: Query<(&BodyPosition, &ViewOffset, &Name)>,
    mut rig: ResMut<CameraRig>,
    mut clock: ResMut<SimulationClock>,
    mut selection: ResMut<SelectionState>,
) {
    let Some(click) = pointer.click_ndc else {
        return;
    };

    let Some(hit) = hit_test(click, &rig, &registry, |entity| {
        bodies.get(entity).ok().map(|(pos, radius)| (pos.0, radius.0))
    }) else {
        debug!("press on empty space ignored");
        return;
    };

    let Ok((position, view_offset, name)) = details.get(hit.body) else {
        debug!("pick resolved to a body without selection components");
        return;
    };

    let body_position = position.0;
    let approach_dir = (rig.position - body_position)
        .try_normalize()
        .unwrap_or(DVec3::X);

    selection.selected = Some(hit.body);
    selection.camera_phase = CameraPhase::MovingToTarget;
    selection.target_camera_position = body_position + approach_dir * view_offset.0;
    rig.look_at = body_position;
    clock.set_orbit_speed_multiplier(0.0);

    info!(
        "selected {} at distance {:.1}, approaching to offset {}",
        name.as_str(),
        hit.distance,
        view_offset.0
    );
}

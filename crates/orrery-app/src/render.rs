//! Pushing simulation state to the renderer at the end of each frame.

use bevy_ecs::prelude::*;
use glam::DQuat;

use orrery_bodies::{AsteroidBelt, AxialTilt, SpinState};
use orrery_ecs::{BodyPosition, CameraRig, PointerState, SelectionState, SimulationClock};
use orrery_scene::{NodeTransform, RendererHandle, SceneNode};

/// Hand every drawn entity's placement, the camera pose, the sun
/// intensity, and the hover outline to the renderer, then request the
/// frame.
pub fn push_scene_state(
    renderer: Res<RendererHandle>,
    clock: Res<SimulationClock>,
    rig: Res<CameraRig>,
    selection: Res<SelectionState>,
    bodies: Query<(&SceneNode, &BodyPosition, Option<&SpinState>, Option<&AxialTilt>)>,
    belts: Query<(&SceneNode, &AsteroidBelt)>,
) {
    for (node, position, spin, tilt) in &bodies {
        let spin_angle = spin.map_or(0.0, |spin| spin.angle);
        // Spin happens around the body's own axis, which the tilt then
        // leans over.
        let rotation = match tilt {
            Some(tilt) => DQuat::from_rotation_z(tilt.0) * DQuat::from_rotation_y(spin_angle),
            None => DQuat::from_rotation_y(spin_angle),
        };
        renderer.set_transform(
            node.0,
            NodeTransform {
                position: position.0,
                rotation,
                scale: 1.0,
            },
        );
    }

    // Rocks are static in the field's local frame; the whole field turns
    // as one node.
    for (node, belt) in &belts {
        renderer.set_transform(
            node.0,
            NodeTransform {
                rotation: DQuat::from_rotation_y(belt.revolution),
                ..Default::default()
            },
        );
    }

    renderer.set_camera(rig.position, rig.look_at, rig.fov_y);
    renderer.set_sun_intensity(clock.sun_intensity);

    let outlined = selection
        .hovered
        .and_then(|entity| bodies.get(entity).ok())
        .map(|(node, ..)| node.0);
    renderer.set_outlined(outlined);

    renderer.render_frame();
}

/// Drop per-frame pointer flags once every consumer has run.
pub fn clear_pointer_transients(mut pointer: ResMut<PointerState>) {
    pointer.clear_transients();
}

//! The camera targeting state machine.
//!
//! Selection (handled by the pick systems) puts the state into
//! `MovingToTarget`; each frame the camera eases toward the stored target
//! until it lands within the arrival threshold, at which point the info
//! panel opens. Dismissal flips to `MovingToRest`, resumes orbital motion,
//! and eases back out to the rest pose. The easing is a fixed per-tick
//! fraction, frame-rate dependent on purpose to match the rest of the
//! animation model.

use bevy_ecs::prelude::*;
use glam::DVec3;
use tracing::{debug, warn};

use orrery_ecs::{
    BodyPosition, CameraPhase, CameraRig, Name, PointerState, SelectionState, SimulationClock,
};
use orrery_scene::InfoPanelHandle;

/// Tunable easing parameters, overridable from configuration.
#[derive(Resource, Clone, Copy, Debug)]
pub struct CameraTuning {
    /// Per-tick lerp fraction while approaching a selected body.
    pub approach_damping: f64,
    /// Per-tick lerp fraction while retreating to the rest pose.
    pub retreat_damping: f64,
    /// Distance below which a transition counts as arrived.
    pub arrival_threshold: f64,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            approach_damping: 0.03,
            retreat_damping: 0.05,
            arrival_threshold: 1.0,
        }
    }
}

/// Handle an info-panel dismissal.
///
/// Every side effect of the dismissal happens together in this one tick:
/// orbital motion resumes at the default multiplier, the look-at target
/// returns to the world origin, the panel hides, and the camera starts
/// retreating. Valid from any phase.
pub fn dismiss_system(
    pointer: Res<PointerState>,
    panel: Res<InfoPanelHandle>,
    mut clock: ResMut<SimulationClock>,
    mut rig: ResMut<CameraRig>,
    mut selection: ResMut<SelectionState>,
) {
    if !pointer.dismiss_requested {
        return;
    }

    selection.selected = None;
    selection.camera_phase = CameraPhase::MovingToRest;
    clock.set_orbit_speed_multiplier(1.0);
    rig.look_at = DVec3::ZERO;
    panel.hide_info();
    debug!("selection dismissed, retreating to rest position");
}

/// Advance the camera transition one step.
pub fn camera_targeting_system(
    tuning: Res<CameraTuning>,
    panel: Res<InfoPanelHandle>,
    names: Query<&Name, With<BodyPosition>>,
    mut rig: ResMut<CameraRig>,
    mut selection: ResMut<SelectionState>,
) {
    match selection.camera_phase {
        CameraPhase::Idle => {}
        CameraPhase::MovingToTarget => {
            let target = selection.target_camera_position;
            rig.position = rig.position.lerp(target, tuning.approach_damping);

            if rig.position.distance(target) < tuning.arrival_threshold {
                selection.camera_phase = CameraPhase::Idle;
                match selection.selected.and_then(|body| names.get(body).ok()) {
                    Some(name) => panel.show_info(name.as_str()),
                    None => warn!("arrived at a selection that no longer resolves to a body"),
                }
            }
        }
        CameraPhase::MovingToRest => {
            let rest = selection.rest_camera_position;
            rig.position = rig.position.lerp(rest, tuning.retreat_damping);

            if rig.position.distance(rest) < tuning.arrival_threshold {
                selection.camera_phase = CameraPhase::Idle;
                debug!("camera back at rest");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use orrery_ecs::{BodyBundle, BodyRadius, SimSchedules, SimStage, ViewOffset, create_world};
    use orrery_scene::{PanelEvent, RecordingPanel};

    struct Fixture {
        world: World,
        schedules: SimSchedules,
        panel: Arc<RecordingPanel>,
    }

    fn fixture() -> Fixture {
        let mut world = create_world();
        world.insert_resource(CameraTuning::default());

        let panel = Arc::new(RecordingPanel::new());
        world.insert_resource(InfoPanelHandle(panel.clone()));

        let mut schedules = SimSchedules::new();
        schedules.add_system(
            SimStage::Camera,
            (dismiss_system, camera_targeting_system).chain(),
        );

        Fixture {
            world,
            schedules,
            panel,
        }
    }

    fn spawn_body(world: &mut World, name: &str, position: DVec3) -> Entity {
        world
            .spawn(BodyBundle {
                name: Name::new(name),
                position: BodyPosition(position),
                radius: BodyRadius(5.0),
                view_offset: ViewOffset(25.0),
            })
            .id()
    }

    fn select(world: &mut World, body: Entity, target: DVec3) {
        let mut selection = world.resource_mut::<SelectionState>();
        selection.selected = Some(body);
        selection.camera_phase = CameraPhase::MovingToTarget;
        selection.target_camera_position = target;
        world
            .resource_mut::<SimulationClock>()
            .set_orbit_speed_multiplier(0.0);
    }

    #[test]
    fn test_approach_converges_and_opens_panel() {
        let mut f = fixture();
        let body = spawn_body(&mut f.world, "Jupiter", DVec3::ZERO);
        f.world.resource_mut::<CameraRig>().position = DVec3::new(0.0, 0.0, 300.0);
        select(&mut f.world, body, DVec3::new(0.0, 0.0, 50.0));

        let mut last_distance = f64::INFINITY;
        let mut ticks = 0;
        while f.world.resource::<SelectionState>().camera_phase == CameraPhase::MovingToTarget {
            f.schedules.run(&mut f.world);
            ticks += 1;
            assert!(ticks < 1000, "approach did not converge");

            let distance = f
                .world
                .resource::<CameraRig>()
                .position
                .distance(DVec3::new(0.0, 0.0, 50.0));
            assert!(
                distance < last_distance + 1e-9,
                "distance must shrink every tick: {distance} after {last_distance}"
            );
            last_distance = distance;
        }

        assert!(last_distance < 1.0, "final distance = {last_distance}");
        assert_eq!(
            f.panel.events(),
            vec![PanelEvent::Shown("Jupiter".into())],
            "panel opens exactly once, on arrival"
        );
    }

    #[test]
    fn test_dismissal_resumes_orbits_and_retreats() {
        let mut f = fixture();
        let body = spawn_body(&mut f.world, "Mars", DVec3::ZERO);
        f.world.resource_mut::<CameraRig>().position = DVec3::new(0.0, 0.0, 15.0);
        f.world.resource_mut::<CameraRig>().look_at = DVec3::new(1.0, 2.0, 3.0);
        select(&mut f.world, body, DVec3::new(0.0, 0.0, 15.0));
        f.world.resource_mut::<SelectionState>().camera_phase = CameraPhase::Idle;

        f.world.resource_mut::<PointerState>().request_dismiss();
        f.schedules.run(&mut f.world);

        let selection = f.world.resource::<SelectionState>();
        assert_eq!(selection.camera_phase, CameraPhase::MovingToRest);
        assert_eq!(selection.selected, None);
        assert_eq!(
            f.world.resource::<SimulationClock>().orbit_speed_multiplier,
            1.0,
            "dismissal resumes orbital motion"
        );
        assert_eq!(f.world.resource::<CameraRig>().look_at, DVec3::ZERO);
        assert_eq!(f.panel.events(), vec![PanelEvent::Hidden]);
    }

    #[test]
    fn test_retreat_reaches_rest_and_idles() {
        let mut f = fixture();
        spawn_body(&mut f.world, "Mars", DVec3::ZERO);
        f.world.resource_mut::<CameraRig>().position = DVec3::new(0.0, 0.0, 15.0);
        f.world.resource_mut::<SelectionState>().camera_phase = CameraPhase::MovingToRest;

        let rest = f.world.resource::<SelectionState>().rest_camera_position;
        let mut ticks = 0;
        while f.world.resource::<SelectionState>().camera_phase == CameraPhase::MovingToRest {
            f.schedules.run(&mut f.world);
            ticks += 1;
            assert!(ticks < 1000, "retreat did not converge");
        }

        let position = f.world.resource::<CameraRig>().position;
        assert!(position.distance(rest) < 1.0, "position = {position}");
        assert_eq!(
            f.world.resource::<SelectionState>().camera_phase,
            CameraPhase::Idle
        );
    }

    #[test]
    fn test_idle_phase_leaves_camera_alone() {
        let mut f = fixture();
        let before = f.world.resource::<CameraRig>().position;
        f.schedules.run(&mut f.world);
        let after = f.world.resource::<CameraRig>().position;
        assert_eq!(before, after);
        assert!(f.panel.events().is_empty());
    }

    #[test]
    fn test_dismiss_mid_approach_overrides_targeting() {
        let mut f = fixture();
        let body = spawn_body(&mut f.world, "Venus", DVec3::ZERO);
        f.world.resource_mut::<CameraRig>().position = DVec3::new(0.0, 0.0, 300.0);
        select(&mut f.world, body, DVec3::new(0.0, 0.0, 50.0));

        f.schedules.run(&mut f.world);
        assert_eq!(
            f.world.resource::<SelectionState>().camera_phase,
            CameraPhase::MovingToTarget
        );

        f.world.resource_mut::<PointerState>().request_dismiss();
        f.schedules.run(&mut f.world);

        assert_eq!(
            f.world.resource::<SelectionState>().camera_phase,
            CameraPhase::MovingToRest,
            "dismissal is valid from any phase"
        );
        assert!(
            f.panel.events().contains(&PanelEvent::Hidden),
            "panel hides even if it never opened"
        );
    }
}

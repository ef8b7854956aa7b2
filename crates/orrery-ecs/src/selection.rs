//! Selection and camera-phase state.

use bevy_ecs::prelude::*;
use glam::DVec3;

/// Where the camera is in its targeting cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraPhase {
    /// Free orbiting; no transition in progress.
    #[default]
    Idle,
    /// Closing in on the selected body.
    MovingToTarget,
    /// Returning to the rest position after a dismissal.
    MovingToRest,
}

/// Current selection, hover highlight, and camera-transition targets.
///
/// Written only by the pick and camera systems; the phase transitions in
/// here are the camera state machine's authoritative record.
#[derive(Resource, Clone, Debug)]
pub struct SelectionState {
    /// The clicked body the camera is (or was last) attached to.
    pub selected: Option<Entity>,
    /// Body under the cursor this frame, for the hover outline. Atmosphere
    /// hits resolve to the owning planet before landing here.
    pub hovered: Option<Entity>,
    /// Current camera-phase state.
    pub camera_phase: CameraPhase,
    /// Where the camera is heading while `MovingToTarget`.
    pub target_camera_position: DVec3,
    /// Where the camera settles after a dismissal.
    pub rest_camera_position: DVec3,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: None,
            hovered: None,
            camera_phase: CameraPhase::Idle,
            target_camera_position: DVec3::ZERO,
            rest_camera_position: DVec3::new(-175.0, 115.0, 5.0),
        }
    }
}

impl SelectionState {
    /// True while a selection transition (either direction) is running.
    pub fn in_transition(&self) -> bool {
        self.camera_phase != CameraPhase::Idle
    }
}

//! Pointer state fed by the host's input events.
//!
//! The host window layer reports cursor movement, presses, and the
//! info-panel dismiss action here; the pick and camera systems read the
//! normalized state during the frame. Transient flags are cleared at the
//! end of every frame so one event never spans two ticks.

use bevy_ecs::prelude::*;
use glam::DVec2;

/// Convert window coordinates (origin top-left, pixels) to normalized
/// device coordinates (origin center, x right, y up, both in `[-1, 1]`).
pub fn ndc_from_window(x: f64, y: f64, width: f64, height: f64) -> DVec2 {
    DVec2::new((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}

/// Frame-coherent pointer and dismiss-action state.
#[derive(Resource, Clone, Debug, Default)]
pub struct PointerState {
    /// Cursor position in NDC. `None` until the cursor first enters the
    /// window.
    pub cursor_ndc: Option<DVec2>,
    /// NDC of a press that happened this frame, if any.
    pub click_ndc: Option<DVec2>,
    /// Set when the user dismissed the info panel this frame.
    pub dismiss_requested: bool,
}

impl PointerState {
    /// Record a cursor move in window coordinates.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.cursor_ndc = Some(ndc_from_window(x, y, width, height));
    }

    /// Record a pointer press in window coordinates.
    pub fn on_pressed(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let ndc = ndc_from_window(x, y, width, height);
        self.cursor_ndc = Some(ndc);
        self.click_ndc = Some(ndc);
    }

    /// Record the info-panel close action.
    pub fn request_dismiss(&mut self) {
        self.dismiss_requested = true;
    }

    /// Clear per-frame flags. Call at the end of every frame.
    pub fn clear_transients(&mut self) {
        self.click_ndc = None;
        self.dismiss_requested = false;
    }
}

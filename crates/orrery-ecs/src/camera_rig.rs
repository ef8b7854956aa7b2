//! The camera rig: position, look-at target, and projection parameters.

use bevy_ecs::prelude::*;
use glam::{DMat4, DVec2, DVec3};
use orrery_math::Ray;

/// Camera state shared by picking, targeting, and rendering.
///
/// The rig is the single authority on where the camera is and what it
/// looks at; the targeting systems move it, picking unprojects through it,
/// and the render push hands its matrices to the renderer.
#[derive(Resource, Clone, Debug)]
pub struct CameraRig {
    /// Camera position in scene units.
    pub position: DVec3,
    /// Point the camera looks at (the orbit-controls target).
    pub look_at: DVec3,
    /// Vertical field of view in radians.
    pub fov_y: f64,
    /// Viewport size in physical pixels.
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Clip planes.
    pub near: f64,
    pub far: f64,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            position: DVec3::new(-175.0, 115.0, 5.0),
            look_at: DVec3::ZERO,
            fov_y: 75.0_f64.to_radians(),
            viewport_width: 1280.0,
            viewport_height: 720.0,
            near: 0.1,
            far: 5000.0,
        }
    }
}

impl CameraRig {
    /// Viewport aspect ratio. Falls back to 1.0 for a degenerate viewport.
    pub fn aspect(&self) -> f64 {
        if self.viewport_height > 0.0 {
            self.viewport_width / self.viewport_height
        } else {
            1.0
        }
    }

    /// Apply a window resize.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> DMat4 {
        let forward = self.look_at - self.position;
        // Degenerate when the camera sits exactly on its target; keep the
        // matrix finite by looking down -Z.
        let center = if forward.length_squared() < 1e-12 {
            self.position + DVec3::NEG_Z
        } else {
            self.look_at
        };
        DMat4::look_at_rh(self.position, center, DVec3::Y)
    }

    /// View-to-clip transform with GL-style `[-1, 1]` depth.
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y, self.aspect(), self.near, self.far)
    }

    /// World-space ray from the camera through a point in NDC.
    pub fn ray_through(&self, ndc: DVec2) -> Ray {
        let view_proj_inverse = (self.projection_matrix() * self.view_matrix()).inverse();
        // Unproject a mid-frustum point and aim at it, the way a screen
        // raycaster seeds from the camera.
        let world_point = view_proj_inverse.project_point3(DVec3::new(ndc.x, ndc.y, 0.5));
        Ray::pointing(self.position, world_point)
    }
}

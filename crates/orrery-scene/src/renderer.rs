//! The renderer collaborator boundary.
//!
//! The simulation never touches meshes, materials, or GPU state. It
//! describes nodes once at startup, pushes transforms every frame, and asks
//! for a frame. Mesh loads are asynchronous: the call returns a ticket the
//! caller polls without blocking, and the result is merged into the world
//! at the next frame boundary.

use std::path::Path;

use bevy_ecs::prelude::*;
use glam::{DQuat, DVec3};

/// Handle to renderer-owned geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// Handle to a renderer-owned texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// The renderer node an entity is drawn as. Entities without one are pure
/// simulation state and never reach the renderer.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneNode(pub NodeHandle);

/// Errors surfaced by the renderer collaborator.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SceneError {
    /// An asynchronous mesh load did not produce usable geometry.
    #[error("mesh load failed for `{path}`")]
    MeshLoad { path: String },
}

/// Completion ticket for an asynchronous mesh load. Poll with `try_recv`;
/// never block the frame on it.
pub type MeshTicket = crossbeam_channel::Receiver<Result<NodeHandle, SceneError>>;

/// One asteroid instance inside a rock field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RockInstance {
    /// Position relative to the field origin.
    pub position: DVec3,
    /// Uniform scale factor.
    pub scale: f64,
}

/// Geometry the simulation asks the renderer to create.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeDesc {
    /// An opaque body sphere.
    Sphere { radius: f64, label: String },
    /// A translucent shell drawn around a body (atmosphere haze).
    Shell { radius: f64, label: String },
    /// A flat annulus: planetary ring or habitable-zone band.
    Annulus {
        inner_radius: f64,
        outer_radius: f64,
        label: String,
    },
    /// A polyline, used for orbit paths.
    Path { points: Vec<DVec3>, label: String },
    /// A batch of small rocks revolving as one group.
    RockField {
        rocks: Vec<RockInstance>,
        label: String,
    },
}

impl NodeDesc {
    /// The human-readable label attached at creation.
    pub fn label(&self) -> &str {
        match self {
            NodeDesc::Sphere { label, .. }
            | NodeDesc::Shell { label, .. }
            | NodeDesc::Annulus { label, .. }
            | NodeDesc::Path { label, .. }
            | NodeDesc::RockField { label, .. } => label,
        }
    }
}

/// Per-frame placement of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeTransform {
    pub position: DVec3,
    pub rotation: DQuat,
    pub scale: f64,
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl NodeTransform {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Everything the simulation asks of the rendering pipeline.
pub trait SceneRenderer: Send + Sync {
    /// Create a node and return its handle.
    fn add_node(&self, desc: NodeDesc) -> NodeHandle;
    /// Remove a node. Unknown handles are ignored.
    fn remove_node(&self, node: NodeHandle);
    /// Place a node for the current frame.
    fn set_transform(&self, node: NodeHandle, transform: NodeTransform);
    /// Update the camera pose used for the next frame.
    fn set_camera(&self, position: DVec3, look_at: DVec3, fov_y: f64);
    /// Drive the sun material's emissive strength.
    fn set_sun_intensity(&self, value: f64);
    /// Move the hover outline to a node, or clear it.
    fn set_outlined(&self, node: Option<NodeHandle>);
    /// Propagate a window resize.
    fn set_viewport(&self, width: f64, height: f64);
    /// Load a texture synchronously and return its handle.
    fn load_texture(&self, path: &Path) -> TextureHandle;
    /// Start an asynchronous mesh load.
    fn load_mesh(&self, path: &Path) -> MeshTicket;
    /// Draw one frame with the transforms pushed so far.
    fn render_frame(&self);
}

/// Shared handle to the active renderer, stored as a resource so systems
/// can reach the collaborator.
#[derive(Resource, Clone)]
pub struct RendererHandle(pub std::sync::Arc<dyn SceneRenderer>);

impl RendererHandle {
    pub fn new(renderer: impl SceneRenderer + 'static) -> Self {
        Self(std::sync::Arc::new(renderer))
    }
}

impl std::ops::Deref for RendererHandle {
    type Target = dyn SceneRenderer;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

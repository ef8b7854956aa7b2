//! Headless collaborator implementations.
//!
//! [`NullRenderer`] and [`NullPanel`] satisfy the boundaries with no-ops so
//! the simulation runs without a GPU or a DOM. [`RecordingRenderer`] and
//! [`RecordingPanel`] additionally log every call for assertions, and let
//! callers decide when (and whether) a pending mesh load completes.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::DVec3;

use crate::panel::InfoPanel;
use crate::renderer::{
    MeshTicket, NodeDesc, NodeHandle, NodeTransform, SceneError, SceneRenderer, TextureHandle,
};

/// Renderer that accepts everything and draws nothing. Mesh loads complete
/// immediately.
#[derive(Default)]
pub struct NullRenderer {
    next_id: AtomicU64,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_handle(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl SceneRenderer for NullRenderer {
    fn add_node(&self, _desc: NodeDesc) -> NodeHandle {
        NodeHandle(self.next_handle())
    }

    fn remove_node(&self, _node: NodeHandle) {}

    fn set_transform(&self, _node: NodeHandle, _transform: NodeTransform) {}

    fn set_camera(&self, _position: DVec3, _look_at: DVec3, _fov_y: f64) {}

    fn set_sun_intensity(&self, _value: f64) {}

    fn set_outlined(&self, _node: Option<NodeHandle>) {}

    fn set_viewport(&self, _width: f64, _height: f64) {}

    fn load_texture(&self, _path: &Path) -> TextureHandle {
        TextureHandle(self.next_handle())
    }

    fn load_mesh(&self, _path: &Path) -> MeshTicket {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let _ = tx.send(Ok(NodeHandle(self.next_handle())));
        rx
    }

    fn render_frame(&self) {}
}

/// One recorded renderer call.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCall {
    AddNode { label: String },
    RemoveNode(u64),
    SetTransform { node: u64, transform: NodeTransform },
    SetCamera { position: DVec3, look_at: DVec3 },
    SetSunIntensity(f64),
    SetOutlined(Option<u64>),
    SetViewport { width: f64, height: f64 },
    LoadTexture { path: String },
    LoadMesh { path: String },
    RenderFrame,
}

/// Renderer double that records calls and holds mesh loads pending until
/// the test completes or fails them.
#[derive(Default)]
pub struct RecordingRenderer {
    next_id: AtomicU64,
    calls: Mutex<Vec<RenderCall>>,
    pending_meshes: Mutex<VecDeque<crossbeam_channel::Sender<Result<NodeHandle, SceneError>>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every call made so far, in order.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of frames rendered so far.
    pub fn frames_rendered(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, RenderCall::RenderFrame))
            .count()
    }

    /// Number of mesh loads still pending.
    pub fn pending_mesh_loads(&self) -> usize {
        self.pending_meshes.lock().map(|p| p.len()).unwrap_or(0)
    }

    /// Complete the oldest pending mesh load successfully. Returns `false`
    /// if none is pending.
    pub fn complete_mesh_load(&self) -> bool {
        let Ok(mut pending) = self.pending_meshes.lock() else {
            return false;
        };
        match pending.pop_front() {
            Some(tx) => {
                let handle = NodeHandle(self.next_id.fetch_add(1, Ordering::Relaxed));
                let _ = tx.send(Ok(handle));
                true
            }
            None => false,
        }
    }

    /// Fail the oldest pending mesh load. Returns `false` if none is pending.
    pub fn fail_mesh_load(&self, path: &str) -> bool {
        let Ok(mut pending) = self.pending_meshes.lock() else {
            return false;
        };
        match pending.pop_front() {
            Some(tx) => {
                let _ = tx.send(Err(SceneError::MeshLoad {
                    path: path.to_string(),
                }));
                true
            }
            None => false,
        }
    }

    fn record(&self, call: RenderCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl SceneRenderer for RecordingRenderer {
    fn add_node(&self, desc: NodeDesc) -> NodeHandle {
        self.record(RenderCall::AddNode {
            label: desc.label().to_string(),
        });
        NodeHandle(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn remove_node(&self, node: NodeHandle) {
        self.record(RenderCall::RemoveNode(node.0));
    }

    fn set_transform(&self, node: NodeHandle, transform: NodeTransform) {
        self.record(RenderCall::SetTransform {
            node: node.0,
            transform,
        });
    }

    fn set_camera(&self, position: DVec3, look_at: DVec3, _fov_y: f64) {
        self.record(RenderCall::SetCamera { position, look_at });
    }

    fn set_sun_intensity(&self, value: f64) {
        self.record(RenderCall::SetSunIntensity(value));
    }

    fn set_outlined(&self, node: Option<NodeHandle>) {
        self.record(RenderCall::SetOutlined(node.map(|n| n.0)));
    }

    fn set_viewport(&self, width: f64, height: f64) {
        self.record(RenderCall::SetViewport { width, height });
    }

    fn load_texture(&self, path: &Path) -> TextureHandle {
        self.record(RenderCall::LoadTexture {
            path: path.display().to_string(),
        });
        TextureHandle(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn load_mesh(&self, path: &Path) -> MeshTicket {
        self.record(RenderCall::LoadMesh {
            path: path.display().to_string(),
        });
        let (tx, rx) = crossbeam_channel::bounded(1);
        if let Ok(mut pending) = self.pending_meshes.lock() {
            pending.push_back(tx);
        }
        rx
    }

    fn render_frame(&self) {
        self.record(RenderCall::RenderFrame);
    }
}

/// Info panel that ignores everything.
#[derive(Default)]
pub struct NullPanel;

impl InfoPanel for NullPanel {
    fn show_info(&self, _body_name: &str) {}

    fn hide_info(&self) {}
}

/// One recorded panel event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    Shown(String),
    Hidden,
}

/// Panel double that records show/hide events.
#[derive(Default)]
pub struct RecordingPanel {
    events: Mutex<Vec<PanelEvent>>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event so far, in order.
    pub fn events(&self) -> Vec<PanelEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// The body currently displayed, if the last event was a show.
    pub fn currently_shown(&self) -> Option<String> {
        match self.events().last() {
            Some(PanelEvent::Shown(name)) => Some(name.clone()),
            _ => None,
        }
    }
}

impl InfoPanel for RecordingPanel {
    fn show_info(&self, body_name: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push(PanelEvent::Shown(body_name.to_string()));
        }
    }

    fn hide_info(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.push(PanelEvent::Hidden);
        }
    }
}

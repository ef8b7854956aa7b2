//! Collaborator boundaries toward the rendering pipeline and the info
//! panel, plus the static scene dressing (orbit paths, habitable zones).
//!
//! Real rendering lives outside this workspace. The traits here are the
//! whole contract; the headless implementations make the simulation fully
//! runnable and testable on their own.

mod doubles;
mod panel;
mod path;
mod renderer;

pub use doubles::{
    NullPanel, NullRenderer, PanelEvent, RecordingPanel, RecordingRenderer, RenderCall,
};
pub use panel::{InfoPanel, InfoPanelHandle};
pub use path::{ORBIT_PATH_SEGMENTS, ZoneBand, habitable_zone_bands, orbit_path_points};
pub use renderer::{
    MeshTicket, NodeDesc, NodeHandle, NodeTransform, RendererHandle, RockInstance, SceneError,
    SceneNode, SceneRenderer, TextureHandle,
};

//! Screen-ray picking: proxy registry, hover highlight, and click selection.
//!
//! The pointer's normalized device coordinates become a world-space ray
//! through the camera; the nearest intersected proxy resolves to its owning
//! body via an explicit registry, never by comparing render-side identities.

mod registry;
mod systems;

pub use registry::{PickRegistry, ProxyEntry, ProxyId, ProxySurface};
pub use systems::{PickHit, click_select_system, hit_test, hover_pick_system};

//! The info-panel collaborator boundary.

use bevy_ecs::prelude::*;

/// The descriptive panel shown when the camera reaches a selected body.
pub trait InfoPanel: Send + Sync {
    /// Display the panel for the named body.
    fn show_info(&self, body_name: &str);
    /// Hide the panel.
    fn hide_info(&self);
}

/// Shared handle to the active info panel.
#[derive(Resource, Clone)]
pub struct InfoPanelHandle(pub std::sync::Arc<dyn InfoPanel>);

impl InfoPanelHandle {
    pub fn new(panel: impl InfoPanel + 'static) -> Self {
        Self(std::sync::Arc::new(panel))
    }
}

impl std::ops::Deref for InfoPanelHandle {
    type Target = dyn InfoPanel;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

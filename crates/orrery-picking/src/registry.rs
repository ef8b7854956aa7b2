//! Registry mapping pickable proxies to the bodies that own them.
//!
//! The renderer owns the actual meshes; the simulation registers one proxy
//! per pickable surface and keeps only the index. Atmosphere shells are
//! separate proxies that resolve to their owning planet, so clicking the
//! haze selects the planet inside it.

use bevy_ecs::prelude::*;

/// Stable handle to one registered pickable surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ProxyId(u32);

impl ProxyId {
    /// Raw index into the registry.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What geometry a proxy stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProxySurface {
    /// The body sphere itself; the pick radius is the body's own radius.
    Body,
    /// A decorative shell (atmosphere) of fixed radius around the body.
    Shell(f64),
}

/// One registered pickable surface and the body it selects.
#[derive(Clone, Copy, Debug)]
pub struct ProxyEntry {
    /// The owning body entity every hit on this proxy resolves to.
    pub body: Entity,
    /// The surface shape used for intersection.
    pub surface: ProxySurface,
}

/// All pickable surfaces, built once while spawning the catalog.
///
/// Append-only: bodies are never removed at runtime, so proxy indices stay
/// valid for the whole session.
#[derive(Resource, Default)]
pub struct PickRegistry {
    entries: Vec<ProxyEntry>,
}

impl PickRegistry {
    /// Register a body sphere. Returns the proxy handle.
    pub fn register_body(&mut self, body: Entity) -> ProxyId {
        self.push(ProxyEntry {
            body,
            surface: ProxySurface::Body,
        })
    }

    /// Register an atmosphere shell around `body` with the given radius.
    pub fn register_shell(&mut self, body: Entity, radius: f64) -> ProxyId {
        self.push(ProxyEntry {
            body,
            surface: ProxySurface::Shell(radius),
        })
    }

    /// The body a proxy resolves to, or `None` for an unknown handle.
    pub fn owner_of(&self, id: ProxyId) -> Option<Entity> {
        self.entries.get(id.index()).map(|entry| entry.body)
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[ProxyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, entry: ProxyEntry) -> ProxyId {
        let id = ProxyId(self.entries.len() as u32);
        self.entries.push(entry);
        id
    }
}

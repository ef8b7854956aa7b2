//! Deferred world mutations and entity helpers.
//!
//! Background loads (moon meshes, fetched catalogs) never touch the world
//! directly. They enqueue a closure into [`MergeQueue`]; the exclusive
//! [`flush_merge_queue`] system applies everything at the start of the next
//! frame, so a body is either fully present or not present at all; no
//! partially attached state is ever visible mid-tick.

use bevy_ecs::prelude::*;
use tracing::debug;

/// Spawns an entity with the given component bundle and returns its Entity ID.
/// Takes `&mut World` directly; intended for setup and tests.
pub fn spawn_entity<B: Bundle>(world: &mut World, bundle: B) -> Entity {
    world.spawn(bundle).id()
}

/// Despawns an entity immediately. Safe to call with a nonexistent entity;
/// returns `false` if the entity was already gone.
pub fn despawn_entity(world: &mut World, entity: Entity) -> bool {
    world.despawn(entity)
}

/// A type-erased deferred world mutation.
type MergeFn = Box<dyn FnOnce(&mut World) + Send + Sync>;

/// Queue of world mutations applied atomically at the start of a frame.
#[derive(Resource, Default)]
pub struct MergeQueue {
    pending: Vec<MergeFn>,
}

impl MergeQueue {
    /// Queue a mutation. It runs when the queue is flushed at the next
    /// frame boundary.
    pub fn enqueue(&mut self, merge: impl FnOnce(&mut World) + Send + Sync + 'static) {
        self.pending.push(Box::new(merge));
    }

    /// Apply all pending mutations in submission order. Returns how many ran.
    pub fn flush(&mut self, world: &mut World) -> usize {
        let pending: Vec<MergeFn> = self.pending.drain(..).collect();
        let count = pending.len();
        for merge in pending {
            merge(world);
        }
        count
    }

    /// Number of pending mutations.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Exclusive system that flushes the [`MergeQueue`].
///
/// Register this as the first system of the frame so completions land
/// before any system reads body state.
pub fn flush_merge_queue(world: &mut World) {
    world.resource_scope(|world, mut queue: Mut<MergeQueue>| {
        let ran = queue.flush(world);
        if ran > 0 {
            debug!("applied {ran} queued world mutations");
        }
    });
}

//! World factory and core resource registration.

use bevy_ecs::world::World;

use crate::{CameraRig, MergeQueue, PointerState, SelectionState, SimulationClock};

/// Insert every resource the frame stages expect.
///
/// Overwrites any existing instances, so call once at startup.
pub fn register_core_resources(world: &mut World) {
    world.insert_resource(SimulationClock::default());
    world.insert_resource(SelectionState::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(CameraRig::default());
    world.insert_resource(MergeQueue::default());
}

/// Create a [`World`] with all core resources registered.
pub fn create_world() -> World {
    let mut world = World::new();
    register_core_resources(&mut world);
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_world_registers_core_resources() {
        let world = create_world();
        assert!(world.contains_resource::<SimulationClock>());
        assert!(world.contains_resource::<SelectionState>());
        assert!(world.contains_resource::<PointerState>());
        assert!(world.contains_resource::<CameraRig>());
        assert!(world.contains_resource::<MergeQueue>());
    }

    #[test]
    fn test_new_world_has_no_entities() {
        let world = create_world();
        assert_eq!(world.entities().len(), 0);
    }
}

//! Deferred moon attachment: moons whose meshes load in the background
//! join the world at the next frame's merge point, never mid-tick.

use bevy_ecs::prelude::*;
use crossbeam_channel::TryRecvError;
use tracing::{info, warn};

use orrery_ecs::MergeQueue;
use orrery_scene::MeshTicket;

use crate::catalog::MoonSpec;
use crate::spawn::spawn_moon;

/// One moon waiting for its mesh to arrive.
pub struct PendingMoon {
    pub parent: Entity,
    pub spec: MoonSpec,
    pub ticket: MeshTicket,
}

/// Moons whose meshes are still loading.
#[derive(Resource, Default)]
pub struct PendingMoonLoads {
    pending: Vec<PendingMoon>,
}

impl PendingMoonLoads {
    pub fn push(&mut self, parent: Entity, spec: MoonSpec, ticket: MeshTicket) {
        self.pending.push(PendingMoon {
            parent,
            spec,
            ticket,
        });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Poll every outstanding mesh load and queue completed moons for the next
/// merge. Runs before the merge queue flushes, so an attached moon is fully
/// present before any other system can see it.
///
/// A failed load drops that one moon with a warning; everything else keeps
/// going.
pub fn drain_moon_loads(mut loads: ResMut<PendingMoonLoads>, mut merges: ResMut<MergeQueue>) {
    let outstanding = std::mem::take(&mut loads.pending);
    for load in outstanding {
        match load.ticket.try_recv() {
            Ok(Ok(node)) => {
                let PendingMoon { parent, spec, .. } = load;
                info!("mesh for {} arrived, attaching at merge", spec.name);
                merges.enqueue(move |world| {
                    spawn_moon(world, parent, &spec, node);
                });
            }
            Ok(Err(err)) => {
                warn!("{} stays out of the scene: {err}", load.spec.name);
            }
            Err(TryRecvError::Empty) => loads.pending.push(load),
            Err(TryRecvError::Disconnected) => {
                warn!(
                    "mesh loader dropped {} without a result",
                    load.spec.name
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_ecs::{SimSchedules, SimStage, create_world, flush_merge_queue};
    use orrery_scene::{NodeHandle, SceneError};

    use crate::components::MoonOf;

    fn test_spec() -> MoonSpec {
        MoonSpec {
            name: "Phobos",
            radius: 1.0,
            orbit_radius: 5.0,
            orbit_speed: 0.002,
            tilt_deg: 0.0,
            spin_step: 0.001,
            texture: None,
            mesh: Some("models/phobos.glb"),
        }
    }

    fn merge_schedules() -> SimSchedules {
        let mut schedules = SimSchedules::new();
        schedules.add_system(SimStage::Merge, (drain_moon_loads, flush_merge_queue).chain());
        schedules
    }

    #[test]
    fn test_completed_load_attaches_at_merge() {
        let mut world = create_world();
        world.init_resource::<PendingMoonLoads>();
        let parent = world.spawn_empty().id();

        let (tx, rx) = crossbeam_channel::bounded(1);
        tx.send(Ok(NodeHandle(9))).unwrap();
        world
            .resource_mut::<PendingMoonLoads>()
            .push(parent, test_spec(), rx);

        merge_schedules().run(&mut world);

        let mut moons = world.query::<&MoonOf>();
        let attached: Vec<_> = moons.iter(&world).collect();
        assert_eq!(attached.len(), 1);
        assert_eq!(attached[0].parent, parent);
        assert!(world.resource::<PendingMoonLoads>().is_empty());
    }

    #[test]
    fn test_failed_load_drops_only_that_moon() {
        let mut world = create_world();
        world.init_resource::<PendingMoonLoads>();
        let parent = world.spawn_empty().id();

        let (tx, rx) = crossbeam_channel::bounded(1);
        tx.send(Err(SceneError::MeshLoad {
            path: "models/phobos.glb".to_string(),
        }))
        .unwrap();
        world
            .resource_mut::<PendingMoonLoads>()
            .push(parent, test_spec(), rx);

        merge_schedules().run(&mut world);

        let mut moons = world.query::<&MoonOf>();
        assert_eq!(moons.iter(&world).count(), 0);
        assert!(world.resource::<PendingMoonLoads>().is_empty());
    }

    #[test]
    fn test_unfinished_load_stays_pending() {
        let mut world = create_world();
        world.init_resource::<PendingMoonLoads>();
        let parent = world.spawn_empty().id();

        let (tx, rx) = crossbeam_channel::bounded::<Result<NodeHandle, SceneError>>(1);
        world
            .resource_mut::<PendingMoonLoads>()
            .push(parent, test_spec(), rx);

        let mut schedules = merge_schedules();
        schedules.run(&mut world);
        assert_eq!(world.resource::<PendingMoonLoads>().len(), 1);

        // Completion is picked up on the following frame.
        tx.send(Ok(NodeHandle(3))).unwrap();
        schedules.run(&mut world);
        assert!(world.resource::<PendingMoonLoads>().is_empty());

        let mut moons = world.query::<&MoonOf>();
        assert_eq!(moons.iter(&world).count(), 1);
    }
}

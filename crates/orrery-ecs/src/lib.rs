//! ECS backbone for the orrery: core components, shared resources, frame
//! stages, and deferred world mutation.
//!
//! Provides the central [`World`](bevy_ecs::world::World) factory and the
//! [`SimSchedules`] runner that drives one simulation frame, stage by stage.

mod camera_rig;
mod clock;
mod components;
mod lifecycle;
mod pointer;
mod schedule;
mod selection;
mod world;

pub use camera_rig::CameraRig;
pub use clock::{
    REFERENCE_FRAME_RATE, SPEED_MULTIPLIER_RANGE, SUN_INTENSITY_RANGE, SimulationClock,
};
pub use components::{BodyBundle, BodyPosition, BodyRadius, Name, ViewOffset};
pub use lifecycle::{MergeQueue, despawn_entity, flush_merge_queue, spawn_entity};
pub use pointer::{PointerState, ndc_from_window};
pub use schedule::{SimSchedules, SimStage};
pub use selection::{CameraPhase, SelectionState};
pub use world::{create_world, register_core_resources};

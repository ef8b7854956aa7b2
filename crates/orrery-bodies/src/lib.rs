//! The bodies of the system: the built-in catalog, their motion, and the
//! merge path that folds fetched records into a running world.
//!
//! Everything here operates on the ECS world from `orrery_ecs`. The catalog
//! spawns the default scene, the motion systems advance it every frame, and
//! [`apply_records`] grafts fetched minor bodies onto it between frames.

pub mod belt;
pub mod catalog;
pub mod components;
pub mod loads;
pub mod merge;
pub mod spawn;
pub mod systems;

pub use belt::{BELT_REVOLUTION_STEP, BeltGenerator};
pub use catalog::{
    ATMOSPHERE_SHELL_MARGIN, AtmosphereSpec, BELTS, BeltSpec, MoonSpec, ORBIT_SPEED_BASE,
    PLANETS, PlanetSpec, RingSpec, SUN, SunSpec,
};
pub use components::{AsteroidBelt, AxialTilt, FollowsBody, MinorBody, MoonOf, OrbitState, SpinState};
pub use loads::{PendingMoon, PendingMoonLoads, drain_moon_loads};
pub use merge::{RECORD_INCLINATION_DEG, RecordMergeReport, apply_records};
pub use spawn::{SpawnedSystem, spawn_moon, spawn_solar_system};
pub use systems::{
    add_motion_systems, advance_belts, advance_orbits, advance_spins, update_followers,
    update_moon_positions,
};

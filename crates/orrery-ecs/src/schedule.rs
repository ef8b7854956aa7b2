//! Frame stage labels and the ordered schedule runner.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{IntoSystemConfigs, ScheduleLabel};

/// Labels for each stage of a simulation frame.
///
/// Stages run in the order listed, top to bottom, exactly once per frame.
/// The loop is cooperative and frame-driven; there is no fixed timestep.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimStage {
    /// Apply queued completions (fetched records, finished moon loads)
    /// before anything reads the world.
    Merge,
    /// Advance the clock, orbital angles, rotations, and belt phases;
    /// recompute every body position.
    Advance,
    /// Hover and click picking against the fresh positions.
    Pick,
    /// Camera targeting state machine.
    Camera,
    /// Push transforms to the renderer and clear transient input.
    Render,
}

/// All stages in execution order.
const STAGE_ORDER: [SimStage; 5] = [
    SimStage::Merge,
    SimStage::Advance,
    SimStage::Pick,
    SimStage::Camera,
    SimStage::Render,
];

/// Ordered collection of [`Schedule`]s that drives one frame.
pub struct SimSchedules {
    schedules: Vec<(SimStage, Schedule)>,
}

impl SimSchedules {
    /// Create an empty schedule set covering every stage.
    pub fn new() -> Self {
        let schedules = STAGE_ORDER
            .into_iter()
            .map(|label| (label, Schedule::default()))
            .collect();
        Self { schedules }
    }

    /// Register a system (or system tuple) into a specific stage.
    pub fn add_system<M>(&mut self, stage: SimStage, system: impl IntoSystemConfigs<M>) {
        for (label, schedule) in &mut self.schedules {
            if *label == stage {
                schedule.add_systems(system);
                return;
            }
        }
        panic!("Unknown stage: {stage:?}");
    }

    /// Run all stages in order for one frame.
    pub fn run(&mut self, world: &mut World) {
        for (_label, schedule) in &mut self.schedules {
            schedule.run(world);
        }
    }

    /// Run a single stage. Useful in tests that drive stages by hand.
    pub fn run_stage(&mut self, target: SimStage, world: &mut World) {
        for (label, schedule) in &mut self.schedules {
            if *label == target {
                schedule.run(world);
                return;
            }
        }
    }

    /// Returns a mutable reference to the schedule for a given stage.
    pub fn get_schedule_mut(&mut self, stage: &SimStage) -> Option<&mut Schedule> {
        self.schedules
            .iter_mut()
            .find(|(label, _)| label == stage)
            .map(|(_, schedule)| schedule)
    }

    /// Force-initialize all schedules, validating the dependency graph.
    pub fn initialize_all(&mut self, world: &mut World) {
        for (_label, schedule) in &mut self.schedules {
            let _ = schedule.initialize(world);
        }
    }
}

impl Default for SimSchedules {
    fn default() -> Self {
        Self::new()
    }
}

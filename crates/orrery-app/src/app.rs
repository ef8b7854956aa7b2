//! Application assembly: world construction, schedule wiring, and the
//! surface a host window layer drives.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use glam::DVec3;
use tracing::info;

use orrery_bodies::{
    PendingMoonLoads, SpawnedSystem, add_motion_systems, drain_moon_loads, spawn_solar_system,
};
use orrery_camera::{CameraTuning, camera_targeting_system, dismiss_system};
use orrery_config::Config;
use orrery_data::{BodyFetcher, FetchPipeline};
use orrery_ecs::{
    CameraRig, PointerState, SelectionState, SimSchedules, SimStage, SimulationClock, create_world,
    flush_merge_queue,
};
use orrery_picking::{PickRegistry, click_select_system, hover_pick_system};
use orrery_scene::{InfoPanel, InfoPanelHandle, RendererHandle, SceneRenderer};

use crate::fetch::{FetchHandle, drain_fetch_outcomes, submit_initial_fetches};
use crate::frame_loop::FrameLoop;
use crate::render::{clear_pointer_transients, push_scene_state};

/// The assembled orrery: world, frame schedules, and pacing.
///
/// The host owns the window and the real renderer; this type owns
/// everything else. Input events arrive through the `on_*` methods between
/// frames, and each [`frame`](Self::frame) call runs one full tick.
pub struct OrreryApp {
    pub world: World,
    pub schedules: SimSchedules,
    pub frame_loop: FrameLoop,
    /// Entities created at startup, kept for hosts that address them.
    pub spawned: SpawnedSystem,
}

impl OrreryApp {
    /// Build the world, spawn the default body set, wire the schedules,
    /// and queue the startup catalog requests.
    ///
    /// The default scene is complete before any fetch returns; records that
    /// arrive later only refine it.
    pub fn new(
        config: &Config,
        renderer: Arc<dyn SceneRenderer>,
        panel: Arc<dyn InfoPanel>,
        fetcher: Arc<dyn BodyFetcher>,
    ) -> Self {
        let mut world = create_world();

        {
            let mut clock = world.resource_mut::<SimulationClock>();
            clock.set_orbit_speed_multiplier(config.simulation.orbit_speed_multiplier);
            clock.set_rotation_speed_multiplier(config.simulation.rotation_speed_multiplier);
            clock.set_sun_intensity(config.simulation.sun_intensity);
        }

        let [x, y, z] = config.camera.rest_position;
        let rest = DVec3::new(x, y, z);
        {
            let mut rig = world.resource_mut::<CameraRig>();
            rig.position = rest;
            rig.fov_y = config.camera.fov_degrees.to_radians();
            rig.set_viewport(config.window.width as f64, config.window.height as f64);
        }
        world.resource_mut::<SelectionState>().rest_camera_position = rest;

        world.insert_resource(CameraTuning {
            approach_damping: config.camera.approach_damping,
            retreat_damping: config.camera.retreat_damping,
            arrival_threshold: config.camera.arrival_threshold,
        });
        world.init_resource::<PickRegistry>();
        world.init_resource::<PendingMoonLoads>();
        world.insert_resource(RendererHandle(renderer.clone()));
        world.insert_resource(InfoPanelHandle(panel));

        let spawned = spawn_solar_system(&mut world, renderer.as_ref());

        let fetches = FetchHandle::new(FetchPipeline::new(
            config.data.fetch_workers,
            config.data.fetch_budget,
            fetcher,
        ));
        submit_initial_fetches(&fetches, config.data.page_limit);
        world.insert_resource(fetches);

        let mut schedules = SimSchedules::new();
        schedules.add_system(
            SimStage::Merge,
            (drain_moon_loads, drain_fetch_outcomes, flush_merge_queue).chain(),
        );
        add_motion_systems(&mut schedules);
        schedules.add_system(
            SimStage::Pick,
            (hover_pick_system, click_select_system).chain(),
        );
        schedules.add_system(
            SimStage::Camera,
            (dismiss_system, camera_targeting_system).chain(),
        );
        schedules.add_system(
            SimStage::Render,
            (push_scene_state, clear_pointer_transients).chain(),
        );

        info!(
            "orrery ready: {} planets, {} belts",
            spawned.planets.len(),
            spawned.belts.len()
        );

        Self {
            world,
            schedules,
            frame_loop: FrameLoop::new(),
            spawned,
        }
    }

    /// Advance the simulation by an explicit delta, in seconds.
    ///
    /// Hosts with their own clock (and tests) call this directly;
    /// interactive hosts go through [`frame`](Self::frame).
    pub fn step(&mut self, dt: f64) {
        self.world.resource_mut::<SimulationClock>().advance(dt);
        self.schedules.run(&mut self.world);
    }

    /// Run one wall-clock frame.
    pub fn frame(&mut self) {
        let world = &mut self.world;
        let schedules = &mut self.schedules;
        self.frame_loop.tick(|dt| {
            world.resource_mut::<SimulationClock>().advance(dt);
            schedules.run(world);
        });
    }

    /// Report a cursor move in window coordinates.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let (width, height) = self.viewport();
        self.world
            .resource_mut::<PointerState>()
            .on_cursor_moved(x, y, width, height);
    }

    /// Report a primary-button press in window coordinates.
    pub fn on_pointer_pressed(&mut self, x: f64, y: f64) {
        let (width, height) = self.viewport();
        self.world
            .resource_mut::<PointerState>()
            .on_pressed(x, y, width, height);
    }

    /// Report the info-panel close action.
    pub fn on_dismiss(&mut self) {
        self.world.resource_mut::<PointerState>().request_dismiss();
    }

    /// Report a window resize to the rig and the renderer together.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.world
            .resource_mut::<CameraRig>()
            .set_viewport(width, height);
        self.world
            .resource::<RendererHandle>()
            .set_viewport(width, height);
    }

    fn viewport(&self) -> (f64, f64) {
        let rig = self.world.resource::<CameraRig>();
        (rig.viewport_width, rig.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use orrery_bodies::{MinorBody, MoonOf, OrbitState};
    use orrery_data::{BodyKind, BodyRecord, StaticFetcher};
    use orrery_ecs::{CameraPhase, Name};
    use orrery_scene::{RecordingPanel, RecordingRenderer, RenderCall};

    fn sample_fetcher() -> StaticFetcher {
        let mut fetcher = StaticFetcher::new();
        fetcher.insert(
            BodyKind::Planet,
            vec![BodyRecord {
                name: "Earth".to_string(),
                semi_major_axis: 1.0,
                eccentricity: 0.017,
                argument_periapsis: 85.9,
                longitude_ascending: 174.8,
            }],
        );
        fetcher.insert(
            BodyKind::Comet,
            vec![BodyRecord {
                name: "1P/Halley".to_string(),
                semi_major_axis: 17.93,
                eccentricity: 0.967,
                argument_periapsis: 111.3,
                longitude_ascending: 58.4,
            }],
        );
        fetcher
    }

    fn build_app() -> (OrreryApp, Arc<RecordingRenderer>, Arc<RecordingPanel>) {
        let renderer = Arc::new(RecordingRenderer::new());
        let panel = Arc::new(RecordingPanel::new());
        let app = OrreryApp::new(
            &Config::default(),
            renderer.clone(),
            panel.clone(),
            Arc::new(sample_fetcher()),
        );
        (app, renderer, panel)
    }

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn test_every_step_renders_a_frame() {
        let (mut app, renderer, _) = build_app();
        for _ in 0..3 {
            app.step(DT);
        }
        assert_eq!(renderer.frames_rendered(), 3);
    }

    #[test]
    fn test_fetched_records_refine_the_scene() {
        let (mut app, _, _) = build_app();
        let earth = app.spawned.planets[2];

        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            app.step(DT);

            let earth_eccentricity = app
                .world
                .get::<OrbitState>(earth)
                .map(|orbit| orbit.elements.eccentricity)
                .unwrap_or(0.0);
            let minor_bodies = app
                .world
                .query_filtered::<&Name, With<MinorBody>>()
                .iter(&app.world)
                .count();

            if earth_eccentricity > 0.0 && minor_bodies == 1 {
                break;
            }
            assert!(Instant::now() < deadline, "feeds never merged");
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_center_click_selects_the_sun_and_opens_the_panel() {
        let (mut app, _, panel) = build_app();

        // The rest pose looks at the origin, so the sun sits mid-screen.
        app.on_pointer_pressed(640.0, 360.0);
        app.step(DT);

        {
            let selection = app.world.resource::<SelectionState>();
            assert_eq!(selection.selected, Some(app.spawned.sun));
            assert_eq!(selection.camera_phase, CameraPhase::MovingToTarget);
        }
        assert_eq!(
            app.world
                .resource::<SimulationClock>()
                .orbit_speed_multiplier,
            0.0,
            "selection pauses orbital motion"
        );

        let mut ticks = 0;
        while panel.currently_shown().is_none() {
            app.step(DT);
            ticks += 1;
            assert!(ticks < 2000, "camera never arrived");
        }
        assert_eq!(panel.currently_shown().as_deref(), Some("Sun"));

        app.on_dismiss();
        app.step(DT);
        assert_eq!(
            app.world
                .resource::<SimulationClock>()
                .orbit_speed_multiplier,
            1.0,
            "dismissal resumes orbital motion"
        );
        assert_eq!(
            app.world.resource::<SelectionState>().camera_phase,
            CameraPhase::MovingToRest
        );
        assert_eq!(panel.currently_shown(), None);
    }

    #[test]
    fn test_async_moon_meshes_attach_through_the_merge_stage() {
        let (mut app, renderer, _) = build_app();
        assert_eq!(
            renderer.pending_mesh_loads(),
            2,
            "both Martian moon meshes start loading at spawn"
        );

        assert!(renderer.complete_mesh_load());
        assert!(renderer.complete_mesh_load());
        app.step(DT);

        let mars = app.spawned.planets[3];
        let martian_moons = app
            .world
            .query::<&MoonOf>()
            .iter(&app.world)
            .filter(|moon| moon.parent == mars)
            .count();
        assert_eq!(martian_moons, 2);
    }

    #[test]
    fn test_resize_reaches_rig_and_renderer() {
        let (mut app, renderer, _) = build_app();
        app.on_resize(1920.0, 1080.0);

        let rig = app.world.resource::<CameraRig>();
        assert_eq!(rig.viewport_width, 1920.0);
        assert_eq!(rig.viewport_height, 1080.0);
        assert!(renderer.calls().contains(&RenderCall::SetViewport {
            width: 1920.0,
            height: 1080.0,
        }));
    }
}

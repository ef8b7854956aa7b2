//! Headless viewer entry point for the orrery.
//!
//! Wires the simulation to the no-op collaborators and runs it for a fixed
//! number of frames. A real host swaps in a GPU renderer and a window
//! layer; everything else stays identical.
//!
//! Run with: `cargo run -p orrery-viewer -- --frames 300`

mod samples;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use orrery_app::OrreryApp;
use orrery_config::{AppDirs, CliArgs, Config, ConfigError};
use orrery_data::{BodyFetcher, JsonDirFetcher};
use orrery_scene::{NullPanel, NullRenderer};

/// Frames to run when `--frames` is absent: five seconds at the reference
/// rate.
const DEFAULT_FRAMES: u64 = 300;

/// Sleep between frames, approximating a 60 Hz display.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    let args = CliArgs::parse();

    let mut config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    let log_dir = AppDirs::resolve().ok().map(|dirs| dirs.log_dir);
    orrery_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    info!("Orrery viewer");
    info!(
        "Window: {}x{} | Title: {}",
        config.window.width, config.window.height, config.window.title
    );

    let frames = args.frames.unwrap_or(DEFAULT_FRAMES);
    let fetcher = choose_fetcher(&config);
    let mut app = OrreryApp::new(
        &config,
        Arc::new(NullRenderer::new()),
        Arc::new(NullPanel),
        fetcher,
    );

    for _ in 0..frames {
        app.frame();
        std::thread::sleep(FRAME_INTERVAL);
    }

    report_run(&mut app, &config);
}

fn load_config(args: &CliArgs) -> Result<Config, ConfigError> {
    match &args.config {
        Some(dir) => Config::load_or_create(dir),
        None => {
            let dirs = AppDirs::resolve()?;
            dirs.create_dirs()?;
            Config::load_or_create(&dirs.config_dir)
        }
    }
}

fn choose_fetcher(config: &Config) -> Arc<dyn BodyFetcher> {
    if config.data.data_dir.as_os_str().is_empty() {
        info!("using the built-in sample catalog");
        Arc::new(samples::sample_fetcher())
    } else {
        info!(
            "reading catalog files from {}",
            config.data.data_dir.display()
        );
        Arc::new(JsonDirFetcher::new(config.data.data_dir.as_path()))
    }
}

fn report_run(app: &mut OrreryApp, config: &Config) {
    use bevy_ecs::prelude::With;
    use orrery_bodies::MinorBody;

    let minor_bodies = app
        .world
        .query_filtered::<(), With<MinorBody>>()
        .iter(&app.world)
        .count();
    info!(
        "run complete: {} frames, {} planets, {} fetched minor bodies",
        app.frame_loop.frame_count(),
        app.spawned.planets.len(),
        minor_bodies
    );

    if config.debug.frame_summary {
        info!(
            "frame pacing: average {:.1}ms over {:.1}s",
            app.frame_loop.average_frame_time() * 1000.0,
            app.frame_loop.total_time()
        );
    }
}

//! Command-line argument parsing for the orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Interactive solar system orrery")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Orbit speed multiplier (0 - 10).
    #[arg(long)]
    pub orbit_speed: Option<f64>,

    /// Rotation speed multiplier (0 - 10).
    #[arg(long)]
    pub rotation_speed: Option<f64>,

    /// Sun light intensity (1 - 10).
    #[arg(long)]
    pub sun_intensity: Option<f64>,

    /// Directory holding catalog JSON files.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate before exiting.
    #[arg(long)]
    pub frames: Option<u64>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(speed) = args.orbit_speed {
            self.simulation.orbit_speed_multiplier = speed;
        }
        if let Some(speed) = args.rotation_speed {
            self.simulation.rotation_speed_multiplier = speed;
        }
        if let Some(intensity) = args.sun_intensity {
            self.simulation.sun_intensity = intensity;
        }
        if let Some(ref dir) = args.data_dir {
            self.data.data_dir = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

//! Configuration system for the orrery.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, forward/backward
//! compatible serialization, and OS directory resolution.

mod cli;
mod config;
mod error;
mod paths;

pub use cli::CliArgs;
pub use config::{CameraConfig, Config, DataConfig, DebugConfig, SimulationConfig, WindowConfig};
pub use error::ConfigError;
pub use paths::AppDirs;

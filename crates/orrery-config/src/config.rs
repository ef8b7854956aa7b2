//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level orrery configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Simulation pacing settings.
    pub simulation: SimulationConfig,
    /// Camera rig settings.
    pub camera: CameraConfig,
    /// Catalog data settings.
    pub data: DataConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

/// Simulation pacing configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Orbit speed multiplier applied at startup (0.0 - 10.0).
    pub orbit_speed_multiplier: f64,
    /// Rotation speed multiplier applied at startup (0.0 - 10.0).
    pub rotation_speed_multiplier: f64,
    /// Sun light intensity (1.0 - 10.0).
    pub sun_intensity: f64,
}

/// Camera rig configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera rest position when nothing is selected.
    pub rest_position: [f64; 3],
    /// Fraction of the remaining distance covered per frame while approaching.
    pub approach_damping: f64,
    /// Fraction of the remaining distance covered per frame while retreating.
    pub retreat_damping: f64,
    /// Distance at which the camera snaps onto its goal.
    pub arrival_threshold: f64,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
}

/// Catalog data configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding catalog JSON files. Empty uses the built-in samples.
    pub data_dir: PathBuf,
    /// Records requested per catalog page.
    pub page_limit: u32,
    /// Fetch worker threads.
    pub fetch_workers: usize,
    /// Maximum fetch requests in flight.
    pub fetch_budget: usize,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log a frame pacing summary when the run ends.
    pub frame_summary: bool,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Orrery".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            orbit_speed_multiplier: 1.0,
            rotation_speed_multiplier: 1.0,
            sun_intensity: 1.9,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rest_position: [-175.0, 115.0, 5.0],
            approach_damping: 0.03,
            retreat_damping: 0.05,
            arrival_threshold: 1.0,
            fov_degrees: 75.0,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            page_limit: 10,
            fetch_workers: 2,
            fetch_budget: 4,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            frame_summary: false,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

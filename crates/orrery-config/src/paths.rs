//! OS directory resolution for the orrery application.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const APP_NAME: &str = "orrery";

/// OS-specific directory paths for the orrery.
///
/// Each field resolves to the platform-appropriate location following OS
/// conventions (XDG on Linux, Known Folders on Windows, Library on macOS).
pub struct AppDirs {
    /// User configuration: `config.ron`.
    pub config_dir: PathBuf,
    /// Catalog data files.
    pub data_dir: PathBuf,
    /// Log files.
    pub log_dir: PathBuf,
}

impl AppDirs {
    /// Resolve platform-specific directories without creating them on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, ConfigError> {
        let config_base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        let app_config = config_base.join(APP_NAME);

        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| app_config.clone())
            .join(APP_NAME);

        Ok(Self {
            config_dir: app_config.join("config"),
            data_dir,
            log_dir: app_config.join("logs"),
        })
    }

    /// Resolve directories rooted under a custom base path.
    ///
    /// Useful for testing without touching real OS directories.
    pub fn resolve_with_root(root: &Path) -> Self {
        let app_dir = root.join(APP_NAME);
        Self {
            config_dir: app_dir.join("config"),
            data_dir: app_dir.join("data"),
            log_dir: app_dir.join("logs"),
        }
    }

    /// Create all directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WriteError`] if any directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.config_dir).map_err(ConfigError::WriteError)?;
        std::fs::create_dir_all(&self.data_dir).map_err(ConfigError::WriteError)?;
        std::fs::create_dir_all(&self.log_dir).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

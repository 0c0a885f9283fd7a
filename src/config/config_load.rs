// src/config/config_load.rs
//
// loading of config.toml

use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub cell: CellLimits,
    pub style: StyleConfig,
    pub sliders: SliderConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::exe_dir_config_path().filter(|path| path.exists()) {
            return Self::load_from_path(&exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    fn exe_dir_config_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        Some(exe_dir.join(CONFIG_FILE))
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        debug!("reading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.grid.rows, self.grid.cols
            )));
        }
        if !(self.grid.cell_size.is_finite() && self.grid.cell_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cell_size must be positive, got {}",
                self.grid.cell_size
            )));
        }
        check_range("arm_length", &self.cell.arm_length)?;
        check_range("pen_width", &self.cell.pen_width)?;
        if self.sliders.initial_value > 100 {
            return Err(ConfigError::Invalid(format!(
                "slider initial_value must be within 0..=100, got {}",
                self.sliders.initial_value
            )));
        }
        if self.sliders.enabled
            && !(self.sliders.row_height.is_finite() && self.sliders.row_height > 0.0)
        {
            return Err(ConfigError::Invalid(String::from(
                "slider row_height must be positive",
            )));
        }
        Ok(())
    }

    /// Canvas plus slider panel, in pixels.
    pub fn window_size(&self) -> (u32, u32) {
        let width = self.grid.cols as f32 * self.grid.cell_size;
        let mut height = self.grid.rows as f32 * self.grid.cell_size;
        if self.sliders.enabled {
            height += self.sliders.row_height * 4.0;
        }
        (width.ceil() as u32, height.ceil() as u32)
    }
}

fn check_range(name: &str, range: &ValueRange) -> Result<(), ConfigError> {
    if !(range.min.is_finite() && range.max.is_finite() && range.default.is_finite()) {
        return Err(ConfigError::Invalid(format!(
            "{name}: bounds must be finite, got {}..={} default {}",
            range.min, range.max, range.default
        )));
    }
    if range.min > range.max {
        return Err(ConfigError::Invalid(format!(
            "{name}: min {} is greater than max {}",
            range.min, range.max
        )));
    }
    if !range.contains(range.default) {
        return Err(ConfigError::Invalid(format!(
            "{name}: default {} is outside {}..={}",
            range.default, range.min, range.max
        )));
    }
    Ok(())
}

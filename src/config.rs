//! Diagram configuration.
//!
//! Loaded from JSON before the diagram is built and passed in through
//! `DiagramOptions`. Every field has a default, so a config file only needs
//! the values it changes.

use crate::constants::{
    DEFAULT_EXTENT, DEFAULT_ZOOM, DRAG_THRESHOLD, GRID_SPACING, KEYBOARD_PAN_FRACTION, MAX_ZOOM,
    MIN_ZOOM, WHEEL_ZOOM_IN_FACTOR, WHEEL_ZOOM_OUT_FACTOR,
};
use crate::error::{ConfigError, ConfigResult};
use crate::render::Theme;
use crate::types::Size;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Zoom range outside of which a warning is logged. Gestures clamp into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
        }
    }
}

impl ZoomRange {
    #[inline]
    pub fn contains(&self, zoom: f64) -> bool {
        zoom >= self.min && zoom <= self.max
    }

    #[inline]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Scrollable world extent
    pub extent: Size,
    pub initial_zoom: f64,
    pub zoom_range: ZoomRange,
    pub wheel_zoom_in_factor: f64,
    pub wheel_zoom_out_factor: f64,
    /// World distance before a press on a selected element starts a move
    pub drag_threshold: f64,
    /// Fraction of the viewport panned per arrow key in pan mode
    pub keyboard_pan_fraction: f64,
    pub grid_spacing: f64,
    pub show_status: bool,
    pub theme: Theme,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            extent: Size::new(DEFAULT_EXTENT.0, DEFAULT_EXTENT.1),
            initial_zoom: DEFAULT_ZOOM,
            zoom_range: ZoomRange::default(),
            wheel_zoom_in_factor: WHEEL_ZOOM_IN_FACTOR,
            wheel_zoom_out_factor: WHEEL_ZOOM_OUT_FACTOR,
            drag_threshold: DRAG_THRESHOLD,
            keyboard_pan_fraction: KEYBOARD_PAN_FRACTION,
            grid_spacing: GRID_SPACING,
            show_status: true,
            theme: Theme::default(),
        }
    }
}

impl DiagramConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        debug!(path = %path.display(), "Loaded diagram config");
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.extent.width >= 0.0 && self.extent.height >= 0.0) {
            return Err(ConfigError::Invalid("Extent must be non-negative".to_string()));
        }

        if !(self.initial_zoom > 0.0 && self.initial_zoom.is_finite()) {
            return Err(ConfigError::Invalid("Initial zoom must be finite and > 0".to_string()));
        }

        if !(self.zoom_range.min > 0.0 && self.zoom_range.min <= self.zoom_range.max) {
            return Err(ConfigError::Invalid(
                "Zoom range must satisfy 0 < min <= max".to_string(),
            ));
        }

        if !(self.wheel_zoom_in_factor > 1.0) || !(self.wheel_zoom_out_factor > 0.0 && self.wheel_zoom_out_factor < 1.0) {
            return Err(ConfigError::Invalid(
                "Wheel zoom factors must zoom in above 1 and out between 0 and 1".to_string(),
            ));
        }

        if !(self.drag_threshold >= 0.0) {
            return Err(ConfigError::Invalid("Drag threshold must be >= 0".to_string()));
        }

        if !(self.keyboard_pan_fraction > 0.0) {
            return Err(ConfigError::Invalid("Keyboard pan fraction must be > 0".to_string()));
        }

        if !(self.grid_spacing > 0.0) {
            return Err(ConfigError::Invalid("Grid spacing must be > 0".to_string()));
        }

        Ok(())
    }
}

/// `<platform config dir>/diagram-core/config.json`, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("diagram-core").join(CONFIG_FILE_NAME))
}

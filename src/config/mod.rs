//! Configuration file support for infographics.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/infographics/config.toml`. Settings include the output directory,
//! canvas size, font candidates and sizes, and palette overrides.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, FontConfig, OutputConfig, ThemeConfig};

use crate::diagram::CanvasSize;
use crate::draw::{Style, Typography};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CANVAS_LIMITS: (i32, i32) = (64, 8192);
const FONT_SIZE_LIMITS: (f64, f64) = (6.0, 200.0);

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [output]
/// directory = "docs/launch"
///
/// [canvas]
/// width = 1536
/// height = 1024
///
/// [fonts]
/// candidates = [
///     { family = "DejaVu Sans", path = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf" },
/// ]
/// body_size = 22
///
/// [theme]
/// background = "#0B1220"
/// critical = [239, 68, 68]
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Output location
    #[serde(default)]
    pub output: OutputConfig,

    /// Raster dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Font candidates and sizes
    #[serde(default)]
    pub fonts: FontConfig,

    /// Palette overrides
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 64 - 8192
    /// - `fonts.*_size`: 6.0 - 200.0
    fn validate_and_clamp(&mut self) {
        let (min, max) = CANVAS_LIMITS;
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(min..=max).contains(&*value) {
                warn!(
                    "Invalid canvas {} {}, clamping to {}-{} range",
                    name, value, min, max
                );
                *value = (*value).clamp(min, max);
            }
        }

        let (min, max) = FONT_SIZE_LIMITS;
        for (name, value) in [
            ("title_size", &mut self.fonts.title_size),
            ("heading_size", &mut self.fonts.heading_size),
            ("body_size", &mut self.fonts.body_size),
            ("caption_size", &mut self.fonts.caption_size),
        ] {
            // NaN fails the range check and clamps to itself, so reset it explicitly
            if value.is_nan() {
                warn!("Invalid font {} NaN, using {:.1}", name, min);
                *value = min;
            } else if !(min..=max).contains(&*value) {
                warn!(
                    "Invalid font {} {:.1}, clamping to {:.1}-{:.1} range",
                    name, value, min, max
                );
                *value = (*value).clamp(min, max);
            }
        }

        if self.fonts.candidates.is_empty() {
            warn!("No font candidates configured, text will use the built-in font");
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/infographics/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("infographics");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Canvas size to render at.
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize {
            width: self.canvas.width,
            height: self.canvas.height,
        }
    }

    /// Resolves fonts and palette into a rendering [`Style`].
    pub fn style(&self) -> Style {
        let typography = Typography::resolve(&self.fonts.candidates, self.fonts.sizes());
        Style::new(self.theme.to_theme(), typography)
    }
}

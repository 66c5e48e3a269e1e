//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::font::default_candidates;
use crate::draw::{FontCandidate, FontSizes, Theme};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where rendered images are written.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Output directory, created if missing. Relative paths resolve against
    /// the working directory.
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

/// Raster dimensions shared by every diagram.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Image width in pixels (valid range: 64 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Image height in pixels (valid range: 64 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Font candidates and per-role pixel sizes.
///
/// Candidates are tried in order; the first one whose file exists and whose
/// family is known to Pango is used. When none qualifies the built-in Cairo
/// font is used instead.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FontConfig {
    /// Ordered font candidates: `{ family = "DejaVu Sans", path = "/usr/share/fonts/..." }`
    #[serde(default = "default_candidates")]
    pub candidates: Vec<FontCandidate>,

    /// Title size in pixels (valid range: 6 - 200)
    #[serde(default = "default_title_size")]
    pub title_size: f64,

    /// Heading size in pixels (valid range: 6 - 200)
    #[serde(default = "default_heading_size")]
    pub heading_size: f64,

    /// Body text size in pixels (valid range: 6 - 200)
    #[serde(default = "default_body_size")]
    pub body_size: f64,

    /// Caption size in pixels (valid range: 6 - 200)
    #[serde(default = "default_caption_size")]
    pub caption_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            title_size: default_title_size(),
            heading_size: default_heading_size(),
            body_size: default_body_size(),
            caption_size: default_caption_size(),
        }
    }
}

impl FontConfig {
    pub fn sizes(&self) -> FontSizes {
        FontSizes {
            title: self.title_size,
            heading: self.heading_size,
            body: self.body_size,
            caption: self.caption_size,
        }
    }
}

/// Palette overrides. Unset tones keep the built-in dark palette.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_alt: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<ColorSpec>,
    /// Fill of the chart callout box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callout: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caution: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevated: Option<ColorSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<ColorSpec>,
}

impl ThemeConfig {
    /// Builds a [`Theme`] from the defaults with every configured tone applied.
    pub fn to_theme(&self) -> Theme {
        let mut theme = Theme::default();
        let overrides = [
            (&self.background, &mut theme.background),
            (&self.surface, &mut theme.surface),
            (&self.surface_alt, &mut theme.surface_alt),
            (&self.border, &mut theme.border),
            (&self.text, &mut theme.text),
            (&self.muted, &mut theme.muted),
            (&self.callout, &mut theme.callout),
            (&self.ok, &mut theme.ok),
            (&self.info, &mut theme.info),
            (&self.caution, &mut theme.caution),
            (&self.elevated, &mut theme.elevated),
            (&self.critical, &mut theme.critical),
        ];
        for (spec, slot) in overrides {
            if let Some(spec) = spec {
                *slot = spec.to_color(*slot);
            }
        }
        theme
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_output_directory() -> PathBuf {
    PathBuf::from("docs/launch")
}

fn default_canvas_width() -> i32 {
    1536
}

fn default_canvas_height() -> i32 {
    1024
}

fn default_title_size() -> f64 {
    FontSizes::default().title
}

fn default_heading_size() -> f64 {
    FontSizes::default().heading
}

fn default_body_size() -> f64 {
    FontSizes::default().body
}

fn default_caption_size() -> f64 {
    FontSizes::default().caption
}

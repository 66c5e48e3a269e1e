//! Configuration enum types.

use crate::draw::Color;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a hex string, a named color, or RGB values.
///
/// # Examples
/// ```toml
/// # Hex color
/// background = "#0B1220"
///
/// # Named color
/// critical = "red"
///
/// # Custom RGB color (0-255 per component)
/// elevated = [251, 146, 60]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#RRGGBB` or one of: red, green, blue, yellow, orange, white, black
    /// (the status hues resolve to the default theme palette)
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Hex strings and named colors that cannot be parsed resolve to
    /// `fallback` with a warning.
    pub fn to_color(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) if name.starts_with('#') => {
                Color::from_hex(name).unwrap_or_else(|| {
                    warn!("Invalid hex color '{}', keeping default", name);
                    fallback
                })
            }
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', keeping default", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn hex_names_and_rgb_resolve() {
        assert_eq!(
            ColorSpec::Name("#EF4444".to_string()).to_color(BLACK),
            Color::from_rgb8(0xEF, 0x44, 0x44)
        );
        assert_eq!(ColorSpec::Name("Red".to_string()).to_color(BLACK), RED);
        assert_eq!(RED, Color::from_rgb8(0xEF, 0x44, 0x44));
        assert_eq!(
            ColorSpec::Rgb([251, 146, 60]).to_color(BLACK),
            Color::from_rgb8(251, 146, 60)
        );
    }

    #[test]
    fn invalid_values_keep_fallback() {
        assert_eq!(ColorSpec::Name("#12".to_string()).to_color(BLACK), BLACK);
        assert_eq!(ColorSpec::Name("mauve".to_string()).to_color(BLACK), BLACK);
    }
}

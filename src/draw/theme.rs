//! Semantic palette: status tokens and surface tones mapped to colors.
//!
//! Shapes never carry raw colors. They name a [`Tone`] and the active
//! [`Theme`] decides what that tone looks like.

use super::color::{BLUE, Color, GREEN, ORANGE, RED, YELLOW};
use serde::{Deserialize, Serialize};

/// Severity or meaning attached to a line item, arrow or chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Affirmative / healthy (green)
    #[default]
    Ok,
    /// Informational (blue)
    Info,
    /// Needs attention (amber)
    Caution,
    /// Escalated but not yet critical (orange)
    Elevated,
    /// Danger (red)
    Critical,
}

/// Every color a shape may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Background,
    Surface,
    SurfaceAlt,
    Border,
    #[default]
    Text,
    Muted,
    /// Fill behind alert callouts
    Callout,
    Status(Status),
}

impl From<Status> for Tone {
    fn from(status: Status) -> Self {
        Tone::Status(status)
    }
}

/// Concrete colors for every [`Tone`].
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub surface_alt: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub callout: Color,
    pub ok: Color,
    pub info: Color,
    pub caution: Color,
    pub elevated: Color,
    pub critical: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x0B, 0x12, 0x20),
            surface: Color::from_rgb8(0x11, 0x1B, 0x30),
            surface_alt: Color::from_rgb8(0x0F, 0x17, 0x2A),
            border: Color::from_rgb8(0x1F, 0x2A, 0x44),
            text: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            muted: Color::from_rgb8(0x94, 0xA3, 0xB8),
            callout: Color::from_rgb8(0x2B, 0x0E, 0x15),
            ok: GREEN,
            info: BLUE,
            caution: YELLOW,
            elevated: ORANGE,
            critical: RED,
        }
    }
}

impl Theme {
    /// Resolves a tone to its color.
    pub fn color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Background => self.background,
            Tone::Surface => self.surface,
            Tone::SurfaceAlt => self.surface_alt,
            Tone::Border => self.border,
            Tone::Text => self.text,
            Tone::Muted => self.muted,
            Tone::Callout => self.callout,
            Tone::Status(status) => self.status(status),
        }
    }

    pub fn status(&self, status: Status) -> Color {
        match status {
            Status::Ok => self.ok,
            Status::Info => self.info,
            Status::Caution => self.caution,
            Status::Elevated => self.elevated,
            Status::Critical => self.critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tones_resolve_through_status_palette() {
        let theme = Theme::default();
        assert_eq!(theme.color(Status::Critical.into()), theme.critical);
        assert_eq!(theme.color(Tone::Status(Status::Ok)), Color::from_hex("#16A34A").unwrap());
        assert_eq!(theme.color(Tone::Muted), Color::from_hex("#94A3B8").unwrap());
    }

    #[test]
    fn defaults_match_the_documented_palette() {
        assert_eq!(Status::default(), Status::Ok);
        assert_eq!(Tone::default(), Tone::Text);
    }
}

//! RGBA color type and predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use infographics::draw::Color;
/// let white = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
/// assert_eq!(Color::from_hex("#FFFFFF"), Some(white));
/// let surface = Color::from_hex("#111B30").unwrap();
/// assert_eq!(surface, Color::from_rgb8(0x11, 0x1B, 0x30));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 0-255 channel values.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#RRGGBB` (or `RRGGBB`) into an opaque color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Sets this color as the source of the given Cairo context.
    pub(crate) fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

// Named status hues share the default theme's palette, so `critical = "red"`
// in a config file renders the same red as the built-in diagrams.

/// Critical red (#EF4444)
pub const RED: Color = Color::from_rgb8(0xEF, 0x44, 0x44);

/// Ok green (#16A34A)
pub const GREEN: Color = Color::from_rgb8(0x16, 0xA3, 0x4A);

/// Info blue (#38BDF8)
pub const BLUE: Color = Color::from_rgb8(0x38, 0xBD, 0xF8);

/// Caution amber (#F59E0B)
pub const YELLOW: Color = Color::from_rgb8(0xF5, 0x9E, 0x0B);

/// Elevated orange (#FB923C)
pub const ORANGE: Color = Color::from_rgb8(0xFB, 0x92, 0x3C);

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

//! Raster canvas and the primitive drawing operations (Cairo-based).
//!
//! Every primitive mutates the surface in place and reports invalid geometry
//! or Cairo failures to the caller instead of skipping the draw.

use super::color::Color;
use super::error::DrawError;
use super::font::{BUILTIN_FAMILY, Font, FontWeight};
use crate::util::{Point, Rect};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while encoding a canvas to PNG.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),
}

/// A fixed-size raster surface with its drawing context.
///
/// The background color is painted once at creation. Consume the canvas with
/// [`Canvas::write_png`] or [`Canvas::finish`] once drawing is done.
pub struct Canvas {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    ///
    /// # Errors
    /// Returns [`DrawError::InvalidGeometry`] for a zero or negative size.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, DrawError> {
        if width <= 0 || height <= 0 {
            return Err(DrawError::InvalidGeometry(format!(
                "canvas size {width}x{height} must be positive"
            )));
        }
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)?;
        let ctx = cairo::Context::new(&surface)?;
        background.apply(&ctx);
        ctx.paint()?;
        Ok(Self {
            surface,
            ctx,
            width,
            height,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The full canvas area.
    pub fn bounds(&self) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }

    /// Draws a rectangle with rounded corners.
    ///
    /// `fill` and `outline` are independently optional. The outline is stroked
    /// inside `bounds`, so nothing is painted outside of it. The radius is
    /// clamped to half of the shorter side.
    pub fn rounded_rectangle(
        &mut self,
        bounds: Rect,
        radius: f64,
        fill: Option<Color>,
        outline: Option<Color>,
        outline_width: f64,
    ) -> Result<(), DrawError> {
        if radius < 0.0 || !radius.is_finite() {
            return Err(DrawError::InvalidGeometry(format!(
                "corner radius {radius} must be non-negative"
            )));
        }
        let stroke = match outline {
            Some(_) if outline_width <= 0.0 => {
                return Err(DrawError::InvalidGeometry(format!(
                    "outline width {outline_width} must be positive"
                )));
            }
            Some(_) => outline_width,
            None => 0.0,
        };

        let inset = stroke / 2.0;
        let x = bounds.x as f64 + inset;
        let y = bounds.y as f64 + inset;
        let w = (bounds.width as f64 - stroke).max(0.0);
        let h = (bounds.height as f64 - stroke).max(0.0);
        let r = (radius - inset).clamp(0.0, w.min(h) / 2.0);

        self.ctx.new_path();
        self.ctx.arc(x + w - r, y + r, r, -FRAC_PI_2, 0.0);
        self.ctx.arc(x + w - r, y + h - r, r, 0.0, FRAC_PI_2);
        self.ctx.arc(x + r, y + h - r, r, FRAC_PI_2, PI);
        self.ctx.arc(x + r, y + r, r, PI, 3.0 * FRAC_PI_2);
        self.ctx.close_path();

        if let Some(fill) = fill {
            fill.apply(&self.ctx);
            if outline.is_some() {
                self.ctx.fill_preserve()?;
            } else {
                self.ctx.fill()?;
            }
        }
        if let Some(outline) = outline {
            outline.apply(&self.ctx);
            self.ctx.set_line_width(stroke);
            self.ctx.set_line_join(cairo::LineJoin::Round);
            self.ctx.stroke()?;
        }
        self.ctx.new_path();
        Ok(())
    }

    /// Draws single-line text with its top-left corner at `position`.
    ///
    /// No wrapping or truncation is performed.
    pub fn text(
        &mut self,
        position: Point,
        text: &str,
        color: Color,
        font: &Font,
    ) -> Result<(), DrawError> {
        self.ctx.save()?;
        color.apply(&self.ctx);
        match font.pango_description() {
            Some(desc) => {
                let layout = pangocairo::functions::create_layout(&self.ctx);
                layout.set_font_description(Some(&desc));
                layout.set_text(text);
                self.ctx.move_to(position.x as f64, position.y as f64);
                pangocairo::functions::show_layout(&self.ctx, &layout);
                self.ctx.status()?;
            }
            None => {
                let weight = match font.weight {
                    FontWeight::Bold => cairo::FontWeight::Bold,
                    FontWeight::Normal => cairo::FontWeight::Normal,
                };
                self.ctx
                    .select_font_face(BUILTIN_FAMILY, cairo::FontSlant::Normal, weight);
                self.ctx.set_font_size(font.size);
                let extents = self.ctx.font_extents()?;
                self.ctx
                    .move_to(position.x as f64, position.y as f64 + extents.ascent());
                self.ctx.show_text(text)?;
            }
        }
        self.ctx.new_path();
        self.ctx.restore()?;
        Ok(())
    }

    /// Draws a straight stroked segment with round caps.
    pub fn line(&mut self, p1: Point, p2: Point, color: Color, width: f64) -> Result<(), DrawError> {
        if width <= 0.0 {
            return Err(DrawError::InvalidGeometry(format!(
                "line width {width} must be positive"
            )));
        }
        color.apply(&self.ctx);
        self.ctx.set_line_width(width);
        self.ctx.set_line_cap(cairo::LineCap::Round);
        self.ctx.move_to(p1.x as f64, p1.y as f64);
        self.ctx.line_to(p2.x as f64, p2.y as f64);
        self.ctx.stroke()?;
        Ok(())
    }

    /// Fills the closed shape through `points`.
    ///
    /// # Errors
    /// Returns [`DrawError::InvalidGeometry`] for fewer than three points.
    pub fn polygon(&mut self, points: &[Point], fill: Color) -> Result<(), DrawError> {
        let [first, rest @ ..] = points else {
            return Err(DrawError::InvalidGeometry("polygon has no points".into()));
        };
        if rest.len() < 2 {
            return Err(DrawError::InvalidGeometry(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        fill.apply(&self.ctx);
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill()?;
        Ok(())
    }

    /// Fills the ellipse inscribed in `bounds`.
    pub fn ellipse(&mut self, bounds: Rect, fill: Color) -> Result<(), DrawError> {
        let rx = bounds.width as f64 / 2.0;
        let ry = bounds.height as f64 / 2.0;

        fill.apply(&self.ctx);
        self.ctx.save()?;
        self.ctx.translate(bounds.x as f64 + rx, bounds.y as f64 + ry);
        self.ctx.scale(rx, ry);
        self.ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * PI);
        self.ctx.restore()?;
        self.ctx.fill()?;
        Ok(())
    }

    /// Releases the drawing context and returns the finished surface.
    pub fn finish(self) -> cairo::ImageSurface {
        let Canvas { surface, ctx, .. } = self;
        drop(ctx);
        surface.flush();
        surface
    }

    /// Encodes the canvas as PNG into `path`, consuming it.
    pub fn write_png(self, path: &Path) -> Result<(), SaveError> {
        let surface = self.finish();
        let mut file = File::create(path).map_err(|source| SaveError::Create {
            path: path.display().to_string(),
            source,
        })?;
        surface.write_to_png(&mut file)?;
        Ok(())
    }
}

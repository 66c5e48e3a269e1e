//! Composite shapes built on the canvas primitives.
//!
//! Every composite takes fully specified geometry from the caller; nothing is
//! auto-sized and contained content is never checked against its container.

use super::canvas::Canvas;
use super::chart::{self, TimelineChart};
use super::error::DrawError;
use super::font::{FontRole, Typography};
use super::shape::Shape;
use super::theme::{Status, Theme, Tone};
use crate::util::{self, Point, Rect};

// ============================================================================
// Layout Constants
// ============================================================================

/// Corner radius of a panel
pub const PANEL_RADIUS: f64 = 20.0;
/// Outline width shared by panels, blocks, charts and callouts
pub const OUTLINE_WIDTH: f64 = 2.0;
/// Panel title offset from the panel's top-left corner
const PANEL_TITLE_INSET: (i32, i32) = (20, 14);
/// Bullet dot diameter
const BULLET_DOT_SIZE: i32 = 10;
/// Bullet dot offset below the label's top edge
const BULLET_DOT_OFFSET_Y: i32 = 8;
/// Bullet label offset right of the dot's left edge
const BULLET_LABEL_OFFSET_X: i32 = 18;
/// Arrow shaft width
pub const ARROW_WIDTH: f64 = 4.0;

/// Theme and fonts shared by every composite shape in a rendering pass.
#[derive(Debug, Clone)]
pub struct Style {
    pub theme: Theme,
    pub typography: Typography,
}

impl Style {
    pub fn new(theme: Theme, typography: Typography) -> Self {
        Self { theme, typography }
    }
}

/// Where a panel draws its title.
pub fn panel_title_origin(bounds: Rect) -> Point {
    bounds.origin().offset(PANEL_TITLE_INSET.0, PANEL_TITLE_INSET.1)
}

/// Bounds of the status dot of a bullet whose label starts at `(x, y)`.
pub fn bullet_dot_bounds(x: i32, y: i32) -> Result<Rect, DrawError> {
    Rect::new(
        x,
        y.saturating_add(BULLET_DOT_OFFSET_Y),
        BULLET_DOT_SIZE,
        BULLET_DOT_SIZE,
    )
}

/// Where a bullet draws its label.
pub fn bullet_label_origin(x: i32, y: i32) -> Point {
    Point::new(x, y).offset(BULLET_LABEL_OFFSET_X, 0)
}

/// Draws a bordered rounded container with an optional title.
pub fn panel(
    canvas: &mut Canvas,
    style: &Style,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    title: Option<&str>,
) -> Result<(), DrawError> {
    let bounds = Rect::new(x, y, w, h)?;
    canvas.rounded_rectangle(
        bounds,
        PANEL_RADIUS,
        Some(style.theme.surface),
        Some(style.theme.border),
        OUTLINE_WIDTH,
    )?;
    if let Some(title) = title {
        canvas.text(
            panel_title_origin(bounds),
            title,
            style.theme.text,
            style.typography.font(FontRole::Heading),
        )?;
    }
    Ok(())
}

/// Draws a status dot followed by a label in the body font.
///
/// The dot carries the status color; the label always uses the theme text color.
pub fn bullet(
    canvas: &mut Canvas,
    style: &Style,
    x: i32,
    y: i32,
    text: &str,
    status: Status,
) -> Result<(), DrawError> {
    canvas.ellipse(bullet_dot_bounds(x, y)?, style.theme.status(status))?;
    canvas.text(
        bullet_label_origin(x, y),
        text,
        style.theme.text,
        style.typography.font(FontRole::Body),
    )
}

/// Draws a line from `(x1, y1)` to `(x2, y2)` with a filled head at the end.
///
/// The head points right when `x2 >= x1` and left otherwise.
pub fn arrow(
    canvas: &mut Canvas,
    style: &Style,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    status: Status,
) -> Result<(), DrawError> {
    let color = style.theme.status(status);
    let from = Point::new(x1, y1);
    let to = Point::new(x2, y2);
    canvas.line(from, to, color, ARROW_WIDTH)?;
    canvas.polygon(&util::arrowhead_triangle(from, to), color)
}

/// Draws free text at its top-left corner.
pub fn text(
    canvas: &mut Canvas,
    style: &Style,
    x: i32,
    y: i32,
    text: &str,
    role: FontRole,
    tone: Tone,
) -> Result<(), DrawError> {
    canvas.text(
        Point::new(x, y),
        text,
        style.theme.color(tone),
        style.typography.font(role),
    )
}

/// Draws a plain rounded rectangle in theme tones.
pub fn block(
    canvas: &mut Canvas,
    style: &Style,
    bounds: Rect,
    radius: f64,
    fill: Tone,
    outline: Option<Tone>,
) -> Result<(), DrawError> {
    canvas.rounded_rectangle(
        bounds,
        radius,
        Some(style.theme.color(fill)),
        outline.map(|tone| style.theme.color(tone)),
        OUTLINE_WIDTH,
    )
}

/// Renders all shapes in order (first shape = bottom layer).
pub fn render_shapes(canvas: &mut Canvas, style: &Style, shapes: &[Shape]) -> Result<(), DrawError> {
    for shape in shapes {
        render_shape(canvas, style, shape)?;
    }
    Ok(())
}

/// Renders a single shape by dispatching to its composite.
pub fn render_shape(canvas: &mut Canvas, style: &Style, shape: &Shape) -> Result<(), DrawError> {
    match shape {
        Shape::Panel { x, y, w, h, title } => {
            panel(canvas, style, *x, *y, *w, *h, title.as_deref())
        }
        Shape::Bullet { x, y, text, status } => bullet(canvas, style, *x, *y, text, *status),
        Shape::Arrow {
            x1,
            y1,
            x2,
            y2,
            status,
        } => arrow(canvas, style, *x1, *y1, *x2, *y2, *status),
        Shape::Chart(timeline) => timeline_chart(canvas, style, timeline),
        Shape::Text {
            x,
            y,
            text: content,
            role,
            tone,
        } => text(canvas, style, *x, *y, content, *role, *tone),
        Shape::Block {
            x,
            y,
            w,
            h,
            radius,
            fill,
            outline,
        } => block(canvas, style, Rect::new(*x, *y, *w, *h)?, *radius, *fill, *outline),
    }
}

/// Draws a timeline chart; see [`chart::render_timeline_chart`].
pub fn timeline_chart(
    canvas: &mut Canvas,
    style: &Style,
    timeline: &TimelineChart,
) -> Result<(), DrawError> {
    chart::render_timeline_chart(canvas, style, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::font::{FontFace, FontSizes};

    fn style() -> Style {
        Style::new(
            Theme::default(),
            Typography::new(FontFace::Builtin, FontSizes::default()),
        )
    }

    #[test]
    fn panel_title_is_inset_from_corner() {
        let bounds = Rect::new(56, 180, 280, 260).unwrap();
        assert_eq!(panel_title_origin(bounds), Point::new(76, 194));
    }

    #[test]
    fn bullet_geometry_offsets() {
        assert_eq!(bullet_dot_bounds(82, 242).unwrap(), Rect::new(82, 250, 10, 10).unwrap());
        assert!(bullet_dot_bounds(0, i32::MAX - 12).is_err());
        assert_eq!(bullet_label_origin(82, 242), Point::new(100, 242));
    }

    #[test]
    fn panel_rejects_empty_size() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(100, 100, theme.background).unwrap();
        let err = panel(&mut canvas, &style(), 10, 10, 0, 40, Some("Empty"));
        assert!(matches!(err, Err(DrawError::InvalidGeometry(_))));
    }

    #[test]
    fn block_shape_rejects_negative_height() {
        let theme = Theme::default();
        let mut canvas = Canvas::new(100, 100, theme.background).unwrap();
        let shape = Shape::Block {
            x: 0,
            y: 0,
            w: 10,
            h: -5,
            radius: 4.0,
            fill: Tone::Surface,
            outline: None,
        };
        assert!(render_shape(&mut canvas, &style(), &shape).is_err());
    }
}

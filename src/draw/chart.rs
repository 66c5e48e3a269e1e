//! Timeline chart: connected series of normalized points inside a container,
//! with static legend captions and an optional alert callout.
//!
//! There are no axes, gridlines or ticks.

use super::canvas::Canvas;
use super::error::DrawError;
use super::font::FontRole;
use super::render::{self, OUTLINE_WIDTH, Style};
use super::theme::Status;
use crate::util::{self, NormalizedPoint, Point, Rect};
use serde::{Deserialize, Serialize};

/// Corner radius of the chart container and the callout box
const CHART_RADIUS: f64 = 12.0;
/// Stroke width of a series line
const SERIES_WIDTH: f64 = 5.0;
/// Radius of the marker dot drawn at each point
const MARKER_RADIUS: i32 = 5;
/// Legend caption offset from the chart's top-left corner
const LEGEND_INSET: (i32, i32) = (30, 18);
/// Vertical distance between legend captions
const LEGEND_SPACING: i32 = 34;

/// One line of the chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend caption
    pub label: String,
    /// Line, marker and caption color
    pub status: Status,
    /// Points in drawing order
    pub points: Vec<NormalizedPoint>,
}

/// Callout box pinned to a point of interest in the chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Point of interest, in the chart's normalized space
    pub anchor: NormalizedPoint,
    /// First line, in the body font
    pub headline: String,
    /// Second line, in the caption font
    pub detail: String,
    /// Outline and pointer color
    #[serde(default = "default_annotation_status")]
    pub status: Status,
}

fn default_annotation_status() -> Status {
    Status::Critical
}

/// Pixel layout of an [`Annotation`], relative to its mapped anchor `(ax, ay)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalloutLayout {
    pub anchor: Point,
    /// `(ax-170, ay-120)` to `(ax+220, ay+30)`
    pub frame: Rect,
    pub headline: Point,
    pub detail: Point,
    pub pointer_from: Point,
    pub pointer_to: Point,
}

impl Annotation {
    pub fn layout(&self, bounds: Rect) -> Result<CalloutLayout, DrawError> {
        let anchor = util::map_normalized(bounds, self.anchor)?;
        let corner = anchor.offset(-170, -120);
        Ok(CalloutLayout {
            anchor,
            frame: Rect::new(corner.x, corner.y, 390, 150)?,
            headline: anchor.offset(-150, -94),
            detail: anchor.offset(-150, -54),
            pointer_from: anchor.offset(-30, -8),
            pointer_to: anchor.offset(10, 18),
        })
    }
}

/// A minimal illustrative line chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineChart {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub series: Vec<ChartSeries>,
    #[serde(default)]
    pub annotation: Option<Annotation>,
}

impl TimelineChart {
    pub fn bounds(&self) -> Result<Rect, DrawError> {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Maps a series into pixel space, preserving point order.
    pub fn pixels(&self, series: &ChartSeries) -> Result<Vec<Point>, DrawError> {
        let bounds = self.bounds()?;
        series
            .points
            .iter()
            .map(|p| util::map_normalized(bounds, *p))
            .collect()
    }

    /// Where the legend caption of series `index` is drawn.
    pub fn legend_origin(&self, index: usize) -> Point {
        let row = i32::try_from(index).map_or(i32::MAX, |i| i.saturating_mul(LEGEND_SPACING));
        Point::new(self.x, self.y)
            .offset(LEGEND_INSET.0, LEGEND_INSET.1)
            .offset(0, row)
    }
}

/// Draws the container, each series with markers, legend captions and the
/// optional callout.
pub fn render_timeline_chart(
    canvas: &mut Canvas,
    style: &Style,
    chart: &TimelineChart,
) -> Result<(), DrawError> {
    let bounds = chart.bounds()?;
    let theme = &style.theme;
    canvas.rounded_rectangle(
        bounds,
        CHART_RADIUS,
        Some(theme.surface_alt),
        Some(theme.border),
        OUTLINE_WIDTH,
    )?;

    let mapped = chart
        .series
        .iter()
        .map(|series| -> Result<_, DrawError> {
            Ok((theme.status(series.status), chart.pixels(series)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Lines first so that every marker sits on top of every line.
    for (color, points) in &mapped {
        for pair in points.windows(2) {
            canvas.line(pair[0], pair[1], *color, SERIES_WIDTH)?;
        }
    }
    for (color, points) in &mapped {
        for p in points {
            let corner = p.offset(-MARKER_RADIUS, -MARKER_RADIUS);
            let marker = Rect::new(corner.x, corner.y, MARKER_RADIUS * 2, MARKER_RADIUS * 2)?;
            canvas.ellipse(marker, *color)?;
        }
    }

    let caption = style.typography.font(FontRole::Caption);
    for (index, series) in chart.series.iter().enumerate() {
        canvas.text(
            chart.legend_origin(index),
            &series.label,
            theme.status(series.status),
            caption,
        )?;
    }

    if let Some(annotation) = &chart.annotation {
        let layout = annotation.layout(bounds)?;
        canvas.rounded_rectangle(
            layout.frame,
            CHART_RADIUS,
            Some(theme.callout),
            Some(theme.status(annotation.status)),
            OUTLINE_WIDTH,
        )?;
        canvas.text(
            layout.headline,
            &annotation.headline,
            theme.text,
            style.typography.font(FontRole::Body),
        )?;
        canvas.text(layout.detail, &annotation.detail, theme.text, caption)?;
        render::arrow(
            canvas,
            style,
            layout.pointer_from.x,
            layout.pointer_from.y,
            layout.pointer_to.x,
            layout.pointer_to.y,
            annotation.status,
        )?;
    }
    Ok(())
}

//! Declarative shape descriptions.

use super::chart::TimelineChart;
use super::font::FontRole;
use super::render;
use super::theme::{Status, Tone};
use crate::util::{self, Point, Rect};
use serde::{Deserialize, Serialize};

/// Represents one element of a diagram.
///
/// Diagrams are plain lists of shapes; a single renderer interprets every
/// variant the same way regardless of which diagram it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Shape {
    /// Bordered rounded container with an optional heading
    Panel {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    /// Status dot plus label
    Bullet {
        x: i32,
        y: i32,
        text: String,
        #[serde(default)]
        status: Status,
    },
    /// Straight connector with a left- or right-pointing head at `(x2, y2)`
    Arrow {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        #[serde(default = "default_arrow_status")]
        status: Status,
    },
    /// Timeline chart with optional callout
    Chart(TimelineChart),
    /// Free text anchored at its top-left corner
    Text {
        x: i32,
        y: i32,
        text: String,
        #[serde(default)]
        role: FontRole,
        #[serde(default)]
        tone: Tone,
    },
    /// Plain rounded rectangle
    Block {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: f64,
        fill: Tone,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        outline: Option<Tone>,
    },
}

fn default_arrow_status() -> Status {
    Status::Info
}

impl Shape {
    pub fn panel(x: i32, y: i32, w: i32, h: i32, title: &str) -> Self {
        Shape::Panel {
            x,
            y,
            w,
            h,
            title: Some(title.to_string()),
        }
    }

    pub fn bullet(x: i32, y: i32, text: &str, status: Status) -> Self {
        Shape::Bullet {
            x,
            y,
            text: text.to_string(),
            status,
        }
    }

    pub fn arrow(x1: i32, y1: i32, x2: i32, y2: i32, status: Status) -> Self {
        Shape::Arrow {
            x1,
            y1,
            x2,
            y2,
            status,
        }
    }

    pub fn text(x: i32, y: i32, text: &str, role: FontRole, tone: Tone) -> Self {
        Shape::Text {
            x,
            y,
            text: text.to_string(),
            role,
            tone,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn block(
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: f64,
        fill: Tone,
        outline: Option<Tone>,
    ) -> Self {
        Shape::Block {
            x,
            y,
            w,
            h,
            radius,
            fill,
            outline,
        }
    }

    /// Returns the painted extent of this shape.
    ///
    /// Text extents depend on the resolved font, so text (including panel
    /// titles and bullet labels) only contributes its anchor. Returns `None`
    /// when the shape has invalid geometry.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Shape::Panel { x, y, w, h, .. } | Shape::Block { x, y, w, h, .. } => {
                Rect::new(*x, *y, *w, *h).ok()
            }
            Shape::Bullet { x, y, .. } => {
                let dot = render::bullet_dot_bounds(*x, *y).ok()?;
                let label = render::bullet_label_origin(*x, *y);
                Rect::new(label.x, label.y, 1, 1).ok().map(|r| r.union(dot))
            }
            Shape::Arrow { x1, y1, x2, y2, .. } => {
                let from = Point::new(*x1, *y1);
                let to = Point::new(*x2, *y2);
                let [tip, upper, lower] = util::arrowhead_triangle(from, to);
                let padding = (render::ARROW_WIDTH / 2.0).ceil() as i32;
                util::bounding_box_for_points(&[from, tip, upper, lower], padding)
            }
            Shape::Chart(chart) => {
                let bounds = chart.bounds().ok()?;
                match &chart.annotation {
                    Some(annotation) => {
                        let layout = annotation.layout(bounds).ok()?;
                        Some(bounds.union(layout.frame))
                    }
                    None => Some(bounds),
                }
            }
            Shape::Text { x, y, .. } => Rect::new(*x, *y, 1, 1).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_bounding_box_is_its_geometry() {
        let shape = Shape::Panel {
            x: 56,
            y: 180,
            w: 280,
            h: 260,
            title: Some("Clients".to_string()),
        };
        assert_eq!(
            shape.bounding_box(),
            Some(Rect::new(56, 180, 280, 260).unwrap())
        );
    }

    #[test]
    fn invalid_panel_has_no_bounding_box() {
        let shape = Shape::Panel {
            x: 0,
            y: 0,
            w: -10,
            h: 10,
            title: None,
        };
        assert!(shape.bounding_box().is_none());
    }

    #[test]
    fn arrow_bounding_box_includes_head() {
        let shape = Shape::Arrow {
            x1: 336,
            y1: 310,
            x2: 390,
            y2: 310,
            status: Status::Info,
        };
        let rect = shape.bounding_box().unwrap();
        assert_eq!(rect.x, 334);
        assert_eq!(rect.right(), 392);
        assert_eq!(rect.y, 300);
        assert_eq!(rect.bottom(), 320);
    }

    #[test]
    fn bullet_bounding_box_covers_dot() {
        let shape = Shape::Bullet {
            x: 82,
            y: 242,
            text: "CLI".to_string(),
            status: Status::Ok,
        };
        let rect = shape.bounding_box().unwrap();
        assert!(rect.contains_rect(&render::bullet_dot_bounds(82, 242).unwrap()));
        assert_eq!(rect.y, 242);
    }

    #[test]
    fn shapes_deserialize_with_defaults() {
        #[derive(Deserialize)]
        struct Doc {
            shapes: Vec<Shape>,
        }
        let doc: Doc = toml::from_str(
            r#"
            [[shapes]]
            kind = "bullet"
            x = 1
            y = 2
            text = "OpenClaw"

            [[shapes]]
            kind = "arrow"
            x1 = 0
            y1 = 0
            x2 = 10
            y2 = 0

            [[shapes]]
            kind = "text"
            x = 5
            y = 6
            text = "Boundary note:"
            role = "heading"

            [[shapes]]
            kind = "block"
            x = 0
            y = 0
            w = 10
            h = 10
            radius = 4.0
            fill = { status = "critical" }
            "#,
        )
        .unwrap();

        assert_eq!(
            doc.shapes[0],
            Shape::Bullet {
                x: 1,
                y: 2,
                text: "OpenClaw".to_string(),
                status: Status::Ok
            }
        );
        assert!(matches!(
            doc.shapes[1],
            Shape::Arrow {
                status: Status::Info,
                ..
            }
        ));
        assert!(matches!(
            doc.shapes[2],
            Shape::Text {
                role: FontRole::Heading,
                tone: Tone::Text,
                ..
            }
        ));
        assert!(matches!(
            doc.shapes[3],
            Shape::Block {
                fill: Tone::Status(Status::Critical),
                outline: None,
                ..
            }
        ));
    }

    #[test]
    fn chart_layout_round_trips_through_toml() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Doc {
            shapes: Vec<Shape>,
        }
        let doc: Doc = toml::from_str(
            r#"
            [[shapes]]
            kind = "chart"
            x = 92
            y = 560
            w = 1360
            h = 300

            [[shapes.series]]
            label = "local"
            status = "ok"
            points = [{ x = 0.05, y = 0.78 }, { x = 0.93, y = 0.40 }]

            [[shapes.series]]
            label = "remote"
            status = "critical"
            points = [{ x = 0.05, y = 0.78 }, { x = 0.80, y = 0.30 }]

            [shapes.annotation]
            anchor = { x = 0.82, y = 0.30 }
            headline = "Delta exceeds threshold"
            detail = "Risk -> RED"
            "#,
        )
        .unwrap();

        let Shape::Chart(chart) = &doc.shapes[0] else {
            panic!("expected a chart, got {:?}", doc.shapes[0]);
        };
        assert_eq!(chart.bounds().unwrap(), Rect::new(92, 560, 1360, 300).unwrap());
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[1].status, Status::Critical);
        assert_eq!(
            chart.series[0].points[1],
            util::NormalizedPoint::new(0.93, 0.40)
        );
        let annotation = chart.annotation.as_ref().unwrap();
        assert_eq!(annotation.status, Status::Critical);
        assert_eq!(annotation.headline, "Delta exceeds threshold");

        let text = toml::to_string(&doc).unwrap();
        let again: Doc = toml::from_str(&text).unwrap();
        assert_eq!(again, doc);
    }
}

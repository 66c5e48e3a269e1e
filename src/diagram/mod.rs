//! Diagrams as ordered shape lists, plus the renderer that draws them.
//!
//! The four built-in infographics live in their own modules; additional
//! diagrams can be described in TOML and loaded with [`Diagram::load`].

mod architecture;
mod control_plane;
mod leak_detection;
mod security_model;

use crate::draw::{Canvas, DrawError, FontRole, Shape, Style, Tone, render_shapes};
use crate::util::Rect;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a TOML layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("failed to read layout {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse layout {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid diagram name '{0}': use letters, digits, '_' or '-'")]
    InvalidName(String),
}

/// Output raster size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1536,
            height: 1024,
        }
    }
}

/// A named diagram: its shapes in draw order (first = bottom layer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    pub name: String,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl Diagram {
    /// Creates an empty diagram.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            shapes: Vec::new(),
        }
    }

    /// Creates a diagram starting with the standard title and subtitle.
    pub fn with_header(name: &str, title: &str, subtitle: &str) -> Self {
        let mut diagram = Self::new(name);
        diagram.add_shape(Shape::text(56, 40, title, FontRole::Title, Tone::Text));
        diagram.add_shape(Shape::text(
            56,
            112,
            subtitle,
            FontRole::Caption,
            Tone::Muted,
        ));
        diagram
    }

    /// Adds a new shape on top of the existing ones.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Output file name, e.g. `infographic_architecture.png`.
    pub fn file_name(&self) -> String {
        format!("infographic_{}.png", self.name)
    }

    /// Shapes whose painted extent leaves `bounds`, with their index.
    pub fn out_of_bounds(&self, bounds: Rect) -> Vec<(usize, &Shape)> {
        self.shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| {
                shape
                    .bounding_box()
                    .is_some_and(|extent| !bounds.contains_rect(&extent))
            })
            .collect()
    }

    /// Loads a diagram from a TOML layout file.
    ///
    /// # Example TOML
    /// ```toml
    /// name = "overview"
    ///
    /// [[shapes]]
    /// kind = "panel"
    /// x = 56
    /// y = 180
    /// w = 280
    /// h = 260
    /// title = "Clients"
    ///
    /// [[shapes]]
    /// kind = "bullet"
    /// x = 82
    /// y = 242
    /// text = "CLI"
    /// status = "info"
    /// ```
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let source = fs::read_to_string(path).map_err(|source| LayoutError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let diagram: Diagram = toml::from_str(&source).map_err(|source| LayoutError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if !is_valid_name(&diagram.name) {
            return Err(LayoutError::InvalidName(diagram.name));
        }
        debug!(
            "Loaded layout '{}' ({} shapes) from {}",
            diagram.name,
            diagram.shapes.len(),
            path.display()
        );
        Ok(diagram)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// The built-in infographics, in rendering order.
pub fn builtin() -> Vec<Diagram> {
    vec![
        architecture::diagram(),
        security_model::diagram(),
        control_plane::diagram(),
        leak_detection::diagram(),
    ]
}

/// Draws `diagram` onto a fresh canvas of `size` filled with the theme background.
pub fn render_diagram(
    diagram: &Diagram,
    style: &Style,
    size: CanvasSize,
) -> Result<Canvas, DrawError> {
    let mut canvas = Canvas::new(size.width, size.height, style.theme.background)?;
    for (index, shape) in diagram.out_of_bounds(canvas.bounds()) {
        warn!(
            "Shape #{} of '{}' extends past the {}x{} canvas: {:?}",
            index, diagram.name, size.width, size.height, shape
        );
    }
    render_shapes(&mut canvas, style, &diagram.shapes)?;
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Status;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn builtin_diagrams_have_unique_names() {
        let names: Vec<String> = builtin().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "architecture",
                "security_model",
                "control_plane",
                "leak_detection"
            ]
        );
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn file_name_is_derived_from_name() {
        assert_eq!(
            Diagram::new("architecture").file_name(),
            "infographic_architecture.png"
        );
    }

    #[test]
    fn builtin_diagrams_fit_the_default_canvas() {
        let size = CanvasSize::default();
        let bounds = Rect::new(0, 0, size.width, size.height).unwrap();
        for diagram in builtin() {
            assert!(
                diagram.out_of_bounds(bounds).is_empty(),
                "{} has shapes outside the canvas",
                diagram.name
            );
        }
    }

    #[test]
    fn out_of_bounds_reports_overflowing_shapes() {
        let mut diagram = Diagram::new("overflow");
        diagram.add_shape(Shape::panel(10, 10, 50, 50, "Inside"));
        diagram.add_shape(Shape::panel(90, 10, 50, 50, "Outside"));
        let bounds = Rect::new(0, 0, 100, 100).unwrap();
        let outside = diagram.out_of_bounds(bounds);
        assert_eq!(outside.len(), 1);
        assert_eq!(outside[0].0, 1);
    }

    #[test]
    fn header_adds_title_and_subtitle() {
        let diagram = Diagram::with_header("x", "Title", "Subtitle");
        assert_eq!(
            diagram.shapes[0],
            Shape::text(56, 40, "Title", FontRole::Title, Tone::Text)
        );
        assert_eq!(
            diagram.shapes[1],
            Shape::text(56, 112, "Subtitle", FontRole::Caption, Tone::Muted)
        );
    }

    #[test]
    fn layout_loads_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            name = "overview"

            [[shapes]]
            kind = "panel"
            x = 56
            y = 180
            w = 280
            h = 260
            title = "Clients"

            [[shapes]]
            kind = "bullet"
            x = 82
            y = 242
            text = "CLI"
            status = "info"
            "#
        )
        .unwrap();

        let diagram = Diagram::load(file.path()).unwrap();
        assert_eq!(diagram.name, "overview");
        assert_eq!(diagram.shapes.len(), 2);
        assert_eq!(
            diagram.shapes[1],
            Shape::bullet(82, 242, "CLI", Status::Info)
        );
    }

    #[test]
    fn layout_with_overflowing_geometry_fails_to_render() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            name = "edge"

            [[shapes]]
            kind = "panel"
            x = 2147483637
            y = 10
            w = 100
            h = 40

            [[shapes]]
            kind = "bullet"
            x = 10
            y = 2147483640
            text = "far"
            "#
        )
        .unwrap();

        let diagram = Diagram::load(file.path()).unwrap();
        let canvas = Rect::new(0, 0, 200, 100).unwrap();
        assert!(diagram.out_of_bounds(canvas).is_empty());

        let style = Style::new(
            crate::draw::Theme::default(),
            crate::draw::Typography::new(
                crate::draw::FontFace::Builtin,
                crate::draw::FontSizes::default(),
            ),
        );
        let size = CanvasSize {
            width: 200,
            height: 100,
        };
        assert!(matches!(
            render_diagram(&diagram, &style, size),
            Err(DrawError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn layout_rejects_path_like_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"../escape\"").unwrap();
        assert!(matches!(
            Diagram::load(file.path()),
            Err(LayoutError::InvalidName(_))
        ));
    }

    #[test]
    fn layout_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = ").unwrap();
        assert!(matches!(
            Diagram::load(file.path()),
            Err(LayoutError::Parse { .. })
        ));
    }
}

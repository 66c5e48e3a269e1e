//! Writing rendered diagrams to disk.

use crate::diagram::{CanvasSize, Diagram, render_diagram};
use crate::draw::{DrawError, SaveError, Style};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while producing an image file.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to draw '{name}': {source}")]
    Draw {
        name: String,
        #[source]
        source: DrawError,
    },

    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Ensure the output directory exists, creating it if necessary.
///
/// # Returns
/// The canonicalized path to the directory
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, OutputError> {
    if !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory).map_err(|source| OutputError::CreateDirectory {
            path: directory.to_path_buf(),
            source,
        })?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Renders `diagram` and saves it as `<directory>/infographic_<name>.png`.
///
/// Drawing finishes before the file is created, so a diagram that fails to
/// draw leaves no file behind.
///
/// # Returns
/// Path to the saved file
pub fn render_to_file(
    diagram: &Diagram,
    style: &Style,
    size: CanvasSize,
    directory: &Path,
) -> Result<PathBuf, OutputError> {
    let canvas = render_diagram(diagram, style, size).map_err(|source| OutputError::Draw {
        name: diagram.name.clone(),
        source,
    })?;

    let file_path = directory.join(diagram.file_name());
    log::debug!(
        "Saving '{}' ({}x{}) to {}",
        diagram.name,
        size.width,
        size.height,
        file_path.display()
    );
    canvas.write_png(&file_path)?;

    log::info!("Infographic saved: {}", file_path.display());
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{FontFace, FontSizes, Shape, Status, Theme, Typography};

    fn style() -> Style {
        Style::new(
            Theme::default(),
            Typography::new(FontFace::Builtin, FontSizes::default()),
        )
    }

    fn small() -> CanvasSize {
        CanvasSize {
            width: 200,
            height: 120,
        }
    }

    #[test]
    fn creates_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("docs").join("launch");
        let created = ensure_directory_exists(&nested).unwrap();
        assert!(created.is_dir());
        // Existing directories are accepted as-is
        assert_eq!(ensure_directory_exists(&nested).unwrap(), created);
    }

    #[test]
    fn writes_png_named_after_diagram() {
        let temp = tempfile::tempdir().unwrap();
        let mut diagram = Diagram::new("sample");
        diagram.add_shape(Shape::panel(10, 10, 120, 80, "Clients"));
        diagram.add_shape(Shape::bullet(30, 50, "CLI", Status::Info));

        let path = render_to_file(&diagram, &style(), small(), temp.path()).unwrap();
        assert_eq!(path, temp.path().join("infographic_sample.png"));

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn invalid_shape_leaves_no_file() {
        let temp = tempfile::tempdir().unwrap();
        let mut diagram = Diagram::new("broken");
        diagram.add_shape(Shape::panel(10, 10, 0, 80, "Empty"));

        let err = render_to_file(&diagram, &style(), small(), temp.path()).unwrap_err();
        assert!(matches!(err, OutputError::Draw { ref name, .. } if name == "broken"));
        assert!(!temp.path().join("infographic_broken.png").exists());
    }

    #[test]
    fn missing_directory_is_a_save_error() {
        let temp = tempfile::tempdir().unwrap();
        let diagram = Diagram::new("orphan");
        let err = render_to_file(&diagram, &style(), small(), &temp.path().join("absent"))
            .unwrap_err();
        assert!(matches!(err, OutputError::Save(_)));
    }
}

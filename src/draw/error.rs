//! Errors raised by drawing operations.

use thiserror::Error;

/// Errors that can occur while drawing onto a canvas.
#[derive(Debug, Error)]
pub enum DrawError {
    /// Geometry that cannot be drawn, e.g. a zero-sized rectangle.
    ///
    /// This indicates a layout bug in the caller, not a runtime condition.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),
}

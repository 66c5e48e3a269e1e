//! Rendering primitives and composite shapes (Cairo-based).
//!
//! This module defines the drawing toolkit used by every diagram:
//! - [`Canvas`]: raster surface with the primitive operations
//! - [`Theme`], [`Status`], [`Tone`]: the semantic palette
//! - [`Typography`]: resolved fonts per [`FontRole`]
//! - [`Shape`]: declarative diagram elements
//! - Composite rendering functions (panel, bullet, arrow, timeline chart)

pub mod canvas;
pub mod chart;
pub mod color;
pub mod error;
pub mod font;
pub mod render;
pub mod shape;
pub mod theme;

// Re-export commonly used types at module level
pub use canvas::{Canvas, SaveError};
pub use chart::{Annotation, ChartSeries, TimelineChart};
pub use color::Color;
pub use error::DrawError;
pub use font::{FontCandidate, FontFace, FontRole, FontSizes, Typography};
pub use render::{Style, arrow, bullet, panel, render_shape, render_shapes, timeline_chart};
pub use shape::Shape;
pub use theme::{Status, Theme, Tone};

//! Library exports for the infographics renderer.
//!
//! Exposes the drawing toolkit, the built-in diagrams and the configuration
//! types so that integration tests and the schema tool share the same code
//! paths as the main binary.

pub mod config;
pub mod diagram;
pub mod draw;
pub mod output;
pub mod util;

pub use config::Config;

//! Template rendering: drawing instructions, per-variant style tables and
//! the single parametrized renderer.

pub mod paint;
pub mod style;
pub mod template;

pub use paint::{DrawCommand, DrawSink, Stroke, TextAlign};
pub use template::render;

/// Canvas dimensions shared by all five templates.
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

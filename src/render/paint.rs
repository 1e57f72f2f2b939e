//! Drawing instruction set consumed by the rendering sink.

/// Stroke parameters for outlined shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: u32,
    /// Dash pattern (dash length, gap length); `None` draws solid.
    pub dash: Option<(u32, u32)>,
}

impl Stroke {
    pub fn solid(color: impl Into<String>, width: u32) -> Self {
        Self {
            color: color.into(),
            width,
            dash: None,
        }
    }

    pub fn dashed(color: impl Into<String>, width: u32, dash: (u32, u32)) -> Self {
        Self {
            color: color.into(),
            width,
            dash: Some(dash),
        }
    }
}

/// Horizontal anchoring of a text placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One opaque shape or text placement directive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        fill: Option<String>,
        stroke: Option<Stroke>,
        corner_radius: u32,
        opacity: f32,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: String,
        width: u32,
    },
    Text {
        x: i32,
        y: i32,
        content: String,
        size: u32,
        font: String,
        color: String,
        align: TextAlign,
        italic: bool,
    },
    Ellipse {
        cx: i32,
        cy: i32,
        rx: u32,
        ry: u32,
        fill: String,
        opacity: f32,
    },
    Circle {
        cx: i32,
        cy: i32,
        radius: u32,
        fill: String,
        opacity: f32,
    },
}

impl DrawCommand {
    /// Literal string content for text placements, `None` otherwise.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

/// Caller-provided rendering sink. The renderer only appends; clearing
/// between runs is the caller's duty.
pub trait DrawSink {
    fn push(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn push(&mut self, command: DrawCommand) {
        Vec::push(self, command);
    }
}

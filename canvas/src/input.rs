//! Input model: tools, brush styles, and the stroke state machine.
//!
//! `Tool` and `UiState` capture the user's intent at the time of a pointer
//! event. `InputState` is the active gesture being tracked between
//! pointer-down and pointer-up, carrying the context needed to draw
//! incremental segments, shape previews, and the eventual text stamp.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{DEFAULT_COLOR, ERASER_COLOR, ERASER_WIDTH, PENCIL_WIDTH, SHAPE_STROKE_WIDTH};
use crate::mapping::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Freehand stroke in the active color (default).
    #[default]
    Pencil,
    /// Freehand stroke in the background color.
    Eraser,
    /// Circle centered on the drag start.
    Circle,
    /// Axis-aligned rectangle spanned by the drag.
    Square,
    /// Mirrored triangle spanned by the drag.
    Triangle,
    /// Straight arrow from drag start to drag end.
    Arrow,
    /// Text stamp at the drag start.
    Text,
}

impl Tool {
    /// Whether this tool commits segments incrementally as the pointer moves.
    #[must_use]
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pencil | Self::Eraser)
    }

    /// Whether this tool draws a restore-then-preview shape during the drag.
    #[must_use]
    pub fn is_shape(self) -> bool {
        matches!(self, Self::Circle | Self::Square | Self::Triangle | Self::Arrow)
    }
}

/// Resolved stroke style for one drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushStyle {
    /// Stroke color as a CSS hex string.
    pub color: String,
    /// Stroke width in surface units.
    pub width: f64,
}

impl BrushStyle {
    /// The style the given tool paints with, given the active color.
    ///
    /// The eraser ignores the active color and paints background-colored
    /// strokes; every other tool strokes in the active color.
    #[must_use]
    pub fn for_tool(tool: Tool, color: &str) -> Self {
        match tool {
            Tool::Pencil => Self { color: color.to_owned(), width: PENCIL_WIDTH },
            Tool::Eraser => Self { color: ERASER_COLOR.to_owned(), width: ERASER_WIDTH },
            _ => Self { color: color.to_owned(), width: SHAPE_STROKE_WIDTH },
        }
    }
}

/// Active tool and color, supplied by the tool/color selector.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub tool: Tool,
    pub color: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { tool: Tool::default(), color: DEFAULT_COLOR.to_owned() }
    }
}

/// Internal state for the stroke state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The pointer is down and a stroke is being tracked.
    Stroking {
        /// Surface-space position of the pointer-down, anchoring shape
        /// geometry and text placement.
        start: Point,
        /// Surface-space position of the previous pointer event, used to
        /// extend freehand strokes incrementally.
        last: Point,
    },
    /// A text-tool stroke ended and the host is collecting the text line.
    TextPending {
        /// Surface-space point the committed text will be stamped at.
        anchor: Point,
    },
}

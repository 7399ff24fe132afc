//! Canvas input mapping helpers.
//!
//! Translates client-side UI types and DOM pointer events into the engine's
//! vocabulary so `CanvasHost` stays free of conversion noise.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::input::Tool as CanvasTool;
use canvas::mapping::Point as CanvasPoint;

use crate::state::ui::ToolType;

/// Map the selector's tool to the engine's tool.
#[must_use]
pub fn map_tool(tool: ToolType) -> CanvasTool {
    match tool {
        ToolType::Pencil => CanvasTool::Pencil,
        ToolType::Circle => CanvasTool::Circle,
        ToolType::Square => CanvasTool::Square,
        ToolType::Triangle => CanvasTool::Triangle,
        ToolType::Arrow => CanvasTool::Arrow,
        ToolType::Text => CanvasTool::Text,
        ToolType::Eraser => CanvasTool::Eraser,
    }
}

/// Element-relative pointer position in display pixels.
#[must_use]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> CanvasPoint {
    CanvasPoint::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

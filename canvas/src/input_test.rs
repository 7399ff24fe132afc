#![allow(clippy::float_cmp)]

use super::*;

// --- Tool ---

#[test]
fn tool_default_is_pencil() {
    assert_eq!(Tool::default(), Tool::Pencil);
}

#[test]
fn freehand_tools() {
    assert!(Tool::Pencil.is_freehand());
    assert!(Tool::Eraser.is_freehand());
    assert!(!Tool::Circle.is_freehand());
    assert!(!Tool::Text.is_freehand());
}

#[test]
fn shape_tools() {
    assert!(Tool::Circle.is_shape());
    assert!(Tool::Square.is_shape());
    assert!(Tool::Triangle.is_shape());
    assert!(Tool::Arrow.is_shape());
    assert!(!Tool::Pencil.is_shape());
    assert!(!Tool::Eraser.is_shape());
    assert!(!Tool::Text.is_shape());
}

#[test]
fn text_tool_is_neither_freehand_nor_shape() {
    assert!(!Tool::Text.is_freehand());
    assert!(!Tool::Text.is_shape());
}

// --- BrushStyle ---

#[test]
fn pencil_brush_uses_active_color_and_thin_width() {
    let style = BrushStyle::for_tool(Tool::Pencil, "#ff0000");
    assert_eq!(style.color, "#ff0000");
    assert_eq!(style.width, 3.0);
}

#[test]
fn eraser_brush_ignores_active_color() {
    let style = BrushStyle::for_tool(Tool::Eraser, "#ff0000");
    assert_eq!(style.color, "#ffffff");
    assert_eq!(style.width, 20.0);
}

#[test]
fn shape_brushes_use_active_color_and_shape_width() {
    for tool in [Tool::Circle, Tool::Square, Tool::Triangle, Tool::Arrow] {
        let style = BrushStyle::for_tool(tool, "#2196f3");
        assert_eq!(style.color, "#2196f3");
        assert_eq!(style.width, 3.0);
    }
}

// --- UiState ---

#[test]
fn ui_state_defaults() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Pencil);
    assert_eq!(ui.color, "#ff0000");
}

// --- InputState ---

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn stroking_carries_start_and_last() {
    let state = InputState::Stroking {
        start: Point::new(1.0, 2.0),
        last: Point::new(3.0, 4.0),
    };
    let InputState::Stroking { start, last } = state else {
        panic!("expected stroking state");
    };
    assert_eq!(start, Point::new(1.0, 2.0));
    assert_eq!(last, Point::new(3.0, 4.0));
}

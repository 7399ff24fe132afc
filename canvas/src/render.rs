//! Rendering: executes drawing operations against a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives pure geometry and style
//! values and produces pixels; it does not mutate any engine state.
//!
//! Fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>` and
//! the engine decides how to surface them.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement, ImageData};

use crate::consts::{OUTLINE_FILL, OUTLINE_STROKE, OUTLINE_WIDTH, TEXT_FONT};
use crate::input::BrushStyle;
use crate::mapping::Point;
use crate::outline::{Figure, PathCmd};
use crate::shape::ShapeOutline;

/// Blank the whole surface.
pub fn clear(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
}

/// Clear and paint a decoded background image scaled to the surface.
///
/// # Errors
///
/// Returns `Err` if the image cannot be drawn (e.g. in a broken decode state).
pub fn paint_image(
    ctx: &CanvasRenderingContext2d,
    img: &HtmlImageElement,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w, h)
}

/// Capture the current surface pixels for later restoration.
///
/// # Errors
///
/// Returns `Err` if the pixels cannot be read (zero-sized surface).
pub fn capture_backdrop(
    ctx: &CanvasRenderingContext2d,
    w: f64,
    h: f64,
) -> Result<ImageData, JsValue> {
    ctx.get_image_data(0.0, 0.0, w, h)
}

/// Write previously captured pixels back onto the surface.
///
/// # Errors
///
/// Returns `Err` if the pixel buffer cannot be written.
pub fn restore_backdrop(ctx: &CanvasRenderingContext2d, backdrop: &ImageData) -> Result<(), JsValue> {
    ctx.put_image_data(backdrop, 0.0, 0.0)
}

/// Stroke one freehand segment with round caps and joins.
pub fn stroke_segment(ctx: &CanvasRenderingContext2d, from: Point, to: Point, style: &BrushStyle) {
    ctx.begin_path();
    ctx.set_stroke_style_str(&style.color);
    ctx.set_line_width(style.width);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}

/// Stroke one shape outline.
///
/// # Errors
///
/// Returns `Err` if an arc cannot be added to the path (negative radius).
pub fn stroke_outline(
    ctx: &CanvasRenderingContext2d,
    outline: &ShapeOutline,
    style: &BrushStyle,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.set_stroke_style_str(&style.color);
    ctx.set_line_width(style.width);
    ctx.set_line_cap("butt");
    ctx.set_line_join("miter");
    match outline {
        ShapeOutline::Circle { center, radius } => {
            ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI)?;
        }
        ShapeOutline::Rect { origin, width, height } => {
            ctx.rect(origin.x, origin.y, *width, *height);
        }
        ShapeOutline::Triangle { a, b, c } => {
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.line_to(c.x, c.y);
            ctx.close_path();
        }
        ShapeOutline::Arrow { from, to, head_a, head_b } => {
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            ctx.line_to(head_a.x, head_a.y);
            ctx.move_to(to.x, to.y);
            ctx.line_to(head_b.x, head_b.y);
        }
    }
    ctx.stroke();
    Ok(())
}

/// Stamp a line of text at the anchor in the given color.
///
/// # Errors
///
/// Returns `Err` if the text cannot be rendered.
pub fn fill_label(
    ctx: &CanvasRenderingContext2d,
    at: Point,
    text: &str,
    color: &str,
) -> Result<(), JsValue> {
    ctx.set_font(TEXT_FONT);
    ctx.set_fill_style_str(color);
    ctx.fill_text(text, at.x, at.y)
}

/// Execute the fallback silhouette figures with the outline stroke/fill.
///
/// # Errors
///
/// Returns `Err` if an arc cannot be added to a path.
pub fn draw_figures(ctx: &CanvasRenderingContext2d, figures: &[Figure]) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(OUTLINE_STROKE);
    ctx.set_line_width(OUTLINE_WIDTH);
    ctx.set_fill_style_str(OUTLINE_FILL);
    for figure in figures {
        ctx.begin_path();
        for cmd in &figure.path {
            match cmd {
                PathCmd::MoveTo(p) => ctx.move_to(p.x, p.y),
                PathCmd::LineTo(p) => ctx.line_to(p.x, p.y),
                PathCmd::Circle { center, radius } => {
                    ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI)?;
                }
                PathCmd::Close => ctx.close_path(),
            }
        }
        if figure.fill {
            ctx.fill();
        }
        if figure.stroke {
            ctx.stroke();
        }
    }
    Ok(())
}

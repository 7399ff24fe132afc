//! Shape geometry for the drag-to-draw tools.
//!
//! All constructors are pure functions of the stroke's start point S and the
//! current pointer position P, so previews and final shapes are computed
//! identically. Rendering lives in `render`; this module only produces
//! coordinates.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use crate::consts::{ARROW_HEAD_ANGLE, ARROW_HEAD_LENGTH};
use crate::input::Tool;
use crate::mapping::Point;

/// Geometry of one shape-tool preview or commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeOutline {
    /// Circle centered on the drag start.
    Circle { center: Point, radius: f64 },
    /// Axis-aligned rectangle; width/height are signed so the rectangle can
    /// extend into any quadrant relative to the start corner.
    Rect { origin: Point, width: f64, height: f64 },
    /// Triangle with one vertex at the drag end, mirrored horizontally
    /// across the vertical line through the start point.
    Triangle { a: Point, b: Point, c: Point },
    /// Shaft plus two arrowhead strokes at the tip.
    Arrow { from: Point, to: Point, head_a: Point, head_b: Point },
}

/// Compute the outline the given shape tool spans between `start` and
/// `current`. Returns `None` for freehand and text tools.
#[must_use]
pub fn outline_for(tool: Tool, start: Point, current: Point) -> Option<ShapeOutline> {
    match tool {
        Tool::Circle => Some(ShapeOutline::Circle {
            center: start,
            radius: start.distance_to(current),
        }),
        Tool::Square => Some(ShapeOutline::Rect {
            origin: start,
            width: current.x - start.x,
            height: current.y - start.y,
        }),
        Tool::Triangle => Some(ShapeOutline::Triangle {
            a: start,
            b: current,
            c: Point::new(2.0 * start.x - current.x, current.y),
        }),
        Tool::Arrow => {
            let (head_a, head_b) = arrow_head(start, current);
            Some(ShapeOutline::Arrow { from: start, to: current, head_a, head_b })
        }
        Tool::Pencil | Tool::Eraser | Tool::Text => None,
    }
}

/// Endpoints of the two arrowhead strokes, each `ARROW_HEAD_LENGTH` back
/// from the tip at `ARROW_HEAD_ANGLE` off the shaft direction.
fn arrow_head(from: Point, to: Point) -> (Point, Point) {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    let head_a = Point::new(
        to.x - ARROW_HEAD_LENGTH * (angle - ARROW_HEAD_ANGLE).cos(),
        to.y - ARROW_HEAD_LENGTH * (angle - ARROW_HEAD_ANGLE).sin(),
    );
    let head_b = Point::new(
        to.x - ARROW_HEAD_LENGTH * (angle + ARROW_HEAD_ANGLE).cos(),
        to.y - ARROW_HEAD_LENGTH * (angle + ARROW_HEAD_ANGLE).sin(),
    );
    (head_a, head_b)
}

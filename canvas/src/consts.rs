//! Shared numeric and style constants for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Default drawing surface width in surface pixels.
pub const SURFACE_WIDTH: f64 = 400.0;

/// Default drawing surface height in surface pixels. Replaced by
/// `SURFACE_WIDTH / aspect` once the background image has decoded.
pub const SURFACE_HEIGHT: f64 = 600.0;

// ── Brushes ─────────────────────────────────────────────────────

/// Pencil stroke width in surface units.
pub const PENCIL_WIDTH: f64 = 3.0;

/// Eraser stroke width in surface units.
pub const ERASER_WIDTH: f64 = 20.0;

/// The eraser paints background-colored strokes rather than clearing pixels.
pub const ERASER_COLOR: &str = "#ffffff";

/// Stroke width for shape previews and committed shapes.
pub const SHAPE_STROKE_WIDTH: f64 = 3.0;

/// Default active color (palette red).
pub const DEFAULT_COLOR: &str = "#ff0000";

// ── Arrow ───────────────────────────────────────────────────────

/// Length of each arrowhead stroke in surface units.
pub const ARROW_HEAD_LENGTH: f64 = 15.0;

/// Angle between the shaft and each arrowhead stroke (30°).
pub const ARROW_HEAD_ANGLE: f64 = std::f64::consts::PI / 6.0;

// ── Text ────────────────────────────────────────────────────────

/// Font for committed text stamps.
pub const TEXT_FONT: &str = "16px Arial";

// ── Fallback outline ────────────────────────────────────────────

/// Stroke color for the procedural body outline.
pub const OUTLINE_STROKE: &str = "#000000";

/// Fill color for the procedural body outline.
pub const OUTLINE_FILL: &str = "#ffffff";

/// Stroke width for the procedural body outline.
pub const OUTLINE_WIDTH: f64 = 2.0;

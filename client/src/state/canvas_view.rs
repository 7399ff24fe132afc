//! Canvas telemetry published by the canvas host.
//!
//! ARCHITECTURE
//! ============
//! `CanvasHost` owns the engine and is the only writer here; chrome (the
//! toolbar's undo button, the status bar, the fallback notice) renders from
//! these snapshots without touching the engine.

#[cfg(test)]
#[path = "canvas_view_test.rs"]
mod canvas_view_test;

/// Display-space anchor for the inline text-entry overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingText {
    pub x: f64,
    pub y: f64,
}

/// Live canvas telemetry consumed by chrome.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasViewState {
    /// The procedural outline replaced a failed background image.
    pub using_fallback: bool,
    /// Whether undo would change anything.
    pub can_undo: bool,
    /// Entries in the active history stack.
    pub entry_count: usize,
    /// Raster surface width in surface pixels.
    pub surface_width: f64,
    /// Raster surface height in surface pixels.
    pub surface_height: f64,
    /// Set while a text-tool entry waits for input.
    pub pending_text: Option<PendingText>,
}

impl Default for CanvasViewState {
    fn default() -> Self {
        Self {
            using_fallback: false,
            can_undo: false,
            entry_count: 0,
            surface_width: canvas::consts::SURFACE_WIDTH,
            surface_height: canvas::consts::SURFACE_HEIGHT,
            pending_text: None,
        }
    }
}

//! Local UI chrome state: active tool, active color, and shell commands.
//!
//! DESIGN
//! ======
//! The engine lives inside the canvas host, so shell buttons cannot call it
//! directly. Commands travel as monotonic sequence counters: the toolbar
//! bumps a counter, the host compares it against the last value it applied
//! and runs the engine operation once.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::consts::DEFAULT_COLOR;

/// Available drawing tools, mirroring the engine's tool set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolType {
    #[default]
    Pencil,
    Circle,
    Square,
    Triangle,
    Arrow,
    Text,
    Eraser,
}

impl ToolType {
    /// Human-readable button/status label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Circle => "Circle",
            Self::Square => "Square",
            Self::Triangle => "Triangle",
            Self::Arrow => "Arrows",
            Self::Text => "Text",
            Self::Eraser => "Eraser",
        }
    }
}

/// UI state for the tool/color selector and shell commands.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    /// Currently active drawing tool.
    pub active_tool: ToolType,
    /// Currently active color as a normalized `#rrggbb` string.
    pub active_color: String,
    /// Bumped by the toolbar to request an undo.
    pub undo_seq: u64,
    /// Bumped by the toolbar to request a clear.
    pub clear_seq: u64,
    /// Bumped by the toolbar to request a download.
    pub export_seq: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tool: ToolType::default(),
            active_color: DEFAULT_COLOR.to_owned(),
            undo_seq: 0,
            clear_seq: 0,
            export_seq: 0,
        }
    }
}

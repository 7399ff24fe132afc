//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render editor chrome and the drawing surface while reading and
//! writing shared state from Leptos context providers.

pub mod canvas_host;
pub mod status_bar;
pub mod tool_panel;
pub mod toolbar;

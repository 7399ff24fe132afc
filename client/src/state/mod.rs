//! Shared state models provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Transient presentation state (`ui`), subject selection (`subject`), and
//! canvas telemetry (`canvas_view`) are kept in separate models so chrome
//! components can subscribe narrowly and the canvas host stays the single
//! writer of engine-derived values.

pub mod canvas_view;
pub mod subject;
pub mod ui;

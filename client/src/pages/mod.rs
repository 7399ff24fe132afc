//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The tool is a single screen; the editor page owns the layout and
//! delegates rendering details to `components`.

pub mod editor;

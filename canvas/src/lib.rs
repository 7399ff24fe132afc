//! Drawing and undo-history engine for the pain-diagram annotation tool.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full lifecycle of the drawing surface: translating pointer events into
//! stroke segments and shape previews, maintaining the linear snapshot
//! history that backs undo, resolving background assets, and painting the
//! procedural silhouette when a background image fails to load. The host UI
//! layer is responsible only for wiring DOM events to the engine and
//! presenting tool/color state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`history`] | Snapshot stack + cursor implementing linear undo |
//! | [`input`] | Tools, brush styles, and the stroke state machine |
//! | [`shape`] | Pure geometry for the drag-to-draw tools |
//! | [`outline`] | Procedural fallback body silhouette |
//! | [`assets`] | Subject identity and background asset resolution |
//! | [`mapping`] | Display↔surface coordinate conversion |
//! | [`render`] | Drawing execution against the 2D context |
//! | [`consts`] | Shared numeric and style constants |

pub mod assets;
pub mod consts;
pub mod engine;
pub mod history;
pub mod input;
pub mod mapping;
pub mod outline;
pub mod render;
pub mod shape;

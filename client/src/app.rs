//! Application root: context providers and page composition.
//!
//! ARCHITECTURE
//! ============
//! All shared state lives in `RwSignal` contexts provided here, so
//! components read and write through context instead of prop drilling.
//! Page-level configuration is read once from the host document before the
//! tree mounts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config;
use crate::pages::editor::EditorPage;
use crate::state::canvas_view::CanvasViewState;
use crate::state::subject::SubjectState;
use crate::state::ui::UiState;

/// Application root component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(config::read());
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(SubjectState::default()));
    provide_context(RwSignal::new(CanvasViewState::default()));

    view! {
        <Title text="Pain Diagram"/>
        <EditorPage/>
    }
}

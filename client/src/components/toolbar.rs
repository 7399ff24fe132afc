//! Top bar with the page title and the shell actions.
//!
//! DESIGN
//! ======
//! The engine lives inside `CanvasHost`, so undo/clear/download are issued
//! as sequence-counter bumps in `UiState` and applied there. The view
//! switch mutates `SubjectState` directly; the host reacts to the change.

use leptos::prelude::*;

use crate::state::canvas_view::CanvasViewState;
use crate::state::subject::SubjectState;
use crate::state::ui::UiState;

/// Top toolbar for the editor page.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let subject = expect_context::<RwSignal<SubjectState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();

    let undo_disabled = move || !canvas_view.get().can_undo;
    let switch_label = move || subject.get().switch_label();

    view! {
        <div class="toolbar">
            <h1 class="toolbar__title">"Pain Tool"</h1>
            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__action"
                disabled=undo_disabled
                title="Step back one action"
                on:click=move |_| ui.update(|u| u.undo_seq = u.undo_seq.saturating_add(1))
            >
                "Undo"
            </button>

            <button
                class="btn toolbar__action"
                title="Blank the drawing surface"
                on:click=move |_| ui.update(|u| u.clear_seq = u.clear_seq.saturating_add(1))
            >
                "Clear"
            </button>

            <button
                class="btn toolbar__action"
                on:click=move |_| subject.update(|s| s.view = s.view.toggled())
            >
                {switch_label}
            </button>

            <button
                class="btn btn--primary toolbar__action"
                title="Download the diagram as a PNG"
                on:click=move |_| ui.update(|u| u.export_seq = u.export_seq.saturating_add(1))
            >
                "Download"
            </button>
        </div>
    }
}

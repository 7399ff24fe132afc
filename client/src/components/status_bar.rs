//! Bottom status bar showing tool, surface, and history telemetry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders low-frequency canvas telemetry so users can see the active
//! brush, the surface size, and how deep the undo history runs without
//! opening anything.

use leptos::prelude::*;

use crate::state::canvas_view::CanvasViewState;
use crate::state::ui::UiState;

/// Status bar at the bottom of the editor page.
#[component]
pub fn StatusBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();

    let tool_label = move || ui.get().active_tool.label();
    let swatch_style = move || format!("background-color: {};", ui.get().active_color);
    let surface = move || {
        let view = canvas_view.get();
        format!("{:.0}\u{d7}{:.0}", view.surface_width, view.surface_height)
    };
    let entries = move || format!("{} states", canvas_view.get().entry_count);

    view! {
        <div class="status-bar">
            <span class="status-bar__tool">{tool_label}</span>
            <span class="status-bar__swatch" style=swatch_style></span>
            <span class="status-bar__divider"></span>
            <span class="status-bar__surface">{surface}</span>
            <span class="status-bar__entries">{entries}</span>
            <Show when=move || canvas_view.get().using_fallback>
                <span class="status-bar__fallback">"fallback outline"</span>
            </Show>
        </div>
    }
}

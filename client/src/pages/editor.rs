//! Editor page — the single-screen annotation workspace shell.
//!
//! Composes the toolbar, the tool/color panel, the canvas host, and the
//! status bar in a column layout, mirroring the shared state each of them
//! reads from context.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::status_bar::StatusBar;
use crate::components::tool_panel::ToolPanel;
use crate::components::toolbar::Toolbar;
use crate::state::subject::SubjectState;

/// The annotation workspace.
#[component]
pub fn EditorPage() -> impl IntoView {
    let subject = expect_context::<RwSignal<SubjectState>>();
    let view_label = move || subject.get().view_label();

    view! {
        <div class="editor">
            <Toolbar/>
            <div class="editor__body">
                <aside class="editor__panel">
                    <ToolPanel/>
                </aside>
                <section class="editor__stage">
                    <header class="editor__view-label">{view_label}</header>
                    <div class="editor__canvas">
                        <CanvasHost/>
                    </div>
                </section>
            </div>
            <StatusBar/>
        </div>
    }
}

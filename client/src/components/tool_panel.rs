//! Tool, color, and subject selection panel.
//!
//! DESIGN
//! ======
//! Keeps active-tool and active-color switching centralized so other
//! components treat the selection as state, not direct DOM coupling. Colors
//! are normalized on write; everything downstream can assume `#rrggbb`.

use leptos::prelude::*;

use canvas::assets::Sex;
use canvas::consts::DEFAULT_COLOR;

use crate::state::subject::SubjectState;
use crate::state::ui::{ToolType, UiState};
use crate::util::color::normalize_hex_color;

#[derive(Clone, Copy)]
struct ToolDef {
    tool: ToolType,
    label: &'static str,
}

const TOOLS: &[ToolDef] = &[
    ToolDef { tool: ToolType::Pencil, label: "Pencil" },
    ToolDef { tool: ToolType::Circle, label: "Circle" },
    ToolDef { tool: ToolType::Square, label: "Square" },
    ToolDef { tool: ToolType::Triangle, label: "Triangle" },
    ToolDef { tool: ToolType::Arrow, label: "Arrows" },
    ToolDef { tool: ToolType::Text, label: "Text" },
    ToolDef { tool: ToolType::Eraser, label: "Eraser" },
];

/// Fixed palette, red first as the default.
const PALETTE: &[&str] = &[
    "#ff0000", "#0000ff", "#666666", "#9c27b0", "#2196f3",
    "#ffeb3b", "#e91e63", "#4caf50", "#009688", "#00bcd4",
];

/// Side panel with the subject toggle, tool list, and color palette.
#[component]
pub fn ToolPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let subject = expect_context::<RwSignal<SubjectState>>();

    let sex_button = move |sex: Sex, label: &'static str, glyph: &'static str| {
        let is_active = move || subject.get().sex == sex;
        view! {
            <button
                class="tool-panel__sex-btn"
                class:tool-panel__sex-btn--active=is_active
                on:click=move |_| subject.update(|s| s.sex = sex)
            >
                <span class="tool-panel__sex-glyph">{glyph}</span>
                {label}
            </button>
        }
    };

    let tool_buttons = move || {
        TOOLS
            .iter()
            .map(|td| {
                let td = *td;
                let is_active = move || ui.get().active_tool == td.tool;
                view! {
                    <button
                        class="tool-panel__tool-btn"
                        class:tool-panel__tool-btn--active=is_active
                        on:click=move |_| ui.update(|u| u.active_tool = td.tool)
                    >
                        {td.label}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let color_buttons = move || {
        PALETTE
            .iter()
            .map(|&color| {
                let is_active = move || ui.get().active_color == color;
                view! {
                    <button
                        class="tool-panel__swatch"
                        class:tool-panel__swatch--active=is_active
                        style=format!("background-color: {color};")
                        attr:aria-label=format!("Select color {color}")
                        on:click=move |_| {
                            ui.update(|u| u.active_color = normalize_hex_color(color, DEFAULT_COLOR));
                        }
                    ></button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="tool-panel">
            <div class="tool-panel__sex-toggle">
                {sex_button(Sex::Female, "Female", "♀")}
                {sex_button(Sex::Male, "Male", "♂")}
            </div>

            <h3 class="tool-panel__heading">"Tools"</h3>
            <div class="tool-panel__tools">{tool_buttons}</div>

            <h3 class="tool-panel__heading">"Colors"</h3>
            <div class="tool-panel__swatches">{color_buttons}</div>
        </div>
    }
}

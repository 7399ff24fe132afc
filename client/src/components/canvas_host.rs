//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns drawing and history; this host maps signals and DOM
//! events into engine operations and publishes telemetry back into
//! `CanvasViewState`. It is the only component that touches the engine.
//!
//! Background images load through `onload`/`onerror` closures that call back
//! into the engine with the decode generation captured at schedule time, so
//! a subject switch mid-decode can never paint a stale background.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlImageElement;

use canvas::assets::{Subject, body_image_src, export_filename};
use canvas::consts::DEFAULT_COLOR;
use canvas::engine::Engine;

use crate::config::AppConfig;
use crate::state::canvas_view::{CanvasViewState, PendingText};
use crate::state::subject::SubjectState;
use crate::state::ui::UiState;
use crate::util::canvas_input::{map_tool, pointer_point};
use crate::util::color::normalize_hex_color;
use crate::util::download;

type SharedEngine = Rc<RefCell<Option<Engine>>>;
type ImageCallbacks = Rc<RefCell<Option<(Closure<dyn FnMut()>, Closure<dyn FnMut()>)>>>;

fn publish_view(engine: &Engine, canvas_view: RwSignal<CanvasViewState>) {
    let core = &engine.core;
    let using_fallback = core.fallback_active();
    let can_undo = core.can_undo();
    let entry_count = core.history_len();
    let surface_width = core.mapping.surface_w;
    let surface_height = core.mapping.surface_h;
    canvas_view.update(|view| {
        view.using_fallback = using_fallback;
        view.can_undo = can_undo;
        view.entry_count = entry_count;
        view.surface_width = surface_width;
        view.surface_height = surface_height;
    });
}

/// Kick off the background image load for `subject`. The closures stay
/// alive in `callbacks` until the next load replaces them.
fn begin_background_load(
    engine: &SharedEngine,
    subject: Subject,
    epoch: u64,
    asset_base: &str,
    canvas_view: RwSignal<CanvasViewState>,
    callbacks: &ImageCallbacks,
) {
    let Ok(img) = HtmlImageElement::new() else {
        log::warn!("image element unavailable; keeping blank surface");
        return;
    };
    // Required so the canvas stays exportable after drawing a CDN image.
    img.set_cross_origin(Some("anonymous"));
    let src = format!("{asset_base}{}", body_image_src(subject));

    let engine_load = Rc::clone(engine);
    let img_load = img.clone();
    let onload = Closure::wrap(Box::new(move || {
        if let Some(engine) = engine_load.borrow_mut().as_mut() {
            if let Err(err) = engine.background_loaded(&img_load, epoch) {
                log::warn!("background paint failed: {err:?}");
            }
            publish_view(engine, canvas_view);
        }
    }) as Box<dyn FnMut()>);

    let engine_error = Rc::clone(engine);
    let failed_src = src.clone();
    let onerror = Closure::wrap(Box::new(move || {
        log::warn!("body image {failed_src} failed to load; using fallback outline");
        if let Some(engine) = engine_error.borrow_mut().as_mut() {
            if let Err(err) = engine.background_failed(epoch) {
                log::warn!("fallback paint failed: {err:?}");
            }
            publish_view(engine, canvas_view);
        }
    }) as Box<dyn FnMut()>);

    img.set_onload(Some(onload.as_ref().unchecked_ref::<js_sys::Function>()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref::<js_sys::Function>()));
    *callbacks.borrow_mut() = Some((onload, onerror));
    img.set_src(&src);
}

/// Canvas host component.
///
/// Mounts `canvas::engine::Engine` on the canvas element, wires pointer
/// events, drives subject background loading, applies shell commands, and
/// renders the fallback notice plus the inline text-entry overlay.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let subject_state = expect_context::<RwSignal<SubjectState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let config = expect_context::<AppConfig>();

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let text_input_ref = NodeRef::<leptos::html::Input>::new();
    let engine: SharedEngine = Rc::new(RefCell::new(None));
    let image_callbacks: ImageCallbacks = Rc::new(RefCell::new(None));

    let last_undo_seq = RwSignal::new(0_u64);
    let last_clear_seq = RwSignal::new(0_u64);
    let last_export_seq = RwSignal::new(0_u64);

    // Mount the engine and (re)load the background whenever the subject
    // changes. The first run also creates the engine once the canvas exists.
    {
        let engine = Rc::clone(&engine);
        let image_callbacks = Rc::clone(&image_callbacks);
        let history_scope = config.history_scope;
        let asset_base = config.asset_base.clone();
        Effect::new(move || {
            let subject = subject_state.get().subject();
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let epoch = {
                let mut slot = engine.borrow_mut();
                let instance =
                    slot.get_or_insert_with(|| Engine::new(canvas, history_scope, subject));
                let epoch = instance.set_subject(subject);
                publish_view(instance, canvas_view);
                epoch
            };
            canvas_view.update(|view| view.pending_text = None);
            begin_background_load(
                &engine,
                subject,
                epoch,
                &asset_base,
                canvas_view,
                &image_callbacks,
            );
        });
    }

    // Keep the engine's tool and color in sync with the selector.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let state = ui.get();
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.set_tool(map_tool(state.active_tool));
                engine.set_color(normalize_hex_color(&state.active_color, DEFAULT_COLOR));
            }
        });
    }

    // Shell commands arrive as sequence bumps from the toolbar.
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let seq = ui.get().undo_seq;
            if seq == last_undo_seq.get_untracked() {
                return;
            }
            last_undo_seq.set(seq);
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.undo();
                publish_view(engine, canvas_view);
            }
        });
    }
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let seq = ui.get().clear_seq;
            if seq == last_clear_seq.get_untracked() {
                return;
            }
            last_clear_seq.set(seq);
            if let Some(engine) = engine.borrow_mut().as_mut() {
                if let Err(err) = engine.clear() {
                    log::warn!("clear failed: {err:?}");
                }
                publish_view(engine, canvas_view);
            }
        });
    }
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let seq = ui.get().export_seq;
            if seq == last_export_seq.get_untracked() {
                return;
            }
            last_export_seq.set(seq);
            let subject = subject_state.get_untracked().subject();
            if let Some(engine) = engine.borrow().as_ref() {
                match engine.export_data_url() {
                    Ok(Some(data_url)) => download::trigger(&data_url, &export_filename(subject)),
                    Ok(None) => log::warn!("export skipped: drawing disabled"),
                    Err(err) => log::warn!("export failed: {err:?}"),
                }
            }
        });
    }

    // Pointer wiring. The display size is refreshed from the live layout on
    // every pointer-down so coordinate mapping survives responsive resizes.
    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let rect = canvas.get_bounding_client_rect();
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.set_display_size(rect.width(), rect.height());
                if let Err(err) = engine.on_pointer_down(pointer_point(&ev)) {
                    log::warn!("stroke start failed: {err:?}");
                }
            }
        }
    };

    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            ev.prevent_default();
            if let Some(engine) = engine.borrow_mut().as_mut() {
                if let Err(err) = engine.on_pointer_move(pointer_point(&ev)) {
                    log::warn!("stroke segment failed: {err:?}");
                }
            }
        }
    };

    let finish_stroke = {
        let engine = Rc::clone(&engine);
        move || {
            if let Some(engine) = engine.borrow_mut().as_mut() {
                if let Err(err) = engine.on_pointer_up() {
                    log::warn!("stroke end failed: {err:?}");
                }
                let pending = engine.pending_text_display_anchor();
                canvas_view.update(|view| {
                    view.pending_text = pending.map(|p| PendingText { x: p.x, y: p.y });
                });
                publish_view(engine, canvas_view);
            }
        }
    };
    let on_pointer_up = {
        let finish_stroke = finish_stroke.clone();
        move |_ev: leptos::ev::PointerEvent| finish_stroke()
    };
    let on_pointer_leave = {
        let finish_stroke = finish_stroke.clone();
        move |_ev: leptos::ev::PointerEvent| finish_stroke()
    };

    // Inline text entry for the text tool: Enter commits, Escape or leaving
    // the field cancels. Committing may append a second history entry.
    let commit_pending_text = {
        let engine = Rc::clone(&engine);
        move |value: String| {
            canvas_view.update(|view| view.pending_text = None);
            if let Some(engine) = engine.borrow_mut().as_mut() {
                if let Err(err) = engine.commit_text(&value) {
                    log::warn!("text commit failed: {err:?}");
                }
                publish_view(engine, canvas_view);
            }
        }
    };
    let cancel_pending_text = {
        let engine = Rc::clone(&engine);
        move || {
            canvas_view.update(|view| view.pending_text = None);
            if let Some(engine) = engine.borrow_mut().as_mut() {
                engine.cancel_text();
            }
        }
    };

    let on_text_keydown = {
        let commit_pending_text = commit_pending_text.clone();
        let cancel_pending_text = cancel_pending_text.clone();
        move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                commit_pending_text(event_target_value(&ev));
            }
            "Escape" => {
                ev.prevent_default();
                cancel_pending_text();
            }
            _ => {}
        }
    };
    let on_text_blur = {
        let cancel_pending_text = cancel_pending_text.clone();
        move |_ev: leptos::ev::FocusEvent| {
            if canvas_view.get_untracked().pending_text.is_some() {
                cancel_pending_text();
            }
        }
    };

    // Focus the overlay as soon as it appears.
    Effect::new(move || {
        if canvas_view.get().pending_text.is_some() {
            if let Some(input) = text_input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    view! {
        <div class="canvas-host">
            <canvas
                class="canvas-host__surface"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
            >
                "Your browser does not support canvas."
            </canvas>

            <Show when=move || canvas_view.get().using_fallback>
                <div class="canvas-host__notice">"Using fallback body outline"</div>
            </Show>

            {move || {
                canvas_view.get().pending_text.map(|pending| {
                    let style = format!("left: {:.0}px; top: {:.0}px;", pending.x, pending.y);
                    view! {
                        <input
                            class="canvas-host__text-entry"
                            node_ref=text_input_ref
                            style=style
                            placeholder="Enter text"
                            on:keydown=on_text_keydown.clone()
                            on:blur=on_text_blur.clone()
                        />
                    }
                })
            }}
        </div>
    }
}

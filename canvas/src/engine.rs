//! Top-level engine: the stroke/history state machine and its browser binding.
//!
//! [`EngineCore`] holds all logic that does not depend on the canvas element
//! so it can be tested without WASM/browser dependencies: the stroke state
//! machine, tool dispatch, coordinate mapping, the history store, and the
//! generation counter that guards asynchronous snapshot decodes. Pointer
//! handlers return [`Action`] lists describing what should be painted or
//! requested from the host.
//!
//! [`Engine`] wraps the core around an [`HtmlCanvasElement`], executes
//! actions against the 2D context, serializes snapshots, and decodes them
//! back during undo repaints. A canvas without an acquirable 2D context
//! leaves every operation a silent no-op.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, ImageData};

use crate::assets::Subject;
use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::history::{HistoryStack, HistoryStore, ScopePolicy, Snapshot};
use crate::input::{BrushStyle, InputState, Tool, UiState};
use crate::mapping::{Point, SurfaceMapping};
use crate::outline;
use crate::render;
use crate::shape::{self, ShapeOutline};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the browser layer to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Capture the current surface pixels as the shape-preview backdrop.
    CaptureBackdrop,
    /// Restore the captured backdrop, erasing the previous preview frame.
    RestoreBackdrop,
    /// Stroke one freehand segment.
    DrawSegment { from: Point, to: Point, style: BrushStyle },
    /// Stroke one shape outline.
    DrawShape { outline: ShapeOutline, style: BrushStyle },
    /// Stamp committed text at its anchor.
    DrawText { at: Point, text: String, color: String },
    /// Serialize the surface and append it to the history.
    CommitSnapshot,
    /// The host should collect a line of text anchored at this point.
    TextInputRequested { anchor: Point },
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    /// The (sex, view) pair currently mounted on the surface.
    pub subject: Subject,
    /// Active tool and color.
    pub ui: UiState,
    /// Stroke state machine.
    pub input: InputState,
    /// All live history stacks.
    pub history: HistoryStore,
    /// Display↔surface coordinate mapping.
    pub mapping: SurfaceMapping,
    epoch: u64,
    fallback_active: bool,
}

impl EngineCore {
    #[must_use]
    pub fn new(policy: ScopePolicy, subject: Subject) -> Self {
        Self {
            subject,
            ui: UiState::default(),
            input: InputState::default(),
            history: HistoryStore::new(policy),
            mapping: SurfaceMapping::default(),
            epoch: 0,
            fallback_active: false,
        }
    }

    // --- Tool / subject inputs ---

    /// Set the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    /// Set the active color (CSS hex string).
    pub fn set_color(&mut self, color: String) {
        self.ui.color = color;
    }

    /// Switch to a new subject. This is a destructive surface reset: the
    /// in-progress stroke is abandoned, the surface shrinks back to its
    /// default size pending the background load, and the generation counter
    /// advances so pending decodes for the old subject are discarded.
    /// History survives according to the store's scope policy.
    pub fn set_subject(&mut self, subject: Subject) -> u64 {
        self.subject = subject;
        self.input = InputState::Idle;
        self.fallback_active = false;
        self.mapping.set_surface_size(SURFACE_WIDTH, SURFACE_HEIGHT);
        self.bump_epoch()
    }

    /// Record the raster surface size after a background load.
    pub fn set_surface_size(&mut self, w: f64, h: f64) {
        self.mapping.set_surface_size(w, h);
    }

    /// Record the displayed (CSS) size of the canvas element.
    pub fn set_display_size(&mut self, w: f64, h: f64) {
        self.mapping.set_display_size(w, h);
    }

    // --- Generation counter ---

    /// Current decode generation. Bumped on every subject or cursor change.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether a decode scheduled at `epoch` is still current.
    #[must_use]
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    fn bump_epoch(&mut self) -> u64 {
        self.epoch = self.epoch.wrapping_add(1);
        self.epoch
    }

    // --- Pointer events ---

    /// Begin a stroke. Freehand tools stamp a zero-length dot immediately;
    /// shape tools capture the backdrop their previews restore to; the text
    /// tool only records its anchor.
    pub fn on_pointer_down(&mut self, display_pt: Point) -> Vec<Action> {
        if self.input != InputState::Idle {
            return Vec::new();
        }
        let p = self.mapping.to_surface(display_pt);
        self.input = InputState::Stroking { start: p, last: p };
        let tool = self.ui.tool;
        if tool.is_freehand() {
            vec![Action::DrawSegment {
                from: p,
                to: p,
                style: BrushStyle::for_tool(tool, &self.ui.color),
            }]
        } else if tool.is_shape() {
            vec![Action::CaptureBackdrop]
        } else {
            Vec::new()
        }
    }

    /// Extend the active stroke. Freehand tools commit one incremental
    /// segment; shape tools restore the backdrop and redraw a single
    /// preview, so intermediate frames never accumulate.
    pub fn on_pointer_move(&mut self, display_pt: Point) -> Vec<Action> {
        let InputState::Stroking { start, last } = self.input else {
            return Vec::new();
        };
        let p = self.mapping.to_surface(display_pt);
        let tool = self.ui.tool;
        let actions = if tool.is_freehand() {
            vec![Action::DrawSegment {
                from: last,
                to: p,
                style: BrushStyle::for_tool(tool, &self.ui.color),
            }]
        } else if let Some(outline) = shape::outline_for(tool, start, p) {
            vec![
                Action::RestoreBackdrop,
                Action::DrawShape { outline, style: BrushStyle::for_tool(tool, &self.ui.color) },
            ]
        } else {
            Vec::new()
        };
        self.input = InputState::Stroking { start, last: p };
        actions
    }

    /// End the active stroke (pointer-up or pointer-leave). No-op unless a
    /// stroke is active. The completed surface is committed as one history
    /// entry; the text tool then waits in `TextPending` for the host to
    /// collect a line of text, which commits a second entry.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let InputState::Stroking { start, .. } = self.input else {
            return Vec::new();
        };
        if self.ui.tool == Tool::Text {
            self.input = InputState::TextPending { anchor: start };
            vec![Action::CommitSnapshot, Action::TextInputRequested { anchor: start }]
        } else {
            self.input = InputState::Idle;
            vec![Action::CommitSnapshot]
        }
    }

    // --- Text entry ---

    /// Commit the collected text line. Empty or whitespace-only input is
    /// discarded without a history entry.
    pub fn commit_text(&mut self, text: &str) -> Vec<Action> {
        let InputState::TextPending { anchor } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        vec![
            Action::DrawText {
                at: anchor,
                text: trimmed.to_owned(),
                color: self.ui.color.clone(),
            },
            Action::CommitSnapshot,
        ]
    }

    /// Abandon a pending text entry.
    pub fn cancel_text(&mut self) {
        if matches!(self.input, InputState::TextPending { .. }) {
            self.input = InputState::Idle;
        }
    }

    /// Surface-space anchor of a pending text entry, if any.
    #[must_use]
    pub fn pending_text_anchor(&self) -> Option<Point> {
        match self.input {
            InputState::TextPending { anchor } => Some(anchor),
            _ => None,
        }
    }

    // --- History ---

    /// Append a committed snapshot to the current subject's stack and
    /// advance the generation counter so pending decodes are invalidated.
    pub fn commit_snapshot(&mut self, snapshot: Snapshot) {
        self.history.stack_mut(self.subject).push(snapshot);
        self.bump_epoch();
    }

    /// Install the freshly painted background. Seeds the current stack when
    /// it is empty; otherwise returns the stack's current entry so the
    /// caller can repaint the resumed drawing over the new background.
    pub fn seed_background(&mut self, snapshot: Snapshot) -> Option<Snapshot> {
        let stack = self.history.stack_mut(self.subject);
        if stack.is_empty() {
            stack.seed(snapshot);
            None
        } else {
            stack.current().cloned()
        }
    }

    /// Move the cursor back one entry, returning the snapshot to repaint.
    /// No-op at the first entry or on an unseeded stack.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let stack = self.history.stack_mut(self.subject);
        if !stack.undo() {
            return None;
        }
        let snapshot = stack.current().cloned();
        self.bump_epoch();
        snapshot
    }

    // --- Queries ---

    /// Whether undo would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.stack(self.subject).is_some_and(HistoryStack::can_undo)
    }

    /// Number of entries in the current subject's stack.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.stack(self.subject).map_or(0, HistoryStack::len)
    }

    /// The snapshot currently displayed, if the stack is seeded.
    #[must_use]
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.history.stack(self.subject).and_then(HistoryStack::current)
    }

    /// Whether the procedural outline replaced a failed background image.
    #[must_use]
    pub fn fallback_active(&self) -> bool {
        self.fallback_active
    }

    /// Record whether the fallback outline is in use.
    pub fn set_fallback_active(&mut self, active: bool) {
        self.fallback_active = active;
    }
}

/// The full canvas engine. Wraps [`EngineCore`] and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: Option<CanvasRenderingContext2d>,
    pub core: EngineCore,
    backdrop: Option<ImageData>,
    epoch_cell: Rc<Cell<u64>>,
}

impl Engine {
    /// Create a new engine bound to the given canvas element. A canvas that
    /// cannot provide a 2D context produces an engine whose operations all
    /// silently no-op.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, policy: ScopePolicy, subject: Subject) -> Self {
        let ctx = acquire_context(&canvas);
        let core = EngineCore::new(policy, subject);
        let epoch_cell = Rc::new(Cell::new(core.epoch()));
        let mut engine = Self { canvas, ctx, core, backdrop: None, epoch_cell };
        engine.resize_surface(SURFACE_WIDTH, SURFACE_HEIGHT);
        engine
    }

    // --- Delegated inputs ---

    pub fn set_tool(&mut self, tool: Tool) {
        self.core.set_tool(tool);
    }

    pub fn set_color(&mut self, color: String) {
        self.core.set_color(color);
    }

    pub fn set_display_size(&mut self, w: f64, h: f64) {
        self.core.set_display_size(w, h);
    }

    /// Switch subjects and blank the surface pending the background load.
    /// Returns the new decode generation the host passes back to
    /// [`Engine::background_loaded`] / [`Engine::background_failed`].
    pub fn set_subject(&mut self, subject: Subject) -> u64 {
        let epoch = self.core.set_subject(subject);
        self.epoch_cell.set(epoch);
        self.backdrop = None;
        self.resize_surface(SURFACE_WIDTH, SURFACE_HEIGHT);
        if let Some(ctx) = &self.ctx {
            render::clear(ctx, SURFACE_WIDTH, SURFACE_HEIGHT);
        }
        epoch
    }

    // --- Background lifecycle ---

    /// Paint a successfully decoded background image, rescaling the surface
    /// to the image's aspect ratio. Stale generations are discarded.
    ///
    /// # Errors
    ///
    /// Returns `Err` if painting or serializing the surface fails.
    pub fn background_loaded(&mut self, img: &HtmlImageElement, epoch: u64) -> Result<(), JsValue> {
        if !self.core.is_current(epoch) {
            log::debug!("discarding stale background decode");
            return Ok(());
        }
        let Some(ctx) = self.ctx.clone() else {
            return Ok(());
        };
        let natural_w = f64::from(img.natural_width());
        let natural_h = f64::from(img.natural_height());
        let w = SURFACE_WIDTH;
        let h = if natural_w > 0.0 && natural_h > 0.0 {
            (w * natural_h / natural_w).round()
        } else {
            SURFACE_HEIGHT
        };
        self.resize_surface(w, h);
        render::paint_image(&ctx, img, w, h)?;
        self.core.set_fallback_active(false);
        self.finish_background()
    }

    /// Paint the procedural fallback outline after a failed image load.
    /// Stale generations are discarded. There is no retry; the fallback
    /// stands until the subject changes again.
    ///
    /// # Errors
    ///
    /// Returns `Err` if painting or serializing the surface fails.
    pub fn background_failed(&mut self, epoch: u64) -> Result<(), JsValue> {
        if !self.core.is_current(epoch) {
            log::debug!("discarding stale background failure");
            return Ok(());
        }
        let Some(ctx) = self.ctx.clone() else {
            return Ok(());
        };
        self.resize_surface(SURFACE_WIDTH, SURFACE_HEIGHT);
        render::clear(&ctx, SURFACE_WIDTH, SURFACE_HEIGHT);
        render::draw_figures(&ctx, &outline::body_figures(self.core.subject.view))?;
        self.core.set_fallback_active(true);
        self.finish_background()
    }

    fn finish_background(&mut self) -> Result<(), JsValue> {
        let snapshot = self.snapshot()?;
        if let Some(resume) = self.core.seed_background(snapshot) {
            self.paint_snapshot(&resume);
        }
        Ok(())
    }

    // --- Pointer events ---

    /// # Errors
    ///
    /// Returns `Err` if a drawing or serialization call fails.
    pub fn on_pointer_down(&mut self, display_pt: Point) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_down(display_pt);
        self.apply_actions(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if a drawing or serialization call fails.
    pub fn on_pointer_move(&mut self, display_pt: Point) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_move(display_pt);
        self.apply_actions(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if a drawing or serialization call fails.
    pub fn on_pointer_up(&mut self) -> Result<(), JsValue> {
        let actions = self.core.on_pointer_up();
        let result = self.apply_actions(actions);
        self.backdrop = None;
        result
    }

    // --- Text entry ---

    /// # Errors
    ///
    /// Returns `Err` if stamping or serializing the surface fails.
    pub fn commit_text(&mut self, text: &str) -> Result<(), JsValue> {
        let actions = self.core.commit_text(text);
        self.apply_actions(actions)
    }

    pub fn cancel_text(&mut self) {
        self.core.cancel_text();
    }

    /// Display-space anchor for the host's inline text input, if a text
    /// entry is pending.
    #[must_use]
    pub fn pending_text_display_anchor(&self) -> Option<Point> {
        self.core
            .pending_text_anchor()
            .map(|anchor| self.core.mapping.to_display(anchor))
    }

    // --- Shell actions ---

    /// Step the history cursor back and repaint, if possible.
    pub fn undo(&mut self) {
        let Some(snapshot) = self.core.undo() else {
            return;
        };
        self.epoch_cell.set(self.core.epoch());
        self.paint_snapshot(&snapshot);
    }

    /// Blank the surface and append the blank state as a new history entry.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serializing the blanked surface fails.
    pub fn clear(&mut self) -> Result<(), JsValue> {
        let Some(ctx) = self.ctx.clone() else {
            return Ok(());
        };
        render::clear(&ctx, self.core.mapping.surface_w, self.core.mapping.surface_h);
        let snapshot = self.snapshot()?;
        self.core.commit_snapshot(snapshot);
        self.epoch_cell.set(self.core.epoch());
        Ok(())
    }

    /// Serialize the displayed surface to a PNG data URL for download.
    /// Returns `None` when drawing is disabled.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface cannot be encoded.
    pub fn export_data_url(&self) -> Result<Option<String>, JsValue> {
        if self.ctx.is_none() {
            return Ok(None);
        }
        self.canvas.to_data_url_with_type("image/png").map(Some)
    }

    // --- Internals ---

    fn apply_actions(&mut self, actions: Vec<Action>) -> Result<(), JsValue> {
        let Some(ctx) = self.ctx.clone() else {
            return Ok(());
        };
        for action in actions {
            match action {
                Action::CaptureBackdrop => {
                    let w = self.core.mapping.surface_w;
                    let h = self.core.mapping.surface_h;
                    self.backdrop = Some(render::capture_backdrop(&ctx, w, h)?);
                }
                Action::RestoreBackdrop => {
                    if let Some(backdrop) = &self.backdrop {
                        render::restore_backdrop(&ctx, backdrop)?;
                    }
                }
                Action::DrawSegment { from, to, style } => {
                    render::stroke_segment(&ctx, from, to, &style);
                }
                Action::DrawShape { outline, style } => {
                    render::stroke_outline(&ctx, &outline, &style)?;
                }
                Action::DrawText { at, text, color } => {
                    render::fill_label(&ctx, at, &text, &color)?;
                }
                Action::CommitSnapshot => {
                    let snapshot = self.snapshot()?;
                    self.core.commit_snapshot(snapshot);
                    self.epoch_cell.set(self.core.epoch());
                }
                Action::TextInputRequested { .. } => {}
            }
        }
        Ok(())
    }

    fn snapshot(&self) -> Result<Snapshot, JsValue> {
        self.canvas.to_data_url_with_type("image/png").map(Snapshot)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize_surface(&mut self, w: f64, h: f64) {
        self.canvas.set_width(w.max(1.0) as u32);
        self.canvas.set_height(h.max(1.0) as u32);
        self.core.set_surface_size(w, h);
    }

    /// Decode a snapshot back into pixels and paint it, guarded by the
    /// generation captured at schedule time. Stale decodes are dropped.
    fn paint_snapshot(&self, snapshot: &Snapshot) {
        let Some(ctx) = self.ctx.clone() else {
            return;
        };
        let img = match HtmlImageElement::new() {
            Ok(img) => img,
            Err(err) => {
                log::warn!("snapshot decode unavailable: {err:?}");
                return;
            }
        };
        let canvas = self.canvas.clone();
        let epoch_cell = Rc::clone(&self.epoch_cell);
        let scheduled = epoch_cell.get();
        let holder: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let img_for_cb = img.clone();
        let cb = Closure::wrap(Box::new(move || {
            if epoch_cell.get() == scheduled {
                let w = f64::from(canvas.width());
                let h = f64::from(canvas.height());
                ctx.clear_rect(0.0, 0.0, w, h);
                if let Err(err) =
                    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img_for_cb, 0.0, 0.0, w, h)
                {
                    log::warn!("snapshot repaint failed: {err:?}");
                }
            } else {
                log::debug!("discarding stale snapshot decode");
            }
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut()>);
        img.set_onload(Some(cb.as_ref().unchecked_ref::<js_sys::Function>()));
        *holder.borrow_mut() = Some(cb);
        img.set_src(&snapshot.0);
    }
}

fn acquire_context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(raw)) => match raw.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => Some(ctx),
            Err(raw) => {
                log::warn!("unexpected 2d context object: {raw:?}");
                None
            }
        },
        Ok(None) => {
            log::warn!("2d context unavailable; drawing disabled");
            None
        }
        Err(err) => {
            log::warn!("2d context acquisition failed: {err:?}; drawing disabled");
            None
        }
    }
}

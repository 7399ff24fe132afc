#![allow(clippy::float_cmp)]

use super::*;
use crate::assets::{Sex, View};

// =============================================================
// Helpers
// =============================================================

fn male_front() -> Subject {
    Subject::new(Sex::Male, View::Front)
}

fn male_back() -> Subject {
    Subject::new(Sex::Male, View::Back)
}

/// A core with the display sized 1:1 with the surface and a seeded history,
/// as it stands right after the background has loaded.
fn seeded_core(policy: ScopePolicy) -> EngineCore {
    let mut core = EngineCore::new(policy, male_front());
    core.set_display_size(400.0, 600.0);
    assert_eq!(core.seed_background(snap("bg")), None);
    core
}

fn snap(tag: &str) -> Snapshot {
    Snapshot(tag.to_owned())
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Stand in for the browser layer: answer each `CommitSnapshot` action with
/// a tagged snapshot, as `Engine` would with the serialized surface.
fn commit_requested(core: &mut EngineCore, actions: &[Action], tag: &str) -> usize {
    let mut committed = 0;
    for action in actions {
        if *action == Action::CommitSnapshot {
            core.commit_snapshot(snap(&format!("{tag}-{committed}")));
            committed += 1;
        }
    }
    committed
}

// =============================================================
// Freehand strokes
// =============================================================

/// Surface 400×600, pencil, #ff0000: down at (100,100), move to (100,200)
/// produces a dot then one incremental segment of width 3, and exactly one
/// history entry is appended at pointer-up.
#[test]
fn pencil_stroke_scenario() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    let style = BrushStyle { color: "#ff0000".to_owned(), width: 3.0 };

    let down = core.on_pointer_down(pt(100.0, 100.0));
    assert_eq!(
        down,
        vec![Action::DrawSegment { from: pt(100.0, 100.0), to: pt(100.0, 100.0), style: style.clone() }]
    );

    let moved = core.on_pointer_move(pt(100.0, 200.0));
    assert_eq!(
        moved,
        vec![Action::DrawSegment { from: pt(100.0, 100.0), to: pt(100.0, 200.0), style }]
    );

    let up = core.on_pointer_up();
    assert_eq!(up, vec![Action::CommitSnapshot]);
    assert_eq!(commit_requested(&mut core, &up, "stroke"), 1);
    assert_eq!(core.history_len(), 2);
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn freehand_segments_chain_from_last_point() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.on_pointer_down(pt(10.0, 10.0));
    core.on_pointer_move(pt(20.0, 10.0));
    let second = core.on_pointer_move(pt(30.0, 15.0));
    let [Action::DrawSegment { from, to, .. }] = second.as_slice() else {
        panic!("expected one segment");
    };
    assert_eq!(*from, pt(20.0, 10.0));
    assert_eq!(*to, pt(30.0, 15.0));
}

#[test]
fn eraser_paints_background_color() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.set_tool(Tool::Eraser);
    let down = core.on_pointer_down(pt(50.0, 50.0));
    let [Action::DrawSegment { style, .. }] = down.as_slice() else {
        panic!("expected one segment");
    };
    assert_eq!(style.color, "#ffffff");
    assert_eq!(style.width, 20.0);
}

#[test]
fn pointer_coordinates_are_mapped_to_surface_space() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    // Display is twice the surface size.
    core.set_display_size(800.0, 1200.0);
    let down = core.on_pointer_down(pt(200.0, 200.0));
    let [Action::DrawSegment { from, .. }] = down.as_slice() else {
        panic!("expected one segment");
    };
    assert_eq!(*from, pt(100.0, 100.0));
}

// =============================================================
// Shape previews
// =============================================================

/// Every preview frame restores the backdrop before drawing, so a drag never
/// accumulates overlapping previews.
#[test]
fn shape_preview_restores_before_each_frame() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.set_tool(Tool::Circle);

    let down = core.on_pointer_down(pt(100.0, 100.0));
    assert_eq!(down, vec![Action::CaptureBackdrop]);

    let first = core.on_pointer_move(pt(130.0, 100.0));
    assert_eq!(first[0], Action::RestoreBackdrop);
    let second = core.on_pointer_move(pt(150.0, 100.0));
    assert_eq!(second[0], Action::RestoreBackdrop);

    // The second frame draws only the latest geometry.
    let Action::DrawShape { outline, .. } = &second[1] else {
        panic!("expected shape draw");
    };
    assert_eq!(
        *outline,
        ShapeOutline::Circle { center: pt(100.0, 100.0), radius: 50.0 }
    );
}

#[test]
fn circle_drag_scenario() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.set_tool(Tool::Circle);
    core.on_pointer_down(pt(100.0, 100.0));
    let moved = core.on_pointer_move(pt(150.0, 100.0));
    let Action::DrawShape { outline, style } = &moved[1] else {
        panic!("expected shape draw");
    };
    assert_eq!(*outline, ShapeOutline::Circle { center: pt(100.0, 100.0), radius: 50.0 });
    assert_eq!(style.width, 3.0);
}

#[test]
fn shape_stroke_commits_one_entry() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.set_tool(Tool::Square);
    core.on_pointer_down(pt(10.0, 10.0));
    core.on_pointer_move(pt(60.0, 40.0));
    let up = core.on_pointer_up();
    assert_eq!(commit_requested(&mut core, &up, "rect"), 1);
    assert_eq!(core.history_len(), 2);
}

// =============================================================
// Stroke lifecycle edges
// =============================================================

#[test]
fn pointer_up_without_stroke_is_noop() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    assert!(core.on_pointer_up().is_empty());
    assert_eq!(core.history_len(), 1);
}

#[test]
fn pointer_move_without_stroke_is_noop() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    assert!(core.on_pointer_move(pt(10.0, 10.0)).is_empty());
}

#[test]
fn pointer_down_is_ignored_while_text_is_pending() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.set_tool(Tool::Text);
    core.on_pointer_down(pt(30.0, 40.0));
    let up = core.on_pointer_up();
    commit_requested(&mut core, &up, "text-stroke");

    assert!(core.on_pointer_down(pt(99.0, 99.0)).is_empty());
    assert_eq!(core.pending_text_anchor(), Some(pt(30.0, 40.0)));
}

// =============================================================
// Text entry
// =============================================================

/// A text interaction appends the stroke-end entry at pointer-up and a
/// second entry when the non-empty text commits.
#[test]
fn text_tool_produces_two_entries() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.set_tool(Tool::Text);

    assert!(core.on_pointer_down(pt(30.0, 40.0)).is_empty());
    let up = core.on_pointer_up();
    assert_eq!(
        up,
        vec![Action::CommitSnapshot, Action::TextInputRequested { anchor: pt(30.0, 40.0) }]
    );
    assert_eq!(commit_requested(&mut core, &up, "text-stroke"), 1);
    assert_eq!(core.input, InputState::TextPending { anchor: pt(30.0, 40.0) });

    let commit = core.commit_text("  hurts here  ");
    let [Action::DrawText { at, text, color }, Action::CommitSnapshot] = commit.as_slice() else {
        panic!("expected text draw + commit");
    };
    assert_eq!(*at, pt(30.0, 40.0));
    assert_eq!(text, "hurts here");
    assert_eq!(color, "#ff0000");
    assert_eq!(commit_requested(&mut core, &commit, "text"), 1);

    assert_eq!(core.history_len(), 3);
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn whitespace_text_is_discarded_without_an_entry() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.set_tool(Tool::Text);
    core.on_pointer_down(pt(30.0, 40.0));
    let up = core.on_pointer_up();
    commit_requested(&mut core, &up, "text-stroke");

    assert!(core.commit_text("   ").is_empty());
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(core.history_len(), 2);
}

#[test]
fn commit_text_outside_pending_state_is_noop() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    assert!(core.commit_text("hello").is_empty());
}

#[test]
fn cancel_text_returns_to_idle() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.set_tool(Tool::Text);
    core.on_pointer_down(pt(1.0, 2.0));
    let up = core.on_pointer_up();
    commit_requested(&mut core, &up, "text-stroke");

    core.cancel_text();
    assert_eq!(core.input, InputState::Idle);
    assert_eq!(core.pending_text_anchor(), None);
}

// =============================================================
// Undo / history
// =============================================================

#[test]
fn undo_returns_previous_snapshot() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.commit_snapshot(snap("a"));
    core.commit_snapshot(snap("b"));

    assert_eq!(core.undo(), Some(snap("a")));
    assert_eq!(core.undo(), Some(snap("bg")));
    assert_eq!(core.undo(), None);
}

#[test]
fn undo_at_seed_is_noop() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    let epoch = core.epoch();
    assert_eq!(core.undo(), None);
    assert_eq!(core.epoch(), epoch);
    assert!(!core.can_undo());
}

#[test]
fn undo_before_seed_is_noop() {
    let mut core = EngineCore::new(ScopePolicy::PerSubject, male_front());
    assert_eq!(core.undo(), None);
    assert_eq!(core.history_len(), 0);
}

#[test]
fn commit_after_undo_discards_redo_branch() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.commit_snapshot(snap("a"));
    core.commit_snapshot(snap("b"));
    core.undo();
    core.commit_snapshot(snap("c"));

    assert_eq!(core.history_len(), 3);
    assert_eq!(core.undo(), Some(snap("a")));
    assert_eq!(core.undo(), Some(snap("bg")));
    assert_eq!(core.undo(), None);
}

#[test]
fn clear_then_undo_restores_pre_clear_state() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.commit_snapshot(snap("stroke"));
    // Clear appends a blank entry through the same commit path.
    core.commit_snapshot(snap("blank"));
    assert_eq!(core.undo(), Some(snap("stroke")));
}

// =============================================================
// Generation counter
// =============================================================

#[test]
fn cursor_changes_bump_the_epoch() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.commit_snapshot(snap("a"));
    let before = core.epoch();
    core.undo();
    assert_ne!(core.epoch(), before);
    assert!(!core.is_current(before));
}

#[test]
fn commits_bump_the_epoch() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    let before = core.epoch();
    core.commit_snapshot(snap("a"));
    assert_ne!(core.epoch(), before);
}

#[test]
fn subject_changes_bump_the_epoch() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    let before = core.epoch();
    let epoch = core.set_subject(male_back());
    assert_eq!(epoch, core.epoch());
    assert_ne!(epoch, before);
    assert!(core.is_current(epoch));
}

// =============================================================
// Subject switching
// =============================================================

#[test]
fn subject_switch_abandons_active_stroke() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.on_pointer_down(pt(10.0, 10.0));
    core.set_subject(male_back());
    assert_eq!(core.input, InputState::Idle);
    assert!(core.on_pointer_up().is_empty());
}

#[test]
fn subject_switch_resets_surface_to_default() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.set_surface_size(400.0, 533.0);
    core.set_subject(male_back());
    assert_eq!(core.mapping.surface_w, 400.0);
    assert_eq!(core.mapping.surface_h, 600.0);
}

#[test]
fn per_subject_history_is_scoped_to_each_subject() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.commit_snapshot(snap("front-stroke"));

    core.set_subject(male_back());
    assert_eq!(core.history_len(), 0);
    assert_eq!(core.seed_background(snap("back-bg")), None);
    assert_eq!(core.history_len(), 1);

    // Returning resumes the front stack where it left off.
    core.set_subject(male_front());
    assert_eq!(core.history_len(), 2);
    assert_eq!(core.seed_background(snap("front-bg-2")), Some(snap("front-stroke")));
}

#[test]
fn shared_history_spans_subject_switches() {
    let mut core = EngineCore::new(ScopePolicy::Shared, male_front());
    core.set_display_size(400.0, 600.0);
    core.seed_background(snap("bg"));
    core.commit_snapshot(snap("front-stroke"));

    core.set_subject(male_back());
    assert_eq!(core.history_len(), 2);
    // The shared stack is already seeded, so the new background only
    // triggers a repaint of the resumed entry.
    assert_eq!(core.seed_background(snap("back-bg")), Some(snap("front-stroke")));
}

// =============================================================
// Fallback flag
// =============================================================

#[test]
fn fallback_flag_round_trips() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    assert!(!core.fallback_active());
    core.set_fallback_active(true);
    assert!(core.fallback_active());
    core.set_subject(male_back());
    assert!(!core.fallback_active());
}

// =============================================================
// Tool / color inputs
// =============================================================

#[test]
fn set_tool_and_color_feed_the_brush() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.set_tool(Tool::Pencil);
    core.set_color("#4caf50".to_owned());
    let down = core.on_pointer_down(pt(0.0, 0.0));
    let [Action::DrawSegment { style, .. }] = down.as_slice() else {
        panic!("expected one segment");
    };
    assert_eq!(style.color, "#4caf50");
}

#[test]
fn current_snapshot_tracks_the_cursor() {
    let mut core = seeded_core(ScopePolicy::PerSubject);
    core.commit_snapshot(snap("a"));
    assert_eq!(core.current_snapshot(), Some(&snap("a")));
    core.undo();
    assert_eq!(core.current_snapshot(), Some(&snap("bg")));
}

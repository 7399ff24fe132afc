#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_the_unloaded_surface() {
    let view = CanvasViewState::default();
    assert!(!view.using_fallback);
    assert!(!view.can_undo);
    assert_eq!(view.entry_count, 0);
    assert_eq!(view.surface_width, 400.0);
    assert_eq!(view.surface_height, 600.0);
    assert_eq!(view.pending_text, None);
}

#[test]
fn pending_text_carries_display_coordinates() {
    let pending = PendingText { x: 12.5, y: 88.0 };
    assert_eq!(pending.x, 12.5);
    assert_eq!(pending.y, 88.0);
}

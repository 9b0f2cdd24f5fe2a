#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// PointerMove
// =============================================================

#[test]
fn pointer_move_point_carries_coordinates() {
    let ev = PointerMove::new(12.0, 34.0);
    assert_eq!(ev.point(), Point::new(12.0, 34.0));
}

#[test]
fn pointer_move_equality() {
    assert_eq!(PointerMove::new(1.0, 2.0), PointerMove::new(1.0, 2.0));
    assert_ne!(PointerMove::new(1.0, 2.0), PointerMove::new(2.0, 1.0));
}

// =============================================================
// BubbleContent
// =============================================================

#[test]
fn content_new_accepts_str_and_string() {
    let c = BubbleContent::new("Title", String::from("Body"));
    assert_eq!(c.title, "Title");
    assert_eq!(c.body, "Body");
}

// =============================================================
// InteractionState
// =============================================================

#[test]
fn state_default_is_hidden() {
    assert_eq!(InteractionState::default(), InteractionState::Hidden);
}

#[test]
fn only_shown_tracks_pointer() {
    assert!(!InteractionState::Hidden.is_tracking());
    assert!(InteractionState::Shown.is_tracking());
    assert!(!InteractionState::Frozen.is_tracking());
}

#[test]
fn state_debug_format() {
    assert_eq!(format!("{:?}", InteractionState::Frozen), "Frozen");
}

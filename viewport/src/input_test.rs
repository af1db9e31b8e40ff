#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
}

#[test]
fn back_forward_and_unknown_codes_are_other() {
    assert_eq!(Button::from_dom(3), Button::Other);
    assert_eq!(Button::from_dom(4), Button::Other);
    assert_eq!(Button::from_dom(-1), Button::Other);
}

// =============================================================
// WheelDelta
// =============================================================

#[test]
fn wheel_up_zooms_in() {
    assert_eq!(WheelDelta { dx: 0.0, dy: -120.0 }.direction(), WheelZoom::In);
}

#[test]
fn wheel_down_zooms_out() {
    assert_eq!(WheelDelta { dx: 0.0, dy: 3.0 }.direction(), WheelZoom::Out);
}

#[test]
fn wheel_horizontal_only_zooms_out() {
    assert_eq!(WheelDelta { dx: -40.0, dy: 0.0 }.direction(), WheelZoom::Out);
}

// =============================================================
// Cursor
// =============================================================

#[test]
fn cursor_default_is_default() {
    assert_eq!(Cursor::default(), Cursor::Default);
}

#[test]
fn cursor_css_values() {
    assert_eq!(Cursor::Default.as_css(), "default");
    assert_eq!(Cursor::Move.as_css(), "move");
    assert_eq!(Cursor::Grabbing.as_css(), "grabbing");
}

// =============================================================
// DragState
// =============================================================

#[test]
fn drag_state_default_is_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
    assert!(!DragState::Idle.is_dragging());
}

#[test]
fn idle_has_no_target() {
    assert_eq!(DragState::Idle.target_pan(Point::new(5.0, 5.0)), None);
}

#[test]
fn begin_captures_pointer_minus_pan() {
    let drag = DragState::begin(Point::new(300.0, 200.0), Point::new(20.0, -10.0));
    assert_eq!(drag, DragState::Dragging { start: Point::new(280.0, 210.0) });
    assert!(drag.is_dragging());
}

#[test]
fn target_without_movement_keeps_pan() {
    let pan = Point::new(20.0, -10.0);
    let pointer = Point::new(300.0, 200.0);
    let drag = DragState::begin(pointer, pan);
    assert_eq!(drag.target_pan(pointer), Some(pan));
}

#[test]
fn target_is_absolute_not_accumulated() {
    let drag = DragState::begin(Point::new(100.0, 100.0), Point::new(0.0, 0.0));
    assert_eq!(drag.target_pan(Point::new(130.0, 90.0)), Some(Point::new(30.0, -10.0)));
    // Repeating the same pointer position yields the same pan.
    assert_eq!(drag.target_pan(Point::new(130.0, 90.0)), Some(Point::new(30.0, -10.0)));
}

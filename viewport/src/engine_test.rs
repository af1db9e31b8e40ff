#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::EXPORT_JPEG_QUALITY;

// =============================================================
// Helpers
// =============================================================

/// 800x600 container showing a 1600x1200 image (layout box fills the container).
fn loaded() -> ViewportCore {
    let mut core = ViewportCore::new();
    core.set_container(Size::new(800.0, 600.0));
    core.load_image(Size::new(1600.0, 1200.0));
    core
}

fn zoomed_to_two() -> ViewportCore {
    let mut core = loaded();
    for _ in 0..10 {
        core.zoom_in();
    }
    assert_eq!(core.state().zoom, 2.0);
    core
}

fn drag(core: &mut ViewportCore, from: Point, to: Point) {
    core.on_pointer_down(from, Button::Primary);
    core.on_pointer_move(to);
    core.on_pointer_up();
}

// =============================================================
// Defaults and loading
// =============================================================

#[test]
fn new_core_is_identity_without_image() {
    let core = ViewportCore::new();
    assert_eq!(core.state(), ViewportState::IDENTITY);
    assert!(!core.has_image());
    assert_eq!(core.cursor(), Cursor::Default);
    assert!(core.export_plan().is_none());
}

#[test]
fn load_image_sets_layout_to_fit_container() {
    let core = loaded();
    assert!(core.has_image());
    assert_eq!(core.natural(), Some(Size::new(1600.0, 1200.0)));
    assert_eq!(core.transform.layout(), Size::new(800.0, 600.0));
}

#[test]
fn load_image_resets_viewport() {
    let mut core = zoomed_to_two();
    drag(&mut core, Point::new(400.0, 300.0), Point::new(450.0, 280.0));
    core.load_image(Size::new(640.0, 480.0));
    assert_eq!(core.state(), ViewportState::IDENTITY);
    assert_eq!(core.cursor(), Cursor::Default);
    assert!(!core.drag.is_dragging());
}

#[test]
fn load_empty_size_means_no_image() {
    let mut core = loaded();
    core.load_image(Size::default());
    assert!(!core.has_image());
}

#[test]
fn unload_disables_export() {
    let mut core = loaded();
    assert!(core.export_plan().is_some());
    core.unload();
    assert!(core.export_plan().is_none());
}

// =============================================================
// Zoom commands
// =============================================================

#[test]
fn zoom_in_steps_and_switches_cursor() {
    let mut core = loaded();
    assert!(core.zoom_in());
    assert_eq!(core.state().zoom, 1.1);
    assert_eq!(core.cursor(), Cursor::Move);
}

#[test]
fn zoom_at_limit_reports_no_change() {
    let mut core = loaded();
    for _ in 0..30 {
        core.zoom_in();
    }
    assert!(!core.zoom_in());
    assert_eq!(core.state().zoom, 3.0);
}

#[test]
fn reset_after_pan_returns_to_identity() {
    let mut core = zoomed_to_two();
    drag(&mut core, Point::new(400.0, 300.0), Point::new(480.0, 260.0));
    core.reset();
    assert_eq!(core.state(), ViewportState::IDENTITY);
    assert_eq!(core.cursor(), Cursor::Default);
}

#[test]
fn zoom_out_below_one_keeps_image_centered() {
    let mut core = zoomed_to_two();
    drag(&mut core, Point::new(400.0, 300.0), Point::new(480.0, 260.0));
    for _ in 0..15 {
        core.zoom_out();
    }
    assert_eq!(core.state().zoom, 0.5);
    assert_eq!(core.state().pan_x, 0.0);
    assert_eq!(core.state().pan_y, 0.0);
}

// =============================================================
// Dragging
// =============================================================

#[test]
fn pointer_down_is_ignored_at_fit() {
    let mut core = loaded();
    assert!(!core.on_pointer_down(Point::new(10.0, 10.0), Button::Primary));
    assert!(!core.drag.is_dragging());
    assert!(!core.on_pointer_move(Point::new(60.0, 60.0)));
    assert_eq!(core.state(), ViewportState::IDENTITY);
}

#[test]
fn pointer_down_with_secondary_button_is_ignored() {
    let mut core = zoomed_to_two();
    assert!(!core.on_pointer_down(Point::new(10.0, 10.0), Button::Secondary));
    assert!(!core.drag.is_dragging());
}

#[test]
fn back_button_does_not_start_a_drag() {
    let mut core = zoomed_to_two();
    assert!(!core.on_pointer_down(Point::new(10.0, 10.0), Button::from_dom(3)));
    assert!(!core.drag.is_dragging());
}

#[test]
fn pointer_down_without_image_is_ignored() {
    let mut core = ViewportCore::new();
    core.set_container(Size::new(800.0, 600.0));
    for _ in 0..5 {
        core.zoom_in();
    }
    assert!(!core.on_pointer_down(Point::new(10.0, 10.0), Button::Primary));
}

#[test]
fn drag_assigns_absolute_pan() {
    let mut core = zoomed_to_two();
    assert!(core.on_pointer_down(Point::new(400.0, 300.0), Button::Primary));
    assert_eq!(core.cursor(), Cursor::Grabbing);

    assert!(core.on_pointer_move(Point::new(450.0, 280.0)));
    assert_eq!(core.state(), ViewportState { zoom: 2.0, pan_x: 50.0, pan_y: -20.0 });
}

#[test]
fn drag_is_clamped_to_bounds() {
    let mut core = zoomed_to_two();
    core.on_pointer_down(Point::new(400.0, 300.0), Button::Primary);
    core.on_pointer_move(Point::new(1400.0, -900.0));
    assert_eq!(core.state().pan_x, 200.0);
    assert_eq!(core.state().pan_y, -150.0);
}

#[test]
fn pointer_up_keeps_pan_without_snap_back() {
    let mut core = zoomed_to_two();
    core.on_pointer_down(Point::new(400.0, 300.0), Button::Primary);
    core.on_pointer_move(Point::new(450.0, 280.0));
    core.on_pointer_up();
    assert_eq!(core.cursor(), Cursor::Move);
    assert_eq!(core.state().pan(), Point::new(50.0, -20.0));

    // A second drag continues from the committed pan.
    drag(&mut core, Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert_eq!(core.state().pan(), Point::new(60.0, -20.0));
}

#[test]
fn pointer_up_without_drag_is_a_no_op() {
    let mut core = zoomed_to_two();
    let before = core.state();
    core.on_pointer_up();
    assert_eq!(core.state(), before);
    assert_eq!(core.cursor(), Cursor::Move);
}

#[test]
fn move_clamped_to_same_pan_reports_no_change() {
    let mut core = zoomed_to_two();
    core.on_pointer_down(Point::new(0.0, 0.0), Button::Primary);
    assert!(core.on_pointer_move(Point::new(5_000.0, 0.0)));
    assert!(!core.on_pointer_move(Point::new(6_000.0, 0.0)));
}

// =============================================================
// Wheel
// =============================================================

#[test]
fn wheel_up_zooms_in_one_step() {
    let mut core = loaded();
    core.on_wheel(WheelDelta { dx: 0.0, dy: -1000.0 });
    assert_eq!(core.state().zoom, 1.1);
}

#[test]
fn wheel_down_zooms_out_one_step() {
    let mut core = loaded();
    core.on_wheel(WheelDelta { dx: 0.0, dy: 4.0 });
    assert_eq!(core.state().zoom, 0.9);
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_while_zoomed_reclamps_pan() {
    let mut core = zoomed_to_two();
    drag(&mut core, Point::new(0.0, 0.0), Point::new(200.0, 150.0));
    assert_eq!(core.state().pan(), Point::new(200.0, 150.0));

    core.set_container(Size::new(400.0, 300.0));
    assert_eq!(core.transform.layout(), Size::new(400.0, 300.0));
    assert_eq!(core.state().pan(), Point::new(100.0, 75.0));
}

#[test]
fn resize_at_fit_keeps_identity() {
    let mut core = loaded();
    core.set_container(Size::new(1024.0, 768.0));
    assert_eq!(core.state(), ViewportState::IDENTITY);
}

// =============================================================
// Render and export
// =============================================================

#[test]
fn render_identity() {
    let core = loaded();
    let render = core.render();
    assert_eq!(render.transform_css, "scale(1) translate(0px, 0px)");
    assert!(!render.zoomed);
    assert_eq!(render.cursor, Cursor::Default);
}

#[test]
fn render_zoomed_and_panned() {
    let mut core = zoomed_to_two();
    drag(&mut core, Point::new(400.0, 300.0), Point::new(450.0, 280.0));
    let render = core.render();
    assert_eq!(render.transform_css, "scale(2) translate(50px, -20px)");
    assert!(render.zoomed);
    assert_eq!(render.cursor, Cursor::Move);
}

#[test]
fn render_never_prints_negative_zero() {
    let mut core = zoomed_to_two();
    drag(&mut core, Point::new(0.0, 0.0), Point::new(-10.0, -10.0));
    core.reset();
    assert!(!core.render().transform_css.contains("-0px"));
}

#[test]
fn export_plan_covers_visible_region() {
    let core = loaded();
    let plan = core.export_plan().unwrap();
    assert_eq!(plan.output_width, 800);
    assert_eq!(plan.output_height, 600);
    assert_eq!(plan.quality, EXPORT_JPEG_QUALITY);
    assert_eq!(plan.source.width, 1600.0);
    assert_eq!(plan.source.height, 1200.0);
}

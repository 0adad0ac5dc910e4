#![allow(clippy::float_cmp)]

use super::*;
use crate::surface::surface_test::{Op, Recorder};

// Viewport 800x600: logical (x, y) sits at screen (x + 400, 300 - y).
// Default points: P0 (-200, 0), P1 (0, 225), P2 (0, -225), P3 (200, 0).

fn core() -> EngineCore {
    EngineCore::new(Viewport::new(800.0, 600.0))
}

fn screen(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

fn positions(core: &EngineCore) -> Vec<Vector> {
    core.control_points().iter().map(ControlPoint::position).collect()
}

const P1_SCREEN: (f64, f64) = (400.0, 75.0);
const P3_SCREEN: (f64, f64) = (600.0, 300.0);
const EMPTY_SCREEN: (f64, f64) = (400.0, 300.0);

fn move_to(core: &mut EngineCore, (x, y): (f64, f64)) -> Vec<Action> {
    core.on_pointer_move(screen(x, y)).unwrap()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_core_defaults() {
    let c = core();
    assert_eq!(c.order(), CurveOrder::Cubic);
    assert_eq!(c.param(), 0.0);
    assert!(c.show_construction());
    assert_eq!(c.input(), InputState::Idle);
    assert_eq!(c.cursor(), Cursor::Default);
    assert_eq!(c.hovered(), None);
    assert_eq!(c.active_points().len(), 4);
}

#[test]
fn default_points_are_placed_from_viewport() {
    let c = core();
    assert_eq!(
        positions(&c),
        vec![
            Vector::new(-200.0, 0.0),
            Vector::new(0.0, 225.0),
            Vector::new(0.0, -225.0),
            Vector::new(200.0, 0.0),
        ]
    );
}

#[test]
fn initial_construction_is_at_first_point() {
    let c = core();
    let construction = c.construction().unwrap();
    assert_eq!(construction.levels().len(), 4);
    assert_eq!(construction.point(), Vector::new(-200.0, 0.0));
}

// =============================================================
// Control inputs
// =============================================================

#[test]
fn set_order_requests_render() {
    let mut c = core();
    let actions = c.set_order(CurveOrder::Quadratic);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(c.order(), CurveOrder::Quadratic);
    assert_eq!(c.active_points().len(), 3);
}

#[test]
fn set_order_value_parses_selector() {
    let mut c = core();
    assert!(c.set_order_value("2").is_ok());
    assert_eq!(c.order(), CurveOrder::Linear);
}

#[test]
fn set_order_value_rejects_bad_input_and_keeps_order() {
    let mut c = core();
    assert!(matches!(c.set_order_value("7"), Err(CurveError::UnsupportedOrder(7))));
    assert!(matches!(c.set_order_value("cubic"), Err(CurveError::InvalidSelector(_))));
    assert_eq!(c.order(), CurveOrder::Cubic);
}

#[test]
fn lowering_order_keeps_inactive_points() {
    let mut c = core();
    let before = positions(&c);
    c.set_order(CurveOrder::Linear);
    let construction = c.construction().unwrap();
    assert_eq!(construction.levels().len(), 2);
    assert_eq!(construction.control_points(), &before[..2]);

    c.set_order(CurveOrder::Cubic);
    assert_eq!(positions(&c), before);
}

#[test]
fn set_param_accepts_values_outside_unit_interval() {
    let mut c = core();
    assert_eq!(c.set_param(1.5), vec![Action::RenderNeeded]);
    assert_eq!(c.param(), 1.5);
    assert!((c.construction().unwrap().t() - 1.5).abs() < f64::EPSILON);
}

#[test]
fn toggling_construction_requests_render() {
    let mut c = core();
    assert_eq!(c.set_show_construction(false), vec![Action::RenderNeeded]);
    assert!(!c.show_construction());
}

#[test]
fn resize_keeps_logical_positions() {
    let mut c = core();
    let before = positions(&c);
    c.set_viewport(Viewport::new(1024.0, 768.0));
    assert_eq!(positions(&c), before);
    assert_eq!(c.viewport(), Viewport::new(1024.0, 768.0));
}

#[test]
fn move_control_point_out_of_range_is_rejected() {
    let mut c = core();
    assert!(!c.move_control_point(4, Vector::ZERO));
    assert!(c.move_control_point(3, Vector::new(1.0, 2.0)));
    assert_eq!(c.control_points()[3].position(), Vector::new(1.0, 2.0));
}

// =============================================================
// Coordinates
// =============================================================

#[test]
fn screen_center_is_logical_origin() {
    let c = core();
    assert_eq!(c.screen_to_logical(screen(400.0, 300.0)).unwrap(), Vector::new(0.0, 0.0));
}

#[test]
fn screen_y_grows_downward() {
    let c = core();
    assert_eq!(c.screen_to_logical(screen(450.0, 100.0)).unwrap(), Vector::new(50.0, 200.0));
    assert_eq!(c.screen_to_logical(screen(0.0, 600.0)).unwrap(), Vector::new(-400.0, -300.0));
}

// =============================================================
// Hover
// =============================================================

#[test]
fn hovering_a_point_sets_pointer_cursor() {
    let mut c = core();
    let actions = move_to(&mut c, P1_SCREEN);
    assert_eq!(c.hovered(), Some(1));
    assert_eq!(actions, vec![Action::RenderNeeded, Action::SetCursor(Cursor::Pointer)]);
}

#[test]
fn leaving_a_point_restores_default_cursor() {
    let mut c = core();
    move_to(&mut c, P1_SCREEN);
    let actions = move_to(&mut c, EMPTY_SCREEN);
    assert_eq!(c.hovered(), None);
    assert_eq!(actions, vec![Action::RenderNeeded, Action::SetCursor(Cursor::Default)]);
}

#[test]
fn moving_over_empty_space_does_nothing() {
    let mut c = core();
    assert!(move_to(&mut c, EMPTY_SCREEN).is_empty());
}

#[test]
fn hover_does_not_move_points() {
    let mut c = core();
    let before = positions(&c);
    move_to(&mut c, (402.0, 77.0));
    assert_eq!(c.hovered(), Some(1));
    assert_eq!(positions(&c), before);
}

#[test]
fn inactive_points_cannot_be_hovered() {
    let mut c = core();
    c.set_order(CurveOrder::Linear);
    move_to(&mut c, P3_SCREEN);
    assert_eq!(c.hovered(), None);
    assert_eq!(c.cursor(), Cursor::Default);
}

#[test]
fn lowering_order_clears_hover_of_dropped_point() {
    let mut c = core();
    move_to(&mut c, P3_SCREEN);
    assert_eq!(c.hovered(), Some(3));
    let actions = c.set_order(CurveOrder::Quadratic);
    assert_eq!(c.hovered(), None);
    assert_eq!(actions, vec![Action::RenderNeeded, Action::SetCursor(Cursor::Default)]);
}

// =============================================================
// Drag
// =============================================================

#[test]
fn press_on_hovered_point_starts_drag() {
    let mut c = core();
    move_to(&mut c, P1_SCREEN);
    c.on_pointer_down(Button::Primary);
    assert_eq!(c.input(), InputState::Dragging { index: 1 });
}

#[test]
fn drag_moves_only_the_grabbed_point() {
    let mut c = core();
    let before = positions(&c);
    move_to(&mut c, P1_SCREEN);
    c.on_pointer_down(Button::Primary);
    let actions = move_to(&mut c, (450.0, 100.0));

    assert!(actions.contains(&Action::RenderNeeded));
    let after = positions(&c);
    assert_eq!(after[1], Vector::new(50.0, 200.0));
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[3], before[3]);
}

#[test]
fn fast_drag_keeps_the_grabbed_point() {
    let mut c = core();
    move_to(&mut c, P1_SCREEN);
    c.on_pointer_down(Button::Primary);
    // Far outside the hit radius of anything.
    move_to(&mut c, (700.0, 50.0));
    assert_eq!(c.input(), InputState::Dragging { index: 1 });
    assert_eq!(c.control_points()[1].position(), Vector::new(300.0, 250.0));
    assert_eq!(c.cursor(), Cursor::Pointer);
}

#[test]
fn press_on_empty_space_then_onto_point_starts_drag() {
    let mut c = core();
    move_to(&mut c, EMPTY_SCREEN);
    c.on_pointer_down(Button::Primary);
    assert_eq!(c.input(), InputState::Pressed);

    move_to(&mut c, (402.0, 77.0));
    assert_eq!(c.input(), InputState::Dragging { index: 1 });
    assert_eq!(c.control_points()[1].position(), Vector::new(2.0, 223.0));
}

#[test]
fn dragging_onto_a_later_point_hands_over() {
    let mut c = core();
    c.set_order(CurveOrder::Linear);
    c.move_control_point(1, Vector::new(-190.0, 0.0));
    // Pointer over P0 only.
    move_to(&mut c, (195.0, 300.0));
    assert_eq!(c.hovered(), Some(0));

    c.on_pointer_down(Button::Primary);
    assert_eq!(c.input(), InputState::Dragging { index: 0 });
    // Both points are now under the pointer; the later one takes over.
    move_to(&mut c, (208.0, 300.0));
    assert_eq!(c.input(), InputState::Dragging { index: 1 });
    assert_eq!(c.control_points()[0].position(), Vector::new(-200.0, 0.0));
    assert_eq!(c.control_points()[1].position(), Vector::new(-192.0, 0.0));
}

#[test]
fn secondary_button_never_drags() {
    let mut c = core();
    let before = positions(&c);
    move_to(&mut c, P1_SCREEN);
    assert!(c.on_pointer_down(Button::Secondary).is_empty());
    assert_eq!(c.input(), InputState::Idle);
    move_to(&mut c, (450.0, 100.0));
    assert_eq!(positions(&c), before);
}

#[test]
fn pointer_up_ends_drag() {
    let mut c = core();
    move_to(&mut c, P1_SCREEN);
    c.on_pointer_down(Button::Primary);
    move_to(&mut c, (450.0, 100.0));
    c.on_pointer_up();
    assert_eq!(c.input(), InputState::Idle);

    move_to(&mut c, (600.0, 200.0));
    assert_eq!(c.control_points()[1].position(), Vector::new(50.0, 200.0));
}

#[test]
fn pointer_up_without_press_is_ignored() {
    let mut c = core();
    move_to(&mut c, P1_SCREEN);
    assert!(c.on_pointer_up().is_empty());
    assert_eq!(c.input(), InputState::Idle);
    assert_eq!(c.cursor(), Cursor::Pointer);
}

#[test]
fn pointer_up_away_from_points_resets_cursor() {
    let mut c = core();
    move_to(&mut c, P1_SCREEN);
    c.on_pointer_down(Button::Primary);
    move_to(&mut c, (700.0, 50.0));
    let actions = c.on_pointer_up();
    assert_eq!(actions, vec![Action::SetCursor(Cursor::Default)]);
}

#[test]
fn lowering_order_mid_drag_releases_dropped_point() {
    let mut c = core();
    move_to(&mut c, P3_SCREEN);
    c.on_pointer_down(Button::Primary);
    c.set_order(CurveOrder::Linear);
    assert_eq!(c.input(), InputState::Pressed);
    let before = c.control_points()[3].position();
    move_to(&mut c, (650.0, 300.0));
    assert_eq!(c.control_points()[3].position(), before);
}

// =============================================================
// Render
// =============================================================

#[test]
fn render_draws_to_surface() {
    let c = core();
    let mut r = Recorder::new();
    c.render(&mut r).unwrap();
    assert!(matches!(r.ops.first(), Some(Op::SetTransform(_))));
    assert!(r.position(|op| matches!(op, Op::CubicTo(..))).is_some());
}

#[test]
fn render_uses_active_order() {
    let mut c = core();
    c.set_order(CurveOrder::Quadratic);
    let mut r = Recorder::new();
    c.render(&mut r).unwrap();
    assert!(r.position(|op| matches!(op, Op::QuadTo(..))).is_some());
    assert!(r.position(|op| matches!(op, Op::CubicTo(..))).is_none());
}

#[test]
fn render_highlights_hovered_point() {
    let mut c = core();
    move_to(&mut c, P1_SCREEN);
    let mut r = Recorder::new();
    c.render(&mut r).unwrap();
    let last = r.dots().pop().unwrap();
    assert_eq!(last.center, Vector::new(0.0, 225.0));
    assert_eq!(last.color, "#F00");
}

#[test]
fn render_does_not_change_state() {
    let c = core();
    let before = positions(&c);
    let mut a = Recorder::new();
    let mut b = Recorder::new();
    c.render(&mut a).unwrap();
    c.render(&mut b).unwrap();
    assert_eq!(a.ops, b.ops);
    assert_eq!(positions(&c), before);
}

#[test]
fn render_surface_errors_are_wrapped() {
    let c = core();
    let mut r = Recorder { fail_arcs: true, ..Recorder::default() };
    assert!(matches!(c.render(&mut r), Err(RenderError::Surface("arc rejected"))));
}

#[test]
fn custom_settings_change_hit_radius() {
    let settings = Settings::from_json(r#"{ "hit_radius": 30 }"#).unwrap();
    let mut c = EngineCore::with_settings(Viewport::new(800.0, 600.0), settings);
    move_to(&mut c, (420.0, 75.0));
    assert_eq!(c.hovered(), Some(1));
}

//! Two-finger pinch zoom.

use crate::helpers::empty_diagram;
use diagram_core::{Point, TouchEvent};

fn touches(points: &[(f64, f64)]) -> TouchEvent {
    TouchEvent::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

#[test]
fn test_pinch_zooms_by_distance_ratio_at_midpoint() {
    let mut diagram = empty_diagram();

    assert!(diagram.handle_touch_start(&touches(&[(100.0, 100.0), (200.0, 100.0)])));
    assert!(diagram.handle_touch_move(&touches(&[(50.0, 100.0), (250.0, 100.0)])));

    assert_eq!(diagram.zoom(), 2.0);
    assert_eq!(diagram.offset(), Point::new(75.0, 50.0));
    assert_eq!(
        diagram.viewport().client_to_world(Point::new(150.0, 100.0)),
        Point::new(150.0, 100.0)
    );
}

#[test]
fn test_pinch_ratio_is_relative_to_gesture_start() {
    let mut diagram = empty_diagram();
    diagram.set_zoom(2.0).unwrap();

    diagram.handle_touch_start(&touches(&[(0.0, 0.0), (100.0, 0.0)]));
    diagram.handle_touch_move(&touches(&[(0.0, 0.0), (200.0, 0.0)]));
    diagram.handle_touch_move(&touches(&[(0.0, 0.0), (50.0, 0.0)]));

    assert_eq!(diagram.zoom(), 1.0);
}

#[test]
fn test_pinch_is_clamped_to_zoom_range() {
    let mut diagram = empty_diagram();

    diagram.handle_touch_start(&touches(&[(0.0, 0.0), (10.0, 0.0)]));
    diagram.handle_touch_move(&touches(&[(0.0, 0.0), (700.0, 0.0)]));
    assert_eq!(diagram.zoom(), 5.0);

    diagram.handle_touch_move(&touches(&[(0.0, 0.0), (0.1, 0.0)]));
    assert_eq!(diagram.zoom(), 0.1);
}

#[test]
fn test_single_touch_is_not_a_pinch() {
    let mut diagram = empty_diagram();

    assert!(!diagram.handle_touch_start(&touches(&[(10.0, 10.0)])));
    assert!(!diagram.handle_touch_move(&touches(&[(10.0, 10.0), (90.0, 10.0)])));
    assert_eq!(diagram.zoom(), 1.0);
}

#[test]
fn test_lifting_a_finger_ends_the_pinch() {
    let mut diagram = empty_diagram();
    diagram.handle_touch_start(&touches(&[(0.0, 0.0), (100.0, 0.0)]));

    diagram.handle_touch_end(&touches(&[(0.0, 0.0)]));

    assert!(!diagram.handle_touch_move(&touches(&[(0.0, 0.0), (300.0, 0.0)])));
    assert_eq!(diagram.zoom(), 1.0);
}

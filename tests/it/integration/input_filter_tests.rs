//! Events the input pipeline must keep away from modes.

use crate::helpers::TestDiagramBuilder;
use diagram_core::{
    InputTarget, KeyCode, KeyEvent, Modifiers, Point, PointerButton, PointerEvent, WheelEvent,
};

#[test]
fn test_non_primary_press_is_ignored() {
    let mut t = TestDiagramBuilder::new().with_rect(10.0, 10.0, 40.0, 40.0).build();

    let secondary = PointerEvent::primary(20.0, 20.0).with_button(PointerButton::Secondary);
    let middle = PointerEvent::primary(500.0, 500.0).with_button(PointerButton::Middle);

    assert!(!t.diagram.handle_pointer_down(&secondary));
    assert!(!t.diagram.handle_pointer_down(&middle));
    assert!(t.diagram.selection().is_empty());
    assert_eq!(t.mode_name(), "idle");
}

#[test]
fn test_non_primary_release_does_not_end_drag_select() {
    let mut t = TestDiagramBuilder::new().build();
    t.press(10.0, 10.0);

    let secondary = PointerEvent::primary(50.0, 50.0).with_button(PointerButton::Secondary);
    assert!(!t.diagram.handle_pointer_up(&secondary));

    assert_eq!(t.mode_name(), "drag-select");
}

#[test]
fn test_text_input_events_never_reach_modes() {
    let mut t = TestDiagramBuilder::new().with_rect(10.0, 10.0, 40.0, 40.0).build();
    t.diagram.set_offset(100.0, 100.0);

    let press = PointerEvent::primary(20.0, 20.0).with_target(InputTarget::TextInput);
    let space = KeyEvent::new(KeyCode::Space).with_target(InputTarget::TextInput);
    let wheel = WheelEvent {
        target: InputTarget::TextInput,
        ..WheelEvent::new(Point::new(20.0, 20.0), Point::new(0.0, 50.0))
    };

    assert!(!t.diagram.handle_pointer_down(&press));
    assert!(!t.diagram.handle_key_down(&space));
    assert!(!t.diagram.handle_wheel(&wheel));
    assert!(!t.diagram.handle_double_click(&press));

    assert_eq!(t.mode_name(), "idle");
    assert!(t.diagram.selection().is_empty());
    assert_eq!(t.diagram.offset(), Point::new(100.0, 100.0));
    assert!(t.host.background_double_clicks.borrow().is_empty());
}

#[test]
fn test_canvas_events_are_dispatched() {
    let mut t = TestDiagramBuilder::new().build();

    assert!(t.diagram.handle_pointer_move(&PointerEvent::primary(5.0, 5.0)));
    assert!(t.diagram.handle_key_down(&KeyEvent::new(KeyCode::Other("a".into()))));
    assert!(
        t.diagram
            .handle_wheel(&WheelEvent::new(Point::ZERO, Point::ZERO).with_modifiers(Modifiers::NONE))
    );
}

#[test]
fn test_surface_origin_is_subtracted_from_client_positions() {
    let mut t = TestDiagramBuilder::new()
        .with_origin(200.0, 100.0)
        .with_rect(10.0, 10.0, 40.0, 40.0)
        .build();

    // Client (20, 20) is left of and above the surface
    t.press(20.0, 20.0);
    t.release(20.0, 20.0);
    assert!(t.diagram.selection().is_empty());

    t.press(220.0, 120.0);
    assert!(t.diagram.selection().is_selected(t.ids[0]));
}

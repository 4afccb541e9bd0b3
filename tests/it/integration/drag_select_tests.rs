//! Rubber-band selection workflows.

use crate::helpers::{TestDiagram, TestDiagramBuilder};
use diagram_core::constants::DRAG_SELECT_LAYER_NAME;
use diagram_core::{CursorStyle, ElementId, KeyCode, Modifiers, PointerEvent, Rect};

/// A (inside), B (partly inside), C (inside, unselectable), D (outside)
fn scene() -> TestDiagramBuilder {
    TestDiagramBuilder::new()
        .with_rect(20.0, 20.0, 30.0, 30.0)
        .with_rect(90.0, 90.0, 50.0, 50.0)
        .with_unselectable_rect(60.0, 20.0, 10.0, 10.0)
        .with_rect(300.0, 300.0, 10.0, 10.0)
}

fn sorted(mut ids: Vec<ElementId>) -> Vec<ElementId> {
    ids.sort();
    ids
}

fn has_overlay_layer(t: &TestDiagram) -> bool {
    t.diagram
        .stage()
        .layers()
        .iter()
        .any(|l| l.name() == DRAG_SELECT_LAYER_NAME)
}

#[test]
fn test_drag_select_requests_set_with_selectable_hits() {
    let mut t = scene().intercepting_selection().build();

    t.press(10.0, 10.0);
    assert_eq!(t.mode_name(), "drag-select");
    t.drag_to(100.0, 100.0);
    t.release(100.0, 100.0);

    assert_eq!(t.host.set_requests.borrow().len(), 1);
    assert_eq!(
        sorted(t.host.last_set_request().unwrap()),
        sorted(vec![t.ids[0], t.ids[1]])
    );
    assert!(t.host.add_requests.borrow().is_empty());
    // The host owns the selection while intercepting
    assert!(t.diagram.selection().is_empty());
    assert_eq!(t.mode_name(), "idle");
    assert!(!has_overlay_layer(&t));
    assert_eq!(t.diagram.stage().layers().len(), 1);
}

#[test]
fn test_drag_select_with_modifier_requests_add() {
    let mut t = scene().intercepting_selection().build();

    t.diagram
        .handle_pointer_down(&PointerEvent::primary(10.0, 10.0).with_modifiers(Modifiers::ctrl()));
    t.drag_to(100.0, 100.0);
    t.release(100.0, 100.0);

    assert!(t.host.set_requests.borrow().is_empty());
    assert_eq!(
        sorted(t.host.last_add_request().unwrap()),
        sorted(vec![t.ids[0], t.ids[1]])
    );
    assert!(!has_overlay_layer(&t));
}

#[test]
fn test_drag_select_applies_directly_without_host_handler() {
    let mut t = scene().build();
    t.diagram.set_selection([t.ids[3]]);

    t.press(10.0, 10.0);
    t.release(100.0, 100.0);
    assert_eq!(
        sorted(t.diagram.selection().selection()),
        sorted(vec![t.ids[0], t.ids[1]])
    );

    let modifiers = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };
    t.diagram
        .handle_pointer_down(&PointerEvent::primary(250.0, 250.0).with_modifiers(modifiers));
    t.release(400.0, 400.0);
    assert_eq!(t.diagram.selection().len(), 3);
    assert!(t.diagram.selection().is_selected(t.ids[3]));
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let mut t = scene().build();
    t.diagram.set_selection([t.ids[0]]);

    t.press(500.0, 500.0);
    t.release(500.0, 500.0);

    assert!(t.diagram.selection().is_empty());
}

#[test]
fn test_overlay_follows_pointer_and_normalizes() {
    let mut t = scene().build();

    t.press(200.0, 200.0);
    let overlay_layer = &t.diagram.stage().layers()[0];
    assert_eq!(overlay_layer.name(), DRAG_SELECT_LAYER_NAME);
    assert_eq!(overlay_layer.len(), 1);
    assert!(!overlay_layer.elements()[0].is_selectable());

    t.drag_to(120.0, 260.0);
    let overlay = &t.diagram.stage().layers()[0].elements()[0];
    assert_eq!(overlay.type_tag(), "drag-rect");
    assert_eq!(overlay.bounds(), Rect::new(120.0, 200.0, 80.0, 60.0));
    assert_eq!(t.diagram.cursor(), CursorStyle::Crosshair);
}

#[test]
fn test_overlay_is_painted_below_content() {
    let mut t = scene().build();
    t.press(200.0, 200.0);
    t.drag_to(250.0, 250.0);
    t.diagram.surface_mut().take_commands();
    t.diagram.render_frame();

    let commands = t.diagram.surface().commands();
    let overlay = commands
        .iter()
        .position(|c| matches!(c, diagram_core::DrawCommand::StrokeRect(_)))
        .unwrap();
    let first_element = commands
        .iter()
        .position(|c| matches!(c, diagram_core::DrawCommand::FillRoundRect { .. }))
        .unwrap();
    assert!(overlay < first_element);
}

#[test]
fn test_escape_cancels_without_selection_change() {
    let mut t = scene().intercepting_selection().build();

    t.press(10.0, 10.0);
    t.drag_to(100.0, 100.0);
    t.key_down(KeyCode::Escape);

    assert_eq!(t.mode_name(), "idle");
    assert!(!has_overlay_layer(&t));
    assert_eq!(t.diagram.cursor(), CursorStyle::Default);

    // The release after cancelling lands in idle
    t.release(100.0, 100.0);
    assert!(t.host.set_requests.borrow().is_empty());
    assert!(t.host.add_requests.borrow().is_empty());
}

#[test]
fn test_focus_loss_cancels_drag_select() {
    let mut t = scene().intercepting_selection().build();

    t.press(10.0, 10.0);
    t.drag_to(100.0, 100.0);
    t.diagram.handle_blur();

    assert_eq!(t.mode_name(), "idle");
    assert!(!has_overlay_layer(&t));
    assert!(t.host.set_requests.borrow().is_empty());
}

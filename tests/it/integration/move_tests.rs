//! Dragging selected elements.

use crate::helpers::TestDiagramBuilder;
use diagram_core::{
    CursorStyle, Diagram, DiagramOptions, Element, ElementChangeKind, ElementId, KeyCode, Point,
    PointerEvent, Rect, RecordingSurface,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_escape_restores_original_positions() {
    let mut t = TestDiagramBuilder::new().with_rect(10.0, 10.0, 40.0, 40.0).build();

    t.press(20.0, 20.0);
    t.drag_to(60.0, 60.0);
    assert_eq!(t.mode_name(), "move");
    t.drag_to(60.0, 60.0);
    assert_eq!(t.position(0), Point::new(50.0, 50.0));

    t.key_down(KeyCode::Escape);

    assert_eq!(t.position(0), Point::new(10.0, 10.0));
    assert_eq!(t.mode_name(), "idle");
    assert_eq!(t.host.move_count(), 0);
}

#[test]
fn test_release_fires_move_complete() {
    let mut t = TestDiagramBuilder::new().with_rect(10.0, 10.0, 40.0, 40.0).build();

    t.press(20.0, 20.0);
    t.drag_to(30.0, 30.0);
    t.drag_to(45.0, 40.0);
    t.release(60.0, 60.0);

    assert_eq!(t.position(0), Point::new(50.0, 50.0));
    assert_eq!(t.mode_name(), "idle");

    let moves = t.host.moves.borrow();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].delta, Point::new(40.0, 40.0));
    assert_eq!(moves[0].elements.len(), 1);
    let moved = moves[0].elements[0];
    assert_eq!(moved.element_id, t.ids[0]);
    assert_eq!(moved.layer_id, t.layer);
    assert_eq!(moved.from, Point::new(10.0, 10.0));
    assert_eq!(moved.to, Point::new(50.0, 50.0));
}

#[test]
fn test_small_jitter_does_not_start_move() {
    let mut t = TestDiagramBuilder::new().with_rect(10.0, 10.0, 40.0, 40.0).build();

    t.press(20.0, 20.0);
    t.drag_to(22.0, 23.0);
    assert_eq!(t.mode_name(), "idle");
    t.release(22.0, 23.0);

    assert_eq!(t.position(0), Point::new(10.0, 10.0));
    assert_eq!(t.host.move_count(), 0);
    assert!(t.diagram.selection().is_selected(t.ids[0]));
}

#[test]
fn test_threshold_is_in_world_units() {
    let mut t = TestDiagramBuilder::new().with_rect(10.0, 10.0, 40.0, 40.0).build();
    t.diagram.set_zoom(4.0).unwrap();

    // 8 screen pixels is 2 world units at 4x
    t.press(80.0, 80.0);
    t.drag_to(88.0, 80.0);
    assert_eq!(t.mode_name(), "idle");

    t.drag_to(96.0, 80.0);
    assert_eq!(t.mode_name(), "move");
}

#[test]
fn test_selection_moves_together() {
    let mut t = TestDiagramBuilder::new()
        .with_rect(10.0, 10.0, 40.0, 40.0)
        .with_rect(100.0, 10.0, 40.0, 40.0)
        .with_rect(200.0, 10.0, 40.0, 40.0)
        .build();
    t.diagram.set_selection([t.ids[0], t.ids[1]]);

    t.press(20.0, 20.0);
    t.drag_to(20.0, 100.0);
    t.release(20.0, 120.0);

    assert_eq!(t.position(0), Point::new(10.0, 110.0));
    assert_eq!(t.position(1), Point::new(100.0, 110.0));
    assert_eq!(t.position(2), Point::new(200.0, 10.0));
    assert_eq!(t.host.moves.borrow()[0].elements.len(), 2);
}

#[test]
fn test_move_follows_pointer_in_world_space() {
    let mut t = TestDiagramBuilder::new().with_rect(10.0, 10.0, 40.0, 40.0).build();
    t.diagram.set_zoom(2.0).unwrap();

    t.press(40.0, 40.0);
    t.drag_to(100.0, 100.0);
    t.release(100.0, 100.0);

    assert_eq!(t.position(0), Point::new(40.0, 40.0));
    assert_eq!(t.host.moves.borrow()[0].delta, Point::new(30.0, 30.0));
}

#[test]
fn test_focus_loss_restores_positions() {
    let mut t = TestDiagramBuilder::new().with_rect(10.0, 10.0, 40.0, 40.0).build();

    t.press(20.0, 20.0);
    t.drag_to(120.0, 20.0);
    t.drag_to(150.0, 20.0);
    assert_eq!(t.diagram.cursor(), CursorStyle::Move);

    t.diagram.handle_blur();

    assert_eq!(t.position(0), Point::new(10.0, 10.0));
    assert_eq!(t.mode_name(), "idle");
    assert_eq!(t.diagram.cursor(), CursorStyle::Default);
    assert_eq!(t.host.move_count(), 0);
}

#[test]
fn test_stale_selected_ids_are_skipped() {
    let mut t = TestDiagramBuilder::new().with_rect(10.0, 10.0, 40.0, 40.0).build();
    let ghost = ElementId::new();
    t.diagram.set_selection([t.ids[0], ghost]);

    t.press(20.0, 20.0);
    t.drag_to(40.0, 20.0);
    t.release(40.0, 20.0);

    assert_eq!(t.position(0), Point::new(30.0, 10.0));
    let moves = t.host.moves.borrow();
    assert_eq!(moves[0].elements.len(), 1);
    assert_eq!(moves[0].elements[0].element_id, t.ids[0]);
}

#[test]
fn test_each_move_step_reports_element_change() {
    let kinds = Rc::new(RefCell::new(Vec::new()));
    let sink = kinds.clone();
    let options = DiagramOptions::new().on_element_changed(move |change| {
        sink.borrow_mut().push(change.kind);
    });
    let mut diagram = Diagram::new(RecordingSurface::new(400.0, 400.0), options).unwrap();
    let layer = diagram.stage_mut().add_layer("content");
    diagram
        .stage_mut()
        .add_element(layer, Element::rectangle(Rect::new(0.0, 0.0, 50.0, 50.0)));

    diagram.handle_pointer_down(&PointerEvent::primary(10.0, 10.0));
    diagram.handle_pointer_move(&PointerEvent::primary(30.0, 10.0));
    diagram.handle_pointer_move(&PointerEvent::primary(40.0, 10.0));
    diagram.handle_pointer_up(&PointerEvent::primary(50.0, 10.0));

    assert_eq!(
        *kinds.borrow(),
        vec![
            ElementChangeKind::Added,
            ElementChangeKind::Moved,
            ElementChangeKind::Moved,
        ]
    );
}

//! Selection manager tests.

use crate::helpers::TestDiagramBuilder;
use diagram_core::render::RenderScheduler;
use diagram_core::{ElementId, SelectionManager};
use std::cell::RefCell;
use std::rc::Rc;

fn ids(n: usize) -> Vec<ElementId> {
    (0..n).map(|_| ElementId::new()).collect()
}

#[test]
fn test_set_selection_replaces_and_dedups() {
    let mut selection = SelectionManager::new(RenderScheduler::new());
    let ids = ids(3);

    selection.set_selection([ids[0], ids[1]]);
    selection.set_selection([ids[2], ids[1], ids[2]]);

    assert_eq!(selection.selection(), vec![ids[2], ids[1]]);
    assert!(!selection.is_selected(ids[0]));
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_set_selection_notifies_with_snapshot_and_requests_render() {
    let scheduler = RenderScheduler::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut selection = SelectionManager::new(scheduler.clone());
    selection.set_selection_changed_callback(move |ids| sink.borrow_mut().push(ids.to_vec()));
    let ids = ids(2);

    selection.set_selection(ids.clone());

    assert!(scheduler.is_pending());
    assert_eq!(*seen.borrow(), vec![ids.clone()]);

    // Snapshot is detached from later changes
    let snapshot = selection.selection();
    selection.select_none();
    assert_eq!(snapshot, ids);
    assert_eq!(seen.borrow().len(), 2);
    assert!(seen.borrow()[1].is_empty());
}

#[test]
fn test_add_and_remove_only_notify_on_change() {
    let count = Rc::new(RefCell::new(0));
    let counter = count.clone();
    let mut selection = SelectionManager::new(RenderScheduler::new());
    selection.set_selection_changed_callback(move |_| *counter.borrow_mut() += 1);
    let ids = ids(3);

    selection.add([ids[0]]);
    selection.add([ids[0]]);
    selection.add([ids[1], ids[2]]);
    assert_eq!(selection.selection(), ids);
    assert_eq!(*count.borrow(), 2);

    selection.remove([ElementId::new()]);
    selection.remove([ids[1]]);
    assert_eq!(selection.selection(), vec![ids[0], ids[2]]);
    assert_eq!(*count.borrow(), 3);
}

#[test]
fn test_select_all_skips_unselectable() {
    let mut t = TestDiagramBuilder::new()
        .with_rect(0.0, 0.0, 10.0, 10.0)
        .with_unselectable_rect(20.0, 0.0, 10.0, 10.0)
        .with_rect(40.0, 0.0, 10.0, 10.0)
        .build();

    t.diagram.select_all();
    assert_eq!(t.diagram.selection().selection(), vec![t.ids[0], t.ids[2]]);

    t.diagram.select_none();
    assert!(t.diagram.selection().is_empty());
}

#[test]
fn test_selection_is_not_validated_against_stage() {
    let mut t = TestDiagramBuilder::new().with_rect(0.0, 0.0, 10.0, 10.0).build();
    let ghost = ElementId::new();
    let (layer, id) = (t.layer, t.ids[0]);

    t.diagram.set_selection([id, ghost]);
    assert!(t.diagram.stage_mut().remove_element(layer, id));

    assert!(t.diagram.selection().is_selected(id));
    assert!(t.diagram.selection().is_selected(ghost));
    assert!(t.diagram.render_frame());
}

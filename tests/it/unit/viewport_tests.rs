//! Zoom, offset and extent through the diagram façade.

use crate::helpers::{TestDiagramBuilder, capture_logs, empty_diagram};
use diagram_core::{
    Diagram, DiagramConfig, DiagramError, DiagramOptions, Point, RecordingSurface, Size,
};

fn small_diagram() -> Diagram<RecordingSurface> {
    TestDiagramBuilder::new().with_size(400.0, 300.0).build().diagram
}

// ============================================================================
// Zoom validation
// ============================================================================

#[test]
fn test_non_positive_zoom_rejected() {
    let mut diagram = empty_diagram();

    assert_eq!(diagram.set_zoom(0.0), Err(DiagramError::InvalidZoom { zoom: 0.0 }));
    assert_eq!(diagram.set_zoom(-1.0), Err(DiagramError::InvalidZoom { zoom: -1.0 }));
    assert!(diagram.set_zoom(f64::NAN).is_err());
    assert!(diagram.set_zoom_at_point(0.0, Some(Point::new(10.0, 10.0))).is_err());
    assert_eq!(diagram.zoom(), 1.0);
}

#[test]
fn test_infinite_zoom_rejected() {
    let mut diagram = empty_diagram();
    diagram.set_offset(100.0, 50.0);

    assert_eq!(
        diagram.set_zoom(f64::INFINITY),
        Err(DiagramError::InvalidZoom { zoom: f64::INFINITY })
    );
    assert!(
        diagram
            .set_zoom_at_point(f64::INFINITY, Some(Point::new(50.0, 50.0)))
            .is_err()
    );

    assert_eq!(diagram.zoom(), 1.0);
    assert_eq!(diagram.offset(), Point::new(100.0, 50.0));
    assert_eq!(
        diagram.viewport().client_to_world(Point::new(10.0, 10.0)),
        Point::new(110.0, 60.0)
    );
}

#[test]
fn test_zoom_outside_range_warns_but_is_not_clamped() {
    let mut diagram = empty_diagram();

    let (result, logs) = capture_logs(|| diagram.set_zoom(0.05));

    assert!(result.is_ok());
    assert_eq!(diagram.zoom(), 0.05);
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("Zoom value outside recommended range"), "logs: {logs}");
}

#[test]
fn test_zoom_inside_range_does_not_warn() {
    let mut diagram = empty_diagram();

    let (result, logs) = capture_logs(|| diagram.set_zoom(2.5));

    assert!(result.is_ok());
    assert!(!logs.contains("outside recommended range"), "logs: {logs}");
}

#[test]
fn test_invalid_initial_zoom_fails_construction() {
    for initial_zoom in [0.0, f64::INFINITY] {
        let config = DiagramConfig {
            initial_zoom,
            ..DiagramConfig::default()
        };
        let result = Diagram::new(
            RecordingSurface::new(100.0, 100.0),
            DiagramOptions::new().with_config(config),
        );
        assert!(matches!(result, Err(DiagramError::InvalidZoom { .. })));
    }
}

#[test]
fn test_surface_without_context_fails_construction() {
    let result = Diagram::new(RecordingSurface::detached(100.0, 100.0), DiagramOptions::new());
    assert!(matches!(result, Err(DiagramError::MissingDrawingContext)));
}

// ============================================================================
// Anchored zoom
// ============================================================================

#[test]
fn test_zoom_at_point_keeps_world_point_under_anchor() {
    let mut diagram = small_diagram();
    let anchor = Point::new(50.0, 50.0);
    let before = diagram.viewport().client_to_world(anchor);

    diagram.set_zoom_at_point(2.0, Some(anchor)).unwrap();

    assert_eq!(diagram.zoom(), 2.0);
    assert_eq!(diagram.viewport().client_to_world(anchor), before);
    assert_eq!(diagram.offset(), Point::new(25.0, 25.0));
}

#[test]
fn test_zoom_at_point_respects_surface_origin() {
    let mut diagram = TestDiagramBuilder::new()
        .with_size(400.0, 300.0)
        .with_origin(100.0, 40.0)
        .build()
        .diagram;
    diagram.set_offset(500.0, 500.0);
    let anchor = Point::new(300.0, 190.0);
    let before = diagram.viewport().client_to_world(anchor);
    assert_eq!(before, Point::new(700.0, 650.0));

    diagram.set_zoom_at_point(4.0, Some(anchor)).unwrap();

    assert_eq!(diagram.viewport().client_to_world(anchor), before);
}

#[test]
fn test_zoom_out_at_point_clamps_offset() {
    let mut diagram = small_diagram();
    diagram.set_extent(1000.0, 1000.0);

    diagram.set_zoom_at_point(0.5, Some(Point::new(0.0, 0.0))).unwrap();
    assert_eq!(diagram.offset(), Point::ZERO);

    diagram.set_offset(200.0, 400.0);
    diagram.set_zoom_at_point(0.2, None).unwrap();
    // 400 / 0.2 = 2000 > extent, so only 0 is reachable
    assert_eq!(diagram.offset(), Point::ZERO);
}

// ============================================================================
// Offset & extent
// ============================================================================

#[test]
fn test_offset_clamped_to_scroll_range() {
    let mut diagram = empty_diagram();

    diagram.set_offset(-100.0, 99_999.0);
    assert_eq!(diagram.offset(), Point::new(0.0, 4400.0));

    diagram.set_zoom(2.0).unwrap();
    diagram.set_offset(99_999.0, 0.0);
    assert_eq!(diagram.offset(), Point::new(4600.0, 0.0));
}

#[test]
fn test_extent_smaller_than_viewport_pins_offset() {
    let mut diagram = empty_diagram();
    diagram.set_offset(300.0, 300.0);

    diagram.set_extent(500.0, 500.0);

    assert_eq!(diagram.extent(), Size::new(500.0, 500.0));
    assert_eq!(diagram.offset(), Point::ZERO);
}

#[test]
fn test_pan_by_world_offset_adds_world_units() {
    let mut diagram = empty_diagram();
    diagram.set_zoom(2.0).unwrap();
    diagram.set_offset(100.0, 100.0);

    diagram.pan_by_world_offset(25.0, -50.0);

    assert_eq!(diagram.offset(), Point::new(125.0, 50.0));
}

#[test]
fn test_pan_by_canvas_moves_content_with_pointer() {
    let mut diagram = empty_diagram();
    diagram.set_zoom(2.0).unwrap();
    diagram.set_offset(100.0, 100.0);

    // Dragging content right/down reveals what is left/up of it
    diagram.pan_by_canvas(40.0, 20.0);

    assert_eq!(diagram.offset(), Point::new(80.0, 90.0));
}

#[test]
fn test_resize_updates_viewport_and_reclamps() {
    let mut diagram = empty_diagram();
    diagram.set_offset(4200.0, 4400.0);

    diagram.resize(1000.0, 1000.0);

    assert_eq!(diagram.viewport_size(), Size::new(1000.0, 1000.0));
    assert_eq!(diagram.offset(), Point::new(4000.0, 4000.0));
    assert!(diagram.is_render_pending());
}

#[test]
fn test_host_resize_is_picked_up_on_next_frame() {
    let mut diagram = empty_diagram();
    diagram.render_frame();

    diagram.surface_mut().host_resize(640.0, 480.0);
    assert_eq!(diagram.viewport_size(), Size::new(800.0, 600.0));

    assert!(diagram.render_frame());
    assert_eq!(diagram.viewport_size(), Size::new(640.0, 480.0));
}

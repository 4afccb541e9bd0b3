use crate::spatial_index::ElementHit;
use crate::types::Point;

/// Enriched pointer state handed to modes with every pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerInfo {
    pub canvas: Point,
    pub world: Point,
    /// Movement since the previous pointer event
    pub canvas_delta: Point,
    pub world_delta: Point,
    /// Movement since the pointer went down
    pub canvas_total_delta: Point,
    pub world_total_delta: Point,
    /// Positions since the pointer went down, oldest first
    pub canvas_history: Vec<Point>,
    pub world_history: Vec<Point>,
    /// Position of the press before the current one
    pub canvas_previous_click: Point,
    pub world_previous_click: Point,
    pub element_under_pointer: Option<ElementHit>,
}

impl PointerInfo {
    /// Info for a single position with no movement or history.
    pub fn at(canvas: Point, world: Point) -> Self {
        Self {
            canvas,
            world,
            canvas_delta: Point::ZERO,
            world_delta: Point::ZERO,
            canvas_total_delta: Point::ZERO,
            world_total_delta: Point::ZERO,
            canvas_history: Vec::new(),
            world_history: Vec::new(),
            canvas_previous_click: Point::ZERO,
            world_previous_click: Point::ZERO,
            element_under_pointer: None,
        }
    }
}

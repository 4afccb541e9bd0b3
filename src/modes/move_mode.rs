//! Dragging a fixed set of elements.
//!
//! Positions are always the originals plus the total pointer delta. Cancel
//! writes the originals back.

use super::{Mode, Transition};
use crate::diagram::{DiagramContext, MoveComplete, MovedElement};
use crate::input::{KeyCode, KeyEvent, PointerEvent, PointerInfo};
use crate::types::{CursorStyle, ElementId, LayerId, Point};

#[derive(Debug, Clone, Copy)]
struct Original {
    layer_id: LayerId,
    element_id: ElementId,
    position: Point,
}

#[derive(Debug)]
pub struct MoveMode {
    elements: Vec<ElementId>,
    start: Point,
    originals: Vec<Original>,
}

impl MoveMode {
    /// Move `elements` following the pointer from world position `start`.
    pub fn new(elements: Vec<ElementId>, start: Point) -> Self {
        Self {
            elements,
            start,
            originals: Vec::new(),
        }
    }

    fn apply_delta(&self, delta: Point, ctx: &mut DiagramContext) {
        let stage = ctx.stage_mut();
        for original in &self.originals {
            let to = original.position + delta;
            stage.set_element_position(original.layer_id, original.element_id, to.x, to.y);
        }
    }

    fn restore(&self, ctx: &mut DiagramContext) {
        self.apply_delta(Point::ZERO, ctx);
    }
}

impl Mode for MoveMode {
    fn name(&self) -> &str {
        "move"
    }

    fn on_enter(&mut self, ctx: &mut DiagramContext) {
        // Ids no longer on the stage are skipped
        self.originals = self
            .elements
            .iter()
            .filter_map(|id| {
                ctx.stage().find_element(*id).map(|(layer_id, element)| Original {
                    layer_id,
                    element_id: *id,
                    position: element.position(),
                })
            })
            .collect();
        ctx.set_cursor(CursorStyle::Move);
    }

    fn on_exit(&mut self, ctx: &mut DiagramContext) {
        ctx.set_cursor(CursorStyle::Default);
    }

    fn on_pointer_move(
        &mut self,
        info: &PointerInfo,
        _event: &PointerEvent,
        ctx: &mut DiagramContext,
    ) -> Transition {
        self.apply_delta(info.world - self.start, ctx);
        ctx.request_render();
        Transition::None
    }

    fn on_pointer_up(
        &mut self,
        info: &PointerInfo,
        _event: &PointerEvent,
        ctx: &mut DiagramContext,
    ) -> Transition {
        let delta = info.world - self.start;
        self.apply_delta(delta, ctx);

        let elements = self
            .originals
            .iter()
            .map(|original| MovedElement {
                layer_id: original.layer_id,
                element_id: original.element_id,
                from: original.position,
                to: original.position + delta,
            })
            .collect();
        ctx.fire_move_complete(MoveComplete { elements, delta });
        Transition::Pop
    }

    fn on_key_down(&mut self, event: &KeyEvent, ctx: &mut DiagramContext) -> Transition {
        if event.code == KeyCode::Escape {
            self.restore(ctx);
            return Transition::Pop;
        }
        Transition::None
    }

    fn on_blur(&mut self, ctx: &mut DiagramContext) -> Transition {
        self.restore(ctx);
        Transition::Pop
    }
}

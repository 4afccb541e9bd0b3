//! Rubber-band rectangle selection.
//!
//! While active the mode owns a transient layer at the bottom of the stage
//! holding the dashed overlay. The layer is removed on exit no matter how the
//! mode ends.

use super::{Mode, Transition};
use crate::constants::DRAG_SELECT_LAYER_NAME;
use crate::diagram::DiagramContext;
use crate::element::Element;
use crate::input::{KeyCode, KeyEvent, PointerEvent, PointerInfo};
use crate::types::{CursorStyle, ElementId, LayerId, Point, Rect};
use tracing::debug;

#[derive(Debug)]
pub struct DragSelectMode {
    start: Point,
    additive: bool,
    overlay: Option<(LayerId, ElementId)>,
}

impl DragSelectMode {
    /// `start` is in world space. With `additive` the hits are added to the
    /// selection instead of replacing it.
    pub fn new(start: Point, additive: bool) -> Self {
        Self {
            start,
            additive,
            overlay: None,
        }
    }

    fn rect_to(&self, current: Point) -> Rect {
        Rect::from_corners(self.start, current)
    }
}

impl Mode for DragSelectMode {
    fn name(&self) -> &str {
        "drag-select"
    }

    fn on_enter(&mut self, ctx: &mut DiagramContext) {
        ctx.set_cursor(CursorStyle::Crosshair);

        let stage = ctx.stage_mut();
        let layer_id = stage.insert_layer_at(0, DRAG_SELECT_LAYER_NAME);
        let overlay = Element::drag_rect(self.start);
        let element_id = overlay.id();
        stage.add_element(layer_id, overlay);
        self.overlay = Some((layer_id, element_id));
    }

    fn on_exit(&mut self, ctx: &mut DiagramContext) {
        ctx.set_cursor(CursorStyle::Default);
        if let Some((layer_id, _)) = self.overlay.take() {
            ctx.stage_mut().remove_layer(layer_id);
        }
    }

    fn on_pointer_move(
        &mut self,
        info: &PointerInfo,
        _event: &PointerEvent,
        ctx: &mut DiagramContext,
    ) -> Transition {
        let Some((layer_id, element_id)) = self.overlay else {
            return Transition::None;
        };
        let rect = self.rect_to(info.world);
        let stage = ctx.stage_mut();
        stage.set_element_position(layer_id, element_id, rect.x, rect.y);
        stage.set_element_size(layer_id, element_id, rect.width, rect.height);
        Transition::None
    }

    fn on_pointer_up(
        &mut self,
        info: &PointerInfo,
        _event: &PointerEvent,
        ctx: &mut DiagramContext,
    ) -> Transition {
        let rect = self.rect_to(info.world);
        let ids: Vec<ElementId> = ctx
            .stage_mut()
            .elements_in_rect(rect)
            .into_iter()
            .filter(|hit| hit.selectable)
            .map(|hit| hit.element_id)
            .collect();
        debug!(hits = ids.len(), additive = self.additive, "Drag-select finished");

        if self.additive {
            ctx.request_selection_add(&ids);
        } else {
            ctx.request_selection_set(&ids);
        }
        Transition::Pop
    }

    fn on_key_down(&mut self, event: &KeyEvent, _ctx: &mut DiagramContext) -> Transition {
        if event.code == KeyCode::Escape {
            return Transition::Pop;
        }
        Transition::None
    }

    fn on_blur(&mut self, _ctx: &mut DiagramContext) -> Transition {
        Transition::Pop
    }
}

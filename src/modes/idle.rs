//! The resting mode at the bottom of the stack.

use super::{DragSelectMode, Mode, MoveMode, PanMode, Transition};
use crate::diagram::DiagramContext;
use crate::input::{KeyCode, KeyEvent, PointerEvent, PointerInfo, WheelEvent};
use crate::types::{ElementId, Point};
use tracing::warn;

/// A press on a selectable element that becomes a move once the pointer
/// travels past the drag threshold.
#[derive(Debug, Clone)]
struct PendingDrag {
    start_world: Point,
    elements: Vec<ElementId>,
}

#[derive(Debug, Default)]
pub struct IdleMode {
    pending_drag: Option<PendingDrag>,
}

impl IdleMode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Mode for IdleMode {
    fn name(&self) -> &str {
        "idle"
    }

    fn on_exit(&mut self, _ctx: &mut DiagramContext) {
        self.pending_drag = None;
    }

    fn on_pointer_down(
        &mut self,
        info: &PointerInfo,
        event: &PointerEvent,
        ctx: &mut DiagramContext,
    ) -> Transition {
        let additive = event.modifiers.is_additive();

        let Some(hit) = info.element_under_pointer.filter(|hit| hit.selectable) else {
            return Transition::push(DragSelectMode::new(info.world, additive));
        };

        let id = hit.element_id;
        let selected = ctx.selection().is_selected(id);
        if additive && !ctx.selection().is_empty() {
            if selected {
                ctx.request_selection_remove(&[id]);
            } else {
                ctx.request_selection_add(&[id]);
            }
        } else if !selected {
            ctx.request_selection_set(&[id]);
        }

        // Whatever is selected now moves together
        self.pending_drag = Some(PendingDrag {
            start_world: info.world,
            elements: ctx.selection().selection(),
        });
        Transition::None
    }

    fn on_pointer_move(
        &mut self,
        info: &PointerInfo,
        _event: &PointerEvent,
        ctx: &mut DiagramContext,
    ) -> Transition {
        let Some(pending) = &self.pending_drag else {
            return Transition::None;
        };

        let dx = info.world.x - pending.start_world.x;
        let dy = info.world.y - pending.start_world.y;
        let threshold = ctx.config().drag_threshold;
        if dx.abs() <= threshold && dy.abs() <= threshold {
            return Transition::None;
        }

        match self.pending_drag.take() {
            Some(pending) => Transition::push(MoveMode::new(pending.elements, pending.start_world)),
            None => Transition::None,
        }
    }

    fn on_pointer_up(
        &mut self,
        _info: &PointerInfo,
        _event: &PointerEvent,
        _ctx: &mut DiagramContext,
    ) -> Transition {
        self.pending_drag = None;
        Transition::None
    }

    fn on_key_down(&mut self, event: &KeyEvent, _ctx: &mut DiagramContext) -> Transition {
        if event.code == KeyCode::Space && !event.repeat {
            return Transition::push(PanMode::new());
        }
        Transition::None
    }

    fn on_wheel(&mut self, event: &WheelEvent, ctx: &mut DiagramContext) -> Transition {
        if event.modifiers.is_additive() {
            wheel_zoom(event, ctx);
        } else {
            ctx.pan_by_canvas(-event.delta.x, -event.delta.y);
        }
        Transition::None
    }

    fn on_double_click(
        &mut self,
        info: &PointerInfo,
        _event: &PointerEvent,
        ctx: &mut DiagramContext,
    ) -> Transition {
        match &info.element_under_pointer {
            Some(hit) => ctx.fire_element_double_click(hit),
            None => ctx.fire_background_double_click(info.world),
        }
        Transition::None
    }

    fn on_blur(&mut self, _ctx: &mut DiagramContext) -> Transition {
        self.pending_drag = None;
        Transition::None
    }
}

/// One wheel notch of zoom at the pointer: scrolling down zooms out.
pub(super) fn wheel_zoom(event: &WheelEvent, ctx: &mut DiagramContext) {
    if event.delta.y == 0.0 {
        return;
    }
    let factor = if event.delta.y > 0.0 {
        ctx.config().wheel_zoom_out_factor
    } else {
        ctx.config().wheel_zoom_in_factor
    };
    if let Err(err) = ctx.zoom_by_factor_at(factor, event.position) {
        warn!(%err, "Wheel zoom rejected");
    }
}

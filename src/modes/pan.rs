//! Hand-tool panning while Space is held.

use super::idle::wheel_zoom;
use super::{Mode, Transition};
use crate::diagram::DiagramContext;
use crate::input::{KeyCode, KeyEvent, PointerEvent, PointerInfo, WheelEvent};
use crate::types::CursorStyle;

#[derive(Debug, Default)]
pub struct PanMode {
    panning: bool,
}

impl PanMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_panning(&self) -> bool {
        self.panning
    }
}

impl Mode for PanMode {
    fn name(&self) -> &str {
        "pan"
    }

    fn on_enter(&mut self, ctx: &mut DiagramContext) {
        self.panning = false;
        ctx.set_cursor(CursorStyle::Grab);
    }

    fn on_exit(&mut self, ctx: &mut DiagramContext) {
        self.panning = false;
        ctx.set_cursor(CursorStyle::Default);
    }

    fn on_pointer_down(
        &mut self,
        _info: &PointerInfo,
        _event: &PointerEvent,
        ctx: &mut DiagramContext,
    ) -> Transition {
        self.panning = true;
        ctx.set_cursor(CursorStyle::Grabbing);
        Transition::None
    }

    fn on_pointer_move(
        &mut self,
        info: &PointerInfo,
        _event: &PointerEvent,
        ctx: &mut DiagramContext,
    ) -> Transition {
        if self.panning {
            ctx.pan_by_canvas(info.canvas_delta.x, info.canvas_delta.y);
        }
        Transition::None
    }

    fn on_pointer_up(
        &mut self,
        _info: &PointerInfo,
        _event: &PointerEvent,
        ctx: &mut DiagramContext,
    ) -> Transition {
        self.panning = false;
        ctx.set_cursor(CursorStyle::Grab);
        Transition::None
    }

    fn on_key_down(&mut self, event: &KeyEvent, ctx: &mut DiagramContext) -> Transition {
        let size = ctx.viewport_size();
        let fraction = ctx.config().keyboard_pan_fraction;
        let (step_x, step_y) = (size.width * fraction, size.height * fraction);

        match event.code {
            KeyCode::ArrowUp => ctx.pan_by_canvas(0.0, step_y),
            KeyCode::ArrowDown => ctx.pan_by_canvas(0.0, -step_y),
            KeyCode::ArrowLeft => ctx.pan_by_canvas(step_x, 0.0),
            KeyCode::ArrowRight => ctx.pan_by_canvas(-step_x, 0.0),
            _ => {}
        }
        Transition::None
    }

    fn on_key_up(&mut self, event: &KeyEvent, _ctx: &mut DiagramContext) -> Transition {
        if event.code == KeyCode::Space {
            return Transition::Pop;
        }
        Transition::None
    }

    fn on_wheel(&mut self, event: &WheelEvent, ctx: &mut DiagramContext) -> Transition {
        wheel_zoom(event, ctx);
        Transition::None
    }

    fn on_blur(&mut self, _ctx: &mut DiagramContext) -> Transition {
        Transition::Pop
    }
}

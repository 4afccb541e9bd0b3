//! Turns raw host input into enriched events for the current mode.
//!
//! Tracks the drag that started with the last primary press (history and
//! totals), the previous click, and the two-finger pinch state. Events aimed
//! at a text input are dropped, as are non-primary presses and releases.

use super::coords::CoordinateConverter;
use super::events::{InputTarget, KeyEvent, PointerButton, PointerEvent, TouchEvent, WheelEvent};
use super::pointer::PointerInfo;
use crate::diagram::DiagramContext;
use crate::modes::ModeStack;
use crate::types::Point;
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy)]
struct PinchState {
    start_distance: f64,
    start_zoom: f64,
}

#[derive(Debug, Default)]
pub struct InputManager {
    last_client: Point,
    dragging: bool,
    drag_start_canvas: Point,
    drag_start_world: Point,
    canvas_history: Vec<Point>,
    world_history: Vec<Point>,
    previous_click_canvas: Point,
    previous_click_world: Point,
    pinch: Option<PinchState>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn accepts(target: InputTarget) -> bool {
        if target == InputTarget::TextInput {
            trace!("Input aimed at text field ignored");
            return false;
        }
        true
    }

    fn build_info(&self, client: Point, canvas_delta: Point, ctx: &mut DiagramContext) -> PointerInfo {
        let coords = ctx.viewport().coordinate_context();
        let canvas = CoordinateConverter::client_to_canvas(client, &coords);
        let world = CoordinateConverter::canvas_to_world(canvas, &coords);

        PointerInfo {
            canvas,
            world,
            canvas_delta,
            world_delta: CoordinateConverter::delta_screen_to_world(canvas_delta, coords.zoom),
            canvas_total_delta: canvas - self.drag_start_canvas,
            world_total_delta: world - self.drag_start_world,
            canvas_history: self.canvas_history.clone(),
            world_history: self.world_history.clone(),
            canvas_previous_click: self.previous_click_canvas,
            world_previous_click: self.previous_click_world,
            element_under_pointer: ctx.stage_mut().element_at_point(world.x, world.y),
        }
    }

    // ===== Pointer =====

    /// Returns whether the event reached a mode.
    pub fn pointer_down(
        &mut self,
        event: &PointerEvent,
        modes: &mut ModeStack,
        ctx: &mut DiagramContext,
    ) -> bool {
        if !Self::accepts(event.target) || event.button != PointerButton::Primary {
            return false;
        }

        let coords = ctx.viewport().coordinate_context();
        let canvas = CoordinateConverter::client_to_canvas(event.position, &coords);
        let world = CoordinateConverter::canvas_to_world(canvas, &coords);

        self.previous_click_canvas = self.drag_start_canvas;
        self.previous_click_world = self.drag_start_world;
        self.dragging = true;
        self.drag_start_canvas = canvas;
        self.drag_start_world = world;
        self.canvas_history = vec![canvas];
        self.world_history = vec![world];
        self.last_client = event.position;

        let info = self.build_info(event.position, Point::ZERO, ctx);
        modes.dispatch(ctx, |mode, ctx| mode.on_pointer_down(&info, event, ctx));
        true
    }

    pub fn pointer_move(
        &mut self,
        event: &PointerEvent,
        modes: &mut ModeStack,
        ctx: &mut DiagramContext,
    ) -> bool {
        if !Self::accepts(event.target) {
            return false;
        }

        let canvas_delta = event.position - self.last_client;
        self.last_client = event.position;

        if self.dragging {
            let coords = ctx.viewport().coordinate_context();
            let canvas = CoordinateConverter::client_to_canvas(event.position, &coords);
            self.canvas_history.push(canvas);
            self.world_history
                .push(CoordinateConverter::canvas_to_world(canvas, &coords));
        }

        let info = self.build_info(event.position, canvas_delta, ctx);
        modes.dispatch(ctx, |mode, ctx| mode.on_pointer_move(&info, event, ctx));
        true
    }

    pub fn pointer_up(
        &mut self,
        event: &PointerEvent,
        modes: &mut ModeStack,
        ctx: &mut DiagramContext,
    ) -> bool {
        if !Self::accepts(event.target) || event.button != PointerButton::Primary {
            return false;
        }

        let canvas_delta = event.position - self.last_client;
        self.last_client = event.position;

        let info = self.build_info(event.position, canvas_delta, ctx);
        self.dragging = false;
        modes.dispatch(ctx, |mode, ctx| mode.on_pointer_up(&info, event, ctx));
        true
    }

    pub fn double_click(
        &mut self,
        event: &PointerEvent,
        modes: &mut ModeStack,
        ctx: &mut DiagramContext,
    ) -> bool {
        if !Self::accepts(event.target) {
            return false;
        }

        let coords = ctx.viewport().coordinate_context();
        let canvas = CoordinateConverter::client_to_canvas(event.position, &coords);
        let world = CoordinateConverter::canvas_to_world(canvas, &coords);
        let info = PointerInfo {
            canvas_previous_click: self.previous_click_canvas,
            world_previous_click: self.previous_click_world,
            element_under_pointer: ctx.stage_mut().element_at_point(world.x, world.y),
            ..PointerInfo::at(canvas, world)
        };

        modes.dispatch(ctx, |mode, ctx| mode.on_double_click(&info, event, ctx));
        true
    }

    // ===== Keyboard, wheel, focus =====

    pub fn key_down(&mut self, event: &KeyEvent, modes: &mut ModeStack, ctx: &mut DiagramContext) -> bool {
        if !Self::accepts(event.target) {
            return false;
        }
        modes.dispatch(ctx, |mode, ctx| mode.on_key_down(event, ctx));
        true
    }

    pub fn key_up(&mut self, event: &KeyEvent, modes: &mut ModeStack, ctx: &mut DiagramContext) -> bool {
        if !Self::accepts(event.target) {
            return false;
        }
        modes.dispatch(ctx, |mode, ctx| mode.on_key_up(event, ctx));
        true
    }

    pub fn wheel(&mut self, event: &WheelEvent, modes: &mut ModeStack, ctx: &mut DiagramContext) -> bool {
        if !Self::accepts(event.target) {
            return false;
        }
        modes.dispatch(ctx, |mode, ctx| mode.on_wheel(event, ctx));
        true
    }

    /// The host window lost focus: any drag or pinch in flight is over.
    pub fn blur(&mut self, modes: &mut ModeStack, ctx: &mut DiagramContext) {
        self.dragging = false;
        self.pinch = None;
        modes.dispatch(ctx, |mode, ctx| mode.on_blur(ctx));
    }

    // ===== Touch pinch =====

    pub fn touch_start(&mut self, event: &TouchEvent, ctx: &mut DiagramContext) -> bool {
        let [a, b] = event.touches[..] else {
            return false;
        };
        self.pinch = Some(PinchState {
            start_distance: a.distance_to(b),
            start_zoom: ctx.zoom(),
        });
        true
    }

    /// Zoom by the change in finger distance, anchored at the pinch midpoint.
    pub fn touch_move(&mut self, event: &TouchEvent, ctx: &mut DiagramContext) -> bool {
        let Some(pinch) = self.pinch else {
            return false;
        };
        let [a, b, ..] = event.touches[..] else {
            return false;
        };
        if pinch.start_distance <= 0.0 {
            return true;
        }

        let ratio = a.distance_to(b) / pinch.start_distance;
        let zoom = ctx.config().zoom_range.clamp(pinch.start_zoom * ratio);
        if let Err(err) = ctx.set_zoom_at_point(zoom, Some(a.midpoint(b))) {
            warn!(%err, "Pinch zoom rejected");
        }
        true
    }

    pub fn touch_end(&mut self, event: &TouchEvent) {
        if event.touches.len() < 2 {
            self.pinch = None;
        }
    }
}

//! Interaction modes and the mode stack.
//!
//! The top of the stack receives every input event. A handler mutates the
//! diagram through the [`DiagramContext`] it is given and returns a
//! [`Transition`] asking the stack to push a new mode or pop itself.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Pan            (Space down)
//! Idle -> DragSelect     (primary press on empty space)
//! Idle -> Move           (press on a selectable element, then drag past threshold)
//!
//! Pan -> Idle            (Space up, focus loss)
//! DragSelect -> Idle     (release, Escape, focus loss)
//! Move -> Idle           (release, Escape, focus loss)
//! ```
//!
//! The bottom mode is installed at construction and can never be popped.

mod drag_select;
mod idle;
mod move_mode;
mod pan;

pub use drag_select::DragSelectMode;
pub use idle::IdleMode;
pub use move_mode::MoveMode;
pub use pan::PanMode;

use crate::diagram::DiagramContext;
use crate::input::{KeyEvent, PointerEvent, PointerInfo, WheelEvent};
use std::fmt;
use tracing::debug;

/// What the stack should do after a handler returns.
pub enum Transition {
    None,
    Push(Box<dyn Mode>),
    Pop,
}

impl Transition {
    pub fn push(mode: impl Mode + 'static) -> Self {
        Transition::Push(Box::new(mode))
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::None => f.write_str("None"),
            Transition::Push(mode) => write!(f, "Push({})", mode.name()),
            Transition::Pop => f.write_str("Pop"),
        }
    }
}

/// An input-interpreting state. Every handler defaults to doing nothing.
pub trait Mode {
    fn name(&self) -> &str;

    fn on_enter(&mut self, _ctx: &mut DiagramContext) {}

    fn on_exit(&mut self, _ctx: &mut DiagramContext) {}

    fn on_pointer_down(
        &mut self,
        _info: &PointerInfo,
        _event: &PointerEvent,
        _ctx: &mut DiagramContext,
    ) -> Transition {
        Transition::None
    }

    fn on_pointer_move(
        &mut self,
        _info: &PointerInfo,
        _event: &PointerEvent,
        _ctx: &mut DiagramContext,
    ) -> Transition {
        Transition::None
    }

    fn on_pointer_up(
        &mut self,
        _info: &PointerInfo,
        _event: &PointerEvent,
        _ctx: &mut DiagramContext,
    ) -> Transition {
        Transition::None
    }

    fn on_key_down(&mut self, _event: &KeyEvent, _ctx: &mut DiagramContext) -> Transition {
        Transition::None
    }

    fn on_key_up(&mut self, _event: &KeyEvent, _ctx: &mut DiagramContext) -> Transition {
        Transition::None
    }

    fn on_wheel(&mut self, _event: &WheelEvent, _ctx: &mut DiagramContext) -> Transition {
        Transition::None
    }

    fn on_double_click(
        &mut self,
        _info: &PointerInfo,
        _event: &PointerEvent,
        _ctx: &mut DiagramContext,
    ) -> Transition {
        Transition::None
    }

    /// The host window lost focus.
    fn on_blur(&mut self, _ctx: &mut DiagramContext) -> Transition {
        Transition::None
    }
}

// ============================================================================
// Mode Stack
// ============================================================================

pub struct ModeStack {
    base: Box<dyn Mode>,
    stack: Vec<Box<dyn Mode>>,
}

impl ModeStack {
    /// Install `base` at the bottom and enter it.
    pub(crate) fn new(mut base: Box<dyn Mode>, ctx: &mut DiagramContext) -> Self {
        debug!(mode = base.name(), "Base mode installed");
        base.on_enter(ctx);
        Self {
            base,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &dyn Mode {
        match self.stack.last() {
            Some(mode) => mode.as_ref(),
            None => self.base.as_ref(),
        }
    }

    fn current_mut(&mut self) -> &mut dyn Mode {
        match self.stack.last_mut() {
            Some(mode) => mode.as_mut(),
            None => self.base.as_mut(),
        }
    }

    /// Number of modes including the base.
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// Mode names, bottom first.
    pub fn names(&self) -> Vec<String> {
        std::iter::once(self.base.name())
            .chain(self.stack.iter().map(|m| m.name()))
            .map(str::to_string)
            .collect()
    }

    pub fn push(&mut self, mode: Box<dyn Mode>, ctx: &mut DiagramContext) {
        debug!(mode = mode.name(), depth = self.depth() + 1, "Mode pushed");
        self.stack.push(mode);
        self.current_mut().on_enter(ctx);
        ctx.request_render();
    }

    /// Pop the top mode. Returns `false` when only the base mode is left.
    pub fn pop(&mut self, ctx: &mut DiagramContext) -> bool {
        let Some(mut mode) = self.stack.pop() else {
            return false;
        };
        debug!(mode = mode.name(), depth = self.depth(), "Mode popped");
        mode.on_exit(ctx);
        ctx.request_render();
        true
    }

    pub fn apply(&mut self, transition: Transition, ctx: &mut DiagramContext) {
        match transition {
            Transition::None => {}
            Transition::Push(mode) => self.push(mode, ctx),
            Transition::Pop => {
                self.pop(ctx);
            }
        }
    }

    /// Hand an event to the current mode and apply its transition.
    pub fn dispatch<F>(&mut self, ctx: &mut DiagramContext, handler: F)
    where
        F: FnOnce(&mut dyn Mode, &mut DiagramContext) -> Transition,
    {
        let transition = handler(self.current_mut(), ctx);
        self.apply(transition, ctx);
    }

    /// Exit every mode, top first, including the base.
    pub(crate) fn unwind(&mut self, ctx: &mut DiagramContext) {
        while self.pop(ctx) {}
        self.base.on_exit(ctx);
    }
}

impl fmt::Debug for ModeStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

//! Input handling for the diagram.
//!
//! The host forwards raw events to the `Diagram`; the [`InputManager`]
//! filters them, enriches pointer events into a [`PointerInfo`] and hands them
//! to the mode on top of the stack.
//!
//! ## Modules
//!
//! - `coords` - conversions between client, canvas and world space
//! - `events` - raw pointer, key, wheel and touch events
//! - `pointer` - enriched pointer info passed to modes
//! - `manager` - drag tracking, filtering and dispatch

pub mod coords;
mod events;
mod manager;
mod pointer;

pub use events::{
    InputTarget, KeyCode, KeyEvent, Modifiers, PointerButton, PointerEvent, TouchEvent, WheelEvent,
};
pub use manager::InputManager;
pub use pointer::PointerInfo;

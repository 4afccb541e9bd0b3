//! Raw input events delivered by the host.
//!
//! Positions are client coordinates. Events serialize so input can be
//! scripted and replayed.

use crate::types::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    /// Ctrl or Cmd: extends a selection instead of replacing it, and turns
    /// wheel scrolling into zooming.
    #[inline]
    pub fn is_additive(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Where the event was aimed at in the host UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputTarget {
    #[default]
    Canvas,
    /// A focused text field; such events never reach the diagram
    TextInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    #[serde(default)]
    pub button: PointerButton,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub target: InputTarget,
}

impl PointerEvent {
    pub fn primary(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            target: InputTarget::Canvas,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_target(mut self, target: InputTarget) -> Self {
        self.target = target;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    Space,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub code: KeyCode,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub target: InputTarget,
    /// Auto-repeat while the key is held
    #[serde(default)]
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            target: InputTarget::Canvas,
            repeat: false,
        }
    }

    pub fn with_target(mut self, target: InputTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }
}

/// Wheel or trackpad scroll. `delta` is in screen pixels, positive y scrolls
/// down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub position: Point,
    pub delta: Point,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub target: InputTarget,
}

impl WheelEvent {
    pub fn new(position: Point, delta: Point) -> Self {
        Self {
            position,
            delta,
            modifiers: Modifiers::NONE,
            target: InputTarget::Canvas,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Positions of the active touch points, in client coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub touches: Vec<Point>,
}

impl TouchEvent {
    pub fn new(touches: Vec<Point>) -> Self {
        Self { touches }
    }
}

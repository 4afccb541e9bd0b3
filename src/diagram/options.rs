//! Construction options and host callbacks.

use crate::config::DiagramConfig;
use crate::modes::Mode;
use crate::selection::SelectionChangedCallback;
use crate::spatial_index::ElementHit;
use crate::stage::{ElementChange, ElementChangedCallback};
use crate::types::{ElementId, LayerId, Point};
use std::fmt;

/// One element's displacement in a finished move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovedElement {
    pub layer_id: LayerId,
    pub element_id: ElementId,
    pub from: Point,
    pub to: Point,
}

/// Reported when a move gesture ends with the pointer released.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveComplete {
    pub elements: Vec<MovedElement>,
    pub delta: Point,
}

pub type SelectionRequestCallback = Box<dyn FnMut(&[ElementId])>;
pub type MoveCompleteCallback = Box<dyn FnMut(&MoveComplete)>;
pub type BackgroundDoubleClickCallback = Box<dyn FnMut(Point)>;
pub type ElementDoubleClickCallback = Box<dyn FnMut(&ElementHit)>;

/// Callbacks fired by modes.
///
/// Selection requests let the host route the change through its own command
/// system (e.g. for undo). When no handler is registered for a request kind
/// the diagram applies it to its selection directly.
#[derive(Default)]
pub struct DiagramCallbacks {
    pub(crate) on_selection_set: Option<SelectionRequestCallback>,
    pub(crate) on_selection_add: Option<SelectionRequestCallback>,
    pub(crate) on_selection_remove: Option<SelectionRequestCallback>,
    pub(crate) on_move_complete: Option<MoveCompleteCallback>,
    pub(crate) on_background_double_click: Option<BackgroundDoubleClickCallback>,
    pub(crate) on_element_double_click: Option<ElementDoubleClickCallback>,
}

impl fmt::Debug for DiagramCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramCallbacks")
            .field("on_selection_set", &self.on_selection_set.is_some())
            .field("on_selection_add", &self.on_selection_add.is_some())
            .field("on_selection_remove", &self.on_selection_remove.is_some())
            .field("on_move_complete", &self.on_move_complete.is_some())
            .field("on_background_double_click", &self.on_background_double_click.is_some())
            .field("on_element_double_click", &self.on_element_double_click.is_some())
            .finish()
    }
}

/// Everything a diagram needs from its host besides the surface.
#[derive(Default)]
pub struct DiagramOptions {
    pub(crate) config: DiagramConfig,
    pub(crate) idle_mode: Option<Box<dyn Mode>>,
    pub(crate) frame_requester: Option<Box<dyn Fn()>>,
    pub(crate) callbacks: DiagramCallbacks,
    pub(crate) on_element_changed: Option<ElementChangedCallback>,
    pub(crate) on_selection_changed: Option<SelectionChangedCallback>,
}

impl DiagramOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: DiagramConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the built-in idle mode at the bottom of the mode stack.
    pub fn with_idle_mode(mut self, mode: impl Mode + 'static) -> Self {
        self.idle_mode = Some(Box::new(mode));
        self
    }

    /// Called once per scheduled frame; the host should then call
    /// `Diagram::render_frame` on its next display refresh.
    pub fn on_frame_requested(mut self, requester: impl Fn() + 'static) -> Self {
        self.frame_requester = Some(Box::new(requester));
        self
    }

    pub fn on_element_changed(mut self, callback: impl FnMut(&ElementChange) + 'static) -> Self {
        self.on_element_changed = Some(Box::new(callback));
        self
    }

    pub fn on_selection_changed(mut self, callback: impl FnMut(&[ElementId]) + 'static) -> Self {
        self.on_selection_changed = Some(Box::new(callback));
        self
    }

    pub fn on_selection_set_requested(mut self, callback: impl FnMut(&[ElementId]) + 'static) -> Self {
        self.callbacks.on_selection_set = Some(Box::new(callback));
        self
    }

    pub fn on_selection_add_requested(mut self, callback: impl FnMut(&[ElementId]) + 'static) -> Self {
        self.callbacks.on_selection_add = Some(Box::new(callback));
        self
    }

    pub fn on_selection_remove_requested(
        mut self,
        callback: impl FnMut(&[ElementId]) + 'static,
    ) -> Self {
        self.callbacks.on_selection_remove = Some(Box::new(callback));
        self
    }

    pub fn on_move_complete(mut self, callback: impl FnMut(&MoveComplete) + 'static) -> Self {
        self.callbacks.on_move_complete = Some(Box::new(callback));
        self
    }

    pub fn on_background_double_click(mut self, callback: impl FnMut(Point) + 'static) -> Self {
        self.callbacks.on_background_double_click = Some(Box::new(callback));
        self
    }

    pub fn on_element_double_click(mut self, callback: impl FnMut(&ElementHit) + 'static) -> Self {
        self.callbacks.on_element_double_click = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for DiagramOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramOptions")
            .field("config", &self.config)
            .field("idle_mode", &self.idle_mode.as_ref().map(|m| m.name().to_string()))
            .field("callbacks", &self.callbacks)
            .finish_non_exhaustive()
    }
}

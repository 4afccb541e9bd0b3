//! Elements: positioned, sized, renderable items that live in layers.
//!
//! Two kinds ship with the engine (a plain rectangle and the drag-select
//! overlay); hosts add their own through [`CustomElement`]. Position and size
//! are only writable from inside the crate so that every change goes through
//! the stage, which keeps the geometry index and render loop in step.

use crate::constants::{DRAG_RECT_DASH, ELEMENT_CORNER_RADIUS};
use crate::render::{DrawingContext, RenderContext};
use crate::types::{ElementId, Point, Rect, Size};
use std::any::Any;
use std::fmt;

/// Host-defined element behaviour.
pub trait CustomElement: fmt::Debug {
    /// Short tag naming the element kind, e.g. `"sticky-note"`.
    fn type_tag(&self) -> &str;

    /// Draw the element in world space. `bounds` is the element's current
    /// position and size.
    fn render(&self, bounds: Rect, dc: &mut dyn DrawingContext, ctx: &RenderContext<'_>);

    fn as_any(&self) -> &dyn Any;
}

#[derive(Debug)]
pub enum ElementKind {
    Rectangle,
    /// Dashed overlay drawn while rectangle-selecting
    DragRect,
    Custom(Box<dyn CustomElement>),
}

#[derive(Debug)]
pub struct Element {
    id: ElementId,
    bounds: Rect,
    selectable: bool,
    kind: ElementKind,
}

impl Element {
    pub fn rectangle(bounds: Rect) -> Self {
        Self {
            id: ElementId::new(),
            bounds,
            selectable: true,
            kind: ElementKind::Rectangle,
        }
    }

    /// Zero-sized, non-selectable overlay anchored at `start`.
    pub fn drag_rect(start: Point) -> Self {
        Self {
            id: ElementId::new(),
            bounds: Rect::new(start.x, start.y, 0.0, 0.0),
            selectable: false,
            kind: ElementKind::DragRect,
        }
    }

    pub fn custom(bounds: Rect, custom: impl CustomElement + 'static) -> Self {
        Self {
            id: ElementId::new(),
            bounds,
            selectable: true,
            kind: ElementKind::Custom(Box::new(custom)),
        }
    }

    pub fn with_id(mut self, id: ElementId) -> Self {
        self.id = id;
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn type_tag(&self) -> &str {
        match &self.kind {
            ElementKind::Rectangle => "rect",
            ElementKind::DragRect => "drag-rect",
            ElementKind::Custom(custom) => custom.type_tag(),
        }
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Downcast a custom element to its concrete host type.
    pub fn custom_as<T: 'static>(&self) -> Option<&T> {
        match &self.kind {
            ElementKind::Custom(custom) => custom.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn position(&self) -> Point {
        self.bounds.origin()
    }

    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub(crate) fn set_position(&mut self, x: f64, y: f64) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    pub(crate) fn set_size(&mut self, width: f64, height: f64) {
        self.bounds.width = width;
        self.bounds.height = height;
    }

    pub fn render(&self, dc: &mut dyn DrawingContext, ctx: &RenderContext<'_>) {
        match &self.kind {
            ElementKind::Rectangle => render_rectangle(self.bounds, dc, ctx),
            ElementKind::DragRect => render_drag_rect(self.bounds, dc, ctx),
            ElementKind::Custom(custom) => custom.render(self.bounds, dc, ctx),
        }
    }
}

fn render_rectangle(bounds: Rect, dc: &mut dyn DrawingContext, ctx: &RenderContext<'_>) {
    let theme = ctx.theme();
    dc.set_fill_color(theme.element_fill);
    dc.fill_round_rect(bounds, ELEMENT_CORNER_RADIUS);

    if ctx.is_selected() {
        dc.set_stroke_color(theme.selection);
        dc.set_line_width(2.0);
    } else {
        dc.set_stroke_color(theme.element_stroke);
        dc.set_line_width(1.0);
    }
    dc.stroke_round_rect(bounds, ELEMENT_CORNER_RADIUS);
}

fn render_drag_rect(bounds: Rect, dc: &mut dyn DrawingContext, ctx: &RenderContext<'_>) {
    let theme = ctx.theme();
    dc.set_fill_color(theme.drag_rect_fill);
    dc.fill_rect(bounds);

    dc.set_stroke_color(theme.drag_rect_stroke);
    dc.set_line_width(1.0);
    dc.set_line_dash(&DRAG_RECT_DASH);
    dc.stroke_rect(bounds);
    dc.set_line_dash(&[]);
}

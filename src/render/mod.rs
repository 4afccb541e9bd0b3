//! Rendering - the surface abstraction, frame scheduling and frame painting.
//!
//! The engine never talks to a windowing system directly. The host supplies a
//! [`RenderSurface`] that knows its on-screen origin, CSS size and device pixel
//! ratio, and hands out an immediate-mode [`DrawingContext`]. Everything the
//! engine draws goes through that trait.
//!
//! ## Modules
//!
//! - `color` - RGBA colours with hex (de)serialization
//! - `theme` - colour palette threaded into element rendering
//! - `scheduler` - coalescing render requests into display refreshes
//! - `canvas` - per-frame painting (grid, layers, status readout)
//! - `recording` - off-screen surface that records draw commands

mod canvas;
mod color;
mod recording;
mod scheduler;
mod theme;

pub use canvas::{FrameParams, paint_frame};
pub use color::Color;
pub use recording::{DrawCommand, RecordingSurface};
pub use scheduler::RenderScheduler;
pub use theme::Theme;

use crate::types::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// 2D affine transform in canvas `setTransform(a, b, c, d, e, f)` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Uniform scale followed by a translation in device pixels.
    pub fn scale_translate(scale: f64, tx: f64, ty: f64) -> Self {
        Self {
            a: scale,
            b: 0.0,
            c: 0.0,
            d: scale,
            e: tx,
            f: ty,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

/// Immediate-mode 2D drawing API consumed by the engine and by elements.
///
/// Mirrors the subset of an HTML canvas 2D context the engine needs. Rounded
/// rectangles fall back to plain rectangles for backends without them.
pub trait DrawingContext {
    fn set_transform(&mut self, transform: Transform);
    fn clear_rect(&mut self, rect: Rect);
    fn save(&mut self);
    fn restore(&mut self);
    fn clip_rect(&mut self, rect: Rect);

    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, segments: &[f64]);

    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
    fn stroke_line(&mut self, from: Point, to: Point);
    fn fill_text(&mut self, text: &str, at: Point, font_size: f64);

    fn fill_round_rect(&mut self, rect: Rect, _radius: f64) {
        self.fill_rect(rect);
    }

    fn stroke_round_rect(&mut self, rect: Rect, _radius: f64) {
        self.stroke_rect(rect);
    }
}

/// The drawing surface supplied by the host.
///
/// `resize` sets the CSS size; implementations size their backing store to
/// `size * device_pixel_ratio`. Resizes originating on the host side (window or
/// container changes) are reported through [`RenderSurface::take_resize`],
/// which the engine polls at the start of every frame.
pub trait RenderSurface {
    /// On-screen top-left corner in client coordinates.
    fn origin(&self) -> Point;

    /// CSS (logical) size.
    fn size(&self) -> Size;

    fn device_pixel_ratio(&self) -> f64;

    fn resize(&mut self, width: f64, height: f64);

    /// New size if the surface was resized since the last call.
    fn take_resize(&mut self) -> Option<Size>;

    /// `None` when the backend cannot provide a 2D context.
    fn drawing_context(&mut self) -> Option<&mut dyn DrawingContext>;
}

/// What an element may know about the frame it is drawn in.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    selected: bool,
    theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    pub fn new(selected: bool, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    #[inline]
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }
}

//! Off-screen surface that records draw calls instead of rasterizing them.
//!
//! Used by tests and by `diagram-replay`. Commands accumulate across frames
//! until taken.

use super::{Color, DrawingContext, RenderSurface, Transform};
use crate::types::{Point, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetTransform(Transform),
    ClearRect(Rect),
    Save,
    Restore,
    ClipRect(Rect),
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetLineWidth(f64),
    SetLineDash(Vec<f64>),
    FillRect(Rect),
    StrokeRect(Rect),
    FillRoundRect { rect: Rect, radius: f64 },
    StrokeRoundRect { rect: Rect, radius: f64 },
    Line { from: Point, to: Point },
    Text { text: String, at: Point, font_size: f64 },
}

#[derive(Debug, Default)]
struct Recorder {
    commands: Vec<DrawCommand>,
}

impl DrawingContext for Recorder {
    fn set_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::SetTransform(transform));
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClearRect(rect));
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::ClipRect(rect));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.commands.push(DrawCommand::SetLineDash(segments.to_vec()));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::StrokeRect(rect));
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn fill_text(&mut self, text: &str, at: Point, font_size: f64) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            font_size,
        });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f64) {
        self.commands.push(DrawCommand::FillRoundRect { rect, radius });
    }

    fn stroke_round_rect(&mut self, rect: Rect, radius: f64) {
        self.commands.push(DrawCommand::StrokeRoundRect { rect, radius });
    }
}

#[derive(Debug)]
pub struct RecordingSurface {
    origin: Point,
    size: Size,
    device_pixel_ratio: f64,
    recorder: Option<Recorder>,
    pending_resize: Option<Size>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            origin: Point::ZERO,
            size: Size::new(width, height),
            device_pixel_ratio: 1.0,
            recorder: Some(Recorder::default()),
            pending_resize: None,
        }
    }

    /// A surface that cannot provide a drawing context.
    pub fn detached(width: f64, height: f64) -> Self {
        Self {
            recorder: None,
            ..Self::new(width, height)
        }
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    pub fn with_device_pixel_ratio(mut self, dpr: f64) -> Self {
        self.device_pixel_ratio = dpr;
        self
    }

    /// Size of the backing store in device pixels.
    pub fn backing_size(&self) -> Size {
        Size::new(
            (self.size.width * self.device_pixel_ratio).round(),
            (self.size.height * self.device_pixel_ratio).round(),
        )
    }

    /// Resize as the host window would, reported on the next frame.
    pub fn host_resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
        self.pending_resize = Some(self.size);
    }

    /// Drop the drawing context, as a GPU context loss would.
    pub fn lose_context(&mut self) {
        self.recorder = None;
    }

    /// Hand out a fresh, empty drawing context again.
    pub fn restore_context(&mut self) {
        self.recorder.get_or_insert_with(Recorder::default);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        match &self.recorder {
            Some(recorder) => &recorder.commands,
            None => &[],
        }
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        self.recorder
            .as_mut()
            .map(|r| std::mem::take(&mut r.commands))
            .unwrap_or_default()
    }
}

impl RenderSurface for RecordingSurface {
    fn origin(&self) -> Point {
        self.origin
    }

    fn size(&self) -> Size {
        self.size
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    fn take_resize(&mut self) -> Option<Size> {
        self.pending_resize.take()
    }

    fn drawing_context(&mut self) -> Option<&mut dyn DrawingContext> {
        self.recorder.as_mut().map(|r| r as &mut dyn DrawingContext)
    }
}

//! Frame painting - background grid, layers and the status readout.
//!
//! Painting order per frame:
//! 1. Reset the transform and clear the whole backing store (device pixels)
//! 2. Scale by `dpr * zoom` and translate by `-offset * scale` into world space
//! 3. Clip to the visible world rectangle, draw background and grid
//! 4. Draw layers bottom-first, and within a layer elements first-to-last
//! 5. Draw the status readout in screen space
//!
//! This is the hot path. Enable profiling with `cargo build --features
//! profiling` to see timing.

use super::{DrawingContext, RenderContext, Theme, Transform};
use crate::constants::{STATUS_FONT_SIZE, STATUS_MARGIN, STATUS_PADDING};
use crate::diagram::Viewport;
use crate::profile_scope;
use crate::selection::SelectionManager;
use crate::stage::StageManager;
use crate::types::{Point, Rect};

/// Approximate advance of one status character, as a fraction of font size
const STATUS_CHAR_WIDTH: f64 = 0.6;

/// Everything one frame is painted from.
pub struct FrameParams<'a> {
    pub viewport: &'a Viewport,
    pub stage: &'a StageManager,
    pub selection: &'a SelectionManager,
    pub theme: &'a Theme,
    pub grid_spacing: f64,
    pub status: Option<&'a str>,
}

pub fn paint_frame(dc: &mut dyn DrawingContext, frame: &FrameParams<'_>) {
    profile_scope!("paint_frame");

    let viewport = frame.viewport;
    let dpr = viewport.device_pixel_ratio();
    let size = viewport.size();

    dc.set_transform(Transform::IDENTITY);
    dc.clear_rect(Rect::new(0.0, 0.0, size.width * dpr, size.height * dpr));

    let scale = dpr * viewport.zoom();
    let offset = viewport.offset();
    dc.set_transform(Transform::scale_translate(
        scale,
        -offset.x * scale,
        -offset.y * scale,
    ));

    dc.save();
    let visible = viewport.visible_world_rect();
    dc.clip_rect(visible);
    paint_background(dc, frame, visible);
    paint_elements(dc, frame);
    dc.restore();

    if let Some(text) = frame.status {
        paint_status(dc, text, frame.theme, dpr, size.height);
    }
}

fn paint_background(dc: &mut dyn DrawingContext, frame: &FrameParams<'_>, visible: Rect) {
    let theme = frame.theme;
    dc.set_fill_color(theme.background);
    dc.fill_rect(visible);

    let spacing = frame.grid_spacing;
    if !(spacing > 0.0) {
        return;
    }
    let extent = frame.viewport.extent();

    // Grid only covers the extent
    let left = visible.x.max(0.0);
    let top = visible.y.max(0.0);
    let right = visible.right().min(extent.width);
    let bottom = visible.bottom().min(extent.height);
    if right < left || bottom < top {
        return;
    }

    dc.set_stroke_color(theme.grid);
    dc.set_line_width(1.0 / frame.viewport.zoom());

    let mut x = (left / spacing).floor() * spacing;
    while x <= right {
        dc.stroke_line(Point::new(x, top), Point::new(x, bottom));
        x += spacing;
    }

    let mut y = (top / spacing).floor() * spacing;
    while y <= bottom {
        dc.stroke_line(Point::new(left, y), Point::new(right, y));
        y += spacing;
    }
}

fn paint_elements(dc: &mut dyn DrawingContext, frame: &FrameParams<'_>) {
    profile_scope!("paint_elements");

    for layer in frame.stage.layers() {
        for element in layer.elements() {
            let ctx = RenderContext::new(frame.selection.is_selected(element.id()), frame.theme);
            element.render(dc, &ctx);
        }
    }
}

/// Single-line readout anchored to the bottom-left corner, in CSS pixels.
fn paint_status(dc: &mut dyn DrawingContext, text: &str, theme: &Theme, dpr: f64, height: f64) {
    dc.set_transform(Transform::scale_translate(dpr, 0.0, 0.0));

    let box_width = text.chars().count() as f64 * STATUS_FONT_SIZE * STATUS_CHAR_WIDTH
        + STATUS_PADDING * 2.0;
    let box_height = STATUS_FONT_SIZE + STATUS_PADDING * 2.0;
    let origin = Point::new(STATUS_MARGIN, height - STATUS_MARGIN - box_height);

    dc.set_fill_color(theme.status_background);
    dc.fill_rect(Rect::new(origin.x, origin.y, box_width, box_height));

    dc.set_fill_color(theme.status_text);
    dc.fill_text(
        text,
        Point::new(origin.x + STATUS_PADDING, origin.y + STATUS_PADDING + STATUS_FONT_SIZE),
        STATUS_FONT_SIZE,
    );
}

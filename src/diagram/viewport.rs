//! Viewport state: zoom, world offset, scrollable extent and surface metrics.
//!
//! The offset is the world point shown at the surface's top-left corner. It
//! always stays inside `[0, max(0, extent - visible)]` per axis, the same range
//! a native scroll container would allow.

use crate::config::ZoomRange;
use crate::error::{DiagramError, DiagramResult};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::types::{Point, Rect, Size};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    offset: Point,
    extent: Size,
    size: Size,
    origin: Point,
    device_pixel_ratio: f64,
    recommended: ZoomRange,
}

impl Viewport {
    pub fn new(extent: Size, zoom: f64, recommended: ZoomRange) -> Self {
        Self {
            zoom,
            offset: Point::ZERO,
            extent,
            size: Size::default(),
            origin: Point::ZERO,
            device_pixel_ratio: 1.0,
            recommended,
        }
    }

    // ===== Accessors =====

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn extent(&self) -> Size {
        self.extent
    }

    /// CSS size of the surface.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    pub fn coordinate_context(&self) -> CoordinateContext {
        CoordinateContext::new(self.origin, self.offset, self.zoom)
    }

    /// World-space rectangle currently on screen.
    pub fn visible_world_rect(&self) -> Rect {
        Rect::new(
            self.offset.x,
            self.offset.y,
            self.size.width / self.zoom,
            self.size.height / self.zoom,
        )
    }

    pub fn client_to_world(&self, client: Point) -> Point {
        CoordinateConverter::client_to_world(client, &self.coordinate_context())
    }

    pub fn canvas_to_world(&self, canvas: Point) -> Point {
        CoordinateConverter::canvas_to_world(canvas, &self.coordinate_context())
    }

    // ===== Surface metrics =====

    pub(crate) fn set_surface_metrics(&mut self, origin: Point, size: Size, device_pixel_ratio: f64) {
        self.origin = origin;
        self.size = size;
        self.device_pixel_ratio = device_pixel_ratio;
        self.clamp_offset();
    }

    // ===== Mutation =====

    pub fn set_extent(&mut self, width: f64, height: f64) {
        self.extent = Size::new(width, height);
        self.clamp_offset();
    }

    fn validate_zoom(&self, zoom: f64) -> DiagramResult<()> {
        if !(zoom > 0.0 && zoom.is_finite()) {
            return Err(DiagramError::InvalidZoom { zoom });
        }
        if !self.recommended.contains(zoom) {
            warn!(
                zoom,
                min = self.recommended.min,
                max = self.recommended.max,
                "Zoom value outside recommended range"
            );
        }
        Ok(())
    }

    /// Change the zoom, keeping the offset (re-clamped to the new range).
    pub fn set_zoom(&mut self, zoom: f64) -> DiagramResult<()> {
        self.validate_zoom(zoom)?;
        self.zoom = zoom;
        self.clamp_offset();
        Ok(())
    }

    /// Change the zoom keeping the world point under `anchor_client` fixed on
    /// screen. Without an anchor the viewport centre is used.
    pub fn set_zoom_at_point(&mut self, zoom: f64, anchor_client: Option<Point>) -> DiagramResult<()> {
        self.validate_zoom(zoom)?;

        let anchor = match anchor_client {
            Some(client) => CoordinateConverter::client_to_canvas(client, &self.coordinate_context()),
            None => Point::new(self.size.width / 2.0, self.size.height / 2.0),
        };
        let anchor_world = self.canvas_to_world(anchor);

        self.zoom = zoom;
        let max = self.max_offset();
        self.offset = Point::new(
            (anchor_world.x - anchor.x / zoom).clamp(0.0, max.x),
            (anchor_world.y - anchor.y / zoom).clamp(0.0, max.y),
        );
        Ok(())
    }

    /// Set the world offset through the scroll position, which clamps it.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        let scroll = CoordinateConverter::offset_to_scroll(Point::new(x, y), self.zoom);
        let max_scroll = Point::new(
            (self.extent.width * self.zoom - self.size.width).max(0.0),
            (self.extent.height * self.zoom - self.size.height).max(0.0),
        );
        let scroll = Point::new(scroll.x.clamp(0.0, max_scroll.x), scroll.y.clamp(0.0, max_scroll.y));
        self.offset = CoordinateConverter::scroll_to_offset(scroll, self.zoom);
    }

    pub fn pan_by_world_offset(&mut self, dx: f64, dy: f64) {
        self.set_offset(self.offset.x + dx, self.offset.y + dy);
    }

    /// Pan by a screen-space distance; content follows the pointer.
    pub fn pan_by_canvas(&mut self, dx: f64, dy: f64) {
        let delta = CoordinateConverter::delta_screen_to_world(Point::new(dx, dy), self.zoom);
        self.set_offset(self.offset.x - delta.x, self.offset.y - delta.y);
    }

    fn max_offset(&self) -> Point {
        Point::new(
            (self.extent.width - self.size.width / self.zoom).max(0.0),
            (self.extent.height - self.size.height / self.zoom).max(0.0),
        )
    }

    fn clamp_offset(&mut self) {
        self.set_offset(self.offset.x, self.offset.y);
    }
}

//! Coordinate conversion between the three spaces the engine works in.
//!
//! - **client**: raw input positions, relative to the host window
//! - **canvas**: client minus the surface's on-screen origin
//! - **world**: element storage, `world = canvas / zoom + offset`
//!
//! The viewport offset is stored in world units; the scroll position a host
//! scroll container would show is `offset * zoom`. Every other module goes
//! through these functions instead of repeating the arithmetic.

use crate::types::Point;

/// Context needed for coordinate conversions
#[derive(Debug, Clone, Copy)]
pub struct CoordinateContext {
    pub surface_origin: Point,
    pub offset: Point,
    pub zoom: f64,
}

impl CoordinateContext {
    #[inline]
    pub fn new(surface_origin: Point, offset: Point, zoom: f64) -> Self {
        Self {
            surface_origin,
            offset,
            zoom,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    #[inline]
    pub fn client_to_canvas(client: Point, ctx: &CoordinateContext) -> Point {
        client - ctx.surface_origin
    }

    #[inline]
    pub fn canvas_to_client(canvas: Point, ctx: &CoordinateContext) -> Point {
        canvas + ctx.surface_origin
    }

    #[inline]
    pub fn canvas_to_world(canvas: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            canvas.x / ctx.zoom + ctx.offset.x,
            canvas.y / ctx.zoom + ctx.offset.y,
        )
    }

    #[inline]
    pub fn world_to_canvas(world: Point, ctx: &CoordinateContext) -> Point {
        Point::new(
            (world.x - ctx.offset.x) * ctx.zoom,
            (world.y - ctx.offset.y) * ctx.zoom,
        )
    }

    #[inline]
    pub fn client_to_world(client: Point, ctx: &CoordinateContext) -> Point {
        Self::canvas_to_world(Self::client_to_canvas(client, ctx), ctx)
    }

    /// World offset to scroll position
    #[inline]
    pub fn offset_to_scroll(offset: Point, zoom: f64) -> Point {
        Point::new(offset.x * zoom, offset.y * zoom)
    }

    /// Scroll position to world offset
    #[inline]
    pub fn scroll_to_offset(scroll: Point, zoom: f64) -> Point {
        Point::new(scroll.x / zoom, scroll.y / zoom)
    }

    /// Convert a delta from screen to world (for drag operations)
    #[inline]
    pub fn delta_screen_to_world(delta: Point, zoom: f64) -> Point {
        Point::new(delta.x / zoom, delta.y / zoom)
    }
}

//! The diagram façade.
//!
//! [`Diagram`] composes the viewport, stage, selection, mode stack and input
//! manager around a host-supplied [`RenderSurface`]. The host forwards input
//! through the `handle_*` methods and calls [`Diagram::render_frame`] on each
//! display refresh it was asked for.
//!
//! ## Modules
//!
//! - `viewport` - zoom, offset and extent with clamping
//! - `context` - state handed to modes
//! - `options` - construction options and host callbacks

mod context;
mod options;
mod viewport;

pub use context::DiagramContext;
pub use options::{DiagramCallbacks, DiagramOptions, MoveComplete, MovedElement};
pub use viewport::Viewport;

use crate::config::DiagramConfig;
use crate::error::{DiagramError, DiagramResult};
use crate::input::{InputManager, KeyEvent, PointerEvent, TouchEvent, WheelEvent};
use crate::modes::{IdleMode, Mode, ModeStack};
use crate::perf::FrameStats;
use crate::render::{FrameParams, RenderScheduler, RenderSurface, Theme, paint_frame};
use crate::selection::SelectionManager;
use crate::spatial_index::ElementHit;
use crate::stage::StageManager;
use crate::types::{CursorStyle, ElementId, Point, Rect, Size};
use tracing::{debug, info, warn};

pub struct Diagram<S: RenderSurface> {
    surface: S,
    ctx: DiagramContext,
    modes: ModeStack,
    input: InputManager,
    frame_stats: FrameStats,
}

impl<S: RenderSurface> Diagram<S> {
    /// Build a diagram on `surface`. Fails when the surface has no drawing
    /// context or the configured initial zoom is not finite and positive.
    pub fn new(mut surface: S, options: DiagramOptions) -> DiagramResult<Self> {
        if surface.drawing_context().is_none() {
            return Err(DiagramError::MissingDrawingContext);
        }
        let DiagramOptions {
            config,
            idle_mode,
            frame_requester,
            callbacks,
            on_element_changed,
            on_selection_changed,
        } = options;
        if !(config.initial_zoom > 0.0 && config.initial_zoom.is_finite()) {
            return Err(DiagramError::InvalidZoom {
                zoom: config.initial_zoom,
            });
        }

        let scheduler = RenderScheduler::new();
        if let Some(requester) = frame_requester {
            scheduler.set_frame_requester(requester);
        }

        let mut ctx = DiagramContext::new(config, scheduler, callbacks);
        if let Some(callback) = on_element_changed {
            ctx.stage.set_element_changed_callback(callback);
        }
        if let Some(callback) = on_selection_changed {
            ctx.selection.set_selection_changed_callback(callback);
        }
        ctx.viewport
            .set_surface_metrics(surface.origin(), surface.size(), surface.device_pixel_ratio());

        let base = idle_mode.unwrap_or_else(|| Box::new(IdleMode::new()));
        let modes = ModeStack::new(base, &mut ctx);

        let size = surface.size();
        info!(
            width = size.width,
            height = size.height,
            dpr = surface.device_pixel_ratio(),
            "Diagram attached"
        );
        ctx.request_render();

        Ok(Self {
            surface,
            ctx,
            modes,
            input: InputManager::new(),
            frame_stats: FrameStats::new(),
        })
    }

    /// Unwind every mode (calling `on_exit`) and hand the surface back.
    pub fn detach(mut self) -> S {
        self.modes.unwind(&mut self.ctx);
        info!(frames = self.frame_stats.total_frames(), "Diagram detached");
        self.surface
    }

    // ===== Viewport =====

    pub fn set_extent(&mut self, width: f64, height: f64) {
        self.ctx.set_extent(width, height);
    }

    pub fn extent(&self) -> Size {
        self.ctx.extent()
    }

    pub fn set_zoom(&mut self, zoom: f64) -> DiagramResult<()> {
        self.ctx.set_zoom(zoom)
    }

    /// Zoom keeping the world point under the client-space anchor fixed.
    /// Without an anchor the viewport centre is kept.
    pub fn set_zoom_at_point(&mut self, zoom: f64, anchor_client: Option<Point>) -> DiagramResult<()> {
        self.ctx.set_zoom_at_point(zoom, anchor_client)
    }

    pub fn zoom(&self) -> f64 {
        self.ctx.zoom()
    }

    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.ctx.set_offset(x, y);
    }

    pub fn pan_by_world_offset(&mut self, dx: f64, dy: f64) {
        self.ctx.pan_by_world_offset(dx, dy);
    }

    pub fn pan_by_canvas(&mut self, dx: f64, dy: f64) {
        self.ctx.pan_by_canvas(dx, dy);
    }

    pub fn offset(&self) -> Point {
        self.ctx.offset()
    }

    pub fn viewport_size(&self) -> Size {
        self.ctx.viewport_size()
    }

    pub fn viewport(&self) -> &Viewport {
        self.ctx.viewport()
    }

    /// Resize the surface from the engine side.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.resize(width, height);
        self.sync_surface_metrics();
        self.ctx.request_render();
    }

    fn sync_surface_metrics(&mut self) {
        self.ctx.viewport.set_surface_metrics(
            self.surface.origin(),
            self.surface.size(),
            self.surface.device_pixel_ratio(),
        );
    }

    // ===== Modes =====

    pub fn push_mode(&mut self, mode: impl Mode + 'static) {
        self.modes.push(Box::new(mode), &mut self.ctx);
    }

    /// Pop the top mode. Returns `false` when only the base mode is left.
    pub fn pop_mode(&mut self) -> bool {
        self.modes.pop(&mut self.ctx)
    }

    pub fn current_mode(&self) -> &dyn Mode {
        self.modes.current()
    }

    pub fn mode_stack(&self) -> &ModeStack {
        &self.modes
    }

    // ===== Stage & selection =====

    pub fn stage(&self) -> &StageManager {
        &self.ctx.stage
    }

    pub fn stage_mut(&mut self) -> &mut StageManager {
        &mut self.ctx.stage
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.ctx.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionManager {
        &mut self.ctx.selection
    }

    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.ctx.selection.set_selection(ids);
    }

    pub fn select_all(&mut self) {
        self.ctx.selection.select_all(&self.ctx.stage);
    }

    pub fn select_none(&mut self) {
        self.ctx.selection.select_none();
    }

    pub fn element_at_point(&mut self, world_x: f64, world_y: f64) -> Option<ElementHit> {
        self.ctx.stage.element_at_point(world_x, world_y)
    }

    pub fn elements_in_rect(&mut self, rect: Rect) -> Vec<ElementHit> {
        self.ctx.stage.elements_in_rect(rect)
    }

    pub fn content_bounds(&mut self) -> Option<Rect> {
        self.ctx.stage.content_bounds()
    }

    /// Direct access for host code that drives the diagram like a mode does.
    pub fn context_mut(&mut self) -> &mut DiagramContext {
        &mut self.ctx
    }

    pub fn context(&self) -> &DiagramContext {
        &self.ctx
    }

    // ===== Config & presentation =====

    pub fn config(&self) -> &DiagramConfig {
        self.ctx.config()
    }

    pub fn theme(&self) -> &Theme {
        self.ctx.theme()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.ctx.set_theme(theme);
    }

    /// Cursor the host should show over the surface.
    pub fn cursor(&self) -> CursorStyle {
        self.ctx.cursor()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // ===== Rendering =====

    pub fn request_render(&self) -> bool {
        self.ctx.request_render()
    }

    pub fn is_render_pending(&self) -> bool {
        self.ctx.scheduler.is_pending()
    }

    pub fn frame_stats(&self) -> &FrameStats {
        &self.frame_stats
    }

    /// Diagnostic readout drawn in the corner of every frame.
    pub fn status_text(&self) -> String {
        let viewport = self.ctx.viewport();
        let offset = viewport.offset();
        let extent = viewport.extent();
        format!(
            "mode: {} | offset: ({:.1}, {:.1}) | extent: {} × {} | zoom: {:.0}% | dpr: {:.2}x",
            self.modes.current().name(),
            offset.x,
            offset.y,
            extent.width,
            extent.height,
            viewport.zoom() * 100.0,
            viewport.device_pixel_ratio(),
        )
    }

    /// Draw a frame if one is pending. Returns whether anything was drawn.
    ///
    /// The pending flag is cleared before drawing, so changes made while the
    /// frame is drawn schedule the next one. A frame skipped for a missing
    /// drawing context is requested again.
    pub fn render_frame(&mut self) -> bool {
        if let Some(size) = self.surface.take_resize() {
            debug!(width = size.width, height = size.height, "Surface resized");
            self.ctx.request_render();
        }
        if !self.ctx.scheduler.begin_frame() {
            return false;
        }
        self.sync_surface_metrics();

        let status = self.ctx.config.show_status.then(|| self.status_text());

        let Some(dc) = self.surface.drawing_context() else {
            warn!("Drawing context lost, frame skipped");
            // Stays pending so the frame is drawn once the context is back
            self.ctx.request_render();
            return false;
        };
        self.frame_stats.begin_frame();
        let frame = FrameParams {
            viewport: &self.ctx.viewport,
            stage: &self.ctx.stage,
            selection: &self.ctx.selection,
            theme: &self.ctx.config.theme,
            grid_spacing: self.ctx.config.grid_spacing,
            status: status.as_deref(),
        };
        paint_frame(dc, &frame);

        self.frame_stats.end_frame();
        true
    }

    // ===== Input =====

    /// Returns whether the event reached a mode; hosts may use it to suppress
    /// the platform default.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> bool {
        self.input.pointer_down(event, &mut self.modes, &mut self.ctx)
    }

    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
        self.input.pointer_move(event, &mut self.modes, &mut self.ctx)
    }

    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> bool {
        self.input.pointer_up(event, &mut self.modes, &mut self.ctx)
    }

    pub fn handle_double_click(&mut self, event: &PointerEvent) -> bool {
        self.input.double_click(event, &mut self.modes, &mut self.ctx)
    }

    pub fn handle_key_down(&mut self, event: &KeyEvent) -> bool {
        self.input.key_down(event, &mut self.modes, &mut self.ctx)
    }

    pub fn handle_key_up(&mut self, event: &KeyEvent) -> bool {
        self.input.key_up(event, &mut self.modes, &mut self.ctx)
    }

    pub fn handle_wheel(&mut self, event: &WheelEvent) -> bool {
        self.input.wheel(event, &mut self.modes, &mut self.ctx)
    }

    pub fn handle_blur(&mut self) {
        self.input.blur(&mut self.modes, &mut self.ctx);
    }

    pub fn handle_touch_start(&mut self, event: &TouchEvent) -> bool {
        self.input.touch_start(event, &mut self.ctx)
    }

    pub fn handle_touch_move(&mut self, event: &TouchEvent) -> bool {
        self.input.touch_move(event, &mut self.ctx)
    }

    pub fn handle_touch_end(&mut self, event: &TouchEvent) {
        self.input.touch_end(event);
    }
}

impl<S: RenderSurface + std::fmt::Debug> std::fmt::Debug for Diagram<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagram")
            .field("surface", &self.surface)
            .field("modes", &self.modes)
            .field("zoom", &self.ctx.zoom())
            .field("offset", &self.ctx.offset())
            .finish_non_exhaustive()
    }
}

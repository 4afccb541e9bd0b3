//! State shared between the diagram façade and the active mode.
//!
//! Modes receive `&mut DiagramContext` with every event. Every method that
//! changes what is on screen requests a render, so modes never have to.

use super::options::{DiagramCallbacks, MoveComplete};
use super::viewport::Viewport;
use crate::config::DiagramConfig;
use crate::error::DiagramResult;
use crate::render::{RenderScheduler, Theme};
use crate::selection::SelectionManager;
use crate::spatial_index::ElementHit;
use crate::stage::StageManager;
use crate::types::{CursorStyle, ElementId, Point, Size};
use tracing::debug;

#[derive(Debug)]
pub struct DiagramContext {
    pub(crate) viewport: Viewport,
    pub(crate) stage: StageManager,
    pub(crate) selection: SelectionManager,
    pub(crate) scheduler: RenderScheduler,
    pub(crate) callbacks: DiagramCallbacks,
    pub(crate) config: DiagramConfig,
    cursor: CursorStyle,
}

impl DiagramContext {
    pub(crate) fn new(config: DiagramConfig, scheduler: RenderScheduler, callbacks: DiagramCallbacks) -> Self {
        let viewport = Viewport::new(config.extent, config.initial_zoom, config.zoom_range);
        Self {
            viewport,
            stage: StageManager::new(scheduler.clone()),
            selection: SelectionManager::new(scheduler.clone()),
            scheduler,
            callbacks,
            config,
            cursor: CursorStyle::Default,
        }
    }

    pub fn request_render(&self) -> bool {
        self.scheduler.request()
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.config.theme
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.config.theme = theme;
        self.request_render();
    }

    // ===== Viewport =====

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn offset(&self) -> Point {
        self.viewport.offset()
    }

    pub fn extent(&self) -> Size {
        self.viewport.extent()
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport.size()
    }

    pub fn set_extent(&mut self, width: f64, height: f64) {
        self.viewport.set_extent(width, height);
        self.request_render();
    }

    pub fn set_zoom(&mut self, zoom: f64) -> DiagramResult<()> {
        self.viewport.set_zoom(zoom)?;
        self.request_render();
        Ok(())
    }

    pub fn set_zoom_at_point(&mut self, zoom: f64, anchor_client: Option<Point>) -> DiagramResult<()> {
        self.viewport.set_zoom_at_point(zoom, anchor_client)?;
        self.request_render();
        Ok(())
    }

    /// Multiply the zoom by `factor`, clamped to the configured range.
    pub fn zoom_by_factor_at(&mut self, factor: f64, anchor_client: Point) -> DiagramResult<()> {
        let zoom = self.config.zoom_range.clamp(self.zoom() * factor);
        self.set_zoom_at_point(zoom, Some(anchor_client))
    }

    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.viewport.set_offset(x, y);
        self.request_render();
    }

    pub fn pan_by_world_offset(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by_world_offset(dx, dy);
        self.request_render();
    }

    pub fn pan_by_canvas(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by_canvas(dx, dy);
        self.request_render();
    }

    // ===== Stage & selection =====

    pub fn stage(&self) -> &StageManager {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut StageManager {
        &mut self.stage
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionManager {
        &mut self.selection
    }

    pub fn request_selection_set(&mut self, ids: &[ElementId]) {
        debug!(count = ids.len(), "Selection set requested");
        match self.callbacks.on_selection_set.as_mut() {
            Some(callback) => callback(ids),
            None => self.selection.set_selection(ids.iter().copied()),
        }
    }

    pub fn request_selection_add(&mut self, ids: &[ElementId]) {
        debug!(count = ids.len(), "Selection add requested");
        match self.callbacks.on_selection_add.as_mut() {
            Some(callback) => callback(ids),
            None => self.selection.add(ids.iter().copied()),
        }
    }

    pub fn request_selection_remove(&mut self, ids: &[ElementId]) {
        debug!(count = ids.len(), "Selection remove requested");
        match self.callbacks.on_selection_remove.as_mut() {
            Some(callback) => callback(ids),
            None => self.selection.remove(ids.iter().copied()),
        }
    }

    // ===== Host notifications =====

    pub fn fire_move_complete(&mut self, event: MoveComplete) {
        debug!(
            elements = event.elements.len(),
            dx = event.delta.x,
            dy = event.delta.y,
            "Move complete"
        );
        if let Some(callback) = self.callbacks.on_move_complete.as_mut() {
            callback(&event);
        }
    }

    pub fn fire_background_double_click(&mut self, world: Point) {
        if let Some(callback) = self.callbacks.on_background_double_click.as_mut() {
            callback(world);
        }
    }

    pub fn fire_element_double_click(&mut self, hit: &ElementHit) {
        if let Some(callback) = self.callbacks.on_element_double_click.as_mut() {
            callback(hit);
        }
    }

    // ===== Cursor =====

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: CursorStyle) {
        self.cursor = cursor;
    }
}

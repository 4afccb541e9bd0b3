//! Layers and the stage manager.
//!
//! The stage owns every layer and every element. Layers are kept in paint
//! order (index 0 is drawn first, i.e. at the bottom) and so are the elements
//! inside a layer. All writes go through [`StageManager`], which invalidates
//! the geometry index, requests a render and reports the change to the host.

use crate::element::Element;
use crate::render::RenderScheduler;
use crate::spatial_index::{ElementHit, GeometryIndex};
use crate::types::{ElementId, LayerId, Rect};
use tracing::{debug, trace, warn};

// ============================================================================
// Layer
// ============================================================================

/// A named, ordered group of elements.
#[derive(Debug)]
pub struct Layer {
    id: LayerId,
    name: String,
    elements: Vec<Element>,
}

impl Layer {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: LayerId::new(),
            name: name.into(),
            elements: Vec::new(),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elements in paint order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }
}

// ============================================================================
// Change notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementChangeKind {
    Added,
    Removed,
    Moved,
    Resized,
}

/// Reported to the host after every successful element write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementChange {
    pub kind: ElementChangeKind,
    pub layer_id: LayerId,
    pub element_id: ElementId,
    /// Bounds after the change (before it, for removals)
    pub bounds: Rect,
}

pub type ElementChangedCallback = Box<dyn FnMut(&ElementChange)>;

// ============================================================================
// Stage Manager
// ============================================================================

pub struct StageManager {
    layers: Vec<Layer>,
    index: GeometryIndex,
    scheduler: RenderScheduler,
    on_element_changed: Option<ElementChangedCallback>,
}

impl StageManager {
    pub fn new(scheduler: RenderScheduler) -> Self {
        Self {
            layers: Vec::new(),
            index: GeometryIndex::new(),
            scheduler,
            on_element_changed: None,
        }
    }

    pub fn set_element_changed_callback(&mut self, callback: impl FnMut(&ElementChange) + 'static) {
        self.on_element_changed = Some(Box::new(callback));
    }

    /// Every write lands here: the index goes stale and a frame is requested.
    fn touch(&mut self) {
        self.index.invalidate();
        self.scheduler.request();
    }

    fn notify(&mut self, kind: ElementChangeKind, layer_id: LayerId, element: &Element) {
        self.notify_bounds(kind, layer_id, element.id(), element.bounds());
    }

    fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    // ===== Layers =====

    /// Add a layer on top of all others.
    pub fn add_layer(&mut self, name: impl Into<String>) -> LayerId {
        let index = self.layers.len();
        self.insert_layer_at(index, name)
    }

    /// Insert a layer at `index` (clamped to the layer count). Index 0 is
    /// the bottom.
    pub fn insert_layer_at(&mut self, index: usize, name: impl Into<String>) -> LayerId {
        let layer = Layer::new(name);
        let id = layer.id;
        let index = index.min(self.layers.len());
        debug!(layer = %id, name = layer.name(), index, "Layer added");

        self.layers.insert(index, layer);
        self.touch();
        id
    }

    /// Remove a layer together with its elements.
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        let Some(pos) = self.layers.iter().position(|l| l.id == id) else {
            return false;
        };
        let layer = self.layers.remove(pos);
        debug!(layer = %id, name = layer.name(), elements = layer.len(), "Layer removed");

        self.touch();
        for element in &layer.elements {
            self.notify(ElementChangeKind::Removed, id, element);
        }
        true
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Layers in paint order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_index(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    // ===== Elements =====

    /// Append `element` to the top of a layer. Fails when the layer does not
    /// exist or the element id is already on the stage.
    pub fn add_element(&mut self, layer_id: LayerId, element: Element) -> bool {
        if self.find_element(element.id()).is_some() {
            warn!(element = %element.id(), "Element already on stage");
            return false;
        }
        let Some(layer) = self.layer_mut(layer_id) else {
            return false;
        };
        let (id, bounds) = (element.id(), element.bounds());
        layer.push(element);

        self.touch();
        self.notify_bounds(ElementChangeKind::Added, layer_id, id, bounds);
        true
    }

    pub fn remove_element(&mut self, layer_id: LayerId, element_id: ElementId) -> bool {
        self.take_element(layer_id, element_id).is_some()
    }

    /// Remove an element and hand it back, e.g. to re-add it to another layer.
    pub fn take_element(&mut self, layer_id: LayerId, element_id: ElementId) -> Option<Element> {
        let layer = self.layer_mut(layer_id)?;
        let pos = layer.elements.iter().position(|e| e.id() == element_id)?;
        let element = layer.elements.remove(pos);

        self.touch();
        self.notify(ElementChangeKind::Removed, layer_id, &element);
        Some(element)
    }

    pub fn element(&self, layer_id: LayerId, element_id: ElementId) -> Option<&Element> {
        self.layer(layer_id)?.element(element_id)
    }

    /// Resolve an element id across all layers.
    pub fn find_element(&self, element_id: ElementId) -> Option<(LayerId, &Element)> {
        self.layers
            .iter()
            .find_map(|l| l.element(element_id).map(|e| (l.id, e)))
    }

    /// Every element, bottom layer first, in paint order.
    pub fn all_elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.layers.iter().flat_map(|l| l.elements.iter())
    }

    pub fn element_count(&self) -> usize {
        self.layers.iter().map(Layer::len).sum()
    }

    // ===== Positioning =====

    pub fn set_element_position(
        &mut self,
        layer_id: LayerId,
        element_id: ElementId,
        x: f64,
        y: f64,
    ) -> bool {
        let Some(element) = self
            .layer_mut(layer_id)
            .and_then(|l| l.element_mut(element_id))
        else {
            return false;
        };
        element.set_position(x, y);
        trace!(element = %element_id, x, y, "Element moved");

        let (id, bounds) = (element.id(), element.bounds());
        self.touch();
        self.notify_bounds(ElementChangeKind::Moved, layer_id, id, bounds);
        true
    }

    pub fn set_element_size(
        &mut self,
        layer_id: LayerId,
        element_id: ElementId,
        width: f64,
        height: f64,
    ) -> bool {
        let Some(element) = self
            .layer_mut(layer_id)
            .and_then(|l| l.element_mut(element_id))
        else {
            return false;
        };
        element.set_size(width, height);

        let (id, bounds) = (element.id(), element.bounds());
        self.touch();
        self.notify_bounds(ElementChangeKind::Resized, layer_id, id, bounds);
        true
    }

    fn notify_bounds(
        &mut self,
        kind: ElementChangeKind,
        layer_id: LayerId,
        element_id: ElementId,
        bounds: Rect,
    ) {
        if let Some(callback) = self.on_element_changed.as_mut() {
            callback(&ElementChange {
                kind,
                layer_id,
                element_id,
                bounds,
            });
        }
    }

    // ===== Geometry queries =====

    /// Top-most element under a world-space point.
    pub fn element_at_point(&mut self, x: f64, y: f64) -> Option<ElementHit> {
        self.index.element_at_point(&self.layers, x, y)
    }

    /// Elements overlapping a world-space rectangle.
    pub fn elements_in_rect(&mut self, rect: Rect) -> Vec<ElementHit> {
        self.index.elements_in_rect(&self.layers, rect)
    }

    pub fn content_bounds(&mut self) -> Option<Rect> {
        self.index.content_bounds(&self.layers)
    }

    pub fn geometry_index(&self) -> &GeometryIndex {
        &self.index
    }
}

impl std::fmt::Debug for StageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageManager")
            .field("layers", &self.layers)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

//! Geometry index for hit testing and rectangle queries.
//!
//! An R-tree over the bounding boxes of every element in every layer. The
//! index is a cache: the stage marks it stale on every write and the next
//! query rebuilds it in one bulk load.
//!
//! Each entry carries its paint-reverse rank (0 = top-most: last layer, last
//! element). Point queries return the lowest-ranked hit so the element drawn
//! on top wins.

use crate::profile_scope;
use crate::stage::Layer;
use crate::types::{ElementId, LayerId, Rect};
use rstar::{AABB, RTree, RTreeObject};
use tracing::trace;

/// What a geometry query reports about an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementHit {
    pub element_id: ElementId,
    pub layer_id: LayerId,
    pub bounds: Rect,
    pub selectable: bool,
}

#[derive(Debug, Clone, Copy)]
struct SpatialEntry {
    rank: usize,
    hit: ElementHit,
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let b = self.hit.bounds.normalized();
        AABB::from_corners([b.x, b.y], [b.right(), b.bottom()])
    }
}

/// Lazily rebuilt spatial cache over the stage.
pub struct GeometryIndex {
    tree: RTree<SpatialEntry>,
    stale: bool,
    rebuilds: u64,
}

impl Default for GeometryIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            stale: true,
            rebuilds: 0,
        }
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// How many times the cache has been rebuilt.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    fn ensure_fresh(&mut self, layers: &[Layer]) {
        if !self.stale {
            return;
        }
        profile_scope!("geometry_rebuild");

        let entries: Vec<SpatialEntry> = layers
            .iter()
            .rev()
            .flat_map(|layer| {
                layer.elements().iter().rev().map(move |element| ElementHit {
                    element_id: element.id(),
                    layer_id: layer.id(),
                    bounds: element.bounds(),
                    selectable: element.is_selectable(),
                })
            })
            .enumerate()
            .map(|(rank, hit)| SpatialEntry { rank, hit })
            .collect();

        trace!(entries = entries.len(), "Geometry index rebuilt");
        self.tree = RTree::bulk_load(entries);
        self.stale = false;
        self.rebuilds += 1;
    }

    /// Top-most element whose bounds contain the point, edges inclusive.
    pub fn element_at_point(&mut self, layers: &[Layer], x: f64, y: f64) -> Option<ElementHit> {
        self.ensure_fresh(layers);

        let point_envelope = AABB::from_point([x, y]);
        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.hit.bounds.normalized().contains_point(x, y))
            .min_by_key(|entry| entry.rank)
            .map(|entry| entry.hit)
    }

    /// Every element overlapping `rect` (touching edges excluded), top-most
    /// first.
    pub fn elements_in_rect(&mut self, layers: &[Layer], rect: Rect) -> Vec<ElementHit> {
        self.ensure_fresh(layers);

        let rect = rect.normalized();
        let envelope = AABB::from_corners([rect.x, rect.y], [rect.right(), rect.bottom()]);
        let mut hits: Vec<&SpatialEntry> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.hit.bounds.normalized().intersects(&rect))
            .collect();
        hits.sort_by_key(|entry| entry.rank);
        hits.into_iter().map(|entry| entry.hit).collect()
    }

    /// Union of every element's bounds, `None` when the stage is empty.
    pub fn content_bounds(&mut self, layers: &[Layer]) -> Option<Rect> {
        self.ensure_fresh(layers);

        self.tree
            .iter()
            .map(|entry| entry.hit.bounds.normalized())
            .reduce(|acc, b| acc.union(&b))
    }
}

impl std::fmt::Debug for GeometryIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometryIndex")
            .field("entries", &self.tree.size())
            .field("stale", &self.stale)
            .field("rebuilds", &self.rebuilds)
            .finish()
    }
}

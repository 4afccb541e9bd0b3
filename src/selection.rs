//! The set of selected element ids.
//!
//! Selection is linked to the stage by id only. Ids of elements that were
//! removed stay selected until the host replaces the selection, and every
//! consumer must tolerate that.

use crate::render::RenderScheduler;
use crate::stage::StageManager;
use crate::types::ElementId;
use std::collections::HashSet;
use tracing::debug;

pub type SelectionChangedCallback = Box<dyn FnMut(&[ElementId])>;

pub struct SelectionManager {
    /// Selection order, without duplicates
    ids: Vec<ElementId>,
    lookup: HashSet<ElementId>,
    scheduler: RenderScheduler,
    on_changed: Option<SelectionChangedCallback>,
}

impl SelectionManager {
    pub fn new(scheduler: RenderScheduler) -> Self {
        Self {
            ids: Vec::new(),
            lookup: HashSet::new(),
            scheduler,
            on_changed: None,
        }
    }

    pub fn set_selection_changed_callback(&mut self, callback: impl FnMut(&[ElementId]) + 'static) {
        self.on_changed = Some(Box::new(callback));
    }

    #[inline]
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.lookup.contains(&id)
    }

    /// Snapshot of the current selection.
    pub fn selection(&self) -> Vec<ElementId> {
        self.ids.clone()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Replace the selection, request a render and notify the host.
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.ids.clear();
        self.lookup.clear();
        for id in ids {
            if self.lookup.insert(id) {
                self.ids.push(id);
            }
        }
        debug!(count = self.ids.len(), "Selection changed");

        self.scheduler.request();
        if let Some(callback) = self.on_changed.as_mut() {
            callback(&self.ids);
        }
    }

    pub fn add(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        let added: Vec<ElementId> = ids.into_iter().filter(|id| !self.is_selected(*id)).collect();
        if added.is_empty() {
            return;
        }
        let next: Vec<ElementId> = self.ids.iter().copied().chain(added).collect();
        self.set_selection(next);
    }

    pub fn remove(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        let removed: HashSet<ElementId> = ids.into_iter().filter(|id| self.is_selected(*id)).collect();
        if removed.is_empty() {
            return;
        }
        let next: Vec<ElementId> = self
            .ids
            .iter()
            .copied()
            .filter(|id| !removed.contains(id))
            .collect();
        self.set_selection(next);
    }

    /// Select every selectable element on the stage.
    pub fn select_all(&mut self, stage: &StageManager) {
        let ids: Vec<ElementId> = stage
            .all_elements()
            .filter(|e| e.is_selectable())
            .map(|e| e.id())
            .collect();
        self.set_selection(ids);
    }

    pub fn select_none(&mut self) {
        self.set_selection(std::iter::empty());
    }
}

impl std::fmt::Debug for SelectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionManager")
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

//! Bulk-action selection, kept consistent with the filtered view.

use std::collections::HashSet;

/// Set of record ids picked for a bulk operation. The portal prunes it on
/// every filter change so it stays a subset of the visible rows.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with exactly the visible ids.
    pub fn select_all(&mut self, visible: &[String]) {
        self.ids = visible.iter().cloned().collect();
    }

    /// Add the id if absent, remove it if present.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop members no longer present in the visible view.
    pub fn prune(&mut self, visible: &[String]) {
        let keep: HashSet<&str> = visible.iter().map(String::as_str).collect();
        self.ids.retain(|id| keep.contains(id.as_str()));
    }

    /// True iff the selection equals the visible view exactly and the view
    /// is non-empty (the header checkbox state).
    pub fn is_all_selected(&self, visible: &[String]) -> bool {
        if visible.is_empty() {
            return false;
        }
        let view: HashSet<&str> = visible.iter().map(String::as_str).collect();
        view.len() == self.ids.len() && view.iter().all(|id| self.ids.contains(*id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Snapshot of the selected ids, for issuing the bulk requests.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort();
        ids
    }
}

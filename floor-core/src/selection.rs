//! Selection - transient multi-select over one displayed pending list
//!
//! Lives exactly as long as the list it annotates. The select-all action is
//! a toggle: it selects everything unless the selection already equals the
//! whole list, in which case it clears. A strict subset does NOT toggle to
//! clear - only exact equality does.
//!
//! Selected ids can go stale when a ticket is completed from elsewhere;
//! callers must [`Selection::retain_valid`] against the latest pending view
//! before acting on the selection.

use std::collections::HashSet;

/// Set of ticket ids selected in one pending-ticket list
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Select every id in `current` - or clear, when the selection already
    /// equals `current` exactly
    pub fn select_all(&mut self, current: &[String]) {
        if self.is_all_selected(current) {
            self.ids.clear();
        } else {
            self.ids = current.iter().cloned().collect();
        }
    }

    /// True iff the selection set-equals `current` (size and content)
    pub fn is_all_selected(&self, current: &[String]) -> bool {
        if current.is_empty() || self.ids.len() != current.len() {
            return false;
        }
        current.iter().all(|id| self.ids.contains(id))
    }

    /// Drop ids no longer present in `current`; returns how many went stale
    pub fn retain_valid(&mut self, current: &[String]) -> usize {
        let before = self.ids.len();
        let current: HashSet<&str> = current.iter().map(String::as_str).collect();
        self.ids.retain(|id| current.contains(id.as_str()));
        before - self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Selected ids, in no particular order
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

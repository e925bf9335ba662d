//! The set of selected nodes.

use smallvec::SmallVec;
use uxb_core::{Board, NodeId};

/// Unordered set of node ids without duplicates. Iteration follows
/// insertion order so results are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: SmallVec<[NodeId; 8]>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns `true` if `id` was not selected before.
    pub fn insert(&mut self, id: NodeId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.ids.iter().position(|s| *s == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: NodeId) {
        if !self.remove(id) {
            self.ids.push(id);
        }
    }

    /// Collapse to exactly `id`.
    pub fn select_only(&mut self, id: NodeId) {
        self.ids.clear();
        self.ids.push(id);
    }

    pub fn extend(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        for id in ids {
            self.insert(id);
        }
    }

    /// Replace the whole set.
    pub fn set(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.ids.clear();
        self.extend(ids);
    }

    pub fn clear(&mut self) -> bool {
        let had = !self.ids.is_empty();
        self.ids.clear();
        had
    }

    /// Drop ids that no longer exist on `board`.
    pub fn prune(&mut self, board: &Board) {
        self.ids.retain(|id| board.contains(*id));
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<NodeId> {
        self.ids.to_vec()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

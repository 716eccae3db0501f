//! Slot arena backing the list shapes.
//!
//! Nodes never move once inserted: a [`NodeId`] stays valid until the slot
//! it names is removed, and vacated slots are recycled through a free
//! list. Relinking a list is therefore plain index reassignment; no node
//! storage is allocated or freed by the algorithms themselves.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A stable handle to a node slot within an [`Arena`].
///
/// `NodeId` doubles as the position type of the crate: iterator-style
/// ranges are expressed as half-open `[first, stop)` pairs of ids, where
/// the `stop` position is a sentinel node. Ids are only meaningful for
/// the list that produced them.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

static_assertions::assert_eq_size!(NodeId, u32);

impl NodeId {
    /// Creates an id from a raw slot index.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        let raw = u32::try_from(index).expect("arena slot index overflow");
        Self(raw)
    }

    /// Returns the raw slot index of this id.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "NodeId({})", self.0)
    }
}

/// Slot storage with free-list reuse.
///
/// The node type `N` is supplied by the list shape (ring nodes carry
/// `next`/`prev` links, forward nodes only `next`).
#[derive(Clone)]
pub(crate) struct Arena<N> {
    /// Slot storage; `None` marks a vacated slot awaiting reuse.
    slots: Vec<Option<N>>,
    /// Indices of vacated slots, reused before the storage grows.
    free: Vec<NodeId>,
}

impl<N> Arena<N> {
    /// Creates an empty arena.
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores a node and returns its id, reusing a vacated slot if one
    /// exists.
    pub(crate) fn insert(&mut self, node: N) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.slots[id.index()] = Some(node);
            id
        } else {
            let id = NodeId::from_index(self.slots.len());
            self.slots.push(Some(node));
            id
        }
    }

    /// Removes a node, returning it and marking the slot for reuse.
    ///
    /// Returns `None` if the slot is already vacant.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<N> {
        let node = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id);
        Some(node)
    }

    /// Returns the node stored at `id`, if the slot is live.
    pub(crate) fn get(&self, id: NodeId) -> Option<&N> {
        self.slots.get(id.index())?.as_ref()
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        self.slots[id.index()]
            .as_ref()
            .expect("node id names a vacated slot")
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        self.slots[id.index()]
            .as_mut()
            .expect("node id names a vacated slot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_returns_distinct_ids() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        assert_ne!(a, b);
        assert_eq!(arena.get(a), Some(&'a'));
        assert_eq!(arena.get(b), Some(&'b'));
    }

    #[test]
    fn remove_vacates_the_slot() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        assert_eq!(arena.remove(a), Some('a'));
        assert_eq!(arena.get(a), None);
        assert_eq!(arena.remove(a), None);
    }

    #[test]
    fn vacated_slots_are_reused() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        arena.insert('b');
        arena.remove(a);
        let c = arena.insert('c');
        assert_eq!(c, a);
        assert_eq!(arena.get(c), Some(&'c'));
    }

    #[test]
    fn node_ids_format_for_diagnostics() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        assert_eq!(a.to_string(), "NodeId(0)");
        assert_eq!(format!("{a:?}"), "NodeId(0)");
    }

    #[test]
    #[should_panic(expected = "vacated slot")]
    fn indexing_a_vacated_slot_panics() {
        let mut arena = Arena::new();
        let a = arena.insert('a');
        arena.remove(a);
        let _ = &arena[a];
    }
}

//! Circular doubly linked list with a single sentinel node.
//!
//! This module provides [`RingList`], a mutable sentinel-based ring whose
//! nodes live in an arena and link to each other by [`NodeId`] rather
//! than by pointer.
//!
//! # Overview
//!
//! The sentinel plays both boundary roles at once: its `next` is the
//! first real node and its `prev` is the last one (or itself when the
//! list is empty), so traversal and relinking never need a null check.
//! The sentinel is a dedicated node variant that never carries a value,
//! which makes it impossible for relinking code to treat it as a
//! removable data node.
//!
//! ```text
//! sentinel <-> 1 <-> 2 <-> 3 <-> (back to sentinel)
//! ```
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `new`        | O(1)       |
//! | `push_front` | O(1)       |
//! | `push_back`  | O(1)       |
//! | `pop_front`  | O(1)       |
//! | `pop_back`   | O(1)       |
//! | `remove`     | O(1)       |
//! | `len`        | O(1)       |
//! | `iter`       | O(n)       |
//!
//! # Examples
//!
//! ```rust
//! use relink::list::RingList;
//!
//! let mut list: RingList<i32> = (1..=3).collect();
//! list.push_front(0);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//!
//! // Backward iteration follows the `prev` links.
//! assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1, 0]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::arena::{Arena, NodeId};
use super::link::{PositionErase, Positions, RingLinks};

/// A node slot of the ring.
///
/// The sentinel variant is structurally distinct from data nodes: it has
/// links but no value, so it can never be returned by value accessors or
/// unlinked by [`RingList::remove`].
#[derive(Clone)]
enum RingNode<T> {
    /// The boundary node, both one-past-end and one-before-begin.
    Sentinel { next: NodeId, prev: NodeId },
    /// A data-bearing node.
    Data {
        value: T,
        next: NodeId,
        prev: NodeId,
    },
}

impl<T> RingNode<T> {
    const fn next(&self) -> NodeId {
        match self {
            Self::Sentinel { next, .. } | Self::Data { next, .. } => *next,
        }
    }

    const fn prev(&self) -> NodeId {
        match self {
            Self::Sentinel { prev, .. } | Self::Data { prev, .. } => *prev,
        }
    }

    fn set_next(&mut self, to: NodeId) {
        match self {
            Self::Sentinel { next, .. } | Self::Data { next, .. } => *next = to,
        }
    }

    fn set_prev(&mut self, to: NodeId) {
        match self {
            Self::Sentinel { prev, .. } | Self::Data { prev, .. } => *prev = to,
        }
    }

    const fn value(&self) -> Option<&T> {
        match self {
            Self::Sentinel { .. } => None,
            Self::Data { value, .. } => Some(value),
        }
    }

    fn into_value(self) -> Option<T> {
        match self {
            Self::Sentinel { .. } => None,
            Self::Data { value, .. } => Some(value),
        }
    }
}

/// A circular doubly linked list with a single sentinel node.
///
/// Every structural operation is index reassignment inside the arena;
/// no operation other than the push constructors allocates node storage,
/// and only the pop/remove operations free it.
///
/// The invariant maintained between calls is full link symmetry:
/// `next(prev(n)) == n` and `prev(next(n)) == n` for every live node,
/// sentinel included, with `len` equal to the number of data nodes on
/// the ring.
///
/// # Examples
///
/// ```rust
/// use relink::list::RingList;
///
/// let mut list = RingList::new();
/// list.push_back("a");
/// list.push_back("b");
/// assert_eq!(list.front(), Some(&"a"));
/// assert_eq!(list.back(), Some(&"b"));
/// assert_eq!(list.pop_front(), Some("a"));
/// ```
#[derive(Clone)]
pub struct RingList<T> {
    /// Node storage.
    arena: Arena<RingNode<T>>,
    /// Id of the sentinel slot.
    sentinel: NodeId,
    /// Number of data nodes, kept consistent with the ring itself.
    length: usize,
}

static_assertions::assert_impl_all!(RingList<i32>: Send, Sync);

impl<T> RingList<T> {
    /// Creates a new empty list.
    ///
    /// The sentinel is allocated immediately and linked to itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relink::list::RingList;
    ///
    /// let list: RingList<i32> = RingList::new();
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let placeholder = NodeId::from_index(0);
        let sentinel = arena.insert(RingNode::Sentinel {
            next: placeholder,
            prev: placeholder,
        });
        arena[sentinel].set_next(sentinel);
        arena[sentinel].set_prev(sentinel);
        Self {
            arena,
            sentinel,
            length: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a reference to the first element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relink::list::RingList;
    ///
    /// let list: RingList<i32> = (1..=3).collect();
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.arena[self.first_id()].value()
    }

    /// Returns a reference to the last element, or `None` if the list is
    /// empty.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.arena[self.last_id()].value()
    }

    /// Appends an element at the back, just before the sentinel.
    ///
    /// Returns the position of the new node, which stays valid until the
    /// node is removed.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn push_back(&mut self, value: T) -> NodeId {
        let last = self.last_id();
        self.link_between(value, last, self.sentinel)
    }

    /// Prepends an element at the front, just after the sentinel.
    ///
    /// Returns the position of the new node.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn push_front(&mut self, value: T) -> NodeId {
        let first = self.first_id();
        self.link_between(value, self.sentinel, first)
    }

    /// Removes and returns the first element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relink::list::RingList;
    ///
    /// let mut list: RingList<i32> = (1..=2).collect();
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink(self.first_id())
    }

    /// Removes and returns the last element, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.unlink(self.last_id())
    }

    /// Removes the element at `at` and returns the position of its
    /// successor.
    ///
    /// Removing the sentinel position is a no-op that returns the
    /// sentinel itself, so a full-range erase loop terminates cleanly.
    ///
    /// # Panics
    ///
    /// Panics if `at` names a node that has already been removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relink::list::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.push_back(1);
    /// let middle = list.push_back(2);
    /// list.push_back(3);
    ///
    /// list.remove(middle);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, at: NodeId) -> NodeId {
        if at == self.sentinel {
            return self.sentinel;
        }
        let next = self.arena[at].next();
        self.unlink(at);
        next
    }

    /// Removes every element, keeping only the sentinel.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns an iterator over the elements in list order.
    ///
    /// The iterator is double-ended: forward steps follow the `next`
    /// links, backward steps the `prev` links.
    #[must_use]
    pub fn iter(&self) -> RingIter<'_, T> {
        RingIter {
            list: self,
            front: self.first_id(),
            back: self.last_id(),
            remaining: self.length,
        }
    }

    /// Id of the first data node, or the sentinel when empty.
    fn first_id(&self) -> NodeId {
        self.arena[self.sentinel].next()
    }

    /// Id of the last data node, or the sentinel when empty.
    fn last_id(&self) -> NodeId {
        self.arena[self.sentinel].prev()
    }

    /// Allocates a data node and splices it between two linked nodes.
    fn link_between(&mut self, value: T, prev: NodeId, next: NodeId) -> NodeId {
        let id = self.arena.insert(RingNode::Data { value, next, prev });
        self.arena[prev].set_next(id);
        self.arena[next].set_prev(id);
        self.length += 1;
        id
    }

    /// Unlinks a node from the ring and frees its slot.
    ///
    /// Returns `None` without touching the ring when `at` is the
    /// sentinel, which is how the empty-list pops fall through.
    fn unlink(&mut self, at: NodeId) -> Option<T> {
        if at == self.sentinel {
            return None;
        }
        let node = self.arena.remove(at)?;
        let (prev, next) = (node.prev(), node.next());
        self.arena[prev].set_next(next);
        self.arena[next].set_prev(prev);
        self.length -= 1;
        node.into_value()
    }
}

impl<T> Default for RingList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RingList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingList<T> {}

impl<T> Extend<T> for RingList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for value in iterable {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for RingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        let mut list = Self::new();
        list.extend(iterable);
        list
    }
}

/// Linkage access for the rotation algorithms.
///
/// The setters reassign single links without rebalancing anything else;
/// callers are expected to restore full symmetry before returning, the
/// way [`crate::algorithm::rotate_left`] does.
impl<T> RingLinks for RingList<T> {
    fn sentinel(&self) -> NodeId {
        self.sentinel
    }

    fn len(&self) -> usize {
        self.length
    }

    fn next(&self, at: NodeId) -> NodeId {
        self.arena[at].next()
    }

    fn prev(&self, at: NodeId) -> NodeId {
        self.arena[at].prev()
    }

    fn set_next(&mut self, at: NodeId, to: NodeId) {
        self.arena[at].set_next(to);
    }

    fn set_prev(&mut self, at: NodeId, to: NodeId) {
        self.arena[at].set_prev(to);
    }
}

impl<T> Positions for RingList<T> {
    type Item = T;

    fn first(&self) -> NodeId {
        self.first_id()
    }

    fn stop(&self) -> NodeId {
        self.sentinel
    }

    fn advance(&self, at: NodeId) -> NodeId {
        self.arena[at].next()
    }

    fn get(&self, at: NodeId) -> Option<&T> {
        self.arena.get(at).and_then(RingNode::value)
    }
}

impl<T> PositionErase for RingList<T> {
    fn erase(&mut self, at: NodeId) -> NodeId {
        self.remove(at)
    }
}

/// Double-ended iterator over the elements of a [`RingList`].
pub struct RingIter<'a, T> {
    list: &'a RingList<T>,
    front: NodeId,
    back: NodeId,
    /// Elements not yet yielded from either end.
    remaining: usize,
}

impl<'a, T> Iterator for RingIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let at = self.front;
        self.front = self.list.arena[at].next();
        self.remaining -= 1;
        self.list.arena[at].value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for RingIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let at = self.back;
        self.back = self.list.arena[at].prev();
        self.remaining -= 1;
        self.list.arena[at].value()
    }
}

impl<T> ExactSizeIterator for RingIter<'_, T> {}

impl<T> FusedIterator for RingIter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingList<T> {
    type Item = &'a T;
    type IntoIter = RingIter<'a, T>;

    fn into_iter(self) -> RingIter<'a, T> {
        self.iter()
    }
}

/// Owning iterator over the elements of a [`RingList`].
pub struct RingIntoIter<T> {
    list: RingList<T>,
}

impl<T> Iterator for RingIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for RingIntoIter<T> {}

impl<T> FusedIterator for RingIntoIter<T> {}

impl<T> IntoIterator for RingList<T> {
    type Item = T;
    type IntoIter = RingIntoIter<T>;

    fn into_iter(self) -> RingIntoIter<T> {
        RingIntoIter { list: self }
    }
}

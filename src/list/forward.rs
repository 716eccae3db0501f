//! Singly linked list with head and end sentinels.
//!
//! This module provides [`ForwardList`], the forward-only counterpart of
//! [`RingList`](super::RingList). Nodes carry a single `next` link, so
//! any operation that needs a node's predecessor has to walk for it:
//! there is no back link to consult and none is invented here. That
//! limitation is intrinsic to the shape and is exactly what the
//! specialized algorithms
//! ([`rotate_left_forward`](crate::algorithm::rotate_left_forward),
//! [`erase_if_forward`](crate::algorithm::erase_if_forward)) are written
//! against.
//!
//! ```text
//! head sentinel -> 1 -> 2 -> 3 -> end sentinel
//! ```
//!
//! # Time Complexity
//!
//! | Operation     | Complexity |
//! |---------------|------------|
//! | `new`         | O(1)       |
//! | `push_front`  | O(1)       |
//! | `push_back`   | O(n)       |
//! | `pop_front`   | O(1)       |
//! | `insert_after`| O(1)       |
//! | `erase_after` | O(1)       |
//! | `len`         | O(1)       |
//!
//! `push_back` is O(n) because no tail position is cached.
//!
//! # Examples
//!
//! ```rust
//! use relink::list::ForwardList;
//!
//! let mut list: ForwardList<i32> = (1..=3).collect();
//! assert_eq!(list.front(), Some(&1));
//! assert_eq!(list.pop_front(), Some(1));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::arena::{Arena, NodeId};
use super::link::{ForwardLinks, Positions};

/// A node slot of the forward list.
///
/// Both sentinels use the same valueless variant; they are told apart by
/// the ids the list records for them.
#[derive(Clone)]
enum ForwardNode<T> {
    /// A boundary node (head or end sentinel).
    Sentinel { next: NodeId },
    /// A data-bearing node.
    Data { value: T, next: NodeId },
}

impl<T> ForwardNode<T> {
    const fn next(&self) -> NodeId {
        match self {
            Self::Sentinel { next } | Self::Data { next, .. } => *next,
        }
    }

    fn set_next(&mut self, to: NodeId) {
        match self {
            Self::Sentinel { next } | Self::Data { next, .. } => *next = to,
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

/// A singly linked list bounded by a head sentinel and an end sentinel.
///
/// The head sentinel precedes the first element and the end sentinel
/// follows the last one; the end sentinel's link loops onto itself so a
/// runaway walk stalls there instead of leaving the list. Removal goes
/// through [`ForwardList::erase_after`], the only unlink a singly linked
/// shape can offer in O(1).
///
/// # Examples
///
/// ```rust
/// use relink::list::ForwardList;
///
/// let mut list = ForwardList::new();
/// list.push_front("b");
/// list.push_front("a");
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Clone)]
pub struct ForwardList<T> {
    /// Node storage.
    arena: Arena<ForwardNode<T>>,
    /// Id of the head sentinel.
    head: NodeId,
    /// Id of the end sentinel.
    end: NodeId,
    /// Number of data nodes.
    length: usize,
}

static_assertions::assert_impl_all!(ForwardList<i32>: Send, Sync);

impl<T> ForwardList<T> {
    /// Creates a new empty list.
    ///
    /// Both sentinels are allocated immediately; the head links to the
    /// end, the end to itself.
    #[must_use]
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let placeholder = NodeId::from_index(0);
        let end = arena.insert(ForwardNode::Sentinel { next: placeholder });
        arena[end].set_next(end);
        let head = arena.insert(ForwardNode::Sentinel { next: end });
        Self {
            arena,
            head,
            end,
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
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.arena[self.first_id()].value()
    }

    /// Prepends an element at the front.
    ///
    /// Returns the position of the new node.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn push_front(&mut self, value: T) -> NodeId {
        self.insert_after(self.head, value)
    }

    /// Appends an element at the back.
    ///
    /// Returns the position of the new node.
    ///
    /// # Complexity
    ///
    /// O(n): the predecessor of the end sentinel has to be found by
    /// walking, since no tail position is cached.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let last = self.last_id();
        self.insert_after(last, value)
    }

    /// Inserts an element after the node at `at` and returns the new
    /// node's position.
    ///
    /// Inserting after the end sentinel is a no-op returning the end
    /// sentinel: nothing can follow the boundary.
    ///
    /// # Panics
    ///
    /// Panics if `at` names a node that has already been removed.
    pub fn insert_after(&mut self, at: NodeId, value: T) -> NodeId {
        if at == self.end {
            return self.end;
        }
        let next = self.arena[at].next();
        let id = self.arena.insert(ForwardNode::Data { value, next });
        self.arena[at].set_next(id);
        self.length += 1;
        id
    }

    /// Removes and returns the first element, or `None` if the list is
    /// empty.
    ///
    /// Any previously read first position is invalidated and must be
    /// re-read.
    pub fn pop_front(&mut self) -> Option<T> {
        self.erase_after(self.head)
    }

    /// Removes and returns the element following `at`, or `None` if only
    /// the end sentinel follows it.
    ///
    /// The position `at` itself stays valid, which is what lets a
    /// predecessor-tracking erase loop keep its cursor.
    ///
    /// # Panics
    ///
    /// Panics if `at` names a node that has already been removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use relink::list::ForwardList;
    ///
    /// let mut list = ForwardList::new();
    /// let first = list.push_front(1);
    /// list.insert_after(first, 2);
    ///
    /// assert_eq!(list.erase_after(first), Some(2));
    /// assert_eq!(list.erase_after(first), None);
    /// ```
    pub fn erase_after(&mut self, at: NodeId) -> Option<T> {
        let target = self.arena[at].next();
        if target == self.end {
            return None;
        }
        let node = self.arena.remove(target)?;
        self.arena[at].set_next(node.next());
        self.length -= 1;
        node.into_value()
    }

    /// Removes every element, keeping only the sentinels.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns an iterator over the elements in list order.
    #[must_use]
    pub fn iter(&self) -> ForwardIter<'_, T> {
        ForwardIter {
            list: self,
            at: self.first_id(),
            remaining: self.length,
        }
    }

    /// Id of the first data node, or the end sentinel when empty.
    fn first_id(&self) -> NodeId {
        self.arena[self.head].next()
    }

    /// Id of the last data node, or the head sentinel when empty.
    ///
    /// O(n) walk; the shape has no back links.
    fn last_id(&self) -> NodeId {
        let mut at = self.head;
        while self.arena[at].next() != self.end {
            at = self.arena[at].next();
        }
        at
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        // One walk to the tail, then O(1) per appended element.
        let mut last = self.last_id();
        for value in iterable {
            last = self.insert_after(last, value);
        }
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        let mut list = Self::new();
        list.extend(iterable);
        list
    }
}

/// Linkage access for the forward-list algorithms.
impl<T> ForwardLinks for ForwardList<T> {
    type Item = T;

    fn head(&self) -> NodeId {
        self.head
    }

    fn end(&self) -> NodeId {
        self.end
    }

    fn next(&self, at: NodeId) -> NodeId {
        self.arena[at].next()
    }

    fn set_next(&mut self, at: NodeId, to: NodeId) {
        self.arena[at].set_next(to);
    }

    fn get(&self, at: NodeId) -> Option<&T> {
        self.arena.get(at).and_then(ForwardNode::value)
    }

    fn pop_front(&mut self) -> Option<T> {
        Self::pop_front(self)
    }

    fn erase_after(&mut self, at: NodeId) -> Option<T> {
        Self::erase_after(self, at)
    }
}

impl<T> Positions for ForwardList<T> {
    type Item = T;

    fn first(&self) -> NodeId {
        self.first_id()
    }

    fn stop(&self) -> NodeId {
        self.end
    }

    fn advance(&self, at: NodeId) -> NodeId {
        self.arena[at].next()
    }

    fn get(&self, at: NodeId) -> Option<&T> {
        self.arena.get(at).and_then(ForwardNode::value)
    }
}

/// Forward iterator over the elements of a [`ForwardList`].
pub struct ForwardIter<'a, T> {
    list: &'a ForwardList<T>,
    at: NodeId,
    remaining: usize,
}

impl<'a, T> Iterator for ForwardIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let at = self.at;
        self.at = self.list.arena[at].next();
        self.remaining -= 1;
        self.list.arena[at].value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ForwardIter<'_, T> {}

impl<T> FusedIterator for ForwardIter<'_, T> {}

impl<'a, T> IntoIterator for &'a ForwardList<T> {
    type Item = &'a T;
    type IntoIter = ForwardIter<'a, T>;

    fn into_iter(self) -> ForwardIter<'a, T> {
        self.iter()
    }
}

/// Owning iterator over the elements of a [`ForwardList`].
pub struct ForwardIntoIter<T> {
    list: ForwardList<T>,
}

impl<T> Iterator for ForwardIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for ForwardIntoIter<T> {}

impl<T> FusedIterator for ForwardIntoIter<T> {}

impl<T> IntoIterator for ForwardList<T> {
    type Item = T;
    type IntoIter = ForwardIntoIter<T>;

    fn into_iter(self) -> ForwardIntoIter<T> {
        ForwardIntoIter { list: self }
    }
}

//! The node-access contract between list shapes and algorithms.
//!
//! The algorithms in [`crate::algorithm`] are free functions bounded on
//! these traits rather than on concrete containers. A shape only has to
//! expose its linkage (sentinel access, `next`/`prev` reassignment) and
//! its own removal primitives; node allocation and deallocation stay
//! inside the container.
//!
//! Two deliberate asymmetries mirror the shapes themselves:
//!
//! - [`RingLinks`] has `prev` access, [`ForwardLinks`] does not. Forward
//!   algorithms that need a predecessor must walk for it.
//! - [`PositionErase`] (erase at a position) is implemented by the ring
//!   shape only. A singly linked node cannot be unlinked given just its
//!   own position, so the forward shape offers `erase_after` through
//!   [`ForwardLinks`] instead, and bulk erasure is specialized
//!   accordingly.

use super::arena::NodeId;

/// Linkage of a circular doubly linked list with a single sentinel.
///
/// The sentinel is both one-past-end and one-before-begin: its `next` is
/// the first real node and its `prev` the last (or itself when the list
/// is empty). Implementations must keep `next`/`prev` symmetric —
/// `next(prev(n)) == n` and `prev(next(n)) == n` for every live node
/// including the sentinel — except transiently inside a relinking
/// sequence.
pub trait RingLinks {
    /// Returns the sentinel node.
    ///
    /// The sentinel is never a data node and is never relinked out of
    /// the ring.
    fn sentinel(&self) -> NodeId;

    /// Returns the number of data nodes in the ring.
    fn len(&self) -> usize;

    /// Returns `true` if the ring holds no data nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the node following `at`.
    fn next(&self, at: NodeId) -> NodeId;

    /// Returns the node preceding `at`.
    fn prev(&self, at: NodeId) -> NodeId;

    /// Reassigns the forward link of `at` to `to`.
    fn set_next(&mut self, at: NodeId, to: NodeId);

    /// Reassigns the back link of `at` to `to`.
    fn set_prev(&mut self, at: NodeId, to: NodeId);
}

/// Linkage of a singly linked list with head and end sentinels.
///
/// The head sentinel precedes the first real node and the end sentinel
/// follows the last one; neither carries a value. There are no back
/// links, which is why this trait also carries the container's own
/// removal entry points: unlinking a node requires its predecessor, and
/// only the container can free node storage.
pub trait ForwardLinks {
    /// The element type stored in the list.
    type Item;

    /// Returns the head sentinel.
    fn head(&self) -> NodeId;

    /// Returns the end sentinel.
    fn end(&self) -> NodeId;

    /// Returns the node following `at`.
    fn next(&self, at: NodeId) -> NodeId;

    /// Reassigns the forward link of `at` to `to`.
    fn set_next(&mut self, at: NodeId, to: NodeId);

    /// Returns the value stored at `at`, or `None` for sentinels.
    fn get(&self, at: NodeId) -> Option<&Self::Item>;

    /// Removes and returns the first element, or `None` if the list is
    /// empty.
    ///
    /// Any previously observed first position is invalidated.
    fn pop_front(&mut self) -> Option<Self::Item>;

    /// Removes and returns the element following `at`, or `None` if no
    /// data node follows it.
    ///
    /// The position `at` itself stays valid.
    fn erase_after(&mut self, at: NodeId) -> Option<Self::Item>;
}

/// Read-only position traversal over a half-open range.
///
/// Positions are [`NodeId`]s; the range of a whole container is
/// `[first, stop)`, with `stop` naming the terminating sentinel. Both
/// list shapes implement this, so search runs over either.
pub trait Positions {
    /// The element type stored in the container.
    type Item;

    /// Returns the first position, equal to [`Positions::stop`] when the
    /// container is empty.
    fn first(&self) -> NodeId;

    /// Returns the one-past-last position.
    fn stop(&self) -> NodeId;

    /// Returns the position following `at`.
    fn advance(&self, at: NodeId) -> NodeId;

    /// Returns the value stored at `at`, or `None` for sentinels.
    fn get(&self, at: NodeId) -> Option<&Self::Item>;
}

/// Position traversal with single-position erasure.
///
/// `erase` follows the usual container contract: it removes exactly the
/// element at the given position and returns the position of its
/// successor; only the erased position is invalidated.
pub trait PositionErase: Positions {
    /// Removes the element at `at` and returns the position after it.
    ///
    /// Erasing a sentinel position is a no-op that returns the stop
    /// position.
    fn erase(&mut self, at: NodeId) -> NodeId;
}

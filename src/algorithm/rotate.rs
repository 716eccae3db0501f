//! List rotation by link surgery.
//!
//! Rotation relocates one boundary node to the opposite end of the list
//! and leaves every other node untouched; element order is preserved
//! cyclically. On the ring shape this is a constant number of link
//! reassignments. On the forward shape it costs one walk to the tail,
//! because nothing short of a walk can find the last node of a singly
//! linked list.

use crate::list::{ForwardLinks, RingLinks};

/// Rotates a ring one position to the left.
///
/// The first real node is detached and reinserted immediately before the
/// sentinel, becoming the new last node:
///
/// ```text
/// 1 <-> 2 <-> 3 <-> 4 <-> 5   becomes   2 <-> 3 <-> 4 <-> 5 <-> 1
/// ```
///
/// Lists of size 0 or 1 are left untouched; the guard is explicit so no
/// link of a degenerate ring is ever reassigned.
///
/// # Complexity
///
/// O(1)
///
/// # Examples
///
/// ```rust
/// use relink::algorithm::rotate_left;
/// use relink::list::RingList;
///
/// let mut list: RingList<i32> = (1..=5).collect();
/// rotate_left(&mut list);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5, 1]);
/// ```
pub fn rotate_left<L: RingLinks>(list: &mut L) {
    if list.len() <= 1 {
        return;
    }
    let end = list.sentinel();
    let first = list.next(end);
    let second = list.next(first);

    // Detach the first node, then splice it in between the old last
    // node and the sentinel.
    list.set_next(end, second);
    list.set_prev(second, end);
    let last = list.prev(end);
    list.set_next(last, first);
    list.set_prev(first, last);
    list.set_prev(end, first);
    list.set_next(first, end);
}

/// Rotates a ring one position to the right.
///
/// The mirror of [`rotate_left`]: the last real node is detached and
/// reinserted immediately after the sentinel, becoming the new first
/// node:
///
/// ```text
/// 1 <-> 2 <-> 3 <-> 4 <-> 5   becomes   5 <-> 1 <-> 2 <-> 3 <-> 4
/// ```
///
/// Lists of size 0 or 1 are left untouched.
///
/// # Complexity
///
/// O(1)
///
/// # Examples
///
/// ```rust
/// use relink::algorithm::rotate_right;
/// use relink::list::RingList;
///
/// let mut list: RingList<i32> = (1..=5).collect();
/// rotate_right(&mut list);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 1, 2, 3, 4]);
/// ```
pub fn rotate_right<L: RingLinks>(list: &mut L) {
    if list.len() <= 1 {
        return;
    }
    let end = list.sentinel();
    let last = list.prev(end);
    let before_last = list.prev(last);

    // Detach the last node, then splice it in between the sentinel and
    // the old first node.
    list.set_prev(end, before_last);
    list.set_next(before_last, end);
    let first = list.next(end);
    list.set_prev(first, last);
    list.set_next(last, first);
    list.set_prev(last, end);
    list.set_next(end, last);
}

/// Rotates a ring `n` positions to the left.
///
/// Repeats the O(1) single step `n` times with no reduction of `n`
/// modulo the list length, so the cost is O(n) regardless of how small
/// the list is. Rotating by the list length (or zero) restores the
/// original order.
///
/// # Examples
///
/// ```rust
/// use relink::algorithm::rotate_left_by;
/// use relink::list::RingList;
///
/// let mut list: RingList<i32> = (1..=5).collect();
/// rotate_left_by(&mut list, 2);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5, 1, 2]);
/// ```
pub fn rotate_left_by<L: RingLinks>(list: &mut L, n: usize) {
    for _ in 0..n {
        rotate_left(list);
    }
}

/// Rotates a ring `n` positions to the right.
///
/// Repeats the O(1) single step `n` times; see [`rotate_left_by`] for
/// the cost caveat.
///
/// # Examples
///
/// ```rust
/// use relink::algorithm::rotate_right_by;
/// use relink::list::RingList;
///
/// let mut list: RingList<i32> = (1..=5).collect();
/// rotate_right_by(&mut list, 2);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 5, 1, 2, 3]);
/// ```
pub fn rotate_right_by<L: RingLinks>(list: &mut L, n: usize) {
    for _ in 0..n {
        rotate_right(list);
    }
}

/// Rotates a singly linked list one position to the left.
///
/// The first real node moves to just before the end sentinel:
///
/// ```text
/// head -> 1 -> 2 -> 3 -> end   becomes   head -> 2 -> 3 -> 1 -> end
/// ```
///
/// One forward walk finds the last real node (the node whose `next` is
/// the end sentinel); three link reassignments then do the move. Lists
/// with fewer than two elements are left untouched — the guard is
/// explicit, so the walk never starts from a sentinel.
///
/// # Complexity
///
/// O(n): the tail has to be found by walking, since the shape caches no
/// tail position.
///
/// # Examples
///
/// ```rust
/// use relink::algorithm::rotate_left_forward;
/// use relink::list::ForwardList;
///
/// let mut list: ForwardList<i32> = (1..=3).collect();
/// rotate_left_forward(&mut list);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3, 1]);
/// ```
pub fn rotate_left_forward<L: ForwardLinks>(list: &mut L) {
    let head = list.head();
    let end = list.end();
    let first = list.next(head);
    if first == end || list.next(first) == end {
        return;
    }

    let mut last = list.next(first);
    while list.next(last) != end {
        last = list.next(last);
    }

    let second = list.next(first);
    list.set_next(head, second);
    list.set_next(last, first);
    list.set_next(first, end);
}

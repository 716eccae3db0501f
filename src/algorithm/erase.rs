//! Predicate-driven bulk erasure.
//!
//! Both functions remove every element matching the predicate in a
//! single forward pass, preserving the relative order of the survivors,
//! and both are idempotent: a second run over the result removes
//! nothing. They differ only in how a node is unlinked. The generic form
//! leans on the container's own `erase(position) -> successor`
//! primitive; the forward-list form cannot, because a singly linked node
//! is unreachable for unlinking without its predecessor, so it tracks a
//! predecessor cursor and erases behind it.

use crate::list::{ForwardLinks, PositionErase};

/// Removes every element satisfying `pred` from a container with
/// position-based erasure.
///
/// Elements failing the predicate are skipped; elements passing it are
/// removed by replacing the cursor with the container's `erase` result,
/// which is the position of the successor. Survivor order is unchanged.
///
/// # Complexity
///
/// O(n) predicate evaluations, one erase per match.
///
/// # Examples
///
/// ```rust
/// use relink::algorithm::erase_if;
/// use relink::list::RingList;
///
/// let mut list: RingList<i32> = (1..=5).collect();
/// erase_if(&mut list, |element| element % 2 == 0);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
pub fn erase_if<C, P>(list: &mut C, mut pred: P)
where
    C: PositionErase + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut at = list.first();
    while at != list.stop() {
        at = if list.get(at).is_some_and(&mut pred) {
            list.erase(at)
        } else {
            list.advance(at)
        };
    }
}

/// Removes every element satisfying `pred` from a singly linked list.
///
/// Two phases, both applying the predicate to the element's value:
///
/// 1. Leading matches are drained by repeated `pop_front`, re-reading
///    the first position after every pop since popping invalidates it.
///    The drain stops as soon as the list is empty or its first element
///    survives.
/// 2. The rest of the list is walked as (predecessor, current) pairs:
///    a matching current is removed with `erase_after(predecessor)`,
///    which keeps the predecessor cursor valid and exposes the next
///    candidate; otherwise both cursors advance by one.
///
/// # Examples
///
/// ```rust
/// use relink::algorithm::erase_if_forward;
/// use relink::list::ForwardList;
///
/// let mut list: ForwardList<i32> = (1..=5).collect();
/// erase_if_forward(&mut list, |element| element % 2 == 0);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
/// ```
pub fn erase_if_forward<L, P>(list: &mut L, mut pred: P)
where
    L: ForwardLinks + ?Sized,
    P: FnMut(&L::Item) -> bool,
{
    let end = list.end();
    loop {
        let first = list.next(list.head());
        if first == end || !list.get(first).is_some_and(&mut pred) {
            break;
        }
        list.pop_front();
    }

    // The first element (if any) is now a survivor, so it can anchor
    // the predecessor cursor.
    let mut before = list.next(list.head());
    if before == end {
        return;
    }
    let mut at = list.next(before);
    while at != end {
        if list.get(at).is_some_and(&mut pred) {
            list.erase_after(before);
            at = list.next(before);
        } else {
            before = at;
            at = list.next(at);
        }
    }
}

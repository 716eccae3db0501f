//! First-match search over a position range.

use crate::list::{NodeId, Positions};

/// Returns the first position in `[from, to)` whose element matches
/// `key` under `matches`, or `to` if none does.
///
/// The scan is read-only and short-circuits on the first hit. Absence of
/// a match is not an error: it is reported as the `to` position itself,
/// following the half-open-range convention used throughout the crate.
///
/// # Complexity
///
/// O(range length) worst case.
///
/// # Examples
///
/// ```rust
/// use relink::algorithm::find_if;
/// use relink::list::{Positions, RingList};
///
/// let list: RingList<i32> = (1..=5).collect();
/// let at = find_if(&list, list.first(), list.stop(), &2, |element, key| {
///     element % 10 == *key
/// });
/// assert_eq!(list.get(at), Some(&2));
/// ```
pub fn find_if<C, K, P>(list: &C, from: NodeId, to: NodeId, key: &K, mut matches: P) -> NodeId
where
    C: Positions + ?Sized,
    P: FnMut(&C::Item, &K) -> bool,
{
    let mut at = from;
    while at != to {
        if list.get(at).is_some_and(|element| matches(element, key)) {
            return at;
        }
        at = list.advance(at);
    }
    at
}

/// Returns the first position in `[from, to)` whose element equals
/// `key`, or `to` if none does.
///
/// The defaulted-predicate form of [`find_if`], using `PartialEq` as the
/// equivalence.
///
/// # Examples
///
/// ```rust
/// use relink::algorithm::find;
/// use relink::list::{Positions, RingList};
///
/// let list: RingList<char> = "abcd".chars().collect();
/// let hit = find(&list, list.first(), list.stop(), &'c');
/// assert_eq!(list.get(hit), Some(&'c'));
///
/// let miss = find(&list, list.first(), list.stop(), &'z');
/// assert_eq!(miss, list.stop());
/// ```
pub fn find<C, K>(list: &C, from: NodeId, to: NodeId, key: &K) -> NodeId
where
    C: Positions + ?Sized,
    C::Item: PartialEq<K>,
{
    find_if(list, from, to, key, |element, key| element == key)
}

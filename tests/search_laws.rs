//! Property-based tests for first-match search.
//!
//! `find` is modeled against `Iterator::position` over the same element
//! order: both must locate the same element, and a miss must come back
//! as the stop position of the range.

use proptest::prelude::*;
use relink::algorithm::{find, find_if};
use relink::list::{ForwardList, Positions, RingList};

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-10..10_i32, 0..20)
}

fn ring_of(values: &[i32]) -> RingList<i32> {
    values.iter().copied().collect()
}

proptest! {
    #[test]
    fn prop_find_agrees_with_position_model(values in elements(), key in -10..10_i32) {
        let list = ring_of(&values);
        let at = find(&list, list.first(), list.stop(), &key);

        match values.iter().position(|element| *element == key) {
            Some(_) => prop_assert_eq!(list.get(at), Some(&key)),
            None => prop_assert_eq!(at, list.stop()),
        }
    }

    #[test]
    fn prop_find_returns_the_first_match(values in elements(), key in -10..10_i32) {
        let list = ring_of(&values);
        let at = find(&list, list.first(), list.stop(), &key);

        // No position before the hit may hold the key.
        let mut cursor = list.first();
        while cursor != at {
            prop_assert_ne!(list.get(cursor), Some(&key));
            cursor = list.advance(cursor);
        }
    }

    #[test]
    fn prop_find_is_read_only(values in elements(), key in -10..10_i32) {
        let list = ring_of(&values);
        let before: Vec<i32> = list.iter().copied().collect();
        let _ = find(&list, list.first(), list.stop(), &key);
        let after: Vec<i32> = list.iter().copied().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_find_if_with_equality_matches_find(values in elements(), key in -10..10_i32) {
        let list = ring_of(&values);
        let by_default = find(&list, list.first(), list.stop(), &key);
        let by_predicate = find_if(&list, list.first(), list.stop(), &key, |element, key| {
            element == key
        });
        prop_assert_eq!(by_default, by_predicate);
    }

    #[test]
    fn prop_find_agrees_across_shapes(values in elements(), key in -10..10_i32) {
        let as_ring = ring_of(&values);
        let as_forward: ForwardList<i32> = values.iter().copied().collect();

        let ring_hit = find(&as_ring, as_ring.first(), as_ring.stop(), &key);
        let forward_hit = find(&as_forward, as_forward.first(), as_forward.stop(), &key);
        prop_assert_eq!(as_ring.get(ring_hit), as_forward.get(forward_hit));
    }
}

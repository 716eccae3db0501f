//! Property-based tests for predicate-driven erasure.
//!
//! Bulk erasure is modeled against `Vec::retain` with the negated
//! predicate: survivors and their relative order must match exactly, on
//! both list shapes, and a second pass must remove nothing.

use proptest::prelude::*;
use relink::algorithm::{erase_if, erase_if_forward};
use relink::list::{ForwardList, RingList};

// =============================================================================
// Strategies
// =============================================================================

/// Element vectors drawn from a narrow value range so predicates hit
/// often enough to exercise runs of adjacent matches.
fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-10..10_i32, 0..20)
}

/// Divisor defining the predicate `|e| e % divisor == 0`.
fn divisors() -> impl Strategy<Value = i32> {
    1..5_i32
}

fn ring_of(values: &[i32]) -> RingList<i32> {
    values.iter().copied().collect()
}

fn forward_of(values: &[i32]) -> ForwardList<i32> {
    values.iter().copied().collect()
}

fn ring_vec(list: &RingList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

fn forward_vec(list: &ForwardList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

proptest! {
    // =========================================================================
    // Agreement with the Vec::retain model
    // =========================================================================

    #[test]
    fn prop_erase_if_matches_retain(values in elements(), divisor in divisors()) {
        let mut list = ring_of(&values);
        erase_if(&mut list, |element| element % divisor == 0);

        let mut model = values;
        model.retain(|element| element % divisor != 0);
        prop_assert_eq!(ring_vec(&list), model);
    }

    #[test]
    fn prop_erase_if_forward_matches_retain(values in elements(), divisor in divisors()) {
        let mut list = forward_of(&values);
        erase_if_forward(&mut list, |element| element % divisor == 0);

        let mut model = values;
        model.retain(|element| element % divisor != 0);
        prop_assert_eq!(forward_vec(&list), model);
    }

    #[test]
    fn prop_erase_overloads_agree(values in elements(), divisor in divisors()) {
        let mut as_ring = ring_of(&values);
        let mut as_forward = forward_of(&values);
        erase_if(&mut as_ring, |element| element % divisor == 0);
        erase_if_forward(&mut as_forward, |element| element % divisor == 0);
        prop_assert_eq!(ring_vec(&as_ring), forward_vec(&as_forward));
    }

    // =========================================================================
    // Idempotence and size consistency
    // =========================================================================

    #[test]
    fn prop_erase_if_is_idempotent(values in elements(), divisor in divisors()) {
        let mut list = ring_of(&values);
        erase_if(&mut list, |element| element % divisor == 0);
        let after_first = ring_vec(&list);
        erase_if(&mut list, |element| element % divisor == 0);
        prop_assert_eq!(ring_vec(&list), after_first);
    }

    #[test]
    fn prop_erase_if_forward_is_idempotent(values in elements(), divisor in divisors()) {
        let mut list = forward_of(&values);
        erase_if_forward(&mut list, |element| element % divisor == 0);
        let after_first = forward_vec(&list);
        erase_if_forward(&mut list, |element| element % divisor == 0);
        prop_assert_eq!(forward_vec(&list), after_first);
    }

    #[test]
    fn prop_erase_if_keeps_len_consistent(values in elements(), divisor in divisors()) {
        let mut list = ring_of(&values);
        erase_if(&mut list, |element| element % divisor == 0);
        prop_assert_eq!(list.len(), list.iter().count());
    }

    #[test]
    fn prop_erase_if_forward_keeps_len_consistent(values in elements(), divisor in divisors()) {
        let mut list = forward_of(&values);
        erase_if_forward(&mut list, |element| element % divisor == 0);
        prop_assert_eq!(list.len(), list.iter().count());
    }

    // =========================================================================
    // Structure after erasure
    // =========================================================================

    #[test]
    fn prop_erase_if_keeps_back_links_symmetric(values in elements(), divisor in divisors()) {
        let mut list = ring_of(&values);
        erase_if(&mut list, |element| element % divisor == 0);

        let forward_order = ring_vec(&list);
        let mut backward_order: Vec<i32> = list.iter().rev().copied().collect();
        backward_order.reverse();
        prop_assert_eq!(forward_order, backward_order);
    }

    #[test]
    fn prop_erased_lists_stay_usable(values in elements(), divisor in divisors()) {
        let mut list = ring_of(&values);
        erase_if(&mut list, |element| element % divisor == 0);
        // Vacated arena slots must be reusable by later pushes.
        list.push_back(42);
        list.push_front(-42);
        let survivors = ring_vec(&list);
        prop_assert_eq!(survivors.first(), Some(&-42));
        prop_assert_eq!(survivors.last(), Some(&42));
    }
}

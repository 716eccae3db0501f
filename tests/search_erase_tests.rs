//! Example-based tests for predicate search and bulk erasure.

use relink::algorithm::{erase_if, erase_if_forward, find, find_if};
use relink::list::{ForwardList, Positions, RingList};
use rstest::rstest;

fn ring(values: &[i32]) -> RingList<i32> {
    values.iter().copied().collect()
}

fn forward(values: &[i32]) -> ForwardList<i32> {
    values.iter().copied().collect()
}

fn ring_vec(list: &RingList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

fn forward_vec(list: &ForwardList<i32>) -> Vec<i32> {
    list.iter().copied().collect()
}

fn is_even(element: &i32) -> bool {
    element % 2 == 0
}

// =============================================================================
// find / find_if
// =============================================================================

#[rstest]
fn find_returns_position_of_first_match() {
    let list: RingList<char> = "abcd".chars().collect();
    let at = find(&list, list.first(), list.stop(), &'c');
    assert_eq!(list.get(at), Some(&'c'));
}

#[rstest]
fn find_miss_returns_the_stop_position() {
    let list: RingList<char> = "abc".chars().collect();
    let at = find(&list, list.first(), list.stop(), &'z');
    assert_eq!(at, list.stop());
    assert_eq!(list.get(at), None);
}

#[rstest]
fn find_on_empty_range_returns_stop() {
    let list: RingList<i32> = RingList::new();
    let at = find(&list, list.first(), list.stop(), &1);
    assert_eq!(at, list.stop());
}

#[rstest]
fn find_stops_at_the_first_of_several_matches() {
    let list = ring(&[5, 7, 5, 9]);
    let at = find(&list, list.first(), list.stop(), &5);
    assert_eq!(at, list.first());
}

#[rstest]
fn find_respects_the_range_start() {
    let list = ring(&[5, 7, 5, 9]);
    let from = list.advance(list.first());
    let at = find(&list, from, list.stop(), &5);
    assert_ne!(at, list.first());
    assert_eq!(list.get(at), Some(&5));
}

#[rstest]
fn find_respects_the_range_end() {
    let list = ring(&[1, 2, 3]);
    let to = list.advance(list.first());
    let at = find(&list, list.first(), to, &3);
    assert_eq!(at, to);
}

#[rstest]
fn find_if_uses_the_supplied_equivalence() {
    let list = ring(&[11, 24, 37]);
    let at = find_if(&list, list.first(), list.stop(), &4, |element, key| {
        element % 10 == *key
    });
    assert_eq!(list.get(at), Some(&24));
}

#[rstest]
fn find_works_on_forward_lists() {
    let list = forward(&[1, 2, 3]);
    let at = find(&list, list.first(), list.stop(), &2);
    assert_eq!(list.get(at), Some(&2));
}

// =============================================================================
// erase_if, generic overload
// =============================================================================

#[rstest]
#[case(&[1, 2, 3, 4, 5], &[1, 3, 5])]
#[case(&[2, 4, 6], &[])]
#[case(&[1, 3, 5], &[1, 3, 5])]
#[case(&[2, 2, 1, 2], &[1])]
#[case(&[], &[])]
fn erase_if_removes_even_elements(#[case] input: &[i32], #[case] expected: &[i32]) {
    let mut list = ring(input);
    erase_if(&mut list, is_even);
    assert_eq!(ring_vec(&list), expected);
    assert_eq!(list.len(), expected.len());
}

#[rstest]
fn erase_if_is_idempotent() {
    let mut list = ring(&[1, 2, 3, 4, 5, 6]);
    erase_if(&mut list, is_even);
    let after_first = ring_vec(&list);
    erase_if(&mut list, is_even);
    assert_eq!(ring_vec(&list), after_first);
}

#[rstest]
fn erase_if_keeps_back_links_symmetric() {
    let mut list = ring(&[1, 2, 3, 4, 5, 6]);
    erase_if(&mut list, is_even);

    let forward_order = ring_vec(&list);
    let mut backward_order: Vec<i32> = list.iter().rev().copied().collect();
    backward_order.reverse();
    assert_eq!(forward_order, backward_order);
}

// =============================================================================
// erase_if_forward, singly linked overload
// =============================================================================

#[rstest]
#[case(&[1, 2, 3, 4, 5], &[1, 3, 5])]
#[case(&[2, 4, 6], &[])]
#[case(&[2, 2, 2, 1], &[1])]
#[case(&[1, 2, 2, 2], &[1])]
#[case(&[1, 3, 5], &[1, 3, 5])]
#[case(&[], &[])]
fn erase_if_forward_removes_even_elements(#[case] input: &[i32], #[case] expected: &[i32]) {
    let mut list = forward(input);
    erase_if_forward(&mut list, is_even);
    assert_eq!(forward_vec(&list), expected);
    assert_eq!(list.len(), expected.len());
}

#[rstest]
fn erase_if_forward_survives_an_all_match_list() {
    // Every element is drained through the leading pop_front phase;
    // the pair walk must then see an empty list, not a sentinel value.
    let mut list = forward(&[2, 2, 2, 2]);
    erase_if_forward(&mut list, is_even);
    assert!(list.is_empty());
}

#[rstest]
fn erase_if_forward_is_idempotent() {
    let mut list = forward(&[2, 1, 2, 3, 2]);
    erase_if_forward(&mut list, is_even);
    let after_first = forward_vec(&list);
    erase_if_forward(&mut list, is_even);
    assert_eq!(forward_vec(&list), after_first);
}

#[rstest]
fn erase_overloads_agree() {
    let values = [4, 1, 6, 6, 2, 3, 8, 5];
    let mut as_ring = ring(&values);
    let mut as_forward = forward(&values);
    erase_if(&mut as_ring, is_even);
    erase_if_forward(&mut as_forward, is_even);
    assert_eq!(ring_vec(&as_ring), forward_vec(&as_forward));
}

#[rstest]
fn erase_if_applies_the_predicate_to_values_not_positions() {
    // The predicate observes element values in both phases of the
    // forward overload: leading drain and pair walk.
    let mut seen = Vec::new();
    let mut list = forward(&[2, 1, 4, 3]);
    erase_if_forward(&mut list, |element| {
        seen.push(*element);
        is_even(element)
    });
    assert_eq!(forward_vec(&list), vec![1, 3]);
    assert_eq!(seen, vec![2, 1, 4, 3]);
}

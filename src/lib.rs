//! # relink
//!
//! In-place structural algorithms for linked lists: rotation, predicate
//! search, and bulk erasure, together with the arena-backed list shapes
//! they operate on.
//!
//! ## Overview
//!
//! Classic linked-list surgery is pointer manipulation; this crate
//! re-expresses it in safe Rust. Nodes live in an arena and link to each
//! other through stable [`NodeId`](list::NodeId) handles, so relinking is
//! index reassignment rather than raw address manipulation. Two list
//! shapes are provided:
//!
//! - [`RingList`](list::RingList): a circular doubly linked list with a
//!   single sentinel node acting as both one-past-end and
//!   one-before-begin.
//! - [`ForwardList`](list::ForwardList): a singly linked list with a head
//!   sentinel and an end sentinel, no back links.
//!
//! The algorithms themselves are free functions parameterized over the
//! linkage traits in [`list`], not over the concrete containers:
//!
//! - [`rotate_left`](algorithm::rotate_left) /
//!   [`rotate_right`](algorithm::rotate_right): O(1) single-step rotation
//!   of any sentinel-based ring, plus `_by` variants for N steps.
//! - [`rotate_left_forward`](algorithm::rotate_left_forward): one-pass
//!   left rotation of a singly linked list.
//! - [`find_if`](algorithm::find_if) / [`find`](algorithm::find):
//!   first-match search over a half-open position range.
//! - [`erase_if`](algorithm::erase_if) /
//!   [`erase_if_forward`](algorithm::erase_if_forward): stable bulk
//!   erasure of every element matching a predicate.
//!
//! ## Feature Flags
//!
//! - `ring`: the [`RingList`](list::RingList) container
//! - `forward`: the [`ForwardList`](list::ForwardList) container
//! - `full`: enable all features
//!
//! The linkage traits and the algorithms are always available.
//!
//! ## Example
//!
//! ```rust
//! use relink::algorithm::{erase_if, rotate_left};
//! use relink::list::RingList;
//!
//! let mut list: RingList<i32> = (1..=5).collect();
//!
//! rotate_left(&mut list);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5, 1]);
//!
//! erase_if(&mut list, |element| element % 2 == 0);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 5, 1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the linkage traits, the algorithms, and the enabled
/// containers.
///
/// # Usage
///
/// ```rust
/// use relink::prelude::*;
/// ```
pub mod prelude {

    pub use crate::algorithm::*;

    pub use crate::list::*;
}

pub mod algorithm;

pub mod list;

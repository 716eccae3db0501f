//! In-place structural algorithms over the linkage traits.
//!
//! Everything here is a free function bounded on the traits in
//! [`crate::list`], never on a concrete container: any type that exposes
//! the node-access contract gets the algorithms for free. None of the
//! functions allocate node storage; rotation is pure link reassignment,
//! and erasure frees nodes only through the container's own removal
//! primitives.
//!
//! - [`rotate_left`] / [`rotate_right`] and the `_by` variants: ring
//!   rotation via [`RingLinks`](crate::list::RingLinks).
//! - [`rotate_left_forward`]: singly linked rotation via
//!   [`ForwardLinks`](crate::list::ForwardLinks).
//! - [`find_if`] / [`find`]: range search via
//!   [`Positions`](crate::list::Positions).
//! - [`erase_if`]: generic bulk erasure via
//!   [`PositionErase`](crate::list::PositionErase).
//! - [`erase_if_forward`]: the predecessor-tracking specialization for
//!   singly linked shapes.

mod erase;
mod rotate;
mod search;

pub use erase::{erase_if, erase_if_forward};
pub use rotate::{
    rotate_left, rotate_left_by, rotate_left_forward, rotate_right, rotate_right_by,
};
pub use search::{find, find_if};

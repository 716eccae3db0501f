//! Arena-backed list shapes and the node-access contract.
//!
//! This module provides the two list shapes the algorithms operate on
//! and the traits that connect the two sides:
//!
//! - [`RingList`]: circular doubly linked list with a single sentinel
//!   node (feature `ring`)
//! - [`ForwardList`]: singly linked list with head and end sentinels
//!   (feature `forward`)
//! - [`RingLinks`], [`ForwardLinks`], [`Positions`], [`PositionErase`]:
//!   the linkage traits the algorithms are bounded on
//! - [`NodeId`]: the stable position handle shared by everything above
//!
//! # Arena-indexed linkage
//!
//! Neither shape holds pointers. Nodes live in slot arenas owned by
//! their list, and every link is a [`NodeId`] naming another slot, so a
//! structural algorithm can only ever reassign indices — a stale or
//! foreign id cannot dangle into freed memory. Sentinels are a dedicated
//! valueless node variant, which keeps them out of reach of value
//! accessors and removal.
//!
//! # Examples
//!
//! ```rust
//! use relink::list::{Positions, RingList};
//!
//! let mut list = RingList::new();
//! let b = list.push_back("b");
//! list.push_front("a");
//!
//! assert_eq!(list.get(b), Some(&"b"));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b"]);
//! ```

mod arena;
mod link;

#[cfg(feature = "forward")]
mod forward;

#[cfg(feature = "ring")]
mod ring;

pub use arena::NodeId;
pub use link::{ForwardLinks, PositionErase, Positions, RingLinks};

#[cfg(feature = "forward")]
pub use forward::{ForwardIntoIter, ForwardIter, ForwardList};

#[cfg(feature = "ring")]
pub use ring::{RingIntoIter, RingIter, RingList};

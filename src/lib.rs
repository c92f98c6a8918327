//! An ordered map backed by a plain binary search tree, whose in-order traversal can be handed to
//! a producer thread and pulled one entry at a time.
//!
//! # Purpose
//! The crate is built around two pieces that only make sense together:
//! - [`OrderedMap`](collections::binary_tree::OrderedMap), a binary search tree keyed by a
//!   user-supplied [`Comparator`](collections::binary_tree::map::Comparator). It is not balanced,
//!   so its shape (and its worst case depth) depends on insertion order.
//! - [`ranger`](sync::ranger), a rendezvous channel between a producer and a consumer. Every value
//!   changes hands directly, so at most one is ever in flight, and the consumer can tell the
//!   producer to give up.
//!
//! Put together, [`OrderedMap::in_order`](collections::binary_tree::OrderedMap::in_order) walks
//! the tree on its own thread while the caller pulls entries through an
//! [`InOrder`](collections::binary_tree::map::InOrder) session. Memory use stays at the depth of
//! the tree rather than the size of the map.
//!
//! # Cancellation
//! A session that is abandoned before the end must release its producer. That is never left to
//! chance here: [`InOrder::stop`](collections::binary_tree::map::InOrder::stop) does it
//! explicitly, dropping a session calls `stop`, and the scoped form of `in_order` stops and joins
//! its producer on every way out of the consuming closure, panics included.
//!
//! # Error Handling
//! Map operations can't fail, a missing key is just [`None`]. Errors only show up at the channel
//! level, as small strongly typed structs and enums implementing [`Error`](std::error::Error).
//!
//! # Features
//! - `collections` (default): the map and its iterators.
//! - `sync` (default): the ranger channel, pulled in by `collections`.
//! - `cli`: the demo binary, along with a `tracing` subscriber configured from `RUST_LOG`.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "sync")]
pub mod sync;

pub(crate) mod util;

//! A module containing [`OrderedMap`] and associated types.
//!
//! The map is an unbalanced binary search tree, ordered by a [`Comparator`] rather than an [`Ord`]
//! bound. Besides the usual borrowed and owned iterators, it can hand its in-order traversal to a
//! producer thread and expose it as an [`InOrder`] session, pulling one entry at a time through a
//! [`ranger`](crate::sync::ranger).

mod compare;
mod in_order;
mod iter;
mod node;
mod ordered_map;

pub use compare::*;
pub use in_order::*;
pub use iter::*;
pub(crate) use node::*;
pub use ordered_map::*;

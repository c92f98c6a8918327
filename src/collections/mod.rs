//! Collection types.
//!
//! # Method
//! Collections here are ordered by a [`Comparator`](binary_tree::map::Comparator) that is handed
//! to the collection when it is created, rather than by an [`Ord`] bound on the key type. The
//! usual `Ord` behaviour is still available through
//! [`Natural`](binary_tree::map::Natural).

pub mod binary_tree;

use std::cmp::Ordering;

/// A total order over keys of type `K`, used by [`OrderedMap`](super::OrderedMap) in place of an
/// [`Ord`] bound.
///
/// Implementations must be consistent for the lifetime of a map: if the order changes after keys
/// have been inserted, lookups and traversal produce unspecified (but memory safe) results.
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Comparator<K> for Natural {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a comparison function that returns a signed number, negative for less, zero for equal
/// and positive for greater. This is the shape of `a - b` or `strcmp`.
///
/// ```
/// # use ranged_tree::collections::binary_tree::map::{BySign, OrderedMap};
/// let mut map = OrderedMap::new(BySign(|a: &i32, b: &i32| a - b));
/// map.insert(2, "two");
/// map.insert(1, "one");
/// assert_eq!(map.first(), Some((&1, &"one")));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BySign<F>(pub F);

impl<K: ?Sized, F, N> Comparator<K> for BySign<F>
where
    F: Fn(&K, &K) -> N,
    N: Ord + Default,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b).cmp(&N::default())
    }
}

use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Comparator, Iter, Natural};
use crate::util::fmt::DebugRaw;

/// An ordered map, implemented as an unbalanced binary search tree.
///
/// Keys are ordered by the map's [`Comparator`], which is fixed when the map is created. For every
/// node, all keys in its left subtree compare less than its own key and all keys in its right
/// subtree compare greater. Nothing rebalances the tree, so its shape depends on insertion order:
/// inserting keys that are already sorted produces a tree as deep as the map is long (see
/// [`depth`](OrderedMap::depth)).
///
/// Entries can't be removed. They live until the map itself is dropped or consumed.
pub struct OrderedMap<K, V, C = Natural> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
    pub(crate) compare: C,
}

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Creates an empty map ordered by `compare`.
    pub const fn new(compare: C) -> OrderedMap<K, V, C> {
        OrderedMap {
            root: Branch(None),
            len: 0,
            compare,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn comparator(&self) -> &C {
        &self.compare
    }

    /// Inserts a key-value pair into the map. If an equal key is already present, its value is
    /// replaced in place and the original key is kept.
    ///
    /// Returns whether the key is new to the map.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let is_new = self.root.insert(&self.compare, key, value).is_none();
        if is_new {
            self.len += 1;
        }
        is_new
    }

    pub fn find_entry(&self, key: &K) -> Option<(&K, &V)> {
        self.root.get_node(&self.compare, key).map(|node| node.tuple())
    }

    /// Returns the value stored for `key`, or [`None`] if the key isn't in the map.
    pub fn find(&self, key: &K) -> Option<&V> {
        self.find_entry(key).map(|e| e.1)
    }

    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        self.root.get_mut(&self.compare, key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.root.get_node(&self.compare, key).is_some()
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.root.first_entry()
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.root.last_entry()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, 0 for an empty
    /// map.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Returns a borrowing iterator over the entries in ascending key order.
    ///
    /// This walks the tree on the calling thread. For a traversal that runs on a producer thread
    /// and hands entries over one at a time, see [`in_order`](OrderedMap::in_order).
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }
}

impl<K: Ord, V> OrderedMap<K, V, Natural> {
    /// Creates an empty map ordered by the keys' [`Ord`] implementation.
    pub const fn natural() -> OrderedMap<K, V, Natural> {
        OrderedMap::new(Natural)
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V, Natural> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for OrderedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V, Natural> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::natural();
        map.extend(iter);
        map
    }
}

impl<K: Debug, V: Debug, C> Debug for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedMap")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Debug, V: Debug, C: Comparator<K>> Display for OrderedMap<K, V, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

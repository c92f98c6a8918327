use std::iter::FusedIterator;

use super::{Branch, Comparator, Node, OrderedMap};

impl<K, V, C: Comparator<K>> IntoIterator for OrderedMap<K, V, C> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.len)
    }
}

/// An owning in-order iterator. Holds only the nodes on the path to the next entry, so it never
/// needs more than the depth of the tree in extra memory.
pub struct IntoIter<K, V> {
    pending: Vec<Box<Node<K, V>>>,
    len: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(mut root: Branch<K, V>, len: usize) -> IntoIter<K, V> {
        let mut iter = IntoIter {
            pending: Vec::new(),
            len,
        };
        iter.push_left_edge(root.0.take());
        iter
    }

    fn push_left_edge(&mut self, mut next: Option<Box<Node<K, V>>>) {
        while let Some(mut node) = next {
            next = node.left.0.take();
            self.pending.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.pending.pop()?;
        self.push_left_edge(node.right.0.take());
        self.len -= 1;
        Some((*node).into_tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<'a, K, V, C: Comparator<K>> IntoIterator for &'a OrderedMap<K, V, C> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(&self.root, self.len)
    }
}

/// A borrowing in-order iterator, see [`OrderedMap::iter`].
pub struct Iter<'a, K, V> {
    pending: Vec<&'a Node<K, V>>,
    len: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: &'a Branch<K, V>, len: usize) -> Iter<'a, K, V> {
        let mut iter = Iter {
            pending: Vec::new(),
            len,
        };
        iter.push_left_edge(root);
        iter
    }

    fn push_left_edge(&mut self, mut branch: &'a Branch<K, V>) {
        while let Some(node) = branch.0.as_deref() {
            self.pending.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.push_left_edge(&node.right);
        self.len -= 1;
        Some(node.tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            pending: self.pending.clone(),
            len: self.len,
        }
    }
}

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use super::Comparator;

pub(crate) struct Branch<K, V>(pub Option<Box<Node<K, V>>>);

pub(crate) struct Node<K, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
}

impl<K, V> Node<K, V> {
    pub const fn leaf(key: K, value: V) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
            value,
        }
    }

    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

// All of the walks here are loops rather than recursion: the tree isn't balanced, so sorted input
// produces a branch as deep as the map is long.
impl<K, V> Branch<K, V> {
    /// Inserts the entry, returning the previous value if the key was already present.
    pub fn insert<C: Comparator<K>>(&mut self, compare: &C, key: K, value: V) -> Option<V> {
        let mut branch = self;
        while let Branch(Some(node)) = branch {
            branch = match compare.compare(&key, &node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            };
        }
        branch.0 = Some(Box::new(Node::leaf(key, value)));
        None
    }

    pub fn get_node<C: Comparator<K>>(&self, compare: &C, key: &K) -> Option<&Node<K, V>> {
        let mut branch = self;
        while let Branch(Some(node)) = branch {
            branch = match compare.compare(key, &node.key) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    pub fn get_mut<C: Comparator<K>>(&mut self, compare: &C, key: &K) -> Option<&mut V> {
        let mut branch = self;
        while let Branch(Some(node)) = branch {
            branch = match compare.compare(key, &node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(node.tuple())
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(node.tuple())
    }

    /// The number of nodes on the longest path from this branch to a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node<K, V>, usize)> =
            self.0.as_deref().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(
                [&node.left, &node.right]
                    .into_iter()
                    .filter_map(|branch| branch.0.as_deref())
                    .map(|child| (child, depth + 1)),
            );
        }
        deepest
    }
}

impl<K, V> Drop for Branch<K, V> {
    fn drop(&mut self) {
        // Unlink children before they're dropped so that a degenerate tree doesn't recurse once per
        // node.
        let mut pending: Vec<Box<Node<K, V>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
    }
}

impl<K: Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}: {:?})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.key,
                node.value,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}

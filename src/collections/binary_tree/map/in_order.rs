use std::iter::FusedIterator;
use std::thread::{self, JoinHandle};

use tracing::{debug, trace, warn};

use super::{Comparator, IntoIter, OrderedMap};
use crate::sync::ranger::{Receiver, Sender, ranger};

impl<K, V, C: Comparator<K>> OrderedMap<K, V, C> {
    /// Runs `consume` with an [`InOrder`] session over borrowed entries.
    ///
    /// A scoped producer thread walks the tree and hands entries over one at a time. Once `consume`
    /// returns, or unwinds, the session is stopped and the producer is joined before this method
    /// returns, whether or not the traversal was finished.
    ///
    /// ```
    /// # use ranged_tree::collections::binary_tree::OrderedMap;
    /// let map: OrderedMap<_, _> = [(3, "three"), (1, "one"), (2, "two")].into_iter().collect();
    /// let first_two = map.in_order(|session| session.take(2).collect::<Vec<_>>());
    /// assert_eq!(first_two, [(&1, &"one"), (&2, &"two")]);
    /// ```
    pub fn in_order<'m, R, F>(&'m self, consume: F) -> R
    where
        K: Sync,
        V: Sync,
        F: FnOnce(&mut InOrder<(&'m K, &'m V)>) -> R,
    {
        thread::scope(|scope| {
            let (sender, receiver) = ranger();
            let entries = self.iter();
            scope.spawn(move || produce(entries, sender));

            let mut session = InOrder {
                receiver,
                producer: None,
            };
            consume(&mut session)
        })
    }

    /// Consumes the map, moving the tree into a producer thread and returning an owning
    /// [`InOrder`] session.
    ///
    /// The session should be [stopped](InOrder::stop) (or dropped) when it is no longer needed,
    /// which joins the producer and frees whatever part of the tree hasn't been yielded yet.
    pub fn into_in_order(self) -> InOrder<(K, V)>
    where
        K: Send + 'static,
        V: Send + 'static,
    {
        let (sender, receiver) = ranger();
        let entries = IntoIter::new(self.root, self.len);
        let producer = thread::spawn(move || produce(entries, sender));

        InOrder {
            receiver,
            producer: Some(producer),
        }
    }
}

fn produce<T>(entries: impl Iterator<Item = T>, sender: Sender<T>) {
    let mut delivered = 0_usize;
    for entry in entries {
        if sender.send(entry).is_err() {
            debug!(delivered, "in-order session stopped before exhaustion");
            return;
        }
        delivered += 1;
        trace!(delivered, "in-order entry handed over");
    }
    debug!(delivered, "in-order session exhausted");
    sender.close();
}

/// An in-order iteration session over an [`OrderedMap`], created by [`OrderedMap::in_order`] or
/// [`OrderedMap::into_in_order`].
///
/// Entries are produced on another thread, with at most one entry in flight: the producer waits
/// for each [`next`](Iterator::next) before moving further through the tree. After the last entry,
/// `next` keeps returning [`None`].
///
/// Dropping a session stops it.
#[derive(Debug)]
pub struct InOrder<T> {
    receiver: Receiver<T>,
    // Only owning sessions join their producer, scoped ones are joined by their scope.
    producer: Option<JoinHandle<()>>,
}

impl<T> InOrder<T> {
    /// Abandons the session. The producer stops at its next handoff without visiting further
    /// nodes, and no more entries are delivered. For an owning session this also waits for the
    /// producer thread to finish.
    pub fn stop(&mut self) {
        self.receiver.stop();
        if let Some(producer) = self.producer.take() {
            if producer.join().is_err() {
                warn!("in-order producer panicked");
            }
        }
    }

    pub const fn is_stopped(&self) -> bool {
        self.receiver.is_stopped()
    }
}

impl<T> Iterator for InOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.next()
    }
}

impl<T> FusedIterator for InOrder<T> {}

impl<T> Drop for InOrder<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

use std::iter::FusedIterator;

use crossbeam::channel::{self, Select, TryRecvError};
use tracing::trace;

use super::{SendError, TryNextError};

/// Creates a connected [`Sender`] and [`Receiver`].
///
/// The values channel has a capacity of zero, so the pair behaves as a rendezvous: a send only
/// completes once the receiver has taken the value. Alongside it runs a `done` channel that never
/// carries a message. The receiver holds its sending end and closes it when it stops listening,
/// which wakes any sender blocked on a handoff.
pub fn ranger<T>() -> (Sender<T>, Receiver<T>) {
    let (values_tx, values_rx) = channel::bounded(0);
    let (done_tx, done_rx) = channel::bounded(0);

    (
        Sender {
            values: values_tx,
            done: done_rx,
        },
        Receiver {
            values: values_rx,
            done: Some(done_tx),
        },
    )
}

/// The producing half of a [`ranger`].
///
/// Dropping the sender, or calling [`close`](Sender::close), tells the receiver that no more values
/// will arrive.
#[derive(Debug)]
pub struct Sender<T> {
    pub(crate) values: channel::Sender<T>,
    pub(crate) done: channel::Receiver<()>,
}

impl<T> Sender<T> {
    /// Offers `value` to the receiver, blocking until it is either taken or the receiver stops.
    ///
    /// # Errors
    /// Returns the value in a [`SendError`] if the receiver has been stopped or dropped, in which
    /// case the producer should stop producing.
    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        let mut select = Select::new();
        let handoff = select.send(&self.values);
        let done = select.recv(&self.done);

        let oper = select.select();
        if oper.index() == handoff {
            oper.send(&self.values, value)
                .map_err(|e| SendError(e.into_inner()))
        } else {
            debug_assert_eq!(oper.index(), done);
            // The done channel only ever disconnects, so this is always an Err.
            let _ = oper.recv(&self.done);
            Err(SendError(value))
        }
    }

    /// Reports whether the receiver has stopped listening. A producer can check this before doing
    /// expensive work for a value that would be rejected anyway.
    pub fn is_stopped(&self) -> bool {
        matches!(self.done.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Tells the receiver that no more values will arrive.
    pub fn close(self) {
        trace!("ranger sender closed");
    }
}

/// The consuming half of a [`ranger`]. Values are pulled through [`Iterator::next`].
#[derive(Debug)]
pub struct Receiver<T> {
    pub(crate) values: channel::Receiver<T>,
    pub(crate) done: Option<channel::Sender<()>>,
}

impl<T> Receiver<T> {
    /// Tells the sender that nothing is listening anymore. Any send that is blocked, or attempted
    /// later, fails and returns its value. Calling this more than once has no further effect.
    pub fn stop(&mut self) {
        if self.done.take().is_some() {
            trace!("ranger receiver stopped");
        }
    }

    pub const fn is_stopped(&self) -> bool {
        self.done.is_none()
    }

    /// Takes a value if the sender is currently offering one, without blocking.
    ///
    /// # Errors
    /// Returns [`TryNextError::Empty`] when no value is on offer right now, and
    /// [`TryNextError::Disconnected`] when the sender has closed or this receiver was stopped.
    pub fn try_next(&mut self) -> Result<T, TryNextError> {
        if self.is_stopped() {
            return Err(TryNextError::Disconnected);
        }

        self.values.try_recv().map_err(|e| match e {
            TryRecvError::Empty => TryNextError::Empty,
            TryRecvError::Disconnected => TryNextError::Disconnected,
        })
    }
}

impl<T> Iterator for Receiver<T> {
    type Item = T;

    /// Blocks until the sender offers the next value. Returns [`None`] once the sender has closed,
    /// or if this receiver has been stopped.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_stopped() {
            return None;
        }
        self.values.recv().ok()
    }
}

impl<T> FusedIterator for Receiver<T> {}

#![cfg(test)]

use std::collections::BTreeSet;
use std::thread;
use std::time::{Duration, Instant};

use super::*;

#[test]
fn test_values_arrive_in_send_order() {
    let (sender, receiver) = ranger();
    let producer = thread::spawn(move || {
        for i in 0..5 {
            sender.send(i).expect("receiver should still be listening");
        }
        sender.close();
    });

    assert_eq!(
        receiver.collect::<Vec<_>>(),
        [0, 1, 2, 3, 4],
        "Values should be received in the order they were sent."
    );
    producer.join().expect("producer should not panic");
}

#[test]
fn test_closed_sender_keeps_returning_none() {
    let (sender, mut receiver) = ranger::<u8>();
    sender.close();

    assert_eq!(receiver.next(), None);
    assert_eq!(
        receiver.next(),
        None,
        "A closed ranger should keep reporting the end rather than blocking."
    );
    assert!(receiver.try_next().unwrap_err().is_disconnected());
}

#[test]
fn test_stop_releases_blocked_sender() {
    let (sender, mut receiver) = ranger();
    let producer = thread::spawn(move || {
        let mut sent = 0;
        for i in 0.. {
            match sender.send(i) {
                Ok(()) => sent += 1,
                Err(e) => return (sent, e.into_inner()),
            }
        }
        unreachable!()
    });

    assert_eq!(receiver.next(), Some(0));
    receiver.stop();
    assert_eq!(receiver.next(), None, "A stopped receiver should not deliver further values.");

    let (sent, rejected) = producer.join().expect("producer should not panic");
    assert_eq!(sent, 1, "Only the value that was taken should count as sent.");
    assert_eq!(rejected, 1, "The rejected value should be handed back to the sender.");
}

#[test]
fn test_dropped_receiver_releases_sender() {
    let (sender, receiver) = ranger();
    drop(receiver);

    assert!(sender.is_stopped());
    assert_eq!(sender.send("lost").unwrap_err().into_inner(), "lost");
}

#[test]
fn test_stop_is_idempotent() {
    let (sender, mut receiver) = ranger::<()>();
    receiver.stop();
    receiver.stop();

    assert!(receiver.is_stopped());
    assert!(sender.is_stopped());
    assert_eq!(receiver.try_next(), Err(TryNextError::Disconnected));
}

#[test]
fn test_try_next_without_offer_is_empty() {
    let (_sender, mut receiver) = ranger::<u8>();
    assert_eq!(
        receiver.try_next(),
        Err(TryNextError::Empty),
        "Nothing is on offer while the sender is idle."
    );
}

#[test]
fn test_drain_runs_producer_to_completion() {
    let (sender, receiver) = ranger();
    let producer = thread::spawn(move || (0..10).all(|i| sender.send(i).is_ok()));

    assert_eq!(drain(receiver), 10);
    assert!(
        producer.join().expect("producer should not panic"),
        "Every send should succeed while draining."
    );
}

#[test]
fn test_merge_forwards_both_inputs() {
    let (evens_tx, evens) = ranger();
    let (odds_tx, odds) = ranger();

    let evens_producer = thread::spawn(move || (0..10).step_by(2).for_each(|i| {
        evens_tx.send(i).expect("merge should still be forwarding");
    }));
    let odds_producer = thread::spawn(move || (1..10).step_by(2).for_each(|i| {
        odds_tx.send(i).expect("merge should still be forwarding");
    }));

    let merged: BTreeSet<_> = merge(evens, odds).collect();
    assert_eq!(
        merged,
        (0..10).collect(),
        "Every value from both inputs should come out of the merged receiver."
    );

    evens_producer.join().expect("producer should not panic");
    odds_producer.join().expect("producer should not panic");
}

#[test]
fn test_stopping_merge_stops_inputs() {
    let (first_tx, first) = ranger::<u32>();
    let (second_tx, second) = ranger::<u32>();

    let mut merged = merge(first, second);
    merged.stop();

    // The forwarding thread notices the stop and drops its inputs.
    let deadline = Instant::now() + Duration::from_secs(5);
    while !(first_tx.is_stopped() && second_tx.is_stopped()) {
        assert!(Instant::now() < deadline, "Inputs should be released after a stop.");
        thread::sleep(Duration::from_millis(1));
    }

    assert!(first_tx.send(1).is_err());
    assert!(second_tx.send(2).is_err());
}

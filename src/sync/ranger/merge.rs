use std::thread;

use crossbeam::channel::Select;
use tracing::debug;

use super::{Receiver, Sender, ranger};

/// Receives and discards every remaining value until the sender closes, returning how many values
/// were thrown away.
///
/// Unlike dropping the receiver, this lets the producer run to completion.
pub fn drain<T>(receiver: Receiver<T>) -> usize {
    receiver.count()
}

/// Merges two receivers into one, forwarding values in the order they arrive.
///
/// The merged receiver closes once both inputs have closed. If it is stopped (or dropped) first,
/// both inputs are stopped in turn, so the producers feeding them are released too.
pub fn merge<T: Send + 'static>(first: Receiver<T>, second: Receiver<T>) -> Receiver<T> {
    let (sender, receiver) = ranger();
    thread::spawn(move || forward([first, second], sender));
    receiver
}

fn forward<T>(inputs: [Receiver<T>; 2], sender: Sender<T>) {
    let mut inputs = inputs.map(|input| Some(input).filter(|input| !input.is_stopped()));
    let mut forwarded = 0_usize;

    while inputs.iter().any(Option::is_some) {
        let (index, received) = {
            let open: Vec<(usize, &Receiver<T>)> = inputs
                .iter()
                .enumerate()
                .filter_map(|(i, input)| input.as_ref().map(|input| (i, input)))
                .collect();

            let mut select = Select::new();
            for (_, input) in &open {
                select.recv(&input.values);
            }
            // Registered last, so its index is open.len().
            select.recv(&sender.done);

            let oper = select.select();
            match open.get(oper.index()) {
                Some(&(index, input)) => (index, oper.recv(&input.values).ok()),
                None => {
                    let _ = oper.recv(&sender.done);
                    debug!(forwarded, "merged receiver stopped, releasing inputs");
                    return;
                },
            }
        };

        match received {
            Some(value) => {
                if sender.send(value).is_err() {
                    debug!(forwarded, "merged receiver stopped, releasing inputs");
                    return;
                }
                forwarded += 1;
            },
            None => inputs[index] = None,
        }
    }

    debug!(forwarded, "both merge inputs closed");
    sender.close();
}

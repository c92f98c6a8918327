//! A module containing [`ranger`] and its [`Sender`] / [`Receiver`] halves.
//!
//! A ranger is a channel with no buffer at all: every [`Sender::send`] blocks until the
//! [`Receiver`] takes the value, so there is never more than one value in flight. The receiver can
//! also [`stop`](Receiver::stop) listening, at which point any blocked or future send returns the
//! value to the producer instead of hanging forever.
//!
//! [`drain`] and [`merge`] are small helpers built on top of the pair.

mod error;
mod merge;
mod ranger;
mod tests;

pub use error::*;
pub use merge::*;
pub use ranger::*;

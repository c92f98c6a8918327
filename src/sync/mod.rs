//! Thread synchronisation primitives.
//!
//! At the moment this is just [`ranger`], a rendezvous channel that lets a producing thread find
//! out that its consumer has lost interest.

pub mod ranger;

#[doc(inline)]
pub use ranger::{Receiver, Sender, ranger};

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, IsVariant};

/// Returned by [`Sender::send`](super::Sender::send) when the receiver has stopped listening or
/// has been dropped. The value that couldn't be delivered is handed back.
pub struct SendError<T>(pub T);

impl<T> SendError<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

// No T: Debug bound, the value is usually a borrowed map entry.
impl<T> Debug for SendError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SendError").finish_non_exhaustive()
    }
}

impl<T> Display for SendError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Sending on a ranger whose receiver has stopped!")
    }
}

impl<T> Error for SendError<T> {}

/// Returned by [`Receiver::try_next`](super::Receiver::try_next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum TryNextError {
    #[display("No value is waiting to be received!")]
    Empty,
    #[display("The sender has closed or the receiver has been stopped!")]
    Disconnected,
}

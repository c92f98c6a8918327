use std::fmt::{self, Debug, Formatter};

/// Writes the wrapped string as-is under [`Debug`], without quotes or escapes. Used to embed a
/// pre-rendered block (like a drawn tree) as a field of a debug struct.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

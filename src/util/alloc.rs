use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts how many of its clones have been dropped. Thread safe, so it can be moved into a
/// producer thread along with the map it is stored in.
#[derive(Debug, Clone, Default)]
pub struct CountedDrop(pub Arc<AtomicUsize>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop::default()
    }

    pub fn dropped(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

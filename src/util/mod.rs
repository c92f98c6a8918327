#[cfg(test)]
pub mod alloc;
pub mod fmt;
pub mod panic;

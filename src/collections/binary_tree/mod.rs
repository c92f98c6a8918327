//! Binary tree based collections. Currently only [`OrderedMap`](map::OrderedMap).

pub mod map;

#[doc(inline)]
pub use map::OrderedMap;

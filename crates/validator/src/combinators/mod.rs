//! Combinators that lift scalar validators to other shapes.

pub mod each;

pub use each::{Each, each};

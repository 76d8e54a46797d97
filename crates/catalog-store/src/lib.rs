//! In-memory keyed record collection and its ordering rules.

mod collection;
mod order;

pub use collection::*;
pub use order::*;

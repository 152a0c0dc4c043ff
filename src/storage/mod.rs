//! Persistence boundary.
//!
//! The engine reaches storage only through [`KeyValueStore`], injected at
//! construction. [`MemoryStore`] is the in-process implementation.

pub mod store;

pub use store::{KeyValueStore, MemoryStore};

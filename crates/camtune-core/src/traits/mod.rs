//! Trait seams between the engine and its host.

pub mod item_provider;

pub use item_provider::{InMemoryItems, ItemProvider};

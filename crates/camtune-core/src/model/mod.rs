//! Item record model.
//!
//! Records are externally owned: the engine mutates them in place and must
//! never drop properties it does not understand.

pub mod item;
pub mod vector;

pub use item::{ItemProps, ItemRecord};
pub use vector::Vec3;

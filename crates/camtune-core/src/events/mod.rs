//! Event dispatch for the adjustment pass.
//!
//! Events are ephemeral diagnostics: the engine fires them and never reads
//! anything back. Hosts register handlers to surface them however they like
//! (console, log file, nothing at all).

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::TuneEventHandler;
pub use types::{FieldAdjustedEvent, FieldClampedEvent, PassCompleteEvent};

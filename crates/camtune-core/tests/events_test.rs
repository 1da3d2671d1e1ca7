//! Tests for the event dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use camtune_core::events::{
    EventDispatcher, FieldAdjustedEvent, PassCompleteEvent, TuneEventHandler,
};

/// Handler that counts what it receives.
#[derive(Default)]
struct CountingHandler {
    adjusted: AtomicUsize,
    complete: AtomicUsize,
}

impl TuneEventHandler for CountingHandler {
    fn on_field_adjusted(&self, _event: &FieldAdjustedEvent) {
        self.adjusted.fetch_add(1, Ordering::Relaxed);
    }

    fn on_pass_complete(&self, _event: &PassCompleteEvent) {
        self.complete.fetch_add(1, Ordering::Relaxed);
    }
}

/// Handler that panics on every event.
struct PanickingHandler;

impl TuneEventHandler for PanickingHandler {
    fn on_field_adjusted(&self, _event: &FieldAdjustedEvent) {
        panic!("handler failure");
    }
}

fn sample_event() -> FieldAdjustedEvent {
    FieldAdjustedEvent {
        item_id: "item-1".to_string(),
        name: "weapon_colt_m4a1".to_string(),
        weap_class: "assaultRifle".to_string(),
        field: "CameraRecoil",
        old: 0.5,
        new: 0.75,
    }
}

/// Emitting with no handlers registered is a no-op.
#[test]
fn test_empty_dispatcher_emit() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_field_adjusted(&sample_event());
    dispatcher.emit_pass_complete(&PassCompleteEvent { changed: 0 });
}

/// All registered handlers receive every emitted event.
#[test]
fn test_all_handlers_receive_events() {
    let mut dispatcher = EventDispatcher::new();
    let first = Arc::new(CountingHandler::default());
    let second = Arc::new(CountingHandler::default());
    dispatcher.register(first.clone());
    dispatcher.register(second.clone());
    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.emit_field_adjusted(&sample_event());
    dispatcher.emit_field_adjusted(&sample_event());
    dispatcher.emit_pass_complete(&PassCompleteEvent { changed: 2 });

    for handler in [first, second] {
        assert_eq!(handler.adjusted.load(Ordering::Relaxed), 2);
        assert_eq!(handler.complete.load(Ordering::Relaxed), 1);
    }
}

/// A panicking handler does not prevent later handlers from receiving
/// the event.
#[test]
fn test_panicking_handler_is_isolated() {
    let mut dispatcher = EventDispatcher::new();
    let counting = Arc::new(CountingHandler::default());
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counting.clone());

    dispatcher.emit_field_adjusted(&sample_event());
    assert_eq!(counting.adjusted.load(Ordering::Relaxed), 1);
}

/// Default trait methods are no-ops: a handler implementing nothing
/// accepts every event.
#[test]
fn test_default_handler_methods() {
    struct NoOpHandler;
    impl TuneEventHandler for NoOpHandler {}

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(NoOpHandler));
    dispatcher.emit_field_adjusted(&sample_event());
    dispatcher.emit_pass_complete(&PassCompleteEvent { changed: 1 });
}

//! Fire-and-forget event bus contract and implementations.

use std::sync::{Arc, Mutex};

use serde::Serialize;

/// Trait for events that can travel over the bus.
///
/// The stable type name doubles as the bus topic.
pub trait BusEvent: Serialize + Send + Sync {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;
}

/// Downstream notification channel for domain events.
///
/// Orchestrators emit each accumulated event once, in emission order, after
/// the snapshot has been saved. No acknowledgement is observed; a lost event
/// never fails the command pipeline.
pub trait EventBus<E: BusEvent>: Send + Sync {
    /// Publishes a single event.
    fn emit(&self, event: &E);
}

impl<E: BusEvent, B: EventBus<E>> EventBus<E> for Arc<B> {
    fn emit(&self, event: &E) {
        (**self).emit(event);
    }
}

/// Event bus that logs every event through `tracing`.
///
/// Stands in for dedicated event subscribers: each event is recorded at info
/// level with its type name and JSON payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventBus;

impl TracingEventBus {
    /// Creates a new tracing-backed event bus.
    pub fn new() -> Self {
        Self
    }
}

impl<E: BusEvent> EventBus<E> for TracingEventBus {
    fn emit(&self, event: &E) {
        match serde_json::to_string(event) {
            Ok(payload) => {
                tracing::info!(event = event.event_type(), %payload, "domain event");
            }
            Err(error) => {
                tracing::warn!(event = event.event_type(), %error, "unserializable domain event");
            }
        }
    }
}

/// Event bus that records emitted events in order, for tests.
#[derive(Debug, Default)]
pub struct RecordingEventBus<E> {
    events: Mutex<Vec<E>>,
}

impl<E: Clone> RecordingEventBus<E> {
    /// Creates a new empty recording bus.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Returns the events emitted so far, in emission order.
    pub fn emitted(&self) -> Vec<E> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Returns how many events have been emitted.
    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Returns true when nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: BusEvent + Clone> EventBus<E> for RecordingEventBus<E> {
    fn emit(&self, event: &E) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

//! Collaborator contracts consumed by the invitation list domain:
//! a versioned whole-aggregate snapshot store and a fire-and-forget
//! event bus, plus in-memory implementations of both.

pub mod bus;
pub mod error;
pub mod memory;
pub mod snapshot;
pub mod store;

pub use bus::{BusEvent, EventBus, RecordingEventBus, TracingEventBus};
pub use error::{ListStoreError, Result};
pub use memory::InMemoryListStore;
pub use snapshot::{GuestRecord, HouseholdRecord, ListSnapshot, Version};
pub use store::ListStore;

//! Event storage.
//!
//! `EventStore` is the five-operation contract the HTTP layer talks to.
//! Callers validate input into `EventFields` first, so stores never see
//! incomplete records.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;

use crate::error::EventResult;
use crate::event::{Event, EventFields};

/// Durable storage of events, addressed by store-assigned id.
///
/// Ids a store cannot parse are reported as `InvalidIdentifier`, unknown
/// well-formed ids as `NotFound`. Concurrent updates to one id are
/// last-write-wins.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events in storage order.
    async fn list(&self) -> EventResult<Vec<Event>>;

    async fn get(&self, id: &str) -> EventResult<Event>;

    /// Persist a new event under a freshly assigned id.
    async fn create(&self, fields: EventFields) -> EventResult<Event>;

    /// Replace every content field of an existing event.
    async fn update(&self, id: &str, fields: EventFields) -> EventResult<Event>;

    /// Remove an event. Deleting an unknown id is `NotFound`, not a no-op.
    async fn delete(&self, id: &str) -> EventResult<()>;
}

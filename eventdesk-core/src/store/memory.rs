//! In-process event store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::EventStore;
use crate::error::{EventError, EventResult};
use crate::event::{Event, EventFields, EventId};

/// Keeps events in a `Vec` in insertion order. Ids are UUID v4 strings.
#[derive(Default)]
pub struct MemoryStore {
    events: RwLock<Vec<Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn parse_id(id: &str) -> EventResult<EventId> {
    Uuid::parse_str(id)
        .map(|uuid| EventId::new(uuid.to_string()))
        .map_err(|_| EventError::InvalidIdentifier(id.to_string()))
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn list(&self) -> EventResult<Vec<Event>> {
        Ok(self.events.read().await.clone())
    }

    async fn get(&self, id: &str) -> EventResult<Event> {
        let id = parse_id(id)?;
        self.events
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(EventError::NotFound(id))
    }

    async fn create(&self, fields: EventFields) -> EventResult<Event> {
        let event = Event::new(EventId::new(Uuid::new_v4().to_string()), fields);
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn update(&self, id: &str, fields: EventFields) -> EventResult<Event> {
        let id = parse_id(id)?;
        let mut events = self.events.write().await;

        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EventError::NotFound(id))?;
        event.fields = fields;

        Ok(event.clone())
    }

    async fn delete(&self, id: &str) -> EventResult<()> {
        let id = parse_id(id)?;
        let mut events = self.events.write().await;

        let pos = events
            .iter()
            .position(|e| e.id == id)
            .ok_or(EventError::NotFound(id))?;
        events.remove(pos);

        Ok(())
    }
}

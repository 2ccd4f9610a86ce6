//! MongoDB-backed event store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::EventStore;
use crate::error::{EventError, EventResult};
use crate::event::{Event, EventFields, EventId};

/// A document in the `events` collection.
///
/// `date` is a BSON datetime at UTC midnight so that existing documents
/// holding full timestamps stay readable.
#[derive(Debug, Serialize, Deserialize)]
struct EventDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    description: String,
    date: bson::DateTime,
    time: String,
    location: String,
    organizer: String,
}

impl EventDocument {
    fn from_fields(fields: EventFields) -> Self {
        let midnight = fields.date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();

        EventDocument {
            id: None,
            title: fields.title,
            description: fields.description,
            date: bson::DateTime::from_millis(midnight.timestamp_millis()),
            time: fields.time,
            location: fields.location,
            organizer: fields.organizer,
        }
    }

    fn into_event(self) -> EventResult<Event> {
        let id = self
            .id
            .ok_or_else(|| EventError::Storage("stored event has no _id".into()))?;
        let date = chrono::DateTime::from_timestamp_millis(self.date.timestamp_millis())
            .map(|dt| dt.date_naive())
            .ok_or_else(|| {
                EventError::Storage(format!("stored event {id} has an out-of-range date"))
            })?;

        Ok(Event::new(
            EventId::new(id.to_hex()),
            EventFields {
                title: self.title,
                description: self.description,
                date,
                time: self.time,
                location: self.location,
                organizer: self.organizer,
            },
        ))
    }
}

fn parse_id(id: &str) -> EventResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| EventError::InvalidIdentifier(id.to_string()))
}

/// Event store on a MongoDB collection. Ids are ObjectIds in hex form.
pub struct MongoStore {
    collection: Collection<EventDocument>,
}

impl MongoStore {
    /// Connect and ping the deployment, so an unreachable database fails here
    /// rather than on the first request.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> EventResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await?;

        info!(database, collection, "Connected to MongoDB");

        Ok(MongoStore {
            collection: db.collection(collection),
        })
    }
}

#[async_trait]
impl EventStore for MongoStore {
    async fn list(&self) -> EventResult<Vec<Event>> {
        let docs: Vec<EventDocument> = self.collection.find(doc! {}).await?.try_collect().await?;
        debug!(count = docs.len(), "Listed events");

        docs.into_iter().map(EventDocument::into_event).collect()
    }

    async fn get(&self, id: &str) -> EventResult<Event> {
        let oid = parse_id(id)?;

        self.collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(|| EventError::NotFound(EventId::new(id)))?
            .into_event()
    }

    async fn create(&self, fields: EventFields) -> EventResult<Event> {
        let mut document = EventDocument::from_fields(fields);
        let result = self.collection.insert_one(&document).await?;

        document.id = result.inserted_id.as_object_id();
        document.into_event()
    }

    async fn update(&self, id: &str, fields: EventFields) -> EventResult<Event> {
        let oid = parse_id(id)?;
        let changes = bson::to_document(&EventDocument::from_fields(fields))
            .map_err(|e| EventError::Storage(e.to_string()))?;

        self.collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": changes })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| EventError::NotFound(EventId::new(id)))?
            .into_event()
    }

    async fn delete(&self, id: &str) -> EventResult<()> {
        let oid = parse_id(id)?;
        let result = self.collection.delete_one(doc! { "_id": oid }).await?;

        if result.deleted_count == 0 {
            return Err(EventError::NotFound(EventId::new(id)));
        }
        Ok(())
    }
}

//! Error types for eventdesk.

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur in event store operations.
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Missing or empty required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    #[error("Event not found: {0}")]
    NotFound(EventId),

    #[error("Invalid event id: {0}")]
    InvalidIdentifier(String),

    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<mongodb::error::Error> for EventError {
    fn from(err: mongodb::error::Error) -> Self {
        EventError::Storage(err.to_string())
    }
}

impl From<config::ConfigError> for EventError {
    fn from(err: config::ConfigError) -> Self {
        EventError::Config(err.to_string())
    }
}

/// Result type alias for event operations.
pub type EventResult<T> = Result<T, EventError>;

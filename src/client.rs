//! HTTP client for communicating with eventdesk-server

use std::fmt;

use reqwest::{RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, error};

use eventdesk_core::{Event, EventFields, EventInput};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// The five calls the client can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListEvents,
    GetEvent,
    CreateEvent,
    UpdateEvent,
    DeleteEvent,
}

impl Operation {
    /// Message shown to the user when this call fails, whatever the cause.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::ListEvents => "Failed to fetch events",
            Operation::GetEvent => "Failed to fetch event details",
            Operation::CreateEvent => "Failed to create event",
            Operation::UpdateEvent => "Failed to update event",
            Operation::DeleteEvent => "Failed to delete event",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Operation::ListEvents => "list events",
            Operation::GetEvent => "get event",
            Operation::CreateEvent => "create event",
            Operation::UpdateEvent => "update event",
            Operation::DeleteEvent => "delete event",
        };
        f.write_str(name)
    }
}

/// What actually went wrong. Kept for logs, never shown on its own.
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error("invalid server URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("could not reach server: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server responded {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("could not decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A failed client call, displayed as the operation's static message.
#[derive(Debug, Error)]
#[error("{}", .operation.failure_message())]
pub struct ClientError {
    pub operation: Operation,
    #[source]
    pub cause: FailureCause,
}

impl ClientError {
    /// Report this failure as part of a different operation, keeping the cause.
    pub fn during(self, operation: Operation) -> Self {
        ClientError {
            operation,
            cause: self.cause,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Confirmation returned by DELETE
#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// HTTP client for eventdesk-server
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn events_url(&self) -> String {
        format!("{}/api/events", self.base_url)
    }

    /// The id is pushed as a single percent-encoded path segment, so `?`,
    /// `#` or `/` in it cannot address a different resource.
    fn event_url(&self, id: &str) -> Result<Url, FailureCause> {
        let invalid = |reason: String| FailureCause::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.events_url()).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base".to_string()))?
            .push(id);

        Ok(url)
    }

    /// GET / - the server's liveness string
    pub async fn ping(&self) -> Result<String, reqwest::Error> {
        self.http
            .get(format!("{}/", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }

    /// GET /api/events
    pub async fn list_events(&self) -> ClientResult<Vec<Event>> {
        self.call(Operation::ListEvents, Ok(self.http.get(self.events_url())))
            .await
    }

    /// GET /api/events/:id
    pub async fn get_event(&self, id: &str) -> ClientResult<Event> {
        let request = self.event_url(id).map(|url| self.http.get(url));
        self.call(Operation::GetEvent, request).await
    }

    /// POST /api/events
    pub async fn create_event(&self, fields: EventFields) -> ClientResult<Event> {
        let body = EventInput::from(fields);
        self.call(
            Operation::CreateEvent,
            Ok(self.http.post(self.events_url()).json(&body)),
        )
        .await
    }

    /// PUT /api/events/:id
    pub async fn update_event(&self, id: &str, fields: EventFields) -> ClientResult<Event> {
        let body = EventInput::from(fields);
        let request = self.event_url(id).map(|url| self.http.put(url).json(&body));
        self.call(Operation::UpdateEvent, request).await
    }

    /// DELETE /api/events/:id
    pub async fn delete_event(&self, id: &str) -> ClientResult<DeleteResponse> {
        let request = self.event_url(id).map(|url| self.http.delete(url));
        self.call(Operation::DeleteEvent, request).await
    }

    /// Send one request and collapse every failure into a `ClientError`.
    async fn call<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: Result<RequestBuilder, FailureCause>,
    ) -> ClientResult<T> {
        debug!(%operation, "Sending request");

        self.round_trip(request).await.map_err(|cause| {
            error!(%operation, error = %cause, "Request failed");
            ClientError { operation, cause }
        })
    }

    async fn round_trip<T: DeserializeOwned>(
        &self,
        request: Result<RequestBuilder, FailureCause>,
    ) -> Result<T, FailureCause> {
        let resp = request?.send().await.map_err(FailureCause::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(FailureCause::Status { status, message });
        }

        resp.json().await.map_err(FailureCause::Decode)
    }
}

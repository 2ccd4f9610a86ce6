pub mod events;
pub mod health;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eventdesk_core::EventError;
use serde::Serialize;
use tracing::error;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert store and request errors to HTTP responses
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<EventError>() {
            return match err {
                EventError::Validation(_) | EventError::InvalidIdentifier(_) => {
                    StatusCode::BAD_REQUEST
                }
                EventError::NotFound(_) => StatusCode::NOT_FOUND,
                EventError::Storage(_) | EventError::Config(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
        }

        if self.0.downcast_ref::<JsonRejection>().is_some() {
            return StatusCode::BAD_REQUEST;
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

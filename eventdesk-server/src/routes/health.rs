//! Liveness endpoint

use axum::{Router, routing::get};

use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "Event Management System API is running";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(liveness))
}

/// GET / - Plain-text liveness string
async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

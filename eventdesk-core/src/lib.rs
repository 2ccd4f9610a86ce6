//! Core types for eventdesk.
//!
//! This crate provides the pieces shared by the server and the client:
//! - `Event` and its wire representations
//! - `EventStore` and the in-memory / MongoDB backends behind it
//! - `ServerConfig` for the HTTP service

pub mod config;
pub mod error;
pub mod event;
pub mod store;

pub use error::{EventError, EventResult};
pub use event::*;

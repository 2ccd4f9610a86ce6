//! Client side of eventdesk: a typed HTTP client and its terminal views.

pub mod client;
pub mod render;

pub use client::{Client, ClientError, ClientResult, Operation};

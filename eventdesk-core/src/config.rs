//! Server configuration.

use std::collections::HashMap;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::EventResult;

const CONFIG_FILE: &str = "eventdesk";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE: &str = "eventdesk";
const DEFAULT_COLLECTION: &str = "events";

/// Configuration for eventdesk-server.
///
/// Read from an optional `eventdesk.toml` in the working directory, then
/// overridden by environment variables (`PORT`, `HOST`, `MONGODB_URI`,
/// `MONGODB_DATABASE`, `MONGODB_COLLECTION`).
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Without a URI the server keeps events in memory.
    pub mongodb_uri: Option<String>,
    pub mongodb_database: String,
    pub mongodb_collection: String,
}

impl ServerConfig {
    /// Load from `.env`, `eventdesk.toml` and the process environment.
    pub fn load() -> EventResult<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(None)
    }

    /// Load with an explicit environment map instead of the process
    /// environment. `None` reads the real environment.
    pub fn load_from(env: Option<HashMap<String, String>>) -> EventResult<Self> {
        let config: ServerConfig = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("mongodb_database", DEFAULT_DATABASE)?
            .set_default("mongodb_collection", DEFAULT_COLLECTION)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::default().try_parsing(true).source(env))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

//! Runtime configuration
//!
//! The server has no CLI surface; the bind address comes from environment
//! variables with sensible defaults.

use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Server bind configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load from `INBOX_HOST` / `INBOX_PORT`, falling back to defaults.
    /// An unparseable port falls back rather than aborting startup.
    pub fn from_env() -> Self {
        let host = env::var("INBOX_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("INBOX_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { host, port }
    }

    /// Address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

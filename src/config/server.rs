//! Server process configuration.

use std::env;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// Log line formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Configuration for the HTTP listener and log output
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = lookup("BIND_ADDRESS")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let log_format = lookup("LOG_FORMAT")
            .map(|v| {
                if v.eq_ignore_ascii_case("json") {
                    LogFormat::Json
                } else {
                    LogFormat::Text
                }
            })
            .unwrap_or(LogFormat::Text);

        Self {
            bind_address,
            log_format,
        }
    }
}

//! Host configuration parsed from environment variables.

use triage::{ApiConfig, DEFAULT_API_BASE_URL};

use crate::ServerError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TRIAGE_API_BASE_URL`: classification backend, default `http://127.0.0.1:5000`
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api_base = std::env::var("TRIAGE_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Ok(Self {
            port,
            api: ApiConfig::new(&api_base),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ServerError::Config(format!("invalid PORT: {value}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

// * Client configuration loaded from JSON or built from defaults

use crate::config::constants::{DEBUG_NETWORK_LATENCY_MS, REQUEST_TIMEOUT_MS};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse client config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid base URL '{0}': {1}")]
    InvalidBaseUrl(String, url::ParseError),

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Settings for [`crate::network::client::TemplateClient`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every request path is resolved against.
    pub base_url: String,
    pub timeout_ms: u64,
    /// Sleep injected before each send, for exercising progress UIs.
    pub debug_latency_ms: u64,
    /// Pin the transport to HTTP/1.1.
    pub http1_only: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost/".to_string(),
            timeout_ms: REQUEST_TIMEOUT_MS,
            debug_latency_ms: DEBUG_NETWORK_LATENCY_MS,
            http1_only: true,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    // * Parses and validates a JSON document. Missing keys fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_base_url()?;
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    // * Base URL with a guaranteed trailing slash so relative joins keep the last segment.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let mut raw = self.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl(self.base_url.clone(), e))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn debug_latency(&self) -> Option<Duration> {
        (self.debug_latency_ms > 0).then(|| Duration::from_millis(self.debug_latency_ms))
    }
}

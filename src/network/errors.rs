use thiserror::Error;

// * Unified Error type for the Network Layer.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, url::ParseError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigError),
}

// * Telemetry - structured logging setup
// * RUST_LOG overrides the fallback level in every initializer

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter_or(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initializes the tracing subscriber with JSON formatting
///
/// # Example
/// ```ignore
/// use request_outcome::ops::telemetry;
///
/// telemetry::init_tracing()?;
/// tracing::info!(request = "GET https://example.com/#0", "Enqueued");
/// ```
pub fn init_tracing() -> Result<(), TryInitError> {
    init_tracing_with_level("info")
}

/// Initializes tracing with custom log level
pub fn init_tracing_with_level(level: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter_or(level))
        .with(fmt::layer().json())
        .try_init()
}

/// Initializes tracing with pretty formatting (for development)
pub fn init_tracing_pretty() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(env_filter_or("debug"))
        .with(fmt::layer().pretty())
        .try_init()
}

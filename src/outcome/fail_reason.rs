use serde::Serialize;

/// Category explaining why a request is treated as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailReason {
    /// Networking is switched off on the device/host level.
    NetworkingDisabled,
    /// The server rejected the caller's credentials (401/403).
    AuthError,
    /// The server failed to handle the request (5xx).
    ServerError,
    Other,
}

impl std::fmt::Display for FailReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailReason::NetworkingDisabled => write!(f, "NETWORKING_DISABLED"),
            FailReason::AuthError => write!(f, "AUTH_ERROR"),
            FailReason::ServerError => write!(f, "SERVER_ERROR"),
            FailReason::Other => write!(f, "OTHER"),
        }
    }
}

// * Maps a completed response (or a transport error) onto a single Outcome
// * Priority: networking disabled > auth error > server error > other

use crate::config::constants::{AUTH_ERROR_STATUSES, SERVER_ERROR_STATUSES};
use crate::outcome::probe::{AlwaysEnabled, NetworkingProbe};
use crate::outcome::{CallResponse, FailReason, Outcome, RequestDescriptor};
use tracing::error;

#[derive(Debug, Clone, Default)]
pub struct OutcomeClassifier<P = AlwaysEnabled> {
    probe: P,
}

impl OutcomeClassifier<AlwaysEnabled> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: NetworkingProbe> OutcomeClassifier<P> {
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    pub fn classify_response<S>(
        &self,
        request: &RequestDescriptor,
        response: CallResponse<S>,
    ) -> Outcome<S> {
        if self.is_request_successful(&response) {
            return Outcome::Success(response.body);
        }

        let reason = if self.is_networking_disabled() {
            FailReason::NetworkingDisabled
        } else if self.is_auth_error(&response) {
            FailReason::AuthError
        } else if self.is_server_error(request, &response) {
            FailReason::ServerError
        } else {
            FailReason::Other
        };

        Outcome::failure(reason, request.clone())
    }

    // * Transport-level failure: the caller decides the reason, we only log
    pub fn classify_error<S, E>(
        &self,
        request: &RequestDescriptor,
        err: &E,
        reason: FailReason,
    ) -> Outcome<S>
    where
        E: std::error::Error + ?Sized,
    {
        error!(request = %request, error = %err, reason = %reason, "Request failed");
        Outcome::failure(reason, request.clone())
    }

    pub fn is_request_successful<S>(&self, response: &CallResponse<S>) -> bool {
        response.success
    }

    pub fn is_networking_disabled(&self) -> bool {
        self.probe.is_networking_disabled()
    }

    pub fn is_auth_error<S>(&self, response: &CallResponse<S>) -> bool {
        AUTH_ERROR_STATUSES.contains(&response.status)
    }

    // * Logs at error level when matched
    pub fn is_server_error<S>(
        &self,
        request: &RequestDescriptor,
        response: &CallResponse<S>,
    ) -> bool {
        let server_error = SERVER_ERROR_STATUSES.contains(&response.status);
        if server_error {
            error!(request = %request, status = response.status, "Server error occurred");
        }
        server_error
    }
}

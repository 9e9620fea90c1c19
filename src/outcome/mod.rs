// * Request outcome classification
// * Turns one response/error pair into a single Outcome and hands it to an observer

pub mod classifier;
pub mod fail_reason;
pub mod observer;
pub mod probe;
pub mod request;
pub mod response;

pub use classifier::OutcomeClassifier;
pub use fail_reason::FailReason;
pub use observer::{FnObserver, OutcomeObserver};
pub use probe::{AlwaysEnabled, NetworkingProbe};
pub use request::RequestDescriptor;
pub use response::CallResponse;

/// Why a request failed, and which request it was.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestFailure {
    pub reason: FailReason,
    pub request: RequestDescriptor,
}

/// Result of classifying one request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<S> {
    Success(Option<S>),
    Failure(RequestFailure),
}

impl<S> Outcome<S> {
    pub fn failure(reason: FailReason, request: RequestDescriptor) -> Self {
        Outcome::Failure(RequestFailure { reason, request })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn fail_reason(&self) -> Option<FailReason> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure.reason),
        }
    }

    // * Invokes exactly one observer callback
    pub fn dispatch<O>(self, observer: &O)
    where
        O: OutcomeObserver<S> + ?Sized,
    {
        match self {
            Outcome::Success(body) => observer.on_success(body),
            Outcome::Failure(failure) => observer.on_failure(failure),
        }
    }
}

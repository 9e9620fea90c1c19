use crate::outcome::{FailReason, RequestDescriptor, RequestFailure};

/// Receiver of request lifecycle notifications.
///
/// For every request `on_request_in_progress` fires first, followed by
/// exactly one of `on_success`, `on_failure` or `on_auth_token_missing`.
pub trait OutcomeObserver<S> {
    /// Gives a UI the chance to start a progress indicator.
    fn on_request_in_progress(&self) {}

    fn on_success(&self, body: Option<S>);

    fn on_failure(&self, failure: RequestFailure);

    /// A secured request was never sent because no auth token was available.
    ///
    /// The token provider is expected to have already prompted for
    /// authentication. Override this to skip a second auth message. By
    /// default it is reported as an `AuthError` failure.
    fn on_auth_token_missing(&self, request: RequestDescriptor) {
        self.on_failure(RequestFailure {
            reason: FailReason::AuthError,
            request,
        });
    }
}

// * Adapts a pair of closures into an observer
pub struct FnObserver<FS, FF> {
    on_success: FS,
    on_failure: FF,
}

impl<FS, FF> FnObserver<FS, FF> {
    pub fn new(on_success: FS, on_failure: FF) -> Self {
        Self {
            on_success,
            on_failure,
        }
    }
}

impl<S, FS, FF> OutcomeObserver<S> for FnObserver<FS, FF>
where
    FS: Fn(Option<S>),
    FF: Fn(RequestFailure),
{
    fn on_success(&self, body: Option<S>) {
        (self.on_success)(body)
    }

    fn on_failure(&self, failure: RequestFailure) {
        (self.on_failure)(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use reqwest::Method;
    use std::cell::RefCell;
    use url::Url;

    fn request() -> RequestDescriptor {
        RequestDescriptor::new(Method::GET, Url::parse("https://a.example/x").unwrap(), false)
    }

    #[test]
    fn test_dispatch_success_calls_only_on_success() {
        let calls = RefCell::new(Vec::new());
        let observer = FnObserver::new(
            |body: Option<u32>| calls.borrow_mut().push(format!("ok:{:?}", body)),
            |f: RequestFailure| calls.borrow_mut().push(format!("fail:{}", f.reason)),
        );

        Outcome::Success(Some(7u32)).dispatch(&observer);
        assert_eq!(*calls.borrow(), vec!["ok:Some(7)".to_string()]);
    }

    #[test]
    fn test_dispatch_failure_carries_request() {
        let seen = RefCell::new(None);
        let observer = FnObserver::new(
            |_: Option<()>| panic!("success must not fire"),
            |f: RequestFailure| *seen.borrow_mut() = Some(f),
        );
        let req = request();

        Outcome::<()>::failure(FailReason::ServerError, req.clone()).dispatch(&observer);

        let failure = seen.into_inner().unwrap();
        assert_eq!(failure.reason, FailReason::ServerError);
        assert_eq!(failure.request, req);
    }

    #[test]
    fn test_missing_token_defaults_to_auth_error() {
        let seen = RefCell::new(None);
        let observer = FnObserver::new(
            |_: Option<()>| panic!("success must not fire"),
            |f: RequestFailure| *seen.borrow_mut() = Some(f),
        );
        let req = request();

        OutcomeObserver::<()>::on_auth_token_missing(&observer, req.clone());

        let failure = seen.into_inner().unwrap();
        assert_eq!(failure.reason, FailReason::AuthError);
        assert_eq!(failure.request, req);
    }
}

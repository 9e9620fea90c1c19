use crate::config::ClientConfig;
use crate::network::auth::{AuthToken, AuthTokenProvider};
use crate::network::errors::NetworkError;
use crate::outcome::{
    AlwaysEnabled, CallResponse, FailReason, NetworkingProbe, Outcome, OutcomeClassifier,
    OutcomeObserver, RequestDescriptor,
};
use reqwest::cookie::Jar;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

// * HTTP transport that classifies every completed request and reports it to an observer.
pub struct TemplateClient<P = AlwaysEnabled> {
    inner: Client,
    base_url: Url,
    debug_latency: Option<Duration>,
    classifier: Arc<OutcomeClassifier<P>>,
    auth: Option<Arc<dyn AuthTokenProvider>>,
    // * Shared with the reqwest client; session cookies are installed here
    jar: Arc<Jar>,
}

// * A secured request either went out and completed, or was held back for lack of a token
enum Attempt<S> {
    Completed(Outcome<S>),
    TokenMissing,
}

impl<P> Clone for TemplateClient<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            base_url: self.base_url.clone(),
            debug_latency: self.debug_latency,
            classifier: Arc::clone(&self.classifier),
            auth: self.auth.clone(),
            jar: Arc::clone(&self.jar),
        }
    }
}

impl TemplateClient<AlwaysEnabled> {
    // * Builds the underlying reqwest client from validated config.
    pub fn new(config: &ClientConfig) -> Result<Self, NetworkError> {
        config.validate()?;

        let jar = Arc::new(Jar::default());
        let mut builder = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(config.timeout());

        if config.http1_only {
            builder = builder.http1_only();
        }

        Ok(Self {
            inner: builder.build()?,
            base_url: config.parsed_base_url()?,
            debug_latency: config.debug_latency(),
            classifier: Arc::new(OutcomeClassifier::new()),
            auth: None,
            jar,
        })
    }
}

impl<P: NetworkingProbe> TemplateClient<P> {
    pub fn with_auth(mut self, provider: Arc<dyn AuthTokenProvider>) -> Self {
        self.auth = Some(provider);
        self
    }

    // * Swaps the networking-disabled signal used by the classifier
    pub fn with_probe<Q: NetworkingProbe>(self, probe: Q) -> TemplateClient<Q> {
        TemplateClient {
            inner: self.inner,
            base_url: self.base_url,
            debug_latency: self.debug_latency,
            classifier: Arc::new(OutcomeClassifier::with_probe(probe)),
            auth: self.auth,
            jar: self.jar,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // * Resolves `path` against the base URL
    pub fn descriptor(
        &self,
        method: Method,
        path: &str,
        secured: bool,
    ) -> Result<RequestDescriptor, NetworkError> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| NetworkError::InvalidUrl(path.to_string(), e))?;
        Ok(RequestDescriptor::new(method, url, secured))
    }

    /// Executes `request` and reports the result to `observer`.
    ///
    /// `on_request_in_progress` fires before anything else (including the
    /// debug latency sleep), then exactly one of `on_success`, `on_failure`
    /// or `on_auth_token_missing`. Errors never escape as `Err`.
    pub async fn enqueue<S, O>(&self, request: &RequestDescriptor, observer: &O)
    where
        S: DeserializeOwned,
        O: OutcomeObserver<S> + ?Sized,
    {
        observer.on_request_in_progress();
        match self.attempt::<S>(request).await {
            Attempt::Completed(outcome) => outcome.dispatch(observer),
            Attempt::TokenMissing => observer.on_auth_token_missing(request.clone()),
        }
    }

    // * Executes `request` and returns the classified outcome without dispatching it.
    // * A secured request held back for lack of a token resolves to AuthError here.
    pub async fn execute<S: DeserializeOwned>(&self, request: &RequestDescriptor) -> Outcome<S> {
        match self.attempt::<S>(request).await {
            Attempt::Completed(outcome) => outcome,
            Attempt::TokenMissing => Outcome::failure(FailReason::AuthError, request.clone()),
        }
    }

    async fn attempt<S: DeserializeOwned>(&self, request: &RequestDescriptor) -> Attempt<S> {
        if request.is_secured() {
            match self.installed_token() {
                Some(token) => self.install_session_cookie(&token),
                None => {
                    info!(
                        request = %request,
                        "Request not sent due to missing auth token"
                    );
                    return Attempt::TokenMissing;
                }
            }
        }

        if let Some(latency) = self.debug_latency {
            tokio::time::sleep(latency).await;
        }

        let builder = self
            .inner
            .request(request.method().clone(), request.url().clone());

        let outcome = match self.send::<S>(request, builder).await {
            Ok(response) => self.classifier.classify_response(request, response),
            Err(e) => self.classifier.classify_error(request, &e, FailReason::Other),
        };
        Attempt::Completed(outcome)
    }

    fn installed_token(&self) -> Option<AuthToken> {
        self.auth.as_ref().and_then(|provider| provider.auth_token())
    }

    // * Goes through the jar so cookies set earlier by the server still go out
    fn install_session_cookie(&self, token: &AuthToken) {
        self.jar.add_cookie_str(&token.set_cookie_header(), &token.uri);
    }

    // * Error bodies are discarded; 2xx bodies are decoded as JSON (empty = None).
    async fn send<S: DeserializeOwned>(
        &self,
        request: &RequestDescriptor,
        builder: RequestBuilder,
    ) -> Result<CallResponse<S>, NetworkError> {
        debug!(request = %request, "Sending request");

        let resp = builder.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body_len = resp.bytes().await.map(|b| b.len()).unwrap_or(0);
            debug!(
                request = %request,
                status = status.as_u16(),
                body_len,
                "Received response"
            );
            return Ok(CallResponse::from_status(status.as_u16(), None));
        }

        let bytes = resp.bytes().await?;
        debug!(
            request = %request,
            status = status.as_u16(),
            body_len = bytes.len(),
            "Received response"
        );

        let body = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(&bytes)?)
        };

        Ok(CallResponse::new(status.as_u16(), body, true))
    }
}

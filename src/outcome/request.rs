// * Opaque handle identifying one outbound request, used for log correlation

use reqwest::Method;
use std::sync::atomic::{AtomicU64, Ordering};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    id: u64,
    method: Method,
    url: Url,
    secured: bool,
}

impl RequestDescriptor {
    // * Ids are process-unique and monotonically increasing
    pub fn new(method: Method, url: Url, secured: bool) -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self {
            id: COUNTER.fetch_add(1, Ordering::Relaxed),
            method,
            url,
            secured,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Whether an auth token must be installed before the request is sent.
    pub fn is_secured(&self) -> bool {
        self.secured
    }
}

impl std::fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}#{}", self.method, self.url, self.id)
    }
}

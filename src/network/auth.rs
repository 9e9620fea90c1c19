// * Auth tokens consulted before secured requests are sent

use crate::config::constants::SESSION_COOKIE_KEY;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub session_id: String,
    /// URI the session cookie is scoped to.
    pub uri: Url,
}

impl AuthToken {
    pub fn new(session_id: impl Into<String>, uri: Url) -> Self {
        Self {
            session_id: session_id.into(),
            uri,
        }
    }

    // * `Cookie` header value carrying the session id
    pub fn session_cookie(&self) -> String {
        format!("{}={}", SESSION_COOKIE_KEY, self.session_id)
    }

    // * `Set-Cookie` form installed into the cookie jar for `uri`, valid for every path
    pub fn set_cookie_header(&self) -> String {
        format!("{}; Path=/", self.session_cookie())
    }
}

/// Source of the token installed on secured requests.
///
/// Returning `None` means no valid session exists; the request is then
/// failed without being sent.
pub trait AuthTokenProvider: Send + Sync {
    fn auth_token(&self) -> Option<AuthToken>;
}

// * Fixed token, or none at all
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<AuthToken>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<AuthToken>) -> Self {
        Self { token }
    }
}

impl AuthTokenProvider for StaticTokenProvider {
    fn auth_token(&self) -> Option<AuthToken> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_format() {
        let token = AuthToken::new("abc123", Url::parse("https://auth.example.com/").unwrap());
        assert_eq!(token.session_cookie(), "JSESSIONID=abc123");
        assert_eq!(token.set_cookie_header(), "JSESSIONID=abc123; Path=/");
    }

    #[test]
    fn test_static_provider_without_token() {
        assert!(StaticTokenProvider::default().auth_token().is_none());
    }
}

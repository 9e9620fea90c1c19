pub mod auth;
pub mod client;
pub mod errors;

pub use auth::{AuthToken, AuthTokenProvider, StaticTokenProvider};
pub use client::TemplateClient;
pub use errors::NetworkError;
